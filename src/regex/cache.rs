/// Compile the given pattern on first use and hand back the same `Regex`
/// on every call after that. Patterns are literals in our own source, so a
/// failure to compile is a programming error.
macro_rules! regex {
    ($pattern:expr) => {{
        use std::sync::OnceLock;
        static REGEX: OnceLock<::regex::Regex> = OnceLock::new();
        REGEX.get_or_init(|| ::regex::Regex::new($pattern).unwrap_or_else(|e| panic!("{}", e)))
    }};
}

pub(crate) use regex;
