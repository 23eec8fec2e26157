#[cfg(test)]
mod verify {
    use std::fs;
    use std::path::{Path, PathBuf};

    use ingredients::output::Sequence;
    use ingredients::parsing::{self, Keywords};
    use ingredients::scaling::Page;

    fn collect(dir: &Path) -> Vec<PathBuf> {
        assert!(dir.exists(), "{:?} directory missing", dir);

        let entries = fs::read_dir(dir).expect("Failed to read directory");

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.expect("Failed to read directory entry");
            let path = entry.path();

            if path
                .extension()
                .and_then(|s| s.to_str())
                == Some("txt")
            {
                files.push(path);
            }
        }

        assert!(!files.is_empty(), "No .txt files found in {:?}", dir);
        files
    }

    fn keywords_for(file: &Path) -> Keywords {
        let french = file
            .file_stem()
            .and_then(|s| s.to_str())
            .map(|s| s.starts_with("french"))
            .unwrap_or(false);

        if french {
            Keywords::french()
        } else {
            Keywords::default()
        }
    }

    /// Count everything that went wrong reading and assembling a file.
    fn problems(file: &Path) -> usize {
        let content = parsing::load(file)
            .unwrap_or_else(|e| panic!("Failed to load file {:?}: {:?}", file, e));

        let recipes = parsing::parse_page(&keywords_for(file), &content);

        let mut count = 0;
        for recipe in &recipes {
            for error in recipe.errors() {
                println!("File {:?}: {}", file, error);
                count += 1;
            }
        }

        let mut sequence = Sequence::new();
        let mut page = Page::new(
            recipes
                .iter()
                .map(|recipe| recipe.to_output(&mut sequence))
                .collect(),
        );

        for error in page.run_triggers() {
            println!("File {:?}: {}", file, error);
            count += 1;
        }

        count
    }

    #[test]
    fn ensure_samples_clean() {
        let files = collect(Path::new("tests/samples/"));

        let mut failures = Vec::new();
        for file in &files {
            if problems(file) > 0 {
                failures.push(file.clone());
            }
        }

        if !failures.is_empty() {
            panic!(
                "Sample files should build without warnings, but {} files did not",
                failures.len()
            );
        }
    }

    #[test]
    fn ensure_broken_warn() {
        let files = collect(Path::new("tests/broken/"));

        let mut unexpected_successes = Vec::new();
        for file in &files {
            if problems(file) == 0 {
                println!("File {:?} unexpectedly built cleanly", file);
                unexpected_successes.push(file.clone());
            }
        }

        if !unexpected_successes.is_empty() {
            panic!(
                "Broken files should record warnings, but {} files did not",
                unexpected_successes.len()
            );
        }
    }
}
