use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use owo_colors::OwoColorize;
use std::io::IsTerminal;
use std::path::Path;
use tracing::{debug, Level};

use ingredients::formatting::Identity;
use ingredients::output::{self, Sequence, Trigger};
use ingredients::parsing::{self, Keywords};
use ingredients::rendering::{self, Terminal};
use ingredients::scaling::{Commit, FieldRef, Page};

mod problem;

fn main() {
    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    let filename = Arg::new("filename")
        .required(true)
        .help("A file with one or more <ingredients> blocks, or a bare ingredient list.");

    let matches = Command::new("ingredients")
        .version(VERSION)
        .propagate_version(true)
        .about("Nested ingredient lists with automatic totals and scaling.")
        .disable_help_subcommand(true)
        .arg(
            Arg::new("keywords")
                .long("keywords")
                .global(true)
                .value_parser(["english", "french"])
                .default_value("english")
                .help("Which words introduce variant, overall quantity, and command lines."),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log what is being parsed, built, and scaled."),
        )
        .subcommand(
            Command::new("check")
                .about("Read the given recipes and report any problems found")
                .arg(filename.clone()),
        )
        .subcommand(
            Command::new("render")
                .about("Show the given recipes with their totals")
                .arg(
                    Arg::new("raw-control-chars")
                        .short('R')
                        .long("raw-control-chars")
                        .action(ArgAction::SetTrue)
                        .help("Emit ANSI escape codes for highlighting even if output is redirected to a pipe or file."),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Emit the output payload as JSON instead."),
                )
                .arg(
                    Arg::new("total")
                        .long("total")
                        .value_parser(value_parser!(f64))
                        .help("Scale a recipe so that its total comes to this amount."),
                )
                .arg(
                    Arg::new("recipe")
                        .long("recipe")
                        .value_parser(value_parser!(usize))
                        .default_value("1")
                        .help("Which recipe in the file, counting from 1, --total applies to."),
                )
                .arg(filename.clone()),
        )
        .subcommand(
            Command::new("script")
                .about("Emit the script carrying out the commands in the given recipes")
                .arg(filename),
        )
        .get_matches();

    let level = if matches.get_flag("verbose") {
        Level::DEBUG
    } else {
        Level::WARN
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();

    let keywords = matches
        .get_one::<String>("keywords")
        .and_then(|name| Keywords::named(name))
        .unwrap_or_default();

    debug!(?keywords);

    match matches.subcommand() {
        Some(("check", submatches)) => check(&keywords, submatches),
        Some(("render", submatches)) => render(&keywords, submatches),
        Some(("script", submatches)) => script(&keywords, submatches),
        Some(_) => {
            println!("No valid subcommand was used")
        }
        None => {
            println!("usage: ingredients [COMMAND] ...");
            println!("Try '--help' for more information.");
        }
    }
}

/// Load the file named on the command line, or exit with an explanation.
fn load(submatches: &ArgMatches) -> (&Path, String) {
    let filename = match submatches.get_one::<String>("filename") {
        Some(filename) => Path::new(filename),
        None => {
            eprintln!("{}: no file given", "error".bright_red());
            std::process::exit(1);
        }
    };

    match parsing::load(filename) {
        Ok(content) => (filename, content),
        Err(error) => {
            eprintln!("{}", problem::concise_loading_error(&error));
            std::process::exit(1);
        }
    }
}

/// Parse every recipe in `content` and assemble them into one page, with
/// their commands already carried out.
fn assemble(keywords: &Keywords, filename: &Path, content: &str) -> (Page, usize) {
    let recipes = parsing::parse_page(keywords, content);

    let mut warnings = 0;
    for (i, recipe) in recipes
        .iter()
        .enumerate()
    {
        for error in recipe.errors() {
            eprintln!(
                "{}",
                problem::concise_recipe_warning(filename, i + 1, &error.to_string())
            );
            warnings += 1;
        }
    }

    let mut sequence = Sequence::new();
    let outputs = recipes
        .iter()
        .map(|recipe| recipe.to_output(&mut sequence))
        .collect();

    let mut page = Page::new(outputs);

    for error in page.run_triggers() {
        eprintln!("{}", problem::concise_scaling_error(filename, &error));
        warnings += 1;
    }

    (page, warnings)
}

fn check(keywords: &Keywords, submatches: &ArgMatches) {
    let (filename, content) = load(submatches);
    let (page, warnings) = assemble(keywords, filename, &content);

    debug!(
        recipes = page
            .outputs()
            .len(),
        warnings
    );

    if warnings > 0 {
        std::process::exit(1);
    }
}

fn render(keywords: &Keywords, submatches: &ArgMatches) {
    let (filename, content) = load(submatches);
    let (mut page, _) = assemble(keywords, filename, &content);

    if let Some(total) = submatches.get_one::<f64>("total") {
        let recipe = submatches
            .get_one::<usize>("recipe")
            .copied()
            .unwrap_or(1);

        if let Err(problem) = impose_total(&mut page, recipe, *total) {
            eprintln!("{}: {}", "error".bright_red(), problem);
            std::process::exit(1);
        }
    }

    if submatches.get_flag("json") {
        match output::to_json(page.outputs()) {
            Ok(json) => println!("{}", json),
            Err(error) => {
                eprintln!("{}: {}", "error".bright_red(), error);
                std::process::exit(1);
            }
        }
        return;
    }

    let result = if submatches.get_flag("raw-control-chars") || std::io::stdout().is_terminal() {
        rendering::render(&Terminal, page.outputs())
    } else {
        rendering::render(&Identity, page.outputs())
    };

    print!("{}", result);
}

/// Set the visible total of the `recipe`-th recipe (from 1); the other
/// variants follow in proportion.
fn impose_total(page: &mut Page, recipe: usize, total: f64) -> Result<(), String> {
    let index = recipe
        .checked_sub(1)
        .ok_or_else(|| "recipes are counted from 1".to_string())?;

    let output = page
        .outputs()
        .get(index)
        .ok_or_else(|| format!("there is no recipe #{}", recipe))?;

    let Some((variant, shown)) = output
        .variants
        .iter()
        .enumerate()
        .find(|(_, variant)| variant.visible)
    else {
        return Err(format!("recipe #{} has no ingredients", recipe));
    };

    let at = FieldRef {
        recipe: index,
        variant,
        field: shown
            .total
            .field,
    };

    page.edit(at, total, Commit::Yes)
        .map_err(|error| error.to_string())
}

fn script(keywords: &Keywords, submatches: &ArgMatches) {
    let (filename, content) = load(submatches);

    let mut sequence = Sequence::new();
    let triggers: Vec<Trigger> = parsing::parse_page(keywords, &content)
        .iter()
        .flat_map(|recipe| {
            recipe
                .to_output(&mut sequence)
                .triggers
        })
        .collect();

    debug!("{}: {} triggers", filename.display(), triggers.len());

    match output::to_script(&triggers) {
        Ok(script) => print!("{}", script),
        Err(error) => {
            eprintln!("{}: {}", "error".bright_red(), error);
            std::process::exit(1);
        }
    }
}
