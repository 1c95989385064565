//! Command-line interface for tagtree
//! This binary renders JSON or YAML document descriptions to formatted markup.
//!
//! Usage:
//!   tagtree render `<path>` [--format `<format>`] [--config `<file>`]   - Render a description
//!   tagtree tree `<path>` [--input `<syntax>`]                          - Print the parsed node tree as JSON
//!   tagtree formats                                                    - List the available output formats
//!
//! Settings are layered: built-in defaults, then `tagtree.toml` in the working directory
//! if present, then `--config`, then individual flags.

mod render;

use clap::{Arg, ArgAction, ArgMatches, Command};
use std::path::Path;
use tagtree::FormatRegistry;
use tagtree_config::{Loader, TagtreeConfig};

const PROJECT_CONFIG: &str = "tagtree.toml";

fn build_cli() -> Command {
    let input_arg = Arg::new("input")
        .long("input")
        .short('i')
        .help("Description syntax (default: from the file extension)")
        .value_parser(["auto", "json", "yaml"]);

    Command::new("tagtree")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render document descriptions to formatted markup")
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log debug output to stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("render")
                .about("Render a JSON or YAML description")
                .arg(
                    Arg::new("path")
                        .help("Path to the description file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (html, xhtml, html-compact)"),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .short('c')
                        .help("Configuration file layered over the defaults"),
                )
                .arg(
                    Arg::new("tab")
                        .long("tab")
                        .help("String written once per nesting level")
                        .allow_hyphen_values(true),
                )
                .arg(
                    Arg::new("indent")
                        .long("indent")
                        .help("Prefix written before every indented line")
                        .allow_hyphen_values(true),
                )
                .arg(
                    Arg::new("elide-end-tags")
                        .long("elide-end-tags")
                        .help("Write childless elements as <tag/>")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("wrap")
                        .long("wrap")
                        .help("Give this tag its own line (repeatable)")
                        .action(ArgAction::Append),
                )
                .arg(input_arg.clone())
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Write to this file instead of stdout"),
                ),
        )
        .subcommand(
            Command::new("tree")
                .about("Print the node tree a description builds, as JSON")
                .arg(
                    Arg::new("path")
                        .help("Path to the description file")
                        .required(true)
                        .index(1),
                )
                .arg(input_arg),
        )
        .subcommand(Command::new("formats").about("List the available output formats"))
}

fn main() {
    let matches = build_cli().get_matches();
    init_logging(matches.get_flag("verbose"));

    let result = match matches.subcommand() {
        Some(("render", sub)) => handle_render_command(sub),
        Some(("tree", sub)) => handle_tree_command(sub),
        Some(("formats", _)) => {
            handle_formats_command();
            Ok(())
        }
        _ => Err("Unknown command, see --help".to_string()),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

/// Layer the configuration sources for a `render` invocation
fn load_config(matches: &ArgMatches) -> Result<TagtreeConfig, String> {
    let mut loader = Loader::new().with_optional_file(PROJECT_CONFIG);
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }

    let overrides = [
        ("format", "render.format"),
        ("input", "render.input"),
        ("tab", "formatting.tab"),
        ("indent", "formatting.indent"),
    ];
    for (arg, key) in overrides {
        if let Some(value) = matches.get_one::<String>(arg) {
            loader = loader
                .set_override(key, value.as_str())
                .map_err(|e| format!("Configuration error: {}", e))?;
        }
    }
    if matches.get_flag("elide-end-tags") {
        loader = loader
            .set_override("formatting.elide_end_tags", true)
            .map_err(|e| format!("Configuration error: {}", e))?;
    }
    if let Some(tags) = matches.get_many::<String>("wrap") {
        let tags: Vec<String> = tags.cloned().collect();
        loader = loader
            .set_override("formatting.always_wrap", tags)
            .map_err(|e| format!("Configuration error: {}", e))?;
    }

    loader
        .build()
        .map_err(|e| format!("Configuration error: {}", e))
}

/// Handle the render command
fn handle_render_command(matches: &ArgMatches) -> Result<(), String> {
    let config = load_config(matches)?;
    let path = matches
        .get_one::<String>("path")
        .ok_or_else(|| "A description path is required".to_string())?;
    let output = render::render_file(Path::new(path), &config)?;
    render::emit(
        &output,
        matches.get_one::<String>("output").map(Path::new),
    )
}

/// Handle the tree command
fn handle_tree_command(matches: &ArgMatches) -> Result<(), String> {
    let mut loader = Loader::new().with_optional_file(PROJECT_CONFIG);
    if let Some(input) = matches.get_one::<String>("input") {
        loader = loader
            .set_override("render.input", input.as_str())
            .map_err(|e| format!("Configuration error: {}", e))?;
    }
    let config = loader
        .build()
        .map_err(|e| format!("Configuration error: {}", e))?;

    let path = matches
        .get_one::<String>("path")
        .ok_or_else(|| "A description path is required".to_string())?;
    let json = render::tree_json(Path::new(path), config.render.input)?;
    println!("{}", json);
    Ok(())
}

/// Handle the formats command
fn handle_formats_command() {
    let registry = FormatRegistry::with_defaults();
    println!("Available formats:\n");

    for name in registry.list_formats() {
        println!("  {}", name);
        if let Ok(format) = registry.get(&name) {
            println!("    {}", format.description());
        }
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        build_cli().debug_assert();
    }

    #[test]
    fn test_flags_override_config() {
        let matches = build_cli()
            .try_get_matches_from([
                "tagtree",
                "render",
                "page.json",
                "--tab",
                "  ",
                "--elide-end-tags",
                "--wrap",
                "span",
                "--wrap",
                "a",
                "--format",
                "html-compact",
            ])
            .unwrap();
        let (_, sub) = matches.subcommand().unwrap();
        let config = load_config(sub).unwrap();
        let rules = config.formatting.rules();
        assert_eq!(rules.tab, "  ");
        assert!(rules.elide_end_tags);
        assert_eq!(rules.always_wrap, vec!["span", "a"]);
        assert_eq!(config.render.format, "html-compact");
    }
}
