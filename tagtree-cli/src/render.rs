//! Loading descriptions and rendering them
//!
//! Everything that touches the file system lives here, so `main` only wires arguments to
//! these functions and reports errors.

use log::{debug, info};
use std::fs;
use std::path::Path;
use tagtree::building::load_str;
use tagtree::{DescriptionFormat, FormatRegistry, Node};
use tagtree_config::{InputKind, TagtreeConfig};

/// Decide which syntax to parse `path` with
pub fn resolve_input(path: &Path, input: InputKind) -> Result<DescriptionFormat, String> {
    match input {
        InputKind::Json => Ok(DescriptionFormat::Json),
        InputKind::Yaml => Ok(DescriptionFormat::Yaml),
        InputKind::Auto => path
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(DescriptionFormat::from_extension)
            .ok_or_else(|| {
                format!(
                    "Cannot tell the syntax of {} from its extension, pass --input json or --input yaml",
                    path.display()
                )
            }),
    }
}

/// Read and parse a description file into a node tree
pub fn load_description(path: &Path, input: InputKind) -> Result<Node, String> {
    let syntax = resolve_input(path, input)?;
    let source = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    debug!("parsing {} as {}", path.display(), syntax);
    load_str(&source, syntax).map_err(|e| format!("{}: {}", path.display(), e))
}

/// Render the description at `path` with the configured format and rules
pub fn render_file(path: &Path, config: &TagtreeConfig) -> Result<String, String> {
    let root = load_description(path, config.render.input)?;
    let registry = FormatRegistry::with_rules(config.formatting.rules());
    let format = config.render.format.as_str();

    if !registry.has(format) {
        return Err(format!(
            "Format '{}' not found. Available formats: {}",
            format,
            registry.list_formats().join(", ")
        ));
    }

    let output = registry
        .serialize(&root, format)
        .map_err(|e| format!("Render failed: {}", e))?;
    info!("rendered {} as {}", path.display(), format);
    Ok(output)
}

/// The parsed tree of a description, as pretty JSON
pub fn tree_json(path: &Path, input: InputKind) -> Result<String, String> {
    let root = load_description(path, input)?;
    serde_json::to_string_pretty(&root).map_err(|e| format!("JSON serialization failed: {}", e))
}

/// Write to `output` if given, otherwise to stdout
pub fn emit(text: &str, output: Option<&Path>) -> Result<(), String> {
    match output {
        Some(path) => fs::write(path, text)
            .map_err(|e| format!("Failed to write {}: {}", path.display(), e)),
        None => {
            print!("{}", text);
            Ok(())
        }
    }
}
