// Rust guideline compliant 2026-08-20

//! Output formatting module for the Treescope CLI.
//!
//! This module provides functionality for formatting resolved components
//! and tree outlines in various output formats (JSON, table, plain text).

use serde::Serialize;
use serde_json::json;
use std::io::Write;
use tabled::{builder::Builder, settings::Style};
use termcolor::{Buffer, Color, ColorSpec, WriteColor};
use treescope_core::{ComponentTree, NodeId};

/// One resolved component prepared for display.
#[derive(Debug, Clone, Serialize)]
pub struct MatchRow {
    /// Arena handle of the node (e.g. `n4`).
    pub handle: String,
    /// The node's identifier, if it has one.
    pub id: Option<String>,
    /// Separator-joined client identifier.
    pub client_id: String,
    /// Whether the node is a naming container.
    pub naming_container: bool,
    /// Whether the node is a form.
    pub form: bool,
}

impl MatchRow {
    /// Builds a display row for a resolved node.
    ///
    /// # Arguments
    /// * `tree` - The tree the node belongs to
    /// * `node` - The resolved node handle
    /// * `separator` - Separator used to render the client identifier
    ///
    /// # Returns
    /// A new MatchRow describing the node
    pub fn from_node(tree: &ComponentTree, node: NodeId, separator: char) -> Self {
        Self {
            handle: node.to_string(),
            id: tree.id(node).map(str::to_string),
            client_id: tree.client_id(node, separator),
            naming_container: tree.is_naming_container(node),
            form: tree.is_form(node),
        }
    }
}

/// One node of a tree outline prepared for display.
#[derive(Debug, Clone, Serialize)]
pub struct OutlineRow {
    /// Depth below the outline root (the root itself is 0).
    pub depth: usize,
    /// Facet slot name, if the node is attached as a facet.
    pub slot: Option<String>,
    /// The node's identifier, if it has one.
    pub id: Option<String>,
    /// Separator-joined client identifier.
    pub client_id: String,
    /// Whether the node is a naming container.
    pub naming_container: bool,
    /// Whether the node is a form.
    pub form: bool,
}

/// Renders the flag column for a node.
///
/// # Arguments
/// * `naming_container` - Whether the node is a naming container
/// * `form` - Whether the node is a form
///
/// # Returns
/// A comma-separated flag list, or `-` if no flags are set
pub fn flag_summary(naming_container: bool, form: bool) -> String {
    let mut flags = Vec::new();
    if naming_container {
        flags.push("naming-container");
    }
    if form {
        flags.push("form");
    }
    if flags.is_empty() {
        "-".to_string()
    } else {
        flags.join(", ")
    }
}

fn outline_label(row: &OutlineRow) -> String {
    let indent = "  ".repeat(row.depth);
    let name = row.id.as_deref().unwrap_or("(anonymous)");
    match &row.slot {
        Some(slot) => format!("{}{}: {}", indent, slot, name),
        None => format!("{}{}", indent, name),
    }
}

/// Output formatter trait.
///
/// Defines the interface for formatting resolution results and tree
/// outlines in different output formats.
pub trait OutputFormatter {
    /// Formats a list of resolved components for display.
    ///
    /// # Arguments
    /// * `matches` - The resolved components to format
    ///
    /// # Returns
    /// A formatted string representation of the match list
    fn format_matches(&self, matches: &[MatchRow]) -> String;

    /// Formats a tree outline for display.
    ///
    /// # Arguments
    /// * `rows` - The outline rows to format, in display order
    ///
    /// # Returns
    /// A formatted string representation of the outline
    fn format_outline(&self, rows: &[OutlineRow]) -> String;

    /// Formats an error message for display.
    ///
    /// # Arguments
    /// * `error` - The error message to format
    ///
    /// # Returns
    /// A formatted error string
    fn format_error(&self, error: &str) -> String;
}

/// JSON output formatter.
///
/// Formats results as valid JSON for machine consumption.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_matches(&self, matches: &[MatchRow]) -> String {
        let output = json!({
            "matches": matches,
            "total": matches.len(),
        });
        serde_json::to_string_pretty(&output)
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize match list" }).to_string())
    }

    fn format_outline(&self, rows: &[OutlineRow]) -> String {
        let output = json!({
            "nodes": rows,
            "total": rows.len(),
        });
        serde_json::to_string_pretty(&output)
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize outline" }).to_string())
    }

    fn format_error(&self, error: &str) -> String {
        json!({ "error": error }).to_string()
    }
}

/// Table output formatter.
///
/// Formats results as human-readable tables with colors and alignment.
pub struct TableFormatter {
    use_color: bool,
}

impl TableFormatter {
    /// Creates a new table formatter.
    ///
    /// # Arguments
    /// * `use_color` - Whether to use colored output
    ///
    /// # Returns
    /// A new TableFormatter instance
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }
}

impl OutputFormatter for TableFormatter {
    fn format_matches(&self, matches: &[MatchRow]) -> String {
        if matches.is_empty() {
            return "No matching components.".to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(vec!["Handle", "Id", "Client id", "Flags"]);

        for row in matches {
            builder.push_record(vec![
                row.handle.clone(),
                row.id.clone().unwrap_or_else(|| "-".to_string()),
                row.client_id.clone(),
                flag_summary(row.naming_container, row.form),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern());

        table.to_string()
    }

    fn format_outline(&self, rows: &[OutlineRow]) -> String {
        if rows.is_empty() {
            return "Tree is empty.".to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(vec!["Component", "Client id", "Flags"]);

        for row in rows {
            builder.push_record(vec![
                outline_label(row),
                row.client_id.clone(),
                flag_summary(row.naming_container, row.form),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern());

        table.to_string()
    }

    fn format_error(&self, error: &str) -> String {
        if self.use_color {
            let mut buffer = Buffer::ansi();
            let _ = buffer.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true));
            let _ = write!(buffer, "Error: ");
            let _ = buffer.reset();
            let _ = write!(buffer, "{}", error);
            String::from_utf8_lossy(buffer.as_slice()).to_string()
        } else {
            format!("Error: {}", error)
        }
    }
}

/// Plain text output formatter.
///
/// Formats results as simple plain text without colors or tables.
pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn format_matches(&self, matches: &[MatchRow]) -> String {
        if matches.is_empty() {
            return "No matching components.".to_string();
        }

        let mut output = String::new();
        for row in matches {
            output.push_str(&format!(
                "{} {} {}\n",
                row.handle,
                row.client_id,
                flag_summary(row.naming_container, row.form)
            ));
        }
        output
    }

    fn format_outline(&self, rows: &[OutlineRow]) -> String {
        if rows.is_empty() {
            return "Tree is empty.".to_string();
        }

        let mut output = String::new();
        for row in rows {
            output.push_str(&format!(
                "{} {} {}\n",
                outline_label(row),
                row.client_id,
                flag_summary(row.naming_container, row.form)
            ));
        }
        output
    }

    fn format_error(&self, error: &str) -> String {
        format!("Error: {}", error)
    }
}

/// Factory function to create an appropriate formatter.
///
/// # Arguments
/// * `format` - The desired output format ("json", "table", or "plain")
/// * `use_color` - Whether to use colored output (ignored for JSON)
///
/// # Returns
/// A boxed OutputFormatter instance
pub fn create_formatter(format: &str, use_color: bool) -> Box<dyn OutputFormatter> {
    match format {
        "json" => Box::new(JsonFormatter),
        "table" => Box::new(TableFormatter::new(use_color)),
        "plain" => Box::new(PlainFormatter),
        _ => Box::new(TableFormatter::new(use_color)),
    }
}
