// Rust guideline compliant 2026-08-20

//! Implementation of the `tscope check` command.
//!
//! Validates the identifiers of a tree document: syntax, reserved
//! characters, and duplicates within a naming scope.

use crate::terminal::{print_error, print_success, print_warning};
use anyhow::Result;
use std::collections::BTreeMap;
use std::path::Path;
use treescope_core::{validate_id, Config, NodeDocument, TreeDocument};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Severity {
    Error,
    Warning,
}

struct Finding {
    severity: Severity,
    message: String,
}

/// Executes the check command.
///
/// Reads the document without building a tree, so every problem is
/// reported in one pass even when construction would be rejected.
///
/// # Arguments
///
/// * `tree_path` - Path to the tree document
/// * `config` - The loaded configuration
///
/// # Returns
///
/// Ok if no identifier errors are found, Err otherwise.
///
/// # Errors
///
/// Returns an error if:
/// - The tree document cannot be read or parsed
/// - Any identifier error is found
pub fn execute(tree_path: String, config: &Config) -> Result<()> {
    let document = TreeDocument::load(Path::new(&tree_path))?;
    let separator = document.separator.unwrap_or(config.separator);

    let findings = collect_findings(&document, separator);
    report_findings(&findings);

    if findings
        .iter()
        .any(|finding| finding.severity == Severity::Error)
    {
        anyhow::bail!("Check found identifier problems in {}", tree_path);
    }

    if !findings.is_empty() {
        print_warning("Client ids may be ambiguous.");
    }

    Ok(())
}

/// Collects identifier findings for a whole document.
fn collect_findings(document: &TreeDocument, separator: char) -> Vec<Finding> {
    let mut findings = Vec::new();
    let mut scopes: BTreeMap<String, BTreeMap<String, usize>> = BTreeMap::new();

    let root_label = document
        .root
        .id
        .clone()
        .unwrap_or_else(|| "(root)".to_string());
    walk(
        &document.root,
        &root_label,
        "(root)",
        separator,
        &mut findings,
        &mut scopes,
    );

    for (scope, ids) in &scopes {
        for (id, count) in ids {
            if *count > 1 {
                findings.push(Finding {
                    severity: Severity::Error,
                    message: format!(
                        "Duplicate identifier '{}' in scope '{}' ({} occurrences)",
                        id, scope, count
                    ),
                });
            }
        }
    }

    findings
}

fn walk(
    node: &NodeDocument,
    path: &str,
    scope: &str,
    separator: char,
    findings: &mut Vec<Finding>,
    scopes: &mut BTreeMap<String, BTreeMap<String, usize>>,
) {
    if let Some(id) = &node.id {
        check_id(id, path, separator, findings);
        *scopes
            .entry(scope.to_string())
            .or_default()
            .entry(id.clone())
            .or_insert(0) += 1;
    }

    // A naming container opens a fresh scope for everything below it
    let child_scope = if node.naming_container { path } else { scope };

    for (name, facet) in &node.facets {
        let label = facet
            .id
            .clone()
            .unwrap_or_else(|| format!("facet[{}]", name));
        let facet_path = format!("{}/{}", path, label);
        walk(facet, &facet_path, child_scope, separator, findings, scopes);
    }
    for (index, child) in node.children.iter().enumerate() {
        let label = child
            .id
            .clone()
            .unwrap_or_else(|| format!("child[{}]", index));
        let child_path = format!("{}/{}", path, label);
        walk(child, &child_path, child_scope, separator, findings, scopes);
    }
}

fn check_id(id: &str, path: &str, separator: char, findings: &mut Vec<Finding>) {
    if id.contains('*') {
        findings.push(Finding {
            severity: Severity::Error,
            message: format!(
                "Identifier '{}' at {} contains a wildcard character",
                id, path
            ),
        });
    } else if let Err(err) = validate_id(id) {
        let message = if id.contains(separator) {
            format!(
                "Identifier '{}' at {} contains the separator character '{}'",
                id, path, separator
            )
        } else {
            format!("Invalid identifier at {}: {}", path, err)
        };
        findings.push(Finding {
            severity: Severity::Error,
            message,
        });
    } else if id.contains(separator) {
        // Valid identifier, but client ids built with this separator
        // cannot be told apart from nested paths
        findings.push(Finding {
            severity: Severity::Warning,
            message: format!(
                "Identifier '{}' at {} contains the separator character '{}'",
                id, path, separator
            ),
        });
    }
}

fn report_findings(findings: &[Finding]) {
    if findings.is_empty() {
        print_success("No identifier problems found.");
        return;
    }

    println!("Check findings:");
    for finding in findings {
        let label = match finding.severity {
            Severity::Error => "ERROR",
            Severity::Warning => "WARN",
        };
        println!("[{}] {}", label, finding.message);
    }

    let errors = findings
        .iter()
        .filter(|finding| finding.severity == Severity::Error)
        .count();
    if errors > 0 {
        print_error(&format!("{} identifier error(s).", errors));
    }
}
