//! Console lines printed by the commands

use console::style;

use crate::domain::Bundle;

/// Shown for metadata a bundle does not declare
const UNKNOWN: &str = "unknown";

/// `  * <name> (<version>)`
pub fn list_line(name: &str, version: Option<&str>) -> String {
    format!("  * {name} ({})", version.unwrap_or(UNKNOWN))
}

/// `  <verb> : <label>`, as printed after install, uninstall and update
pub fn action_line(verb: &str, label: &str) -> String {
    format!("  {verb} : {label}")
}

/// Metadata block printed by `show`
pub fn show_block(bundle: &Bundle) -> String {
    let author = bundle.author.as_deref().unwrap_or(UNKNOWN);
    let url = bundle.url.as_deref().unwrap_or(UNKNOWN);
    let mut lines = vec![
        format!("  {}", style(bundle.label()).bold()),
        String::new(),
    ];
    if let Some(description) = &bundle.description {
        lines.push(format!("  {description}"));
        lines.push(String::new());
    }
    lines.push(format!("  * author - {author}"));
    lines.push(format!("  * path   - {}", bundle.path.display()));
    lines.push(format!("  * url    - {url}"));
    lines.join("\n")
}

/// `  ✔ <name>` for a bundle that passed validation
pub fn pass_line(name: &str) -> String {
    format!("  {} {name}", style("✔").green())
}

/// `  ✖ <name>` for a bundle that failed validation (printed to stderr)
pub fn fail_line(name: &str) -> String {
    format!("  {} {name}", style("✖").red().for_stderr())
}

/// Error text indented under a `✖` line
pub fn detail_lines(detail: &str) -> String {
    detail
        .lines()
        .map(|line| format!("    {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}
