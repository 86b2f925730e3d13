use console::style;
use std::fmt::Display;

/// Green bold: success banners and checkmarks
pub fn success<D: Display>(text: D) -> String {
    style(text).green().bold().to_string()
}

/// Red bold: failures reported to the user
pub fn failure<D: Display>(text: D) -> String {
    style(text).red().bold().to_string()
}

/// White bold: menu titles and section headers
pub fn header<D: Display>(text: D) -> String {
    style(text).white().bold().to_string()
}

/// Dim: separators and hints
pub fn dim<D: Display>(text: D) -> String {
    style(text).dim().to_string()
}

/// Cyan bold: menu numbers
pub fn accent<D: Display>(text: D) -> String {
    style(text).cyan().bold().to_string()
}

/// Horizontal rule of `width` `=` characters.
pub fn rule(width: usize) -> String {
    dim("=".repeat(width))
}
