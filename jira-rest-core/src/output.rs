//! # Output Formatting
//!
//! Formatted output functions with colors and emojis for user-facing
//! messages, plus pretty-printing of JSON results.

use anyhow::Result;
use owo_colors::OwoColorize;
use serde_json::Value;

/// Helper function to safely get an emoji or fallback to a default character
pub fn get_emoji_or_default(name: &str, default: &str) -> String {
  match emojis::get_by_shortcode(name) {
    Some(emoji) => emoji.to_string(),
    None => default.to_string(),
  }
}

/// Print a success message
pub fn print_success(message: &str) {
  let check = get_emoji_or_default("check_mark", "✓");
  println!("{} {}", check.green().bold(), message);
}

/// Print an error message
pub fn print_error(message: &str) {
  let cross = get_emoji_or_default("cross_mark", "✗");
  eprintln!("{} {}", cross.red().bold(), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
  let warning = get_emoji_or_default("warning", "⚠");
  eprintln!("{} {}", warning.yellow().bold(), message);
}

/// Print an info message
pub fn print_info(message: &str) {
  let info = get_emoji_or_default("information", "ℹ");
  eprintln!("{} {}", info.blue().bold(), message);
}

/// Render a JSON value the way it is printed to stdout
pub fn format_json(value: &Value) -> Result<String> {
  Ok(serde_json::to_string_pretty(value)?)
}

/// Print a JSON value to stdout
pub fn print_json(value: &Value) -> Result<()> {
  println!("{}", format_json(value)?);
  Ok(())
}
