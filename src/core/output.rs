//! Unified output formatting for the `linguaspark` CLI.
//!
//! Every command prints through these helpers so messages share one colour
//! scheme: red for errors, green for success, blue for labels and
//! bright_black for secondary detail.

use crate::core::state::ChatMessage;
use colored::*;

/// Prints an error message
///
/// # Format
/// ```text
///
/// ✕ Error: <message>
///
/// ```
pub fn print_error(message: &str) {
    eprintln!("\n{} {}\n", "✕ Error:".red(), message.white());
}

/// Prints a success message preceded by a green checkmark
pub fn print_success(message: &str) {
    println!("\n{} {}", "✓".green(), message.white());
}

pub fn print_info(message: &str) {
    println!("\n{}\n", message.white());
}

pub fn print_section_header(header: &str) {
    println!("\n{}:\n", header.white());
}

/// Prints an aligned `label: value` line
pub fn print_field(label: &str, value: &str) {
    println!("  {:<18} {}", format!("{label}:").blue(), value.white());
}

/// Prints one history entry
///
/// # Format
/// ```text
///   [<n>] <timestamp> (<from> → <to>)
///       You: <user>
///       Bot: <bot>
/// ```
pub fn print_chat_message(position: usize, message: &ChatMessage) {
    println!("  {}", chat_header(position, message).bright_black());
    println!("      {} {}", "You:".blue(), message.user.white());
    println!("      {} {}", "Bot:".green(), message.bot.white());
}

fn chat_header(position: usize, message: &ChatMessage) -> String {
    format!(
        "[{}] {} ({} → {})",
        position,
        message.timestamp.format("%Y-%m-%d %H:%M:%S"),
        message.languages.from,
        message.languages.to,
    )
}
