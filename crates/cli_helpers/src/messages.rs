//! Print messages to the terminal.
use colored::Colorize;

const TICK: &str = "✓";

/// Print a success message.
pub fn success(msg: impl AsRef<str>) {
    println!("{}", format_success(msg));
}

/// Print an informational message.
pub fn info(msg: impl AsRef<str>) {
    println!("{}", msg.as_ref().dimmed());
}

fn format_success(msg: impl AsRef<str>) -> String {
    format!("{} {}", msg.as_ref().green(), TICK.green())
}
