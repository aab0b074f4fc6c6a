//! Styled diagnostics on stderr. Report data goes to stdout.

use console::style;

pub fn print_info(message: &str) {
    eprintln!("{} {}", style("ℹ").for_stderr().cyan(), message);
}

pub fn print_warning(message: &str) {
    eprintln!(
        "{} {}",
        style("⚠").for_stderr().yellow(),
        style(message).for_stderr().yellow()
    );
}

pub fn print_error(message: &str) {
    eprintln!(
        "{} {}",
        style("✗").for_stderr().red(),
        style(message).for_stderr().red()
    );
}
