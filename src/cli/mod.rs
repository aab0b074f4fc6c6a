mod args;
mod scan;
mod theme;

pub use args::Args;
pub use scan::run_scan;
pub use theme::{print_error, print_info, print_warning};
