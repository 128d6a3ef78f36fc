//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_list_result, print_lookup_result, print_show_result, print_stats_result};
