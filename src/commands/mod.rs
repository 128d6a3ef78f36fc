//! Command implementations

pub mod list;
pub mod lookup;
pub mod show;
pub mod stats;

pub use list::{ListEntry, ListResult, list_puzzles};
pub use lookup::{LookupResult, lookup_answer};
pub use show::{ShowConfig, ShowResult, show_puzzle};
pub use stats::{StatsResult, compute_stats};
