pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::adapters::ConsoleGreeter;
pub use crate::config::{GreetingConfig, TomlConfig};
pub use crate::core::merge::{merge_sorted, sort_and_merge};
pub use crate::core::pair_sum::{find_pairs, find_pairs_with};
pub use crate::core::palindrome::{is_palindrome, is_palindrome_by_reverse, is_palindrome_str};
pub use crate::core::reverse::{reverse_in_place, reverse_str_in_place};
pub use crate::core::runner::DrillRunner;
pub use crate::domain::model::{PairResult, SearchBound};
pub use crate::domain::ports::Greeter;
pub use crate::utils::error::{DrillError, Result};
