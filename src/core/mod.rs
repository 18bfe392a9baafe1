pub mod merge;
pub mod pair_sum;
pub mod palindrome;
pub mod reverse;
pub mod runner;

pub use crate::domain::model::{PairResult, SearchBound};
