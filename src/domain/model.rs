use crate::utils::error::DrillError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A value from the input together with the complement that completes the target sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairResult {
    pub value: i64,
    pub complement: i64,
}

impl PairResult {
    pub fn sum(&self) -> i64 {
        self.value + self.complement
    }
}

impl fmt::Display for PairResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {} = {}", self.value, self.complement, self.sum())
    }
}

/// Upper bound used when probing for a complement in the sorted working copy.
///
/// `Inclusive` searches every element after the current one. `ExcludeLast`
/// never looks at the final element, so a complement sitting in the last
/// position goes unreported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchBound {
    #[default]
    Inclusive,
    ExcludeLast,
}

impl fmt::Display for SearchBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchBound::Inclusive => f.write_str("inclusive"),
            SearchBound::ExcludeLast => f.write_str("exclude-last"),
        }
    }
}

impl FromStr for SearchBound {
    type Err = DrillError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "inclusive" => Ok(SearchBound::Inclusive),
            "exclude-last" | "exclude_last" => Ok(SearchBound::ExcludeLast),
            other => Err(DrillError::InputParseError {
                input: other.to_string(),
                reason: "expected 'inclusive' or 'exclude-last'".to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MergeOutcome {
    pub left: Vec<i64>,
    pub right: Vec<i64>,
    pub merged: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PalindromeOutcome {
    pub input: String,
    pub is_palindrome: bool,
    pub is_palindrome_normalized: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReverseOutcome {
    pub before: String,
    pub after: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PairOutcome {
    pub values: Vec<i64>,
    pub target: i64,
    pub bound: SearchBound,
    pub pairs: Vec<PairResult>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DemoReport {
    pub generated_at: DateTime<Utc>,
    pub merge: MergeOutcome,
    pub palindromes: Vec<PalindromeOutcome>,
    pub reverse: ReverseOutcome,
    pub pairs: PairOutcome,
}

fn join_values(values: &[i64]) -> String {
    values
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

impl fmt::Display for MergeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Merged: {}", join_values(&self.merged))
    }
}

impl fmt::Display for PalindromeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_palindrome {
            write!(f, "{} is palindrome", self.input)
        } else {
            write!(f, "{} is not palindrome", self.input)
        }
    }
}

impl fmt::Display for ReverseOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Before: {}", self.before)?;
        write!(f, "After: {}", self.after)
    }
}

impl fmt::Display for PairOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.pairs.is_empty() {
            return write!(f, "No pairs sum to {}", self.target);
        }
        let lines: Vec<String> = self
            .pairs
            .iter()
            .map(|pair| format!("We have a match: {}", pair))
            .collect();
        write!(f, "{}", lines.join("\n"))
    }
}

impl fmt::Display for DemoReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.merge)?;
        for outcome in &self.palindromes {
            writeln!(f, "{}", outcome)?;
        }
        writeln!(f, "{}", self.reverse)?;
        write!(f, "{}", self.pairs)
    }
}
