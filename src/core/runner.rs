use crate::config::DemoConfig;
use crate::core::{merge, pair_sum, palindrome, reverse};
use crate::domain::model::{
    DemoReport, MergeOutcome, PairOutcome, PalindromeOutcome, ReverseOutcome, SearchBound,
};

/// Runs the drills on caller supplied or configured inputs and collects the outcomes.
pub struct DrillRunner {
    demo: DemoConfig,
}

impl DrillRunner {
    pub fn new(demo: DemoConfig) -> Self {
        Self { demo }
    }

    pub fn demo_config(&self) -> &DemoConfig {
        &self.demo
    }

    /// Sorts the inputs first when either one is out of order.
    pub fn merge(&self, left: &[i64], right: &[i64]) -> MergeOutcome {
        let sorted =
            merge::is_sorted_non_decreasing(left) && merge::is_sorted_non_decreasing(right);
        let merged = if sorted {
            merge::merge_sorted(left, right)
        } else {
            tracing::warn!("🔶 Merge input is not sorted, sorting working copies first");
            merge::sort_and_merge(left, right)
        };
        tracing::info!(
            "🔀 Merged {} + {} values into {}",
            left.len(),
            right.len(),
            merged.len()
        );

        MergeOutcome {
            left: left.to_vec(),
            right: right.to_vec(),
            merged,
        }
    }

    pub fn palindrome(&self, input: &str) -> PalindromeOutcome {
        let outcome = PalindromeOutcome {
            input: input.to_string(),
            is_palindrome: palindrome::is_palindrome_str(input),
            is_palindrome_normalized: palindrome::is_palindrome_normalized(input),
        };
        tracing::info!(
            "🪞 {:?}: palindrome={}, normalized={}",
            input,
            outcome.is_palindrome,
            outcome.is_palindrome_normalized
        );
        outcome
    }

    pub fn reverse(&self, input: &str) -> ReverseOutcome {
        let mut reversed = input.to_string();
        reverse::reverse_str_in_place(&mut reversed);
        tracing::info!("🔄 Reversed {} chars", input.chars().count());

        ReverseOutcome {
            before: input.to_string(),
            after: reversed,
        }
    }

    pub fn pairs(&self, values: &[i64], target: i64, bound: SearchBound) -> PairOutcome {
        let pairs = pair_sum::find_pairs_with(values, target, bound);
        tracing::info!(
            "🎯 Found {} pair(s) summing to {} among {} values (bound: {})",
            pairs.len(),
            target,
            values.len(),
            bound
        );
        for pair in &pairs {
            tracing::debug!("🎯 match: {}", pair);
        }

        PairOutcome {
            values: values.to_vec(),
            target,
            bound,
            pairs,
        }
    }

    pub fn run(&self) -> DemoReport {
        tracing::info!("🚀 Running all drills");
        let demo = &self.demo;

        let report = DemoReport {
            generated_at: chrono::Utc::now(),
            merge: self.merge(&demo.merge_left, &demo.merge_right),
            palindromes: demo
                .palindromes
                .iter()
                .map(|input| self.palindrome(input))
                .collect(),
            reverse: self.reverse(&demo.reverse_text),
            pairs: self.pairs(&demo.pair_values, demo.pair_target, demo.pair_search),
        };

        tracing::info!("✅ All drills completed");
        report
    }
}

impl Default for DrillRunner {
    fn default() -> Self {
        Self::new(DemoConfig::default())
    }
}
