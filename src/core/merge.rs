//! Merge of two non-decreasing sequences.
//!
//! Both inputs must already be sorted. Unsorted input is not rejected; the
//! output is then just not ordered. Use [`sort_and_merge`] when the inputs
//! come straight from a user.

/// Merges two sorted slices into one sorted `Vec`, keeping duplicates.
///
/// On equal heads the left element goes first, so the merge is stable.
pub fn merge_sorted<T: Ord + Clone>(left: &[T], right: &[T]) -> Vec<T> {
    let (mut i, mut j) = (0usize, 0usize);
    let mut merged = Vec::with_capacity(left.len() + right.len());

    while i < left.len() && j < right.len() {
        if right[j] < left[i] {
            merged.push(right[j].clone());
            j += 1;
        } else {
            merged.push(left[i].clone());
            i += 1;
        }
    }

    merged.extend_from_slice(&left[i..]);
    merged.extend_from_slice(&right[j..]);
    merged
}

/// Sorts working copies of both inputs, then merges them.
pub fn sort_and_merge<T: Ord + Clone>(left: &[T], right: &[T]) -> Vec<T> {
    let mut left = left.to_vec();
    let mut right = right.to_vec();
    left.sort();
    right.sort();
    merge_sorted(&left, &right)
}

pub fn is_sorted_non_decreasing<T: Ord>(values: &[T]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_reference_example() {
        let left = [-6, -1, 1, 3, 5];
        let right = [-11, 8, 11];
        assert_eq!(
            merge_sorted(&left, &right),
            vec![-11, -6, -1, 1, 3, 5, 8, 11]
        );
    }

    #[test]
    fn test_merge_keeps_duplicates() {
        let merged = merge_sorted(&[1, 2, 2, 5], &[2, 3, 5]);
        assert_eq!(merged, vec![1, 2, 2, 2, 3, 5, 5]);
    }

    #[test]
    fn test_merge_empty_inputs() {
        let empty: [i32; 0] = [];
        assert!(merge_sorted(&empty, &empty).is_empty());
        assert_eq!(merge_sorted(&[1, 2], &empty), vec![1, 2]);
        assert_eq!(merge_sorted(&empty, &[-3, 4]), vec![-3, 4]);
    }

    #[test]
    fn test_merge_ties_prefer_left() {
        // Compare only by the key so we can see which side won the tie.
        #[derive(Debug, Clone, PartialEq, Eq)]
        struct Tagged(i32, char);
        impl PartialOrd for Tagged {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }
        impl Ord for Tagged {
            fn cmp(&self, other: &Self) -> std::cmp::Ordering {
                self.0.cmp(&other.0)
            }
        }

        let left = [Tagged(1, 'l'), Tagged(2, 'l')];
        let right = [Tagged(1, 'r'), Tagged(2, 'r')];
        let tags: Vec<char> = merge_sorted(&left, &right).into_iter().map(|t| t.1).collect();
        assert_eq!(tags, vec!['l', 'r', 'l', 'r']);
    }

    #[test]
    fn test_merge_output_is_sorted_union() {
        let fixtures: Vec<(Vec<i32>, Vec<i32>)> = vec![
            (vec![], vec![]),
            (vec![0], vec![]),
            (vec![-5, -5, 0, 9], vec![-7, 0, 0, 12]),
            (vec![1, 1, 1], vec![1, 1]),
            (vec![-100, 50], vec![-99, -98, 49, 51, 200]),
        ];

        for (left, right) in fixtures {
            let merged = merge_sorted(&left, &right);
            assert_eq!(merged.len(), left.len() + right.len());
            assert!(is_sorted_non_decreasing(&merged));

            let mut expected: Vec<i32> = left.iter().chain(right.iter()).copied().collect();
            expected.sort();
            assert_eq!(merged, expected);
        }
    }

    #[test]
    fn test_sort_and_merge_unsorted_inputs() {
        let merged = sort_and_merge(&[1, 3, 5, -1, -6], &[11, -11, 8]);
        assert_eq!(merged, vec![-11, -6, -1, 1, 3, 5, 8, 11]);
    }

    #[test]
    fn test_is_sorted_non_decreasing() {
        assert!(is_sorted_non_decreasing::<i32>(&[]));
        assert!(is_sorted_non_decreasing(&[3]));
        assert!(is_sorted_non_decreasing(&[1, 1, 2]));
        assert!(!is_sorted_non_decreasing(&[2, 1]));
    }
}
