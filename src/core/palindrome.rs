/// Two-pointer palindrome check. Stops at the first mismatch.
pub fn is_palindrome<T: PartialEq>(values: &[T]) -> bool {
    if values.is_empty() {
        return true;
    }

    let (mut left, mut right) = (0usize, values.len() - 1);
    while left < right {
        if values[left] != values[right] {
            return false;
        }
        left += 1;
        right -= 1;
    }
    true
}

/// Same answer as [`is_palindrome`], computed by comparing against the reversed sequence.
pub fn is_palindrome_by_reverse<T: PartialEq>(values: &[T]) -> bool {
    values.iter().eq(values.iter().rev())
}

/// Compares Unicode scalar values, not bytes.
pub fn is_palindrome_str(text: &str) -> bool {
    let mut forward = text.chars();
    let mut backward = text.chars().rev();
    let half = text.chars().count() / 2;
    (0..half).all(|_| forward.next() == backward.next())
}

/// Ignores whitespace and letter case, so "Never odd or even" passes.
pub fn is_palindrome_normalized(text: &str) -> bool {
    let normalized: Vec<char> = text
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect();
    is_palindrome(&normalized)
}
