/// Reverses `values` by swapping mirrored positions up to the midpoint.
///
/// An odd-length slice leaves its middle element where it is.
pub fn reverse_in_place<T>(values: &mut [T]) {
    let len = values.len();
    for i in 0..len / 2 {
        values.swap(i, len - 1 - i);
    }
}

fn is_continuation(byte: u8) -> bool {
    byte & 0b1100_0000 == 0b1000_0000
}

/// Reverses the chars of `text` inside its own buffer.
///
/// The bytes are reversed first, which leaves every multi-byte char with its
/// bytes backwards; a second pass flips each of those runs back.
pub fn reverse_str_in_place(text: &mut String) {
    let mut bytes = std::mem::take(text).into_bytes();
    reverse_in_place(&mut bytes);

    let mut start = 0;
    while start < bytes.len() {
        let mut end = start;
        while end + 1 < bytes.len() && is_continuation(bytes[end]) {
            end += 1;
        }
        reverse_in_place(&mut bytes[start..=end]);
        start = end + 1;
    }

    *text = match String::from_utf8(bytes) {
        Ok(reversed) => reversed,
        Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_sentence() {
        let mut text = String::from("this is string to be reversed");
        reverse_str_in_place(&mut text);
        assert_eq!(text, "desrever eb ot gnirts si siht");
    }

    #[test]
    fn test_empty_and_single_are_noops() {
        let mut empty: Vec<i32> = vec![];
        reverse_in_place(&mut empty);
        assert!(empty.is_empty());

        let mut single = vec![7];
        reverse_in_place(&mut single);
        assert_eq!(single, vec![7]);

        let mut text = String::new();
        reverse_str_in_place(&mut text);
        assert_eq!(text, "");
    }

    #[test]
    fn test_odd_length_keeps_middle() {
        let mut values = vec![1, 2, 3, 4, 5];
        reverse_in_place(&mut values);
        assert_eq!(values, vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_double_reverse_is_identity() {
        let fixtures = [
            vec![],
            vec![1],
            vec![1, 2],
            vec![3, -1, 4, -1, 5, 9],
            vec![0, 0, 0],
        ];
        for original in fixtures {
            let mut values = original.clone();
            reverse_in_place(&mut values);
            assert_eq!(values.len(), original.len());
            reverse_in_place(&mut values);
            assert_eq!(values, original);
        }
    }

    #[test]
    fn test_multibyte_chars_survive() {
        let mut text = String::from("añb€c😀");
        reverse_str_in_place(&mut text);
        assert_eq!(text, "😀c€bña");

        reverse_str_in_place(&mut text);
        assert_eq!(text, "añb€c😀");
    }

    #[test]
    fn test_matches_char_rev() {
        for sample in ["x", "ab", "über", "日本語テキスト", "mixed ascii и кириллица"] {
            let mut text = sample.to_string();
            reverse_str_in_place(&mut text);
            let expected: String = sample.chars().rev().collect();
            assert_eq!(text, expected);
        }
    }
}
