//! UTF-8-safe truncation of the hash input.

/// Return the longest prefix of `text` whose UTF-8 encoding occupies at most
/// `max_bytes` bytes.
///
/// The cut never lands inside a multi-byte sequence: when byte `max_bytes`
/// would split a code point, the boundary walks back to the start of that
/// code point. Inputs that already fit are returned whole, and a limit
/// smaller than the first code point yields the empty prefix.
#[must_use]
pub fn utf8_prefix(text: &str, max_bytes: usize) -> &str {
    if text.len() <= max_bytes {
        return text;
    }

    // Index 0 is always a boundary, so the walk terminates.
    let mut end = max_bytes;
    while !text.is_char_boundary(end) {
        end -= 1;
    }

    &text[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_input_is_returned_whole() {
        assert_eq!(utf8_prefix("hello", 32), "hello");
        assert_eq!(utf8_prefix("", 32), "");
    }

    #[test]
    fn ascii_cuts_exactly_at_the_limit() {
        assert_eq!(utf8_prefix("abcdef", 4), "abcd");
        assert_eq!(utf8_prefix("abcdef", 6), "abcdef");
    }

    #[test]
    fn multibyte_sequences_are_never_split() {
        // "你" occupies three bytes, so a limit of four lands mid-character.
        assert_eq!(utf8_prefix("你好", 4), "你");
        assert_eq!(utf8_prefix("你好", 3), "你");
        assert_eq!(utf8_prefix("你好", 2), "");
    }

    #[test]
    fn zero_limit_yields_the_empty_prefix() {
        assert_eq!(utf8_prefix("anything", 0), "");
    }

    #[test]
    fn boundary_walks_back_to_the_character_start() {
        let text = "a".repeat(30) + "你";
        assert_eq!(utf8_prefix(&text, 32), "a".repeat(30));
        assert_eq!(utf8_prefix(&text, 33), text);
    }
}
