//! Candidate-name generation for temporary entries.

/// Smallest token value embedded in a generated name.
pub const TOKEN_MIN: u64 = 0x19A100;
/// Largest token value embedded in a generated name (`36^5 - 1`, so tokens
/// render as at most five base-36 digits).
pub const TOKEN_MAX: u64 = 0x39AA3FF;

/// Renders `n` in base 36 using digits `0-9` and lowercase `a-z`.
pub fn base36(mut n: u64) -> String {
    if n == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::new();
    while n > 0 {
        let digit = char::from_digit((n % 36) as u32, 36).expect("digit below radix");
        digits.push(digit);
        n /= 36;
    }

    digits.iter().rev().collect()
}

/// Assembles a candidate file or directory name. The extension is only
/// appended when non-empty, dot included.
pub fn candidate(prefix: &str, token: &str, suffix: &str, extension: Option<&str>) -> String {
    match extension {
        Some(extension) if !extension.is_empty() => format!("{prefix}{token}{suffix}.{extension}"),
        _ => format!("{prefix}{token}{suffix}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_digits() {
        assert_eq!(base36(0), "0");
        assert_eq!(base36(9), "9");
        assert_eq!(base36(10), "a");
        assert_eq!(base36(35), "z");
    }

    #[test]
    fn carries_into_the_next_digit() {
        assert_eq!(base36(36), "10");
        assert_eq!(base36(36 * 36), "100");
    }

    #[test]
    fn token_bounds() {
        assert_eq!(base36(TOKEN_MIN), "zznk");
        assert_eq!(base36(TOKEN_MAX), "zzzzz");
    }

    #[test]
    fn round_trips_through_str_radix() {
        for n in [1, 35, 36, 1000, TOKEN_MIN, 2_000_000, TOKEN_MAX] {
            assert_eq!(u64::from_str_radix(&base36(n), 36), Ok(n));
        }
    }

    #[test]
    fn candidate_with_all_parts() {
        assert_eq!(
            candidate("tmp_", "zznk", "_x", Some("dat")),
            "tmp_zznk_x.dat"
        );
    }

    #[test]
    fn candidate_without_extension() {
        assert_eq!(candidate("tmp_", "zznk", "_x", None), "tmp_zznk_x");
    }

    #[test]
    fn empty_extension_appends_no_dot() {
        assert_eq!(candidate("", "zznk", "", Some("")), "zznk");
    }

    #[test]
    fn bare_token() {
        assert_eq!(candidate("", "12345", "", None), "12345");
    }
}
