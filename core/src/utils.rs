//! Utility functions and types.

use std::fmt::Debug;

/// Redact renders a sensitive value for `Debug` output.
///
/// - An empty value renders as `EMPTY`.
/// - A value shorter than 12 characters is hidden entirely.
/// - Longer values keep their first and last three characters so different
///   key ids can still be told apart in logs.
pub struct Redact<'a>(&'a str);

impl<'a> From<&'a str> for Redact<'a> {
    fn from(value: &'a str) -> Self {
        Redact(value)
    }
}

impl<'a> From<&'a String> for Redact<'a> {
    fn from(value: &'a String) -> Self {
        Redact(value.as_str())
    }
}

impl Debug for Redact<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let v = self.0;
        if v.is_empty() {
            return f.write_str("EMPTY");
        }

        // Work on chars so a multi-byte secret can't split a code point.
        let chars: Vec<char> = v.chars().collect();
        if chars.len() < 12 {
            return f.write_str("***");
        }

        let head: String = chars[..3].iter().collect();
        let tail: String = chars[chars.len() - 3..].iter().collect();
        write!(f, "{head}***{tail}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redact() {
        let cases = vec![
            ("", "EMPTY"),
            ("apikey", "***"),
            ("h480djs93hd8", "h48***hd8"),
            ("489dks293j3", "***"),
            ("ééé-secret-ààà", "ééé***ààà"),
        ];

        for (input, expected) in cases {
            assert_eq!(
                format!("{:?}", Redact::from(input)),
                expected,
                "Failed on input: {input}"
            );
        }
    }
}
