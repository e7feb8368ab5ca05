//! Cleanup of hand-typed DMS tokens.

/// Characters that carry no value in a DMS token.
const NOISE: [char; 4] = [' ', '°', '\'', '"'];

/// Strips spaces and the degree, minute and second marks from `text`.
///
/// Every other character is kept in order; nothing is validated here.
///
/// ```
/// use geomatch_geo::normalize;
///
/// assert_eq!(normalize("42 ° 30 ' 10 \""), "423010");
/// ```
pub fn normalize(text: &str) -> String {
    text.chars().filter(|c| !NOISE.contains(c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_strips_marks() {
        assert_eq!(normalize("42°30'10\""), "423010");
        assert_eq!(normalize("42 30 10"), "423010");
        assert_eq!(normalize("42 ° 30 ' 10 \""), "423010");
    }

    #[test]
    fn test_keeps_other_characters() {
        assert_eq!(normalize("42°30'10.5\"N"), "423010.5N");
        assert_eq!(normalize("\tab-c"), "\tab-c");
        assert_eq!(normalize(""), "");
    }

    proptest! {
        #[test]
        fn prop_output_has_no_noise(s in ".*") {
            let out = normalize(&s);
            prop_assert!(!out.chars().any(|c| NOISE.contains(&c)));
        }

        #[test]
        fn prop_idempotent(s in ".*") {
            let once = normalize(&s);
            prop_assert_eq!(normalize(&once), once);
        }

        #[test]
        fn prop_clean_input_unchanged(s in "[0-9A-Za-z.]*") {
            prop_assert_eq!(normalize(&s), s);
        }
    }
}
