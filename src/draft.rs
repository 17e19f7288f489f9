// Draft-input validation

/// Longest accepted task label, in characters
pub const MAX_LABEL_CHARS: usize = 80;

/// Outcome of validating the draft input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftValidation {
    /// Draft with surrounding whitespace removed
    pub trimmed: String,
    /// Whether the trimmed draft may become a task label
    pub valid: bool,
    /// Advisory message to show next to the input when invalid
    pub message: Option<&'static str>,
}

/// Validate a draft string
///
/// Pure function: the draft itself is never trimmed or clamped in place,
/// validity is recomputed on every change. The limit counts characters, not
/// bytes, since labels are user text.
pub fn validate_draft(draft: &str) -> DraftValidation {
    let trimmed = draft.trim();

    if trimmed.is_empty() {
        return DraftValidation {
            trimmed: String::new(),
            valid: false,
            message: Some("Please enter something."),
        };
    }

    if trimmed.chars().count() > MAX_LABEL_CHARS {
        return DraftValidation {
            trimmed: trimmed.to_string(),
            valid: false,
            message: Some("Keep it under 80 characters."),
        };
    }

    DraftValidation {
        trimmed: trimmed.to_string(),
        valid: true,
        message: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_draft_is_invalid() {
        let v = validate_draft("");
        assert!(!v.valid);
        assert_eq!(v.trimmed, "");
        assert_eq!(v.message, Some("Please enter something."));
    }

    #[test]
    fn test_whitespace_only_draft_is_invalid() {
        let v = validate_draft("   \t  ");
        assert!(!v.valid);
        assert_eq!(v.trimmed, "");
        assert_eq!(v.message, Some("Please enter something."));
    }

    #[test]
    fn test_valid_draft_is_trimmed() {
        let v = validate_draft("  Buy milk  ");
        assert!(v.valid);
        assert_eq!(v.trimmed, "Buy milk");
        assert_eq!(v.message, None);
    }

    #[test]
    fn test_length_boundary() {
        let exactly_80 = "a".repeat(80);
        let v = validate_draft(&exactly_80);
        assert!(v.valid);
        assert_eq!(v.message, None);

        let over = "a".repeat(81);
        let v = validate_draft(&over);
        assert!(!v.valid);
        assert_eq!(v.trimmed, over);
        assert_eq!(v.message, Some("Keep it under 80 characters."));
    }

    #[test]
    fn test_surrounding_whitespace_does_not_count() {
        let padded = format!("  {}  ", "a".repeat(80));
        assert!(validate_draft(&padded).valid);
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 80 multibyte characters are within the limit even at 240 bytes
        let emoji = "\u{2713}".repeat(80);
        assert!(validate_draft(&emoji).valid);
        assert!(!validate_draft(&"\u{2713}".repeat(81)).valid);
    }

    #[test]
    fn test_validity_matches_definition() {
        for s in ["", " ", "a", "  a  ", "hello world", "\n", "x\ny"] {
            let v = validate_draft(s);
            let expected = !s.trim().is_empty() && s.trim().chars().count() <= MAX_LABEL_CHARS;
            assert_eq!(v.valid, expected, "draft: {:?}", s);
            assert_eq!(v.message.is_none(), v.valid);
        }
    }
}
