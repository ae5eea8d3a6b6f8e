use crate::errors::AppError;

/// Parses a path id from its leading integer: surrounding whitespace and an
/// optional sign are accepted, anything after the digits is ignored
/// (`"12abc"` is 12, `"1.5"` is 1). No digits, or a value outside `i32`,
/// cannot name a stored record and is reported as `not_found`.
pub fn valid_id(raw: &str, not_found: &str) -> Result<i32, AppError> {
    let trimmed = raw.trim_start();

    let sign_len = usize::from(trimmed.starts_with(['+', '-']));
    let digits_len = trimmed[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();

    if digits_len == 0 {
        return Err(AppError::NotFound(not_found.to_string()));
    }

    trimmed[..sign_len + digits_len]
        .parse::<i32>()
        .map_err(|_| AppError::NotFound(not_found.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_integers() {
        assert_eq!(valid_id("42", "Skill not found").unwrap(), 42);
        assert_eq!(valid_id(" 7", "Skill not found").unwrap(), 7);
        assert_eq!(valid_id("+3", "Skill not found").unwrap(), 3);
        assert_eq!(valid_id("-1", "Skill not found").unwrap(), -1);
    }

    #[test]
    fn trailing_text_after_digits_is_ignored() {
        assert_eq!(valid_id("1.5", "Skill not found").unwrap(), 1);
        assert_eq!(valid_id("12abc", "Skill not found").unwrap(), 12);
        assert_eq!(valid_id("2x", "Skill not found").unwrap(), 2);
    }

    #[test]
    fn no_leading_digits_is_not_found() {
        let err = valid_id("abc", "Skill not found").unwrap_err();
        assert!(matches!(err, AppError::NotFound(msg) if msg == "Skill not found"));

        for raw in ["", "-", "+x", ".5", "a1"] {
            assert!(valid_id(raw, "Skill not found").is_err(), "{raw:?}");
        }
    }

    #[test]
    fn out_of_range_is_not_found() {
        assert!(valid_id("99999999999", "Skill not found").is_err());
    }
}
