use crate::error::TrackerError;

pub const MAX_SYMBOL_LENGTH: usize = 10;

/// Validate a ticker symbol: trim, uppercase, then allow only `A-Z`, `0-9`, `.` and `-`
/// (share classes such as `BRK.B`, exchange suffixes such as `SHOP.TRT`).
pub fn validate_symbol(input: &str) -> Result<String, TrackerError> {
    let symbol = input.trim().to_uppercase();
    if symbol.is_empty() {
        return Err(TrackerError::InvalidInput(
            "ticker symbol is empty".to_string(),
        ));
    }
    if symbol.len() > MAX_SYMBOL_LENGTH {
        return Err(TrackerError::InvalidInput(format!(
            "ticker symbol exceeds maximum length of {} characters",
            MAX_SYMBOL_LENGTH
        )));
    }
    if let Some(bad) = symbol
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '.' || *c == '-'))
    {
        return Err(TrackerError::InvalidInput(format!(
            "ticker symbol '{}' contains invalid character '{}'",
            input.trim(),
            bad
        )));
    }
    Ok(symbol)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uppercases_and_trims() {
        assert_eq!(validate_symbol("  dis ").unwrap(), "DIS");
        assert_eq!(validate_symbol("brk.b").unwrap(), "BRK.B");
        assert_eq!(validate_symbol("shop.trt").unwrap(), "SHOP.TRT");
    }

    #[test]
    fn rejects_empty() {
        assert!(matches!(
            validate_symbol("   "),
            Err(TrackerError::InvalidInput(_))
        ));
    }

    #[test]
    fn rejects_too_long() {
        assert!(validate_symbol("ABCDEFGHIJK").is_err());
        assert!(validate_symbol("ABCDEFGHIJ").is_ok());
    }

    #[test]
    fn rejects_path_characters() {
        let err = validate_symbol("../etc").unwrap_err();
        assert!(err.to_string().contains('/'));
        assert!(validate_symbol("A B").is_err());
        assert!(validate_symbol("DIS;").is_err());
    }
}
