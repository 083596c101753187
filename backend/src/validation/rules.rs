//! Field rules that the `validator` derive attributes cannot express directly.

use validator::ValidationError;

const SKU_MAX_LEN: usize = 64;

/// Validates a stock keeping unit.
///
/// Requirements:
/// - 1-64 characters
/// - ASCII alphanumerics, `-` and `_` only
pub fn validate_sku(sku: &str) -> Result<(), ValidationError> {
    if sku.is_empty() || sku.len() > SKU_MAX_LEN {
        return Err(ValidationError::new("sku_invalid_length"));
    }

    if !sku
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::new("sku_invalid_characters"));
    }

    Ok(())
}

/// Validates an ISO-4217 style currency code: exactly three uppercase ASCII letters.
pub fn validate_currency_code(code: &str) -> Result<(), ValidationError> {
    if code.len() != 3 || !code.chars().all(|c| c.is_ascii_uppercase()) {
        return Err(ValidationError::new("currency_invalid"));
    }
    Ok(())
}
