use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::{PaymentAmount, ValidatedFields, ValidationError};

/// Valid floating-point number text, as accepted by an HTML number field.
static AMOUNT_FORMAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^-?(?:[0-9]+(?:\.[0-9]+)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?$")
        .expect("amount pattern is valid")
});

const IDENTIFIER_SEPARATOR: char = '@';

/// Checks a raw upi id and amount, in that order. The first failing rule is
/// returned; errors are never aggregated.
pub fn validate(identifier: &str, amount: &str) -> Result<ValidatedFields, ValidationError> {
    debug!("Validating input: identifier: {identifier} - amount: {amount:?}");

    if identifier.is_empty() {
        return Err(ValidationError::MissingIdentifier);
    }

    if !is_valid_identifier_format(identifier) {
        return Err(ValidationError::InvalidIdentifierFormat);
    }

    let amount = parse_amount(amount)?;
    Ok(ValidatedFields::new(identifier.to_string(), amount))
}

/// `local-part@handle` where the local part is made of ASCII letters, digits,
/// `.`, `_` or `-`, and the handle of ASCII letters and digits only.
pub fn is_valid_identifier_format(identifier: &str) -> bool {
    let Some((local_part, handle)) = identifier.split_once(IDENTIFIER_SEPARATOR) else {
        return false;
    };

    if local_part.is_empty() || handle.is_empty() {
        return false;
    }

    let local_part_valid = local_part
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || ['.', '_', '-'].contains(&c));

    // A second separator in the handle is rejected here as well.
    local_part_valid && handle.chars().all(|c| c.is_ascii_alphanumeric())
}

pub fn is_valid_amount_format(amount: &str) -> bool {
    AMOUNT_FORMAT.is_match(amount)
}

fn parse_amount(amount: &str) -> Result<Option<PaymentAmount>, ValidationError> {
    if amount.is_empty() {
        return Ok(None);
    }

    if !is_valid_amount_format(amount) {
        return Err(ValidationError::InvalidAmount);
    }

    let value: f64 = amount
        .parse()
        .map_err(|_| ValidationError::InvalidAmount)?;

    // Overflowing exponents parse to infinity and tiny ones underflow to zero.
    if !value.is_finite() || value <= 0.0 {
        return Err(ValidationError::InvalidAmount);
    }

    Ok(Some(PaymentAmount::new(amount.to_string(), value)))
}
