use serde::Serialize;
use thiserror::Error;

#[derive(Clone, Copy, Debug, Error, Eq, PartialEq, Serialize)]
pub enum ValidationError {
    #[error("upi id is missing")]
    MissingIdentifier,
    #[error("upi id does not match the local-part@handle format")]
    InvalidIdentifierFormat,
    #[error("amount is not a positive number")]
    InvalidAmount,
}

impl ValidationError {
    /// The message shown to the user when a submission is rejected.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::MissingIdentifier => "Please enter a UPI ID",
            Self::InvalidIdentifierFormat => "Please enter a valid UPI ID",
            Self::InvalidAmount => "Please enter a valid amount",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages() {
        assert_eq!(
            ValidationError::MissingIdentifier.user_message(),
            "Please enter a UPI ID"
        );
        assert_eq!(
            ValidationError::InvalidIdentifierFormat.user_message(),
            "Please enter a valid UPI ID"
        );
        assert_eq!(
            ValidationError::InvalidAmount.user_message(),
            "Please enter a valid amount"
        );
    }
}
