use std::fmt;

use serde::{Deserialize, Serialize};

/// Snapshot of the form fields as typed, before any checks.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct RawInput {
    pub identifier: String,
    /// Empty when the payer should choose the amount.
    pub amount: String,
}

impl RawInput {
    pub fn new(identifier: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            amount: amount.into(),
        }
    }
}

/// An amount that passed validation: the text exactly as typed and its
/// parsed value, which is finite and strictly positive.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PaymentAmount {
    text: String,
    value: f64,
}

impl PaymentAmount {
    pub(crate) fn new(text: String, value: f64) -> Self {
        Self { text, value }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

impl fmt::Display for PaymentAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Fields that passed every check in [`crate::input::validate`].
///
/// There is no public constructor, so holding a value of this type proves
/// the input was validated.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ValidatedFields {
    identifier: String,
    amount: Option<PaymentAmount>,
}

impl ValidatedFields {
    pub(crate) fn new(identifier: String, amount: Option<PaymentAmount>) -> Self {
        Self { identifier, amount }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// `None` means the amount is left for the payer to decide.
    pub fn amount(&self) -> Option<&PaymentAmount> {
        self.amount.as_ref()
    }
}
