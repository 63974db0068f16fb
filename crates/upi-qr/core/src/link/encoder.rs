use std::fmt;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Serialize;
use tracing::debug;

use crate::{config::Config, input::ValidatedFields};

pub const UPI_PAY_PREFIX: &str = "upi://pay?";
pub const DEFAULT_PAYEE_NAME: &str = "Payment";
pub const CURRENCY_CODE: &str = "INR";

/// Everything outside the RFC 3986 unreserved set.
const PAYEE_NAME_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// A fully built `upi://pay` request string. Only [`LinkEncoder`] creates
/// these, from [`ValidatedFields`].
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PaymentLink(String);

impl PaymentLink {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for PaymentLink {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PaymentLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Encodes validated fields with the default payee name.
pub fn encode(fields: &ValidatedFields) -> PaymentLink {
    LinkEncoder::default().encode(fields)
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LinkEncoder {
    /// Already percent-encoded.
    payee_name: String,
}

impl LinkEncoder {
    pub fn new(payee_name: &str) -> Self {
        LinkEncoder {
            payee_name: utf8_percent_encode(payee_name, PAYEE_NAME_ENCODE_SET).to_string(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.payee_name)
    }

    /// Builds `upi://pay?pa=..&pn=..[&am=..]&cu=INR`.
    ///
    /// The parameter order is fixed. The identifier and the amount are
    /// emitted verbatim: their grammars only admit URI-safe characters.
    pub fn encode(&self, fields: &ValidatedFields) -> PaymentLink {
        let mut link = format!(
            "{UPI_PAY_PREFIX}pa={}&pn={}",
            fields.identifier(),
            self.payee_name
        );

        if let Some(amount) = fields.amount() {
            link.push_str("&am=");
            link.push_str(amount.text());
        }

        link.push_str("&cu=");
        link.push_str(CURRENCY_CODE);

        debug!("Encoded payment link: {link}");
        PaymentLink(link)
    }
}

impl Default for LinkEncoder {
    fn default() -> Self {
        Self::new(DEFAULT_PAYEE_NAME)
    }
}
