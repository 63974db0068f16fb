pub mod config;
pub mod error;
pub mod form;
pub mod input;
pub mod link;
pub mod logger;
pub mod notification;
pub mod render;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::{Config, ConfigError, default_config};
pub use error::UpiQrError;
pub use form::{FormState, GeneratedPayment, PaymentForm};
pub use input::{PaymentAmount, RawInput, ValidatedFields, ValidationError, validate};
pub use link::{LinkEncoder, PaymentLink, encode};
pub use logger::init_logging;
pub use notification::{Notification, Notifier, Severity};
pub use render::{ErrorCorrectionLevel, QrRenderer, RenderOptions};
