mod error;
mod models;
mod validator;

pub use error::*;
pub use models::*;
pub use validator::{is_valid_amount_format, is_valid_identifier_format, validate};
