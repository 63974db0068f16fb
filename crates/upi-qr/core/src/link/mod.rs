mod encoder;

pub use encoder::{
    CURRENCY_CODE, DEFAULT_PAYEE_NAME, LinkEncoder, PaymentLink, UPI_PAY_PREFIX, encode,
};
