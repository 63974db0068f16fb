use serde::{Deserialize, Serialize};

use crate::link::PaymentLink;

/// QR error correction level, from lowest (~7% recoverable) to highest (~30%).
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum ErrorCorrectionLevel {
    L,
    M,
    Q,
    #[default]
    H,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct RenderOptions {
    pub size_px: u32,
    pub error_correction: ErrorCorrectionLevel,
    /// Draw the quiet zone around the code
    pub include_margin: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            size_px: 200,
            error_correction: ErrorCorrectionLevel::H,
            include_margin: true,
        }
    }
}

/// Turns a payment link into a scannable code. The link must be encoded
/// exactly as given.
pub trait QrRenderer {
    type Output;
    type Error;

    fn render(
        &self,
        link: &PaymentLink,
        options: &RenderOptions,
    ) -> Result<Self::Output, Self::Error>;
}
