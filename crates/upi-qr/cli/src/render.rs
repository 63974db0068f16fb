use anyhow::anyhow;
use qrcode_rs::{EcLevel, QrCode, render::unicode};
use upi_qr_core::{ErrorCorrectionLevel, PaymentLink, QrRenderer, RenderOptions};

/// Pixels of the configured size that map onto one terminal cell.
const PIXELS_PER_CELL: u32 = 4;

/// Draws the code with Unicode half blocks, inverted for dark terminals.
pub(crate) struct TerminalRenderer;

impl QrRenderer for TerminalRenderer {
    type Output = String;
    type Error = anyhow::Error;

    fn render(
        &self,
        link: &PaymentLink,
        options: &RenderOptions,
    ) -> Result<String, Self::Error> {
        let cells = (options.size_px / PIXELS_PER_CELL).max(1);
        let qr = QrCode::with_error_correction_level(
            link.as_str(),
            ec_level(options.error_correction),
        )
        .map_err(|e| anyhow!("Failed to encode qr code: {e:?}"))?;

        Ok(qr
            .render::<unicode::Dense1x2>()
            .dark_color(unicode::Dense1x2::Light)
            .light_color(unicode::Dense1x2::Dark)
            .quiet_zone(options.include_margin)
            .max_dimensions(cells, cells)
            .build())
    }
}

fn ec_level(level: ErrorCorrectionLevel) -> EcLevel {
    match level {
        ErrorCorrectionLevel::L => EcLevel::L,
        ErrorCorrectionLevel::M => EcLevel::M,
        ErrorCorrectionLevel::Q => EcLevel::Q,
        ErrorCorrectionLevel::H => EcLevel::H,
    }
}
