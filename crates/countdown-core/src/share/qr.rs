//! Share Link QR Code
//!
//! Renders a link as an inline SVG so it can be scanned from another screen.

use qrcode::render::svg;
use qrcode::{EcLevel, QrCode};

use crate::domain::{DomainError, DomainResult};

/// Smallest edge of the rendered image, in pixels
const QR_MIN_PX: u32 = 200;

/// SVG markup of a QR code for `link`.
///
/// Long boards make long links; past the QR capacity this is an
/// `InvalidOperation`.
pub fn qr_svg(link: &str) -> DomainResult<String> {
    let code = QrCode::with_error_correction_level(link.as_bytes(), EcLevel::L)
        .map_err(|e| DomainError::InvalidOperation(format!("link does not fit in a QR code: {}", e)))?;

    Ok(code
        .render::<svg::Color>()
        .min_dimensions(QR_MIN_PX, QR_MIN_PX)
        .dark_color(svg::Color("#000000"))
        .light_color(svg::Color("#ffffff"))
        .build())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qr_svg_renders_markup() {
        let markup = qr_svg("https://deadlines.example/?countdowns=JTVCJTVE").unwrap();
        assert!(markup.contains("<svg"));
        assert!(markup.contains("#000000"));
    }

    #[test]
    fn test_oversized_link_is_rejected() {
        let link = format!("https://deadlines.example/?countdowns={}", "A".repeat(4000));
        assert!(matches!(qr_svg(&link), Err(DomainError::InvalidOperation(_))));
    }
}
