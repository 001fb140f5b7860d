//! QR image rendering for duty points
//!
//! The printed code carries the duty-point draft as JSON. Codes are encoded
//! at error-correction level H (field-printed sheets get dirty) and rendered
//! as 256px monochrome PNGs with a two-module quiet zone, either as raw
//! bytes for the PDF sheet or as a data URL for inline `<img>` display.

use std::io::Cursor;

use base64::{engine::general_purpose, Engine as _};
use image::GrayImage;
use qrcode::{Color, EcLevel, QrCode};
use thiserror::Error;

use crate::model::QrDraft;

/// Edge length the rendered image is scaled towards.
pub const QR_SIZE_PX: u32 = 256;
/// Light border, in modules, on every side of the code.
pub const QUIET_ZONE_MODULES: u32 = 2;

#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("failed to encode QR payload: {0:?}")]
    Qr(qrcode::types::QrError),
    #[error("failed to render QR image: {0}")]
    Image(String),
}

/// Render a duty-point draft as a square 8-bit grayscale bitmap.
///
/// Returns the edge length in pixels and the row-major pixel bytes
/// (0x00 dark, 0xff light). The PNG and PDF renderers both draw from this.
pub fn qr_bitmap(draft: &QrDraft) -> Result<(u32, Vec<u8>), EncodeError> {
    let payload = serde_json::to_string(draft)
        .map_err(|e| EncodeError::Image(e.to_string()))?;
    let code = QrCode::with_error_correction_level(payload.as_bytes(), EcLevel::H)
        .map_err(EncodeError::Qr)?;

    let modules = code.width() as u32;
    let colors = code.to_colors();
    let total = modules + 2 * QUIET_ZONE_MODULES;
    let scale = (QR_SIZE_PX / total).max(1);
    let edge = total * scale;

    let mut pixels = vec![0xffu8; (edge * edge) as usize];
    for (i, color) in colors.iter().enumerate() {
        if *color != Color::Dark {
            continue;
        }
        let module_x = (i as u32 % modules + QUIET_ZONE_MODULES) * scale;
        let module_y = (i as u32 / modules + QUIET_ZONE_MODULES) * scale;
        for dy in 0..scale {
            let row = (module_y + dy) * edge;
            for dx in 0..scale {
                pixels[(row + module_x + dx) as usize] = 0x00;
            }
        }
    }

    Ok((edge, pixels))
}

/// Render a duty-point draft as a PNG QR image.
pub fn qr_png(draft: &QrDraft) -> Result<Vec<u8>, EncodeError> {
    let (edge, pixels) = qr_bitmap(draft)?;
    let img: GrayImage = GrayImage::from_raw(edge, edge, pixels)
        .ok_or_else(|| EncodeError::Image("bitmap size mismatch".to_string()))?;

    let mut png = Cursor::new(Vec::new());
    image::DynamicImage::ImageLuma8(img)
        .write_to(&mut png, image::ImageOutputFormat::Png)
        .map_err(|e| EncodeError::Image(e.to_string()))?;
    Ok(png.into_inner())
}

/// Render a duty-point draft as a `data:image/png;base64,` URL for `<img>`.
pub fn qr_data_url(draft: &QrDraft) -> Result<String, EncodeError> {
    let png = qr_png(draft)?;
    Ok(format!(
        "data:image/png;base64,{}",
        general_purpose::STANDARD.encode(png)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> QrDraft {
        QrDraft {
            latitude: "29.4513".to_string(),
            longitude: "77.3152".to_string(),
            police_station: "Shamli".to_string(),
            duty_point: "Bus Stand".to_string(),
            cug: Some(9876543210),
        }
    }

    #[test]
    fn test_bitmap_has_both_colors() {
        let (edge, pixels) = qr_bitmap(&draft()).unwrap();
        assert_eq!(pixels.len(), (edge * edge) as usize);
        assert!(pixels.iter().any(|p| *p == 0x00));
        // The quiet zone keeps the border light.
        assert!(pixels[..edge as usize].iter().all(|p| *p == 0xff));
    }

    #[test]
    fn test_png_envelope_and_size() {
        let png = qr_png(&draft()).unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");

        let img = image::load_from_memory(&png).unwrap();
        // Scaled to the largest whole-module size that fits the target edge.
        assert!(img.width() <= QR_SIZE_PX);
        assert!(img.width() > QR_SIZE_PX / 2);
        assert_eq!(img.width(), img.height());
    }

    #[test]
    fn test_data_url_prefix() {
        let url = qr_data_url(&draft()).unwrap();
        assert!(url.starts_with("data:image/png;base64,"));
        assert!(url.len() > 100);
    }

    #[test]
    fn test_payload_round_trips_through_json() {
        // What a scanner app reads back must match the draft on the wire.
        let payload = serde_json::to_string(&draft()).unwrap();
        let decoded: QrDraft = serde_json::from_str(&payload).unwrap();
        assert_eq!(decoded, draft());
    }
}
