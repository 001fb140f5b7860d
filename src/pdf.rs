//! Printable QR sheets
//!
//! Builds the A4 PDF downloaded from the scan log: one page per selected
//! duty point, with the QR code centred and the point's labels underneath.
//! The QR bitmap is embedded as a raw 8-bit grayscale XObject.

use printpdf::{
    BuiltinFont, ColorBits, ColorSpace, ImageTransform, ImageXObject, Mm, PdfDocument, Px,
};
use thiserror::Error;

use crate::model::QrDraft;
use crate::qr;

/// Download name used by the scan-log export button.
pub const SHEET_FILE_NAME: &str = "selected-qr-codes.pdf";

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
/// Printed edge length of each QR code.
const QR_EDGE_MM: f32 = 100.0;
const QR_BOTTOM_MM: f32 = 150.0;

#[derive(Debug, Error)]
pub enum SheetError {
    #[error(transparent)]
    Encode(#[from] qr::EncodeError),
    #[error("failed to build PDF: {0}")]
    Pdf(String),
}

/// Render one QR code per A4 page and return the PDF bytes.
pub fn qr_sheet(drafts: &[QrDraft]) -> Result<Vec<u8>, SheetError> {
    let (doc, first_page, first_layer) = PdfDocument::new(
        "Duty Point QR Codes",
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "Layer 1",
    );
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| SheetError::Pdf(e.to_string()))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| SheetError::Pdf(e.to_string()))?;

    for (index, draft) in drafts.iter().enumerate() {
        let layer = if index == 0 {
            doc.get_page(first_page).get_layer(first_layer)
        } else {
            let (page, layer) = doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
            doc.get_page(page).get_layer(layer)
        };

        let title = if draft.duty_point.is_empty() {
            "Duty Point"
        } else {
            draft.duty_point.as_str()
        };
        layer.use_text(title, 18.0, Mm(20.0), Mm(265.0), &bold);

        let (edge, pixels) = qr::qr_bitmap(draft)?;
        let xobject = ImageXObject {
            width: Px(edge as usize),
            height: Px(edge as usize),
            color_space: ColorSpace::Greyscale,
            bits_per_component: ColorBits::Bit8,
            interpolate: false,
            image_data: pixels,
            image_filter: None,
            smask: None,
            clipping_bbox: None,
        };
        // Pick the dpi that prints the bitmap at QR_EDGE_MM regardless of
        // the pixel edge the encoder produced.
        let dpi = edge as f32 * 25.4 / QR_EDGE_MM;
        printpdf::Image::from(xobject).add_to_layer(
            layer.clone(),
            ImageTransform {
                translate_x: Some(Mm((PAGE_WIDTH_MM - QR_EDGE_MM) / 2.0)),
                translate_y: Some(Mm(QR_BOTTOM_MM)),
                dpi: Some(dpi),
                ..Default::default()
            },
        );

        layer.use_text(
            format!("Police Station: {}", draft.police_station),
            12.0,
            Mm(20.0),
            Mm(135.0),
            &font,
        );
        layer.use_text(
            format!("Location: {}, {}", draft.latitude, draft.longitude),
            12.0,
            Mm(20.0),
            Mm(127.0),
            &font,
        );
        if let Some(cug) = draft.cug {
            layer.use_text(format!("CUG: {cug}"), 12.0, Mm(20.0), Mm(119.0), &font);
        }
    }

    doc.save_to_bytes().map_err(|e| SheetError::Pdf(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(duty_point: &str) -> QrDraft {
        QrDraft {
            latitude: "29.4513".to_string(),
            longitude: "77.3152".to_string(),
            police_station: "Shamli".to_string(),
            duty_point: duty_point.to_string(),
            cug: Some(9876543210),
        }
    }

    #[test]
    fn test_sheet_is_pdf() {
        let bytes = qr_sheet(&[draft("Bus Stand"), draft("")]).unwrap();
        assert_eq!(&bytes[..5], b"%PDF-");
        assert!(bytes.len() > 1_000);
    }

    #[test]
    fn test_empty_selection_still_builds() {
        // The UI disables the button at zero selected, but the builder
        // itself degrades to a single blank page rather than erroring.
        let bytes = qr_sheet(&[]).unwrap();
        assert_eq!(&bytes[..5], b"%PDF-");
    }
}
