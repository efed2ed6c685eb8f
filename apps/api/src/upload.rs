//! Upload intake — size and media-type gating, plus payload encoding for
//! the extraction boundary. Rejections here happen before any extraction
//! call is made.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use crate::errors::AppError;
use crate::extraction::ExtractionPayload;

/// Hard ceiling for uploaded documents.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// The file path accepts images and PDFs only.
pub fn accepts_media_type(media_type: &str) -> bool {
    media_type == "application/pdf" || media_type.starts_with("image/")
}

/// Validates an uploaded file and encodes it for transport.
///
/// The emitted payload carries base64 content only — no data-URI prefix —
/// paired with the original media type.
pub fn document_payload(data: &[u8], media_type: &str) -> Result<ExtractionPayload, AppError> {
    if data.len() > MAX_UPLOAD_BYTES {
        return Err(AppError::PayloadTooLarge(
            "This file is too large. Please upload a file smaller than 10MB.".to_string(),
        ));
    }
    if !accepts_media_type(media_type) {
        return Err(AppError::UnsupportedMediaType(format!(
            "Unsupported file type '{media_type}'. Upload an image or a PDF."
        )));
    }
    Ok(ExtractionPayload::Document {
        encoded_data: BASE64.encode(data),
        media_type: media_type.to_string(),
    })
}

/// Validates pasted text. Only trimmed, non-empty text reaches extraction.
pub fn text_payload(raw_text: &str) -> Result<ExtractionPayload, AppError> {
    let trimmed = raw_text.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation(
            "Paste the plain text of your CV before submitting.".to_string(),
        ));
    }
    Ok(ExtractionPayload::Text(trimmed.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oversized_file_is_rejected() {
        let data = vec![0u8; MAX_UPLOAD_BYTES + 1];
        let err = document_payload(&data, "application/pdf").unwrap_err();
        assert!(matches!(err, AppError::PayloadTooLarge(_)));
    }

    #[test]
    fn test_file_at_ceiling_is_accepted() {
        let data = vec![0u8; MAX_UPLOAD_BYTES];
        assert!(document_payload(&data, "application/pdf").is_ok());
    }

    #[test]
    fn test_unsupported_media_type_is_rejected() {
        let err = document_payload(b"plain", "text/plain").unwrap_err();
        assert!(matches!(err, AppError::UnsupportedMediaType(_)));
    }

    #[test]
    fn test_image_subtypes_are_accepted() {
        assert!(accepts_media_type("image/png"));
        assert!(accepts_media_type("image/jpeg"));
        assert!(accepts_media_type("application/pdf"));
        assert!(!accepts_media_type("application/zip"));
        assert!(!accepts_media_type(""));
    }

    #[test]
    fn test_document_payload_is_bare_base64_with_media_type() {
        let payload = document_payload(b"%PDF-1.4 fake", "application/pdf").unwrap();
        match payload {
            ExtractionPayload::Document {
                encoded_data,
                media_type,
            } => {
                assert!(!encoded_data.starts_with("data:"));
                assert_eq!(BASE64.decode(&encoded_data).unwrap(), b"%PDF-1.4 fake");
                assert_eq!(media_type, "application/pdf");
            }
            other => panic!("expected document payload, got {other:?}"),
        }
    }

    #[test]
    fn test_text_payload_is_trimmed() {
        let payload = text_payload("  Jane Doe\nStaff Engineer  ").unwrap();
        assert_eq!(
            payload,
            ExtractionPayload::Text("Jane Doe\nStaff Engineer".to_string())
        );
    }

    #[test]
    fn test_empty_text_is_rejected() {
        assert!(text_payload("").is_err());
        assert!(text_payload("   \n\t ").is_err());
    }
}
