use std::io::Write;

use log::debug;
use tempfile::NamedTempFile;
use tesseract::Tesseract;

use crate::utils::MrzScanError;

/// Characters Tesseract is allowed to emit when reading an MRZ block.
const MRZ_CHAR_WHITELIST: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789<";

/// OcrEngine runs Tesseract over a preprocessed document image and returns
/// the raw text blob. Misrecognized characters in that text are the
/// parser's input noise, not an error here; only failures to run the
/// engine at all surface as `OcrError`.
pub struct OcrEngine;

impl OcrEngine {
    pub fn recognize(image_data: &[u8]) -> Result<String, MrzScanError> {
        let mut temp_file = NamedTempFile::new()
            .map_err(|e| MrzScanError::OcrError(format!("Failed to create temp file: {}", e)))?;

        temp_file
            .write_all(image_data)
            .map_err(|e| MrzScanError::OcrError(format!("Failed to write to temp file: {}", e)))?;

        let image_path = temp_file
            .path()
            .to_str()
            .ok_or_else(|| MrzScanError::OcrError("Failed to convert path to string".to_string()))?;

        let text = Tesseract::new(None, Some("eng"))
            .map_err(|e| MrzScanError::OcrError(format!("Tesseract init error: {}", e)))?
            .set_image(image_path)
            .map_err(|e| MrzScanError::OcrError(format!("Tesseract set image error: {}", e)))?
            .set_variable("tessedit_char_whitelist", MRZ_CHAR_WHITELIST)
            .map_err(|e| MrzScanError::OcrError(format!("Tesseract set variable error: {}", e)))?
            .get_text()
            .map_err(|e| MrzScanError::OcrError(format!("Tesseract error: {}", e)))?;

        debug!("OCR text:\n{}", text);
        Ok(text)
    }
}
