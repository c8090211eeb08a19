use std::path::Path;

use crate::models::MrzFields;
use crate::parsing::{MrzParser, MrzParserConfig};
use crate::processing::{ImageProcessor, OcrEngine};
use crate::utils::MrzScanError;

/// MrzScanner drives the full pipeline: document photograph to OCR-ready
/// image to raw text to parsed identity fields.
pub struct MrzScanner {
    parser: MrzParser,
}

impl MrzScanner {
    pub fn new() -> Self {
        Self::with_config(MrzParserConfig::default())
    }

    pub fn with_config(config: MrzParserConfig) -> Self {
        MrzScanner {
            parser: MrzParser::with_config(config),
        }
    }

    pub fn scan(&self, image_path: &Path) -> Result<MrzFields, MrzScanError> {
        // Step 1: Binarize the photograph for OCR
        let processed_image = ImageProcessor::process_image(image_path)?;

        // Step 2: Recognize the MRZ character set
        let ocr_text = OcrEngine::recognize(&processed_image)?;

        // Step 3: Parse the recovered text
        self.parser.parse(&ocr_text)
    }

    /// Parse text that has already been through OCR, skipping the image
    /// pipeline.
    pub fn parse_text(&self, raw_text: &str) -> Result<MrzFields, MrzScanError> {
        self.parser.parse(raw_text)
    }
}

impl Default for MrzScanner {
    fn default() -> Self {
        Self::new()
    }
}
