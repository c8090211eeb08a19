use thiserror::Error;

#[derive(Debug, Error)]
pub enum MrzScanError {
    #[error("Image processing error: {0}")]
    ImageProcessingError(String),
    #[error("OCR error: {0}")]
    OcrError(String),
    #[error("Invalid MRZ data: not enough valid lines found")]
    InsufficientMrzLines,
    #[error("IO error: {0}")]
    IoError(String),
}
