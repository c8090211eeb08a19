use std::io::Cursor;
use std::path::Path;

use image::{DynamicImage, ImageFormat};
use imageproc::contrast::{otsu_level, threshold};
use imageproc::filter::median_filter;
use log::debug;

use crate::utils::MrzScanError;

/// ImageProcessor turns a photographed document into a binarized image the
/// OCR engine can read: grayscale, denoise, Otsu threshold.
pub struct ImageProcessor;

impl ImageProcessor {
    pub fn process_image(image_path: &Path) -> Result<Vec<u8>, MrzScanError> {
        let img = image::open(image_path).map_err(|e| {
            MrzScanError::ImageProcessingError(format!("Failed to open image: {}", e))
        })?;
        Self::preprocess(&img)
    }

    /// Convert to 8-bit grayscale, median-filter away sensor noise and
    /// binarize at the Otsu level. Returns the result PNG-encoded for the
    /// OCR engine.
    pub fn preprocess(img: &DynamicImage) -> Result<Vec<u8>, MrzScanError> {
        let gray = img.to_luma8();
        let denoised = median_filter(&gray, 1, 1);
        let level = otsu_level(&denoised);
        let binary = threshold(&denoised, level);
        debug!(
            "binarized {}x{} image at Otsu level {}",
            binary.width(),
            binary.height(),
            level
        );

        let mut buffer = Vec::new();
        let mut cursor = Cursor::new(&mut buffer);
        DynamicImage::ImageLuma8(binary)
            .write_to(&mut cursor, ImageFormat::Png)
            .map_err(|e| {
                MrzScanError::ImageProcessingError(format!(
                    "Failed to encode processed image: {}",
                    e
                ))
            })?;

        Ok(buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma};

    #[test]
    fn test_preprocess_produces_png() {
        let mut img = GrayImage::from_pixel(32, 16, Luma([220u8]));
        for x in 4..28 {
            img.put_pixel(x, 8, Luma([30u8]));
        }
        let bytes = ImageProcessor::preprocess(&DynamicImage::ImageLuma8(img)).unwrap();
        assert_eq!(&bytes[0..4], &[0x89, 0x50, 0x4E, 0x47]);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = ImageProcessor::process_image(Path::new("/nonexistent/document.jpg"));
        assert!(matches!(result, Err(MrzScanError::ImageProcessingError(_))));
    }
}
