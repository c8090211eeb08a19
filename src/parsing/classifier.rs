use log::debug;

use crate::models::MrzLines;
use crate::utils::MrzScanError;

/// A plausible MRZ line is strictly longer than this after normalization.
const MIN_CANDIDATE_LEN: usize = 20;

/// LineClassifier selects the normalized lines plausibly belonging to the
/// MRZ block and tags the one holding the holder's name.
pub struct LineClassifier;

impl LineClassifier {
    /// Keep lines longer than 20 characters that contain at least one `<`,
    /// preserving source order. Fewer than two survivors means there is no
    /// MRZ block worth decoding and the parse as a whole fails.
    pub fn classify(lines: &[String]) -> Result<MrzLines, MrzScanError> {
        let candidates: Vec<String> = lines
            .iter()
            .filter(|line| line.len() > MIN_CANDIDATE_LEN && line.contains('<'))
            .cloned()
            .collect();

        debug!("MRZ candidate lines: {:?}", candidates);

        if candidates.len() < 2 {
            return Err(MrzScanError::InsufficientMrzLines);
        }

        let name_line = candidates.iter().position(|line| Self::is_name_line(line));
        if name_line.is_none() {
            debug!("no name line among {} candidates", candidates.len());
        }

        Ok(MrzLines {
            lines: candidates,
            name_line,
        })
    }

    /// The name line carries the `<<` separator and is letter-dominant.
    fn is_name_line(line: &str) -> bool {
        let letters = line.chars().filter(|c| c.is_ascii_alphabetic()).count();
        let digits = line.chars().filter(|c| c.is_ascii_digit()).count();
        line.contains("<<") && letters > digits
    }
}
