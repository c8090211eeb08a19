/// LineNormalizer canonicalizes raw OCR output into the restricted MRZ
/// alphabet `A-Z`, `0-9`, `<`.
pub struct LineNormalizer;

impl LineNormalizer {
    /// Split raw text on line breaks, drop blank lines, upper-case the rest
    /// and strip every character outside the MRZ alphabet. Line order is
    /// preserved. Never fails; an empty input yields an empty sequence.
    pub fn normalize(raw_text: &str) -> Vec<String> {
        raw_text
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(Self::normalize_line)
            .collect()
    }

    fn normalize_line(line: &str) -> String {
        line.chars()
            .map(|c| c.to_ascii_uppercase())
            .filter(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || *c == '<')
            .collect()
    }
}
