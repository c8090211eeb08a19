use log::debug;

use crate::models::MrzFields;
use crate::parsing::classifier::LineClassifier;
use crate::parsing::extractor::FieldExtractor;
use crate::parsing::normalizer::LineNormalizer;
use crate::utils::MrzScanError;

/// Parser knobs.
#[derive(Debug, Clone, Copy, Default)]
pub struct MrzParserConfig {
    /// Read the surname/given-name split from the line identified as the
    /// name line instead of the third candidate line. Off by default.
    pub name_from_name_line: bool,
}

/// MrzParser turns raw OCR text into identity fields.
///
/// The parse is pure and synchronous: no I/O, no shared state, identical
/// input gives an identical result. Partial results are the normal outcome
/// of noisy input; the only fatal case is an input without at least two
/// plausible MRZ lines.
pub struct MrzParser {
    config: MrzParserConfig,
}

impl MrzParser {
    pub fn new() -> Self {
        Self::with_config(MrzParserConfig::default())
    }

    pub fn with_config(config: MrzParserConfig) -> Self {
        MrzParser { config }
    }

    pub fn parse(&self, raw_text: &str) -> Result<MrzFields, MrzScanError> {
        let normalized = LineNormalizer::normalize(raw_text);
        let mrz = LineClassifier::classify(&normalized)?;
        let fields = FieldExtractor::extract(&mrz, self.config.name_from_name_line);
        debug!("parsed MRZ fields: {:?}", fields);
        Ok(fields)
    }
}

impl Default for MrzParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "P<UTOERIKSSON<<ANNA<MARIA<<<<<<<<<<<<<<<<<<<\n\
                          L898902C<3UTO6908061F9406236<<<<<<<<<<<<<<<4\n\
                          SOMEFILLERLINE<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<";

    #[test]
    fn test_sample_document_fields() {
        let fields = MrzParser::new().parse(SAMPLE).unwrap();
        assert_eq!(fields.gender, Some("F".to_string()));
        assert_eq!(fields.date_of_birth, Some("1969-08-06".to_string()));
        assert_eq!(fields.expiry_date, Some("2094-06-23".to_string()));
        assert_eq!(fields.cin, Some("TOERIKSSON".to_string()));
        // The third candidate line holds no double-space boundary, so the
        // name group is omitted.
        assert_eq!(fields.lastname, None);
        assert_eq!(fields.firstname, None);
    }

    #[test]
    fn test_empty_input_is_insufficient() {
        let result = MrzParser::new().parse("");
        assert!(matches!(result, Err(MrzScanError::InsufficientMrzLines)));
    }

    #[test]
    fn test_short_noise_is_insufficient() {
        let result = MrzParser::new().parse("hello world\nnot an mrz\n<<<\n");
        assert!(matches!(result, Err(MrzScanError::InsufficientMrzLines)));
    }

    #[test]
    fn test_parse_is_idempotent() {
        let parser = MrzParser::new();
        let first = parser.parse(SAMPLE).unwrap();
        let second = parser.parse(SAMPLE).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_lowercase_noisy_input_still_parses() {
        let noisy = "p<utoeriksson<<anna<maria<<<<<<<<<<<<<<<<<<<\n\
                     l898902c<3uto 6908061f 9406236<<<<<<<<<<<<<<<4\n\
                     somefillerline<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<";
        let fields = MrzParser::new().parse(noisy).unwrap();
        assert_eq!(fields.gender, Some("F".to_string()));
        assert_eq!(fields.date_of_birth, Some("1969-08-06".to_string()));
    }

    #[test]
    fn test_corrupt_date_line_leaves_other_groups_intact() {
        let text = "P<UTOERIKSSON<<ANNA<MARIA<<<<<<<<<<<<<<<<<<<\n\
                    NODIGITSONTHISLINE<<<<<<<<<<<<<<<<<<<<<<<<<<\n\
                    DOE<<JOHN<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<";
        let fields = MrzParser::new().parse(text).unwrap();
        assert_eq!(fields.date_of_birth, None);
        assert_eq!(fields.gender, None);
        assert_eq!(fields.expiry_date, None);
        assert_eq!(fields.lastname, Some("DOE".to_string()));
        assert_eq!(fields.firstname, Some("JOHN".to_string()));
        assert_eq!(fields.cin, Some("TOERIKSSON".to_string()));
    }

    #[test]
    fn test_corrupt_first_line_leaves_dates_intact() {
        let text = "AAAAAAAAAAAAAAAAAAAAAA<\n\
                    L898902C<3UTO6908061F9406236<<<<<<<<<<<<<<<4\n\
                    DOE<<JOHN<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<";
        let fields = MrzParser::new().parse(text).unwrap();
        assert_eq!(fields.cin, None);
        assert_eq!(fields.gender, Some("F".to_string()));
        assert_eq!(fields.date_of_birth, Some("1969-08-06".to_string()));
        assert_eq!(fields.expiry_date, Some("2094-06-23".to_string()));
        assert_eq!(fields.lastname, Some("DOE".to_string()));
    }

    #[test]
    fn test_name_line_config_changes_name_source() {
        let parser = MrzParser::with_config(MrzParserConfig {
            name_from_name_line: true,
        });
        let fields = parser.parse(SAMPLE).unwrap();
        // With the flag set the name decode reads the identified name line.
        assert_eq!(fields.lastname, Some("P UTOERIKSSON".to_string()));
        assert_eq!(fields.firstname, Some("ANNA MARIA".to_string()));
    }
}
