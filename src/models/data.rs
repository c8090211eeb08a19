use serde::{Deserialize, Serialize};

/// Identity fields recovered from an MRZ block.
///
/// Any subset may be absent: OCR noise routinely defeats individual field
/// groups, and a partial result is the normal outcome rather than an error.
/// Absent fields are skipped during serialization so a failed extraction
/// never shows up as a JSON key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MrzFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lastname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub firstname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cin: Option<String>,
}

impl MrzFields {
    pub fn is_empty(&self) -> bool {
        self.lastname.is_none()
            && self.firstname.is_none()
            && self.date_of_birth.is_none()
            && self.gender.is_none()
            && self.expiry_date.is_none()
            && self.cin.is_none()
    }
}

/// Candidate MRZ lines in document order.
///
/// Order is preserved from the source text: it approximates the physical
/// line order of the MRZ block, which field extraction reads positionally.
/// `name_line` is the index within `lines` of the first line judged to hold
/// the holder's name, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MrzLines {
    pub lines: Vec<String>,
    pub name_line: Option<usize>,
}
