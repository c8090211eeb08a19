use chrono::{Datelike, Local};
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::models::{MrzFields, MrzLines};

lazy_static! {
    // Birth date, an optional check digit amid stray non-digit marks, the
    // sex letter, more stray marks, then the expiry date. The gaps must not
    // absorb digit runs: the birth date is the six-digit run adjacent to
    // the sex letter, not the document number earlier in the line.
    static ref DATE_GENDER_PATTERN: Regex =
        Regex::new(r"([0-9]{6})\D*[0-9]?([MF])\D*([0-9]{6})").unwrap();
}

/// Two-digit birth years further than this beyond the current year are
/// placed in the previous century.
const BIRTH_YEAR_PIVOT_OFFSET: i32 = 15;

/// FieldExtractor decodes the name, date/gender and personal-number groups
/// out of the classified MRZ lines.
///
/// The groups are independent: each is attempted unconditionally, and a
/// group that cannot be decoded is left out of the result without
/// affecting the others. The extractor itself never fails.
pub struct FieldExtractor;

impl FieldExtractor {
    pub fn extract(mrz: &MrzLines, name_from_name_line: bool) -> MrzFields {
        let mut fields = MrzFields::default();

        match Self::decode_name(mrz, name_from_name_line) {
            Some((lastname, firstname)) => {
                fields.lastname = Some(lastname);
                fields.firstname = Some(firstname);
            }
            None => debug!("name group not decodable"),
        }

        let current_yy = Local::now().year() % 100;
        match Self::decode_dates_and_gender(mrz, current_yy) {
            Some((date_of_birth, gender, expiry_date)) => {
                fields.date_of_birth = Some(date_of_birth);
                fields.gender = Some(gender);
                fields.expiry_date = Some(expiry_date);
            }
            None => debug!("date/gender group not decodable"),
        }

        match Self::decode_cin(mrz) {
            Some(cin) => fields.cin = Some(cin),
            None => debug!("personal-number group not decodable"),
        }

        fields
    }

    /// Surname and given name. A name line must have been identified, but
    /// the split itself reads the third candidate line unless
    /// `from_name_line` redirects it to the identified line.
    fn decode_name(mrz: &MrzLines, from_name_line: bool) -> Option<(String, String)> {
        let name_index = mrz.name_line?;
        let line = if from_name_line {
            mrz.lines.get(name_index)?
        } else {
            mrz.lines.get(2)?
        };

        let spaced = line.replace('<', " ");
        let parts: Vec<&str> = spaced
            .trim()
            .split("  ")
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect();

        match parts.as_slice() {
            [lastname, firstname] => Some((lastname.to_string(), firstname.to_string())),
            _ => None,
        }
    }

    /// Date of birth, gender and expiry date from the second candidate
    /// line. The whole group is omitted when the pattern does not match.
    fn decode_dates_and_gender(mrz: &MrzLines, current_yy: i32) -> Option<(String, String, String)> {
        let line = mrz.lines.get(1)?;
        let caps = DATE_GENDER_PATTERN.captures(line)?;

        let date_of_birth = Self::format_birth_date(&caps[1], current_yy);
        let gender = caps[2].to_string();
        let expiry_date = Self::format_expiry_date(&caps[3]);

        Some((date_of_birth, gender, expiry_date))
    }

    /// `YYMMDD` → `YYYY-MM-DD`. A two-digit year more than
    /// `BIRTH_YEAR_PIVOT_OFFSET` years past the current one belongs to the
    /// previous century.
    fn format_birth_date(digits: &str, current_yy: i32) -> String {
        let year: i32 = digits[0..2].parse().unwrap_or(0);
        let century = if year > current_yy + BIRTH_YEAR_PIVOT_OFFSET {
            "19"
        } else {
            "20"
        };
        format!("{}{:02}-{}-{}", century, year, &digits[2..4], &digits[4..6])
    }

    /// `YYMMDD` → `YYYY-MM-DD`. The expiry century is fixed to `20`; the
    /// scheme stops working for documents expiring after 2099.
    fn format_expiry_date(digits: &str) -> String {
        format!("20{}-{}-{}", &digits[0..2], &digits[2..4], &digits[4..6])
    }

    /// The personal number sits in the second `<`-separated segment of the
    /// first candidate line, minus that segment's leading character.
    fn decode_cin(mrz: &MrzLines) -> Option<String> {
        let line = mrz.lines.first()?;
        let segment = line.split('<').nth(1)?;
        // A segment of one character would leave an empty number behind.
        if segment.len() < 2 {
            return None;
        }
        Some(segment[1..].to_string())
    }
}
