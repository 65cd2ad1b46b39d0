// src/models.rs

use crate::error::{AqualogError, Result};

/// 一条已记录的水质读数。追加到 store 之后不再修改。
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub date: String, // 美式日期 M/D/YYYY，追加时生成
    pub ph: f64,
    pub ammonia: f64,
    pub nitrite: f64,
    pub nitrate: f64,
    pub notes: Option<String>,
}

impl LogEntry {
    pub fn value(&self, param: Parameter) -> f64 {
        match param {
            Parameter::Ph => self.ph,
            Parameter::Ammonia => self.ammonia,
            Parameter::Nitrite => self.nitrite,
            Parameter::Nitrate => self.nitrate,
        }
    }
}

/// 尚未加日期的读数，由表单输入构造
#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    pub ph: f64,
    pub ammonia: f64,
    pub nitrite: f64,
    pub nitrate: f64,
    pub notes: Option<String>,
}

impl Reading {
    /// Builds a reading from raw form text, validating every numeric field.
    pub fn parse(
        ph: &str,
        ammonia: &str,
        nitrite: &str,
        nitrate: &str,
        notes: Option<&str>,
    ) -> Result<Self> {
        Ok(Reading {
            ph: parse_value(Parameter::Ph, ph)?,
            ammonia: parse_value(Parameter::Ammonia, ammonia)?,
            nitrite: parse_value(Parameter::Nitrite, nitrite)?,
            nitrate: parse_value(Parameter::Nitrate, nitrate)?,
            notes: normalize_notes(notes),
        })
    }

    pub fn into_entry(self, date: String) -> LogEntry {
        LogEntry {
            date,
            ph: self.ph,
            ammonia: self.ammonia,
            nitrite: self.nitrite,
            nitrate: self.nitrate,
            notes: self.notes,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parameter {
    Ph,
    Ammonia,
    Nitrite,
    Nitrate,
}

impl Parameter {
    pub const ALL: [Parameter; 4] = [
        Parameter::Ph,
        Parameter::Ammonia,
        Parameter::Nitrite,
        Parameter::Nitrate,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Parameter::Ph => "pH",
            Parameter::Ammonia => "Ammonia",
            Parameter::Nitrite => "Nitrite",
            Parameter::Nitrate => "Nitrate",
        }
    }

    /// Largest value a test kit can plausibly report. Anything above is a typo.
    pub fn max_plausible(self) -> f64 {
        match self {
            Parameter::Ph => 14.0,
            Parameter::Ammonia | Parameter::Nitrite | Parameter::Nitrate => 1000.0,
        }
    }

    /// Form prompt, including the unit where there is one.
    pub fn prompt(self) -> &'static str {
        match self {
            Parameter::Ph => "pH",
            Parameter::Ammonia => "Ammonia (ppm)",
            Parameter::Nitrite => "Nitrite (ppm)",
            Parameter::Nitrate => "Nitrate (ppm)",
        }
    }
}

/// 解析单个数值字段：必须是有限的非负数且不超过 max_plausible，NaN/inf/负数一律拒绝
pub fn parse_value(param: Parameter, input: &str) -> Result<f64> {
    let trimmed = input.trim();
    let invalid = || AqualogError::InvalidReading {
        field: param.label(),
        input: trimmed.to_string(),
    };
    let value: f64 = trimmed.parse().map_err(|_| invalid())?;
    if !value.is_finite() || value < 0.0 || value > param.max_plausible() {
        return Err(invalid());
    }
    Ok(value)
}

fn normalize_notes(notes: Option<&str>) -> Option<String> {
    notes
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_reading() {
        let reading = Reading::parse("7.2", "0.25", "0", " 10 ", Some("  water change  ")).unwrap();
        assert_eq!(reading.ph, 7.2);
        assert_eq!(reading.ammonia, 0.25);
        assert_eq!(reading.nitrite, 0.0);
        assert_eq!(reading.nitrate, 10.0);
        assert_eq!(reading.notes.as_deref(), Some("water change"));
    }

    #[test]
    fn blank_notes_become_none() {
        let reading = Reading::parse("7", "0", "0", "0", Some("   ")).unwrap();
        assert_eq!(reading.notes, None);
    }

    #[test]
    fn rejects_non_numeric_text() {
        let err = parse_value(Parameter::Ammonia, "abc").unwrap_err();
        match err {
            AqualogError::InvalidReading { field, input } => {
                assert_eq!(field, "Ammonia");
                assert_eq!(input, "abc");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn rejects_nan_infinity_and_negatives() {
        for input in ["NaN", "inf", "-inf", "-0.5", ""] {
            assert!(parse_value(Parameter::Ph, input).is_err(), "accepted {input:?}");
        }
    }

    #[test]
    fn rejects_values_no_kit_reports() {
        assert!(parse_value(Parameter::Nitrate, "1e300").is_err());
        assert!(parse_value(Parameter::Ph, "14.1").is_err());
        assert_eq!(parse_value(Parameter::Ph, "14").unwrap(), 14.0);
        assert_eq!(parse_value(Parameter::Nitrate, "1000").unwrap(), 1000.0);
    }

    #[test]
    fn reading_parse_reports_the_first_bad_field() {
        let err = Reading::parse("7", "0", "x", "y", None).unwrap_err();
        assert!(matches!(err, AqualogError::InvalidReading { field: "Nitrite", .. }));
    }

    #[test]
    fn entry_value_matches_fields() {
        let entry = Reading::parse("6.8", "0.5", "0.25", "15", None)
            .unwrap()
            .into_entry("1/2/2026".to_string());
        assert_eq!(entry.value(Parameter::Ph), 6.8);
        assert_eq!(entry.value(Parameter::Ammonia), 0.5);
        assert_eq!(entry.value(Parameter::Nitrite), 0.25);
        assert_eq!(entry.value(Parameter::Nitrate), 15.0);
        assert_eq!(entry.date, "1/2/2026");
    }
}
