use crate::numeric::parse_int_or_zero;
use serde::{Deserialize, Deserializer};

/// One row of the remote-area schools dataset.
///
/// The source file is untyped, so every attribute is kept as text exactly as
/// it was read. Counts are only turned into numbers by the accessor methods
/// below, never stored parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct School {
    /// School-year token, e.g. "112".
    #[serde(rename = "學年度", deserialize_with = "null_as_empty")]
    pub year: String,
    #[serde(rename = "縣市名稱", deserialize_with = "null_as_empty")]
    pub county: String,
    #[serde(rename = "鄉鎮市區", deserialize_with = "null_as_empty")]
    pub district: String,
    /// Identifier used as the detail-page key.
    #[serde(rename = "學校代碼", deserialize_with = "null_as_empty")]
    pub code: String,
    #[serde(rename = "學校名稱", deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(rename = "地址", deserialize_with = "null_as_empty")]
    pub address: String,
    #[serde(rename = "電話", deserialize_with = "null_as_empty")]
    pub phone: String,
    #[serde(rename = "男學生數[人]", deserialize_with = "null_as_empty")]
    pub male_count: String,
    #[serde(rename = "女學生數[人]", deserialize_with = "null_as_empty")]
    pub female_count: String,
    #[serde(rename = "地區屬性", deserialize_with = "null_as_empty")]
    pub region_type: String,
    /// Indigenous student percentage, rendered as-is.
    #[serde(rename = "原住民學生比率", deserialize_with = "null_as_empty")]
    pub indig_ratio: String,
    #[serde(rename = "上學年男畢業生數[人]", deserialize_with = "null_as_empty")]
    pub grad_male: String,
    #[serde(rename = "上學年女畢業生數[人]", deserialize_with = "null_as_empty")]
    pub grad_female: String,
}

/// Reads a text cell, treating `null` like a missing key.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl School {
    pub fn male_students(&self) -> i64 {
        parse_int_or_zero(&self.male_count)
    }

    pub fn female_students(&self) -> i64 {
        parse_int_or_zero(&self.female_count)
    }

    /// Current enrolment: male plus female students.
    pub fn student_total(&self) -> i64 {
        self.male_students().saturating_add(self.female_students())
    }

    /// Last year's graduates, male plus female.
    pub fn graduate_total(&self) -> i64 {
        parse_int_or_zero(&self.grad_male).saturating_add(parse_int_or_zero(&self.grad_female))
    }
}
