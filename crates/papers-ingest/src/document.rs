//! Parsing and validation of the catalogue JSON document.
//!
//! The document is a JSON object of grades, each an object of subjects, each
//! an array of paper records:
//!
//! ```json
//! { "Grade 10": { "Math": [ { "year": 2021, "paper": "b.pdf", "memo": "b-memo.pdf" } ] } }
//! ```
//!
//! Parsing happens in two passes. The shape (nesting, key order) is read
//! first; a document that is not shaped like the above fails with
//! [`LoadError::Parse`]. Records are then validated one by one and the first
//! bad record rejects the whole document with [`LoadError::Validation`].

use std::fmt;
use std::marker::PhantomData;

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde_json::{Number, Value};

use papers_model::{
    Catalogue, Grade, MAX_YEAR, MIN_YEAR, Paper, PaperProblem, Subject, ValidationError,
};

use crate::error::{LoadError, Result};

/// JSON object entries kept in document order, duplicates included.
///
/// Duplicates are left for [`Catalogue::new`] to reject so they surface as
/// validation errors instead of being silently overwritten.
struct OrderedEntries<V>(Vec<(String, V)>);

impl<'de, V> Deserialize<'de> for OrderedEntries<V>
where
    V: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_map(EntriesVisitor(PhantomData))
    }
}

struct EntriesVisitor<V>(PhantomData<V>);

impl<'de, V> Visitor<'de> for EntriesVisitor<V>
where
    V: Deserialize<'de>,
{
    type Value = OrderedEntries<V>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a JSON object")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> std::result::Result<Self::Value, A::Error> {
        let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((key, value)) = map.next_entry::<String, V>()? {
            entries.push((key, value));
        }
        Ok(OrderedEntries(entries))
    }
}

/// A paper record before validation. Unknown fields are ignored.
#[derive(Debug, Default, serde::Deserialize)]
struct RawPaper {
    #[serde(default)]
    year: Option<Value>,
    #[serde(default)]
    paper: Option<Value>,
    #[serde(default)]
    memo: Option<Value>,
    #[serde(default)]
    paper_type: Option<Value>,
}

type RawDocument = OrderedEntries<OrderedEntries<Vec<RawPaper>>>;

/// Parse and validate a catalogue document.
pub fn parse_catalogue(bytes: &[u8]) -> Result<Catalogue> {
    let raw: RawDocument = serde_json::from_slice(bytes)?;

    let mut grades = Vec::with_capacity(raw.0.len());
    for (grade_name, subjects) in raw.0 {
        let mut grade_subjects = Vec::with_capacity(subjects.0.len());
        for (subject_name, records) in subjects.0 {
            let mut papers = Vec::with_capacity(records.len());
            for (index, record) in records.into_iter().enumerate() {
                let paper = validate_record(record).map_err(|problem| {
                    ValidationError::InvalidPaper {
                        grade: grade_name.clone(),
                        subject: subject_name.clone(),
                        index,
                        problem,
                    }
                })?;
                papers.push(paper);
            }
            grade_subjects.push(Subject::new(subject_name, papers));
        }
        grades.push(Grade::new(grade_name, grade_subjects));
    }

    Catalogue::new(grades).map_err(LoadError::from)
}

fn validate_record(record: RawPaper) -> std::result::Result<Paper, PaperProblem> {
    let year = match record.year {
        None => return Err(PaperProblem::MissingField("year")),
        Some(Value::Number(number)) => year_from_number(&number)?,
        Some(other) => return Err(PaperProblem::NonIntegerYear(other.to_string())),
    };
    let link = required_string(record.paper, "paper")?;
    let memo = optional_string(record.memo, "memo")?;
    let paper_type = optional_string(record.paper_type, "paper_type")?;

    Ok(Paper::new(year, link)?
        .with_memo(memo)
        .with_paper_type(paper_type))
}

/// Integers too large for `i64` and whole-valued floats outside the year
/// range are out of range rather than non-integer.
fn year_from_number(number: &Number) -> std::result::Result<i64, PaperProblem> {
    if let Some(year) = number.as_i64() {
        return Ok(year);
    }
    if number.is_u64() {
        return Err(PaperProblem::YearOutOfRange(i64::MAX));
    }
    if let Some(value) = number.as_f64().filter(|value| value.fract() == 0.0) {
        // `as` saturates, so anything past i64 lands on an endpoint.
        let year = value as i64;
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(PaperProblem::YearOutOfRange(year));
        }
    }
    Err(PaperProblem::NonIntegerYear(number.to_string()))
}

fn required_string(
    value: Option<Value>,
    field: &'static str,
) -> std::result::Result<String, PaperProblem> {
    optional_string(value, field)?.ok_or(PaperProblem::MissingField(field))
}

fn optional_string(
    value: Option<Value>,
    field: &'static str,
) -> std::result::Result<Option<String>, PaperProblem> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text)),
        Some(_) => Err(PaperProblem::NotAString(field)),
    }
}
