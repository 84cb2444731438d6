//! Turn an extracted [`CourseRecord`] into the ten display fields of one
//! spreadsheet row.
//!
//! Only the primary section type (the type of the first listed section,
//! usually lectures) is summarised; other types are left out of every
//! display and of the total quota.

pub mod common_core;
pub mod group;
pub mod ranges;

use itertools::Itertools;
use serde::Serialize;
use tracing::debug;

use crate::error::{ExtractError, Outcome, Result};
use crate::model::{CourseRecord, SectionRecord};
use crate::parser::patterns::label_prefix;
use crate::tables::CommonCoreOrdering;

/// Display fields, serialised under their column titles in column order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormattedRecord {
    #[serde(rename = "Common Core Area")]
    pub common_core_area: Option<String>,
    #[serde(rename = "School")]
    pub school: Option<String>,
    #[serde(rename = "Subject Area")]
    pub subject_area: Option<String>,
    #[serde(rename = "Course Number")]
    pub course_number: Option<String>,
    #[serde(rename = "Course Title")]
    pub course_title: Option<String>,
    #[serde(rename = "Units")]
    pub units: Option<String>,
    #[serde(rename = "Instructor")]
    pub instructor: Option<String>,
    #[serde(rename = "Section")]
    pub section: Option<String>,
    #[serde(rename = "Quota for Each Section")]
    pub quota_per_section: Option<String>,
    #[serde(rename = "Total Quota")]
    pub total_quota: Option<u64>,
}

impl FormattedRecord {
    fn from_course(course: &CourseRecord) -> Self {
        FormattedRecord {
            school: course.school.clone(),
            subject_area: course.subject_area.clone(),
            course_number: course.course_number.clone(),
            course_title: course.title.clone(),
            units: course.units.clone(),
            ..Default::default()
        }
    }
}

/// Format one course. Fields computed before a failure stay filled in; a
/// section label without a type prefix is recorded but does not stop the
/// remaining steps.
pub fn format(order: &CommonCoreOrdering, course: &CourseRecord) -> Outcome<FormattedRecord> {
    let mut record = FormattedRecord::from_course(course);
    let mut errors = Vec::new();
    if let Err(e) = summarize(order, course, &mut record, &mut errors) {
        errors.push(e);
    }
    if !errors.is_empty() {
        debug!(course = %course.code(), errors = errors.len(), "formatting incomplete");
    }
    Outcome::from_parts(record, errors)
}

fn summarize(
    order: &CommonCoreOrdering,
    course: &CourseRecord,
    record: &mut FormattedRecord,
    errors: &mut Vec<ExtractError>,
) -> Result<()> {
    let tags = course.common_core_areas.as_deref().ok_or_else(|| {
        ExtractError::MalformedBlock("common core attributes were never extracted".to_string())
    })?;
    record.common_core_area = Some(common_core::normalize(order, tags)?);

    let retained = primary_sections(&course.sections, errors)?;
    let labels: Vec<&str> = retained.iter().map(|s| s.label.as_str()).collect();

    let instructors: Vec<&Vec<String>> = retained.iter().map(|s| &s.instructors).collect();
    record.instructor = Some(summarize_by(&labels, &instructors, |names| names.join("\n")));

    let quotas: Vec<u32> = retained.iter().map(|s| s.quota).collect();
    record.quota_per_section = Some(summarize_by(&labels, &quotas, |q| q.to_string()));

    record.total_quota = Some(quotas.iter().map(|&q| u64::from(q)).sum());
    record.section = Some(ranges::compress(&labels, "\n"));
    Ok(())
}

/// The leading sections of the first section's type.
///
/// The count of sections with that type prefix decides how many leading
/// sections are kept. A label without a recognisable prefix still counts
/// when it contains the previous prefix.
fn primary_sections<'a>(
    sections: &'a [SectionRecord],
    errors: &mut Vec<ExtractError>,
) -> Result<&'a [SectionRecord]> {
    let mut prefixes: Vec<&str> = Vec::with_capacity(sections.len());
    for section in sections {
        match label_prefix(&section.label) {
            Some(p) => prefixes.push(p),
            None => {
                errors.push(ExtractError::PatternMismatch(format!(
                    "section label {:?} has no type prefix",
                    section.label
                )));
                if let Some(&last) = prefixes.last() {
                    if section.label.contains(last) {
                        prefixes.push(last);
                    }
                }
            }
        }
    }

    let primary = *prefixes.first().ok_or_else(|| {
        ExtractError::MalformedBlock(if sections.is_empty() {
            "course has no sections".to_string()
        } else {
            "no section label carries a type prefix".to_string()
        })
    })?;
    let count = prefixes.iter().filter(|p| **p == primary).count();
    Ok(&sections[..count])
}

/// One rendered value when every section shares it, otherwise one
/// `"<ranges>: <value>"` line per distinct value.
fn summarize_by<K: PartialEq + Clone>(labels: &[&str], values: &[K], render: impl Fn(&K) -> String) -> String {
    match values.first() {
        Some(first) if values.iter().all_equal() => render(first),
        _ => group::group(labels, values)
            .iter()
            .map(|(value, members)| format!("{}: {}", ranges::compress(members, ", "), render(value)))
            .join("\n"),
    }
}
