use tracing::debug;

use crate::block::CourseBlock;
use crate::error::{Outcome, Result};
use crate::model::CourseRecord;
use crate::tables::SchoolLookup;

use super::patterns::{common_core_tags, parse_header};
use super::rows::merge_rows;

/// Extract one course block. Whatever was parsed before a failure is kept
/// in the returned record.
pub fn extract(schools: &SchoolLookup, block: &CourseBlock) -> Outcome<CourseRecord> {
    let mut course = CourseRecord::default();
    match fill(schools, block, &mut course) {
        Ok(()) => Outcome::Success(course),
        Err(e) => {
            debug!(course = %course.code(), error = %e, "extraction failed");
            Outcome::Failure {
                partial: course,
                errors: vec![e],
            }
        }
    }
}

fn fill(schools: &SchoolLookup, block: &CourseBlock, course: &mut CourseRecord) -> Result<()> {
    course.apply_header(parse_header(&block.header)?);

    let subject = course.subject_area.as_deref().unwrap_or_default();
    course.school = Some(schools.school(subject)?.to_string());

    course.common_core_areas = Some(common_core_tags(&block.attributes));
    merge_rows(&block.rows, &mut course.sections)
}
