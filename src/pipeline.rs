use tracing::{info, warn};

use crate::block::CourseBlock;
use crate::format;
use crate::parser;
use crate::report::CourseRow;
use crate::tables::Tables;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Extract then format one block. Formatting always runs, on whatever the
/// extractor managed to fill in.
pub fn process_block(tables: &Tables, block: &CourseBlock) -> CourseRow {
    let extracted = parser::extract(&tables.schools, block);
    let course = extracted.value();
    let formatted = format::format(&tables.core_order, course);

    let ok = extracted.is_ok() && formatted.is_ok();
    let errors = extracted
        .errors()
        .iter()
        .chain(formatted.errors())
        .map(|e| format!("{}: {}", course.code(), e))
        .collect();
    let (record, _, _) = formatted.into_parts();

    CourseRow { record, ok, errors }
}

/// Process blocks independently; output order is input order.
#[cfg(feature = "rayon")]
pub fn process_batch(tables: &Tables, blocks: &[CourseBlock]) -> Vec<CourseRow> {
    blocks.par_iter().map(|b| process_block(tables, b)).collect()
}

#[cfg(not(feature = "rayon"))]
pub fn process_batch(tables: &Tables, blocks: &[CourseBlock]) -> Vec<CourseRow> {
    blocks.iter().map(|b| process_block(tables, b)).collect()
}

pub struct BatchStats {
    pub total: usize,
    pub ok: usize,
    pub failed: usize,
}

impl BatchStats {
    pub fn of(rows: &[CourseRow]) -> Self {
        let ok = rows.iter().filter(|r| r.ok).count();
        BatchStats {
            total: rows.len(),
            ok,
            failed: rows.len() - ok,
        }
    }

    pub fn log(&self) {
        info!(total = self.total, ok = self.ok, "batch processed");
        if self.failed > 0 {
            warn!(failed = self.failed, "some courses could not be fully parsed");
        }
    }

    pub fn print(&self) {
        println!(
            "Processed {} courses ({} ok, {} with errors).",
            self.total, self.ok, self.failed
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block;

    fn fixture() -> Vec<CourseBlock> {
        let json = std::fs::read_to_string("tests/fixtures/catalog.json").unwrap();
        block::from_json(&json).unwrap()
    }

    #[test]
    fn comp1021_end_to_end() {
        let blocks = fixture();
        let b = blocks.iter().find(|b| b.header.starts_with("COMP 1021")).unwrap();
        let row = process_block(&Tables::default(), b);
        assert!(row.ok, "{:?}", row.errors);
        let r = &row.record;
        assert_eq!(r.common_core_area.as_deref(), Some("S&T"));
        assert_eq!(r.school.as_deref(), Some("SENG"));
        assert_eq!(r.subject_area.as_deref(), Some("COMP"));
        assert_eq!(r.course_number.as_deref(), Some("1021"));
        assert_eq!(r.course_title.as_deref(), Some("Intro to Computing"));
        assert_eq!(r.units.as_deref(), Some("3"));
        assert_eq!(r.instructor.as_deref(), Some("CHAN, Tai Man\nLEE, Ka Ho"));
        assert_eq!(r.section.as_deref(), Some("L1 - L2"));
        assert_eq!(r.quota_per_section.as_deref(), Some("50"));
        assert_eq!(r.total_quota, Some(100));
    }

    #[test]
    fn humanities_variant_and_tutorials() {
        let blocks = fixture();
        let b = blocks.iter().find(|b| b.header.starts_with("HUMA 1000")).unwrap();
        let row = process_block(&Tables::default(), b);
        assert!(row.ok, "{:?}", row.errors);
        let r = &row.record;
        assert_eq!(r.common_core_area.as_deref(), Some("H-SSC"));
        assert_eq!(r.section.as_deref(), Some("L1"));
        assert_eq!(r.instructor.as_deref(), Some("HO, Wing\nAU, Man Kit"));
        assert_eq!(r.total_quota, Some(120));
    }

    #[test]
    fn bad_header_leaves_every_field_empty() {
        let b = CourseBlock {
            header: "Not a course".into(),
            attributes: "Common Core (H)".into(),
            rows: vec![],
        };
        let row = process_block(&Tables::default(), &b);
        assert!(!row.ok);
        assert!(row.errors[0].starts_with("?: "));
        assert_eq!(row.record.common_core_area, None);
        assert_eq!(row.record, format::FormattedRecord::default());
    }

    #[test]
    fn quotas_past_u32_total_in_pipeline() {
        let json = r#"[{
            "header": "COMP 1021 - Intro to Computing (3 units)",
            "attributes": "Common Core (S&T)",
            "rows": [
                {"cells": [{"text": "L1 (1001)"}, {"text": "Mo 09:00AM - 10:20AM"}, {"text": "LTA"}, {"text": "CHAN"},
                           {"text": "4000000000"}, {"text": "0"}, {"text": "4000000000"}, {"text": "0"}]},
                {"cells": [{"text": "L2 (1002)"}, {"text": "Tu 09:00AM - 10:20AM"}, {"text": "LTB"}, {"text": "CHAN"},
                           {"text": "4000000000"}, {"text": "0"}, {"text": "4000000000"}, {"text": "0"}]}
            ]
        }]"#;
        let blocks = block::from_json(json).unwrap();
        let row = process_block(&Tables::default(), &blocks[0]);
        assert!(row.ok, "{:?}", row.errors);
        assert_eq!(row.record.total_quota, Some(8_000_000_000));
        assert_eq!(row.record.section.as_deref(), Some("L1 - L2"));
    }

    #[test]
    fn batch_keeps_order_and_isolates_failures() {
        let blocks = fixture();
        let rows = process_batch(&Tables::default(), &blocks);
        assert_eq!(rows.len(), blocks.len());
        for (row, block) in rows.iter().zip(&blocks) {
            if let Some(title) = &row.record.course_title {
                assert!(block.header.contains(title.as_str()));
            }
        }

        let failed: Vec<_> = rows.iter().filter(|r| !r.ok).collect();
        assert_eq!(failed.len(), 2);
        assert!(failed.iter().all(|r| !r.errors.is_empty()));
        assert!(failed.iter().any(|r| r.errors[0].starts_with("XYZW 1000: lookup failed")));

        let stats = BatchStats::of(&rows);
        assert_eq!(stats.total, blocks.len());
        assert_eq!(stats.failed, 2);
    }
}
