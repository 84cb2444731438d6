use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::format::FormattedRecord;

/// One output row plus the out-of-band status the sheet writer uses to
/// flag failed courses.
#[derive(Debug, Clone, Serialize)]
pub struct CourseRow {
    #[serde(flatten)]
    pub record: FormattedRecord,
    pub ok: bool,
    pub errors: Vec<String>,
}

pub fn write_json(path: &Path, rows: &[CourseRow]) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut out = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut out, rows)?;
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}

/// Compact, readable table of formatted courses. Failed rows are marked `!`.
pub fn print_overview(rows: &[&CourseRow], limit: usize) {
    println!(
        "{:1} {:<14} | {:<6} | {:<10} | {:<32} | {:<20} | {:>5}",
        "", "Area", "School", "Course", "Title", "Sections", "Quota"
    );
    println!("{}", "-".repeat(103));

    for row in rows.iter().take(limit) {
        let r = &row.record;
        let course = format!(
            "{} {}",
            r.subject_area.as_deref().unwrap_or("?"),
            r.course_number.as_deref().unwrap_or("?")
        );
        let total = r.total_quota.map(|q| q.to_string()).unwrap_or_else(|| "-".into());

        println!(
            "{:1} {:<14} | {:<6} | {:<10} | {:<32} | {:<20} | {:>5}",
            if row.ok { "" } else { "!" },
            truncate(&one_line(r.common_core_area.as_deref()), 14),
            truncate(&one_line(r.school.as_deref()), 6),
            course,
            truncate(&one_line(r.course_title.as_deref()), 32),
            truncate(&one_line(r.section.as_deref()), 20),
            total
        );
    }

    let errors: Vec<&String> = rows.iter().take(limit).flat_map(|r| &r.errors).collect();
    if !errors.is_empty() {
        println!("\n--- Errors ---");
        for e in errors {
            println!("  {}", e);
        }
    }

    println!("\n{} of {} courses shown", rows.len().min(limit), rows.len());
}

fn one_line(s: Option<&str>) -> String {
    s.unwrap_or("-").replace('\n', ", ")
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}
