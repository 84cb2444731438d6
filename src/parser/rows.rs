use crate::block::{Cell, RawRow};
use crate::error::{ExtractError, Result};
use crate::model::SectionRecord;

use super::patterns::{first_number, parse_section_column};

/// Rows with at least this many cells open a new section.
const COMPLETE_MIN_CELLS: usize = 4;
/// Section, Time, Room, Instructor, Quota, Enrol, Avail, Wait.
const COMPLETE_CELLS: usize = 8;

/// Fold the body rows of one section table into `sections`.
///
/// A complete row opens a new section; a continuation row (time, room,
/// instructor) adds to the section opened last. Sections parsed before an
/// error stay in `sections`.
pub fn merge_rows(rows: &[RawRow], sections: &mut Vec<SectionRecord>) -> Result<()> {
    for (i, row) in rows.iter().enumerate() {
        match row.cells.len() {
            0 => continue,
            n if n >= COMPLETE_MIN_CELLS => sections.push(parse_complete(row, i)?),
            _ => {
                let last = sections.last_mut().ok_or_else(|| {
                    ExtractError::MalformedBlock(format!(
                        "row {} continues a section but no section precedes it",
                        i + 1
                    ))
                })?;
                continue_section(last, row);
            }
        }
    }
    Ok(())
}

fn parse_complete(row: &RawRow, index: usize) -> Result<SectionRecord> {
    if row.cells.len() < COMPLETE_CELLS {
        return Err(ExtractError::MalformedBlock(format!(
            "row {} has {} cells, expected {}",
            index + 1,
            row.cells.len(),
            COMPLETE_CELLS
        )));
    }
    let c = &row.cells;
    let (label, code) = parse_section_column(&c[0].text)?;

    Ok(SectionRecord {
        label,
        code,
        times: vec![c[1].text.clone()],
        rooms: vec![c[2].text.clone()],
        instructors: instructor_names(&c[3]),
        quota: first_number(&c[4].text)?,
        enrolled: first_number(&c[5].text)?,
        available: first_number(&c[6].text)?,
        waitlisted: first_number(&c[7].text)?,
    })
}

fn continue_section(section: &mut SectionRecord, row: &RawRow) {
    if let Some(time) = row.cell(0) {
        section.times.push(time.text.clone());
    }

    // Compared against the first room only.
    if let Some(room) = row.cell(1) {
        if section.rooms.first() != Some(&room.text) {
            section.rooms.push(room.text.clone());
        }
    }

    if let Some(cell) = row.cell(2) {
        let names = instructor_names(cell);
        if section.instructors != names {
            section.instructors.extend(names);
        }
    }
}

/// Linked names when the cell has links, else the whole cell text ("TBA").
fn instructor_names(cell: &Cell) -> Vec<String> {
    if cell.links.is_empty() {
        vec![cell.text.clone()]
    } else {
        cell.links.clone()
    }
}
