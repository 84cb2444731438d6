/// One meeting pattern of a course, as printed in the section table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionRecord {
    pub label: String,
    pub code: String,
    pub times: Vec<String>,
    pub rooms: Vec<String>,
    pub instructors: Vec<String>,
    pub quota: u32,
    pub enrolled: u32,
    pub available: u32,
    pub waitlisted: u32,
}

/// Parsed `<SUBJECT> <NUMBER> - <TITLE> (<UNITS> unit[s])` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseHeader {
    pub subject_area: String,
    pub course_number: String,
    pub title: String,
    pub units: String,
}

/// Extracted course. Header fields stay `None` when extraction stopped
/// before reaching them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseRecord {
    pub subject_area: Option<String>,
    pub course_number: Option<String>,
    pub title: Option<String>,
    pub units: Option<String>,
    pub school: Option<String>,
    /// Raw tags in attribute order, duplicates included. `None` when
    /// extraction stopped before the attribute line was read.
    pub common_core_areas: Option<Vec<String>>,
    pub sections: Vec<SectionRecord>,
}

impl CourseRecord {
    pub fn apply_header(&mut self, header: CourseHeader) {
        self.subject_area = Some(header.subject_area);
        self.course_number = Some(header.course_number);
        self.title = Some(header.title);
        self.units = Some(header.units);
    }

    /// `"COMP 1021"`, or `"?"` when the header never parsed.
    pub fn code(&self) -> String {
        match (&self.subject_area, &self.course_number) {
            (Some(s), Some(n)) => format!("{} {}", s, n),
            _ => "?".to_string(),
        }
    }
}
