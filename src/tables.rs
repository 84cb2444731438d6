//! Static lookup tables: subject area → school, and the display order of
//! common core tags. Each can be overridden by a JSON file; when the file is
//! missing or unreadable the built-in table is used.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{ExtractError, Result};

const DEFAULT_SCHOOLS: &[(&str, &str)] = &[
    ("HLTH", "DSTO"),
    ("ENVR", "IPO"),
    ("SUST", "IPO"),
    ("ENTR", "JS"),
    ("RMBI", "JS"),
    ("ACCT", "SBM"),
    ("ECON", "SBM"),
    ("FINA", "SBM"),
    ("ISOM", "SBM"),
    ("MARK", "SBM"),
    ("MGMT", "SBM"),
    ("BIEN", "SENG"),
    ("BMED", "SENG"),
    ("CENG", "SENG"),
    ("CIVL", "SENG"),
    ("COMP", "SENG"),
    ("ELEC", "SENG"),
    ("ENGG", "SENG"),
    ("IEDA", "SENG"),
    ("IELM", "SENG"),
    ("ISDN", "SENG"),
    ("MECH", "SENG"),
    ("HART", "SHSS"),
    ("HUMA", "SHSS"),
    ("LANG", "SHSS"),
    ("SHSS", "SHSS"),
    ("SOSC", "SHSS"),
    ("CHEM", "SSCI"),
    ("LIFS", "SSCI"),
    ("MATH", "SSCI"),
    ("OCES", "SSCI"),
    ("PHYS", "SSCI"),
    ("SCIE", "SSCI"),
    ("PPOL", "IPO"),
];

const DEFAULT_CORE_ORDER: &[&str] = &[
    "H-SSC", "SA-SSC", "S&T-SSC", "QR-SSC", "C-Comm-SSC", "Arts-SSC", "H", "SA", "S&T", "QR",
    "C-Comm", "E-Comm", "Arts", "HLTH",
];

#[derive(Debug, Clone)]
pub struct SchoolLookup {
    by_subject: HashMap<String, String>,
}

impl Default for SchoolLookup {
    fn default() -> Self {
        SchoolLookup {
            by_subject: DEFAULT_SCHOOLS
                .iter()
                .map(|(s, school)| (s.to_string(), school.to_string()))
                .collect(),
        }
    }
}

impl SchoolLookup {
    /// Load `{"COMP": "SENG", ...}` from `path`, or fall back to the default.
    pub fn load(path: &Path) -> Self {
        match read_json::<HashMap<String, String>>(path) {
            Some(by_subject) => SchoolLookup { by_subject },
            None => Self::default(),
        }
    }

    pub fn school(&self, subject_area: &str) -> Result<&str> {
        self.by_subject
            .get(subject_area)
            .map(|s| s.as_str())
            .ok_or_else(|| ExtractError::Lookup(format!("no school for subject area {:?}", subject_area)))
    }

    /// Entries sorted by subject code.
    pub fn entries(&self) -> Vec<(&str, &str)> {
        let mut v: Vec<_> = self
            .by_subject
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        v.sort_unstable();
        v
    }
}

#[derive(Debug, Clone)]
pub struct CommonCoreOrdering {
    tags: Vec<String>,
    rank: HashMap<String, usize>,
}

impl Default for CommonCoreOrdering {
    fn default() -> Self {
        Self::from_tags(DEFAULT_CORE_ORDER.iter().map(|t| t.to_string()).collect())
    }
}

impl CommonCoreOrdering {
    pub fn from_tags(tags: Vec<String>) -> Self {
        let rank = tags.iter().enumerate().map(|(i, t)| (t.clone(), i)).collect();
        CommonCoreOrdering { tags, rank }
    }

    /// Load `["H-SSC", "SA-SSC", ...]` from `path`, or fall back to the default.
    pub fn load(path: &Path) -> Self {
        match read_json::<Vec<String>>(path) {
            Some(tags) => Self::from_tags(tags),
            None => Self::default(),
        }
    }

    pub fn rank(&self, tag: &str) -> Result<usize> {
        self.rank
            .get(tag)
            .copied()
            .ok_or_else(|| ExtractError::Lookup(format!("common core tag {:?} has no ordering", tag)))
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }
}

/// Both tables, built once per process and shared read-only.
#[derive(Debug, Clone, Default)]
pub struct Tables {
    pub schools: SchoolLookup,
    pub core_order: CommonCoreOrdering,
}

impl Tables {
    pub fn load(school_table: &Path, core_order: &Path) -> Self {
        Tables {
            schools: SchoolLookup::load(school_table),
            core_order: CommonCoreOrdering::load(core_order),
        }
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Option<T> {
    let raw = match fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "override table not readable, using built-in");
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(v) => Some(v),
        Err(e) => {
            debug!(path = %path.display(), error = %e, "override table not valid JSON, using built-in");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_schools() {
        let t = SchoolLookup::default();
        assert_eq!(t.school("COMP").unwrap(), "SENG");
        assert_eq!(t.school("HUMA").unwrap(), "SHSS");
        assert_eq!(t.entries().len(), 34);
        assert!(matches!(t.school("XXXX"), Err(ExtractError::Lookup(_))));
    }

    #[test]
    fn default_core_order() {
        let o = CommonCoreOrdering::default();
        assert_eq!(o.rank("H-SSC").unwrap(), 0);
        assert!(o.rank("H").unwrap() < o.rank("S&T").unwrap());
        assert_eq!(o.rank("HLTH").unwrap(), 13);
        assert!(o.rank("Maths").is_err());
    }

    #[test]
    fn missing_override_falls_back() {
        let t = Tables::load(
            Path::new("tests/fixtures/does_not_exist.json"),
            Path::new("tests/fixtures/does_not_exist.json"),
        );
        assert_eq!(t.schools.school("MATH").unwrap(), "SSCI");
        assert_eq!(t.core_order.tags().len(), 14);
    }

    #[test]
    fn override_files_replace_defaults() {
        let t = Tables::load(
            Path::new("tests/fixtures/school_subject.json"),
            Path::new("tests/fixtures/common_core_order.json"),
        );
        assert_eq!(t.schools.school("CORE").unwrap(), "CLE");
        assert!(t.schools.school("COMP").is_err());
        assert_eq!(t.core_order.rank("E-Comm").unwrap(), 0);
    }

    #[test]
    fn invalid_override_falls_back() {
        // catalog.json is an array of blocks, not a subject map
        let t = SchoolLookup::load(Path::new("tests/fixtures/catalog.json"));
        assert_eq!(t.school("COMP").unwrap(), "SENG");
    }
}
