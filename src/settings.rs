use std::path::{Path, PathBuf};

use anyhow::Result;
use config::{Config, Environment};
use serde::Deserialize;

/// Where the override tables live. Defaults sit next to the working
/// directory; `COURSE_DIGEST_SCHOOL_TABLE` / `COURSE_DIGEST_CORE_ORDER`
/// replace them, and CLI flags replace both.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub school_table: PathBuf,
    pub core_order: PathBuf,
}

impl Settings {
    pub fn load() -> Result<Self> {
        let settings = Config::builder()
            .set_default("school_table", "school_subject.json")?
            .set_default("core_order", "common_core_order.json")?
            .add_source(Environment::with_prefix("COURSE_DIGEST"))
            .build()?;
        Ok(settings.try_deserialize()?)
    }

    pub fn with_overrides(mut self, school_table: Option<&Path>, core_order: Option<&Path>) -> Self {
        if let Some(p) = school_table {
            self.school_table = p.to_path_buf();
        }
        if let Some(p) = core_order {
            self.core_order = p.to_path_buf();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_paths_win() {
        let s = Settings {
            school_table: "school_subject.json".into(),
            core_order: "common_core_order.json".into(),
        }
        .with_overrides(Some(Path::new("/etc/schools.json")), None);
        assert_eq!(s.school_table, PathBuf::from("/etc/schools.json"));
        assert_eq!(s.core_order, PathBuf::from("common_core_order.json"));
    }

    #[test]
    fn env_overrides_one_path() {
        std::env::set_var("COURSE_DIGEST_CORE_ORDER", "/srv/order.json");
        let loaded = Settings::load();
        std::env::remove_var("COURSE_DIGEST_CORE_ORDER");
        let s = loaded.unwrap();
        assert_eq!(s.core_order, PathBuf::from("/srv/order.json"));
        assert_eq!(s.school_table, PathBuf::from("school_subject.json"));
    }
}
