use itertools::Itertools;

use crate::error::Result;
use crate::tables::CommonCoreOrdering;

const SSC_PREFIX: &str = "SSC-";

/// Turn raw common core tags into the display string, e.g. `"H-SSC + S&T"`.
///
/// A school-variant tag (`SSC-H`) is assumed to satisfy its plain
/// counterpart (`H`), so when any variant is present every plain tag with a
/// variant of the same base is dropped.
pub fn normalize(order: &CommonCoreOrdering, tags: &[String]) -> Result<String> {
    let variant_bases: Vec<&str> = tags.iter().filter_map(|t| t.strip_prefix(SSC_PREFIX)).collect();

    let mut areas: Vec<String> = tags
        .iter()
        .filter(|t| !variant_bases.contains(&t.as_str()))
        .map(|t| match t.strip_prefix(SSC_PREFIX) {
            Some(base) => format!("{}-SSC", base),
            None => t.clone(),
        })
        .unique()
        .collect();

    if areas.len() > 1 {
        let mut ranked = areas
            .into_iter()
            .map(|a| order.rank(&a).map(|r| (r, a)))
            .collect::<Result<Vec<_>>>()?;
        ranked.sort_by_key(|(r, _)| *r);
        areas = ranked.into_iter().map(|(_, a)| a).collect();
    }

    Ok(areas.join(" + "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExtractError;

    fn norm(tags: &[&str]) -> Result<String> {
        let tags: Vec<String> = tags.iter().map(|t| t.to_string()).collect();
        normalize(&CommonCoreOrdering::default(), &tags)
    }

    #[test]
    fn variant_replaces_plain() {
        assert_eq!(norm(&["SSC-H", "H"]).unwrap(), "H-SSC");
    }

    #[test]
    fn single_tag_unchanged() {
        assert_eq!(norm(&["E-Comm"]).unwrap(), "E-Comm");
    }

    #[test]
    fn sorted_by_ordering() {
        assert_eq!(norm(&["S&T", "H"]).unwrap(), "H + S&T");
        assert_eq!(norm(&["H", "S&T"]).unwrap(), "H + S&T");
    }

    #[test]
    fn variants_sort_before_plain_tags() {
        assert_eq!(norm(&["QR", "SSC-SA", "SA"]).unwrap(), "SA-SSC + QR");
    }

    #[test]
    fn duplicate_tags_collapse() {
        assert_eq!(norm(&["E-Comm", "E-Comm"]).unwrap(), "E-Comm");
        assert_eq!(norm(&["SSC-H", "SSC-H", "H"]).unwrap(), "H-SSC");
    }

    #[test]
    fn no_tags_is_empty() {
        assert_eq!(norm(&[]).unwrap(), "");
    }

    #[test]
    fn unknown_tag_only_matters_when_sorting() {
        assert_eq!(norm(&["Maths"]).unwrap(), "Maths");
        assert!(matches!(norm(&["Maths", "H"]), Err(ExtractError::Lookup(_))));
    }
}
