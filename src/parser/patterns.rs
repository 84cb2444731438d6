use std::sync::LazyLock;

use regex::Regex;

use crate::error::{ExtractError, Result};
use crate::model::CourseHeader;

static HEADER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\w{0,10}) (\w{0,10}) - (.+) \((\d) unit(s?)\)").unwrap());
static COMMON_CORE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Common Core \((.{0,10})\)").unwrap());
static SECTION_COL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\w+) \((\d+)\)").unwrap());
static NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]+").unwrap());
static LABEL_SUFFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z]{1,5}(\d{1,5})$").unwrap());
static LABEL_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-zA-Z]{1,5})(\d{1,5}|X)").unwrap());

/// Parse the course header line. The pluralisation marker is dropped.
pub fn parse_header(text: &str) -> Result<CourseHeader> {
    let caps = HEADER_RE
        .captures(text)
        .ok_or_else(|| ExtractError::PatternMismatch(format!("course header {:?}", text.trim())))?;
    Ok(CourseHeader {
        subject_area: caps[1].to_string(),
        course_number: caps[2].to_string(),
        title: caps[3].to_string(),
        units: caps[4].to_string(),
    })
}

/// Every `Common Core (<tag>)` occurrence, in order.
pub fn common_core_tags(text: &str) -> Vec<String> {
    COMMON_CORE_RE
        .captures_iter(text)
        .map(|caps| caps[1].to_string())
        .collect()
}

/// `"L1 (1234)"` → `("L1", "1234")`.
pub fn parse_section_column(text: &str) -> Result<(String, String)> {
    let caps = SECTION_COL_RE
        .captures(text)
        .ok_or_else(|| ExtractError::PatternMismatch(format!("section column {:?}", text.trim())))?;
    Ok((caps[1].to_string(), caps[2].to_string()))
}

/// First run of digits in the text, e.g. `"50 (3 reserved)"` → 50.
pub fn first_number(text: &str) -> Result<u32> {
    let m = NUMBER_RE
        .find(text)
        .ok_or_else(|| ExtractError::TypeConversion(format!("no number in {:?}", text.trim())))?;
    m.as_str()
        .parse::<u32>()
        .map_err(|e| ExtractError::TypeConversion(format!("{:?}: {}", m.as_str(), e)))
}

/// Numeric key of a `<letters><digits>` label; `None` for anything else.
pub fn label_suffix(label: &str) -> Option<u32> {
    LABEL_SUFFIX_RE
        .captures(label)
        .and_then(|caps| caps[1].parse::<u32>().ok())
}

/// Section type letters, e.g. `"L"` for `"L1"`, `"T"` for `"T2A"`.
pub fn label_prefix(label: &str) -> Option<&str> {
    LABEL_PREFIX_RE
        .captures(label)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
