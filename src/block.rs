use serde::Deserialize;

/// One catalog entry as handed over by the page parser: the `<h2>` header
/// line, the course attribute text and the body rows of its section table.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CourseBlock {
    pub header: String,
    #[serde(default)]
    pub attributes: String,
    #[serde(default)]
    pub rows: Vec<RawRow>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRow {
    pub cells: Vec<Cell>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Cell {
    pub text: String,
    /// Text of each hyperlink inside the cell, in document order.
    #[serde(default)]
    pub links: Vec<String>,
}

impl RawRow {
    pub fn cell(&self, i: usize) -> Option<&Cell> {
        self.cells.get(i)
    }
}

#[cfg(test)]
impl Cell {
    pub fn plain(text: &str) -> Self {
        Cell {
            text: text.to_string(),
            links: Vec::new(),
        }
    }

    pub fn linked(names: &[&str]) -> Self {
        Cell {
            text: names.join(""),
            links: names.iter().map(|n| n.to_string()).collect(),
        }
    }
}

/// Read a JSON array of course blocks.
pub fn from_json(json: &str) -> serde_json::Result<Vec<CourseBlock>> {
    serde_json::from_str(json)
}
