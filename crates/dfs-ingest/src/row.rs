use serde::{Deserialize, Serialize};

/// One feed row: column name to raw string value, in source column order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedRow {
    cells: Vec<(String, String)>,
}

impl FeedRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a row from `(header, value)` pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            cells: pairs
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }

    pub fn push(&mut self, header: impl Into<String>, value: impl Into<String>) {
        self.cells.push((header.into(), value.into()));
    }

    /// Raw header names in column order.
    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(key, _)| key.as_str())
    }

    /// Value stored under an exact header name.
    pub fn get(&self, header: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|(key, _)| key == header)
            .map(|(_, value)| value.as_str())
    }

    pub fn cells(&self) -> &[(String, String)] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// True when every value is blank.
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|(_, value)| value.trim().is_empty())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FeedRow {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self::from_pairs(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_column_order() {
        let row = FeedRow::from_pairs([("Salary", "5000"), ("Name", "A"), ("TeamAbbrev", "KC")]);
        let headers: Vec<&str> = row.headers().collect();
        assert_eq!(headers, vec!["Salary", "Name", "TeamAbbrev"]);
        assert_eq!(row.get("Name"), Some("A"));
        assert_eq!(row.get("name"), None);
    }

    #[test]
    fn blank_detection() {
        let row: FeedRow = [("A", " "), ("B", "")].into_iter().collect();
        assert!(row.is_blank());
        assert!(!FeedRow::from_pairs([("A", "x")]).is_blank());
    }
}
