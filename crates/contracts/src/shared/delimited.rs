use serde::{Deserialize, Serialize};

/// Separator used by the upstream API for multi-valued allocation fields
pub const DELIMITER: char = '|';

/// A list field that arrives either as one pipe-delimited string
/// (`"Alpha|Beta"`) or as a JSON array (`["Alpha", "Beta"]`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DelimitedList {
    Items(Vec<String>),
    Joined(String),
}

impl DelimitedList {
    /// Build the joined form from already split values
    pub fn join<S: AsRef<str>>(items: &[S]) -> Self {
        let joined = items
            .iter()
            .map(|s| s.as_ref())
            .collect::<Vec<_>>()
            .join(&DELIMITER.to_string());
        DelimitedList::Joined(joined)
    }

    /// Normalized sequence: split on `|` when joined, as-is otherwise
    pub fn items(&self) -> Vec<String> {
        match self {
            DelimitedList::Items(items) => items.clone(),
            DelimitedList::Joined(s) => s.split(DELIMITER).map(str::to_string).collect(),
        }
    }

    /// Joined string form
    pub fn joined(&self) -> String {
        match self {
            DelimitedList::Items(items) => items.join(&DELIMITER.to_string()),
            DelimitedList::Joined(s) => s.clone(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            DelimitedList::Items(items) => items.len(),
            DelimitedList::Joined(s) => s.split(DELIMITER).count(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for DelimitedList {
    fn default() -> Self {
        DelimitedList::Items(Vec::new())
    }
}

impl From<Vec<String>> for DelimitedList {
    fn from(items: Vec<String>) -> Self {
        DelimitedList::Items(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_joined_and_rejoin() {
        let list = DelimitedList::Joined("A|B|C".into());
        assert_eq!(list.items(), vec!["A", "B", "C"]);
        assert_eq!(list.items().join("|"), "A|B|C");
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_items_used_as_is() {
        let list: DelimitedList = serde_json::from_str(r#"["Alpha", " Beta "]"#).unwrap();
        assert_eq!(list.items(), vec!["Alpha", " Beta "]);
        assert_eq!(list.joined(), "Alpha| Beta ");
    }

    #[test]
    fn test_string_payload_is_joined_variant() {
        let list: DelimitedList = serde_json::from_str(r#""Thet|Godown""#).unwrap();
        assert_eq!(list, DelimitedList::Joined("Thet|Godown".into()));
        assert_eq!(DelimitedList::join(&["Thet", "Godown"]), list);
    }

    #[test]
    fn test_single_value_without_separator() {
        let list = DelimitedList::Joined("Alpha".into());
        assert_eq!(list.items(), vec!["Alpha"]);
    }
}
