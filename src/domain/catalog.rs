use {
    serde::{Deserialize, Serialize},
    std::collections::{BTreeMap, HashSet},
};

/// Display name -> ticker lookup shown in the stock selector.
///
/// Kept in a `BTreeMap` so the selector lists names alphabetically; the service
/// promises no order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstrumentCatalog {
    entries: BTreeMap<String, String>,
}

impl InstrumentCatalog {
    pub fn from_entries<I, N, T>(entries: I) -> Self
    where
        I: IntoIterator<Item = (N, T)>,
        N: Into<String>,
        T: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(name, ticker)| (name.into(), ticker.into()))
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// (name, ticker) pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, ticker)| (name.as_str(), ticker.as_str()))
    }

    pub fn ticker_for(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn name_for(&self, ticker: &str) -> Option<&str> {
        self.iter().find(|(_, t)| *t == ticker).map(|(n, _)| n)
    }

    pub fn contains_ticker(&self, ticker: &str) -> bool {
        self.entries.values().any(|t| t == ticker)
    }

    /// Tickers that appear under more than one name. Should always be empty.
    pub fn duplicate_tickers(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut dupes: Vec<&str> = self
            .entries
            .values()
            .filter(|t| !seen.insert(t.as_str()))
            .map(String::as_str)
            .collect();
        dupes.sort_unstable();
        dupes.dedup();
        dupes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookups_both_directions() {
        let catalog = InstrumentCatalog::from_entries([("Acme", "ACME"), ("Nvidia", "NVDA")]);
        assert_eq!(catalog.ticker_for("Acme"), Some("ACME"));
        assert_eq!(catalog.name_for("NVDA"), Some("Nvidia"));
        assert!(catalog.contains_ticker("ACME"));
        assert!(!catalog.contains_ticker("Acme"));
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn iterates_in_name_order() {
        let catalog = InstrumentCatalog::from_entries([("Zeta", "Z"), ("Alpha", "A"), ("Mid", "M")]);
        let names: Vec<&str> = catalog.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["Alpha", "Mid", "Zeta"]);
    }

    #[test]
    fn deserializes_as_plain_object() {
        let catalog: InstrumentCatalog =
            serde_json::from_str(r#"{"Apple Inc.": "AAPL", "Tesla, Inc.": "TSLA"}"#).unwrap();
        assert_eq!(catalog.ticker_for("Tesla, Inc."), Some("TSLA"));
    }

    #[test]
    fn reports_duplicate_tickers() {
        let catalog =
            InstrumentCatalog::from_entries([("Alphabet A", "GOOG"), ("Alphabet C", "GOOG"), ("Meta", "META")]);
        assert_eq!(catalog.duplicate_tickers(), vec!["GOOG"]);

        let clean = InstrumentCatalog::from_entries([("Meta", "META")]);
        assert!(clean.duplicate_tickers().is_empty());
    }
}
