use std::collections::{HashMap, HashSet};

/// Lookup tables the catalog needs from configuration.
#[derive(Debug, Clone, Default)]
pub struct CatalogRules {
    placeholder_codes: HashSet<String>,
    table_aliases: HashMap<String, String>,
}

impl CatalogRules {
    pub fn new<I, S>(placeholder_codes: I, table_aliases: HashMap<String, String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            placeholder_codes: placeholder_codes
                .into_iter()
                .map(|code| code.as_ref().trim().to_lowercase())
                .filter(|code| !code.is_empty())
                .collect(),
            table_aliases,
        }
    }

    /// Parses `from=to,from2=to2`, skipping malformed pairs.
    pub fn parse_aliases(raw: &str) -> HashMap<String, String> {
        raw.split(',')
            .filter_map(|pair| pair.split_once('='))
            .map(|(from, to)| (from.trim().to_string(), to.trim().to_string()))
            .filter(|(from, to)| !from.is_empty() && !to.is_empty())
            .collect()
    }

    /// The code worth showing, `None` for blanks and placeholders like `-` or `S/C`.
    pub fn valid_code<'a>(&self, code: Option<&'a str>) -> Option<&'a str> {
        let code = code?.trim();

        if code.is_empty() || self.placeholder_codes.contains(&code.to_lowercase()) {
            return None;
        }

        Some(code)
    }

    pub fn canonical_table<'a>(&'a self, table: &'a str) -> &'a str {
        self.table_aliases
            .get(table)
            .map(String::as_str)
            .unwrap_or(table)
    }
}
