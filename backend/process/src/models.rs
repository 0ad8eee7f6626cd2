use std::{convert::Infallible, str::FromStr};

/// Table to pull from the data store and the title it is listed under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSpec {
    pub name: String,
    pub title: String,
}

impl FromStr for TableSpec {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, title) = match s.split_once('=') {
            Some((name, title)) if !title.trim().is_empty() => (name.trim(), title.trim()),
            Some((name, _)) => (name.trim(), name.trim()),
            None => (s.trim(), s.trim()),
        };

        Ok(Self {
            name: name.to_string(),
            title: title.to_string(),
        })
    }
}
