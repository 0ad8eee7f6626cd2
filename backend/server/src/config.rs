use std::{collections::HashMap, env, fmt::Display, fs::read_to_string, path::Path, str::FromStr};

use catalog::{images::StorageConfig, rules::CatalogRules};
use thiserror::Error;
use tracing::{debug, warn};

pub const STORE_KEY_SECRET: &str = "CATALOG_STORE_KEY";

/// Where catalog rows come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// Snapshot written by `process`, loaded once at startup.
    Snapshot,
    /// Live queries against the data store on every request.
    Remote,
}

impl FromStr for Source {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "snapshot" => Ok(Source::Snapshot),
            "remote" => Ok(Source::Remote),
            other => Err(format!("unknown catalog source {other:?}")),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {key} value {value:?}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },

    #[error("cannot read secret {path}: {source}")]
    Secret {
        path: String,
        source: std::io::Error,
    },
}

pub struct Config {
    pub port: u16,
    pub source: Source,
    pub snapshot_path: String,
    pub store_url: String,
    /// Empty unless `source` is [`Source::Remote`].
    pub store_key: String,
    pub tables: Vec<String>,
    pub storage: StorageConfig,
    pub whatsapp_phone: String,
    pub page_size: usize,
    pub placeholder_codes: Vec<String>,
    pub table_aliases: HashMap<String, String>,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup, the process environment in production.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let setting = Settings { lookup };

        let source = setting.get("CATALOG_SOURCE", "snapshot")?;
        let store_key = match source {
            Source::Remote => {
                let dir: String = setting.get("CATALOG_SECRETS_DIR", "/run/secrets")?;
                read_secret(Path::new(&dir), STORE_KEY_SECRET)?
            }
            Source::Snapshot => String::new(),
        };

        Ok(Self {
            port: setting.get("RUST_PORT", "1111")?,
            source,
            snapshot_path: setting.get("CATALOG_SNAPSHOT", "catalog.bin")?,
            store_url: setting.get("CATALOG_STORE_URL", "http://localhost:54321")?,
            store_key,
            tables: list(&setting.get::<String>("CATALOG_TABLES", "")?),
            storage: StorageConfig {
                base_url: setting.get("CATALOG_STORAGE_URL", "http://localhost:54321")?,
                bucket: setting.get("CATALOG_STORAGE_BUCKET", "produtos")?,
            },
            whatsapp_phone: setting.get("CATALOG_WHATSAPP", "5500000000000")?,
            page_size: setting.get("CATALOG_PAGE_SIZE", "24")?,
            placeholder_codes: list(
                &setting.get::<String>("CATALOG_PLACEHOLDER_CODES", "-,0,n/a,s/c,sem codigo")?,
            ),
            table_aliases: CatalogRules::parse_aliases(
                &setting.get::<String>("CATALOG_TABLE_ALIASES", "")?,
            ),
        })
    }

    pub fn rules(&self) -> CatalogRules {
        CatalogRules::new(&self.placeholder_codes, self.table_aliases.clone())
    }
}

struct Settings<F> {
    lookup: F,
}

impl<F: Fn(&str) -> Option<String>> Settings<F> {
    fn get<T>(&self, key: &'static str, default: &str) -> Result<T, ConfigError>
    where
        T: FromStr,
        T::Err: Display,
    {
        let value = (self.lookup)(key).unwrap_or_else(|| {
            debug!("{key} not set, defaulting to {default:?}");
            default.to_string()
        });

        value.parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            reason: e.to_string(),
            value,
        })
    }
}

pub fn list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

/// Reads `dir/name`, as mounted by docker or compose secrets, without surrounding whitespace.
pub fn read_secret(dir: &Path, name: &str) -> Result<String, ConfigError> {
    let path = dir.join(name);

    match read_to_string(&path) {
        Ok(secret) => Ok(secret.trim().to_string()),
        Err(source) => {
            warn!("Secret {name} unavailable");
            Err(ConfigError::Secret {
                path: path.display().to_string(),
                source,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_parse() {
        assert_eq!(" Remote ".parse::<Source>(), Ok(Source::Remote));
        assert_eq!("snapshot".parse::<Source>(), Ok(Source::Snapshot));
        assert!("postgres".parse::<Source>().is_err());
    }

    #[test]
    fn test_list() {
        assert_eq!(list(" a, ,b ,"), vec!["a".to_string(), "b".to_string()]);
        assert!(list("").is_empty());
    }

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let pairs: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();

        move |key| pairs.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config.port, 1111);
        assert_eq!(config.source, Source::Snapshot);
        assert_eq!(config.snapshot_path, "catalog.bin");
        assert_eq!(config.store_key, "");
        assert_eq!(config.page_size, 24);
        assert!(config.tables.is_empty());
        assert!(config.placeholder_codes.contains(&"s/c".to_string()));
    }

    #[test]
    fn test_invalid_value() {
        let error = Config::from_lookup(lookup(&[("RUST_PORT", "http")]))
            .err()
            .unwrap();

        assert!(matches!(error, ConfigError::Invalid { key: "RUST_PORT", .. }));
    }

    #[test]
    fn test_remote_reads_secret() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(STORE_KEY_SECRET), " chave-secreta\n").unwrap();
        let dir = dir.path().to_string_lossy().into_owned();

        let config = Config::from_lookup(lookup(&[
            ("CATALOG_SOURCE", "remote"),
            ("CATALOG_SECRETS_DIR", dir.as_str()),
            ("CATALOG_TABLES", "caixa_ortopedia, caixa_geral"),
        ]))
        .unwrap();

        assert_eq!(config.store_key, "chave-secreta");
        assert_eq!(config.tables, vec!["caixa_ortopedia", "caixa_geral"]);
    }

    #[test]
    fn test_remote_without_secret() {
        let dir = tempfile::tempdir().unwrap();
        let dir = dir.path().to_string_lossy().into_owned();

        let error = Config::from_lookup(lookup(&[
            ("CATALOG_SOURCE", "remote"),
            ("CATALOG_SECRETS_DIR", dir.as_str()),
        ]))
        .err()
        .unwrap();

        assert!(matches!(error, ConfigError::Secret { .. }));
    }
}
