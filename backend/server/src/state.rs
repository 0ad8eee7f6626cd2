use std::sync::Arc;

use catalog::rules::CatalogRules;

use super::{config::Config, database::Store};

pub struct State {
    pub config: Config,
    pub rules: CatalogRules,
    pub store: Store,
}

impl State {
    pub async fn new() -> anyhow::Result<Arc<Self>> {
        let config = Config::load()?;
        let store = Store::init(&config).await?;

        Ok(Self::with_store(config, store))
    }

    pub fn with_store(config: Config, store: Store) -> Arc<Self> {
        let rules = config.rules();

        Arc::new(Self {
            config,
            rules,
            store,
        })
    }
}
