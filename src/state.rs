use std::sync::Arc;

use crate::config::Config;
use crate::db::Store;
use crate::services::{AuthService, PortalService, SeaOrmAuthService, SeaOrmPortalService};
use crate::shaping::Normalizer;

#[derive(Clone)]
pub struct SharedState {
    pub config: Arc<Config>,

    pub store: Store,

    pub auth_service: Arc<dyn AuthService>,

    pub portal_service: Arc<dyn PortalService>,
}

impl SharedState {
    /// Builds the store and services from a validated config. Runs schema
    /// migration first when `database.migrate_on_start` is set.
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        config.validate()?;

        let store = Store::new(&config.database)?;
        if config.database.migrate_on_start {
            store.migrate().await?;
        }

        let normalizer = Normalizer::new(config.display_timezone()?);

        let auth_service = Arc::new(SeaOrmAuthService::new(
            store.clone(),
            config.security.clone(),
        )) as Arc<dyn AuthService>;

        let portal_service =
            Arc::new(SeaOrmPortalService::new(store.clone(), normalizer)) as Arc<dyn PortalService>;

        Ok(Self {
            config: Arc::new(config),
            store,
            auth_service,
            portal_service,
        })
    }
}
