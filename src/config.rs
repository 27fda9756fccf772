use std::sync::Arc;

use log::{error, info};
use rocket::{
    fairing::{Fairing, Info, Kind},
    Build, Rocket,
};
use serde::Deserialize;

use crate::clock::Clock;
use crate::service::ElectionService;
use crate::store::ElectionStore;

/// Application configuration, derived from `Rocket.toml` and `ROCKET_*`
/// environment variables. This struct becomes managed state and can be
/// inspected by any endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default = "default_items_per_page")]
    default_items_per_page: u32,
    #[serde(default = "max_items_per_page")]
    max_items_per_page: u32,
}

fn default_items_per_page() -> u32 {
    10
}

fn max_items_per_page() -> u32 {
    100
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_items_per_page: default_items_per_page(),
            max_items_per_page: max_items_per_page(),
        }
    }
}

impl Config {
    /// Page size used when a listing does not ask for one.
    pub fn default_items_per_page(&self) -> u32 {
        self.default_items_per_page
    }

    /// Largest page size a listing may ask for.
    pub fn max_items_per_page(&self) -> u32 {
        self.max_items_per_page
    }

    /// Check that the page sizes make sense together.
    pub fn validate(&self) -> Result<(), String> {
        if self.default_items_per_page == 0 {
            return Err("`default_items_per_page` must be at least 1".to_string());
        }
        if self.default_items_per_page > self.max_items_per_page {
            return Err(format!(
                "`default_items_per_page` ({}) exceeds `max_items_per_page` ({})",
                self.default_items_per_page, self.max_items_per_page
            ));
        }
        Ok(())
    }
}

/// A fairing that loads the application config and puts it in managed state.
pub struct ConfigFairing;

#[rocket::async_trait]
impl Fairing for ConfigFairing {
    fn info(&self) -> Info {
        Info {
            name: "Config",
            kind: Kind::Ignite,
        }
    }

    async fn on_ignite(&self, mut rocket: Rocket<Build>) -> rocket::fairing::Result {
        // Load the config.
        let config = match rocket.figment().extract::<Config>() {
            Ok(config) => config,
            Err(e) => {
                error!("Failed to load application config: {e}");
                return Err(rocket);
            }
        };
        if let Err(e) = config.validate() {
            error!("Invalid application config: {e}");
            return Err(rocket);
        }
        info!(
            "Listing pages default to {} items, at most {}",
            config.default_items_per_page, config.max_items_per_page
        );

        // Manage the state.
        rocket = rocket.manage(config);
        Ok(rocket)
    }
}

/// A fairing that builds the election service around the given store and
/// clock and places it into managed state. Must be attached after
/// [`ConfigFairing`].
pub struct ServiceFairing {
    store: ElectionStore,
    clock: Arc<dyn Clock>,
}

impl ServiceFairing {
    pub fn new(store: ElectionStore, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }
}

#[rocket::async_trait]
impl Fairing for ServiceFairing {
    fn info(&self) -> Info {
        Info {
            name: "Election service",
            kind: Kind::Ignite,
        }
    }

    async fn on_ignite(&self, mut rocket: Rocket<Build>) -> rocket::fairing::Result {
        let service = match rocket.state::<Config>() {
            Some(config) => ElectionService::new(self.store.clone(), self.clock.clone(), config),
            None => {
                error!("Election service needs the application config to be loaded first");
                return Err(rocket);
            }
        };
        info!(
            "Election service online with {} open elections",
            self.store.len()
        );

        rocket = rocket.manage(service);
        Ok(rocket)
    }
}
