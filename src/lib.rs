#[macro_use]
extern crate rocket;

#[cfg(test)]
#[macro_use]
extern crate backend_test;

use std::sync::Arc;

use rocket::{Build, Rocket};

use crate::clock::{Clock, SystemClock};
use crate::config::{ConfigFairing, ServiceFairing};
use crate::event::EventLogFairing;
use crate::logging::LoggerFairing;
use crate::store::ElectionStore;

pub mod api;
pub mod clock;
pub mod config;
pub mod error;
pub mod event;
pub mod logging;
pub mod model;
pub mod query;
pub mod service;
pub mod store;

/// Build a server around a fresh, empty store using the system clock.
pub fn build() -> Rocket<Build> {
    rocket_for_store(ElectionStore::new(), Arc::new(SystemClock))
}

/// Build a server around the given store and clock.
pub fn rocket_for_store(store: ElectionStore, clock: Arc<dyn Clock>) -> Rocket<Build> {
    rocket::build()
        .mount("/", api::routes())
        .attach(LoggerFairing)
        .attach(ConfigFairing)
        .attach(ServiceFairing::new(store, clock))
        .attach(EventLogFairing)
}
