use std::sync::Arc;

use log::{debug, info, warn};
use rocket::tokio::sync::broadcast::Receiver;

use crate::clock::Clock;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::event::{ElectionHasCommenced, EventBus};
use crate::model::{
    api::{CommenceElectionRequest, ListOpenElectionsRequest},
    election::{Election, NewElection},
};
use crate::query::{ListQuery, QueryEngine};
use crate::store::ElectionStore;

/// The request-handling facade over the store and query engine.
///
/// Holds no election state of its own; it validates requests, hands them
/// on, and raises events for what was committed.
pub struct ElectionService {
    store: ElectionStore,
    queries: QueryEngine,
    clock: Arc<dyn Clock>,
    events: EventBus,
    default_items_per_page: u32,
    max_items_per_page: u32,
}

impl ElectionService {
    pub fn new(store: ElectionStore, clock: Arc<dyn Clock>, config: &Config) -> Self {
        Self {
            queries: QueryEngine::new(store.clone()),
            store,
            clock,
            events: EventBus::default(),
            default_items_per_page: config.default_items_per_page(),
            max_items_per_page: config.max_items_per_page(),
        }
    }

    /// Open a new election, stamped with the current server time.
    pub fn commence_election(&self, request: CommenceElectionRequest) -> Result<Arc<Election>> {
        let election = NewElection::try_from(request).map_err(|err| {
            warn!("Rejected commencement: {err}");
            err
        })?;

        // Publishing never blocks, so it can happen under the store's lock and
        // subscribers see events in commencement order.
        let election = self
            .store
            .insert_and_notify(election, self.clock.as_ref(), |election| {
                self.events.publish(ElectionHasCommenced::from(&**election))
            })
            .map_err(|err| {
                warn!("Rejected commencement: {err}");
                Error::from(err)
            })?;

        info!(
            "Commenced election {} ({}) for organizer {}",
            election.election_id, election.name, election.organizer_user_id
        );
        Ok(election)
    }

    /// One page of open elections, with defaults filled in for missing parameters.
    pub fn list_open_elections(
        &self,
        request: &ListOpenElectionsRequest,
    ) -> Result<Vec<Arc<Election>>> {
        let query = request.resolve(self.default_items_per_page)?;
        self.list(&query)
    }

    /// One page of open elections for an already validated query.
    pub fn list(&self, query: &ListQuery) -> Result<Vec<Arc<Election>>> {
        if query.items_per_page() > self.max_items_per_page {
            return Err(Error::invalid_argument(format!(
                "items_per_page must be at most {}, got {}",
                self.max_items_per_page,
                query.items_per_page()
            )));
        }
        debug!(
            "Listing open elections: page {} of {} by {} {}",
            query.page(),
            query.items_per_page(),
            query.sort_by(),
            query.sort_direction()
        );
        Ok(self.queries.list(query))
    }

    pub fn get_election(&self, election_id: &str) -> Result<Arc<Election>> {
        if election_id.is_empty() {
            return Err(Error::invalid_argument("election_id must not be empty"));
        }
        self.store
            .get(election_id)
            .ok_or_else(|| Error::not_found(format!("election ({election_id}) not found")))
    }

    /// Listen for elections as they are commenced.
    pub fn subscribe(&self) -> Receiver<ElectionHasCommenced> {
        self.events.subscribe()
    }
}
