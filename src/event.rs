use log::{debug, info, warn};
use rocket::{
    fairing::{Fairing, Info, Kind},
    tokio::{
        self,
        sync::broadcast::{self, error::RecvError, Receiver, Sender},
    },
    Orbit, Rocket,
};
use serde::{Deserialize, Serialize};

use crate::model::election::{Election, ElectionId, Timestamp};
use crate::service::ElectionService;

/// Raised once an election has been committed to the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectionHasCommenced {
    pub election_id: ElectionId,
    pub organizer_user_id: String,
    pub name: String,
    pub description: String,
    pub occurred_at: Timestamp,
}

impl From<&Election> for ElectionHasCommenced {
    fn from(election: &Election) -> Self {
        Self {
            election_id: election.election_id.clone(),
            organizer_user_id: election.organizer_user_id.clone(),
            name: election.name.clone(),
            description: election.description.clone(),
            occurred_at: election.commenced_at,
        }
    }
}

/// In-process fan-out of election events to any interested listeners.
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: Sender<ElectionHasCommenced>,
}

impl EventBus {
    /// Slow listeners miss events once `capacity` are queued for them.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn publish(&self, event: ElectionHasCommenced) {
        // Nobody listening is fine; the event is informational.
        if let Err(err) = self.sender.send(event) {
            debug!("No listeners for event on election {}", err.0.election_id);
        }
    }

    pub fn subscribe(&self) -> Receiver<ElectionHasCommenced> {
        self.sender.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(256)
    }
}

/// A fairing that starts logging election events once the server is live.
#[derive(Debug, Copy, Clone)]
pub struct EventLogFairing;

#[rocket::async_trait]
impl Fairing for EventLogFairing {
    fn info(&self) -> Info {
        Info {
            name: "Election event log",
            kind: Kind::Liftoff,
        }
    }

    async fn on_liftoff(&self, rocket: &Rocket<Orbit>) {
        let Some(service) = rocket.state::<ElectionService>() else {
            warn!("No election service managed, election events will not be logged");
            return;
        };
        let events = service.subscribe();
        tokio::spawn(log_events(events));
    }
}

async fn log_events(mut events: Receiver<ElectionHasCommenced>) {
    loop {
        match events.recv().await {
            Ok(event) => info!(
                "Election {} commenced by {} at {}",
                event.election_id, event.organizer_user_id, event.occurred_at
            ),
            Err(RecvError::Lagged(missed)) => {
                warn!("Event log fell behind, missed {missed} events")
            }
            Err(RecvError::Closed) => break,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::election::NewElection;

    #[test]
    fn publish_without_listeners_is_harmless() {
        let bus = EventBus::new(4);
        bus.publish(ElectionHasCommenced::from(&NewElection::example1().commence(7)));
    }

    #[test]
    fn subscribers_receive_events() {
        let bus = EventBus::new(4);
        let mut events = bus.subscribe();
        let election = NewElection::example1().commence(7);
        bus.publish(ElectionHasCommenced::from(&election));

        let event = events.try_recv().unwrap();
        assert_eq!(event.election_id, election.election_id);
        assert_eq!(event.organizer_user_id, election.organizer_user_id);
        assert_eq!(event.name, election.name);
        assert_eq!(event.description, election.description);
        assert_eq!(event.occurred_at, 7);
    }
}
