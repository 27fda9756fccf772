use serde::{Deserialize, Serialize};

/// Elections are identified by caller-chosen strings.
pub type ElectionId = String;

/// Seconds since the Unix epoch.
pub type Timestamp = i64;

/// An open election, as held by the store.
///
/// Every field is fixed once the election has been commenced.
/// Every election in the store is open: there is no way to close one yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Election {
    /// Unique ID, chosen by the organizer.
    pub election_id: ElectionId,
    /// The user who commenced the election.
    pub organizer_user_id: String,
    /// Election name.
    pub name: String,
    /// Election description.
    pub description: String,
    /// When the server accepted the election.
    pub commenced_at: Timestamp,
}

/// An election that has not yet been given a commencement time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewElection {
    pub election_id: ElectionId,
    pub organizer_user_id: String,
    pub name: String,
    pub description: String,
}

impl NewElection {
    /// Stamp this election with the time it was accepted.
    pub fn commence(self, commenced_at: Timestamp) -> Election {
        Election {
            election_id: self.election_id,
            organizer_user_id: self.organizer_user_id,
            name: self.name,
            description: self.description,
            commenced_at,
        }
    }
}

/// Example data for tests.
#[cfg(test)]
mod examples {
    use super::*;

    pub const ORGANIZER_1: &str = "76574368-caa8-478b-9764-a7f1e0fa4662";
    pub const ORGANIZER_2: &str = "7e616235-ff17-4fde-a4ef-fc0ec29f4fc0";

    impl NewElection {
        pub fn example1() -> Self {
            Self {
                election_id: "00fa69d7-9e49-449e-9281-e5a6db476e33".to_string(),
                organizer_user_id: ORGANIZER_1.to_string(),
                name: "Election Name 1".to_string(),
                description: "Election Description 1".to_string(),
            }
        }

        pub fn example2() -> Self {
            Self {
                election_id: "e3b09d7a-85e8-4736-b41f-e859ec6a77ab".to_string(),
                organizer_user_id: ORGANIZER_1.to_string(),
                name: "Election Name 2".to_string(),
                description: "Election Description 2".to_string(),
            }
        }

        pub fn example3() -> Self {
            Self {
                election_id: "ca3a38cc-e2cf-4c5e-aa57-b9bea1b37faa".to_string(),
                organizer_user_id: ORGANIZER_2.to_string(),
                name: "Election Name 3".to_string(),
                description: "Election Description 3".to_string(),
            }
        }

        /// A minimal election with the given ID and name.
        pub fn named(election_id: &str, name: &str) -> Self {
            Self {
                election_id: election_id.to_string(),
                organizer_user_id: ORGANIZER_2.to_string(),
                name: name.to_string(),
                description: format!("Description of {name}"),
            }
        }
    }
}
