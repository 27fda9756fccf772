use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::{
    election::{Election, ElectionId, NewElection, Timestamp},
    serde_string,
};

/// A request to open a new election.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommenceElectionRequest {
    pub election_id: ElectionId,
    pub organizer_user_id: String,
    pub name: String,
    pub description: String,
}

impl TryFrom<CommenceElectionRequest> for NewElection {
    type Error = Error;

    /// Reject the request if any field is empty.
    fn try_from(request: CommenceElectionRequest) -> Result<Self> {
        let fields = [
            ("election_id", &request.election_id),
            ("organizer_user_id", &request.organizer_user_id),
            ("name", &request.name),
            ("description", &request.description),
        ];
        if let Some((field, _)) = fields.iter().find(|(_, value)| value.is_empty()) {
            return Err(Error::invalid_argument(format!("{field} must not be empty")));
        }

        Ok(Self {
            election_id: request.election_id,
            organizer_user_id: request.organizer_user_id,
            name: request.name,
            description: request.description,
        })
    }
}

impl From<NewElection> for CommenceElectionRequest {
    fn from(election: NewElection) -> Self {
        Self {
            election_id: election.election_id,
            organizer_user_id: election.organizer_user_id,
            name: election.name,
            description: election.description,
        }
    }
}

/// Commencement has no result beyond success.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommenceElectionResponse {}

/// An election as reported to API clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectionSummary {
    pub election_id: ElectionId,
    pub organizer_user_id: String,
    pub name: String,
    pub description: String,
    #[serde(with = "serde_string")]
    pub commenced_at: Timestamp,
}

impl From<&Election> for ElectionSummary {
    fn from(election: &Election) -> Self {
        Self {
            election_id: election.election_id.clone(),
            organizer_user_id: election.organizer_user_id.clone(),
            name: election.name.clone(),
            description: election.description.clone(),
            commenced_at: election.commenced_at,
        }
    }
}

/// One page of open elections, in the requested order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListOpenElectionsResponse {
    pub open_elections: Vec<ElectionSummary>,
}

#[cfg(test)]
mod tests {
    use rocket::serde::json::{serde_json, serde_json::json};

    use super::*;

    #[test]
    fn empty_fields_are_rejected() {
        let valid = CommenceElectionRequest::from(NewElection::example1());
        assert_eq!(NewElection::try_from(valid.clone()), Ok(NewElection::example1()));

        let mut no_id = valid.clone();
        no_id.election_id.clear();
        let mut no_organizer = valid.clone();
        no_organizer.organizer_user_id.clear();
        let mut no_name = valid.clone();
        no_name.name.clear();
        let mut no_description = valid;
        no_description.description.clear();

        for (request, field) in [
            (no_id, "election_id"),
            (no_organizer, "organizer_user_id"),
            (no_name, "name"),
            (no_description, "description"),
        ] {
            match NewElection::try_from(request) {
                Err(Error::InvalidArgument(msg)) => assert!(msg.starts_with(field)),
                other => panic!("expected InvalidArgument for {field}, got {other:?}"),
            }
        }
    }

    #[test]
    fn commenced_at_is_a_string_on_the_wire() {
        let summary = ElectionSummary::from(&NewElection::example1().commence(1677672000));
        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(
            value,
            json!({
                "election_id": "00fa69d7-9e49-449e-9281-e5a6db476e33",
                "organizer_user_id": "76574368-caa8-478b-9764-a7f1e0fa4662",
                "name": "Election Name 1",
                "description": "Election Description 1",
                "commenced_at": "1677672000",
            })
        );

        let parsed: ElectionSummary = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, summary);
    }

    #[test]
    fn malformed_commenced_at_is_rejected() {
        let value = json!({
            "election_id": "E1",
            "organizer_user_id": "U1",
            "name": "N",
            "description": "D",
            "commenced_at": "yesterday",
        });
        assert!(serde_json::from_value::<ElectionSummary>(value).is_err());
    }
}
