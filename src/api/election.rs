use log::warn;
use rocket::{
    serde::json::{self, Json},
    Route, State,
};

use crate::error::{Error, Result};
use crate::model::api::{
    CommenceElectionRequest, CommenceElectionResponse, ElectionSummary, ListOpenElectionsRequest,
    ListOpenElectionsResponse,
};
use crate::service::ElectionService;

pub fn routes() -> Vec<Route> {
    routes![commence_election, list_open_elections, get_election]
}

/// The body is decoded as JSON whatever its declared content type. Anything
/// that does not decode is an invalid argument.
#[post("/elections", data = "<request>")]
async fn commence_election(
    request: std::result::Result<Json<CommenceElectionRequest>, json::Error<'_>>,
    service: &State<ElectionService>,
) -> Result<Json<CommenceElectionResponse>> {
    let request = request.map_err(|err| {
        warn!("Rejected commencement: malformed body: {err}");
        Error::invalid_argument(format!("malformed request body: {err}"))
    })?;
    service.commence_election(request.into_inner())?;
    Ok(Json(CommenceElectionResponse {}))
}

#[get("/elections?<request..>")]
async fn list_open_elections(
    request: ListOpenElectionsRequest,
    service: &State<ElectionService>,
) -> Result<Json<ListOpenElectionsResponse>> {
    let open_elections = service
        .list_open_elections(&request)?
        .iter()
        .map(|election| ElectionSummary::from(&**election))
        .collect();
    Ok(Json(ListOpenElectionsResponse { open_elections }))
}

#[get("/elections/<election_id>")]
async fn get_election(
    election_id: &str,
    service: &State<ElectionService>,
) -> Result<Json<ElectionSummary>> {
    let election = service.get_election(election_id)?;
    Ok(Json(ElectionSummary::from(&*election)))
}
