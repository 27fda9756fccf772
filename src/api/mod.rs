use rocket::Route;

mod election;

pub fn routes() -> Vec<Route> {
    election::routes()
}
