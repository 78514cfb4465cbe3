pub mod handlers;
pub mod posters;
pub mod routes;

pub use routes::create_router;
