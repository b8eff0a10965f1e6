pub mod dto;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use middleware::cors_layer;
pub use routes::create_api_routes;
pub use state::AppState;
