//! HTTP front end for the Wormhole URL shortener.
//!
//! Routes:
//! - `POST /save` stores a URL, optionally under a caller-chosen alias
//! - `GET /{alias}` redirects to the stored URL
//! - `DELETE /delete/{alias}` removes an alias
//! - `GET /health` reports liveness
//!
//! Saving and deleting sit behind HTTP basic auth when credentials are set.

pub mod app;
pub mod auth;
pub mod error;
pub mod handlers;
pub mod model;
pub mod state;

pub use app::App;
pub use auth::Credentials;
pub use error::AppError;
pub use state::AppState;
