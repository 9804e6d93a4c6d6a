mod health;
mod response;
mod url;

pub use health::HealthResponse;
pub use response::{ApiResponse, Status};
pub use url::{SaveRequest, SaveResponse};
