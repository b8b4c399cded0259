pub mod error;
pub mod traits;
pub mod api_client;

pub use error::ApiError;
pub use traits::SchedulingApi;
pub use api_client::ApiClient;
