pub mod request;
pub mod response;

pub use request::{GetAlgorithmVersionPath, GetAlgorithmVersionRequest};
pub use response::{GetAlgorithmVersionResponse, GetAlgorithmVersionResponseBody};
