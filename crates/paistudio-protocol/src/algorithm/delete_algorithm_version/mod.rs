pub mod request;
pub mod response;

pub use request::{DeleteAlgorithmVersionPath, DeleteAlgorithmVersionRequest};
pub use response::{DeleteAlgorithmVersionResponse, DeleteAlgorithmVersionResponseBody};
