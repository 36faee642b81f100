pub mod request;
pub mod response;

pub use request::{
    CreateAlgorithmVersionPath, CreateAlgorithmVersionRequest, CreateAlgorithmVersionRequestBody,
};
pub use response::{CreateAlgorithmVersionResponse, CreateAlgorithmVersionResponseBody};
