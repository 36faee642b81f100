pub mod request;
pub mod response;

pub use request::{GetTrainingJobPath, GetTrainingJobRequest};
pub use response::{GetTrainingJobResponse, GetTrainingJobResponseBody};
