pub mod request;
pub mod response;

pub use request::{StopTrainingJobPath, StopTrainingJobRequest};
pub use response::{StopTrainingJobResponse, StopTrainingJobResponseBody};
