pub mod request;
pub mod response;

pub use request::{DeleteTrainingJobPath, DeleteTrainingJobRequest};
pub use response::{DeleteTrainingJobResponse, DeleteTrainingJobResponseBody};
