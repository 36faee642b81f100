pub mod request;
pub mod response;

pub use request::{ListTrainingJobLogsPath, ListTrainingJobLogsQuery, ListTrainingJobLogsRequest};
pub use response::{ListTrainingJobLogsResponse, ListTrainingJobLogsResponseBody};
