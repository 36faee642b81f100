pub mod request;
pub mod response;

pub use request::{
    ListTrainingJobMetricsPath, ListTrainingJobMetricsQuery, ListTrainingJobMetricsRequest,
};
pub use response::{ListTrainingJobMetricsResponse, ListTrainingJobMetricsResponseBody};
