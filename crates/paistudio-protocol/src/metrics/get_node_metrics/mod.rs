pub mod request;
pub mod response;

pub use request::{GetNodeMetricsPath, GetNodeMetricsQuery, GetNodeMetricsRequest};
pub use response::{GetNodeMetricsResponse, GetNodeMetricsResponseBody};
