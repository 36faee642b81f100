pub mod request;
pub mod response;

pub use request::{GetMetricsPath, GetMetricsQuery, GetMetricsRequest};
pub use response::{GetMetricsResponse, GetMetricsResponseBody};
