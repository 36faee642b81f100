pub mod request;
pub mod response;

pub use request::{ListComponentsQuery, ListComponentsRequest};
pub use response::{ListComponentsResponse, ListComponentsResponseBody};
