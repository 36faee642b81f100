pub mod request;
pub mod response;

pub use request::{ListResourceGroupsQuery, ListResourceGroupsRequest};
pub use response::{ListResourceGroupsResponse, ListResourceGroupsResponseBody};
