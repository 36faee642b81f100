pub mod request;
pub mod response;

pub use request::{GetComponentPath, GetComponentQuery, GetComponentRequest};
pub use response::{GetComponentResponse, GetComponentResponseBody};
