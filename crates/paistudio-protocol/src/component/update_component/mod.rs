pub mod request;
pub mod response;

pub use request::{UpdateComponentPath, UpdateComponentRequest, UpdateComponentRequestBody};
pub use response::{UpdateComponentResponse, UpdateComponentResponseBody};
