pub mod request;
pub mod response;

pub use request::{DeleteComponentPath, DeleteComponentRequest};
pub use response::{DeleteComponentResponse, DeleteComponentResponseBody};
