pub mod request;
pub mod response;

pub use request::{DeleteResourceGroupPath, DeleteResourceGroupRequest};
pub use response::{DeleteResourceGroupResponse, DeleteResourceGroupResponseBody};
