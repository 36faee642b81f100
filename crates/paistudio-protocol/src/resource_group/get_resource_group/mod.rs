pub mod request;
pub mod response;

pub use request::{GetResourceGroupPath, GetResourceGroupRequest};
pub use response::{GetResourceGroupResponse, GetResourceGroupResponseBody};
