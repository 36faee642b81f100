pub mod request;
pub mod response;

pub use request::{GetMachineGroupPath, GetMachineGroupRequest};
pub use response::{GetMachineGroupResponse, GetMachineGroupResponseBody};
