pub mod request;
pub mod response;

pub use request::{ListMachineGroupsPath, ListMachineGroupsQuery, ListMachineGroupsRequest};
pub use response::{ListMachineGroupsResponse, ListMachineGroupsResponseBody};
