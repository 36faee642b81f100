pub mod request;
pub mod response;

pub use request::{
    ListAlgorithmVersionsPath, ListAlgorithmVersionsQuery, ListAlgorithmVersionsRequest,
};
pub use response::{ListAlgorithmVersionsResponse, ListAlgorithmVersionsResponseBody};
