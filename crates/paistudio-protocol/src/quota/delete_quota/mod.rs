pub mod request;
pub mod response;

pub use request::{DeleteQuotaPath, DeleteQuotaRequest};
pub use response::{DeleteQuotaResponse, DeleteQuotaResponseBody};
