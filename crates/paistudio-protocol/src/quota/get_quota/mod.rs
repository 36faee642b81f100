pub mod request;
pub mod response;

pub use request::{GetQuotaPath, GetQuotaRequest};
pub use response::{GetQuotaResponse, GetQuotaResponseBody};
