pub mod request;
pub mod response;

pub use request::{UpdateQuotaPath, UpdateQuotaRequest, UpdateQuotaRequestBody};
pub use response::{UpdateQuotaResponse, UpdateQuotaResponseBody};
