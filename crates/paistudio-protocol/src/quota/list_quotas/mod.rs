pub mod request;
pub mod response;

pub use request::{ListQuotasQuery, ListQuotasRequest};
pub use response::{ListQuotasResponse, ListQuotasResponseBody};
