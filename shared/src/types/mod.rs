//! Type definitions shared by the API and the domain layer
//!
//! - `pagination` - Offset pagination for list endpoints
//! - `response` - The `{code, message, data, pagination?}` envelope

pub mod pagination;
pub mod response;

pub use pagination::{Page, PageInfo, PageQuery, Pagination};
pub use response::BaseResponse;
