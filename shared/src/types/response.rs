//! API response envelope

use serde::{Deserialize, Serialize};

use super::pagination::PageInfo;

/// Standard response envelope used by every endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaseResponse<T> {
    /// HTTP-style status code, mirrored from the response status
    pub code: u16,

    /// Human-readable message
    pub message: String,

    /// Response payload (`null` for most errors)
    pub data: T,

    /// Present on list endpoints
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PageInfo>,
}

impl<T> BaseResponse<T> {
    /// Create a successful (200) response
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            code: 200,
            message: message.into(),
            data,
            pagination: None,
        }
    }

    /// Create a successful 201 response
    pub fn created(data: T, message: impl Into<String>) -> Self {
        Self::success(data, message).with_code(201)
    }

    pub fn with_code(mut self, code: u16) -> Self {
        self.code = code;
        self
    }

    pub fn with_pagination(mut self, pagination: PageInfo) -> Self {
        self.pagination = Some(pagination);
        self
    }

    /// Map the data to a different type
    pub fn map<U, F>(self, f: F) -> BaseResponse<U>
    where
        F: FnOnce(T) -> U,
    {
        BaseResponse {
            code: self.code,
            message: self.message,
            data: f(self.data),
            pagination: self.pagination,
        }
    }
}

impl BaseResponse<serde_json::Value> {
    /// Create an error response
    pub fn error(message: impl Into<String>, code: u16, data: Option<serde_json::Value>) -> Self {
        Self {
            code,
            message: message.into(),
            data: data.unwrap_or(serde_json::Value::Null),
            pagination: None,
        }
    }
}
