use hs_core::domain::entities::{NewUser, UserPatch};
use hs_shared::Pagination;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of `POST /api/v1/users`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[serde(default)]
    #[validate(length(max = 255, message = "Name must be at most 255 characters"))]
    pub name: String,
    #[validate(email(message = "Email is not valid"))]
    pub email: String,
    #[validate(length(max = 32, message = "Phone number must be at most 32 characters"))]
    pub phone_number: Option<String>,
}

impl From<CreateUserRequest> for NewUser {
    fn from(body: CreateUserRequest) -> Self {
        NewUser {
            name: body.name,
            email: body.email,
            phone_number: body.phone_number,
        }
    }
}

/// Body of `PATCH /api/v1/users`; the caller can only edit their own profile
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[validate(length(max = 255, message = "Name must be at most 255 characters"))]
    pub name: Option<String>,
    #[validate(length(max = 32, message = "Phone number must be at most 32 characters"))]
    pub phone_number: Option<String>,
}

impl From<UpdateUserRequest> for UserPatch {
    fn from(body: UpdateUserRequest) -> Self {
        UserPatch {
            name: body.name,
            phone_number: body.phone_number,
        }
    }
}

/// Query string of `GET /api/v1/users`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserListQuery {
    pub limit: Option<String>,
    pub page: Option<String>,
}

impl UserListQuery {
    pub fn pagination(&self) -> Pagination {
        super::pagination(self.limit.as_deref(), self.page.as_deref())
    }
}
