use hs_core::domain::entities::{ChainPatch, NewChain};
use hs_shared::Pagination;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of `POST /api/v1/chains`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateChainRequest {
    /// Missing names are reported by the service as a required field
    #[serde(default)]
    #[validate(length(max = 255, message = "Name must be at most 255 characters"))]
    pub name: String,
    pub description: Option<String>,
}

impl From<CreateChainRequest> for NewChain {
    fn from(body: CreateChainRequest) -> Self {
        NewChain {
            name: body.name,
            description: body.description,
        }
    }
}

/// Body of `PATCH /api/v1/chains/{id}`
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateChainRequest {
    #[validate(length(max = 255, message = "Name must be at most 255 characters"))]
    pub name: Option<String>,
    pub description: Option<String>,
}

impl From<UpdateChainRequest> for ChainPatch {
    fn from(body: UpdateChainRequest) -> Self {
        ChainPatch {
            name: body.name,
            description: body.description,
        }
    }
}

/// Query string of `GET /api/v1/chains`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChainListQuery {
    pub limit: Option<String>,
    pub page: Option<String>,
}

impl ChainListQuery {
    pub fn pagination(&self) -> Pagination {
        super::pagination(self.limit.as_deref(), self.page.as_deref())
    }
}
