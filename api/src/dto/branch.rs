use hs_core::domain::entities::{BranchFilter, BranchPatch, NewBranch};
use hs_shared::Pagination;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Body of `POST /api/v1/branches`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBranchRequest {
    pub chain_id: Uuid,
    #[serde(default)]
    #[validate(length(max = 255, message = "Name must be at most 255 characters"))]
    pub name: String,
    #[serde(default)]
    #[validate(length(max = 512, message = "Address must be at most 512 characters"))]
    pub address: String,
    #[serde(default)]
    #[validate(length(max = 32, message = "Phone must be at most 32 characters"))]
    pub phone: String,
    pub manager_id: Option<Uuid>,
}

impl From<CreateBranchRequest> for NewBranch {
    fn from(body: CreateBranchRequest) -> Self {
        NewBranch {
            chain_id: body.chain_id,
            name: body.name,
            address: body.address,
            phone: body.phone,
            manager_id: body.manager_id,
        }
    }
}

/// Body of `PATCH /api/v1/branches/{id}`
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBranchRequest {
    pub chain_id: Option<Uuid>,
    #[validate(length(max = 255, message = "Name must be at most 255 characters"))]
    pub name: Option<String>,
    #[validate(length(max = 512, message = "Address must be at most 512 characters"))]
    pub address: Option<String>,
    #[validate(length(max = 32, message = "Phone must be at most 32 characters"))]
    pub phone: Option<String>,
    pub manager_id: Option<Uuid>,
}

impl From<UpdateBranchRequest> for BranchPatch {
    fn from(body: UpdateBranchRequest) -> Self {
        BranchPatch {
            chain_id: body.chain_id,
            name: body.name,
            address: body.address,
            phone: body.phone,
            manager_id: body.manager_id,
        }
    }
}

/// Query string of `GET /api/v1/branches`; `id` narrows to one branch
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchListQuery {
    pub limit: Option<String>,
    pub page: Option<String>,
    pub chain_id: Option<Uuid>,
    #[serde(alias = "branchId")]
    pub id: Option<Uuid>,
}

impl BranchListQuery {
    pub fn filter(&self) -> BranchFilter {
        BranchFilter {
            chain_id: self.chain_id,
            branch_id: self.id,
        }
    }

    pub fn pagination(&self) -> Pagination {
        super::pagination(self.limit.as_deref(), self.page.as_deref())
    }
}
