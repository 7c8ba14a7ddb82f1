use hs_core::domain::entities::{NewRoom, RoomFilter, RoomPatch, RoomStatus};
use hs_shared::Pagination;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Body of `POST /api/v1/rooms`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoomRequest {
    pub branch_id: Uuid,
    #[serde(default)]
    #[validate(length(max = 32, message = "Room number must be at most 32 characters"))]
    pub room_number: String,
    #[serde(rename = "type", default)]
    #[validate(length(max = 64, message = "Room type must be at most 64 characters"))]
    pub room_type: String,
    pub status: Option<RoomStatus>,
    pub price: f64,
    pub description: Option<String>,
}

impl From<CreateRoomRequest> for NewRoom {
    fn from(body: CreateRoomRequest) -> Self {
        NewRoom {
            branch_id: body.branch_id,
            room_number: body.room_number,
            room_type: body.room_type,
            status: body.status,
            price: body.price,
            description: body.description,
        }
    }
}

/// Body of `PATCH /api/v1/rooms/{id}`
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRoomRequest {
    #[validate(length(max = 32, message = "Room number must be at most 32 characters"))]
    pub room_number: Option<String>,
    #[serde(rename = "type")]
    #[validate(length(max = 64, message = "Room type must be at most 64 characters"))]
    pub room_type: Option<String>,
    pub status: Option<RoomStatus>,
    pub price: Option<f64>,
    pub description: Option<String>,
}

impl From<UpdateRoomRequest> for RoomPatch {
    fn from(body: UpdateRoomRequest) -> Self {
        RoomPatch {
            room_number: body.room_number,
            room_type: body.room_type,
            status: body.status,
            price: body.price,
            description: body.description,
        }
    }
}

/// Query string of `GET /api/v1/rooms`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomListQuery {
    pub limit: Option<String>,
    pub page: Option<String>,
    pub branch_id: Option<Uuid>,
}

impl RoomListQuery {
    pub fn filter(&self) -> RoomFilter {
        RoomFilter {
            branch_id: self.branch_id,
        }
    }

    pub fn pagination(&self) -> Pagination {
        super::pagination(self.limit.as_deref(), self.page.as_deref())
    }
}
