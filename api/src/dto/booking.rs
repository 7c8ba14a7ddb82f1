use chrono::{DateTime, Utc};
use hs_core::domain::entities::{BookingPatch, BookingRequest, BookingStatus};
use hs_shared::Pagination;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Body of `POST /api/v1/bookings`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub user_id: Uuid,
    pub room_id: Uuid,
    pub check_in: DateTime<Utc>,
    pub check_out: DateTime<Utc>,
    #[serde(default)]
    pub status: BookingStatus,
    pub total_price: f64,
    pub is_deleted: Option<bool>,
}

impl From<CreateBookingRequest> for BookingRequest {
    fn from(body: CreateBookingRequest) -> Self {
        BookingRequest {
            user_id: body.user_id,
            room_id: body.room_id,
            check_in: body.check_in,
            check_out: body.check_out,
            status: body.status,
            total_price: body.total_price,
            is_deleted: body.is_deleted,
        }
    }
}

/// Body of `PATCH /api/v1/bookings/{id}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookingRequest {
    pub check_in: Option<DateTime<Utc>>,
    pub check_out: Option<DateTime<Utc>>,
    pub actual_check_in: Option<DateTime<Utc>>,
    pub actual_check_out: Option<DateTime<Utc>>,
    pub status: Option<BookingStatus>,
    pub total_price: Option<f64>,
}

impl From<UpdateBookingRequest> for BookingPatch {
    fn from(body: UpdateBookingRequest) -> Self {
        BookingPatch {
            check_in: body.check_in,
            check_out: body.check_out,
            actual_check_in: body.actual_check_in,
            actual_check_out: body.actual_check_out,
            status: body.status,
            total_price: body.total_price,
        }
    }
}

/// Query string of `GET /api/v1/bookings`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookingListQuery {
    pub limit: Option<String>,
    pub page: Option<String>,
}

impl BookingListQuery {
    pub fn pagination(&self) -> Pagination {
        super::pagination(self.limit.as_deref(), self.page.as_deref())
    }
}
