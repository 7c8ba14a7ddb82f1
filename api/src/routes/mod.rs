//! Route handlers
//!
//! Every resource lives in its own module with a `configure` function that
//! registers its endpoints under the `/api/v1` scope.

pub mod bookings;
pub mod branches;
pub mod chains;
pub mod health;
pub mod reviews;
pub mod rooms;
pub mod users;

use actix_web::web;

/// Register all authenticated resources
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/bookings").configure(bookings::configure))
        .service(web::scope("/reviews").configure(reviews::configure))
        .service(web::scope("/chains").configure(chains::configure))
        .service(web::scope("/branches").configure(branches::configure))
        .service(web::scope("/rooms").configure(rooms::configure))
        .service(web::scope("/users").configure(users::configure));
}
