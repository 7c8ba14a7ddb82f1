//! User profile management.

mod service;

pub use service::UserService;
