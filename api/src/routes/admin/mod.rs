//! Admin route handlers

mod listings;
mod users;

pub use listings::list_listings;
pub use users::list_users;
