//! Listing management: publish, edit and browse rental units

mod service;

pub use service::{ListingDraft, ListingPatch, ListingService};
