//! Catalog session state
//!
//! The product list a user is looking at is an owned value, advanced by a
//! single reducer over explicit events. Rendering reads the session; it
//! never mutates it.

mod catalog_session;
mod product_card;
mod session_event;

pub use catalog_session::{reduce, CatalogSession};
pub use product_card::ProductCard;
pub use session_event::SessionEvent;
