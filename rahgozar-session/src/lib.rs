pub mod actions;
pub mod models;
pub mod store;

pub use actions::SessionAction;
pub use models::{Addition, Anchor, BookingSession};
pub use store::SessionStore;
