pub mod models;
pub mod pii;

pub use models::events::{SessionChanged, SessionChange, SlotKind};
pub use pii::Masked;
