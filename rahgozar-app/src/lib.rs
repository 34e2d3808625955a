pub mod app;
pub mod app_config;
pub mod error;
pub mod routes;
pub mod telemetry;

pub use app::App;
pub use app_config::Config;
pub use error::{AppError, AppResult};
pub use routes::{Navigation, Page, Route};
