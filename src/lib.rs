pub mod app;
pub mod checkin;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod prefill;
pub mod render;
pub mod stats;
pub mod storage;
pub mod ui;
pub mod view;
pub mod state;

pub use app::router;
pub use config::Config;
pub use state::AppState;
pub use storage::{LocalStore, load};
