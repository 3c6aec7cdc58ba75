mod app;
mod server;

pub use app::{AppConfig, LogFormat};
pub use server::ServerConfig;
