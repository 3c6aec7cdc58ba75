//! Marquee: a small hyper-based HTTP kit for JSON services.
//!
//! Applications describe their routes with [`routes!`], attach shared state and
//! middleware to the [`Router`], and hand it to an [`Application`] which loads
//! configuration, initializes logging and serves requests.

pub mod app;
pub mod config;
pub mod error;
pub mod http;
pub mod logging;
pub mod middleware;
pub mod routing;
pub mod server;
pub mod state;
pub mod testing;

pub use app::Application;
pub use async_trait::async_trait;
pub use config::{env, AppConfig, Config, Environment, LogFormat, ServerConfig};
pub use error::{AppError, FrameworkError, HttpError};
pub use http::{FormRequest, HttpResponse, Request, Response};
pub use middleware::{Cors, Middleware, Next};
pub use routing::{validate_route_path, RouteDef, RouteInfo, Router};
pub use server::{dispatch, BoxError, Server};
pub use state::State;
