//! Application entry point
//!
//! ```rust,ignore
//! use marquee::Application;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), marquee::BoxError> {
//!     Application::new()
//!         .routes(bootstrap::router)
//!         .run()
//!         .await
//! }
//! ```

use crate::config::{Config, ServerConfig};
use crate::logging::init_logging;
use crate::routing::Router;
use crate::server::{BoxError, Server};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(about = "HTTP application server and utilities")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the web server (default command)
    Serve {
        /// Bind address, overrides SERVER_HOST
        #[arg(long)]
        host: Option<String>,
        /// Bind port, overrides SERVER_PORT
        #[arg(long)]
        port: Option<u16>,
    },
    /// List the registered routes
    Routes,
}

/// Application builder
pub struct Application {
    project_root: PathBuf,
    routes_fn: Option<Box<dyn FnOnce() -> Router>>,
}

impl Application {
    pub fn new() -> Self {
        Self {
            project_root: PathBuf::from("."),
            routes_fn: None,
        }
    }

    /// Directory searched for `.env` files (default: current directory)
    pub fn project_root(mut self, root: impl AsRef<Path>) -> Self {
        self.project_root = root.as_ref().to_path_buf();
        self
    }

    /// Register the function that builds the router
    ///
    /// It runs after configuration and logging are set up.
    pub fn routes<F>(mut self, f: F) -> Self
    where
        F: FnOnce() -> Router + 'static,
    {
        self.routes_fn = Some(Box::new(f));
        self
    }

    /// Parse the command line and run the selected command
    pub async fn run(self) -> Result<(), BoxError> {
        let cli = Cli::parse();
        let config = Config::load(&self.project_root);

        let build = move || self.routes_fn.map(|f| f()).unwrap_or_default();

        match cli.command {
            Some(Commands::Routes) => {
                print_routes(&build());
                Ok(())
            }
            Some(Commands::Serve { host, port }) => {
                let server = config.server.clone().with_overrides(host, port);
                serve(&config, server, build).await
            }
            None => {
                let server = config.server.clone();
                serve(&config, server, build).await
            }
        }
    }
}

impl Default for Application {
    fn default() -> Self {
        Self::new()
    }
}

async fn serve(
    config: &Config,
    server: ServerConfig,
    router: impl FnOnce() -> Router,
) -> Result<(), BoxError> {
    init_logging(&config.app)?;
    tracing::info!(
        app = %config.app.name,
        environment = %config.app.environment,
        "starting"
    );
    Server::from_config(router(), &server).run().await
}

fn print_routes(router: &Router) {
    for route in router.routes() {
        println!(
            "{:<7} {:<24} {}",
            route.method.as_str(),
            route.path,
            route.name.as_deref().unwrap_or("")
        );
    }
}
