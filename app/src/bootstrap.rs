//! Application bootstrap
//!
//! Wires the catalog, the routes and the router-wide middleware together.
//! Tests build their router through here too, so they exercise the same
//! stack as the binary.

use marquee::{Cors, Router};

use crate::catalog::ShowCatalog;
use crate::middleware::LoggingMiddleware;
use crate::routes;

pub fn router(catalog: ShowCatalog) -> Router {
    tracing::info!(
        shows = catalog.show_count().unwrap_or_default(),
        theatres = catalog.theatres().len(),
        "show catalog ready"
    );

    routes::register()
        .layer(LoggingMiddleware)
        .layer(Cors::permissive())
        .state(catalog)
}
