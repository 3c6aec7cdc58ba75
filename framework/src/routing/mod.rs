mod macros;
mod router;

pub use macros::{validate_route_path, RouteDef};
pub(crate) use router::fallback_handler;
pub use router::{BoxedHandler, RouteBuilder, RouteInfo, Router};

#[doc(hidden)]
pub use http as __http;
