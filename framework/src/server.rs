use crate::config::ServerConfig;
use crate::error::FrameworkError;
use crate::http::{collect_limited, HttpResponse, Request};
use crate::middleware::MiddlewareChain;
use crate::routing::{fallback_handler, Router};
use bytes::Bytes;
use futures::FutureExt;
use http_body_util::Full;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use std::any::Any;
use std::convert::Infallible;
use std::net::{IpAddr, SocketAddr};
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tokio::net::TcpListener;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

pub struct Server {
    router: Arc<Router>,
    host: String,
    port: u16,
    max_body_size: usize,
}

impl Server {
    pub fn new(router: impl Into<Router>) -> Self {
        Self::from_config(router, &ServerConfig::default())
    }

    pub fn from_config(router: impl Into<Router>, config: &ServerConfig) -> Self {
        Self {
            router: Arc::new(router.into()),
            host: config.host.clone(),
            port: config.port,
            max_body_size: config.max_body_size,
        }
    }

    pub fn host(mut self, host: &str) -> Self {
        self.host = host.to_string();
        self
    }

    fn addr(&self) -> Result<SocketAddr, BoxError> {
        let ip = self
            .host
            .parse::<IpAddr>()
            .map_err(|e| format!("invalid SERVER_HOST '{}': {}", self.host, e))?;
        Ok(SocketAddr::new(ip, self.port))
    }

    /// Serve until Ctrl+C
    pub async fn run(self) -> Result<(), BoxError> {
        let addr = self.addr()?;
        let listener = TcpListener::bind(addr).await?;
        tracing::info!(%addr, "server listening");

        let router = self.router;
        let limit = self.max_body_size;

        let shutdown = tokio::signal::ctrl_c();
        tokio::pin!(shutdown);

        loop {
            let (stream, peer) = tokio::select! {
                accepted = listener.accept() => accepted?,
                _ = &mut shutdown => {
                    tracing::info!("shutdown signal received");
                    return Ok(());
                }
            };
            let io = TokioIo::new(stream);
            let router = router.clone();

            tokio::spawn(async move {
                let service = service_fn(move |req: hyper::Request<hyper::body::Incoming>| {
                    let router = router.clone();
                    async move { Ok::<_, Infallible>(handle_request(&router, limit, req).await) }
                });

                if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
                    tracing::warn!(%peer, error = %err, "error serving connection");
                }
            });
        }
    }
}

async fn handle_request(
    router: &Router,
    limit: usize,
    req: hyper::Request<hyper::body::Incoming>,
) -> hyper::Response<Full<Bytes>> {
    let (parts, body) = req.into_parts();
    let response = match collect_limited(body, limit).await {
        Ok(bytes) => dispatch(router, Request::new(parts, bytes)).await,
        Err(err) => HttpResponse::from(err),
    };
    response.into_hyper()
}

/// Route one request through the router's layers and handler
///
/// Unmatched requests still pass through the layers before the 404 fallback.
/// A panic inside the chain is caught, logged and answered with a 500.
pub async fn dispatch(router: &Router, request: Request) -> HttpResponse {
    let method = request.method().clone();
    let path = request.path().to_string();

    let (handler, request) = match router.match_route(&method, &path) {
        Some((handler, params)) => (handler, request.with_params(params)),
        None => (fallback_handler(), request),
    };
    let request = request.with_state(router.shared_state());

    let mut chain = MiddlewareChain::new();
    chain.extend(router.layers().iter().cloned());

    match AssertUnwindSafe(chain.execute(request, handler))
        .catch_unwind()
        .await
    {
        Ok(response) => response.unwrap_or_else(|e| e),
        Err(panic) => {
            tracing::error!(%method, %path, panic = panic_message(panic.as_ref()), "handler panicked");
            FrameworkError::internal("handler panicked").into()
        }
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> &str {
    panic
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| panic.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("unknown panic")
}
