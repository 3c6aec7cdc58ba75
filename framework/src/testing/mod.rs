//! Testing utilities
//!
//! - `expect!` for fluent assertions with clear expected/received output
//! - [`TestClient`] to drive a [`Router`](crate::Router) in-process, through
//!   the same layers and dispatch path the server uses
//!
//! # Example
//!
//! ```rust,ignore
//! use marquee::expect;
//! use marquee::testing::TestClient;
//!
//! #[tokio::test]
//! async fn lists_shows() {
//!     let client = TestClient::new(bootstrap::router(ShowCatalog::seeded()));
//!     let response = client.get("/shows").await;
//!     expect!(response.status()).to_equal(200);
//! }
//! ```

mod client;
mod expect;

pub use client::{TestClient, TestResponse};
pub use expect::Expect;

/// Start a fluent assertion on `value`
#[macro_export]
macro_rules! expect {
    ($value:expr) => {
        $crate::testing::Expect::new($value, concat!(file!(), ":", line!()))
    };
}
