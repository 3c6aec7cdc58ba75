use marquee::Application;
use showbill::bootstrap;
use showbill::catalog::ShowCatalog;

#[tokio::main]
async fn main() -> Result<(), marquee::BoxError> {
    Application::new()
        .routes(|| bootstrap::router(ShowCatalog::seeded()))
        .run()
        .await
}
