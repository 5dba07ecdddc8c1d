use poem::{EndpointExt, Route, Server as PoemServer, listener::TcpListener, middleware::Tracing};
use poem_openapi::OpenApiService;

use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

pub const API_PREFIX: &str = "/api";

pub struct Server;

impl Server {
    /// The API under `/api` plus Swagger UI and the OpenAPI document.
    pub fn routes(container: DependencyContainer, addr: &str) -> Route {
        let api_service = OpenApiService::new(
            (
                container.health_api,
                container.product_api,
                container.category_api,
                container.cart_api,
            ),
            "Storefront API",
            env!("CARGO_PKG_VERSION"),
        )
        .server(format!("http://{}{}", addr, API_PREFIX));
        let ui = api_service.swagger_ui();
        let spec = api_service.spec_endpoint();

        Route::new()
            .nest(API_PREFIX, api_service)
            .nest("/docs", ui)
            .nest("/openapi.json", spec)
    }

    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let app = Self::routes(container, &addr)
            .with(config.cors)
            .with(Tracing);

        tracing::info!("Server running at http://{}{}", addr, API_PREFIX);
        tracing::info!("Swagger UI at http://{}/docs", addr);
        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }
}
