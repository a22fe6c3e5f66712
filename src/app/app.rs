use axum::{routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tracing::info;

use crate::config::app_conf::AppConfig;
use crate::config::mongo_conf::MongoConfig;
use crate::model::item::ItemKind;
use crate::repository::account_repo::MongoAccountRepository;
use crate::repository::item_repo::MongoItemRepository;
use crate::repository::mongo::MongoStore;
use crate::router::account_router::account_router;
use crate::router::item_router::item_router;
use crate::service::account_service::AccountServiceImpl;
use crate::service::item_service::ItemServiceImpl;

pub struct App {
    config: AppConfig,
    router: Router,
}

impl App {
    /// Builds the whole dependency graph: config → store → repositories →
    /// services → router. Connection-pool lifecycle is owned here, not by
    /// the repositories.
    pub async fn new() -> Self {
        let config = AppConfig::from_env();
        let mongo_config = MongoConfig::from_env().expect("Mongo config error");

        let store = MongoStore::connect(&mongo_config)
            .await
            .expect("Failed to connect to MongoDB");

        let account_repo = Arc::new(MongoAccountRepository::new(&store));
        account_repo
            .ensure_indexes()
            .await
            .expect("Failed to create username index");

        let lost_service = Arc::new(ItemServiceImpl::new(
            Arc::new(MongoItemRepository::new(&store, ItemKind::Lost)),
            ItemKind::Lost,
        ));
        let found_service = Arc::new(ItemServiceImpl::new(
            Arc::new(MongoItemRepository::new(&store, ItemKind::Found)),
            ItemKind::Found,
        ));
        let account_service = Arc::new(AccountServiceImpl::new(account_repo));

        let router = Self::create_router(
            lost_service,
            found_service,
            account_service,
            &config.static_dir,
        );

        App { config, router }
    }

    fn create_router(
        lost_service: Arc<ItemServiceImpl>,
        found_service: Arc<ItemServiceImpl>,
        account_service: Arc<AccountServiceImpl>,
        static_dir: &str,
    ) -> Router {
        Router::new()
            .merge(item_router(lost_service))
            .merge(item_router(found_service))
            .merge(account_router(account_service))
            .route("/health", get(|| async { "OK" }))
            // The browser client; requests no API route matches fall through
            // to the file server.
            .fallback_service(ServeDir::new(static_dir))
            .layer(CorsLayer::permissive())
    }

    pub async fn start(self) {
        let addr = SocketAddr::new(self.config.host.parse().expect("Invalid host"), self.config.port);
        info!("🚀 Server running at http://{}", addr);
        let listener = tokio::net::TcpListener::bind(addr).await.expect("Failed to bind address");
        axum::serve(listener, self.router).await.expect("Failed to start server");
    }
}
