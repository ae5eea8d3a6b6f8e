use actix_web::{middleware::NormalizePath, web, App, HttpServer};
use portfolio_api::{
    db::memory::create_store,
    repositories::memory_repo::MemoryRepo,
    routes::configure_routes,
    settings::{AppConfig, AppEnvironment},
    AppState,
};
use reqwest::Client;
use std::{net::TcpListener, sync::Arc, time::Duration};

pub struct TestApp {
    pub state: Arc<AppState>,
    pub address: String,
    pub client: Client,
}

impl TestApp {
    /// Server backed by the demo fixture.
    pub async fn spawn() -> Self {
        let store = create_store(&test_config()).expect("Failed to seed test store");
        Self::spawn_with_store(store).await
    }

    /// Server backed by an empty store.
    #[allow(dead_code)]
    pub async fn spawn_empty() -> Self {
        Self::spawn_with_store(MemoryRepo::new()).await
    }

    pub async fn spawn_with_store(store: MemoryRepo) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let state = Arc::new(AppState::new(store));

        let state_clone = state.clone();
        let server = HttpServer::new(move || {
            App::new()
                .app_data(web::Data::from(state_clone.clone()))
                .wrap(NormalizePath::trim())
                .configure(configure_routes)
        })
        .listen(listener)
        .expect("Failed to bind server")
        .workers(1)
        .run();

        tokio::spawn(server);

        let client = Client::new();
        while client.get(format!("{}/api/health", address)).send().await.is_err() {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }

        Self { state, address, client }
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(format!("{}{}", self.address, path))
            .send()
            .await
            .expect("Failed to send request")
    }
}

pub fn test_config() -> AppConfig {
    AppConfig {
        env: AppEnvironment::Testing,
        port: 0,
        name: "Portfolio API Test".to_string(),
        host: "127.0.0.1".to_string(),
        worker_count: 1,
        ..AppConfig::default()
    }
}
