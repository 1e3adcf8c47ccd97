mod config;
mod gate;
mod jar;
mod routes;
mod services;
mod state;

use std::sync::Arc;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ConsoleConfig::from_env().expect("invalid configuration");
    let port = config.port;

    let remote = services::remote::HttpRemote::new(&config.api_base_url, config.remote_timeout_secs)
        .expect("remote API client init failed");
    tracing::info!(
        api = %config.api_base_url,
        public = %config.public_base_url,
        secure_cookies = config.cookie_secure,
        "remote API configured"
    );

    let state = state::AppState::new(config, Arc::new(remote));

    let app = routes::leptos_app(state).expect("leptos app init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "admin console listening");
    axum::serve(listener, app).await.expect("server failed");
}
