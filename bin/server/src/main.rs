#[tokio::main]
async fn main() {
    use axum::{
        Router,
        routing::{get, post},
    };
    use copper_quill_platform_access::SessionStore;
    use copper_quill_server::{
        api,
        auth::{self, MemorySessionStore, OidcClient},
        config::ServerConfig,
        state::AppState,
    };
    use copper_quill_webhook::{GenerationClient, PublishClient};
    use std::sync::Arc;
    use tower_http::trace::TraceLayer;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration from environment
    let config = ServerConfig::from_env().expect("failed to load configuration");
    tracing::info!("Loaded configuration");

    // In-memory session store
    let sessions: Arc<dyn SessionStore> = Arc::new(MemorySessionStore::new());

    // Spawn periodic session cleanup task
    let cleanup_sessions = sessions.clone();
    let cleanup_interval_secs = config.session.cleanup_interval_seconds;
    tokio::spawn(async move {
        let mut interval =
            tokio::time::interval(std::time::Duration::from_secs(cleanup_interval_secs));
        loop {
            interval.tick().await;
            match cleanup_sessions.delete_expired().await {
                Ok(count) if count > 0 => {
                    tracing::debug!(deleted_sessions = count, "Periodic session cleanup");
                }
                Ok(_) => {}
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to cleanup expired sessions");
                }
            }
        }
    });

    // Initialize the OIDC client (fetches the provider JWKS)
    tracing::info!("Initializing OIDC client...");
    let oidc_client = OidcClient::from_config(config.oidc)
        .await
        .expect("failed to initialize OIDC client");

    // Outbound webhook clients
    let generation =
        GenerationClient::new(&config.webhook).expect("failed to create generation client");
    let publisher = PublishClient::new(&config.webhook).expect("failed to create publish client");

    // Create application state
    let app_state = Arc::new(AppState::new(
        oidc_client,
        sessions,
        config.session,
        generation,
        publisher,
    ));

    let app = Router::new()
        // Auth routes
        .route("/api/auth/login", get(auth::login))
        .route("/api/auth/callback", get(auth::callback))
        .route("/api/auth/logout", get(auth::logout).post(auth::logout))
        .route("/api/auth/session", get(auth::session))
        // Proxy routes
        .route("/api/generate", post(api::generate))
        .route("/api/publish", post(api::publish))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .expect("failed to bind to address");

    tracing::info!("listening on http://{}", config.listen_addr);

    axum::serve(listener, app.into_make_service())
        .await
        .expect("server error");
}
