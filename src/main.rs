use gamecodex::{app, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "gamecodex=debug,axum=info,tower_http=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let state = AppState::init().await?;

    match &state.db {
        Some(db) => {
            if let Err(e) = sqlx::migrate!("./migrations").run(db).await {
                tracing::warn!(error = %e, "migration failed; continuing");
            }
        }
        None => {
            tracing::warn!("DATABASE_URL not set; serving built-in skill fixtures, writes disabled");
        }
    }

    let providers = state.config.oauth.configured_providers();
    if providers.is_empty() {
        tracing::info!("no oauth providers configured");
    } else {
        tracing::info!(?providers, "oauth providers configured");
    }

    let app = app::build_app(state);
    app::serve(app).await
}
