use std::sync::Arc;

use anyhow::Context;
use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::auth::store::UserStore;
use crate::config::{AppConfig, JwtConfig, OAuthConfig};

#[derive(Clone)]
pub struct AppState {
    /// Skills store, present only when `DATABASE_URL` is configured.
    pub db: Option<PgPool>,
    pub users: UserStore,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);

        let db = match &config.database_url {
            Some(url) => Some(
                PgPoolOptions::new()
                    .max_connections(10)
                    .connect(url)
                    .await
                    .context("connect to database")?,
            ),
            None => None,
        };

        Ok(Self {
            db,
            users: UserStore::default(),
            config,
        })
    }

    /// Database-free state for unit and router tests.
    pub fn for_tests() -> Self {
        let config = Arc::new(AppConfig {
            database_url: None,
            jwt: JwtConfig {
                secret: "test-secret".into(),
                session_ttl_days: 7,
                remember_ttl_days: 30,
            },
            base_url: "http://localhost:3000".into(),
            production: false,
            oauth: OAuthConfig::default(),
        });
        Self {
            db: None,
            users: UserStore::default(),
            config,
        }
    }
}
