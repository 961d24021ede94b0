use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    pub session_ttl_days: i64,
    pub remember_ttl_days: i64,
}

/// Client credentials for a delegated OAuth provider. Token exchange is
/// handled by the providers themselves; we only carry the configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct OAuthProvider {
    pub client_id: String,
    pub client_secret: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OAuthConfig {
    pub google: Option<OAuthProvider>,
    pub github: Option<OAuthProvider>,
    pub naver: Option<OAuthProvider>,
    pub discord: Option<OAuthProvider>,
}

impl OAuthConfig {
    pub fn configured_providers(&self) -> Vec<&'static str> {
        let mut providers = Vec::new();
        if self.google.is_some() {
            providers.push("google");
        }
        if self.github.is_some() {
            providers.push("github");
        }
        if self.naver.is_some() {
            providers.push("naver");
        }
        if self.discord.is_some() {
            providers.push("discord");
        }
        providers
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Skills store. Absent means the read path serves the built-in
    /// fixtures and every write path fails with a configuration error.
    pub database_url: Option<String>,
    pub jwt: JwtConfig,
    pub base_url: String,
    pub production: bool,
    pub oauth: OAuthConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL").ok().filter(|v| !v.is_empty());
        let jwt = JwtConfig {
            secret: std::env::var("JWT_SECRET")?,
            session_ttl_days: std::env::var("SESSION_TTL_DAYS")
                .ok()
                .and_then(|v| v.parse::<i64>().ok())
                .unwrap_or(7),
            remember_ttl_days: std::env::var("SESSION_REMEMBER_TTL_DAYS")
                .ok()
                .and_then(|v| v.parse::<i64>().ok())
                .unwrap_or(30),
        };
        let base_url =
            std::env::var("PUBLIC_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".into());
        let production = std::env::var("APP_ENV")
            .map(|v| v == "production")
            .unwrap_or(false);
        let oauth = OAuthConfig {
            google: oauth_provider("GOOGLE"),
            github: oauth_provider("GITHUB"),
            naver: oauth_provider("NAVER"),
            discord: oauth_provider("DISCORD"),
        };
        Ok(Self {
            database_url,
            jwt,
            base_url,
            production,
            oauth,
        })
    }
}

fn oauth_provider(prefix: &str) -> Option<OAuthProvider> {
    let client_id = std::env::var(format!("{prefix}_CLIENT_ID")).ok()?;
    let client_secret = std::env::var(format!("{prefix}_CLIENT_SECRET")).ok()?;
    Some(OAuthProvider {
        client_id,
        client_secret,
    })
}
