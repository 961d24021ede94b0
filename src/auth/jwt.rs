use axum::extract::FromRef;
use axum_extra::extract::cookie::{Cookie, SameSite};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};
use tracing::debug;
use uuid::Uuid;

use crate::{config::JwtConfig, state::AppState};

/// Name of the session cookie carrying the signed token.
pub const AUTH_COOKIE: &str = "auth-token";

/// Self-contained session claims. The server trusts them for the token's
/// lifetime and never re-fetches the account.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub email: String,
    pub iat: usize,
    pub exp: usize,
}

#[derive(Clone)]
pub struct JwtKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    session_ttl: Duration,
    remember_ttl: Duration,
}

impl FromRef<AppState> for JwtKeys {
    fn from_ref(state: &AppState) -> Self {
        let JwtConfig {
            secret,
            session_ttl_days,
            remember_ttl_days,
        } = state.config.jwt.clone();
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            session_ttl: Duration::days(session_ttl_days),
            remember_ttl: Duration::days(remember_ttl_days),
        }
    }
}

impl JwtKeys {
    /// Signs a session token. Returns the token together with its
    /// lifetime so the cookie max-age can match the claim expiry.
    pub fn sign_session(
        &self,
        user_id: Uuid,
        email: &str,
        remember: bool,
    ) -> anyhow::Result<(String, Duration)> {
        let ttl = if remember {
            self.remember_ttl
        } else {
            self.session_ttl
        };
        let now = OffsetDateTime::now_utc();
        let claims = Claims {
            sub: user_id,
            email: email.to_string(),
            iat: now.unix_timestamp() as usize,
            exp: (now + ttl).unix_timestamp() as usize,
        };
        let token = encode(&Header::default(), &claims, &self.encoding)?;
        debug!(%user_id, remember, "session token signed");
        Ok((token, ttl))
    }

    pub fn verify(&self, token: &str) -> anyhow::Result<Claims> {
        let data = decode::<Claims>(token, &self.decoding, &Validation::default())?;
        Ok(data.claims)
    }
}

/// Builds the session cookie around a freshly signed token.
pub fn session_cookie(token: String, ttl: Duration, secure: bool) -> Cookie<'static> {
    Cookie::build((AUTH_COOKIE, token))
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/")
        .secure(secure)
        .max_age(ttl)
        .build()
}

/// Cookie used as the removal target for logout and invalid-token paths.
/// The path must match the one the session cookie was set with.
pub fn expired_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::new(AUTH_COOKIE, "");
    cookie.set_path("/");
    cookie
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;

    fn make_keys() -> JwtKeys {
        JwtKeys::from_ref(&AppState::for_tests())
    }

    #[tokio::test]
    async fn sign_and_verify_session_token() {
        let keys = make_keys();
        let user_id = Uuid::new_v4();
        let (token, ttl) = keys
            .sign_session(user_id, "user@example.com", false)
            .expect("sign session");
        assert_eq!(ttl, Duration::days(7));

        let claims = keys.verify(&token).expect("verify token");
        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.email, "user@example.com");
        assert_eq!(claims.exp - claims.iat, 7 * 24 * 60 * 60);
    }

    #[tokio::test]
    async fn remember_me_extends_expiry_to_thirty_days() {
        let keys = make_keys();
        let (token, ttl) = keys
            .sign_session(Uuid::new_v4(), "user@example.com", true)
            .expect("sign session");
        assert_eq!(ttl, Duration::days(30));

        let claims = keys.verify(&token).expect("verify token");
        assert_eq!(claims.exp - claims.iat, 30 * 24 * 60 * 60);
    }

    #[tokio::test]
    async fn verify_rejects_tampered_token() {
        let keys = make_keys();
        let (token, _) = keys
            .sign_session(Uuid::new_v4(), "user@example.com", false)
            .expect("sign session");
        let tampered = format!("{}x", token);
        assert!(keys.verify(&tampered).is_err());
    }

    #[test]
    fn session_cookie_carries_the_contract() {
        let cookie = session_cookie("token-value".into(), Duration::days(7), true);
        assert_eq!(cookie.name(), AUTH_COOKIE);
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.max_age(), Some(Duration::days(7)));
    }
}
