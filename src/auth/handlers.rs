use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use axum_extra::extract::cookie::CookieJar;
use lazy_static::lazy_static;
use rand::RngCore;
use regex::Regex;
use time::{format_description::well_known::Rfc3339, Duration, OffsetDateTime};
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        dto::{
            ForgotPasswordRequest, ForgotPasswordResponse, LoginRequest, PublicUser,
            ResetPasswordRequest, SessionUser, SignupRequest,
        },
        jwt::{self, JwtKeys},
        password::{hash_password, verify_password},
    },
    error::ApiError,
    response::{ok, ok_with_message},
    state::AppState,
};

const RESET_TOKEN_TTL_MINUTES: i64 = 15;

/// Single message for both unknown email and wrong password, so responses
/// cannot be used to probe which emails are registered.
const LOGIN_FAILED: &str = "이메일 또는 비밀번호가 올바르지 않습니다";

/// Generic acknowledgement returned whether or not the email is
/// registered.
const RESET_REQUESTED: &str = "비밀번호 재설정 안내를 이메일로 발송했습니다";

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/auth/signup", post(signup))
        .route("/auth/login", post(login))
        .route("/auth/logout", post(logout))
        .route("/auth/me", get(me))
        .route("/auth/forgot-password", post(forgot_password))
        .route("/auth/reset-password", post(reset_password))
}

fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

#[instrument(skip(state, payload))]
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if payload.email.is_empty() || payload.password.is_empty() || payload.name.is_empty() {
        return Err(ApiError::Validation(
            "이메일, 비밀번호, 이름을 모두 입력해주세요".into(),
        ));
    }

    if !is_valid_email(&payload.email) {
        warn!(email = %payload.email, "signup with malformed email");
        return Err(ApiError::Validation("올바른 이메일 형식이 아닙니다".into()));
    }

    if payload.password.len() < 8 {
        return Err(ApiError::Validation(
            "비밀번호는 최소 8자 이상이어야 합니다".into(),
        ));
    }

    let hash = hash_password(&payload.password)
        .map_err(ApiError::internal("회원가입 중 오류가 발생했습니다"))?;

    let account = state
        .users
        .insert(&payload.email, &hash, &payload.name)
        .ok_or_else(|| ApiError::Conflict("이미 사용 중인 이메일입니다".into()))?;

    info!(user_id = %account.id, "user signed up");
    Ok((
        StatusCode::CREATED,
        ok_with_message(
            PublicUser {
                id: account.id,
                email: account.email,
                name: account.name,
            },
            "회원가입이 완료되었습니다",
        ),
    ))
}

#[instrument(skip(state, jar, payload))]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if payload.email.is_empty() || payload.password.is_empty() {
        return Err(ApiError::Validation(
            "이메일과 비밀번호를 입력해주세요".into(),
        ));
    }

    let account = state
        .users
        .find_by_email(&payload.email)
        .ok_or_else(|| ApiError::Auth(LOGIN_FAILED.into()))?;

    let ok_password = verify_password(&payload.password, &account.password_hash)
        .map_err(ApiError::internal("로그인 중 오류가 발생했습니다"))?;
    if !ok_password {
        warn!(user_id = %account.id, "login with wrong password");
        return Err(ApiError::Auth(LOGIN_FAILED.into()));
    }

    let keys = JwtKeys::from_ref(&state);
    let (token, ttl) = keys
        .sign_session(account.id, &account.email, payload.remember_me)
        .map_err(ApiError::internal("로그인 중 오류가 발생했습니다"))?;

    info!(user_id = %account.id, "user logged in");
    let jar = jar.add(jwt::session_cookie(token, ttl, state.config.production));
    Ok((
        jar,
        ok_with_message(
            PublicUser {
                id: account.id,
                email: account.email,
                name: account.name,
            },
            "로그인 성공",
        ),
    ))
}

#[instrument(skip(jar))]
pub async fn logout(jar: CookieJar) -> impl IntoResponse {
    let jar = jar.remove(jwt::expired_cookie());
    (
        jar,
        ok_with_message(serde_json::Value::Null, "로그아웃되었습니다"),
    )
}

#[instrument(skip(state, jar))]
pub async fn me(State(state): State<AppState>, jar: CookieJar) -> Response {
    let Some(token) = jar.get(jwt::AUTH_COOKIE).map(|c| c.value().to_string()) else {
        return ApiError::Auth("로그인이 필요합니다".into()).into_response();
    };

    let keys = JwtKeys::from_ref(&state);
    match keys.verify(&token) {
        Ok(claims) => ok(SessionUser {
            id: claims.sub,
            email: claims.email,
        })
        .into_response(),
        Err(_) => {
            // Invalid or expired token: drop the cookie along with the 401.
            let jar = jar.remove(jwt::expired_cookie());
            (
                jar,
                ApiError::Auth("인증 토큰이 유효하지 않습니다".into()),
            )
                .into_response()
        }
    }
}

#[instrument(skip(state, payload))]
pub async fn forgot_password(
    State(state): State<AppState>,
    Json(payload): Json<ForgotPasswordRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if payload.email.is_empty() {
        return Err(ApiError::Validation("이메일을 입력해주세요".into()));
    }

    // Unregistered emails get the same acknowledgement with no token
    // details, so the endpoint cannot be used to probe for accounts.
    if state.users.find_by_email(&payload.email).is_none() {
        return Ok(ok_with_message(
            ForgotPasswordResponse::default(),
            RESET_REQUESTED,
        ));
    }

    let token = generate_reset_token();
    let expires_at = OffsetDateTime::now_utc() + Duration::minutes(RESET_TOKEN_TTL_MINUTES);
    state.users.set_reset_token(&payload.email, &token, expires_at);

    let data = if state.config.production {
        ForgotPasswordResponse::default()
    } else {
        let reset_url = format!(
            "{}/auth/reset-password?token={}",
            state.config.base_url.trim_end_matches('/'),
            token
        );
        let expires_at = expires_at
            .format(&Rfc3339)
            .map_err(ApiError::internal("비밀번호 재설정 요청 중 오류가 발생했습니다"))?;
        ForgotPasswordResponse {
            reset_token: Some(token),
            reset_url: Some(reset_url),
            expires_at: Some(expires_at),
        }
    };

    Ok(ok_with_message(data, RESET_REQUESTED))
}

#[instrument(skip(state, payload))]
pub async fn reset_password(
    State(state): State<AppState>,
    Json(payload): Json<ResetPasswordRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if payload.token.is_empty() {
        return Err(ApiError::Validation("토큰이 유효하지 않습니다".into()));
    }
    if payload.password.is_empty() || payload.confirm_password.is_empty() {
        return Err(ApiError::Validation(
            "새 비밀번호를 모두 입력해주세요".into(),
        ));
    }
    if payload.password != payload.confirm_password {
        return Err(ApiError::Validation("비밀번호가 일치하지 않습니다".into()));
    }
    if payload.password.len() < 8 {
        return Err(ApiError::Validation(
            "비밀번호는 최소 8자 이상이어야 합니다".into(),
        ));
    }

    let hash = hash_password(&payload.password)
        .map_err(ApiError::internal("비밀번호 재설정 중 오류가 발생했습니다"))?;

    if !state.users.redeem_reset_token(&payload.token, &hash) {
        return Err(ApiError::Validation(
            "토큰이 만료되었거나 유효하지 않습니다".into(),
        ));
    }

    info!("password reset completed");
    Ok(ok_with_message(
        serde_json::Value::Null,
        "비밀번호가 성공적으로 변경되었습니다",
    ))
}

fn generate_reset_token() -> String {
    let mut bytes = [0u8; 32];
    rand::rngs::OsRng.fill_bytes(&mut bytes);
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_token_is_64_hex_chars() {
        let token = generate_reset_token();
        assert_eq!(token.len(), 64);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn reset_tokens_are_unique() {
        assert_ne!(generate_reset_token(), generate_reset_token());
    }

    #[test]
    fn email_regex_accepts_plain_addresses() {
        assert!(is_valid_email("a@x.com"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("a b@x.com"));
    }
}
