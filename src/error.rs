/*
 * Responsibility
 * - アプリ共通の ApiError 定義
 * - IntoResponse 実装 (HTTP status / JSON error body)
 * - AuthError (token verification) を HTTP 応答に変換
 */
use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::services::auth::{AuthError, InvalidTokenReason};

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    /// 401. `challenge` adds `WWW-Authenticate: Bearer` (no credential was presented).
    #[error("unauthorized: {message}")]
    Unauthorized {
        message: &'static str,
        challenge: bool,
    },
    /// 500. The server cannot verify anything (e.g. no secret configured).
    #[error("{0}")]
    Misconfigured(&'static str),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, challenge) = match self {
            AppError::Unauthorized { message, challenge } => {
                (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", message, challenge)
            }
            AppError::Misconfigured(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_SERVER_ERROR",
                message,
                false,
            ),
        };

        let body = ErrorResponse {
            error: ErrorBody {
                code,
                message: message.to_string(),
            },
        };

        let mut response = (status, Json(body)).into_response();
        if challenge {
            response
                .headers_mut()
                .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }
        response
    }
}

impl From<AuthError> for AppError {
    fn from(e: AuthError) -> Self {
        match e {
            // 500: misconfigured server
            AuthError::Configuration => AppError::Misconfigured("JWT secret not configured"),
            AuthError::MissingCredential => AppError::Unauthorized {
                message: "Missing or invalid authorization header",
                challenge: true,
            },
            AuthError::InvalidToken(InvalidTokenReason::MissingUserId) => {
                AppError::Unauthorized {
                    message: "Invalid token: missing user_id",
                    challenge: false,
                }
            }
            AuthError::InvalidToken(InvalidTokenReason::Decode(_)) => AppError::Unauthorized {
                message: "Invalid token",
                challenge: false,
            },
            AuthError::Expired => AppError::Unauthorized {
                message: "Token expired",
                challenge: false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_and_challenge(e: AuthError) -> (StatusCode, Option<HeaderValue>) {
        let response = AppError::from(e).into_response();
        let challenge = response.headers().get(header::WWW_AUTHENTICATE).cloned();
        (response.status(), challenge)
    }

    #[test]
    fn maps_auth_errors_to_statuses() {
        assert_eq!(
            status_and_challenge(AuthError::Configuration),
            (StatusCode::INTERNAL_SERVER_ERROR, None)
        );
        assert_eq!(
            status_and_challenge(AuthError::MissingCredential),
            (
                StatusCode::UNAUTHORIZED,
                Some(HeaderValue::from_static("Bearer"))
            )
        );
        assert_eq!(
            status_and_challenge(AuthError::InvalidToken(InvalidTokenReason::Decode(
                "InvalidSignature".into()
            ))),
            (StatusCode::UNAUTHORIZED, None)
        );
        assert_eq!(
            status_and_challenge(AuthError::Expired),
            (StatusCode::UNAUTHORIZED, None)
        );
    }

    #[test]
    fn decode_detail_is_not_exposed() {
        let e = AppError::from(AuthError::InvalidToken(InvalidTokenReason::Decode(
            "InvalidSignature".into(),
        )));

        assert_eq!(e.to_string(), "unauthorized: Invalid token");
    }
}
