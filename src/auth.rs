// ABOUTME: Identity adapter resolving the calling user from a trusted gateway header
// ABOUTME: Produces AuthResult for dashboard handlers and rejects missing or malformed ids
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Identity resolution
//!
//! The service runs behind an authenticating gateway which forwards the
//! caller's user id in a configurable header. This module only turns that
//! header into a user id; it does not verify credentials itself.

use crate::config::IdentityConfig;
use crate::constants::defaults;
use crate::errors::{AppError, AppResult};
use crate::logging::AppLogger;
use axum::http::{HeaderMap, HeaderName};
use uuid::Uuid;

/// Authenticated caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthResult {
    /// Authenticated user `ID`
    pub user_id: Uuid,
}

impl AuthResult {
    /// The caller's id, rejecting the nil id
    ///
    /// # Errors
    ///
    /// Returns `AUTH_INVALID` for a nil user id
    pub fn require_user(self) -> AppResult<Uuid> {
        if self.user_id.is_nil() {
            return Err(AppError::auth_invalid("Invalid user ID"));
        }
        Ok(self.user_id)
    }
}

/// Reads the user id and request id from request headers
#[derive(Debug, Clone)]
pub struct HeaderIdentity {
    user_header: HeaderName,
    request_id_header: HeaderName,
}

impl HeaderIdentity {
    /// Identity adapter reading the two named headers
    ///
    /// # Errors
    ///
    /// Returns `CONFIG_INVALID` when either name is not a valid header name
    pub fn new(user_header: &str, request_id_header: &str) -> AppResult<Self> {
        Ok(Self {
            user_header: parse_header_name(user_header)?,
            request_id_header: parse_header_name(request_id_header)?,
        })
    }

    /// Identity adapter for the configured headers
    ///
    /// # Errors
    ///
    /// Same as [`HeaderIdentity::new`]
    pub fn from_config(config: &IdentityConfig) -> AppResult<Self> {
        Self::new(&config.user_header, &config.request_id_header)
    }

    /// Header carrying the user id
    #[must_use]
    pub const fn user_header(&self) -> &HeaderName {
        &self.user_header
    }

    /// Header carrying the request correlation id
    #[must_use]
    pub const fn request_id_header(&self) -> &HeaderName {
        &self.request_id_header
    }

    /// Resolve the caller from request headers
    ///
    /// # Errors
    ///
    /// Returns `AUTH_REQUIRED` when the header is absent and `AUTH_INVALID`
    /// when it is not a non-nil UUID
    pub fn authenticate(&self, headers: &HeaderMap) -> AppResult<AuthResult> {
        let request_id = headers
            .get(&self.request_id_header)
            .and_then(|value| value.to_str().ok());

        let Some(raw) = headers.get(&self.user_header) else {
            AppLogger::log_auth_failure("missing identity header", request_id);
            return Err(with_request_id(AppError::auth_required(), request_id));
        };

        let user_id = raw
            .to_str()
            .ok()
            .map(str::trim)
            .and_then(|value| Uuid::parse_str(value).ok())
            .filter(|id| !id.is_nil())
            .ok_or_else(|| {
                AppLogger::log_auth_failure("malformed identity header", request_id);
                with_request_id(
                    AppError::auth_invalid(format!(
                        "Header {} must carry a user id",
                        self.user_header.as_str()
                    )),
                    request_id,
                )
            })?;

        Ok(AuthResult { user_id })
    }
}

impl Default for HeaderIdentity {
    fn default() -> Self {
        Self {
            user_header: HeaderName::from_static(defaults::USER_HEADER),
            request_id_header: HeaderName::from_static(defaults::REQUEST_ID_HEADER),
        }
    }
}

fn parse_header_name(name: &str) -> AppResult<HeaderName> {
    HeaderName::from_bytes(name.trim().to_lowercase().as_bytes())
        .map_err(|e| AppError::config_invalid(format!("Invalid header name '{name}': {e}")))
}

fn with_request_id(error: AppError, request_id: Option<&str>) -> AppError {
    match request_id {
        Some(id) => error.with_request_id(id),
        None => error,
    }
}
