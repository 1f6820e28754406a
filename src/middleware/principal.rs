// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Principal extraction middleware.
//!
//! Credential checks happen upstream. The authenticating proxy forwards the
//! verified subject in a trusted header, which this layer turns into a
//! [`Principal`] request extension.

use crate::error::AppError;
use crate::models::Principal;
use crate::AppState;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

/// Middleware that requires an authenticated principal.
pub async fn require_principal(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let subject = request
        .headers()
        .get(state.config.principal_header.as_str())
        .and_then(|h| h.to_str().ok())
        .ok_or(AppError::Unauthorized)?;

    let principal = Principal::new(subject).map_err(|_| AppError::Unauthorized)?;

    request.extensions_mut().insert(principal);

    Ok(next.run(request).await)
}
