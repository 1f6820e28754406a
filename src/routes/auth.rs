// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Login completion route.

use axum::{extract::State, response::Response, routing::post, Extension, Router};
use std::sync::Arc;

use crate::error::Result;
use crate::models::Principal;
use crate::AppState;

/// Routes that require an authenticated principal.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/auth/login/success", post(login_success))
}

/// Issue an access token for the authenticated principal.
async fn login_success(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<Principal>,
) -> Result<Response> {
    state.responder.on_authentication_success(&principal).await
}
