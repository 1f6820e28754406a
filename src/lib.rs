// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Auth responder: completes a login once the upstream authentication layer
//! has verified the user.
//!
//! This crate issues the access token for the authenticated principal and
//! answers with the user's public profile.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use config::Config;
use db::UserDirectory;
use services::{JwtService, LoginSuccessResponder, OnAuthSuccess, TokenIssuer};
use std::sync::Arc;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub token_issuer: Arc<dyn TokenIssuer>,
    pub responder: Arc<dyn OnAuthSuccess>,
}

impl AppState {
    /// Wire the JWT issuer and login responder over `users`.
    pub fn new(config: Config, users: Arc<dyn UserDirectory>) -> Self {
        let token_issuer: Arc<dyn TokenIssuer> = Arc::new(JwtService::from_config(&config));
        let responder = LoginSuccessResponder::new(token_issuer.clone(), users)
            .with_authorization_scheme(config.authorization_scheme.clone());

        Self {
            config,
            token_issuer,
            responder: Arc::new(responder),
        }
    }
}
