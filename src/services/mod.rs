// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod responder;
pub mod token;

pub use responder::{LoginSuccessResponder, OnAuthSuccess};
pub use token::{Claims, JwtService, TokenIssuer};
