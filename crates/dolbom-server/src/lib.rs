// SPDX-FileCopyrightText: 2026 Dolbom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP relay server for the Dolbom webhook relay.
//!
//! Hosts the two endpoints of the two-phase response protocol: the
//! synchronous skill intake that acks within the platform deadline, and the
//! job processor the task queue drives to deliver real answers via callback.

pub mod callback;
pub mod handlers;
pub mod server;

pub use callback::CallbackClient;
pub use server::{build_router, start_server, AppState};
