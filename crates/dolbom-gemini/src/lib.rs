// SPDX-FileCopyrightText: 2026 Dolbom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gemini API client for the Dolbom webhook relay.
//!
//! Covers both generation paths of the relay: the bounded provisional wait
//! message for the synchronous ack, and the full structured consultation
//! answer delivered later via callback.

pub mod client;
pub mod prompt;
pub mod types;

pub use client::GeminiClient;
