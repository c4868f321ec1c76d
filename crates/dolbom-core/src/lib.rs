// SPDX-FileCopyrightText: 2026 Dolbom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Dolbom webhook relay.
//!
//! Provides the error taxonomy, the domain types carried through the
//! two-phase response protocol (intake → queue → processing → callback),
//! and the [`TaskDispatcher`] capability trait that decouples intake from
//! the concrete queue collaborator.

pub mod dispatch;
pub mod error;
pub mod messages;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use dispatch::TaskDispatcher;
pub use error::DolbomError;
pub use types::{ConsultationRequest, Job, StructuredAnswer, WaitOutcome};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dolbom_error_has_all_variants() {
        // Verify every variant can be constructed; the taxonomy is part of
        // the crate's public contract.
        let _config = DolbomError::Config("test".into());
        let _invalid = DolbomError::InvalidRequest("test".into());
        let _dispatch = DolbomError::Dispatch {
            message: "test".into(),
            source: None,
        };
        let _generation = DolbomError::Generation {
            message: "test".into(),
            source: Some(Box::new(std::io::Error::other("test"))),
        };
        let _timeout = DolbomError::GenerationTimeout {
            duration: std::time::Duration::from_secs(25),
        };
        let _malformed = DolbomError::MalformedAnswer("test".into());
        let _callback = DolbomError::CallbackDelivery {
            message: "test".into(),
            source: None,
        };
        let _internal = DolbomError::Internal("test".into());
    }

    #[test]
    fn error_messages_name_the_failing_step() {
        let err = DolbomError::Dispatch {
            message: "queue returned 403".into(),
            source: None,
        };
        assert_eq!(err.to_string(), "dispatch error: queue returned 403");

        let err = DolbomError::GenerationTimeout {
            duration: std::time::Duration::from_millis(25_000),
        };
        assert!(err.to_string().contains("timed out"));
    }
}
