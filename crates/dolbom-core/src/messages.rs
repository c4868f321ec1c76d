// SPDX-FileCopyrightText: 2026 Dolbom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fixed user-visible message text.
//!
//! These strings are part of the product contract: the ack fallback and the
//! apology are asserted verbatim by tests, and the chat platform shows them
//! to end users unchanged. Keep them in sync with the operator docs.

/// Shown in the synchronous ack when the provisional wait-message call fails
/// or times out.
pub const DEFAULT_WAIT_MESSAGE: &str =
    "네, 질문을 확인했어요. AI가 답변을 열심히 준비하고 있으니 잠시만 기다려주세요! 🤖";

/// Returned with HTTP 400 when the inbound webhook is missing required fields.
pub const INVALID_REQUEST_MESSAGE: &str = "잘못된 요청입니다.";

/// Returned with HTTP 500 when the job could not be submitted to the queue.
pub const DISPATCH_FAILED_MESSAGE: &str = "시스템 오류로 작업을 시작하지 못했어요.";

/// Delivered via callback when answer generation fails for any reason.
pub const GENERATION_FAILED_MESSAGE: &str =
    "죄송합니다, AI 답변 생성 중 오류가 발생했어요. 잠시 후 다시 시도해주세요. 😥";
