/*!
 * Tests for the session state machine.
 *
 * These exercise the pure transition functions on `SessionState` without any
 * provider, clipboard, or notifier involved.
 */

use codeshift::errors::SessionError;
use codeshift::session::{LanguageRole, RequestStatus, SessionState};
use codeshift::LanguageCode;

fn fresh_state() -> SessionState {
    SessionState::new(LanguageCode::new("javascript"), LanguageCode::new("python"))
}

#[test]
fn test_newState_shouldStartIdleWithEmptyText() {
    let state = fresh_state();
    assert_eq!(state.status(), RequestStatus::Idle);
    assert_eq!(state.source_text(), "");
    assert_eq!(state.result_text(), "");
    assert_eq!(state.source_language().as_str(), "javascript");
    assert_eq!(state.target_language().as_str(), "python");
}

#[test]
fn test_beginRequest_withEmptyInput_shouldRejectWithoutStatusChange() {
    let mut state = fresh_state();
    let result = state.begin_request();
    assert!(matches!(result, Err(SessionError::EmptyInput)));
    assert_eq!(state.status(), RequestStatus::Idle);
}

#[test]
fn test_beginRequest_withWhitespaceOnlyInput_shouldRejectWithoutStatusChange() {
    let mut state = fresh_state();
    state.set_source_text("   \n\t  ");
    let result = state.begin_request();
    assert!(matches!(result, Err(SessionError::EmptyInput)));
    assert_eq!(state.status(), RequestStatus::Idle);
}

#[test]
fn test_beginRequest_withValidInput_shouldGoPendingAndCarryCurrentPair() {
    let mut state = fresh_state();
    state.set_source_text("console.log(1)");

    let ticket = state.begin_request().unwrap();
    assert_eq!(state.status(), RequestStatus::Pending);
    assert_eq!(state.result_text(), "");
    assert_eq!(ticket.request.input_code, "console.log(1)");
    assert_eq!(ticket.request.input_lang.as_str(), "javascript");
    assert_eq!(ticket.request.output_lang.as_str(), "python");
}

#[test]
fn test_beginRequest_whilePending_shouldRejectSecondRequest() {
    let mut state = fresh_state();
    state.set_source_text("console.log(1)");

    let _first = state.begin_request().unwrap();
    let second = state.begin_request();
    assert!(matches!(second, Err(SessionError::TranslationPending)));
    assert_eq!(state.status(), RequestStatus::Pending);
}

#[test]
fn test_settleSuccess_withCurrentTicket_shouldStoreResult() {
    let mut state = fresh_state();
    state.set_source_text("console.log(1)");

    let ticket = state.begin_request().unwrap();
    assert!(state.settle_success(&ticket, "print(1)"));
    assert_eq!(state.status(), RequestStatus::Succeeded);
    assert_eq!(state.result_text(), "print(1)");
}

#[test]
fn test_settleFailure_withCurrentTicket_shouldFailWithEmptyResult() {
    let mut state = fresh_state();
    state.set_source_text("console.log(1)");

    let ticket = state.begin_request().unwrap();
    assert!(state.settle_failure(&ticket));
    assert_eq!(state.status(), RequestStatus::Failed);
    assert_eq!(state.result_text(), "");
}

#[test]
fn test_settleSuccess_afterLanguageChange_shouldDiscardStaleResponse() {
    let mut state = fresh_state();
    state.set_source_text("console.log(1)");
    let ticket = state.begin_request().unwrap();

    // Changing a language mid-flight supersedes the request
    state.set_language(LanguageRole::Target, LanguageCode::new("java"));

    assert!(!state.settle_success(&ticket, "print(1)"));
    assert_eq!(state.status(), RequestStatus::Idle);
    assert_eq!(state.result_text(), "");
}

#[test]
fn test_settleFailure_afterCancel_shouldDiscardStaleFailure() {
    let mut state = fresh_state();
    state.set_source_text("console.log(1)");
    let ticket = state.begin_request().unwrap();

    state.cancel();
    assert_eq!(state.status(), RequestStatus::Idle);

    assert!(!state.settle_failure(&ticket));
    assert_eq!(state.status(), RequestStatus::Idle);
}

#[test]
fn test_cancel_whenNotPending_shouldBeNoOp() {
    let mut state = fresh_state();
    state.set_source_text("console.log(1)");
    let ticket = state.begin_request().unwrap();
    state.settle_success(&ticket, "print(1)");

    state.cancel();
    assert_eq!(state.status(), RequestStatus::Succeeded);
    assert_eq!(state.result_text(), "print(1)");
}

#[test]
fn test_setLanguage_source_shouldAlwaysClearSourceText() {
    let mut state = fresh_state();
    state.set_source_text("console.log(1)");

    state.set_language(LanguageRole::Source, LanguageCode::new("java"));
    assert_eq!(state.source_text(), "");
    assert_eq!(state.source_language().as_str(), "java");
    assert_eq!(state.status(), RequestStatus::Idle);

    // Clearing is unconditional, also when the text is already empty
    state.set_language(LanguageRole::Source, LanguageCode::new("cpp"));
    assert_eq!(state.source_text(), "");
}

#[test]
fn test_setLanguage_target_shouldClearResultButKeepSourceText() {
    let mut state = fresh_state();
    state.set_source_text("console.log(1)");
    let ticket = state.begin_request().unwrap();
    state.settle_success(&ticket, "print(1)");

    state.set_language(LanguageRole::Target, LanguageCode::new("java"));
    assert_eq!(state.result_text(), "");
    assert_eq!(state.source_text(), "console.log(1)");
    assert_eq!(state.target_language().as_str(), "java");
    // Status is untouched outside Pending
    assert_eq!(state.status(), RequestStatus::Succeeded);
}

#[test]
fn test_setSourceText_shouldBeIdempotent() {
    let mut state = fresh_state();
    state.set_source_text("console.log(1)");
    let once = state.clone();

    state.set_source_text("console.log(1)");
    assert_eq!(state.source_text(), once.source_text());
    assert_eq!(state.status(), once.status());
    assert_eq!(state.result_text(), once.result_text());
}

#[test]
fn test_beginRequest_afterSettledRequest_shouldGoPendingAgain() {
    let mut state = fresh_state();
    state.set_source_text("console.log(1)");

    // Failed -> Pending
    let ticket = state.begin_request().unwrap();
    state.settle_failure(&ticket);
    let ticket = state.begin_request().unwrap();
    assert_eq!(state.status(), RequestStatus::Pending);

    // Succeeded -> Pending, and the old result is cleared on re-issue
    state.settle_success(&ticket, "print(1)");
    let _ticket = state.begin_request().unwrap();
    assert_eq!(state.status(), RequestStatus::Pending);
    assert_eq!(state.result_text(), "");
}
