use super::*;

#[test]
fn default_state_is_loading_and_unauthenticated() {
    let state = AuthState::default();
    assert_eq!(state.phase, AuthPhase::Initializing);
    assert!(state.loading());
    assert!(!state.authenticated());
    assert!(state.user.is_none());
}

#[test]
fn checking_is_still_loading() {
    assert!(AuthPhase::Checking.loading());
    assert!(!AuthPhase::Checking.authenticated());
}

#[test]
fn terminal_phases_are_not_loading() {
    assert!(!AuthPhase::Authenticated.loading());
    assert!(AuthPhase::Authenticated.authenticated());
    assert!(!AuthPhase::Unauthenticated.loading());
    assert!(!AuthPhase::Unauthenticated.authenticated());
}
