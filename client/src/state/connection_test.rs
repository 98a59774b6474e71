use super::*;

#[test]
fn connection_status_default_is_disconnected() {
    assert_eq!(ConnectionStatus::default(), ConnectionStatus::Disconnected);
    assert_eq!(ConnectionState::default().label(), "Offline");
}

#[test]
fn connect_cycle_tracks_attempts_and_errors() {
    let mut state = ConnectionState::default();
    state.mark_connecting();
    state.mark_error("refused".to_owned());
    state.mark_disconnected();
    state.mark_connecting();
    assert_eq!(state.attempts, 2);
    assert_eq!(state.last_error.as_deref(), Some("refused"));

    state.mark_connected();
    assert_eq!(state.status, ConnectionStatus::Connected);
    assert_eq!(state.attempts, 0);
    assert!(state.last_error.is_none());
    assert_eq!(state.label(), "Live");
}
