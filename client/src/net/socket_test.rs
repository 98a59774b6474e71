use super::*;

#[test]
fn backoff_doubles_until_cap() {
    assert_eq!(next_backoff_ms(INITIAL_BACKOFF_MS), 2000);
    assert_eq!(next_backoff_ms(4000), 8000);
    assert_eq!(next_backoff_ms(8000), MAX_BACKOFF_MS);
    assert_eq!(next_backoff_ms(MAX_BACKOFF_MS), MAX_BACKOFF_MS);
}

#[test]
fn backoff_never_drops_below_initial() {
    assert_eq!(next_backoff_ms(0), INITIAL_BACKOFF_MS);
    assert_eq!(next_backoff_ms(u32::MAX), MAX_BACKOFF_MS);
}
