//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components apply identical unauthenticated-redirect and forced
//! logout behavior. Any 401 from the backend ends the session.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::account::LOGIN_ROUTE;
use crate::state::session::SessionState;

/// Whether a guarded route should bounce to the login page.
pub fn should_redirect_unauth(session: &SessionState) -> bool {
    session.restored && !session.is_authenticated()
}

/// Redirect to `/login` whenever the session has been restored and holds no token.
pub fn install_unauth_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&session.get()) {
            navigate(LOGIN_ROUTE, NavigateOptions::default());
        }
    });
}

/// Clear credentials and navigate to the login page once.
pub fn force_logout<G: FnOnce(&str)>(session: &mut SessionState, navigate: G) {
    session.clear_auth();
    navigate(LOGIN_ROUTE);
}

/// Drop credentials after a 401. The route guard installed by
/// [`install_unauth_redirect`] performs the single navigation to `/login`.
pub fn expire_session(session: RwSignal<SessionState>) {
    session.update(SessionState::clear_auth);
}

/// Signal-level [`force_logout`] for explicit logout.
pub fn logout_and_redirect<F>(session: RwSignal<SessionState>, navigate: &F)
where
    F: Fn(&str, NavigateOptions),
{
    let mut target = None;
    session.update(|s| force_logout(s, |path| target = Some(path.to_owned())));
    if let Some(path) = target {
        navigate(&path, NavigateOptions::default());
    }
}
