//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::toast_stack::ToastStack;
use crate::pages::{
    clients::ClientsPage, forgot_password::ForgotPasswordPage, login::LoginPage, project_detail::ProjectDetailPage,
    reset_password::ResetPasswordPage, verify_otp::VerifyOtpPage,
};
use crate::state::clients::DEFAULT_SEGMENT;
use crate::state::{connection::ConnectionState, notify::NotifyState, session::SessionState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides session, toast, and socket-status contexts. In the browser it
/// restores the persisted session and opens the socket once.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let notify = RwSignal::new(NotifyState::default());
    let connection = RwSignal::new(ConnectionState::default());

    provide_context(session);
    provide_context(notify);
    provide_context(connection);

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        session.update(SessionState::restore);
        crate::net::socket::spawn_socket(crate::config::ClientConfig::from_build_env().socket_url, connection);
    });

    let landing = format!("/clients/{DEFAULT_SEGMENT}");

    view! {
        <Stylesheet id="leptos" href="/pkg/projectdesk.css"/>
        <Title text="ProjectDesk"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=move || view! { <Redirect path=landing.clone()/> }/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("forgot-password") view=ForgotPasswordPage/>
                <Route path=StaticSegment("verify-otp") view=VerifyOtpPage/>
                <Route path=StaticSegment("reset-password") view=ResetPasswordPage/>
                <Route path=(StaticSegment("clients"), ParamSegment("segment")) view=ClientsPage/>
                <Route path=(StaticSegment("projects"), ParamSegment("id")) view=ProjectDetailPage/>
            </Routes>
        </Router>
        <ToastStack/>
    }
}
