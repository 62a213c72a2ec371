use crate::backend::AuthClient;
use crate::error::AuthError;
use crate::models::session::Session;
use leptos::logging::{error, log};

/// Who may see the admin panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GateState {
    #[default]
    Loading,
    LoggedOut,
    LoggedIn,
}

impl GateState {
    /// Result of the single check made when the admin page loads. Only
    /// meaningful while `Loading`; later results are ignored.
    pub fn session_checked(self, result: Result<Option<Session>, AuthError>) -> Self {
        if self != GateState::Loading {
            return self;
        }
        match result {
            Ok(Some(_)) => GateState::LoggedIn,
            Ok(None) => GateState::LoggedOut,
            Err(err) => {
                error!("[GATE] Error checking auth: {}", err);
                GateState::LoggedOut
            }
        }
    }

    pub fn signed_in(self) -> Self {
        match self {
            GateState::LoggedOut | GateState::LoggedIn => GateState::LoggedIn,
            GateState::Loading => GateState::Loading,
        }
    }

    pub fn signed_out(self) -> Self {
        GateState::LoggedOut
    }

    pub fn is_authenticated(self) -> bool {
        self == GateState::LoggedIn
    }
}

pub async fn check_session(auth: &dyn AuthClient) -> GateState {
    GateState::Loading.session_checked(auth.get_session().await)
}

/// Always ends `LoggedOut`; a failing remote call is only logged.
pub async fn sign_out(auth: &dyn AuthClient, state: GateState) -> GateState {
    match auth.sign_out().await {
        Ok(()) => log!("[GATE] Signed out"),
        Err(err) => error!("[GATE] Sign-out failed remotely: {}", err),
    }
    state.signed_out()
}
