use crate::backend::AuthClient;
use crate::error::AuthError;
use crate::models::session::{Credentials, Session};

/// The admin login form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub pending: bool,
    pub error: Option<String>,
}

impl LoginForm {
    /// Starts a sign-in. `None` while one is already in flight.
    pub fn begin(&mut self) -> Option<Credentials> {
        if self.pending {
            return None;
        }
        self.pending = true;
        self.error = None;
        Some(Credentials {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        })
    }

    /// Returns whether the admin is now signed in.
    pub fn finish(&mut self, result: Result<Session, AuthError>) -> bool {
        self.pending = false;
        match result {
            Ok(_) => true,
            Err(err) => {
                self.error = Some(err.user_message());
                false
            }
        }
    }

    pub fn button_label(&self) -> &'static str {
        if self.pending {
            "Signing in..."
        } else {
            "Sign In"
        }
    }
}

/// Runs one submit of the form against `auth`.
pub async fn submit(form: &mut LoginForm, auth: &dyn AuthClient) -> bool {
    match form.begin() {
        Some(credentials) => {
            let result = auth.sign_in(credentials).await;
            form.finish(result)
        }
        None => false,
    }
}
