// In-memory session: auth flags, form fields and the profile picture

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::profile::ProfileImage;

const MOCK_USERNAME: &str = "user";
const MOCK_PASSWORD: &str = "password";

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthAlert {
    AuthenticationFailed,
}

impl AuthAlert {
    pub fn title(&self) -> &'static str {
        match self {
            AuthAlert::AuthenticationFailed => "Authentication Failed",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            AuthAlert::AuthenticationFailed => "Invalid username or password",
        }
    }
}

/// Nothing here is ever written to disk
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub is_authenticated: bool,
    pub is_registering: bool,
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub profile_image: Option<ProfileImage>,
    pub alert: Option<AuthAlert>,
}

impl SessionState {
    /// Mock credential check against a fixed pair. A failure raises the
    /// authentication alert and leaves everything else untouched.
    pub fn login(&mut self, username: &str, password: &str) -> bool {
        if username == MOCK_USERNAME && password == MOCK_PASSWORD {
            debug!("Login succeeded for {}", username);
            self.is_authenticated = true;
            true
        } else {
            debug!("Login failed for {}", username);
            self.alert = Some(AuthAlert::AuthenticationFailed);
            false
        }
    }

    /// Log in with whatever is currently typed into the form
    pub fn submit_login(&mut self) -> bool {
        let username = self.username.clone();
        let password = self.password.clone();
        self.login(&username, &password)
    }

    pub fn begin_registration(&mut self) {
        if self.is_authenticated {
            debug!("Already authenticated, not starting registration");
            return;
        }
        self.is_registering = true;
    }

    pub fn cancel_registration(&mut self) {
        self.is_registering = false;
    }

    /// Accepts the form as is. The confirmation field is not enforced.
    pub fn register(&mut self) {
        if !self.passwords_match() {
            warn!(
                "Registering {} with a password confirmation that does not match",
                self.username
            );
        }
        self.is_registering = false;
        self.is_authenticated = true;
    }

    pub fn logout(&mut self) {
        self.is_authenticated = false;
        self.profile_image = None;
    }

    /// `None` means the picker was cancelled, which keeps the current image
    pub fn set_profile_image(&mut self, image: Option<ProfileImage>) {
        if let Some(image) = image {
            debug!("Profile image set to {:?}", image.path);
            self.profile_image = Some(image);
        }
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    /// Drives the mismatch hint on the registration form
    pub fn passwords_match(&self) -> bool {
        self.password == self.confirm_password
    }
}
