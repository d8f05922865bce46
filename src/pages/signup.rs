//! Signup page: a three-field form with distinct failure messages.

use serde_json::Value;

use crate::error::ApiResult;
use crate::models::SignupRequest;
use crate::view::{PageChrome, SIGNUP_CHROME};
use crate::StorefrontClient;

// ---------------------------------------------------------------------------
// SignupForm
// ---------------------------------------------------------------------------

/// State container for the signup form.
///
/// Failures surface in the error banner with textually distinct messages:
/// the server's own `{error}` string, `No response from server` for an
/// absent body, `Failed to connect to server` for a transport failure.
/// The fields keep their contents on failure and clear on success.
pub struct SignupForm<'a> {
    client: &'a StorefrontClient,
    name: String,
    email: String,
    password: String,
    error: Option<String>,
    success: bool,
}

impl<'a> SignupForm<'a> {
    pub fn new(client: &'a StorefrontClient) -> Self {
        Self {
            client,
            name: String::new(),
            email: String::new(),
            password: String::new(),
            error: None,
            success: false,
        }
    }

    // -- Field edits (each clears the error banner) ------------------------

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.error = None;
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
        self.error = None;
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
        self.error = None;
    }

    // -- Submission --------------------------------------------------------

    /// Submit the form with the current field contents.
    pub fn submit(&mut self) {
        self.error = None;
        let request = SignupRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        };
        let outcome = self.client.auth().signup(&request);
        self.apply_signup(outcome);
    }

    /// Apply a signup outcome: success clears all three fields and raises
    /// the success banner, failure writes the error banner and leaves the
    /// fields untouched.
    pub fn apply_signup(&mut self, outcome: ApiResult<Value>) {
        match outcome {
            Ok(_) => {
                self.name.clear();
                self.email.clear();
                self.password.clear();
                self.error = None;
                self.success = true;
            }
            Err(err) => {
                self.error = Some(err.error);
                self.success = false;
            }
        }
    }

    // -- Accessors ---------------------------------------------------------

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn success(&self) -> bool {
        self.success
    }

    /// Banner shown after a successful signup, linking to sign-in.
    pub fn success_banner(&self) -> Option<&'static str> {
        self.success
            .then_some("New account is created. Please Signin.")
    }

    pub fn chrome(&self) -> PageChrome {
        SIGNUP_CHROME
    }
}
