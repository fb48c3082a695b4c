//! Account operations for the session's user.
//!
//! Password recovery and account verification authenticate with a one-time
//! token embedded in the path, so those requests carry no `session-token`.

use serde::Serialize;

use crate::client::{path_segment, HomebaseClient, Operation, Resource};
use crate::envelope::Unwrap;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{User, UserProfile};

const GET: Operation = Operation::new(Resource::User, "get");
const UPDATE: Operation = Operation::new(Resource::User, "update");
const DELETE: Operation = Operation::new(Resource::User, "delete");
const CHANGE_PASSWORD: Operation = Operation::new(Resource::User, "change_password");
const REQUEST_PASSWORD_CHANGE: Operation =
    Operation::new(Resource::User, "request_password_change");
const VERIFY_ACCOUNT: Operation = Operation::new(Resource::User, "verify_account");

const ENVELOPE: &str = "user";

#[derive(Serialize)]
struct EmptyBody {}

#[derive(Serialize)]
struct PasswordBody<'a> {
    new_password: &'a str,
}

#[derive(Serialize)]
struct EmailBody<'a> {
    email: &'a str,
}

impl HomebaseClient {
    pub fn build_get_user(&self, session_token: &str) -> HttpRequest {
        self.request(GET, HttpMethod::Get, "/", Some(session_token))
    }

    pub fn parse_get_user(&self, response: HttpResponse) -> Result<User, ApiError> {
        self.parse(GET, response, Unwrap::Field(ENVELOPE))
    }

    pub fn build_update_user(
        &self,
        profile: &UserProfile,
        session_token: &str,
    ) -> Result<HttpRequest, ApiError> {
        self.request_with_body(UPDATE, HttpMethod::Put, "/", Some(session_token), profile)
    }

    pub fn parse_update_user(&self, response: HttpResponse) -> Result<(), ApiError> {
        self.parse_empty(UPDATE, response)
    }

    /// Delete the session's account. The backend expects an empty JSON object
    /// as the body.
    pub fn build_delete_user(&self, session_token: &str) -> Result<HttpRequest, ApiError> {
        self.request_with_body(DELETE, HttpMethod::Delete, "/", Some(session_token), &EmptyBody {})
    }

    pub fn parse_delete_user(&self, response: HttpResponse) -> Result<(), ApiError> {
        self.parse_empty(DELETE, response)
    }

    /// Set a new password using the token from a password-reset email.
    pub fn build_change_password(
        &self,
        reset_token: &str,
        new_password: &str,
    ) -> Result<HttpRequest, ApiError> {
        self.request_with_body(
            CHANGE_PASSWORD,
            HttpMethod::Patch,
            &format!("/change-password/{}", path_segment(reset_token)),
            None,
            &PasswordBody { new_password },
        )
    }

    pub fn parse_change_password(&self, response: HttpResponse) -> Result<(), ApiError> {
        self.parse_empty(CHANGE_PASSWORD, response)
    }

    /// Ask the backend to email a password-reset token to `email`.
    pub fn build_request_password_change(&self, email: &str) -> Result<HttpRequest, ApiError> {
        self.request_with_body(
            REQUEST_PASSWORD_CHANGE,
            HttpMethod::Post,
            "/request-change-password/",
            None,
            &EmailBody { email },
        )
    }

    pub fn parse_request_password_change(&self, response: HttpResponse) -> Result<(), ApiError> {
        self.parse_empty(REQUEST_PASSWORD_CHANGE, response)
    }

    pub fn build_verify_account(&self, verification_token: &str) -> HttpRequest {
        self.request(
            VERIFY_ACCOUNT,
            HttpMethod::Patch,
            &format!("/{}", path_segment(verification_token)),
            None,
        )
    }

    pub fn parse_verify_account(&self, response: HttpResponse) -> Result<(), ApiError> {
        self.parse_empty(VERIFY_ACCOUNT, response)
    }
}
