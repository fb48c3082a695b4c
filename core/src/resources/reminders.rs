use serde::Serialize;

use crate::client::{path_segment, HomebaseClient, Operation, Resource};
use crate::envelope::Unwrap;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Reminder, ReminderInput};

const LIST: Operation = Operation::new(Resource::Reminder, "list");
const GET: Operation = Operation::new(Resource::Reminder, "get");
const CREATE: Operation = Operation::new(Resource::Reminder, "create");
const UPDATE: Operation = Operation::new(Resource::Reminder, "update");
const DELETE: Operation = Operation::new(Resource::Reminder, "delete");

const LIST_ENVELOPE: &str = "reminders";
const ITEM_ENVELOPE: &str = "reminder";

#[derive(Serialize)]
struct UpdateBody<'a> {
    reminder_uuid: &'a str,
    #[serde(flatten)]
    fields: &'a ReminderInput,
}

#[derive(Serialize)]
struct DeleteBody<'a> {
    reminder_uuid: &'a str,
}

impl HomebaseClient {
    pub fn build_list_reminders(&self, session_token: &str) -> HttpRequest {
        self.request(LIST, HttpMethod::Get, "/", Some(session_token))
    }

    pub fn parse_list_reminders(&self, response: HttpResponse) -> Result<Vec<Reminder>, ApiError> {
        self.parse(LIST, response, Unwrap::Field(LIST_ENVELOPE))
    }

    pub fn build_get_reminder(&self, reminder_id: &str, session_token: &str) -> HttpRequest {
        let path = format!("/{}", path_segment(reminder_id));
        self.request(GET, HttpMethod::Get, &path, Some(session_token))
    }

    pub fn parse_get_reminder(&self, response: HttpResponse) -> Result<Reminder, ApiError> {
        self.parse(GET, response, Unwrap::Field(ITEM_ENVELOPE))
    }

    pub fn build_create_reminder(
        &self,
        input: &ReminderInput,
        session_token: &str,
    ) -> Result<HttpRequest, ApiError> {
        self.request_with_body(CREATE, HttpMethod::Post, "/", Some(session_token), input)
    }

    pub fn parse_create_reminder(&self, response: HttpResponse) -> Result<Reminder, ApiError> {
        self.parse(CREATE, response, Unwrap::Field(ITEM_ENVELOPE))
    }

    pub fn build_update_reminder(
        &self,
        reminder_id: &str,
        input: &ReminderInput,
        session_token: &str,
    ) -> Result<HttpRequest, ApiError> {
        let body = UpdateBody {
            reminder_uuid: reminder_id,
            fields: input,
        };
        self.request_with_body(UPDATE, HttpMethod::Put, "/", Some(session_token), &body)
    }

    pub fn parse_update_reminder(&self, response: HttpResponse) -> Result<Reminder, ApiError> {
        self.parse(UPDATE, response, Unwrap::Field(ITEM_ENVELOPE))
    }

    pub fn build_delete_reminder(
        &self,
        reminder_id: &str,
        session_token: &str,
    ) -> Result<HttpRequest, ApiError> {
        let body = DeleteBody {
            reminder_uuid: reminder_id,
        };
        self.request_with_body(DELETE, HttpMethod::Delete, "/", Some(session_token), &body)
    }

    pub fn parse_delete_reminder(&self, response: HttpResponse) -> Result<(), ApiError> {
        self.parse_empty(DELETE, response)
    }
}
