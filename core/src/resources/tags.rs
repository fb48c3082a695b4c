use serde::Serialize;

use crate::client::{path_segment, HomebaseClient, Operation, Resource};
use crate::envelope::Unwrap;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Tag, TagInput};

const LIST: Operation = Operation::new(Resource::Tag, "list");
const GET: Operation = Operation::new(Resource::Tag, "get");
const CREATE: Operation = Operation::new(Resource::Tag, "create");
const UPDATE: Operation = Operation::new(Resource::Tag, "update");
const DELETE: Operation = Operation::new(Resource::Tag, "delete");

const LIST_ENVELOPE: &str = "tags";
const ITEM_ENVELOPE: &str = "tag";

#[derive(Serialize)]
struct UpdateBody<'a> {
    tag_uuid: &'a str,
    #[serde(flatten)]
    fields: &'a TagInput,
}

#[derive(Serialize)]
struct DeleteBody<'a> {
    tag_uuid: &'a str,
}

impl HomebaseClient {
    pub fn build_list_tags(&self, session_token: &str) -> HttpRequest {
        self.request(LIST, HttpMethod::Get, "/", Some(session_token))
    }

    pub fn parse_list_tags(&self, response: HttpResponse) -> Result<Vec<Tag>, ApiError> {
        self.parse(LIST, response, Unwrap::Field(LIST_ENVELOPE))
    }

    pub fn build_get_tag(&self, tag_id: &str, session_token: &str) -> HttpRequest {
        let path = format!("/{}", path_segment(tag_id));
        self.request(GET, HttpMethod::Get, &path, Some(session_token))
    }

    pub fn parse_get_tag(&self, response: HttpResponse) -> Result<Tag, ApiError> {
        self.parse(GET, response, Unwrap::Field(ITEM_ENVELOPE))
    }

    pub fn build_create_tag(
        &self,
        input: &TagInput,
        session_token: &str,
    ) -> Result<HttpRequest, ApiError> {
        self.request_with_body(CREATE, HttpMethod::Post, "/", Some(session_token), input)
    }

    pub fn parse_create_tag(&self, response: HttpResponse) -> Result<Tag, ApiError> {
        self.parse(CREATE, response, Unwrap::Field(ITEM_ENVELOPE))
    }

    /// Rename a tag.
    pub fn build_update_tag(
        &self,
        tag_id: &str,
        input: &TagInput,
        session_token: &str,
    ) -> Result<HttpRequest, ApiError> {
        let body = UpdateBody {
            tag_uuid: tag_id,
            fields: input,
        };
        self.request_with_body(UPDATE, HttpMethod::Put, "/", Some(session_token), &body)
    }

    pub fn parse_update_tag(&self, response: HttpResponse) -> Result<Tag, ApiError> {
        self.parse(UPDATE, response, Unwrap::Field(ITEM_ENVELOPE))
    }

    pub fn build_delete_tag(
        &self,
        tag_id: &str,
        session_token: &str,
    ) -> Result<HttpRequest, ApiError> {
        let body = DeleteBody { tag_uuid: tag_id };
        self.request_with_body(DELETE, HttpMethod::Delete, "/", Some(session_token), &body)
    }

    pub fn parse_delete_tag(&self, response: HttpResponse) -> Result<(), ApiError> {
        self.parse_empty(DELETE, response)
    }
}
