//! Note operations, including the tag relationship endpoints that live under
//! the note base path.

use serde::Serialize;

use crate::client::{path_segment, HomebaseClient, Operation, Resource};
use crate::envelope::Unwrap;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Note, NoteInput};

const LIST: Operation = Operation::new(Resource::Note, "list");
const GET: Operation = Operation::new(Resource::Note, "get");
const CREATE: Operation = Operation::new(Resource::Note, "create");
const UPDATE: Operation = Operation::new(Resource::Note, "update");
const DELETE: Operation = Operation::new(Resource::Note, "delete");
const ADD_TAGS: Operation = Operation::new(Resource::Note, "add_tags");
const REMOVE_TAG: Operation = Operation::new(Resource::Note, "remove_tag");
const FILTER_BY_TAG: Operation = Operation::new(Resource::Note, "filter_by_tag");

const LIST_ENVELOPE: &str = "notes";
const ITEM_ENVELOPE: &str = "note";

#[derive(Serialize)]
struct UpdateBody<'a> {
    note_uuid: &'a str,
    #[serde(flatten)]
    fields: &'a NoteInput,
}

#[derive(Serialize)]
struct DeleteBody<'a> {
    note_uuid: &'a str,
}

#[derive(Serialize)]
struct AddTagsBody<'a> {
    note_uuid: &'a str,
    tags: Vec<&'a str>,
}

#[derive(Serialize)]
struct RemoveTagBody<'a> {
    note_uuid: &'a str,
    tag_uuid: &'a str,
}

impl HomebaseClient {
    pub fn build_list_notes(&self, session_token: &str) -> HttpRequest {
        self.request(LIST, HttpMethod::Get, "/", Some(session_token))
    }

    pub fn parse_list_notes(&self, response: HttpResponse) -> Result<Vec<Note>, ApiError> {
        self.parse(LIST, response, Unwrap::Field(LIST_ENVELOPE))
    }

    pub fn build_get_note(&self, note_id: &str, session_token: &str) -> HttpRequest {
        let path = format!("/{}", path_segment(note_id));
        self.request(GET, HttpMethod::Get, &path, Some(session_token))
    }

    pub fn parse_get_note(&self, response: HttpResponse) -> Result<Note, ApiError> {
        self.parse(GET, response, Unwrap::Field(ITEM_ENVELOPE))
    }

    pub fn build_create_note(
        &self,
        input: &NoteInput,
        session_token: &str,
    ) -> Result<HttpRequest, ApiError> {
        self.request_with_body(CREATE, HttpMethod::Post, "/", Some(session_token), input)
    }

    pub fn parse_create_note(&self, response: HttpResponse) -> Result<Note, ApiError> {
        self.parse(CREATE, response, Unwrap::Field(ITEM_ENVELOPE))
    }

    pub fn build_update_note(
        &self,
        note_id: &str,
        input: &NoteInput,
        session_token: &str,
    ) -> Result<HttpRequest, ApiError> {
        let body = UpdateBody {
            note_uuid: note_id,
            fields: input,
        };
        self.request_with_body(UPDATE, HttpMethod::Put, "/", Some(session_token), &body)
    }

    pub fn parse_update_note(&self, response: HttpResponse) -> Result<Note, ApiError> {
        self.parse(UPDATE, response, Unwrap::Field(ITEM_ENVELOPE))
    }

    pub fn build_delete_note(
        &self,
        note_id: &str,
        session_token: &str,
    ) -> Result<HttpRequest, ApiError> {
        let body = DeleteBody { note_uuid: note_id };
        self.request_with_body(DELETE, HttpMethod::Delete, "/", Some(session_token), &body)
    }

    pub fn parse_delete_note(&self, response: HttpResponse) -> Result<(), ApiError> {
        self.parse_empty(DELETE, response)
    }

    /// Link one or more existing tags to a note.
    pub fn build_add_tags_to_note<T: AsRef<str>>(
        &self,
        note_id: &str,
        tag_ids: &[T],
        session_token: &str,
    ) -> Result<HttpRequest, ApiError> {
        let body = AddTagsBody {
            note_uuid: note_id,
            tags: tag_ids.iter().map(|id| id.as_ref()).collect(),
        };
        self.request_with_body(ADD_TAGS, HttpMethod::Post, "/add-tags", Some(session_token), &body)
    }

    pub fn parse_add_tags_to_note(&self, response: HttpResponse) -> Result<(), ApiError> {
        self.parse_empty(ADD_TAGS, response)
    }

    pub fn build_remove_tag_from_note(
        &self,
        note_id: &str,
        tag_id: &str,
        session_token: &str,
    ) -> Result<HttpRequest, ApiError> {
        let body = RemoveTagBody {
            note_uuid: note_id,
            tag_uuid: tag_id,
        };
        self.request_with_body(
            REMOVE_TAG,
            HttpMethod::Delete,
            "/remove-tag",
            Some(session_token),
            &body,
        )
    }

    pub fn parse_remove_tag_from_note(&self, response: HttpResponse) -> Result<(), ApiError> {
        self.parse_empty(REMOVE_TAG, response)
    }

    /// Notes linked to `tag_id`.
    pub fn build_notes_by_tag(&self, tag_id: &str, session_token: &str) -> HttpRequest {
        self.request(
            FILTER_BY_TAG,
            HttpMethod::Get,
            &format!("/filter-by-tag/{}", path_segment(tag_id)),
            Some(session_token),
        )
    }

    /// Elements may arrive individually wrapped as `{"note": {...}}`; both
    /// shapes decode to plain notes.
    pub fn parse_notes_by_tag(&self, response: HttpResponse) -> Result<Vec<Note>, ApiError> {
        let unwrap = Unwrap::Each {
            list: LIST_ENVELOPE,
            item: ITEM_ENVELOPE,
        };
        self.parse(FILTER_BY_TAG, response, unwrap)
    }
}
