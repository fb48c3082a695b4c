use serde::Serialize;

use crate::client::{path_segment, HomebaseClient, Operation, Resource};
use crate::envelope::Unwrap;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{InventoryInput, InventoryItem};

const LIST: Operation = Operation::new(Resource::Inventory, "list");
const GET: Operation = Operation::new(Resource::Inventory, "get");
const CREATE: Operation = Operation::new(Resource::Inventory, "create");
const UPDATE: Operation = Operation::new(Resource::Inventory, "update");
const DELETE: Operation = Operation::new(Resource::Inventory, "delete");

const ENVELOPE: &str = "inventory";

#[derive(Serialize)]
struct UpdateBody<'a> {
    inventory_id: &'a str,
    #[serde(flatten)]
    fields: &'a InventoryInput,
}

#[derive(Serialize)]
struct DeleteBody<'a> {
    inventory_uuid: &'a str,
}

impl HomebaseClient {
    pub fn build_list_inventory(&self, session_token: &str) -> HttpRequest {
        self.request(LIST, HttpMethod::Get, "/", Some(session_token))
    }

    pub fn parse_list_inventory(
        &self,
        response: HttpResponse,
    ) -> Result<Vec<InventoryItem>, ApiError> {
        self.parse(LIST, response, Unwrap::Field(ENVELOPE))
    }

    pub fn build_get_inventory_item(&self, inventory_id: &str, session_token: &str) -> HttpRequest {
        let path = format!("/{}", path_segment(inventory_id));
        self.request(GET, HttpMethod::Get, &path, Some(session_token))
    }

    pub fn parse_get_inventory_item(
        &self,
        response: HttpResponse,
    ) -> Result<InventoryItem, ApiError> {
        self.parse(GET, response, Unwrap::Field(ENVELOPE))
    }

    pub fn build_create_inventory_item(
        &self,
        input: &InventoryInput,
        session_token: &str,
    ) -> Result<HttpRequest, ApiError> {
        self.request_with_body(CREATE, HttpMethod::Post, "/", Some(session_token), input)
    }

    pub fn parse_create_inventory_item(
        &self,
        response: HttpResponse,
    ) -> Result<InventoryItem, ApiError> {
        self.parse(CREATE, response, Unwrap::Field(ENVELOPE))
    }

    pub fn build_update_inventory_item(
        &self,
        inventory_id: &str,
        input: &InventoryInput,
        session_token: &str,
    ) -> Result<HttpRequest, ApiError> {
        let body = UpdateBody {
            inventory_id,
            fields: input,
        };
        self.request_with_body(UPDATE, HttpMethod::Put, "/", Some(session_token), &body)
    }

    pub fn parse_update_inventory_item(
        &self,
        response: HttpResponse,
    ) -> Result<InventoryItem, ApiError> {
        self.parse(UPDATE, response, Unwrap::Field(ENVELOPE))
    }

    pub fn build_delete_inventory_item(
        &self,
        inventory_id: &str,
        session_token: &str,
    ) -> Result<HttpRequest, ApiError> {
        let body = DeleteBody {
            inventory_uuid: inventory_id,
        };
        self.request_with_body(DELETE, HttpMethod::Delete, "/", Some(session_token), &body)
    }

    pub fn parse_delete_inventory_item(&self, response: HttpResponse) -> Result<(), ApiError> {
        self.parse_empty(DELETE, response)
    }
}
