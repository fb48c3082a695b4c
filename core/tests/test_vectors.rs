//! Verify build/parse methods against JSON test vectors stored in `test-vectors/`.
//!
//! Each vector file describes inputs, expected requests, simulated responses,
//! and expected parse results. Comparing parsed JSON (not raw strings) avoids
//! false negatives from field-ordering differences. Failure cases may also
//! name the caller-side fallback (`[]`, `null`, `true`/`false`) the
//! operation's result collapses to.

use homebase_core::{
    ApiError, ClientConfig, HomebaseClient, HttpMethod, HttpRequest, HttpResponse,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

const BASE_URL: &str = "http://localhost:8000/api/v1";
const DEFAULT_SESSION: &str = "tok123";

fn client() -> HomebaseClient {
    HomebaseClient::new(&ClientConfig::new(BASE_URL))
}

/// Parse the method string from test vectors into `HttpMethod`.
fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        "PUT" => HttpMethod::Put,
        "PATCH" => HttpMethod::Patch,
        "DELETE" => HttpMethod::Delete,
        other => panic!("unknown method: {other}"),
    }
}

fn error_kind(err: &ApiError) -> &'static str {
    match err {
        ApiError::NotFound { .. } => "NotFound",
        ApiError::HttpError { .. } => "HttpError",
        ApiError::DeserializationError(_) => "DeserializationError",
        ApiError::SerializationError(_) => "SerializationError",
        ApiError::TransportError(_) => "TransportError",
    }
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

fn arg<'a>(args: &'a Value, key: &str) -> &'a str {
    args[key]
        .as_str()
        .unwrap_or_else(|| panic!("missing string arg {key}"))
}

fn input<T: DeserializeOwned>(args: &Value) -> T {
    serde_json::from_value(args["input"].clone()).unwrap()
}

fn build(c: &HomebaseClient, op: &str, args: &Value, session: &str) -> HttpRequest {
    match op {
        "list_inventory" => c.build_list_inventory(session),
        "get_inventory_item" => c.build_get_inventory_item(arg(args, "id"), session),
        "create_inventory_item" => c.build_create_inventory_item(&input(args), session).unwrap(),
        "update_inventory_item" => c
            .build_update_inventory_item(arg(args, "id"), &input(args), session)
            .unwrap(),
        "delete_inventory_item" => c.build_delete_inventory_item(arg(args, "id"), session).unwrap(),

        "list_notes" => c.build_list_notes(session),
        "get_note" => c.build_get_note(arg(args, "id"), session),
        "create_note" => c.build_create_note(&input(args), session).unwrap(),
        "update_note" => c.build_update_note(arg(args, "id"), &input(args), session).unwrap(),
        "delete_note" => c.build_delete_note(arg(args, "id"), session).unwrap(),
        "add_tags_to_note" => {
            let tag_ids: Vec<String> = serde_json::from_value(args["tag_ids"].clone()).unwrap();
            c.build_add_tags_to_note(arg(args, "id"), &tag_ids, session).unwrap()
        }
        "remove_tag_from_note" => c
            .build_remove_tag_from_note(arg(args, "id"), arg(args, "tag_id"), session)
            .unwrap(),
        "notes_by_tag" => c.build_notes_by_tag(arg(args, "tag_id"), session),

        "list_tags" => c.build_list_tags(session),
        "get_tag" => c.build_get_tag(arg(args, "id"), session),
        "create_tag" => c.build_create_tag(&input(args), session).unwrap(),
        "update_tag" => c.build_update_tag(arg(args, "id"), &input(args), session).unwrap(),
        "delete_tag" => c.build_delete_tag(arg(args, "id"), session).unwrap(),

        "list_reminders" => c.build_list_reminders(session),
        "get_reminder" => c.build_get_reminder(arg(args, "id"), session),
        "create_reminder" => c.build_create_reminder(&input(args), session).unwrap(),
        "update_reminder" => c
            .build_update_reminder(arg(args, "id"), &input(args), session)
            .unwrap(),
        "delete_reminder" => c.build_delete_reminder(arg(args, "id"), session).unwrap(),

        "get_user" => c.build_get_user(session),
        "update_user" => c.build_update_user(&input(args), session).unwrap(),
        "delete_user" => c.build_delete_user(session).unwrap(),
        "change_password" => c
            .build_change_password(arg(args, "token"), arg(args, "new_password"))
            .unwrap(),
        "request_password_change" => c.build_request_password_change(arg(args, "email")).unwrap(),
        "verify_account" => c.build_verify_account(arg(args, "token")),

        other => panic!("unknown op: {other}"),
    }
}

/// A parse result as JSON, plus the fallback the caller would collapse a
/// failure to, if the operation has one.
struct Outcome {
    result: Result<Value, ApiError>,
    fallback: Option<Value>,
}

fn json<T: Serialize>(value: T) -> Value {
    serde_json::to_value(value).unwrap()
}

fn list<T: Serialize>(result: Result<Vec<T>, ApiError>) -> Outcome {
    let fallback = json(result.as_deref().unwrap_or_default());
    Outcome {
        result: result.map(json),
        fallback: Some(fallback),
    }
}

fn single<T: Serialize>(result: Result<T, ApiError>) -> Outcome {
    let fallback = json(result.as_ref().ok());
    Outcome {
        result: result.map(json),
        fallback: Some(fallback),
    }
}

fn flag(result: Result<(), ApiError>) -> Outcome {
    Outcome {
        fallback: Some(Value::Bool(result.is_ok())),
        result: result.map(json),
    }
}

fn unit(result: Result<(), ApiError>) -> Outcome {
    Outcome {
        result: result.map(json),
        fallback: None,
    }
}

fn parse(c: &HomebaseClient, op: &str, response: HttpResponse) -> Outcome {
    match op {
        "list_inventory" => list(c.parse_list_inventory(response)),
        "get_inventory_item" => single(c.parse_get_inventory_item(response)),
        "create_inventory_item" => single(c.parse_create_inventory_item(response)),
        "update_inventory_item" => single(c.parse_update_inventory_item(response)),
        "delete_inventory_item" => unit(c.parse_delete_inventory_item(response)),

        "list_notes" => list(c.parse_list_notes(response)),
        "get_note" => single(c.parse_get_note(response)),
        "create_note" => single(c.parse_create_note(response)),
        "update_note" => single(c.parse_update_note(response)),
        "delete_note" => unit(c.parse_delete_note(response)),
        "add_tags_to_note" => unit(c.parse_add_tags_to_note(response)),
        "remove_tag_from_note" => unit(c.parse_remove_tag_from_note(response)),
        "notes_by_tag" => list(c.parse_notes_by_tag(response)),

        "list_tags" => list(c.parse_list_tags(response)),
        "get_tag" => single(c.parse_get_tag(response)),
        "create_tag" => single(c.parse_create_tag(response)),
        "update_tag" => single(c.parse_update_tag(response)),
        "delete_tag" => unit(c.parse_delete_tag(response)),

        "list_reminders" => list(c.parse_list_reminders(response)),
        "get_reminder" => single(c.parse_get_reminder(response)),
        "create_reminder" => single(c.parse_create_reminder(response)),
        "update_reminder" => single(c.parse_update_reminder(response)),
        "delete_reminder" => unit(c.parse_delete_reminder(response)),

        "get_user" => single(c.parse_get_user(response)),
        "update_user" => flag(c.parse_update_user(response)),
        "delete_user" => flag(c.parse_delete_user(response)),
        "change_password" => flag(c.parse_change_password(response)),
        "request_password_change" => flag(c.parse_request_password_change(response)),
        "verify_account" => flag(c.parse_verify_account(response)),

        other => panic!("unknown op: {other}"),
    }
}

// ---------------------------------------------------------------------------
// Runner
// ---------------------------------------------------------------------------

fn run_vectors(raw: &str) {
    let vectors: Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let op = case["op"].as_str().unwrap();
        let session = case["session_token"].as_str().unwrap_or(DEFAULT_SESSION);
        let expected_req = &case["expected_request"];

        // Verify build
        let req = build(&c, op, &case["args"], session);
        let expected_method = parse_method(expected_req["method"].as_str().unwrap());
        assert_eq!(req.method, expected_method, "{name}: method");
        let expected_path = format!("{BASE_URL}{}", expected_req["path"].as_str().unwrap());
        assert_eq!(req.path, expected_path, "{name}: path");

        let expected_headers: Vec<(String, String)> = expected_req["headers"]
            .as_array()
            .unwrap()
            .iter()
            .map(|h| {
                let arr = h.as_array().unwrap();
                (arr[0].as_str().unwrap().to_string(), arr[1].as_str().unwrap().to_string())
            })
            .collect();
        assert_eq!(req.headers, expected_headers, "{name}: headers");

        match &expected_req["body"] {
            Value::Null => assert!(req.body.is_none(), "{name}: body should be None"),
            expected_body => {
                let req_body: Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
                assert_eq!(&req_body, expected_body, "{name}: body");
            }
        }

        // Verify parse
        let sim = &case["simulated_response"];
        let response = HttpResponse::new(
            sim["status"].as_u64().unwrap() as u16,
            sim["body"].as_str().unwrap(),
        );
        let outcome = parse(&c, op, response);

        if let Some(expected_error) = case.get("expected_error") {
            let err = outcome.result.as_ref().unwrap_err();
            let expected_kind = expected_error["kind"].as_str().unwrap();
            assert_eq!(error_kind(err), expected_kind, "{name}: error kind");
            let needle = expected_error["contains"].as_str().unwrap();
            assert!(err.to_string().contains(needle), "{name}: {err} should contain {needle:?}");
        } else {
            let parsed = outcome.result.as_ref().unwrap();
            assert_eq!(parsed, &case["expected_result"], "{name}: parsed result");
        }

        if let Some(expected_fallback) = case.get("expected_fallback") {
            let fallback = outcome
                .fallback
                .as_ref()
                .unwrap_or_else(|| panic!("{name}: {op} has no fallback"));
            assert_eq!(fallback, expected_fallback, "{name}: fallback");
        }
    }
}

#[test]
fn inventory_test_vectors() {
    run_vectors(include_str!("../../test-vectors/inventory.json"));
}

#[test]
fn notes_test_vectors() {
    run_vectors(include_str!("../../test-vectors/notes.json"));
}

#[test]
fn tags_test_vectors() {
    run_vectors(include_str!("../../test-vectors/tags.json"));
}

#[test]
fn reminders_test_vectors() {
    run_vectors(include_str!("../../test-vectors/reminders.json"));
}

#[test]
fn users_test_vectors() {
    run_vectors(include_str!("../../test-vectors/users.json"));
}
