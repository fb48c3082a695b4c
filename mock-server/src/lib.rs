//! In-memory implementation of the Homebase REST backend.
//!
//! Serves the same wire contract the client targets: per-session inventory,
//! notes, tags and reminders, plus the user account endpoints. Every
//! session-scoped route requires a `session-token` header; unknown tokens are
//! provisioned as fresh users on first use.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{FromRequestParts, Path, State},
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    routing::{delete, get, patch, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

pub const SESSION_HEADER: &str = "session-token";

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct InventoryItem {
    pub inventory_uuid: Uuid,
    pub user_uuid: Uuid,
    pub product_name: String,
    pub amount: f64,
    pub expiration_date: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Note {
    pub note_uuid: Uuid,
    pub user_uuid: Uuid,
    pub title: String,
    pub content: String,
    pub tags: Vec<Uuid>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tag {
    pub tag_uuid: Uuid,
    pub user_uuid: Uuid,
    pub name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Reminder {
    pub reminder_uuid: Uuid,
    pub user_uuid: Uuid,
    pub title: String,
    pub remind_date: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub user_uuid: Uuid,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub birth_date: Option<String>,
    pub phone: Option<String>,
    pub verified: bool,
}

#[derive(Deserialize)]
pub struct CreateInventoryItem {
    pub product_name: String,
    pub amount: f64,
    pub expiration_date: String,
}

#[derive(Deserialize)]
pub struct UpdateInventoryItem {
    pub inventory_id: Uuid,
    pub product_name: String,
    pub amount: f64,
    pub expiration_date: String,
}

#[derive(Deserialize)]
pub struct DeleteInventoryItem {
    pub inventory_uuid: Uuid,
}

#[derive(Deserialize)]
pub struct CreateNote {
    pub title: String,
    pub content: String,
}

#[derive(Deserialize)]
pub struct UpdateNote {
    pub note_uuid: Uuid,
    pub title: String,
    pub content: String,
}

#[derive(Deserialize)]
pub struct DeleteNote {
    pub note_uuid: Uuid,
}

#[derive(Deserialize)]
pub struct AddTags {
    pub note_uuid: Uuid,
    pub tags: Vec<Uuid>,
}

#[derive(Deserialize)]
pub struct RemoveTag {
    pub note_uuid: Uuid,
    pub tag_uuid: Uuid,
}

#[derive(Deserialize)]
pub struct CreateTag {
    pub name: String,
}

#[derive(Deserialize)]
pub struct UpdateTag {
    pub tag_uuid: Uuid,
    pub name: String,
}

#[derive(Deserialize)]
pub struct DeleteTag {
    pub tag_uuid: Uuid,
}

#[derive(Deserialize)]
pub struct CreateReminder {
    pub title: String,
    pub remind_date: String,
}

#[derive(Deserialize)]
pub struct UpdateReminder {
    pub reminder_uuid: Uuid,
    pub title: String,
    pub remind_date: String,
}

#[derive(Deserialize)]
pub struct DeleteReminder {
    pub reminder_uuid: Uuid,
}

#[derive(Deserialize)]
pub struct UpdateUser {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: String,
    pub phone: String,
}

#[derive(Deserialize)]
pub struct ChangePassword {
    pub new_password: String,
}

#[derive(Deserialize)]
pub struct RequestPasswordChange {
    pub email: String,
}

/// Entities that belong to a single user.
trait Owned {
    fn owner(&self) -> Uuid;
}

impl Owned for InventoryItem {
    fn owner(&self) -> Uuid {
        self.user_uuid
    }
}

impl Owned for Note {
    fn owner(&self) -> Uuid {
        self.user_uuid
    }
}

impl Owned for Tag {
    fn owner(&self) -> Uuid {
        self.user_uuid
    }
}

impl Owned for Reminder {
    fn owner(&self) -> Uuid {
        self.user_uuid
    }
}

fn owned_by<T: Owned + Clone>(map: &HashMap<Uuid, T>, user: Uuid) -> Vec<T> {
    map.values().filter(|e| e.owner() == user).cloned().collect()
}

fn find_owned<'a, T: Owned>(
    map: &'a mut HashMap<Uuid, T>,
    id: Uuid,
    user: Uuid,
    kind: &str,
) -> Result<&'a mut T, ApiFailure> {
    map.get_mut(&id)
        .filter(|e| e.owner() == user)
        .ok_or_else(|| ApiFailure::NotFound(format!("{kind} {id} not found")))
}

fn remove_owned<T: Owned>(
    map: &mut HashMap<Uuid, T>,
    id: Uuid,
    user: Uuid,
    kind: &str,
) -> Result<T, ApiFailure> {
    find_owned(map, id, user, kind)?;
    map.remove(&id)
        .ok_or_else(|| ApiFailure::NotFound(format!("{kind} {id} not found")))
}

#[derive(Debug, Default)]
pub struct Store {
    sessions: HashMap<String, Uuid>,
    users: HashMap<Uuid, User>,
    inventory: HashMap<Uuid, InventoryItem>,
    notes: HashMap<Uuid, Note>,
    tags: HashMap<Uuid, Tag>,
    reminders: HashMap<Uuid, Reminder>,
    passwords: HashMap<Uuid, String>,
    reset_tokens: HashMap<String, Uuid>,
    verification_tokens: HashMap<String, Uuid>,
}

impl Store {
    /// Resolve a session to its user, provisioning a fresh one if needed.
    fn user_for(&mut self, session_token: &str) -> Uuid {
        if let Some(user) = self.sessions.get(session_token) {
            return *user;
        }
        let user = User {
            user_uuid: Uuid::new_v4(),
            ..User::default()
        };
        let id = user.user_uuid;
        self.users.insert(id, user);
        self.sessions.insert(session_token.to_string(), id);
        id
    }

    /// Issue an account verification token for the session's user.
    pub fn issue_verification_token(&mut self, session_token: &str) -> String {
        let user = self.user_for(session_token);
        let token = Uuid::new_v4().to_string();
        self.verification_tokens.insert(token.clone(), user);
        token
    }

    /// The outstanding password-reset token for `email`, as it would have
    /// been emailed.
    pub fn reset_token_for(&self, email: &str) -> Option<String> {
        self.reset_tokens
            .iter()
            .find(|(_, user)| {
                self.users
                    .get(user)
                    .and_then(|u| u.email.as_deref())
                    .is_some_and(|e| e == email)
            })
            .map(|(token, _)| token.clone())
    }

    pub fn is_verified(&self, session_token: &str) -> bool {
        self.sessions
            .get(session_token)
            .and_then(|id| self.users.get(id))
            .is_some_and(|u| u.verified)
    }

    pub fn password_of(&self, session_token: &str) -> Option<&str> {
        self.sessions
            .get(session_token)
            .and_then(|id| self.passwords.get(id))
            .map(String::as_str)
    }
}

pub type Db = Arc<RwLock<Store>>;

/// Failures rendered as plain-text bodies.
#[derive(Debug)]
pub enum ApiFailure {
    Unauthorized,
    NotFound(String),
}

impl IntoResponse for ApiFailure {
    fn into_response(self) -> Response {
        match self {
            ApiFailure::Unauthorized => {
                (StatusCode::UNAUTHORIZED, "missing session-token header").into_response()
            }
            ApiFailure::NotFound(message) => (StatusCode::NOT_FOUND, message).into_response(),
        }
    }
}

/// The caller's `session-token` header.
pub struct Session(pub String);

impl<S: Send + Sync> FromRequestParts<S> for Session {
    type Rejection = ApiFailure;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(SESSION_HEADER)
            .and_then(|value| value.to_str().ok())
            .filter(|value| !value.is_empty())
            .map(|value| Session(value.to_string()))
            .ok_or(ApiFailure::Unauthorized)
    }
}

pub fn app() -> Router {
    app_with(Db::default())
}

pub fn app_with(db: Db) -> Router {
    Router::new()
        .route(
            "/inventory/",
            get(list_inventory)
                .post(create_inventory_item)
                .put(update_inventory_item)
                .delete(delete_inventory_item),
        )
        .route("/inventory/{id}", get(get_inventory_item))
        .route(
            "/note/",
            get(list_notes).post(create_note).put(update_note).delete(delete_note),
        )
        .route("/note/add-tags", post(add_tags))
        .route("/note/remove-tag", delete(remove_tag))
        .route("/note/filter-by-tag/{tag_id}", get(notes_by_tag))
        .route("/note/{id}", get(get_note))
        .route(
            "/tag/",
            get(list_tags).post(create_tag).put(update_tag).delete(delete_tag),
        )
        .route("/tag/{id}", get(get_tag))
        .route(
            "/reminder/",
            get(list_reminders)
                .post(create_reminder)
                .put(update_reminder)
                .delete(delete_reminder),
        )
        .route("/reminder/{id}", get(get_reminder))
        .route("/users/", get(get_user).put(update_user).delete(delete_user))
        .route("/users/request-change-password/", post(request_password_change))
        .route("/users/change-password/{token}", patch(change_password))
        .route("/users/{token}", patch(verify_account))
        .with_state(db)
        .layer(TraceLayer::new_for_http())
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    run_with(listener, Db::default()).await
}

pub async fn run_with(listener: TcpListener, db: Db) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(db)).await
}

fn deleted(kind: &str, id: Uuid) -> Json<Value> {
    Json(json!({ "message": format!("{kind} {id} deleted") }))
}

// --- inventory ---

async fn list_inventory(State(db): State<Db>, Session(token): Session) -> Json<Value> {
    let mut store = db.write().await;
    let user = store.user_for(&token);
    Json(json!({ "inventory": owned_by(&store.inventory, user) }))
}

async fn get_inventory_item(
    State(db): State<Db>,
    Session(token): Session,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, ApiFailure> {
    let mut store = db.write().await;
    let user = store.user_for(&token);
    let item = find_owned(&mut store.inventory, id, user, "inventory item")?;
    Ok(Json(json!({ "inventory": item })))
}

async fn create_inventory_item(
    State(db): State<Db>,
    Session(token): Session,
    Json(input): Json<CreateInventoryItem>,
) -> (StatusCode, Json<InventoryItem>) {
    let mut store = db.write().await;
    let item = InventoryItem {
        inventory_uuid: Uuid::new_v4(),
        user_uuid: store.user_for(&token),
        product_name: input.product_name,
        amount: input.amount,
        expiration_date: input.expiration_date,
    };
    store.inventory.insert(item.inventory_uuid, item.clone());
    (StatusCode::CREATED, Json(item))
}

async fn update_inventory_item(
    State(db): State<Db>,
    Session(token): Session,
    Json(input): Json<UpdateInventoryItem>,
) -> Result<Json<Value>, ApiFailure> {
    let mut store = db.write().await;
    let user = store.user_for(&token);
    let item = find_owned(&mut store.inventory, input.inventory_id, user, "inventory item")?;
    item.product_name = input.product_name;
    item.amount = input.amount;
    item.expiration_date = input.expiration_date;
    Ok(Json(json!({ "inventory": item })))
}

async fn delete_inventory_item(
    State(db): State<Db>,
    Session(token): Session,
    Json(input): Json<DeleteInventoryItem>,
) -> Result<Json<Value>, ApiFailure> {
    let mut store = db.write().await;
    let user = store.user_for(&token);
    remove_owned(&mut store.inventory, input.inventory_uuid, user, "inventory item")?;
    Ok(deleted("inventory item", input.inventory_uuid))
}

// --- notes ---

async fn list_notes(State(db): State<Db>, Session(token): Session) -> Json<Value> {
    let mut store = db.write().await;
    let user = store.user_for(&token);
    Json(json!({ "notes": owned_by(&store.notes, user) }))
}

async fn get_note(
    State(db): State<Db>,
    Session(token): Session,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, ApiFailure> {
    let mut store = db.write().await;
    let user = store.user_for(&token);
    let note = find_owned(&mut store.notes, id, user, "note")?;
    Ok(Json(json!({ "note": note })))
}

async fn create_note(
    State(db): State<Db>,
    Session(token): Session,
    Json(input): Json<CreateNote>,
) -> (StatusCode, Json<Note>) {
    let mut store = db.write().await;
    let note = Note {
        note_uuid: Uuid::new_v4(),
        user_uuid: store.user_for(&token),
        title: input.title,
        content: input.content,
        tags: Vec::new(),
    };
    store.notes.insert(note.note_uuid, note.clone());
    (StatusCode::CREATED, Json(note))
}

async fn update_note(
    State(db): State<Db>,
    Session(token): Session,
    Json(input): Json<UpdateNote>,
) -> Result<Json<Value>, ApiFailure> {
    let mut store = db.write().await;
    let user = store.user_for(&token);
    let note = find_owned(&mut store.notes, input.note_uuid, user, "note")?;
    note.title = input.title;
    note.content = input.content;
    Ok(Json(json!({ "note": note })))
}

async fn delete_note(
    State(db): State<Db>,
    Session(token): Session,
    Json(input): Json<DeleteNote>,
) -> Result<Json<Value>, ApiFailure> {
    let mut store = db.write().await;
    let user = store.user_for(&token);
    remove_owned(&mut store.notes, input.note_uuid, user, "note")?;
    Ok(deleted("note", input.note_uuid))
}

async fn add_tags(
    State(db): State<Db>,
    Session(token): Session,
    Json(input): Json<AddTags>,
) -> Result<Json<Value>, ApiFailure> {
    let mut store = db.write().await;
    let user = store.user_for(&token);
    for tag in &input.tags {
        find_owned(&mut store.tags, *tag, user, "tag")?;
    }
    let note = find_owned(&mut store.notes, input.note_uuid, user, "note")?;
    for tag in input.tags {
        if !note.tags.contains(&tag) {
            note.tags.push(tag);
        }
    }
    Ok(Json(json!({ "note": note })))
}

async fn remove_tag(
    State(db): State<Db>,
    Session(token): Session,
    Json(input): Json<RemoveTag>,
) -> Result<Json<Value>, ApiFailure> {
    let mut store = db.write().await;
    let user = store.user_for(&token);
    let note = find_owned(&mut store.notes, input.note_uuid, user, "note")?;
    let position = note
        .tags
        .iter()
        .position(|tag| *tag == input.tag_uuid)
        .ok_or_else(|| {
            ApiFailure::NotFound(format!(
                "tag {} is not linked to note {}",
                input.tag_uuid, input.note_uuid
            ))
        })?;
    note.tags.remove(position);
    Ok(Json(json!({ "note": note })))
}

async fn notes_by_tag(
    State(db): State<Db>,
    Session(token): Session,
    Path(tag_id): Path<Uuid>,
) -> Result<Json<Value>, ApiFailure> {
    let mut store = db.write().await;
    let user = store.user_for(&token);
    find_owned(&mut store.tags, tag_id, user, "tag")?;
    let wrapped: Vec<Value> = owned_by(&store.notes, user)
        .into_iter()
        .filter(|note| note.tags.contains(&tag_id))
        .map(|note| json!({ "note": note }))
        .collect();
    Ok(Json(Value::Array(wrapped)))
}

// --- tags ---

async fn list_tags(State(db): State<Db>, Session(token): Session) -> Json<Value> {
    let mut store = db.write().await;
    let user = store.user_for(&token);
    Json(json!({ "tags": owned_by(&store.tags, user) }))
}

async fn get_tag(
    State(db): State<Db>,
    Session(token): Session,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, ApiFailure> {
    let mut store = db.write().await;
    let user = store.user_for(&token);
    let tag = find_owned(&mut store.tags, id, user, "tag")?;
    Ok(Json(json!({ "tag": tag })))
}

async fn create_tag(
    State(db): State<Db>,
    Session(token): Session,
    Json(input): Json<CreateTag>,
) -> (StatusCode, Json<Tag>) {
    let mut store = db.write().await;
    let tag = Tag {
        tag_uuid: Uuid::new_v4(),
        user_uuid: store.user_for(&token),
        name: input.name,
    };
    store.tags.insert(tag.tag_uuid, tag.clone());
    (StatusCode::CREATED, Json(tag))
}

async fn update_tag(
    State(db): State<Db>,
    Session(token): Session,
    Json(input): Json<UpdateTag>,
) -> Result<Json<Value>, ApiFailure> {
    let mut store = db.write().await;
    let user = store.user_for(&token);
    let tag = find_owned(&mut store.tags, input.tag_uuid, user, "tag")?;
    tag.name = input.name;
    Ok(Json(json!({ "tag": tag })))
}

/// Deleting a tag also unlinks it from every note.
async fn delete_tag(
    State(db): State<Db>,
    Session(token): Session,
    Json(input): Json<DeleteTag>,
) -> Result<Json<Value>, ApiFailure> {
    let mut store = db.write().await;
    let user = store.user_for(&token);
    remove_owned(&mut store.tags, input.tag_uuid, user, "tag")?;
    for note in store.notes.values_mut() {
        note.tags.retain(|tag| *tag != input.tag_uuid);
    }
    Ok(deleted("tag", input.tag_uuid))
}

// --- reminders ---

async fn list_reminders(State(db): State<Db>, Session(token): Session) -> Json<Value> {
    let mut store = db.write().await;
    let user = store.user_for(&token);
    Json(json!({ "reminders": owned_by(&store.reminders, user) }))
}

async fn get_reminder(
    State(db): State<Db>,
    Session(token): Session,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, ApiFailure> {
    let mut store = db.write().await;
    let user = store.user_for(&token);
    let reminder = find_owned(&mut store.reminders, id, user, "reminder")?;
    Ok(Json(json!({ "reminder": reminder })))
}

async fn create_reminder(
    State(db): State<Db>,
    Session(token): Session,
    Json(input): Json<CreateReminder>,
) -> (StatusCode, Json<Value>) {
    let mut store = db.write().await;
    let reminder = Reminder {
        reminder_uuid: Uuid::new_v4(),
        user_uuid: store.user_for(&token),
        title: input.title,
        remind_date: input.remind_date,
    };
    store.reminders.insert(reminder.reminder_uuid, reminder.clone());
    (StatusCode::CREATED, Json(json!({ "reminder": reminder })))
}

async fn update_reminder(
    State(db): State<Db>,
    Session(token): Session,
    Json(input): Json<UpdateReminder>,
) -> Result<Json<Value>, ApiFailure> {
    let mut store = db.write().await;
    let user = store.user_for(&token);
    let reminder = find_owned(&mut store.reminders, input.reminder_uuid, user, "reminder")?;
    reminder.title = input.title;
    reminder.remind_date = input.remind_date;
    Ok(Json(json!({ "reminder": reminder })))
}

async fn delete_reminder(
    State(db): State<Db>,
    Session(token): Session,
    Json(input): Json<DeleteReminder>,
) -> Result<Json<Value>, ApiFailure> {
    let mut store = db.write().await;
    let user = store.user_for(&token);
    remove_owned(&mut store.reminders, input.reminder_uuid, user, "reminder")?;
    Ok(deleted("reminder", input.reminder_uuid))
}

// --- users ---

async fn get_user(State(db): State<Db>, Session(token): Session) -> Json<Value> {
    let mut store = db.write().await;
    let user = store.user_for(&token);
    Json(json!({ "user": store.users.get(&user) }))
}

async fn update_user(
    State(db): State<Db>,
    Session(token): Session,
    Json(input): Json<UpdateUser>,
) -> Json<Value> {
    let mut store = db.write().await;
    let id = store.user_for(&token);
    let user = store.users.entry(id).or_default();
    user.user_uuid = id;
    user.email = Some(input.email);
    user.first_name = Some(input.first_name);
    user.last_name = Some(input.last_name);
    user.birth_date = Some(input.birth_date);
    user.phone = Some(input.phone);
    Json(json!({ "user": user }))
}

/// Remove the account, its sessions and everything it owns.
async fn delete_user(State(db): State<Db>, Session(token): Session) -> Json<Value> {
    let mut store = db.write().await;
    let id = store.user_for(&token);
    store.users.remove(&id);
    store.passwords.remove(&id);
    store.sessions.retain(|_, user| *user != id);
    store.inventory.retain(|_, e| e.owner() != id);
    store.notes.retain(|_, e| e.owner() != id);
    store.tags.retain(|_, e| e.owner() != id);
    store.reminders.retain(|_, e| e.owner() != id);
    store.reset_tokens.retain(|_, user| *user != id);
    store.verification_tokens.retain(|_, user| *user != id);
    deleted("user", id)
}

async fn request_password_change(
    State(db): State<Db>,
    Json(input): Json<RequestPasswordChange>,
) -> Result<Json<Value>, ApiFailure> {
    let mut store = db.write().await;
    let user = store
        .users
        .values()
        .find(|u| u.email.as_deref() == Some(input.email.as_str()))
        .map(|u| u.user_uuid)
        .ok_or_else(|| ApiFailure::NotFound(format!("no account for {}", input.email)))?;
    store.reset_tokens.insert(Uuid::new_v4().to_string(), user);
    tracing::info!(%user, "password reset token issued");
    Ok(Json(json!({ "message": "password reset email sent" })))
}

async fn change_password(
    State(db): State<Db>,
    Path(token): Path<String>,
    Json(input): Json<ChangePassword>,
) -> Result<Json<Value>, ApiFailure> {
    let mut store = db.write().await;
    let user = store
        .reset_tokens
        .remove(&token)
        .ok_or_else(|| ApiFailure::NotFound("invalid or expired reset token".to_string()))?;
    store.passwords.insert(user, input.new_password);
    Ok(Json(json!({ "message": "password updated" })))
}

async fn verify_account(
    State(db): State<Db>,
    Path(token): Path<String>,
) -> Result<Json<Value>, ApiFailure> {
    let mut store = db.write().await;
    let id = store
        .verification_tokens
        .remove(&token)
        .ok_or_else(|| ApiFailure::NotFound("invalid verification token".to_string()))?;
    let user = store
        .users
        .get_mut(&id)
        .ok_or_else(|| ApiFailure::NotFound(format!("user {id} not found")))?;
    user.verified = true;
    Ok(Json(json!({ "message": "account verified" })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn note_serializes_with_uuid_field_names() {
        let note = Note {
            note_uuid: Uuid::nil(),
            user_uuid: Uuid::nil(),
            title: "Test".to_string(),
            content: "Body".to_string(),
            tags: vec![Uuid::nil()],
        };
        let json = serde_json::to_value(&note).unwrap();
        assert_eq!(json["note_uuid"], "00000000-0000-0000-0000-000000000000");
        assert_eq!(json["title"], "Test");
        assert_eq!(json["tags"][0], "00000000-0000-0000-0000-000000000000");
    }

    #[test]
    fn update_inventory_requires_inventory_id() {
        let result: Result<UpdateInventoryItem, _> = serde_json::from_str(
            r#"{"product_name":"Milk","amount":1,"expiration_date":"2024-06-01"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn sessions_are_provisioned_once() {
        let mut store = Store::default();
        let first = store.user_for("tok");
        let again = store.user_for("tok");
        let other = store.user_for("other");
        assert_eq!(first, again);
        assert_ne!(first, other);
        assert_eq!(store.users.len(), 2);
    }

    #[test]
    fn reset_token_lookup_matches_email() {
        let mut store = Store::default();
        let id = store.user_for("tok");
        store.users.get_mut(&id).unwrap().email = Some("ana@example.com".to_string());
        store.reset_tokens.insert("reset-1".to_string(), id);
        assert_eq!(store.reset_token_for("ana@example.com").as_deref(), Some("reset-1"));
        assert_eq!(store.reset_token_for("bob@example.com"), None);
    }

    #[test]
    fn find_owned_hides_other_users_entities() {
        let mut store = Store::default();
        let owner = store.user_for("owner");
        let intruder = store.user_for("intruder");
        let tag = Tag {
            tag_uuid: Uuid::new_v4(),
            user_uuid: owner,
            name: "home".to_string(),
        };
        store.tags.insert(tag.tag_uuid, tag.clone());
        assert!(find_owned(&mut store.tags, tag.tag_uuid, owner, "tag").is_ok());
        assert!(matches!(
            find_owned(&mut store.tags, tag.tag_uuid, intruder, "tag"),
            Err(ApiFailure::NotFound(_))
        ));
    }

    #[test]
    fn find_owned_hands_out_a_mutable_entry() {
        let mut store = Store::default();
        let owner = store.user_for("owner");
        let id = Uuid::new_v4();
        store.tags.insert(
            id,
            Tag {
                tag_uuid: id,
                user_uuid: owner,
                name: "home".to_string(),
            },
        );

        // The entry borrows only the map, so it outlives the temporary kind.
        let tag = find_owned(&mut store.tags, id, owner, &String::from("tag")).unwrap();
        tag.name = "errands".to_string();

        assert_eq!(store.tags[&id].name, "errands");
    }
}
