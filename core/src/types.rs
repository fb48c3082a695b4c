//! Domain DTOs for the five resource domains.
//!
//! # Design
//! Entities are relayed, not validated. Ids are opaque server-assigned
//! strings. The backend may spell an entity's id `<resource>_uuid`,
//! `<resource>_id` or `id`, sometimes several at once; exactly one is taken
//! as the id, in that order of preference, and numbers are accepted as their
//! decimal text. Anything the backend sends beyond the modelled fields,
//! unchosen id spellings included, is kept in `extra` so nothing is lost on
//! the way to the caller.
//!
//! The `*Input` types are what callers hand to `build_create_*` and
//! `build_update_*`; their field names already follow the snake_case wire
//! schema.

use serde::de::Error as _;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Remove and return the entity id, trying `<resource>_uuid`, then
/// `<resource>_id`, then `id`.
fn take_id(map: &mut Map<String, Value>, resource: &str) -> Result<String, serde_json::Error> {
    let keys = [format!("{resource}_uuid"), format!("{resource}_id"), "id".to_string()];
    for key in keys {
        let id = match map.get(&key) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => continue,
        };
        map.remove(&key);
        return Ok(id);
    }
    Err(serde_json::Error::missing_field("id"))
}

/// Remove and return the owning user's id (`user_uuid`, else `user_id`).
fn take_owner(map: &mut Map<String, Value>) -> Option<String> {
    for key in ["user_uuid", "user_id"] {
        if let Some(Value::String(owner)) = map.get(key) {
            let owner = owner.clone();
            map.remove(key);
            return Some(owner);
        }
    }
    None
}

/// A product tracked in the user's inventory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "Map<String, Value>")]
pub struct InventoryItem {
    pub id: String,
    pub product_name: String,
    pub amount: f64,
    pub expiration_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Deserialize)]
struct InventoryFields {
    product_name: String,
    amount: f64,
    expiration_date: String,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl TryFrom<Map<String, Value>> for InventoryItem {
    type Error = serde_json::Error;

    fn try_from(mut map: Map<String, Value>) -> Result<Self, Self::Error> {
        let id = take_id(&mut map, "inventory")?;
        let user_id = take_owner(&mut map);
        let fields: InventoryFields = serde_json::from_value(Value::Object(map))?;
        Ok(Self {
            id,
            product_name: fields.product_name,
            amount: fields.amount,
            expiration_date: fields.expiration_date,
            user_id,
            extra: fields.extra,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "Map<String, Value>")]
pub struct Note {
    pub id: String,
    pub title: String,
    pub content: String,
    /// Ids of the tags linked to this note.
    pub tags: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Deserialize)]
struct NoteFields {
    title: String,
    content: String,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl TryFrom<Map<String, Value>> for Note {
    type Error = serde_json::Error;

    fn try_from(mut map: Map<String, Value>) -> Result<Self, Self::Error> {
        let id = take_id(&mut map, "note")?;
        if !map.contains_key("tags") {
            if let Some(tag_ids) = map.remove("tag_ids") {
                map.insert("tags".to_string(), tag_ids);
            }
        }
        let fields: NoteFields = serde_json::from_value(Value::Object(map))?;
        Ok(Self {
            id,
            title: fields.title,
            content: fields.content,
            tags: fields.tags,
            extra: fields.extra,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "Map<String, Value>")]
pub struct Tag {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Deserialize)]
struct TagFields {
    name: String,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl TryFrom<Map<String, Value>> for Tag {
    type Error = serde_json::Error;

    fn try_from(mut map: Map<String, Value>) -> Result<Self, Self::Error> {
        let id = take_id(&mut map, "tag")?;
        let user_id = take_owner(&mut map);
        let fields: TagFields = serde_json::from_value(Value::Object(map))?;
        Ok(Self {
            id,
            name: fields.name,
            user_id,
            extra: fields.extra,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "Map<String, Value>")]
pub struct Reminder {
    pub id: String,
    pub title: String,
    pub remind_date: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Deserialize)]
struct ReminderFields {
    title: String,
    remind_date: String,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl TryFrom<Map<String, Value>> for Reminder {
    type Error = serde_json::Error;

    fn try_from(mut map: Map<String, Value>) -> Result<Self, Self::Error> {
        let id = take_id(&mut map, "reminder")?;
        let fields: ReminderFields = serde_json::from_value(Value::Object(map))?;
        Ok(Self {
            id,
            title: fields.title,
            remind_date: fields.remind_date,
            extra: fields.extra,
        })
    }
}

/// The account behind the current session. Profile fields may be unset on
/// freshly registered accounts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "Map<String, Value>")]
pub struct User {
    pub id: String,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub birth_date: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Deserialize)]
struct UserFields {
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    first_name: Option<String>,
    #[serde(default)]
    last_name: Option<String>,
    #[serde(default)]
    phone: Option<String>,
    #[serde(default)]
    birth_date: Option<String>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl TryFrom<Map<String, Value>> for User {
    type Error = serde_json::Error;

    fn try_from(mut map: Map<String, Value>) -> Result<Self, Self::Error> {
        let id = take_id(&mut map, "user")?;
        let fields: UserFields = serde_json::from_value(Value::Object(map))?;
        Ok(Self {
            id,
            email: fields.email,
            first_name: fields.first_name,
            last_name: fields.last_name,
            phone: fields.phone,
            birth_date: fields.birth_date,
            extra: fields.extra,
        })
    }
}

/// Fields for creating or updating an inventory item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InventoryInput {
    pub product_name: String,
    pub amount: f64,
    pub expiration_date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NoteInput {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TagInput {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReminderInput {
    pub title: String,
    pub remind_date: String,
}

/// Replacement profile for the session's user. The backend expects every
/// field on update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProfile {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: String,
    pub phone: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn note_accepts_uuid_spelling_and_keeps_extra_fields() {
        let note: Note = serde_json::from_value(json!({
            "note_uuid": "n1",
            "title": "Groceries",
            "content": "Buy milk",
            "created_at": "2024-05-01"
        }))
        .unwrap();
        assert_eq!(note.id, "n1");
        assert!(note.tags.is_empty());
        assert_eq!(note.extra["created_at"], "2024-05-01");
    }

    #[test]
    fn inventory_item_reads_owner_alias() {
        let item: InventoryItem = serde_json::from_value(json!({
            "inventory_uuid": "i1",
            "product_name": "Milk",
            "amount": 2,
            "expiration_date": "2024-06-01",
            "user_uuid": "u1"
        }))
        .unwrap();
        assert_eq!(item.id, "i1");
        assert_eq!(item.amount, 2.0);
        assert_eq!(item.user_id.as_deref(), Some("u1"));
        assert!(item.extra.is_empty());
    }

    #[test]
    fn note_prefers_uuid_over_plain_id() {
        let note: Note = serde_json::from_value(json!({
            "id": "x",
            "note_uuid": "n1",
            "title": "Groceries",
            "content": "Buy milk"
        }))
        .unwrap();
        assert_eq!(note.id, "n1");
        assert_eq!(note.extra["id"], "x");
    }

    #[test]
    fn numeric_id_alongside_uuid_is_kept_as_extra() {
        let note: Note = serde_json::from_value(json!({
            "id": 7,
            "note_uuid": "n1",
            "title": "Groceries",
            "content": "Buy milk",
            "tag_ids": ["t1"]
        }))
        .unwrap();
        assert_eq!(note.id, "n1");
        assert_eq!(note.extra["id"], 7);
        assert_eq!(note.tags, vec!["t1".to_string()]);
    }

    #[test]
    fn numeric_id_is_read_as_text() {
        let reminder: Reminder = serde_json::from_value(json!({
            "id": 42,
            "title": "Dentist",
            "remind_date": "2024-07-02T09:00:00"
        }))
        .unwrap();
        assert_eq!(reminder.id, "42");
        assert!(reminder.extra.is_empty());
    }

    #[test]
    fn resource_id_beats_plain_id_and_owner_prefers_uuid() {
        let tag: Tag = serde_json::from_value(json!({
            "id": "x",
            "tag_id": "t1",
            "name": "home",
            "user_id": "legacy",
            "user_uuid": "u1"
        }))
        .unwrap();
        assert_eq!(tag.id, "t1");
        assert_eq!(tag.user_id.as_deref(), Some("u1"));
        assert_eq!(tag.extra["id"], "x");
        assert_eq!(tag.extra["user_id"], "legacy");
    }

    #[test]
    fn entity_without_any_id_is_rejected() {
        let result: Result<Reminder, _> =
            serde_json::from_value(json!({"title": "Dentist", "remind_date": "2024-07-02"}));
        let err = result.unwrap_err();
        assert!(err.to_string().contains("missing field `id`"), "{err}");
    }

    #[test]
    fn user_profile_fields_are_optional() {
        let user: User = serde_json::from_value(json!({"user_uuid": "u1"})).unwrap();
        assert_eq!(user.id, "u1");
        assert!(user.email.is_none());
        assert!(user.birth_date.is_none());
    }

    #[test]
    fn tag_without_name_is_rejected() {
        let result: Result<Tag, _> = serde_json::from_value(json!({"tag_uuid": "t1"}));
        assert!(result.is_err());
    }

    #[test]
    fn inventory_input_serializes_wire_names() {
        let input = InventoryInput {
            product_name: "Eggs".to_string(),
            amount: 12.0,
            expiration_date: "2024-06-10".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&input).unwrap(),
            json!({"product_name": "Eggs", "amount": 12.0, "expiration_date": "2024-06-10"})
        );
    }
}
