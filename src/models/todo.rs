//! # Todo Model
//!
//! The single entity of the service, and the two shapes a request body is
//! decoded into: [`TodoDraft`] for a full overwrite and [`TodoPatch`] for a
//! partial merge.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use time::PrimitiveDateTime;
use tracing::debug;

use crate::utils::coerce::{to_deadline, to_flag, to_text};
use crate::utils::constant::*;

time::serde::format_description!(
    timestamp,
    PrimitiveDateTime,
    "[year]-[month]-[day]T[hour]:[minute]:[second]"
);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub completed: bool,
    /// Free-form, usually `YYYY-MM-DDTHH:MM:SS`
    pub deadline_at: Option<String>,
    #[serde(with = "timestamp")]
    pub created_at: PrimitiveDateTime,
    #[serde(with = "timestamp")]
    pub updated_at: PrimitiveDateTime,
}

impl Todo {
    /// The default todo materialized whenever storage is found empty.
    pub fn seed(now: PrimitiveDateTime) -> Self {
        Self::from_draft(TodoDraft::default(), now)
    }

    /// Builds a brand new record; both timestamps are set to `now`.
    pub fn from_draft(draft: TodoDraft, now: PrimitiveDateTime) -> Self {
        Self {
            id: SINGLETON_TODO_ID,
            title: draft.title,
            description: draft.description,
            completed: draft.completed,
            deadline_at: draft.deadline_at,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Every content field of a todo, missing keys already replaced by defaults
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoDraft {
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub deadline_at: Option<String>,
}

impl Default for TodoDraft {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            completed: DEFAULT_COMPLETED,
            deadline_at: Some(DEFAULT_DEADLINE_AT.to_string()),
        }
    }
}

impl TodoDraft {
    /// Decodes a create body. Keys other than the four content fields are ignored.
    pub fn from_body(body: &Map<String, Value>) -> Self {
        let defaults = Self::default();

        Self {
            title: text_or(body, "title", defaults.title),
            description: text_or(body, "description", defaults.description),
            completed: body.get("completed").map_or(defaults.completed, to_flag),
            deadline_at: match body.get("deadline_at") {
                Some(value) => to_deadline(value),
                None => defaults.deadline_at,
            },
        }
    }
}

fn text_or(body: &Map<String, Value>, key: &str, fallback: String) -> String {
    match body.get(key) {
        Some(value) => to_text(value).unwrap_or_else(|| {
            debug!(key, "Non-text value supplied, using default");
            fallback
        }),
        None => fallback,
    }
}

/// The content fields present in an update body
///
/// `None` means the key was absent and the stored value is kept. For
/// `deadline_at`, `Some(None)` clears the deadline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
    pub deadline_at: Option<Option<String>>,
}

impl TodoPatch {
    /// Decodes an update body. Present but non-text titles and descriptions
    /// become empty strings.
    pub fn from_body(body: &Map<String, Value>) -> Self {
        Self {
            title: body.get("title").map(|v| to_text(v).unwrap_or_default()),
            description: body
                .get("description")
                .map(|v| to_text(v).unwrap_or_default()),
            completed: body.get("completed").map(to_flag),
            deadline_at: body.get("deadline_at").map(to_deadline),
        }
    }

    /// Merges the present fields into `todo` and stamps `updated_at`, even
    /// when the patch is empty.
    pub fn apply(self, todo: &mut Todo, now: PrimitiveDateTime) {
        if let Some(title) = self.title {
            todo.title = title;
        }
        if let Some(description) = self.description {
            todo.description = description;
        }
        if let Some(completed) = self.completed {
            todo.completed = completed;
        }
        if let Some(deadline_at) = self.deadline_at {
            todo.deadline_at = deadline_at;
        }
        todo.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use time::macros::datetime;

    use super::*;

    fn body(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected an object, got {other}"),
        }
    }

    #[test]
    fn seed_uses_default_fields() {
        let now = datetime!(2026-02-20 14:00:00);
        let todo = Todo::seed(now);

        assert_eq!(todo.id, 1);
        assert_eq!(todo.title, "Watch CSSE6400 Lecture");
        assert_eq!(
            todo.description,
            "Watch the CSSE6400 lecture on ECHO360 for week 1"
        );
        assert!(todo.completed);
        assert_eq!(todo.deadline_at.as_deref(), Some("2026-02-27T18:00:00"));
        assert_eq!(todo.created_at, now);
        assert_eq!(todo.updated_at, now);
    }

    #[test]
    fn todo_serializes_with_second_precision_timestamps() {
        let todo = Todo::seed(datetime!(2026-02-20 14:00:00));
        let json = serde_json::to_value(&todo).unwrap();

        assert_eq!(
            json,
            json!({
                "id": 1,
                "title": "Watch CSSE6400 Lecture",
                "description": "Watch the CSSE6400 lecture on ECHO360 for week 1",
                "completed": true,
                "deadline_at": "2026-02-27T18:00:00",
                "created_at": "2026-02-20T14:00:00",
                "updated_at": "2026-02-20T14:00:00",
            })
        );
    }

    #[test]
    fn todo_deserializes_from_wire_format() {
        let todo: Todo = serde_json::from_value(json!({
            "id": 1,
            "title": "t",
            "description": "d",
            "completed": false,
            "deadline_at": null,
            "created_at": "2026-01-01T00:00:00",
            "updated_at": "2026-01-02T08:30:15",
        }))
        .unwrap();

        assert_eq!(todo.deadline_at, None);
        assert!(todo.updated_at > todo.created_at);
    }

    #[test]
    fn draft_from_empty_body_is_default() {
        assert_eq!(TodoDraft::from_body(&Map::new()), TodoDraft::default());
    }

    #[test]
    fn draft_falls_back_to_defaults_for_missing_keys() {
        let draft = TodoDraft::from_body(&body(json!({
            "title": "  Buy milk  ",
            "completed": false,
        })));

        assert_eq!(draft.title, "Buy milk");
        assert_eq!(draft.description, DEFAULT_DESCRIPTION);
        assert!(!draft.completed);
        assert_eq!(draft.deadline_at.as_deref(), Some(DEFAULT_DEADLINE_AT));
    }

    #[test]
    fn draft_coerces_loose_types() {
        let draft = TodoDraft::from_body(&body(json!({
            "title": 7,
            "description": null,
            "completed": "yes",
            "deadline_at": " 2026-03-01T09:00:00 ",
            "id": 99,
        })));

        assert_eq!(draft.title, "7");
        assert_eq!(draft.description, DEFAULT_DESCRIPTION);
        assert!(draft.completed);
        assert_eq!(draft.deadline_at.as_deref(), Some("2026-03-01T09:00:00"));
    }

    #[test]
    fn draft_null_deadline_stays_null() {
        let draft = TodoDraft::from_body(&body(json!({"deadline_at": null})));
        assert_eq!(draft.deadline_at, None);
    }

    #[test]
    fn draft_stringifies_structured_deadline() {
        let draft = TodoDraft::from_body(&body(json!({"deadline_at": ["2026"]})));
        assert_eq!(draft.deadline_at.as_deref(), Some(r#"["2026"]"#));

        let draft = TodoDraft::from_body(&body(json!({"deadline_at": {"at": "noon"}})));
        assert_eq!(draft.deadline_at.as_deref(), Some(r#"{"at":"noon"}"#));
    }

    #[test]
    fn patch_stringifies_structured_deadline() {
        let patch = TodoPatch::from_body(&body(json!({"deadline_at": {"at": "noon"}})));
        assert_eq!(patch.deadline_at, Some(Some(r#"{"at":"noon"}"#.to_string())));

        let patch = TodoPatch::from_body(&body(json!({"deadline_at": [1, 2]})));
        assert_eq!(patch.deadline_at, Some(Some("[1,2]".to_string())));
    }

    #[test]
    fn patch_only_carries_present_keys() {
        let patch = TodoPatch::from_body(&body(json!({"completed": true})));

        assert_eq!(
            patch,
            TodoPatch {
                completed: Some(true),
                ..TodoPatch::default()
            }
        );
    }

    #[test]
    fn patch_blanks_non_text_titles() {
        let patch = TodoPatch::from_body(&body(json!({
            "title": null,
            "description": ["x"],
            "deadline_at": null,
        })));

        assert_eq!(patch.title.as_deref(), Some(""));
        assert_eq!(patch.description.as_deref(), Some(""));
        assert_eq!(patch.deadline_at, Some(None));
    }

    #[test]
    fn apply_merges_and_stamps_updated_at() {
        let created = datetime!(2026-02-20 14:00:00);
        let later = datetime!(2026-02-20 14:05:00);
        let mut todo = Todo::seed(created);

        TodoPatch {
            completed: Some(false),
            deadline_at: Some(None),
            ..TodoPatch::default()
        }
        .apply(&mut todo, later);

        assert_eq!(todo.title, DEFAULT_TITLE);
        assert!(!todo.completed);
        assert_eq!(todo.deadline_at, None);
        assert_eq!(todo.created_at, created);
        assert_eq!(todo.updated_at, later);
    }

    #[test]
    fn empty_patch_still_refreshes_updated_at() {
        let mut todo = Todo::seed(datetime!(2026-02-20 14:00:00));
        let before = todo.clone();
        let later = datetime!(2026-02-21 00:00:00);

        TodoPatch::default().apply(&mut todo, later);

        assert_eq!(todo.updated_at, later);
        assert_eq!(
            Todo {
                updated_at: before.updated_at,
                ..todo
            },
            before
        );
    }
}
