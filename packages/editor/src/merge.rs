//! # Document Merger
//!
//! Writes one operation's [`EditableFields`] back into the document tree.
//!
//! ## Merge Semantics
//!
//! ### Text fields
//! - `summary`, `description` and `responses.200.description` are set to the
//!   field value, or removed when the value is empty
//! - `responses` and `responses.200` are created when absent
//!
//! ### Example
//! - Goes to the first existing content type under `responses.200.content`;
//!   `application/json` is created only when there is no content at all
//! - Trimmed text that parses as JSON is stored structured, anything else as
//!   a plain string; empty text removes `example` and nothing else
//!
//! ### Notes
//! - `x-impl-notes` is only touched in advanced mode: one entry per
//!   non-blank trimmed line, or the key removed when no line remains
//!
//! Only the containers on the route to an edited leaf are copied. Every other
//! subtree is shared with the input tree, which is left as it was.

use crate::indexer::{EDITABLE_RESPONSE, NOTES_EXTENSION};
use crate::{EditableFields, OperationKey};
use apidocs_document::{parse_json, DocumentNode};
use tracing::debug;

/// Content type used when a response has no content yet
pub const DEFAULT_CONTENT_TYPE: &str = "application/json";

/// Produce a new tree with `fields` merged into the operation at `key`
pub fn merge_fields(
    tree: &DocumentNode,
    key: &OperationKey,
    fields: &EditableFields,
    advanced: bool,
) -> DocumentNode {
    let mut next = tree.clone();

    let operation = next
        .child_mapping_mut("paths")
        .child_mapping_mut(&key.path)
        .child_mapping_mut(key.method.as_str());

    set_or_remove(operation, "summary", &fields.summary);
    set_or_remove(operation, "description", &fields.description);

    let response = operation
        .child_mapping_mut("responses")
        .child_mapping_mut(EDITABLE_RESPONSE);
    set_or_remove(response, "description", &fields.response200_description);
    merge_example(response, &fields.response200_example);

    if advanced {
        merge_notes(operation, &fields.notes_text);
    }

    debug!(key = %key, advanced, "Merged fields into document");
    next
}

fn set_or_remove(node: &mut DocumentNode, key: &str, value: &str) {
    if value.is_empty() {
        node.remove(key);
    } else {
        node.set(key, DocumentNode::string(value));
    }
}

fn merge_example(response: &mut DocumentNode, example: &str) {
    let content = response.child_mapping_mut("content");
    let content_type = content
        .as_mapping()
        .and_then(|entries| entries.keys().next().cloned())
        .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string());
    let media = content.child_mapping_mut(&content_type);

    let trimmed = example.trim();
    if trimmed.is_empty() {
        media.remove("example");
    } else {
        media.set("example", parse_example(trimmed));
    }
}

/// JSON when possible, the raw text otherwise
fn parse_example(text: &str) -> DocumentNode {
    parse_json(text).unwrap_or_else(|err| {
        debug!(error = %err, "Example is not JSON, storing it as text");
        DocumentNode::string(text)
    })
}

fn merge_notes(operation: &mut DocumentNode, notes_text: &str) {
    let notes: Vec<DocumentNode> = notes_text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(DocumentNode::string)
        .collect();

    if notes.is_empty() {
        operation.remove(NOTES_EXTENSION);
    } else {
        operation.set(NOTES_EXTENSION, DocumentNode::sequence(notes));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Method;
    use apidocs_document::try_parse;

    const SOURCE: &str = r#"
openapi: 3.0.0
paths:
  /users/{id}:
    get:
      summary: Get user
      responses:
        "200":
          description: OK
          content:
            application/json:
              example: {"id": 1}
        "404":
          description: Not found
      x-impl-notes: [keep me]
    delete:
      summary: Remove user
  /health:
    get:
      summary: Health
"#;

    fn key() -> OperationKey {
        OperationKey::new(Method::Get, "/users/{id}")
    }

    fn fields() -> EditableFields {
        EditableFields {
            summary: "Get user".to_string(),
            description: String::new(),
            response200_description: "OK".to_string(),
            response200_example: "{\"id\": 1}".to_string(),
            notes_text: "keep me".to_string(),
        }
    }

    #[test]
    fn test_unchanged_fields_reproduce_the_tree() {
        let tree = try_parse(SOURCE).unwrap();
        assert_eq!(merge_fields(&tree, &key(), &fields(), true), tree);
    }

    #[test]
    fn test_merge_sets_and_removes_text_fields() {
        let tree = try_parse(SOURCE).unwrap();
        let next = merge_fields(
            &tree,
            &key(),
            &EditableFields {
                summary: String::new(),
                description: "Loads one user".to_string(),
                ..fields()
            },
            false,
        );

        let op = next.get_path(&["paths", "/users/{id}", "get"]).unwrap();
        assert!(op.get("summary").is_none());
        assert_eq!(op.get("description"), Some(&DocumentNode::from("Loads one user")));
    }

    #[test]
    fn test_input_tree_is_not_modified() {
        let tree = try_parse(SOURCE).unwrap();
        let snapshot = tree.clone();
        let _ = merge_fields(
            &tree,
            &key(),
            &EditableFields {
                summary: "Changed".to_string(),
                ..Default::default()
            },
            true,
        );

        assert_eq!(tree, snapshot);
    }

    #[test]
    fn test_untouched_subtrees_are_shared() {
        let tree = try_parse(SOURCE).unwrap();
        let next = merge_fields(&tree, &key(), &EditableFields::default(), true);

        let before = tree.get_path(&["paths", "/health"]).unwrap();
        let after = next.get_path(&["paths", "/health"]).unwrap();
        assert!(before.ptr_eq(after));

        let not_found = &["paths", "/users/{id}", "get", "responses", "404"];
        assert!(tree.get_path(not_found).unwrap().ptr_eq(next.get_path(not_found).unwrap()));
    }

    #[test]
    fn test_invalid_json_example_is_stored_as_text() {
        let tree = try_parse(SOURCE).unwrap();
        let next = merge_fields(
            &tree,
            &key(),
            &EditableFields {
                response200_example: "  {not json  \n".to_string(),
                ..fields()
            },
            false,
        );

        assert_eq!(
            next.get_path(&["paths", "/users/{id}", "get", "responses", "200", "content", "application/json", "example"]),
            Some(&DocumentNode::from("{not json"))
        );
    }

    #[test]
    fn test_missing_response_structure_is_created() {
        let tree = try_parse(SOURCE).unwrap();
        let health = OperationKey::new(Method::Get, "/health");
        let next = merge_fields(
            &tree,
            &health,
            &EditableFields {
                summary: "Health".to_string(),
                response200_description: "Alive".to_string(),
                response200_example: "\"ok\"".to_string(),
                ..Default::default()
            },
            false,
        );

        let response = next.get_path(&["paths", "/health", "get", "responses", "200"]).unwrap();
        assert_eq!(response.get("description"), Some(&DocumentNode::from("Alive")));
        assert_eq!(
            response.get_path(&["content", DEFAULT_CONTENT_TYPE, "example"]),
            Some(&DocumentNode::from("ok"))
        );
    }

    #[test]
    fn test_first_content_type_is_reused() {
        let tree = try_parse(
            r#"
paths:
  /a:
    get:
      responses:
        "200":
          content:
            text/plain:
              example: old
            application/json:
              example: {"untouched": true}
"#,
        )
        .unwrap();
        let a = OperationKey::new(Method::Get, "/a");
        let next = merge_fields(
            &tree,
            &a,
            &EditableFields {
                response200_example: "new".to_string(),
                ..Default::default()
            },
            false,
        );

        let content = next.get_path(&["paths", "/a", "get", "responses", "200", "content"]).unwrap();
        assert_eq!(content.as_mapping().unwrap().len(), 2);
        assert_eq!(content.get_path(&["text/plain", "example"]), Some(&DocumentNode::from("new")));
        assert_eq!(
            content.get("application/json"),
            tree.get_path(&["paths", "/a", "get", "responses", "200", "content", "application/json"])
        );
    }

    #[test]
    fn test_notes_ignored_outside_advanced_mode() {
        let tree = try_parse(SOURCE).unwrap();
        let next = merge_fields(
            &tree,
            &key(),
            &EditableFields {
                notes_text: String::new(),
                ..fields()
            },
            false,
        );

        let notes = &["paths", "/users/{id}", "get", NOTES_EXTENSION];
        assert_eq!(next.get_path(notes), tree.get_path(notes));
    }

    #[test]
    fn test_notes_split_trimmed_and_filtered() {
        let tree = try_parse(SOURCE).unwrap();
        let next = merge_fields(
            &tree,
            &key(),
            &EditableFields {
                notes_text: "  first \r\n\n   \nsecond".to_string(),
                ..fields()
            },
            true,
        );

        let notes = next
            .get_path(&["paths", "/users/{id}", "get", NOTES_EXTENSION])
            .and_then(DocumentNode::as_sequence)
            .unwrap();
        assert_eq!(notes, &[DocumentNode::from("first"), DocumentNode::from("second")]);

        let cleared = merge_fields(
            &next,
            &key(),
            &EditableFields {
                notes_text: " \n ".to_string(),
                ..fields()
            },
            true,
        );
        assert!(cleared.get_path(&["paths", "/users/{id}", "get", NOTES_EXTENSION]).is_none());
    }
}
