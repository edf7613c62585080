use serde_json::{Map, Value};

use crate::repository::Book;

#[derive(Debug, Clone, Copy)]
enum FieldKind {
    String,
    Integer,
}

impl FieldKind {
    fn name(&self) -> &'static str {
        match self {
            FieldKind::String => "string",
            FieldKind::Integer => "integer",
        }
    }
}

/// Validates a JSON payload against the book schema.
///
/// All violations are collected before returning, one message per violated
/// constraint, in the declared property order: isbn, amazon_url, author,
/// language, pages, publisher, title, year.
pub fn validate_book(value: &Value) -> Result<Book, Vec<String>> {
    let object = match value.as_object() {
        Some(object) => object,
        None => return Err(vec!["instance is not of a type(s) object".to_string()]),
    };

    let mut messages = Vec::new();

    let isbn = require_string(object, "isbn", &mut messages);
    let amazon_url = require_string(object, "amazon_url", &mut messages);
    let author = require_string(object, "author", &mut messages);
    let language = require_string(object, "language", &mut messages);
    let pages = require_integer(object, "pages", &mut messages);
    let publisher = require_string(object, "publisher", &mut messages);
    let title = require_string(object, "title", &mut messages);
    let year = require_integer(object, "year", &mut messages);

    match (isbn, amazon_url, author, language, pages, publisher, title, year) {
        (
            Some(isbn),
            Some(amazon_url),
            Some(author),
            Some(language),
            Some(pages),
            Some(publisher),
            Some(title),
            Some(year),
        ) => Ok(Book {
            isbn,
            amazon_url,
            author,
            language,
            pages,
            publisher,
            title,
            year,
        }),
        _ => Err(messages),
    }
}

fn require_string(object: &Map<String, Value>, name: &str, messages: &mut Vec<String>) -> Option<String> {
    match object.get(name) {
        None => {
            messages.push(missing_property(name));

            None
        }
        Some(Value::String(value)) => Some(value.clone()),
        Some(_) => {
            messages.push(type_mismatch(name, FieldKind::String));

            None
        }
    }
}

fn require_integer(object: &Map<String, Value>, name: &str, messages: &mut Vec<String>) -> Option<i32> {
    let value = match object.get(name) {
        None => {
            messages.push(missing_property(name));

            return None;
        }
        Some(value) => value,
    };

    match as_i32(value) {
        Some(value) => Some(value),
        None => {
            messages.push(type_mismatch(name, FieldKind::Integer));

            None
        }
    }
}

// Accepts numbers without a fractional part, so 264.0 counts as an integer.
fn as_i32(value: &Value) -> Option<i32> {
    if let Some(value) = value.as_i64() {
        return i32::try_from(value).ok();
    }

    match value.as_f64() {
        Some(value) if value.fract() == 0.0 && value >= i32::MIN as f64 && value <= i32::MAX as f64 => {
            Some(value as i32)
        }
        _ => None,
    }
}

fn missing_property(name: &str) -> String {
    format!("instance requires property \"{name}\"")
}

fn type_mismatch(name: &str, kind: FieldKind) -> String {
    format!("instance.{name} is not of a type(s) {}", kind.name())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn valid_payload() -> Value {
        json!({
            "isbn": "1234567891",
            "amazon_url": "http://test.test",
            "author": "Test Test",
            "language": "english",
            "pages": 222,
            "publisher": "Testing Publisher",
            "title": "Learn How to Test",
            "year": 2023
        })
    }

    #[test]
    fn valid_payload_produces_a_book() {
        let book = validate_book(&valid_payload()).unwrap();

        assert_eq!(book.isbn, "1234567891");
        assert_eq!(book.pages, 222);
        assert_eq!(book.year, 2023);
    }

    #[test]
    fn empty_object_reports_every_property_in_order() {
        let messages = validate_book(&json!({})).unwrap_err();

        assert_eq!(
            messages,
            vec![
                "instance requires property \"isbn\"",
                "instance requires property \"amazon_url\"",
                "instance requires property \"author\"",
                "instance requires property \"language\"",
                "instance requires property \"pages\"",
                "instance requires property \"publisher\"",
                "instance requires property \"title\"",
                "instance requires property \"year\"",
            ]
        );
    }

    #[test]
    fn wrong_types_are_reported_per_field() {
        let mut payload = valid_payload();
        payload["pages"] = json!("222");
        payload["title"] = json!(5);

        let messages = validate_book(&payload).unwrap_err();

        assert_eq!(
            messages,
            vec![
                "instance.pages is not of a type(s) integer",
                "instance.title is not of a type(s) string",
            ]
        );
    }

    #[test]
    fn missing_and_mistyped_fields_are_collected_together() {
        let payload = json!({
            "isbn": "1234567891",
            "amazon_url": 42,
            "author": "Test Test",
            "language": "english",
            "publisher": "Testing Publisher",
            "title": "Learn How to Test",
            "year": 2023
        });

        let messages = validate_book(&payload).unwrap_err();

        assert_eq!(
            messages,
            vec![
                "instance.amazon_url is not of a type(s) string",
                "instance requires property \"pages\"",
            ]
        );
    }

    #[test]
    fn integral_floats_count_as_integers() {
        let mut payload = valid_payload();
        payload["pages"] = json!(264.0);

        let book = validate_book(&payload).unwrap();

        assert_eq!(book.pages, 264);
    }

    #[test]
    fn non_object_payload_is_rejected() {
        let messages = validate_book(&json!("not a book")).unwrap_err();

        assert_eq!(messages, vec!["instance is not of a type(s) object"]);
    }
}
