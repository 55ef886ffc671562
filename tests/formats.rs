//! Integration tests for format dispatch through the standard registry.

use multiformat::{record, FormatError, FormatRegistry, Record, Value};

mod common;
use common::{sample_record, text_record};

#[test]
fn test_every_registered_format_encodes() {
    let registry = FormatRegistry::standard();
    let record = sample_record();

    for format in registry.formats() {
        let encoded = registry
            .encode(&record, format)
            .unwrap_or_else(|e| panic!("{format} failed: {e}"));
        assert!(!encoded.body.is_empty(), "{format} produced no output");
        assert!(!encoded.content_type.is_empty());
    }
}

#[test]
fn test_listing_order() {
    assert_eq!(
        FormatRegistry::standard().formats(),
        ["json", "xml", "csv", "yaml", "toml"]
    );
}

#[test]
fn test_unknown_format_lists_every_identifier() {
    let registry = FormatRegistry::standard();
    let err = registry.resolve("not-a-format").unwrap_err();

    assert!(matches!(err, FormatError::UnknownFormat { ref requested, .. } if requested == "not-a-format"));
    assert_eq!(err.available(), registry.formats());
}

#[test]
fn test_encode_pdf_fails() {
    let err = FormatRegistry::standard()
        .encode(&sample_record(), "pdf")
        .unwrap_err();

    assert_eq!(err.to_string(), "Unknown format: pdf");
    for format in ["json", "xml", "csv", "yaml", "toml"] {
        assert!(err.hint().contains(format));
    }
}

#[test]
fn test_json_scenario() {
    let encoded = FormatRegistry::standard()
        .encode(&sample_record(), "json")
        .unwrap();

    assert_eq!(encoded.content_type, "application/json");
    assert_eq!(
        encoded.body,
        "{\n  \"name\": \"John\",\n  \"age\": 30,\n  \"city\": \"NYC\"\n}"
    );
}

#[test]
fn test_xml_scenario() {
    let encoded = FormatRegistry::standard()
        .encode(&sample_record(), "xml")
        .unwrap();

    assert_eq!(encoded.content_type, "application/xml");
    assert_eq!(
        encoded.body,
        "<root>\n  <name>John</name>\n  <age>30</age>\n  <city>NYC</city>\n</root>"
    );
}

#[test]
fn test_csv_scenario() {
    let encoded = FormatRegistry::standard()
        .encode(&text_record(), "csv")
        .unwrap();

    assert_eq!(encoded.content_type, "text/csv");
    assert_eq!(encoded.body.lines().collect::<Vec<_>>(), ["name,age", "John,30"]);
}

#[test]
fn test_yaml_scenario() {
    let encoded = FormatRegistry::standard()
        .encode(&sample_record(), "yaml")
        .unwrap();

    assert_eq!(encoded.content_type, "application/x-yaml");
    assert_eq!(encoded.body, "name: John\nage: 30\ncity: NYC\n");
}

#[test]
fn test_toml_scenario() {
    let encoded = FormatRegistry::standard()
        .encode(&sample_record(), "toml")
        .unwrap();

    assert_eq!(encoded.content_type, "application/toml");
    assert_eq!(encoded.body, "name = \"John\"\nage = 30\ncity = \"NYC\"\n");
}

/// Every format accepts an empty record. TOML's empty document is the one
/// empty body.
#[test]
fn test_empty_record_bodies() {
    let registry = FormatRegistry::standard();
    let empty = Record::new();

    let expected = [
        ("json", "{}"),
        ("xml", "<root>\n</root>"),
        ("csv", "\r\n\r\n"),
        ("yaml", "{}\n"),
        ("toml", ""),
    ];
    for (format, body) in expected {
        assert_eq!(registry.encode(&empty, format).unwrap().body, body, "{format}");
    }
}

#[test]
fn test_content_type_independent_of_record() {
    let registry = FormatRegistry::standard();
    let other = record! { "x" => 1.5, "y" => false };

    for format in registry.formats() {
        let a = registry.encode(&sample_record(), format).unwrap();
        let b = registry.encode(&other, format).unwrap();
        assert_eq!(a.content_type, b.content_type);
        assert_eq!(registry.content_type(format).unwrap(), a.content_type);
    }
}

#[test]
fn test_null_only_fails_for_toml() {
    let registry = FormatRegistry::standard();
    let record = record! { "name" => "John", "nick" => Value::Null };

    for format in registry.formats() {
        let result = registry.encode(&record, format);
        if format == "toml" {
            assert!(matches!(result, Err(FormatError::UnsupportedValue { .. })));
        } else {
            assert!(result.is_ok(), "{format} rejected null");
        }
    }
}

#[test]
fn test_registry_shared_across_threads() {
    let registry = std::sync::Arc::new(FormatRegistry::standard());
    let expected = registry.encode(&sample_record(), "yaml").unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let registry = std::sync::Arc::clone(&registry);
            std::thread::spawn(move || registry.encode(&sample_record(), "yaml").unwrap())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
