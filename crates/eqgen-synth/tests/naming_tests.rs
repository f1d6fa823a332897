use super::*;
use crate::naming::{FALLBACK_LOCAL_NAME, to_camel_case};

fn parts(identifier: &str) -> Vec<&str> {
    CamelCaseSegmenter
        .word_parts(identifier)
        .into_iter()
        .map(|span| span.slice(identifier))
        .collect()
}

// =====================================================================
// CamelCaseSegmenter
// =====================================================================

#[test]
fn segment_pascal_case() {
    assert_eq!(parts("CustomerId"), vec!["Customer", "Id"]);
    assert_eq!(parts("Point"), vec!["Point"]);
    assert_eq!(parts("point"), vec!["point"]);
}

#[test]
fn segment_leading_acronym() {
    assert_eq!(parts("UIElement"), vec!["UI", "Element"]);
    assert_eq!(parts("IFoo"), vec!["I", "Foo"]);
    assert_eq!(parts("HTMLDocument"), vec!["HTML", "Document"]);
    assert_eq!(parts("HTML"), vec!["HTML"]);
}

#[test]
fn segment_digits() {
    assert_eq!(parts("Vector3"), vec!["Vector", "3"]);
    assert_eq!(parts("Vector3D"), vec!["Vector", "3", "D"]);
    assert_eq!(parts("123"), vec!["123"]);
}

#[test]
fn segment_skips_punctuation() {
    assert_eq!(parts("snake_case"), vec!["snake", "case"]);
    assert_eq!(parts("_Private"), vec!["Private"]);
    assert_eq!(parts("Trailing__"), vec!["Trailing"]);
    assert!(parts("___").is_empty());
    assert!(parts("").is_empty());
}

#[test]
fn segment_non_ascii_uses_byte_spans() {
    let spans = CamelCaseSegmenter.word_parts("ÉtatCivil");
    assert_eq!(spans.len(), 2);
    assert_eq!(spans[0], TextSpan::new(0, "État".len()));
    assert_eq!(spans[1].slice("ÉtatCivil"), "Civil");
}

// =====================================================================
// to_camel_case
// =====================================================================

#[test]
fn camel_case_lowers_first_letter() {
    assert_eq!(to_camel_case("Customer"), "customer");
    assert_eq!(to_camel_case("id"), "id");
    assert_eq!(to_camel_case("X"), "x");
    assert_eq!(to_camel_case(""), "");
}

#[test]
fn camel_case_lowers_whole_acronym() {
    assert_eq!(to_camel_case("HTML"), "html");
    assert_eq!(to_camel_case("ID"), "id");
}

#[test]
fn pick_lowers_trailing_acronym_entirely() {
    assert_eq!(pick_local_name("CustomerID", &CamelCaseSegmenter), "id");
    assert_eq!(pick_local_name("ParseHTML", &CamelCaseSegmenter), "html");
}

// =====================================================================
// pick_local_name
// =====================================================================

#[test]
fn pick_prefers_last_word() {
    assert_eq!(pick_local_name("CustomerId", &CamelCaseSegmenter), "id");
    assert_eq!(pick_local_name("Point", &CamelCaseSegmenter), "point");
    assert_eq!(pick_local_name("UIElement", &CamelCaseSegmenter), "element");
    assert_eq!(pick_local_name("OrderLine_", &CamelCaseSegmenter), "line");
}

#[test]
fn pick_skips_parts_starting_with_digits() {
    assert_eq!(pick_local_name("Vector3", &CamelCaseSegmenter), "vector");
    assert_eq!(pick_local_name("Matrix4x4", &CamelCaseSegmenter), "x");
}

#[test]
fn pick_falls_back_without_letters() {
    assert_eq!(pick_local_name("_1", &CamelCaseSegmenter), FALLBACK_LOCAL_NAME);
    assert_eq!(pick_local_name("", &CamelCaseSegmenter), "v");
}

#[test]
fn pick_is_deterministic() {
    let first = pick_local_name("ShippingAddress", &CamelCaseSegmenter);
    let second = pick_local_name("ShippingAddress", &CamelCaseSegmenter);
    assert_eq!(first, second);
    assert_eq!(first, "address");
}

#[test]
fn pick_uses_supplied_segmenter() {
    struct WholeName;
    impl WordSegmenter for WholeName {
        fn word_parts(&self, identifier: &str) -> Vec<TextSpan> {
            vec![TextSpan::new(0, identifier.len())]
        }
    }

    assert_eq!(pick_local_name("CustomerId", &WholeName), "customerId");
}
