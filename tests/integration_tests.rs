use serde::{Deserialize, Serialize};
use sjson::{
    from_str, sjson, to_string, to_string_pretty, to_value, Error, ErrorKind, Node, NodeKind,
    RenderOptions, Scalar,
};

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct User {
    id: u32,
    name: String,
    active: bool,
    tags: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Product {
    sku: String,
    price: f64,
    quantity: u32,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Order {
    order_id: u32,
    customer: User,
    items: Vec<Product>,
    total: f64,
}

fn sample_order() -> Order {
    Order {
        order_id: 12345,
        customer: User {
            id: 123,
            name: "Alice".to_string(),
            active: true,
            tags: vec!["vip".to_string()],
        },
        items: vec![
            Product {
                sku: "WIDGET-001".to_string(),
                price: 29.99,
                quantity: 2,
            },
            Product {
                sku: "GADGET-002".to_string(),
                price: 10.0,
                quantity: 1,
            },
        ],
        total: 69.98,
    }
}

#[test]
fn test_pretty_print_example() {
    let doc = sjson!({ {"a", 1}, {"b", {1, 2}} });
    assert_eq!(
        doc.render("  "),
        "{\n  \"a\": 1,\n  \"b\": [\n    1,\n    2\n  ]\n}"
    );
    assert_eq!(doc.render(""), r#"{"a":1,"b":[1,2]}"#);
    assert_eq!(format!("{:#}", doc), doc.render("  "));
    assert_eq!(doc.to_string(), doc.render(""));
}

#[test]
fn test_literal_classification_all_pairs() {
    let doc = sjson!({ {"a", 1}, {"b", 2} });
    assert_eq!(doc.kind(), NodeKind::Object);
    assert_eq!(doc.len(), 2);
    assert_eq!(doc["a"], Node::from(1));
    assert_eq!(doc["b"], Node::from(2));
}

#[test]
fn test_literal_classification_one_odd_sibling() {
    let doc = sjson!({ {"a", 1}, {"b", 2}, {3, 4} });
    assert_eq!(doc.kind(), NodeKind::Array);
    assert_eq!(doc.len(), 3);
    for item in doc.as_array().unwrap() {
        assert!(item.is_array());
        assert_eq!(item.len(), 2);
    }
    assert_eq!(doc[0][0], Node::from("a"));
    assert_eq!(doc[2][0], Node::from(3));
}

#[test]
fn test_big_literal() {
    let d = 0.114;
    let doc = sjson!({
        {"null", null},
        {"boolean", false},
        {"integer", -114514},
        {"double", d},
        {"string", "str"},
        {"array", {1, "two", {3.0, null}}},
        {"object", {
            {"nested", {{"deep", true}}},
            {"list", [{"k", "v"}]},
        }},
    });

    assert!(doc.is_object());
    assert!(doc["null"].is_null());
    assert!(!doc["boolean"].to_bool().unwrap());
    assert_eq!(doc["integer"].to_integer().unwrap(), -114514);
    assert_eq!(doc["double"].to_double().unwrap(), 0.114);
    assert_eq!(doc["string"].to_str().unwrap(), "str");
    assert_eq!(doc["array"].len(), 3);
    assert!(doc["array"][2].is_array());
    assert!(doc["object"]["nested"]["deep"].to_bool().unwrap());
    assert!(doc["object"]["list"].is_array());
    assert!(doc["object"]["list"][0].is_pair());

    let reparsed = Node::parse(&doc.render("")).unwrap();
    assert_eq!(reparsed, doc);
    let reparsed = Node::parse(&doc.render("\t")).unwrap();
    assert_eq!(reparsed, doc);
}

#[test]
fn test_auto_promotion_by_index() {
    let mut doc = Node::new();
    assert!(doc.is_untyped());
    let _ = &mut doc[0];
    assert!(doc.is_array());
    assert!(doc.len() >= 1);
    assert!(doc[0].is_untyped());
}

#[test]
fn test_auto_promotion_by_key() {
    let mut doc = Node::new();
    let _ = &mut doc["k"];
    assert!(doc.is_object());
    assert!(doc.contains_key("k"));
    assert!(doc["k"].is_untyped());
}

#[test]
fn test_build_document_by_assignment() {
    let mut doc = Node::new();
    doc["user"]["name"] = Node::from("Alice");
    doc["user"]["langs"][0] = Node::from("rust");
    doc["user"]["langs"][1] = Node::from("c++");
    doc["count"].set(2);

    assert_eq!(
        doc.render(""),
        r#"{"user":{"name":"Alice","langs":["rust","c++"]},"count":2}"#
    );
}

#[test]
fn test_wrong_kind_index_is_error_not_promotion() {
    let mut arr = sjson!([1, 2]);
    let err = arr.at_key_mut("k").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TypeMismatch);
    assert!(arr.is_array());

    let mut obj = sjson!({ {"a", 1} });
    let err = obj.index_mut_or_promote(0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TypeMismatch);
    assert!(obj.is_object());
}

#[test]
fn test_checked_accessors() {
    let doc = sjson!({ {"a", {1, 2}} });
    assert_eq!(doc.at_key("a").unwrap().at(1).unwrap(), &Node::from(2));
    assert_eq!(
        doc.at_key("missing").unwrap_err().kind(),
        ErrorKind::IndexOutOfRange
    );
    assert_eq!(
        doc["a"].at(5).unwrap_err().kind(),
        ErrorKind::IndexOutOfRange
    );
    assert_eq!(doc.at(0).unwrap_err().kind(), ErrorKind::TypeMismatch);
}

#[test]
fn test_null_reads_as_any_kind() {
    let null = Node::null();
    assert!(!null.to_bool().unwrap());
    assert_eq!(null.to_integer().unwrap(), 0);
    assert_eq!(null.to_double().unwrap(), 0.0);
    assert_eq!(null.to_str().unwrap(), "");

    let mut scalar = Scalar::Null;
    assert!(scalar.ensure_is(sjson::ScalarKind::Integer).is_ok());
    scalar.set(7);
    assert_eq!(
        scalar.ensure_is(sjson::ScalarKind::String).unwrap_err().kind(),
        ErrorKind::TypeMismatch
    );
}

#[test]
fn test_deep_copy_is_independent() {
    let original = sjson!({ {"list", {1, 2, 3}} });
    let mut copy = original.clone();
    copy["list"][0] = Node::from(100);
    copy["extra"] = Node::from(true);

    assert_eq!(original["list"][0], Node::from(1));
    assert!(!original.contains_key("extra"));
}

#[test]
fn test_string_escaping_round_trip() {
    let doc = sjson!([
        "quote \" backslash \\ slash /",
        "lines\nand\ttabs\r",
        "unicode héllo ✓",
    ]);
    let text = doc.render("");
    assert_eq!(
        text,
        r#"["quote \" backslash \\ slash /","lines\nand\ttabs\r","unicode héllo ✓"]"#
    );
    assert_eq!(Node::parse(&text).unwrap(), doc);
}

#[test]
fn test_untyped_and_non_finite_rendering() {
    let doc = Node::from_values([Node::new(), Node::from(f64::NAN), Node::from(f64::INFINITY)]);
    assert_eq!(doc.render(""), "[unknown,null,null]");
}

#[test]
fn test_serde_nested_struct() {
    let order = sample_order();
    let text = to_string(&order).unwrap();
    let order_back: Order = from_str(&text).unwrap();
    assert_eq!(order, order_back);

    let pretty = to_string_pretty(&order).unwrap();
    let order_back: Order = from_str(&pretty).unwrap();
    assert_eq!(order, order_back);
}

#[test]
fn test_serde_output_matches_serde_json() {
    let order = sample_order();
    let ours: serde_json::Value = serde_json::from_str(&to_string(&order).unwrap()).unwrap();
    let theirs = serde_json::to_value(&order).unwrap();
    assert_eq!(ours, theirs);
}

#[test]
fn test_serde_json_output_decodes() {
    let order = sample_order();
    let text = serde_json::to_string_pretty(&order).unwrap();
    let order_back: Order = from_str(&text).unwrap();
    assert_eq!(order, order_back);
}

#[test]
fn test_to_value_and_node_serialize() {
    let node = to_value(&sample_order()).unwrap();
    assert_eq!(node["customer"]["name"].to_str().unwrap(), "Alice");
    assert_eq!(node["items"][1]["price"].to_double().unwrap(), 10.0);

    let json = serde_json::to_value(&node).unwrap();
    assert_eq!(json["items"][0]["sku"], "WIDGET-001");
}

#[test]
fn test_decoder_errors() {
    let cases = ["", "[1, 2", "{\"a\": }", "[1,]", "nul", "\"\\u0041\"", "1 2"];
    for case in cases {
        match Node::parse(case) {
            Err(Error::Syntax { line, col, .. }) => {
                assert!(line >= 1);
                assert!(col >= 1);
            }
            other => panic!("{:?} should fail with a syntax error, got {:?}", case, other),
        }
    }
}

#[test]
fn test_custom_indent_unit() {
    let doc = sjson!([[1]]);
    assert_eq!(
        doc.render_with(&RenderOptions::new().with_indent("    ")),
        "[\n    [\n        1\n    ]\n]"
    );
}
