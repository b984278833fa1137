//! Integration tests for canonical serialization

use blockscript_parser::{
    BlockKind, Output, ParseErrorKind, Serializer, SerializerConfig, Statement, parse, serialize,
};

#[test]
fn serialize_minimal() {
    assert_eq!(serialize(&Statement::sum("1", "2")), r#"SUM "1" "2""#);
}

#[test]
fn serialize_omits_default_label() {
    let stmt = Statement::new(BlockKind::Subtract, "9", "4").with_output(Output::capture("D"));
    assert_eq!(serialize(&stmt), r#"SUBTRACT "9" "4" -> CAP "D""#);
}

#[test]
fn serialize_custom_label_and_disabled() {
    let stmt = Statement::sum("<X>", "6")
        .with_label("total")
        .unwrap()
        .with_output(Output::variable("Y"))
        .with_disabled(true);
    assert_eq!(serialize(&stmt), r#"!#total SUM "<X>" "6" -> VAR "Y""#);
}

#[test]
fn serialize_indent_and_disabled_flags() {
    let stmt = Statement::new(BlockKind::Multiply, "2", "3");
    let serializer = Serializer::default();
    assert_eq!(serializer.serialize(&stmt, true, false), r#"  MULTIPLY "2" "3""#);
    assert_eq!(serializer.serialize(&stmt, true, true), r#"  !MULTIPLY "2" "3""#);

    let wide = Serializer::new(SerializerConfig::default().with_indent_width(4));
    assert_eq!(wide.serialize(&stmt, true, false), r#"    MULTIPLY "2" "3""#);
}

#[test]
fn serialize_normalizes_source_text() {
    let stmt = parse(r#"  #Sum   sum"1"   "2"->var "Y""#).unwrap();
    assert_eq!(serialize(&stmt), r#"SUM "1" "2" -> VAR "Y""#);
}

#[test]
fn serialized_text_reparses() {
    let stmt = Statement::new(BlockKind::Multiply, "<L[-1]>", " spaced ")
        .with_label("m1")
        .unwrap()
        .with_output(Output::capture("OUT"));
    assert_eq!(parse(&serialize(&stmt)).unwrap(), stmt);
}

#[test]
fn labels_that_cannot_read_back_are_refused() {
    for label in ["my label", "", "#x"] {
        let result = Statement::sum("1", "2").with_label(label);
        assert_eq!(result, Err(ParseErrorKind::InvalidLabel(label.to_string())));
    }
}

#[test]
fn doubled_marker_does_not_parse_as_label() {
    let err = parse(r#"##x SUM "1" "2""#).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::InvalidLabel("#x".to_string()));
}

#[test]
fn label_set_directly_still_serializes_to_parseable_text() {
    let mut stmt = Statement::sum("1", "2").with_output(Output::variable("Y"));
    stmt.label = "my label".to_string();
    let reparsed = parse(&serialize(&stmt)).unwrap();
    assert_eq!(reparsed.operands, stmt.operands);
    assert_eq!(reparsed.output, stmt.output);
    assert!(reparsed.has_default_label());
}
