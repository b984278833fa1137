//! Property tests for parse/serialize agreement
//!
//! These use property-based testing to check that serialized statements
//! re-parse unchanged and that the parser never panics.

use blockscript_parser::cursor::is_valid_label;
use blockscript_parser::{BlockKind, Output, OutputKind, Statement, parse, serialize};
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

fn kind() -> impl Strategy<Value = BlockKind> {
    prop::sample::select(BlockKind::ALL.to_vec())
}

/// Literal text: anything without a quote or line break.
fn literal() -> impl Strategy<Value = String> {
    r#"[^"\r\n]{0,16}"#.prop_map(String::from)
}

fn output() -> impl Strategy<Value = Option<Output>> {
    let kind = prop_oneof![Just(OutputKind::Variable), Just(OutputKind::Capture)];
    prop::option::of(
        (kind, r#"[^"\r\n]{1,12}"#).prop_map(|(kind, name)| Output { kind, name }),
    )
}

/// Any label a host might type, readable or not.
fn any_label() -> impl Strategy<Value = String> {
    prop_oneof![
        "\\PC{0,12}".prop_map(String::from),
        "#?[a-z ]{0,6}".prop_map(String::from),
        "[^\\s#]\\S{0,10}".prop_map(String::from),
    ]
}

fn label() -> impl Strategy<Value = Option<String>> {
    prop::option::of("[^\\s#]\\S{0,10}".prop_map(String::from))
}

fn statement() -> impl Strategy<Value = Statement> {
    (kind(), literal(), literal(), label(), output(), any::<bool>()).prop_map(
        |(kind, first, second, label, output, disabled)| {
            let mut stmt = Statement::new(kind, first, second).with_disabled(disabled);
            if let Some(label) = label {
                stmt = stmt.with_label(label).expect("strategy yields readable labels");
            }
            if let Some(output) = output {
                stmt = stmt.with_output(output);
            }
            stmt
        },
    )
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn serialize_then_parse_is_identity(stmt in statement()) {
        let text = serialize(&stmt);
        prop_assert_eq!(parse(&text).unwrap(), stmt);
    }

    #[test]
    fn serialize_is_a_fixed_point(stmt in statement()) {
        let once = serialize(&stmt);
        let twice = serialize(&parse(&once).unwrap());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn parsed_operand_count_matches_arity(stmt in statement()) {
        let parsed = parse(&serialize(&stmt)).unwrap();
        prop_assert_eq!(parsed.operands.len(), parsed.kind.arity());
    }

    #[test]
    fn name_case_does_not_matter(stmt in statement()) {
        let text = serialize(&stmt);
        let lowered = text.replacen(stmt.kind.name(), &stmt.kind.name().to_lowercase(), 1);
        prop_assert_eq!(parse(&lowered).unwrap().kind, stmt.kind);
    }

    #[test]
    fn accepted_labels_read_back(
        stmt in statement(),
        label in any_label(),
    ) {
        match stmt.clone().with_label(label.clone()) {
            Ok(labelled) => {
                prop_assert!(is_valid_label(&label));
                prop_assert_eq!(parse(&serialize(&labelled)).unwrap(), labelled);
            }
            Err(_) => prop_assert!(!is_valid_label(&label)),
        }
    }

    #[test]
    fn serialized_statements_are_never_comments(stmt in statement(), label in any_label()) {
        let mut stmt = stmt;
        stmt.label = label;
        let text = serialize(&stmt);
        prop_assert!(!text.trim_start().starts_with("##"));
        let reparsed = parse(&text).unwrap();
        prop_assert_eq!(reparsed.operands, stmt.operands);
        prop_assert_eq!(reparsed.output, stmt.output);
    }

    #[test]
    fn parser_never_panics(input in "\\PC{0,200}") {
        let _ = parse(&input);
    }

    #[test]
    fn parser_never_panics_on_statement_like_input(
        parts in prop::collection::vec(
            prop_oneof![
                Just("SUM".to_string()),
                Just("MULTIPLY".to_string()),
                Just("\"".to_string()),
                Just("->".to_string()),
                Just("VAR".to_string()),
                Just("#".to_string()),
                Just("!".to_string()),
                Just(" ".to_string()),
                "[a-z0-9<>]{1,4}".prop_map(String::from),
            ],
            0..30,
        )
    ) {
        let _ = parse(&parts.concat());
    }
}

#[test]
fn missing_label_defaults_to_kind_name() {
    for kind in BlockKind::ALL {
        let text = serialize(&Statement::new(kind, "1", "2"));
        assert_eq!(parse(&text).unwrap().label, kind.default_label());
    }
}
