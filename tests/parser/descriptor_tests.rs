//! Integration tests for editor descriptors

use blockscript_parser::BlockKind;
use blockscript_parser::descriptor::{Constraint, ControlKind, OUTPUT_KINDS};

#[test]
fn every_kind_has_a_descriptor() {
    for kind in BlockKind::ALL {
        let descriptor = kind.descriptor();
        assert_eq!(descriptor.name, kind.default_label());
        assert!(descriptor.color.starts_with('#'));
        assert_eq!(descriptor.color.len(), 7);
    }
}

#[test]
fn sum_palette() {
    let sum = BlockKind::Sum.descriptor();
    assert_eq!(sum.name, "Sum");
    assert_eq!(sum.color, "#9ACD32");
    assert!(!sum.light_foreground);
}

#[test]
fn operand_fields_require_integers() {
    let sum = BlockKind::Sum.descriptor();
    for field in ["First", "Second"] {
        let descriptor = sum.field(field).unwrap();
        assert_eq!(descriptor.control, ControlKind::TextBox);
        assert!(descriptor.requires(Constraint::Required));
        assert!(descriptor.requires(Constraint::IntegerAfterSubstitution));
        assert!(descriptor.requires(Constraint::NoQuotes));
    }
}

#[test]
fn output_fields() {
    let sum = BlockKind::Sum.descriptor();
    assert_eq!(
        sum.field("OutputKind").unwrap().control,
        ControlKind::Dropdown(OUTPUT_KINDS)
    );
    let name = sum.field("OutputName").unwrap();
    assert!(!name.requires(Constraint::Required));
    assert_eq!(sum.field("Disabled").unwrap().control, ControlKind::CheckBox);
    assert!(sum.field("Nonexistent").is_none());
}

#[test]
fn label_field_carries_label_syntax() {
    let label = BlockKind::Multiply.descriptor().field("Label").unwrap();
    assert!(label.requires(Constraint::Required));
    assert!(label.requires(Constraint::LabelSyntax));
}
