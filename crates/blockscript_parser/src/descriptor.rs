//! Host-facing metadata for block kinds.
//!
//! A host application draws a configuration form for each block from these
//! tables: one [`FieldDescriptor`] per editable field, plus the block's
//! display name and palette entry. Nothing here affects parsing or execution.

/// The form control a host should draw for a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlKind {
    /// Free text input.
    TextBox,
    /// Boolean toggle.
    CheckBox,
    /// Fixed set of choices.
    Dropdown(&'static [&'static str]),
}

/// A validation rule a host applies before accepting a field value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Constraint {
    /// The field must not be empty.
    Required,
    /// The field must be an integer after variable substitution.
    IntegerAfterSubstitution,
    /// The field must not contain a quote character.
    NoQuotes,
    /// The field must contain no whitespace and must not start with `#`.
    LabelSyntax,
}

/// Metadata for one editable field of a block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Field identifier, as used in error messages.
    pub field: &'static str,
    /// Label shown next to the control.
    pub label: &'static str,
    /// Control type.
    pub control: ControlKind,
    /// Validation rules.
    pub constraints: &'static [Constraint],
}

impl FieldDescriptor {
    /// Returns true if the field carries the given constraint.
    #[must_use]
    pub fn requires(&self, constraint: Constraint) -> bool {
        self.constraints.contains(&constraint)
    }
}

/// Display metadata for a block kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockDescriptor {
    /// Name shown in the host's block palette.
    pub name: &'static str,
    /// Background color tag (`#RRGGBB`).
    pub color: &'static str,
    /// Whether the block's text should be drawn light on the background.
    pub light_foreground: bool,
    /// Editable fields in form order.
    pub fields: &'static [FieldDescriptor],
}

impl BlockDescriptor {
    /// Looks up a field by identifier.
    #[must_use]
    pub fn field(&self, field: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.field == field)
    }
}

/// Output kind choices offered by the form.
pub const OUTPUT_KINDS: &[&str] = &["VAR", "CAP"];

/// Form layout shared by the two-operand arithmetic blocks.
pub const ARITHMETIC_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor {
        field: "Label",
        label: "Label",
        control: ControlKind::TextBox,
        constraints: &[Constraint::Required, Constraint::LabelSyntax],
    },
    FieldDescriptor {
        field: "First",
        label: "First number",
        control: ControlKind::TextBox,
        constraints: &[
            Constraint::Required,
            Constraint::IntegerAfterSubstitution,
            Constraint::NoQuotes,
        ],
    },
    FieldDescriptor {
        field: "Second",
        label: "Second number",
        control: ControlKind::TextBox,
        constraints: &[
            Constraint::Required,
            Constraint::IntegerAfterSubstitution,
            Constraint::NoQuotes,
        ],
    },
    FieldDescriptor {
        field: "OutputKind",
        label: "Output type",
        control: ControlKind::Dropdown(OUTPUT_KINDS),
        constraints: &[],
    },
    FieldDescriptor {
        field: "OutputName",
        label: "Variable name",
        control: ControlKind::TextBox,
        constraints: &[Constraint::NoQuotes],
    },
    FieldDescriptor {
        field: "Disabled",
        label: "Disabled",
        control: ControlKind::CheckBox,
        constraints: &[],
    },
];

pub(crate) const SUM: BlockDescriptor = BlockDescriptor {
    name: "Sum",
    color: "#9ACD32",
    light_foreground: false,
    fields: ARITHMETIC_FIELDS,
};

pub(crate) const SUBTRACT: BlockDescriptor = BlockDescriptor {
    name: "Subtract",
    color: "#9ACD32",
    light_foreground: false,
    fields: ARITHMETIC_FIELDS,
};

pub(crate) const MULTIPLY: BlockDescriptor = BlockDescriptor {
    name: "Multiply",
    color: "#6B8E23",
    light_foreground: true,
    fields: ARITHMETIC_FIELDS,
};
