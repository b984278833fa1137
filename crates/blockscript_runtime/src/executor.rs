//! Statement execution.
//!
//! Execution substitutes each operand, parses it as a base-10 `i64`, applies
//! the statement kind's operation, and writes the result. Every failure is
//! detected before the write, so a failed statement leaves the context as it
//! found it.

use blockscript_foundation::{ExecError, Value};
use blockscript_parser::{Output, Statement};

use crate::context::RuntimeContext;

/// What a successful execution computed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    /// Operand values after substitution, in declaration order.
    pub operands: Vec<i64>,
    /// The computed result.
    pub result: i64,
    /// Where the result was written, if anywhere.
    pub written: Option<Output>,
}

/// Executes `statement` against `context`.
///
/// A statement without an output clause is still evaluated and logged; it
/// only skips the write. The `disabled` flag is not consulted here.
///
/// # Errors
///
/// Returns [`ExecError::OperandNotInteger`] if an operand does not substitute
/// to an integer, [`ExecError::Overflow`] if the result does not fit, and
/// [`ExecError::ArityMismatch`] for a hand-built statement with the wrong
/// number of operands.
pub fn execute<C: RuntimeContext + ?Sized>(
    statement: &Statement,
    context: &mut C,
) -> Result<Outcome, ExecError> {
    let kind = statement.kind;
    if statement.operands.len() != kind.arity() {
        return Err(ExecError::ArityMismatch {
            operation: kind.name(),
            expected: kind.arity(),
            actual: statement.operands.len(),
        });
    }
    let operands = kind
        .operand_fields()
        .iter()
        .zip(&statement.operands)
        .map(|(&which, raw)| resolve_operand(context, which, raw))
        .collect::<Result<Vec<_>, _>>()?;

    let &[left, right] = operands.as_slice() else {
        return Err(ExecError::ArityMismatch {
            operation: kind.name(),
            expected: 2,
            actual: operands.len(),
        });
    };
    let result = kind.apply(left, right).ok_or(ExecError::Overflow {
        operation: kind.name(),
        symbol: kind.symbol(),
        left,
        right,
    })?;

    if let Some(output) = &statement.output {
        context.set(&output.name, Value::from(result), output.kind.is_capture());
    }

    let message = format!(
        "{}: {left} {} {right} = {result}",
        statement.label,
        kind.symbol()
    );
    log::info!("{message}");
    context.log(&message);

    Ok(Outcome {
        operands,
        result,
        written: statement.output.clone(),
    })
}

fn resolve_operand<C: RuntimeContext + ?Sized>(
    context: &C,
    which: &'static str,
    raw: &str,
) -> Result<i64, ExecError> {
    let substituted = context.substitute(raw);
    log::debug!("{which} operand {raw:?} -> {substituted:?}");
    substituted
        .parse::<i64>()
        .map_err(|_| ExecError::OperandNotInteger {
            which,
            raw: substituted,
        })
}
