//! Binding conforming input to named operations.

use crate::coerce::{CoercionError, CoercionTable};
use crate::invoke::{invoke, Args, Bound, Invocable, InvocationError, Target};
use crate::pattern::{Mode, Pattern};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BindError {
    #[error("pattern '{0}' is inbound and names no operation")]
    WrongMode(String),
    #[error("input '{input}' does not conform to pattern '{template}'")]
    NonConformingInput { template: String, input: String },
    #[error("argument {position} of '{operation}' could not be coerced: {source}")]
    ArgumentCoercion {
        operation: String,
        position: usize,
        #[source]
        source: CoercionError,
    },
    #[error(transparent)]
    Invocation(#[from] InvocationError),
}

impl Pattern {
    /// Invokes this pattern's operation on `target` with the values
    /// extracted from `input`.
    ///
    /// With [`Target::Type`] and an `init...` operation, a new instance is
    /// constructed and returned as [`Bound::Constructed`].
    pub fn bind<T: Invocable>(
        &self,
        input: &str,
        target: Target<'_, T>,
    ) -> Result<Bound<T>, BindError> {
        self.bind_with_table(input, target, &CoercionTable::new())
    }

    pub fn bind_with_table<T: Invocable>(
        &self,
        input: &str,
        target: Target<'_, T>,
        table: &CoercionTable,
    ) -> Result<Bound<T>, BindError> {
        let operation = match (self.mode(), self.operation_name()) {
            (Mode::Outbound, Some(operation)) => operation,
            _ => return Err(BindError::WrongMode(self.template().to_string())),
        };
        self.dispatch(operation, input, target, table)
    }

    /// Like [`Pattern::bind`], but calls `operation` instead of the
    /// pattern's own. Works for inbound patterns too; the operation must
    /// take one argument per parameter.
    pub fn bind_operation<T: Invocable>(
        &self,
        operation: &str,
        input: &str,
        target: Target<'_, T>,
        table: &CoercionTable,
    ) -> Result<Bound<T>, BindError> {
        self.dispatch(operation, input, target, table)
    }

    #[tracing::instrument(level = "debug", skip(self, target, table), fields(template = self.template()))]
    fn dispatch<T: Invocable>(
        &self,
        operation: &str,
        input: &str,
        target: Target<'_, T>,
        table: &CoercionTable,
    ) -> Result<Bound<T>, BindError> {
        let values = self
            .extract(input)
            .ok_or_else(|| BindError::NonConformingInput {
                template: self.template().to_string(),
                input: input.to_string(),
            })?;

        let op = T::operation(operation)
            .ok_or_else(|| InvocationError::UnknownOperation(operation.to_string()))?;
        if op.arity() != values.len() {
            return Err(InvocationError::ArityMismatch {
                operation: operation.to_string(),
                expected: op.arity(),
                got: values.len(),
            }
            .into());
        }

        let args = values
            .iter()
            .zip(op.params)
            .enumerate()
            .map(|(position, (text, ty))| {
                table
                    .coerce(text, *ty)
                    .map_err(|source| BindError::ArgumentCoercion {
                        operation: operation.to_string(),
                        position,
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(arguments = args.len(), "dispatching operation");
        Ok(invoke(op, target, Args::new(args))?)
    }
}
