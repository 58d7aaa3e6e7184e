//! Named-operation dispatch for outbound patterns.
//!
//! Types opt in by implementing [`Invocable`] with a static table of the
//! operations a pattern may call:
//!
//! ```
//! use strobj::{ArgType, Invocable, Operation};
//!
//! struct User {
//!     username: String,
//! }
//!
//! impl Invocable for User {
//!     const OPERATIONS: &'static [Operation<Self>] = &[
//!         Operation::constructor("initWithUsername:", &[ArgType::String], |args| {
//!             Ok(User { username: args.string(0)?.to_string() })
//!         }),
//!         Operation::method("setUsername:", &[ArgType::String], |user, args| {
//!             user.username = args.string(0)?.to_string();
//!             Ok(None)
//!         }),
//!     ];
//! }
//!
//! assert!(User::operation("initWithUsername:").is_some());
//! ```

use crate::coerce::ArgType;
use strobj_keypath::Value;
use thiserror::Error;

/// Operations whose name starts with this prefix construct a new instance.
pub const CONSTRUCTION_PREFIX: &str = "init";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvocationError {
    #[error("no operation named '{0}'")]
    UnknownOperation(String),
    #[error("operation '{operation}' takes {expected} arguments, got {got}")]
    ArityMismatch {
        operation: String,
        expected: usize,
        got: usize,
    },
    #[error("operation '{operation}' cannot be invoked on {receiver}")]
    WrongReceiver {
        operation: String,
        receiver: &'static str,
    },
    #[error("argument {index} is missing or not a {expected}")]
    BadArgument {
        index: usize,
        expected: &'static str,
    },
    #[error("{0}")]
    Failed(String),
}

/// Coerced arguments handed to an operation, in parameter order.
#[derive(Debug, Clone, PartialEq)]
pub struct Args(Vec<Value>);

impl Args {
    pub fn new(values: Vec<Value>) -> Self {
        Self(values)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<&Value, InvocationError> {
        self.0.get(index).ok_or(InvocationError::BadArgument {
            index,
            expected: "value",
        })
    }

    pub fn string(&self, index: usize) -> Result<&str, InvocationError> {
        self.get(index)?
            .as_str()
            .ok_or(InvocationError::BadArgument {
                index,
                expected: "string",
            })
    }

    pub fn int(&self, index: usize) -> Result<i64, InvocationError> {
        self.get(index)?
            .as_i64()
            .ok_or(InvocationError::BadArgument {
                index,
                expected: "int",
            })
    }

    pub fn uint(&self, index: usize) -> Result<u64, InvocationError> {
        self.get(index)?
            .as_u64()
            .ok_or(InvocationError::BadArgument {
                index,
                expected: "uint",
            })
    }

    pub fn float(&self, index: usize) -> Result<f64, InvocationError> {
        self.get(index)?
            .as_f64()
            .ok_or(InvocationError::BadArgument {
                index,
                expected: "float",
            })
    }

    pub fn bool(&self, index: usize) -> Result<bool, InvocationError> {
        self.get(index)?
            .as_bool()
            .ok_or(InvocationError::BadArgument {
                index,
                expected: "bool",
            })
    }

    pub fn into_vec(self) -> Vec<Value> {
        self.0
    }
}

pub type Constructor<T> = fn(Args) -> Result<T, InvocationError>;
pub type Static = fn(Args) -> Result<Option<Value>, InvocationError>;
pub type Method<T> = fn(&mut T, Args) -> Result<Option<Value>, InvocationError>;

pub enum Dispatch<T> {
    /// Builds a new `T`; reached from [`Target::Type`] with an `init...` name.
    Constructor(Constructor<T>),
    /// Type-level operation; reached from [`Target::Type`].
    Static(Static),
    /// Instance operation; reached from [`Target::Instance`].
    Method(Method<T>),
}

/// One entry of a type's operation table.
pub struct Operation<T> {
    pub name: &'static str,
    pub params: &'static [ArgType],
    pub dispatch: Dispatch<T>,
}

impl<T> Operation<T> {
    pub const fn constructor(
        name: &'static str,
        params: &'static [ArgType],
        f: Constructor<T>,
    ) -> Self {
        Self {
            name,
            params,
            dispatch: Dispatch::Constructor(f),
        }
    }

    pub const fn static_fn(name: &'static str, params: &'static [ArgType], f: Static) -> Self {
        Self {
            name,
            params,
            dispatch: Dispatch::Static(f),
        }
    }

    pub const fn method(name: &'static str, params: &'static [ArgType], f: Method<T>) -> Self {
        Self {
            name,
            params,
            dispatch: Dispatch::Method(f),
        }
    }

    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

/// Types whose operations can be called by name.
pub trait Invocable: Sized + 'static {
    const OPERATIONS: &'static [Operation<Self>];

    fn operation(name: &str) -> Option<&'static Operation<Self>> {
        Self::OPERATIONS.iter().find(|op| op.name == name)
    }
}

/// What an outbound pattern is bound against.
pub enum Target<'a, T> {
    /// The type itself: constructors and static operations.
    Type,
    /// An existing value: instance operations.
    Instance(&'a mut T),
}

impl<T> Target<'_, T> {
    fn describe(&self) -> &'static str {
        match self {
            Target::Type => "a type",
            Target::Instance(_) => "an instance",
        }
    }
}

/// Outcome of a successful bind.
#[derive(Debug, PartialEq)]
pub enum Bound<T> {
    /// A new instance built by a constructor.
    Constructed(T),
    /// Whatever a static or instance operation returned; `None` for
    /// operations with no result.
    Returned(Option<Value>),
}

impl<T> Bound<T> {
    pub fn constructed(self) -> Option<T> {
        match self {
            Bound::Constructed(value) => Some(value),
            Bound::Returned(_) => None,
        }
    }

    pub fn returned(self) -> Option<Value> {
        match self {
            Bound::Constructed(_) => None,
            Bound::Returned(value) => value,
        }
    }
}

pub fn is_construction(name: &str) -> bool {
    name.starts_with(CONSTRUCTION_PREFIX)
}

/// Calls `op` on `target` with already-coerced arguments.
pub(crate) fn invoke<T: Invocable>(
    op: &Operation<T>,
    target: Target<'_, T>,
    args: Args,
) -> Result<Bound<T>, InvocationError> {
    if op.arity() != args.len() {
        return Err(InvocationError::ArityMismatch {
            operation: op.name.to_string(),
            expected: op.arity(),
            got: args.len(),
        });
    }

    match (target, &op.dispatch) {
        (Target::Type, Dispatch::Constructor(f)) if is_construction(op.name) => {
            f(args).map(Bound::Constructed)
        }
        (Target::Type, Dispatch::Static(f)) => f(args).map(Bound::Returned),
        (Target::Instance(obj), Dispatch::Method(f)) => f(obj, args).map(Bound::Returned),
        (target, _) => Err(InvocationError::WrongReceiver {
            operation: op.name.to_string(),
            receiver: target.describe(),
        }),
    }
}
