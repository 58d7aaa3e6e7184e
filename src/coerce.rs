//! Conversion of extracted text into typed operation arguments.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use strobj_keypath::Value;
use thiserror::Error;

/// Declared type of an operation parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgType {
    String,
    Int,
    UInt,
    Float,
    Bool,
    Char,
    /// A type converted by a function registered on the [`CoercionTable`].
    Named(&'static str),
}

impl ArgType {
    pub fn name(&self) -> &'static str {
        match self {
            ArgType::String => "string",
            ArgType::Int => "int",
            ArgType::UInt => "uint",
            ArgType::Float => "float",
            ArgType::Bool => "bool",
            ArgType::Char => "char",
            ArgType::Named(name) => *name,
        }
    }
}

impl fmt::Display for ArgType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoercionError {
    #[error("'{text}' is not a valid {expected}: {reason}")]
    Invalid {
        text: String,
        expected: ArgType,
        reason: String,
    },
    #[error("no conversion registered for type '{0}'")]
    UnknownType(&'static str),
}

type Converter = Arc<dyn Fn(&str) -> Result<Value, String> + Send + Sync>;

/// String-to-type conversion table used when binding arguments.
///
/// The built-in types are always available; [`ArgType::Named`] types need
/// a converter registered with [`CoercionTable::register`].
#[derive(Clone, Default)]
pub struct CoercionTable {
    custom: HashMap<&'static str, Converter>,
}

impl CoercionTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<F>(mut self, name: &'static str, converter: F) -> Self
    where
        F: Fn(&str) -> Result<Value, String> + Send + Sync + 'static,
    {
        self.custom.insert(name, Arc::new(converter));
        self
    }

    pub fn coerce(&self, text: &str, expected: ArgType) -> Result<Value, CoercionError> {
        let invalid = |reason: String| CoercionError::Invalid {
            text: text.to_string(),
            expected,
            reason,
        };

        match expected {
            ArgType::String => Ok(Value::String(text.to_string())),
            ArgType::Int => text
                .parse::<i64>()
                .map(Value::Int)
                .map_err(|e| invalid(e.to_string())),
            ArgType::UInt => text
                .parse::<u64>()
                .map(Value::UInt)
                .map_err(|e| invalid(e.to_string())),
            ArgType::Float => text
                .parse::<f64>()
                .map(Value::Float)
                .map_err(|e| invalid(e.to_string())),
            ArgType::Bool => parse_bool(text)
                .map(Value::Bool)
                .ok_or_else(|| invalid("expected true/false, yes/no or 1/0".to_string())),
            ArgType::Char => {
                let mut chars = text.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Ok(Value::Char(c)),
                    _ => Err(invalid("expected exactly one character".to_string())),
                }
            }
            ArgType::Named(name) => {
                let converter = self
                    .custom
                    .get(name)
                    .ok_or(CoercionError::UnknownType(name))?;
                converter(text).map_err(invalid)
            }
        }
    }
}

impl fmt::Debug for CoercionTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.custom.keys().collect();
        names.sort();
        f.debug_struct("CoercionTable")
            .field("custom", &names)
            .finish()
    }
}

fn parse_bool(text: &str) -> Option<bool> {
    match text.to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" => Some(true),
        "false" | "no" | "0" => Some(false),
        _ => None,
    }
}
