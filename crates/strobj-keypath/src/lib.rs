//! Key-path parser and evaluator for strobj templates.
//!
//! A key path names a value reachable from an object through a chain of
//! keys, optionally ending in a collection operator:
//!
//! - Keys: `owner`, `repo.name`, `user.profile.login`
//! - Arrays map over their elements: `repos.name` is the array of every
//!   repo's name
//! - Collection operators: `@count`, `@sum`, `@avg`, `@min`, `@max`,
//!   `@unionOfObjects`, `@distinctUnionOfObjects`. The path after the
//!   operator is applied to each element before aggregating:
//!   `repos.@sum.stars`, `tags.@count`
//!
//! Objects take part through the [`KeyValue`] capability, so any type that
//! can answer `value_for_key` can be resolved against.
//!
//! # Example
//!
//! ```
//! use strobj_keypath::{resolve, KeyPath, Value};
//! use std::collections::BTreeMap;
//!
//! let mut repo = BTreeMap::new();
//! repo.insert("owner".to_string(), Value::from("jverkoey"));
//! repo.insert("stars".to_string(), Value::from(42));
//!
//! let path = KeyPath::parse("owner").unwrap();
//! assert_eq!(resolve(&repo, &path).unwrap(), Value::from("jverkoey"));
//! ```

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use winnow::combinator::{alt, preceded, separated};
use winnow::prelude::*;
use winnow::token::{one_of, take_while};

// ============ Object Model ============

/// Capability for objects that expose named values to key paths.
pub trait KeyValue: Send + Sync {
    /// Returns the value stored under `key`, or `None` when the object has
    /// no such key.
    fn value_for_key(&self, key: &str) -> Option<Value>;

    /// Text used when the object itself is rendered.
    fn description(&self) -> String {
        "<object>".to_string()
    }
}

impl KeyValue for BTreeMap<String, Value> {
    fn value_for_key(&self, key: &str) -> Option<Value> {
        self.get(key).cloned()
    }

    fn description(&self) -> String {
        describe_map(self.iter())
    }
}

impl KeyValue for HashMap<String, Value> {
    fn value_for_key(&self, key: &str) -> Option<Value> {
        self.get(key).cloned()
    }

    fn description(&self) -> String {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by_key(|(k, _)| *k);
        describe_map(entries.into_iter())
    }
}

impl KeyValue for Value {
    fn value_for_key(&self, key: &str) -> Option<Value> {
        match self {
            Value::Map(map) => map.get(key).cloned(),
            Value::Object(obj) => obj.value_for_key(key),
            _ => None,
        }
    }

    fn description(&self) -> String {
        self.to_string()
    }
}

fn describe_map<'a>(entries: impl Iterator<Item = (&'a String, &'a Value)>) -> String {
    let body: Vec<String> = entries.map(|(k, v)| format!("{}={}", k, v)).collect();
    format!("{{{}}}", body.join(","))
}

// ============ Value Types ============

#[derive(Clone)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Char(char),
    String(String),
    Array(Vec<Value>),
    Map(BTreeMap<String, Value>),
    Object(Arc<dyn KeyValue>),
}

impl Value {
    pub fn object(obj: impl KeyValue + 'static) -> Self {
        Value::Object(Arc::new(obj))
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::UInt(_) => "uint",
            Value::Float(_) => "float",
            Value::Char(_) => "char",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Map(_) => "map",
            Value::Object(_) => "object",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            Value::UInt(n) => i64::try_from(*n).ok(),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Value::UInt(n) => Some(*n),
            Value::Int(n) => u64::try_from(*n).ok(),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(n) => Some(*n),
            Value::Int(n) => Some(*n as f64),
            Value::UInt(n) => Some(*n as f64),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    fn is_number(&self) -> bool {
        matches!(self, Value::Int(_) | Value::UInt(_) | Value::Float(_))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(n) => write!(f, "{}", n),
            Value::UInt(n) => write!(f, "{}", n),
            Value::Float(n) => write!(f, "{}", n),
            Value::Char(c) => write!(f, "{}", c),
            Value::String(s) => f.write_str(s),
            Value::Array(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}", item)?;
                }
                Ok(())
            }
            Value::Map(map) => f.write_str(&describe_map(map.iter())),
            Value::Object(obj) => f.write_str(&obj.description()),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("Null"),
            Value::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Value::Int(n) => f.debug_tuple("Int").field(n).finish(),
            Value::UInt(n) => f.debug_tuple("UInt").field(n).finish(),
            Value::Float(n) => f.debug_tuple("Float").field(n).finish(),
            Value::Char(c) => f.debug_tuple("Char").field(c).finish(),
            Value::String(s) => f.debug_tuple("String").field(s).finish(),
            Value::Array(items) => f.debug_tuple("Array").field(items).finish(),
            Value::Map(map) => f.debug_tuple("Map").field(map).finish(),
            Value::Object(obj) => f.debug_tuple("Object").field(&obj.description()).finish(),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Char(a), Value::Char(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b)),
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::UInt(a), Value::UInt(b)) => a == b,
            (Value::Int(_), Value::UInt(_)) | (Value::UInt(_), Value::Int(_)) => {
                self.as_i64().is_some() && self.as_i64() == other.as_i64()
            }
            (a, b) if a.is_number() && b.is_number() => a.as_f64() == b.as_f64(),
            _ => false,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n.into())
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::UInt(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Value::Char(c)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Array(items.into_iter().map(Into::into).collect())
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(map: BTreeMap<String, Value>) -> Self {
        Value::Map(map)
    }
}

// ============ AST Types ============

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Count,
    Sum,
    Avg,
    Min,
    Max,
    UnionOfObjects,
    DistinctUnionOfObjects,
}

impl Operator {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "count" => Some(Operator::Count),
            "sum" => Some(Operator::Sum),
            "avg" => Some(Operator::Avg),
            "min" => Some(Operator::Min),
            "max" => Some(Operator::Max),
            "unionOfObjects" => Some(Operator::UnionOfObjects),
            "distinctUnionOfObjects" => Some(Operator::DistinctUnionOfObjects),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Component {
    Key(String),
    Operator(Operator),
}

/// A parsed key path.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyPath {
    source: String,
    components: Vec<Component>,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ResolutionError {
    #[error("invalid key path '{path}': {message}")]
    Syntax { path: String, message: String },
    #[error("unknown collection operator '@{0}'")]
    UnknownOperator(String),
    #[error("key not found: {0}")]
    UnknownKey(String),
    #[error("cannot read key '{key}' from a {got}")]
    NotAnObject { key: String, got: &'static str },
    #[error("operator {operator:?} needs a collection, got {got}")]
    OperatorNeedsCollection {
        operator: Operator,
        got: &'static str,
    },
    #[error("type error: expected {expected}, got {got}")]
    TypeError {
        expected: &'static str,
        got: &'static str,
    },
}

// ============ Parser ============

fn ident(input: &mut &str) -> ModalResult<String> {
    let first: char = one_of(|c: char| c.is_ascii_alphabetic() || c == '_').parse_next(input)?;
    let rest: &str =
        take_while(0.., |c: char| c.is_ascii_alphanumeric() || c == '_').parse_next(input)?;
    Ok(format!("{}{}", first, rest))
}

enum RawComponent {
    Key(String),
    Operator(String),
}

fn component(input: &mut &str) -> ModalResult<RawComponent> {
    alt((
        preceded('@', ident).map(RawComponent::Operator),
        ident.map(RawComponent::Key),
    ))
    .parse_next(input)
}

fn key_path(input: &mut &str) -> ModalResult<Vec<RawComponent>> {
    separated(1.., component, '.').parse_next(input)
}

impl KeyPath {
    pub fn parse(text: &str) -> Result<Self, ResolutionError> {
        let mut input = text.trim();
        let raw = key_path.parse_next(&mut input).map_err(|e| ResolutionError::Syntax {
            path: text.to_string(),
            message: format!("{:?}", e),
        })?;
        if !input.is_empty() {
            return Err(ResolutionError::Syntax {
                path: text.to_string(),
                message: format!("unexpected trailing input: {:?}", input),
            });
        }

        let components = raw
            .into_iter()
            .map(|c| match c {
                RawComponent::Key(k) => Ok(Component::Key(k)),
                RawComponent::Operator(name) => Operator::from_name(&name)
                    .map(Component::Operator)
                    .ok_or(ResolutionError::UnknownOperator(name)),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            source: text.trim().to_string(),
            components,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

// ============ Evaluator ============

/// Resolves `path` against an object.
pub fn resolve(object: &dyn KeyValue, path: &KeyPath) -> Result<Value, ResolutionError> {
    tracing::trace!(path = %path, "resolving key path");
    match path.components.split_first() {
        Some((Component::Key(key), rest)) => {
            let first = object
                .value_for_key(key)
                .ok_or_else(|| ResolutionError::UnknownKey(key.clone()))?;
            walk(first, rest)
        }
        Some((Component::Operator(op), _)) => Err(ResolutionError::OperatorNeedsCollection {
            operator: *op,
            got: "object",
        }),
        None => Err(ResolutionError::Syntax {
            path: String::new(),
            message: "empty key path".to_string(),
        }),
    }
}

/// Resolves `path` against a plain value; operators may lead when the value
/// is an array.
pub fn resolve_value(value: &Value, path: &KeyPath) -> Result<Value, ResolutionError> {
    walk(value.clone(), &path.components)
}

/// Parses and resolves in one step.
pub fn value_for_key_path(object: &dyn KeyValue, path: &str) -> Result<Value, ResolutionError> {
    resolve(object, &KeyPath::parse(path)?)
}

fn walk(current: Value, rest: &[Component]) -> Result<Value, ResolutionError> {
    match rest.split_first() {
        None => Ok(current),
        Some((Component::Key(key), tail)) => walk(get(&current, key)?, tail),
        Some((Component::Operator(op), tail)) => aggregate(*op, &current, tail),
    }
}

fn get(value: &Value, key: &str) -> Result<Value, ResolutionError> {
    match value {
        Value::Map(map) => map
            .get(key)
            .cloned()
            .ok_or_else(|| ResolutionError::UnknownKey(key.to_string())),
        Value::Object(obj) => obj
            .value_for_key(key)
            .ok_or_else(|| ResolutionError::UnknownKey(key.to_string())),
        Value::Array(items) => {
            let mapped: Result<Vec<_>, _> = items.iter().map(|item| get(item, key)).collect();
            Ok(Value::Array(mapped?))
        }
        other => Err(ResolutionError::NotAnObject {
            key: key.to_string(),
            got: other.type_name(),
        }),
    }
}

fn aggregate(op: Operator, current: &Value, tail: &[Component]) -> Result<Value, ResolutionError> {
    let items = current
        .as_array()
        .ok_or(ResolutionError::OperatorNeedsCollection {
            operator: op,
            got: current.type_name(),
        })?;

    let values = || -> Result<Vec<Value>, ResolutionError> {
        items.iter().map(|item| walk(item.clone(), tail)).collect()
    };

    match op {
        Operator::Count => Ok(Value::Int(items.len() as i64)),
        Operator::Sum => sum(&values()?),
        Operator::Avg => {
            let values = values()?;
            if values.is_empty() {
                return Ok(Value::Float(0.0));
            }
            let total = sum(&values)?.as_f64().unwrap_or_default();
            Ok(Value::Float(total / values.len() as f64))
        }
        Operator::Min => extremum(values()?, std::cmp::Ordering::Less),
        Operator::Max => extremum(values()?, std::cmp::Ordering::Greater),
        Operator::UnionOfObjects => Ok(Value::Array(
            values()?.into_iter().filter(|v| !v.is_null()).collect(),
        )),
        Operator::DistinctUnionOfObjects => {
            let mut result: Vec<Value> = Vec::new();
            for value in values()? {
                if !value.is_null() && !result.contains(&value) {
                    result.push(value);
                }
            }
            Ok(Value::Array(result))
        }
    }
}

fn sum(values: &[Value]) -> Result<Value, ResolutionError> {
    let mut int_total: i64 = 0;
    let mut float_total = 0.0;
    let mut integral = true;

    for value in values {
        match value {
            Value::Null => {}
            Value::Int(n) if integral => match int_total.checked_add(*n) {
                Some(t) => int_total = t,
                None => {
                    integral = false;
                    float_total = int_total as f64 + *n as f64;
                }
            },
            v if v.is_number() => {
                let n = v.as_f64().unwrap_or_default();
                if integral {
                    integral = false;
                    float_total = int_total as f64;
                }
                float_total += n;
            }
            other => {
                return Err(ResolutionError::TypeError {
                    expected: "number",
                    got: other.type_name(),
                });
            }
        }
    }

    Ok(if integral {
        Value::Int(int_total)
    } else {
        Value::Float(float_total)
    })
}

fn extremum(values: Vec<Value>, keep: std::cmp::Ordering) -> Result<Value, ResolutionError> {
    let mut best: Option<Value> = None;
    for value in values.into_iter().filter(|v| !v.is_null()) {
        best = match best {
            None => Some(value),
            Some(current) => {
                if compare(&value, &current)? == keep {
                    Some(value)
                } else {
                    Some(current)
                }
            }
        };
    }
    Ok(best.unwrap_or(Value::Null))
}

fn compare(a: &Value, b: &Value) -> Result<std::cmp::Ordering, ResolutionError> {
    match (a, b) {
        (Value::String(x), Value::String(y)) => Ok(x.cmp(y)),
        (x, y) if x.is_number() && y.is_number() => {
            let (x, y) = (x.as_f64().unwrap_or_default(), y.as_f64().unwrap_or_default());
            Ok(x.partial_cmp(&y).unwrap_or(std::cmp::Ordering::Equal))
        }
        (x, _) => Err(ResolutionError::TypeError {
            expected: "number or string",
            got: x.type_name(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, Value)]) -> BTreeMap<String, Value> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    fn repos() -> BTreeMap<String, Value> {
        let repos = vec![
            Value::Map(map(&[("name", "sockit".into()), ("stars", 10.into())])),
            Value::Map(map(&[("name", "nimbus".into()), ("stars", 30.into())])),
            Value::Map(map(&[("name", "sockit".into()), ("stars", 2.into())])),
        ];
        map(&[("login", "jverkoey".into()), ("repos", Value::Array(repos))])
    }

    #[test]
    fn test_parse_dotted() {
        let path = KeyPath::parse("user.profile.login").unwrap();
        assert_eq!(
            path.components(),
            &[
                Component::Key("user".to_string()),
                Component::Key("profile".to_string()),
                Component::Key("login".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_operator() {
        let path = KeyPath::parse("repos.@sum.stars").unwrap();
        assert_eq!(path.components()[1], Component::Operator(Operator::Sum));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            KeyPath::parse(""),
            Err(ResolutionError::Syntax { .. })
        ));
        assert!(matches!(
            KeyPath::parse("a..b"),
            Err(ResolutionError::Syntax { .. })
        ));
        assert!(matches!(
            KeyPath::parse("a/b"),
            Err(ResolutionError::Syntax { .. })
        ));
        assert_eq!(
            KeyPath::parse("items.@median"),
            Err(ResolutionError::UnknownOperator("median".to_string()))
        );
    }

    #[test]
    fn test_simple_key() {
        let obj = repos();
        assert_eq!(value_for_key_path(&obj, "login").unwrap(), Value::from("jverkoey"));
    }

    #[test]
    fn test_nested_key() {
        let obj = map(&[("owner", Value::Map(map(&[("login", "jverkoey".into())])))]);
        assert_eq!(
            value_for_key_path(&obj, "owner.login").unwrap(),
            Value::from("jverkoey")
        );
    }

    #[test]
    fn test_unknown_key() {
        let obj = repos();
        assert_eq!(
            value_for_key_path(&obj, "missing"),
            Err(ResolutionError::UnknownKey("missing".to_string()))
        );
    }

    #[test]
    fn test_key_on_scalar() {
        let obj = repos();
        assert!(matches!(
            value_for_key_path(&obj, "login.length"),
            Err(ResolutionError::NotAnObject { got: "string", .. })
        ));
    }

    #[test]
    fn test_array_maps_keys() {
        let obj = repos();
        assert_eq!(
            value_for_key_path(&obj, "repos.name").unwrap(),
            Value::from(vec!["sockit", "nimbus", "sockit"])
        );
    }

    #[test]
    fn test_collection_operators() {
        let obj = repos();
        assert_eq!(value_for_key_path(&obj, "repos.@count").unwrap(), Value::Int(3));
        assert_eq!(value_for_key_path(&obj, "repos.@sum.stars").unwrap(), Value::Int(42));
        assert_eq!(value_for_key_path(&obj, "repos.@avg.stars").unwrap(), Value::Float(14.0));
        assert_eq!(value_for_key_path(&obj, "repos.@min.stars").unwrap(), Value::Int(2));
        assert_eq!(value_for_key_path(&obj, "repos.@max.name").unwrap(), Value::from("sockit"));
        assert_eq!(
            value_for_key_path(&obj, "repos.@distinctUnionOfObjects.name").unwrap(),
            Value::from(vec!["sockit", "nimbus"])
        );
        assert_eq!(
            value_for_key_path(&obj, "repos.@unionOfObjects.name").unwrap(),
            Value::from(vec!["sockit", "nimbus", "sockit"])
        );
    }

    #[test]
    fn test_operator_needs_collection() {
        let obj = repos();
        assert!(matches!(
            value_for_key_path(&obj, "login.@count"),
            Err(ResolutionError::OperatorNeedsCollection { .. })
        ));
    }

    #[test]
    fn test_operator_on_plain_array() {
        let numbers = Value::from(vec![1.5, 2.5]);
        let path = KeyPath::parse("@sum").unwrap();
        assert_eq!(resolve_value(&numbers, &path).unwrap(), Value::Float(4.0));
    }

    #[test]
    fn test_operators_without_path() {
        let obj = map(&[("n", Value::from(vec![1, 2, 2]))]);
        assert_eq!(value_for_key_path(&obj, "n.@sum").unwrap(), Value::Int(5));
        assert_eq!(value_for_key_path(&obj, "n.@min").unwrap(), Value::Int(1));
        assert_eq!(value_for_key_path(&obj, "n.@max").unwrap(), Value::Int(2));
        assert_eq!(
            value_for_key_path(&obj, "n.@distinctUnionOfObjects").unwrap(),
            Value::from(vec![1, 2])
        );
        let avg = value_for_key_path(&obj, "n.@avg").unwrap().as_f64().unwrap();
        assert!((avg - 5.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_aggregates() {
        let obj = map(&[("items", Value::Array(vec![]))]);
        assert_eq!(value_for_key_path(&obj, "items.@sum").unwrap(), Value::Int(0));
        assert_eq!(value_for_key_path(&obj, "items.@max").unwrap(), Value::Null);
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::from(42).to_string(), "42");
        assert_eq!(Value::from(-7).to_string(), "-7");
        assert_eq!(Value::from(1.5).to_string(), "1.5");
        assert_eq!(Value::from(3.0).to_string(), "3");
        assert_eq!(Value::from("sockit").to_string(), "sockit");
        assert_eq!(Value::from(true).to_string(), "true");
        assert_eq!(Value::Null.to_string(), "");
        assert_eq!(Value::from(vec![1, 2, 3]).to_string(), "1,2,3");
    }

    #[test]
    fn test_numeric_equality() {
        assert_eq!(Value::Int(3), Value::UInt(3));
        assert_eq!(Value::Int(3), Value::Float(3.0));
        assert_ne!(Value::Int(-1), Value::UInt(u64::MAX));
        assert_ne!(Value::from("3"), Value::Int(3));
    }

    struct User;

    impl KeyValue for User {
        fn value_for_key(&self, key: &str) -> Option<Value> {
            match key {
                "username" => Some(Value::from("jverkoey")),
                _ => None,
            }
        }
    }

    #[test]
    fn test_object_values() {
        let obj = map(&[("user", Value::object(User))]);
        assert_eq!(
            value_for_key_path(&obj, "user.username").unwrap(),
            Value::from("jverkoey")
        );
        assert_eq!(Value::object(User).to_string(), "<object>");
    }
}
