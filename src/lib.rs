//! String <-> object coding.
//!
//! A template mixes literal text with parenthesized parameters. Compiled
//! into a [`Pattern`], it works in two directions:
//!
//! - **Inbound**: parameters are key paths. [`Pattern::render`] reads them
//!   from an object and fills in the template.
//! - **Outbound**: parameters are operation keywords ending in `:`.
//!   [`Pattern::bind`] checks that a string conforms, extracts the values
//!   between the literals, coerces them to the operation's argument types and
//!   invokes the operation.
//!
//! # Example
//!
//! ```
//! use std::collections::BTreeMap;
//! use strobj::{Pattern, Value};
//!
//! let pattern = Pattern::new("api.example.com/repos/(owner)/(repo)/issues").unwrap();
//!
//! let mut repo = BTreeMap::new();
//! repo.insert("owner".to_string(), Value::from("jverkoey"));
//! repo.insert("repo".to_string(), Value::from("sockit"));
//!
//! let url = pattern.render(&repo).unwrap();
//! assert_eq!(url, "api.example.com/repos/jverkoey/sockit/issues");
//! assert_eq!(pattern.extract(&url), Some(vec!["jverkoey", "sockit"]));
//! assert!(!pattern.matches("api.example.com/repos/jverkoey"));
//! ```

pub mod bind;
pub mod cache;
pub mod coerce;
pub mod error;
pub mod invoke;
pub mod matcher;
pub mod pattern;
pub mod render;

pub use bind::BindError;
pub use cache::PatternCache;
pub use coerce::{ArgType, CoercionError, CoercionTable};
pub use error::{Error, Result};
pub use invoke::{Args, Bound, Dispatch, Invocable, InvocationError, Operation, Target};
pub use matcher::MatchResult;
pub use pattern::{compile, CompileError, Mode, Pattern, Segment};
pub use render::RenderError;
pub use strobj_keypath::{resolve, value_for_key_path, KeyPath, KeyValue, ResolutionError, Value};

/// Compiles `template` and renders it from `object` in one call.
pub fn render_template(template: &str, object: &dyn KeyValue) -> Result<String> {
    let pattern = Pattern::new(template)?;
    Ok(pattern.render(object)?)
}
