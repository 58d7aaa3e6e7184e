//! Rendering inbound patterns from an object's key paths.

use crate::pattern::{Mode, Pattern, Segment};
use strobj_keypath::{resolve, KeyValue, ResolutionError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("pattern '{0}' is outbound and cannot be rendered from an object")]
    WrongMode(String),
    #[error("failed to resolve '{key_path}': {source}")]
    Resolution {
        key_path: String,
        #[source]
        source: ResolutionError,
    },
}

impl Pattern {
    /// Replaces each parameter with the value its key path resolves to on
    /// `object`. Literal text is copied as is, without escaping.
    pub fn render(&self, object: &dyn KeyValue) -> Result<String, RenderError> {
        if self.mode() != Mode::Inbound {
            return Err(RenderError::WrongMode(self.template().to_string()));
        }

        let mut key_paths = self.parsed_key_paths().iter();
        let mut result = String::with_capacity(self.template().len());
        for segment in self.segments() {
            match segment {
                Segment::Literal(text) => result.push_str(text),
                Segment::Parameter(_) => {
                    // Inbound patterns carry one parsed key path per parameter.
                    let Some(key_path) = key_paths.next() else {
                        break;
                    };
                    let value = resolve(object, key_path).map_err(|source| {
                        RenderError::Resolution {
                            key_path: key_path.to_string(),
                            source,
                        }
                    })?;
                    result.push_str(&value.to_string());
                }
            }
        }

        tracing::trace!(template = self.template(), rendered = %result, "rendered pattern");
        Ok(result)
    }
}
