//! Memoized pattern compilation.

use crate::pattern::{CompileError, Pattern};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Compiled patterns keyed by template text.
///
/// Create one where templates are reused (a router, a URL map) and drop it
/// when done; there is no global instance.
#[derive(Debug, Default)]
pub struct PatternCache {
    patterns: RwLock<HashMap<String, Arc<Pattern>>>,
}

impl PatternCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached pattern for `template`, compiling it on first use.
    /// Templates that fail to compile are not cached.
    pub fn get_or_compile(&self, template: &str) -> Result<Arc<Pattern>, CompileError> {
        if let Some(pattern) = self.patterns.read().get(template) {
            return Ok(Arc::clone(pattern));
        }

        let compiled = Arc::new(Pattern::new(template)?);
        let mut patterns = self.patterns.write();
        // Another thread may have compiled it meanwhile; keep the first.
        let pattern = patterns
            .entry(template.to_string())
            .or_insert(compiled);
        Ok(Arc::clone(pattern))
    }

    pub fn get(&self, template: &str) -> Option<Arc<Pattern>> {
        self.patterns.read().get(template).cloned()
    }

    pub fn len(&self) -> usize {
        self.patterns.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.read().is_empty()
    }

    pub fn clear(&self) {
        self.patterns.write().clear();
    }
}
