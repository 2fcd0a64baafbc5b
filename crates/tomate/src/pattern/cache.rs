use std::sync::Arc;

use ahash::AHashMap;
use smol_str::SmolStr;

use super::error::CompileError;
use super::parser::{CompiledPattern, compile_with};
use crate::compile_option::CompileOption;

/// Compile-once cache keyed by pattern text.
///
/// - O(1) lookup by source string (using ahash for speed)
/// - Entries are `Arc`-shared, so a cached pattern can be handed to other
///   threads while the cache keeps its own reference
/// - Failed compilations are not stored
#[derive(Debug, Default)]
pub struct PatternCache {
    patterns: AHashMap<SmolStr, Arc<CompiledPattern>>,
    option: CompileOption,
}

impl PatternCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_option(option: CompileOption) -> Self {
        Self {
            patterns: AHashMap::new(),
            option,
        }
    }

    pub fn get_or_compile(&mut self, pattern: &str) -> Result<Arc<CompiledPattern>, CompileError> {
        if let Some(compiled) = self.patterns.get(pattern) {
            return Ok(Arc::clone(compiled));
        }

        let compiled = Arc::new(compile_with(pattern, &self.option)?);
        self.patterns
            .insert(SmolStr::new(pattern), Arc::clone(&compiled));
        Ok(compiled)
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn clear(&mut self) {
        self.patterns.clear();
    }
}
