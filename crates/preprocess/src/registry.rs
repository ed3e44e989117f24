//! Source identifier → cleaner table.
//!
//! A [`Registry`] is assembled once and never mutated afterwards, so it can
//! be shared freely between threads. The built-in table is available through
//! [`registry()`]; hosts that need a different table build their own with
//! [`RegistryBuilder`] and pass it to [`crate::normalize_with`].

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, LazyLock};

use crate::error::RuleError;
use crate::rule::{RuleSet, TextCleaner};
use crate::sources;

/// Immutable mapping from source identifier to cleaner.
#[derive(Clone)]
pub struct Registry {
    cleaners: HashMap<String, Arc<dyn TextCleaner>>,
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Compiles every built-in rule set. Identifiers served by the same rule
    /// set share one compiled cleaner.
    pub fn builtin() -> Result<Self, RuleError> {
        let mut builder = Self::builder();
        for (identifiers, spec) in sources::builtin() {
            let cleaner: Arc<dyn TextCleaner> = Arc::new(RuleSet::compile(spec)?);
            for &source in identifiers {
                builder = builder.register_shared(source, Arc::clone(&cleaner))?;
            }
        }
        Ok(builder.build())
    }

    /// Exact, case-sensitive lookup.
    pub fn lookup(&self, source: &str) -> Option<&dyn TextCleaner> {
        self.cleaners.get(source).map(|cleaner| cleaner.as_ref())
    }

    pub fn contains(&self, source: &str) -> bool {
        self.cleaners.contains_key(source)
    }

    /// Registered identifiers in sorted order.
    pub fn sources(&self) -> Vec<&str> {
        let mut sources: Vec<&str> = self.cleaners.keys().map(String::as_str).collect();
        sources.sort_unstable();
        sources
    }

    pub fn len(&self) -> usize {
        self.cleaners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cleaners.is_empty()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("sources", &self.sources())
            .finish()
    }
}

/// Collects cleaners before freezing them into a [`Registry`].
#[derive(Default)]
pub struct RegistryBuilder {
    cleaners: HashMap<String, Arc<dyn TextCleaner>>,
}

impl RegistryBuilder {
    /// Registers `cleaner` under `source`.
    ///
    /// Fails on an empty (or all-whitespace) identifier and on an identifier
    /// that is already taken. Identifiers are stored verbatim.
    pub fn register<C>(self, source: impl Into<String>, cleaner: C) -> Result<Self, RuleError>
    where
        C: TextCleaner + 'static,
    {
        self.register_shared(source, Arc::new(cleaner))
    }

    /// Like [`register`](Self::register) for a cleaner that is already shared.
    pub fn register_shared(
        mut self,
        source: impl Into<String>,
        cleaner: Arc<dyn TextCleaner>,
    ) -> Result<Self, RuleError> {
        let source = source.into();
        if source.trim().is_empty() {
            return Err(RuleError::EmptySource);
        }
        if self.cleaners.contains_key(&source) {
            return Err(RuleError::DuplicateSource(source));
        }
        self.cleaners.insert(source, cleaner);
        Ok(self)
    }

    pub fn build(self) -> Registry {
        Registry {
            cleaners: self.cleaners,
        }
    }
}

static BUILTIN: LazyLock<Result<Registry, RuleError>> = LazyLock::new(Registry::builtin);

/// Process-wide built-in registry, compiled on first use.
///
/// The error is kept and handed out on every call rather than retried.
pub fn registry() -> Result<&'static Registry, &'static RuleError> {
    BUILTIN.as_ref()
}
