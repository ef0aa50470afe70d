//! Registry for managing processors.
//!
//! The `Registry` is a type-safe container for processor variants. It is
//! keyed by processor name and preserves registration order. Processors
//! are stateful, so mutable lookup is the workhorse: callers fetch a
//! processor with [`get_mut`](Registry::get_mut) and drive it in place.

use std::collections::HashMap;

use tracing::trace;

use crate::error::{RegistryError, RegistryResult};
use crate::processor::Processor;

/// A registry for managing processors.
///
/// # Example
///
/// ```rust
/// use procflow::{DataProcessor, Processor, Registry};
///
/// let mut registry: Registry<dyn Processor> = Registry::new();
/// registry.register(Box::new(DataProcessor::new("main")));
///
/// let processor = registry.get_mut("main").unwrap();
/// assert_eq!(processor.process(Some("hi")).unwrap(), "HI");
/// ```
#[derive(Debug)]
pub struct Registry<P: ?Sized> {
    processors: HashMap<String, Box<P>>,
    ordered: Vec<String>,
}

impl<P: Processor + ?Sized> Registry<P> {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            processors: HashMap::new(),
            ordered: Vec::new(),
        }
    }

    /// Register a processor.
    ///
    /// The processor is registered under its name. If a processor with the
    /// same name already exists, it is replaced; the original registration
    /// order is kept.
    pub fn register(&mut self, processor: Box<P>) {
        let name = processor.name().to_string();
        trace!(name = %name, "registering processor");
        if !self.processors.contains_key(&name) {
            self.ordered.push(name.clone());
        }
        self.processors.insert(name, processor);
    }

    /// Register a processor, rejecting duplicates and empty names.
    pub fn register_unique(&mut self, processor: Box<P>) -> RegistryResult<()> {
        let name = processor.name().to_string();
        if name.is_empty() {
            return Err(RegistryError::InvalidName(name));
        }
        if self.processors.contains_key(&name) {
            return Err(RegistryError::AlreadyRegistered(name));
        }
        trace!(name = %name, "registering processor");
        self.ordered.push(name.clone());
        self.processors.insert(name, processor);
        Ok(())
    }

    /// Get a processor by name.
    pub fn get(&self, name: &str) -> Option<&P> {
        self.processors.get(name).map(|p| p.as_ref())
    }

    /// Get a mutable processor by name.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut P> {
        self.processors.get_mut(name).map(|p| p.as_mut())
    }

    /// Check if a processor with the given name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.processors.contains_key(name)
    }

    /// Remove a processor by name, returning it if present.
    pub fn remove(&mut self, name: &str) -> Option<Box<P>> {
        self.ordered.retain(|n| n != name);
        let removed = self.processors.remove(name);
        if removed.is_some() {
            trace!(name = %name, "removed processor");
        }
        removed
    }

    /// Get the names of all registered processors, in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.ordered.iter().map(|s| s.as_str()).collect()
    }

    /// Get the number of registered processors.
    pub fn len(&self) -> usize {
        self.processors.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.processors.is_empty()
    }

    /// Clear all processors from the registry.
    pub fn clear(&mut self) {
        self.processors.clear();
        self.ordered.clear();
    }

    /// Iterate over all processors in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &P> {
        self.ordered
            .iter()
            .filter_map(move |name| self.processors.get(name))
            .map(|p| p.as_ref())
    }
}

impl<P: Processor + ?Sized> Default for Registry<P> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for creating registries with fluent API.
pub struct RegistryBuilder<P: ?Sized> {
    registry: Registry<P>,
}

impl<P: Processor + ?Sized> RegistryBuilder<P> {
    /// Create a new registry builder.
    pub fn new() -> Self {
        Self {
            registry: Registry::new(),
        }
    }

    /// Add a processor to the registry.
    pub fn with(mut self, processor: Box<P>) -> Self {
        self.registry.register(processor);
        self
    }

    /// Build the registry.
    pub fn build(self) -> Registry<P> {
        self.registry
    }
}

impl<P: Processor + ?Sized> Default for RegistryBuilder<P> {
    fn default() -> Self {
        Self::new()
    }
}
