//! Context conditions for gated tables.

use std::sync::Arc;

use crate::error::{TableError, TableResult};

type Predicate<C> = Arc<dyn Fn(&C) -> TableResult<bool> + Send + Sync>;

/// An ordered set of predicates a context must satisfy.
pub struct Conditions<C> {
    predicates: Vec<Predicate<C>>,
}

impl<C> Conditions<C> {
    /// Create an empty condition set, which accepts every context.
    pub fn new() -> Self {
        Self {
            predicates: Vec::new(),
        }
    }

    /// Add an infallible predicate.
    pub fn push(&mut self, predicate: impl Fn(&C) -> bool + Send + Sync + 'static) {
        self.predicates
            .push(Arc::new(move |context: &C| -> TableResult<bool> {
                Ok(predicate(context))
            }));
    }

    /// Add a predicate that may fail; its error message surfaces as
    /// [`TableError::Condition`].
    pub fn push_fallible<E>(
        &mut self,
        predicate: impl Fn(&C) -> Result<bool, E> + Send + Sync + 'static,
    ) where
        E: std::fmt::Display,
    {
        self.predicates
            .push(Arc::new(move |context: &C| -> TableResult<bool> {
                predicate(context).map_err(|e| TableError::Condition(e.to_string()))
            }));
    }

    /// Number of predicates.
    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    /// Returns true if no predicates are registered.
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Check the context against every predicate in order, stopping at the
    /// first rejection or failure.
    pub fn validate(&self, context: &C) -> TableResult<bool> {
        for predicate in &self.predicates {
            if !predicate(context)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

impl<C> Default for Conditions<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Clone for Conditions<C> {
    fn clone(&self) -> Self {
        Self {
            predicates: self.predicates.clone(),
        }
    }
}

impl<C> std::fmt::Debug for Conditions<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Conditions")
            .field("count", &self.predicates.len())
            .finish()
    }
}

/// Tables gated by conditions over a context of type `C`.
pub trait Conditional<C> {
    /// The table's conditions.
    fn conditions(&self) -> &Conditions<C>;

    /// Mutable access to the table's conditions.
    fn conditions_mut(&mut self) -> &mut Conditions<C>;

    /// Require the context to satisfy `predicate` before the table samples.
    fn add_condition(&mut self, predicate: impl Fn(&C) -> bool + Send + Sync + 'static) {
        self.conditions_mut().push(predicate);
    }

    /// Require the context to satisfy a predicate that may fail.
    fn add_fallible_condition<E>(
        &mut self,
        predicate: impl Fn(&C) -> Result<bool, E> + Send + Sync + 'static,
    ) where
        E: std::fmt::Display,
    {
        self.conditions_mut().push_fallible(predicate);
    }

    /// Returns true if every condition accepts the context.
    fn validate(&self, context: &C) -> TableResult<bool> {
        self.conditions().validate(context)
    }

    /// Number of registered conditions.
    fn condition_count(&self) -> usize {
        self.conditions().len()
    }
}
