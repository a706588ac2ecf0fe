//! The [`QueryType`] behavior tuple and the registry mapping query
//! numbers to implementations.

use std::any::Any;

use indexmap::IndexMap;
use layover_catalog::Database;
use layover_core::{ArgumentError, ExecuteError, QueryTypeId};

use crate::args::QueryArgs;
use crate::instance::QueryInstance;
use crate::queries::{AirportDelays, EntityLookup, HotelRevenue};
use crate::writer::QueryWriter;

/// Type-erased statistics shared by every instance in one partition.
///
/// Produced once by [`QueryType::generate_statistics`] and downcast by
/// the same type's `execute`; no other code inspects it.
pub type Statistics = Box<dyn Any>;

/// The behaviors that make up one registered query type.
///
/// Statistics generation is optional: identity-style queries answer
/// straight from the catalog and keep the default `None`, which skips
/// the pass entirely.
pub trait QueryType {
    /// Parse the instance's textual arguments into an owned payload.
    fn parse_arguments(&self, args: &[&str]) -> Result<Box<dyn QueryArgs>, ArgumentError>;

    /// One catalog pass over the whole same-type partition.
    ///
    /// `instances` lets the pass restrict itself to the data the
    /// partition's arguments actually mention.
    fn generate_statistics(
        &self,
        database: &Database,
        instances: &[QueryInstance],
    ) -> Option<Statistics> {
        let _ = (database, instances);
        None
    }

    /// Answer one instance, writing its output objects to `output`.
    fn execute(
        &self,
        database: &Database,
        statistics: Option<&Statistics>,
        instance: &QueryInstance,
        output: &mut QueryWriter,
    ) -> Result<(), ExecuteError>;
}

/// Maps query numbers to their [`QueryType`] implementations.
///
/// Iteration order is registration order, which keeps diagnostics
/// stable.
#[derive(Default)]
pub struct QueryTypeRegistry {
    types: IndexMap<QueryTypeId, Box<dyn QueryType>>,
}

impl QueryTypeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with every reference query registered under its
    /// dataset number.
    pub fn with_builtin_queries() -> Self {
        let mut registry = Self::new();
        registry.register(QueryTypeId(1), Box::new(EntityLookup::new()));
        registry.register(QueryTypeId(7), Box::new(AirportDelays));
        registry.register(QueryTypeId(8), Box::new(HotelRevenue));
        registry
    }

    /// Register (or replace) the implementation for a query number.
    pub fn register(&mut self, id: QueryTypeId, query: Box<dyn QueryType>) {
        self.types.insert(id, query);
    }

    /// The implementation registered for `id`, if any.
    pub fn get(&self, id: QueryTypeId) -> Option<&dyn QueryType> {
        self.types.get(&id).map(Box::as_ref)
    }

    /// Parse one batch line into a ready-to-dispatch instance.
    ///
    /// `number_in_batch` is the instance's zero-based position in the
    /// batch, which doubles as its output-writer slot.
    pub fn parse(
        &self,
        id: QueryTypeId,
        number_in_batch: usize,
        args: &[&str],
    ) -> Result<QueryInstance, ArgumentError> {
        let query = self.get(id).ok_or_else(|| ArgumentError::Invalid {
            reason: format!("unknown query type {id}"),
        })?;
        let args = query.parse_arguments(args)?;
        Ok(QueryInstance::new(id, number_in_batch, args))
    }

    /// Registered query numbers, in registration order.
    pub fn ids(&self) -> impl Iterator<Item = QueryTypeId> + '_ {
        self.types.keys().copied()
    }
}

impl std::fmt::Debug for QueryTypeRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryTypeRegistry")
            .field("ids", &self.types.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_registry_knows_the_reference_queries() {
        let registry = QueryTypeRegistry::with_builtin_queries();
        let ids: Vec<_> = registry.ids().map(|id| id.0).collect();
        assert_eq!(ids, vec![1, 7, 8]);
    }

    #[test]
    fn parse_rejects_unknown_type() {
        let registry = QueryTypeRegistry::with_builtin_queries();
        let err = registry.parse(QueryTypeId(99), 0, &["x"]).unwrap_err();
        assert!(matches!(err, ArgumentError::Invalid { .. }));
    }

    #[test]
    fn parse_builds_an_instance_for_a_known_type() {
        let registry = QueryTypeRegistry::with_builtin_queries();
        let instance = registry.parse(QueryTypeId(7), 3, &["10"]).unwrap();
        assert_eq!(instance.type_id(), QueryTypeId(7));
        assert_eq!(instance.number_in_batch(), 3);
    }
}
