//! Query instances and the type-grouped instance list.

use layover_core::QueryTypeId;

use crate::args::QueryArgs;

/// One query to run: its type, its position in the batch, and its
/// parsed arguments.
///
/// `number_in_batch` identifies the instance's output slot and is
/// assigned from the batch file's order, so it survives the type-sort
/// the dispatcher performs.
#[derive(Clone, Debug)]
pub struct QueryInstance {
    type_id: QueryTypeId,
    number_in_batch: usize,
    args: Box<dyn QueryArgs>,
}

impl QueryInstance {
    /// Assemble an instance from parts. Argument parsing lives in
    /// [`QueryTypeRegistry::parse`](crate::QueryTypeRegistry::parse).
    pub fn new(type_id: QueryTypeId, number_in_batch: usize, args: Box<dyn QueryArgs>) -> Self {
        Self {
            type_id,
            number_in_batch,
            args,
        }
    }

    /// The query type this instance belongs to.
    pub fn type_id(&self) -> QueryTypeId {
        self.type_id
    }

    /// Zero-based position in the original batch.
    pub fn number_in_batch(&self) -> usize {
        self.number_in_batch
    }

    /// The type-erased argument payload.
    pub fn args(&self) -> &dyn QueryArgs {
        self.args.as_ref()
    }

    /// Downcast the argument payload to its concrete type.
    pub fn args_as<T: 'static>(&self) -> Option<&T> {
        self.args.as_ref().as_any().downcast_ref::<T>()
    }

    pub(crate) fn renumber(&mut self, number_in_batch: usize) {
        self.number_in_batch = number_in_batch;
    }
}

/// An ordered batch of query instances.
///
/// The dispatcher requires same-type instances to be contiguous;
/// [`group_by_type`](Self::group_by_type) establishes that order
/// (stable, so same-type instances keep their batch order).
#[derive(Clone, Debug, Default)]
pub struct QueryInstanceList {
    instances: Vec<QueryInstance>,
}

impl QueryInstanceList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an instance in batch order.
    pub fn push(&mut self, instance: QueryInstance) {
        self.instances.push(instance);
    }

    /// Number of instances in the batch.
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    /// Whether the batch is empty.
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Iterate the instances in their current order.
    pub fn iter(&self) -> impl Iterator<Item = &QueryInstance> {
        self.instances.iter()
    }

    /// Sort the batch so same-type instances are contiguous, keeping
    /// batch order within a type.
    pub fn group_by_type(&mut self) {
        self.instances
            .sort_by_key(|instance| (instance.type_id, instance.number_in_batch));
    }

    /// Maximal runs of same-type instances, in list order.
    ///
    /// Meaningful after [`group_by_type`](Self::group_by_type); before
    /// it, interleaved types produce more, shorter partitions.
    pub fn partitions(&self) -> impl Iterator<Item = &[QueryInstance]> {
        self.instances
            .chunk_by(|a, b| a.type_id == b.type_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instance(type_id: u32, number: usize) -> QueryInstance {
        QueryInstance::new(QueryTypeId(type_id), number, Box::new(()))
    }

    #[test]
    fn group_by_type_is_stable_within_a_type() {
        let mut list = QueryInstanceList::new();
        for (t, n) in [(7u32, 0), (1, 1), (7, 2), (1, 3), (8, 4)] {
            list.push(instance(t, n));
        }
        list.group_by_type();

        let order: Vec<_> = list
            .iter()
            .map(|i| (i.type_id().0, i.number_in_batch()))
            .collect();
        assert_eq!(order, vec![(1, 1), (1, 3), (7, 0), (7, 2), (8, 4)]);
    }

    #[test]
    fn partitions_are_maximal_same_type_runs() {
        let mut list = QueryInstanceList::new();
        for (t, n) in [(1u32, 0), (1, 1), (7, 2), (8, 3), (8, 4)] {
            list.push(instance(t, n));
        }
        list.group_by_type();

        let sizes: Vec<_> = list
            .partitions()
            .map(|p| (p[0].type_id().0, p.len()))
            .collect();
        assert_eq!(sizes, vec![(1, 2), (7, 1), (8, 2)]);
    }

    #[test]
    fn empty_list_has_no_partitions() {
        let list = QueryInstanceList::new();
        assert!(list.is_empty());
        assert_eq!(list.partitions().count(), 0);
    }
}
