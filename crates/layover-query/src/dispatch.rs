//! Partitioned dispatch of a query batch.

use layover_catalog::Database;

use crate::instance::{QueryInstance, QueryInstanceList};
use crate::registry::QueryTypeRegistry;
use crate::writer::QueryWriter;

/// Run every instance in the batch.
///
/// The list is sorted type-contiguous in place, then each same-type
/// partition gets one `generate_statistics` call and one `execute` per
/// instance against the shared statistics. Each instance writes to
/// `outputs[instance.number_in_batch()]`, so output pairing survives
/// the sort.
///
/// Failure never stops the batch: an unknown type id skips its
/// partition with a warning, and an instance whose `execute` fails is
/// logged and left with empty output.
///
/// # Panics
///
/// Panics if an instance's `number_in_batch` is out of bounds for
/// `outputs`.
pub fn dispatch_list(
    database: &Database,
    list: &mut QueryInstanceList,
    registry: &QueryTypeRegistry,
    outputs: &mut [QueryWriter],
) {
    list.group_by_type();

    for partition in list.partitions() {
        let type_id = partition[0].type_id();
        let Some(query) = registry.get(type_id) else {
            tracing::warn!(%type_id, instances = partition.len(), "unknown query type, skipping");
            continue;
        };

        let statistics = query.generate_statistics(database, partition);
        for instance in partition {
            let output = &mut outputs[instance.number_in_batch()];
            if let Err(error) = query.execute(database, statistics.as_ref(), instance, output) {
                tracing::warn!(
                    %type_id,
                    number = instance.number_in_batch(),
                    %error,
                    "query instance failed"
                );
                output.clear();
            }
        }
    }
}

/// Run one instance on its own, writing to `output`.
pub fn dispatch_single(
    database: &Database,
    mut instance: QueryInstance,
    registry: &QueryTypeRegistry,
    output: &mut QueryWriter,
) {
    instance.renumber(0);
    let mut list = QueryInstanceList::new();
    list.push(instance);
    dispatch_list(database, &mut list, registry, std::slice::from_mut(output));
}
