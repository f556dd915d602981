//! # Selection Observers
//!
//! Explicit observer seam replacing scene-attached "last seen value"
//! bookkeeping: the host compares old and new state itself and notifies
//! observers synchronously before the next redraw. Recomputation on a
//! notification is a pure function of the values handed in.

use tracing::debug;

use ucx_partition::{eligible_groups, PartitionFilter, VertexGroup};

use crate::snapshot::EntitySnapshot;

/// Observer of selection and filter changes, invoked by the host.
pub trait SelectionObserver {
    /// The active entity changed (either side may be none).
    fn on_active_entity_changed(
        &mut self,
        old: Option<&EntitySnapshot>,
        new: Option<&EntitySnapshot>,
    );

    /// The partition filter configuration changed.
    fn on_filter_changed(&mut self, old: &PartitionFilter, new: &PartitionFilter);
}

/// The panel's curated vertex-group list.
///
/// Holds the last seen filter and group set; every notification recomputes
/// the eligible entries with a plain [`eligible_groups`] call. Entries can
/// be removed by the user and the remainder turned into an explicit
/// allowlist for the "from list" generation flow.
///
/// # Example
///
/// ```rust
/// use ucx_partition::{PartitionFilter, VertexGroup};
/// use ucx_pipeline::{EntitySnapshot, GroupListModel, SelectionObserver};
///
/// let mut model = GroupListModel::new(PartitionFilter::default());
///
/// let mut entity = EntitySnapshot::mesh("Crate");
/// entity.groups = vec![
///     VertexGroup::new("UCX_Lid", 8),
///     VertexGroup::new("Weights", 90),
/// ];
/// model.on_active_entity_changed(None, Some(&entity));
///
/// assert_eq!(model.entries(), ["UCX_Lid"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GroupListModel {
    filter: PartitionFilter,
    groups: Vec<VertexGroup>,
    entries: Vec<String>,
}

impl GroupListModel {
    /// Creates an empty list with an initial filter.
    pub fn new(filter: PartitionFilter) -> Self {
        Self {
            filter,
            groups: Vec::new(),
            entries: Vec::new(),
        }
    }

    /// The currently listed group names, in group order.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Removes one entry from the curated list; out-of-range indices are
    /// ignored. Removed entries reappear on the next recomputation.
    pub fn remove_entry(&mut self, index: usize) {
        if index < self.entries.len() {
            self.entries.remove(index);
        }
    }

    /// The filter for the "from list" flow: the last seen filter with the
    /// curated entries as explicit allowlist.
    pub fn as_allowlist_filter(&self) -> PartitionFilter {
        PartitionFilter {
            allowlist: Some(self.entries.clone()),
            ..self.filter.clone()
        }
    }

    /// Recomputes the entries from the held groups and filter.
    fn refresh(&mut self) {
        self.entries = eligible_groups(&self.groups, &self.filter)
            .into_iter()
            .map(|group| group.name)
            .collect();
        debug!(entries = self.entries.len(), "group list refreshed");
    }
}

impl SelectionObserver for GroupListModel {
    fn on_active_entity_changed(
        &mut self,
        _old: Option<&EntitySnapshot>,
        new: Option<&EntitySnapshot>,
    ) {
        self.groups = new.map(|entity| entity.groups.clone()).unwrap_or_default();
        self.refresh();
    }

    fn on_filter_changed(&mut self, _old: &PartitionFilter, new: &PartitionFilter) {
        self.filter = new.clone();
        self.refresh();
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn entity_with_groups(groups: &[(&str, u32)]) -> EntitySnapshot {
        let mut entity = EntitySnapshot::mesh("Crate");
        entity.groups = groups
            .iter()
            .map(|(name, count)| VertexGroup::new(*name, *count))
            .collect();
        entity
    }

    #[test]
    fn test_entity_change_refreshes_entries() {
        let mut model = GroupListModel::new(PartitionFilter::default());
        let entity = entity_with_groups(&[("UCX_A", 5), ("B", 9), ("UCX_C", 1)]);
        model.on_active_entity_changed(None, Some(&entity));
        assert_eq!(model.entries(), ["UCX_A"]);

        model.on_active_entity_changed(Some(&entity), None);
        assert!(model.entries().is_empty());
    }

    #[test]
    fn test_filter_change_recomputes_from_held_groups() {
        let mut model = GroupListModel::new(PartitionFilter::default());
        let entity = entity_with_groups(&[("UCX_A", 5), ("B", 9)]);
        model.on_active_entity_changed(None, Some(&entity));
        assert_eq!(model.entries(), ["UCX_A"]);

        let relaxed = PartitionFilter::threshold_only(2);
        model.on_filter_changed(&PartitionFilter::default(), &relaxed);
        assert_eq!(model.entries(), ["UCX_A", "B"]);
    }

    #[test]
    fn test_removed_entry_feeds_allowlist() {
        let mut model = GroupListModel::new(PartitionFilter::default());
        let entity = entity_with_groups(&[("UCX_A", 5), ("UCX_B", 5)]);
        model.on_active_entity_changed(None, Some(&entity));
        model.remove_entry(0);
        assert_eq!(model.entries(), ["UCX_B"]);

        let filter = model.as_allowlist_filter();
        assert_eq!(filter.allowlist.as_deref(), Some(&["UCX_B".to_string()][..]));
    }
}
