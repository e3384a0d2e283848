//! Multi-select of animals for batch operations

use std::collections::BTreeSet;

use shared::AnimalId;

/// Selection mode flag plus the duplicate-free set of selected animals
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    active: bool,
    ids: BTreeSet<AnimalId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Flip selection mode. Leaving the mode drops the selection.
    pub fn toggle_mode(&mut self) -> bool {
        if self.active {
            self.exit();
        } else {
            self.active = true;
        }
        self.active
    }

    pub fn exit(&mut self) {
        self.active = false;
        self.ids.clear();
    }

    /// Add or remove `id`. Returns whether it is selected afterwards;
    /// ignored outside selection mode.
    pub fn toggle(&mut self, id: AnimalId) -> bool {
        if !self.active {
            return false;
        }
        if !self.ids.remove(&id) {
            self.ids.insert(id);
            return true;
        }
        false
    }

    pub fn contains(&self, id: AnimalId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Selected ids in ascending order
    pub fn ids(&self) -> Vec<AnimalId> {
        self.ids.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_toggle_ignored_outside_mode() {
        let mut selection = Selection::new();
        assert!(!selection.toggle(AnimalId(1)));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_leaving_mode_clears() {
        let mut selection = Selection::new();
        selection.toggle_mode();
        selection.toggle(AnimalId(1));
        selection.toggle(AnimalId(2));
        assert_eq!(selection.len(), 2);

        assert!(!selection.toggle_mode());
        assert!(selection.is_empty());
    }

    #[test]
    fn test_ids_sorted_without_duplicates() {
        let mut selection = Selection::new();
        selection.toggle_mode();
        for id in [5, 1, 3] {
            selection.toggle(AnimalId(id));
        }
        assert_eq!(selection.ids(), vec![AnimalId(1), AnimalId(3), AnimalId(5)]);
    }

    proptest! {
        #[test]
        fn prop_double_toggle_restores_selection(
            initial in prop::collection::btree_set(0i64..50, 0..20),
            id in 0i64..50,
        ) {
            let mut selection = Selection::new();
            selection.toggle_mode();
            for i in &initial {
                selection.toggle(AnimalId(*i));
            }
            let before = selection.clone();

            selection.toggle(AnimalId(id));
            selection.toggle(AnimalId(id));

            prop_assert_eq!(selection, before);
        }
    }
}
