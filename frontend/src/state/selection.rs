//! Exclusive selection over a fixed group of items.
//!
//! Every widget on the site that keeps "one of these is active" state (menu,
//! dropdown groups, filters, language buttons, the featured team member) goes
//! through [`SelectionGroup`]. Mutations never call back into widget code.
//! They return a [`ChangeSet`] that the caller applies afterwards, so a side
//! effect that selects again always sees a group that already satisfies the
//! at-most-one-active rule.

#[derive(Clone, Debug, PartialEq)]
pub struct SelectableItem<T> {
    pub payload: T,
    pub is_active: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Change {
    Activated(usize),
    Deactivated(usize),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChangeSet {
    changes: Vec<Change>,
}

impl ChangeSet {
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    pub fn activated(&self) -> Option<usize> {
        self.changes.iter().find_map(|change| match change {
            Change::Activated(index) => Some(*index),
            Change::Deactivated(_) => None,
        })
    }

    #[cfg(test)]
    pub fn deactivated(&self) -> impl Iterator<Item = usize> + '_ {
        self.changes.iter().filter_map(|change| match change {
            Change::Deactivated(index) => Some(*index),
            Change::Activated(_) => None,
        })
    }

    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = &Change> {
        self.changes.iter()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SelectionGroup<T> {
    items: Vec<SelectableItem<T>>,
}

impl<T> SelectionGroup<T> {
    /// Builds a group with nothing active.
    pub fn new(payloads: impl IntoIterator<Item = T>) -> Self {
        Self {
            items: payloads
                .into_iter()
                .map(|payload| SelectableItem { payload, is_active: false })
                .collect(),
        }
    }

    /// Builds a group whose `initial` member starts active. An out-of-range
    /// index leaves the group inactive.
    pub fn with_active(payloads: impl IntoIterator<Item = T>, initial: usize) -> Self {
        let mut group = Self::new(payloads);
        group.select(initial);
        group
    }

    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = &SelectableItem<T>> {
        self.items.iter()
    }

    pub fn active(&self) -> Option<usize> {
        self.items.iter().position(|item| item.is_active)
    }

    pub fn active_payload(&self) -> Option<&T> {
        self.items.iter().find(|item| item.is_active).map(|item| &item.payload)
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.items.get(index).map_or(false, |item| item.is_active)
    }

    /// Makes `index` the only active member. Selecting the member that is
    /// already active changes nothing.
    pub fn select(&mut self, index: usize) -> ChangeSet {
        if index >= self.items.len() {
            return ChangeSet::default();
        }
        self.set_active(Some(index))
    }

    /// Flips `index`: an inactive member becomes the only active one, the
    /// active member closes and leaves the group empty.
    pub fn toggle(&mut self, index: usize) -> ChangeSet {
        if index >= self.items.len() {
            return ChangeSet::default();
        }
        if self.items[index].is_active {
            self.set_active(None)
        } else {
            self.set_active(Some(index))
        }
    }

    pub fn clear(&mut self) -> ChangeSet {
        self.set_active(None)
    }

    fn set_active(&mut self, target: Option<usize>) -> ChangeSet {
        let mut changes = Vec::new();
        // Deactivations first so observers never see two active members.
        for (index, item) in self.items.iter_mut().enumerate() {
            if item.is_active && Some(index) != target {
                item.is_active = false;
                changes.push(Change::Deactivated(index));
            }
        }
        if let Some(index) = target {
            let item = &mut self.items[index];
            if !item.is_active {
                item.is_active = true;
                changes.push(Change::Activated(index));
            }
        }
        ChangeSet { changes }
    }
}

/// A single open/closed switch, like the mobile menu. Re-invoking it on
/// itself closes it again.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BinaryToggle {
    open: bool,
}

impl BinaryToggle {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Returns `true` when this actually closed something.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_count<T>(group: &SelectionGroup<T>) -> usize {
        group.iter().filter(|item| item.is_active).count()
    }

    #[test]
    fn select_leaves_exactly_one_active() {
        let mut group = SelectionGroup::new(["is", "en", "de"]);
        for index in [2, 0, 1, 1, 2] {
            group.select(index);
            assert_eq!(active_count(&group), 1);
            assert_eq!(group.active(), Some(index));
        }
    }

    #[test]
    fn new_group_has_nothing_active() {
        let group = SelectionGroup::new(0..4);
        assert_eq!(group.active(), None);
        assert_eq!(active_count(&group), 0);
    }

    #[test]
    fn reselecting_the_active_member_is_a_no_op() {
        let mut group = SelectionGroup::new(["all", "partners"]);
        let first = group.select(1);
        assert_eq!(first.activated(), Some(1));

        let second = group.select(1);
        assert!(second.is_empty());
        assert!(group.is_active(1));
    }

    #[test]
    fn switching_reports_deactivation_before_activation() {
        let mut group = SelectionGroup::with_active(["a", "b", "c"], 0);
        let changes = group.select(2);
        let collected: Vec<_> = changes.iter().copied().collect();
        assert_eq!(collected, vec![Change::Deactivated(0), Change::Activated(2)]);
        assert_eq!(changes.deactivated().collect::<Vec<_>>(), vec![0]);
    }

    #[test]
    fn out_of_range_index_is_ignored() {
        let mut group = SelectionGroup::with_active(["a", "b"], 1);
        assert!(group.select(7).is_empty());
        assert!(group.toggle(7).is_empty());
        assert_eq!(group.active(), Some(1));

        let mut empty: SelectionGroup<&str> = SelectionGroup::new([]);
        assert!(empty.select(0).is_empty());
        assert!(empty.clear().is_empty());
        assert_eq!(empty.active_payload(), None);
    }

    #[test]
    fn toggle_closes_on_second_call_and_closes_siblings() {
        let mut group = SelectionGroup::new(["history", "values", "clients"]);
        group.toggle(0);
        assert_eq!(group.active(), Some(0));

        let changes = group.toggle(1);
        assert_eq!(changes.activated(), Some(1));
        assert!(!group.is_active(0));

        let changes = group.toggle(1);
        assert_eq!(changes.activated(), None);
        assert_eq!(group.active(), None);
    }

    #[test]
    fn side_effect_selecting_again_sees_consistent_group() {
        let mut group = SelectionGroup::new(0..3);
        let changes = group.select(0);
        // An activation hook that immediately redirects to another member.
        if let Some(activated) = changes.activated() {
            assert_eq!(active_count(&group), 1);
            group.select(activated + 1);
        }
        assert_eq!(group.active(), Some(1));
        assert_eq!(active_count(&group), 1);
    }

    #[test]
    fn menu_toggle_returns_to_closed_after_two_calls() {
        let mut menu = BinaryToggle::default();
        assert!(menu.toggle());
        assert!(!menu.toggle());
        assert!(!menu.is_open());
    }

    #[test]
    fn exclusive_trigger_stays_active_after_two_calls() {
        let mut filters = SelectionGroup::new(["all", "partners"]);
        filters.select(1);
        assert!(filters.is_active(1));
        filters.select(1);
        assert!(filters.is_active(1));
    }

    #[test]
    fn closing_a_closed_menu_reports_nothing() {
        let mut menu = BinaryToggle::default();
        assert!(!menu.close());
        menu.toggle();
        assert!(menu.close());
        assert!(!menu.is_open());
    }
}
