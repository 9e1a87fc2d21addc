//! Outside-click dismissal for open widgets.
//!
//! Widgets register how to tell whether they are open, whether a click target
//! sits inside their root, and how to close. A single document-level click
//! listener hands every click to [`dispatch_outside_click`].

use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WidgetId(u64);

type OpenCheck = Rc<dyn Fn() -> bool>;
type Contains<T> = Rc<dyn Fn(&T) -> bool>;
type Close = Rc<dyn Fn()>;

struct Entry<T> {
    id: WidgetId,
    label: &'static str,
    is_open: OpenCheck,
    contains: Contains<T>,
    close: Close,
}

pub struct DismissRegistry<T> {
    next_id: u64,
    entries: Vec<Entry<T>>,
}

impl<T> Default for DismissRegistry<T> {
    fn default() -> Self {
        Self { next_id: 0, entries: Vec::new() }
    }
}

impl<T> DismissRegistry<T> {
    pub fn register(
        &mut self,
        label: &'static str,
        is_open: impl Fn() -> bool + 'static,
        contains: impl Fn(&T) -> bool + 'static,
        close: impl Fn() + 'static,
    ) -> WidgetId {
        let id = WidgetId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            id,
            label,
            is_open: Rc::new(is_open),
            contains: Rc::new(contains),
            close: Rc::new(close),
        });
        id
    }

    pub fn unregister(&mut self, id: WidgetId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn closers_for(&self, target: &T) -> Vec<(&'static str, Close)> {
        self.entries
            .iter()
            .filter(|entry| (entry.is_open)() && !(entry.contains)(target))
            .map(|entry| (entry.label, entry.close.clone()))
            .collect()
    }
}

/// Closes every open widget whose root does not contain `target` and returns
/// how many were closed. The registry borrow is released before any close
/// callback runs, so callbacks may register or unregister freely.
pub fn dispatch_outside_click<T>(registry: &RefCell<DismissRegistry<T>>, target: &T) -> usize {
    let closers = registry.borrow().closers_for(target);
    for (label, close) in &closers {
        log::debug!("Closing {} after outside click", label);
        close();
    }
    closers.len()
}

/// Whether a click landed inside one of a group's items. `path` is the
/// target followed by its ancestors. Reaching `root` first means the click hit
/// the gap between items, which counts as outside; a path that never reaches
/// `root` is outside the group altogether.
pub fn lands_in_item<N: PartialEq>(
    path: impl IntoIterator<Item = N>,
    root: &N,
    is_item: impl Fn(&N) -> bool,
) -> bool {
    for node in path {
        if &node == root {
            return false;
        }
        if is_item(&node) {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    // Targets are modelled as paths; a root contains every path under it.
    fn inside(root: &'static str) -> impl Fn(&&'static str) -> bool {
        move |target: &&'static str| target.starts_with(root)
    }

    #[test]
    fn closes_only_open_widgets_outside_the_target() {
        let registry = RefCell::new(DismissRegistry::default());
        let about_open = Rc::new(Cell::new(true));
        let service_open = Rc::new(Cell::new(true));
        let profile_open = Rc::new(Cell::new(false));
        let profile_closes = Rc::new(Cell::new(0));

        for (label, root, open) in [
            ("about", "/about", about_open.clone()),
            ("services", "/services", service_open.clone()),
        ] {
            let check = open.clone();
            registry.borrow_mut().register(label, move || check.get(), inside(root), move || open.set(false));
        }
        {
            let check = profile_open.clone();
            let closes = profile_closes.clone();
            registry.borrow_mut().register(
                "profiles",
                move || check.get(),
                inside("/team"),
                move || closes.set(closes.get() + 1),
            );
        }

        let closed = dispatch_outside_click(&registry, &"/services/item-2/trigger");
        assert_eq!(closed, 1);
        assert!(!about_open.get());
        assert!(service_open.get());
        assert_eq!(profile_closes.get(), 0);
    }

    #[test]
    fn unregistered_widgets_are_left_alone() {
        let registry = RefCell::new(DismissRegistry::default());
        let open = Rc::new(Cell::new(true));
        let check = open.clone();
        let setter = open.clone();
        let id = registry.borrow_mut().register("menu", move || check.get(), inside("/nav"), move || setter.set(false));

        assert!(registry.borrow_mut().unregister(id));
        assert!(!registry.borrow_mut().unregister(id));
        assert!(registry.borrow().is_empty());

        assert_eq!(dispatch_outside_click(&registry, &"/main"), 0);
        assert!(open.get());
    }

    #[test]
    fn close_callback_may_touch_the_registry() {
        let registry = Rc::new(RefCell::new(DismissRegistry::default()));
        let reentrant = registry.clone();
        registry.borrow_mut().register(
            "about",
            || true,
            inside("/about"),
            move || {
                reentrant.borrow_mut().register("late", || true, inside("/late"), || {});
            },
        );

        assert_eq!(dispatch_outside_click(&*registry, &"/footer"), 1);
        assert_eq!(registry.borrow().len(), 2);
    }

    // Node names for a dropdown stack: "group" holds "item-N" blocks.
    fn is_item(node: &&'static str) -> bool {
        node.starts_with("item-")
    }

    #[test]
    fn click_inside_an_item_counts_as_inside() {
        let path = ["trigger", "item-1", "group", "main"];
        assert!(lands_in_item(path, &"group", is_item));
    }

    #[test]
    fn click_between_items_counts_as_outside() {
        assert!(!lands_in_item(["group", "main"], &"group", is_item));
        assert!(!lands_in_item(["spacer", "group", "main"], &"group", is_item));
    }

    #[test]
    fn click_elsewhere_on_the_page_counts_as_outside() {
        assert!(!lands_in_item(["footer", "body"], &"group", is_item));
        // An item-like node from another group never reaches this root.
        assert!(!lands_in_item(["item-0", "other-group", "body"], &"group", is_item));
    }

    #[test]
    fn gap_click_closes_the_open_dropdown() {
        let registry = RefCell::new(DismissRegistry::default());
        let open = Rc::new(Cell::new(true));
        let check = open.clone();
        let setter = open.clone();
        registry.borrow_mut().register(
            "about-dropdown",
            move || check.get(),
            |path: &Vec<&'static str>| lands_in_item(path.iter().copied(), &"group", is_item),
            move || setter.set(false),
        );

        assert_eq!(dispatch_outside_click(&registry, &vec!["content", "item-0", "group"]), 0);
        assert!(open.get());

        assert_eq!(dispatch_outside_click(&registry, &vec!["group", "main"]), 1);
        assert!(!open.get());
    }
}
