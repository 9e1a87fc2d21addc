use std::cell::RefCell;
use std::iter::successors;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Element, Node};
use yew::prelude::*;

use crate::state::dismiss::{dispatch_outside_click, lands_in_item, DismissRegistry};

/// Shared outside-click registry, provided once by `App`.
#[derive(Clone, Default)]
pub struct DismissHandle(Rc<RefCell<DismissRegistry<Node>>>);

impl PartialEq for DismissHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl DismissHandle {
    pub fn dispatch(&self, target: &Node) -> usize {
        dispatch_outside_click(&self.0, target)
    }
}

fn has_class(node: &Node, class: &str) -> bool {
    node.dyn_ref::<Element>()
        .map_or(false, |element| element.class_list().contains(class))
}

/// Registers the widget rooted at `root` for the lifetime of the component.
/// `open` and `close` are re-read on every click, so they may change freely
/// between renders.
#[hook]
pub fn use_outside_dismiss(label: &'static str, root: NodeRef, open: bool, close: Callback<()>) {
    use_dismiss_registration(label, root, None, open, close);
}

/// Like [`use_outside_dismiss`], but only clicks inside an element with class
/// `item_class` under `root` count as inside. Clicks in the gaps between
/// items close the group.
#[hook]
pub fn use_outside_item_dismiss(
    label: &'static str,
    root: NodeRef,
    item_class: &'static str,
    open: bool,
    close: Callback<()>,
) {
    use_dismiss_registration(label, root, Some(item_class), open, close);
}

#[hook]
fn use_dismiss_registration(
    label: &'static str,
    root: NodeRef,
    item_class: Option<&'static str>,
    open: bool,
    close: Callback<()>,
) {
    let registry = use_context::<DismissHandle>();
    let open_now = use_mut_ref(|| open);
    let close_now = use_mut_ref(|| close.clone());
    *open_now.borrow_mut() = open;
    *close_now.borrow_mut() = close;

    use_effect_with_deps(
        move |_| {
            let registration = registry.map(|handle| {
                let id = handle.0.borrow_mut().register(
                    label,
                    move || *open_now.borrow(),
                    move |target: &Node| {
                        let root = match root.get() {
                            Some(root) => root,
                            None => return false,
                        };
                        match item_class {
                            Some(class) => lands_in_item(
                                successors(Some(target.clone()), |node| node.parent_node()),
                                &root,
                                |node| has_class(node, class),
                            ),
                            None => root.contains(Some(target)),
                        }
                    },
                    move || {
                        let close = close_now.borrow().clone();
                        close.emit(());
                    },
                );
                (handle, id)
            });
            if registration.is_none() {
                log::debug!("No dismiss registry in context for {}", label);
            }
            move || {
                if let Some((handle, id)) = registration {
                    handle.0.borrow_mut().unregister(id);
                }
            }
        },
        (),
    );
}
