use std::cell::RefCell;
use std::rc::Rc;

use serde_json::json;
use sprigc_runtime::{
    directives::{DirectiveDispatcher, DirectiveHooks, Hook, HookFault},
    element::Element,
    vnode::{DirectiveSpec, VNode},
};

type Log = Rc<RefCell<Vec<String>>>;

fn log_hook(log: &Log, entry: &str) -> Hook {
    let log = Rc::clone(log);
    let entry = entry.to_string();
    Rc::new(move |_el, _binding, _vnode, _old| {
        log.borrow_mut().push(entry.clone());
        Ok(())
    })
}

fn logging_hooks(log: &Log, tag: &str) -> DirectiveHooks {
    DirectiveHooks {
        bind: Some(log_hook(log, &format!("{}:bind", tag))),
        inserted: Some(log_hook(log, &format!("{}:inserted", tag))),
        update: Some(log_hook(log, &format!("{}:update", tag))),
        component_updated: Some(log_hook(log, &format!("{}:componentUpdated", tag))),
        unbind: Some(log_hook(log, &format!("{}:unbind", tag))),
    }
}

fn vnode_with(tag: &str, specs: Vec<DirectiveSpec>) -> VNode {
    let mut vnode = VNode::element(tag);
    vnode.elm = Some(Element::new(tag));
    vnode.data.directives = specs;
    vnode
}

#[test]
fn full_lifecycle_fires_each_hook_once() {
    let log: Log = Rc::new(RefCell::new(vec![]));
    let mut dispatcher = DirectiveDispatcher::new();
    dispatcher.register("pin", logging_hooks(&log, "pin"));

    let old = vnode_with("div", vec![DirectiveSpec::new("pin", json!(1))]);
    let mut new = vnode_with("div", vec![DirectiveSpec::new("pin", json!(2))]);
    new.elm = old.elm.clone();

    dispatcher.create(&old);
    dispatcher.insert(&old);
    dispatcher.update(&old, &new);
    dispatcher.post_patch(&old, &new);
    dispatcher.destroy(&new);

    assert_eq!(
        *log.borrow(),
        vec![
            "pin:bind",
            "pin:inserted",
            "pin:update",
            "pin:componentUpdated",
            "pin:unbind",
        ]
    );
}

#[test]
fn redundant_create_insert_destroy_do_not_double_fire() {
    let log: Log = Rc::new(RefCell::new(vec![]));
    let mut dispatcher = DirectiveDispatcher::new();
    dispatcher.register("pin", logging_hooks(&log, "pin"));

    let vnode = vnode_with("div", vec![DirectiveSpec::new("pin", json!(true))]);

    dispatcher.create(&vnode);
    dispatcher.create(&vnode);
    dispatcher.insert(&vnode);
    dispatcher.insert(&vnode);
    dispatcher.destroy(&vnode);
    dispatcher.destroy(&vnode);

    assert_eq!(*log.borrow(), vec!["pin:bind", "pin:inserted", "pin:unbind"]);
}

#[test]
fn hook_fault_is_reported_and_siblings_still_run() {
    let log: Log = Rc::new(RefCell::new(vec![]));
    let faults: Rc<RefCell<Vec<HookFault>>> = Rc::new(RefCell::new(vec![]));
    let sink = Rc::clone(&faults);
    let mut dispatcher =
        DirectiveDispatcher::with_fault_handler(Rc::new(move |fault| sink.borrow_mut().push(fault)));

    let boom: Hook = Rc::new(|_el, _binding, _vnode, _old| Err(HookFault::new("exploded")));
    dispatcher.register(
        "boom",
        DirectiveHooks {
            bind: Some(boom),
            ..Default::default()
        },
    );
    dispatcher.register("pin", logging_hooks(&log, "pin"));

    let vnode = vnode_with(
        "div",
        vec![
            DirectiveSpec::new("boom", json!(null)),
            DirectiveSpec::new("pin", json!(null)),
        ],
    );
    dispatcher.create(&vnode);

    assert_eq!(*log.borrow(), vec!["pin:bind"]);
    let faults = faults.borrow();
    assert_eq!(faults.len(), 1);
    assert_eq!(faults[0].directive, "v-boom");
    assert_eq!(faults[0].hook, "bind");
    assert_eq!(faults[0].message, "exploded");
}

#[test]
fn update_hook_receives_previous_value() {
    let seen: Rc<RefCell<Vec<(serde_json::Value, Option<serde_json::Value>)>>> =
        Rc::new(RefCell::new(vec![]));
    let sink = Rc::clone(&seen);
    let update: Hook = Rc::new(move |_el, binding, _vnode, _old| {
        sink.borrow_mut()
            .push((binding.value.clone(), binding.old_value.clone()));
        Ok(())
    });

    let mut dispatcher = DirectiveDispatcher::new();
    dispatcher.register(
        "pin",
        DirectiveHooks {
            update: Some(update),
            ..Default::default()
        },
    );

    let old = vnode_with("div", vec![DirectiveSpec::new("pin", json!(1))]);
    let mut new = vnode_with("div", vec![DirectiveSpec::new("pin", json!(2))]);
    new.elm = old.elm.clone();

    dispatcher.create(&old);
    dispatcher.update(&old, &new);

    assert_eq!(*seen.borrow(), vec![(json!(2), Some(json!(1)))]);
}

#[test]
fn patch_binds_added_and_unbinds_removed_directives() {
    let log: Log = Rc::new(RefCell::new(vec![]));
    let mut dispatcher = DirectiveDispatcher::new();
    dispatcher.register("a", logging_hooks(&log, "a"));
    dispatcher.register("b", logging_hooks(&log, "b"));

    let old = vnode_with("div", vec![DirectiveSpec::new("a", json!(1))]);
    let mut new = vnode_with("div", vec![DirectiveSpec::new("b", json!(2))]);
    new.elm = old.elm.clone();

    dispatcher.create(&old);
    dispatcher.insert(&old);
    log.borrow_mut().clear();

    dispatcher.update(&old, &new);

    // element is already in the tree, so the added directive is inserted too
    assert_eq!(
        *log.borrow(),
        vec!["b:bind", "b:inserted", "a:unbind"]
    );
}

#[test]
fn unregistered_directive_is_skipped() {
    let dispatcher = DirectiveDispatcher::new();
    let vnode = vnode_with("div", vec![DirectiveSpec::new("ghost", json!(null))]);
    dispatcher.create(&vnode);
    dispatcher.destroy(&vnode);
}
