use std::fmt;
use std::rc::Rc;

use ahash::{AHashMap, AHashSet};
use serde_json::Value;

use crate::element::ElementHandle;
use crate::vnode::{DirectiveSpec, VNode};

/// A directive lifecycle hook. Receives the live element, the evaluated
/// binding, the owning vnode and (for update hooks) the previous vnode.
pub type Hook =
    Rc<dyn Fn(&ElementHandle, &DirectiveBinding, &VNode, Option<&VNode>) -> Result<(), HookFault>>;

/// The capability set a registered directive exposes. Every hook is
/// optional; an absent hook is skipped, not an error.
#[derive(Clone, Default)]
pub struct DirectiveHooks {
    pub bind: Option<Hook>,
    pub inserted: Option<Hook>,
    pub update: Option<Hook>,
    pub component_updated: Option<Hook>,
    pub unbind: Option<Hook>,
}

/// Binding info passed to every hook invocation. `old_value` is populated
/// only for the update-phase hooks.
#[derive(Debug, Clone)]
pub struct DirectiveBinding {
    pub name: String,
    pub raw_name: String,
    pub value: Value,
    pub old_value: Option<Value>,
    pub arg: Option<String>,
    pub modifiers: AHashSet<String>,
}

/// Lifecycle state tracked per (element, directive) pair. `inserted` is
/// recorded separately from bound-ness because parent attachment can be
/// deferred relative to element creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectiveState {
    Unbound,
    Bound { inserted: bool },
}

/// A hook failure. Surfaced through the dispatcher's fault handler; never
/// stops sibling directives from dispatching.
#[derive(Debug, Clone)]
pub struct HookFault {
    pub directive: String,
    pub hook: &'static str,
    pub message: String,
}

impl HookFault {
    /// Fault as raised inside a hook body. The dispatcher fills in the
    /// directive and hook names before reporting.
    pub fn new(message: &str) -> Self {
        HookFault {
            directive: String::new(),
            hook: "",
            message: message.to_string(),
        }
    }
}

impl fmt::Display for HookFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Error in directive {} {} hook: {}",
            self.directive, self.hook, self.message
        )
    }
}

impl std::error::Error for HookFault {}

pub type FaultHandler = Rc<dyn Fn(HookFault)>;

fn default_on_fault(fault: HookFault) {
    println!("{}", fault);
}

/// Drives directive lifecycle hooks as the patch engine creates, patches
/// and destroys vnodes. The registry is established up front and read-only
/// during dispatch.
///
/// Per (element, directive) pair the dispatcher enforces
/// `Unbound -> Bound -> (updated)* -> Unbound`: `bind`, `inserted` and
/// `unbind` each fire at most once, `update`/`component_updated` fire once
/// per patch pass.
pub struct DirectiveDispatcher {
    registry: AHashMap<String, DirectiveHooks>,
    on_fault: FaultHandler,
}

impl Default for DirectiveDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl DirectiveDispatcher {
    pub fn new() -> Self {
        Self::with_fault_handler(Rc::new(default_on_fault))
    }

    pub fn with_fault_handler(on_fault: FaultHandler) -> Self {
        Self {
            registry: AHashMap::new(),
            on_fault,
        }
    }

    pub fn register(&mut self, name: &str, hooks: DirectiveHooks) {
        self.registry.insert(name.to_string(), hooks);
    }

    /// Vnode creation: bind every declared directive, in declaration order.
    /// A directive already bound on this element is left alone, so replaying
    /// creation cannot double-fire `bind`.
    pub fn create(&self, vnode: &VNode) {
        let el = match &vnode.elm {
            Some(el) => el,
            None => return,
        };
        for spec in &vnode.data.directives {
            if state_of(el, &spec.raw_name) != DirectiveState::Unbound {
                continue;
            }
            set_state(el, &spec.raw_name, DirectiveState::Bound { inserted: false });
            self.invoke(spec, "bind", el, binding(spec, None), vnode, None);
        }
    }

    /// The element is now confirmed present under a parent. Fires `inserted`
    /// for every bound directive that has not seen it yet.
    pub fn insert(&self, vnode: &VNode) {
        let el = match &vnode.elm {
            Some(el) => el,
            None => return,
        };
        el.borrow_mut().in_tree = true;
        for spec in &vnode.data.directives {
            if state_of(el, &spec.raw_name) != (DirectiveState::Bound { inserted: false }) {
                continue;
            }
            set_state(el, &spec.raw_name, DirectiveState::Bound { inserted: true });
            self.invoke(spec, "inserted", el, binding(spec, None), vnode, None);
        }
    }

    /// A patch pass over the owning vnode. Directives present in both old
    /// and new get `update` with the previous value; directives only in the
    /// new vnode are bound (and inserted, when the element is already in the
    /// tree); directives only in the old vnode are unbound.
    pub fn update(&self, old_vnode: &VNode, vnode: &VNode) {
        let el = match &vnode.elm {
            Some(el) => el,
            None => return,
        };
        let old_specs: AHashMap<&str, &DirectiveSpec> = old_vnode
            .data
            .directives
            .iter()
            .map(|spec| (spec.raw_name.as_str(), spec))
            .collect();

        for spec in &vnode.data.directives {
            match old_specs.get(spec.raw_name.as_str()) {
                Some(old_spec) => {
                    self.invoke(
                        spec,
                        "update",
                        el,
                        binding(spec, Some(old_spec.value.clone())),
                        vnode,
                        Some(old_vnode),
                    );
                }
                None => {
                    // directive added by this patch
                    if state_of(el, &spec.raw_name) != DirectiveState::Unbound {
                        continue;
                    }
                    set_state(el, &spec.raw_name, DirectiveState::Bound { inserted: false });
                    self.invoke(spec, "bind", el, binding(spec, None), vnode, None);
                    if el.borrow().in_tree {
                        set_state(el, &spec.raw_name, DirectiveState::Bound { inserted: true });
                        self.invoke(spec, "inserted", el, binding(spec, None), vnode, None);
                    }
                }
            }
        }

        let new_names: AHashSet<&str> = vnode
            .data
            .directives
            .iter()
            .map(|spec| spec.raw_name.as_str())
            .collect();
        for spec in &old_vnode.data.directives {
            if !new_names.contains(spec.raw_name.as_str()) {
                self.unbind_one(spec, el, vnode, Some(old_vnode));
            }
        }
    }

    /// Completes a patch pass after all descendant vnodes have updated.
    /// Fires `component_updated` for every directive that survived the
    /// patch, so the hook may read already-updated descendant state.
    pub fn post_patch(&self, old_vnode: &VNode, vnode: &VNode) {
        let el = match &vnode.elm {
            Some(el) => el,
            None => return,
        };
        let old_specs: AHashMap<&str, &DirectiveSpec> = old_vnode
            .data
            .directives
            .iter()
            .map(|spec| (spec.raw_name.as_str(), spec))
            .collect();
        for spec in &vnode.data.directives {
            if let Some(old_spec) = old_specs.get(spec.raw_name.as_str()) {
                self.invoke(
                    spec,
                    "componentUpdated",
                    el,
                    binding(spec, Some(old_spec.value.clone())),
                    vnode,
                    Some(old_vnode),
                );
            }
        }
    }

    /// Element teardown: unbind every still-bound directive. Safe to call
    /// redundantly; already-unbound directives are skipped.
    pub fn destroy(&self, vnode: &VNode) {
        let el = match &vnode.elm {
            Some(el) => el,
            None => return,
        };
        for spec in &vnode.data.directives {
            self.unbind_one(spec, el, vnode, None);
        }
        el.borrow_mut().in_tree = false;
    }

    fn unbind_one(
        &self,
        spec: &DirectiveSpec,
        el: &ElementHandle,
        vnode: &VNode,
        old_vnode: Option<&VNode>,
    ) {
        if state_of(el, &spec.raw_name) == DirectiveState::Unbound {
            return;
        }
        clear_state(el, &spec.raw_name);
        self.invoke(spec, "unbind", el, binding(spec, None), vnode, old_vnode);
    }

    fn invoke(
        &self,
        spec: &DirectiveSpec,
        hook_name: &'static str,
        el: &ElementHandle,
        binding: DirectiveBinding,
        vnode: &VNode,
        old_vnode: Option<&VNode>,
    ) {
        let hooks = match self.registry.get(&spec.name) {
            Some(hooks) => hooks,
            None => return,
        };
        let hook = match hook_name {
            "bind" => &hooks.bind,
            "inserted" => &hooks.inserted,
            "update" => &hooks.update,
            "componentUpdated" => &hooks.component_updated,
            _ => &hooks.unbind,
        };
        if let Some(hook) = hook {
            if let Err(mut fault) = hook(el, &binding, vnode, old_vnode) {
                fault.directive = spec.raw_name.clone();
                fault.hook = hook_name;
                (self.on_fault)(fault);
            }
        }
    }
}

fn binding(spec: &DirectiveSpec, old_value: Option<Value>) -> DirectiveBinding {
    DirectiveBinding {
        name: spec.name.clone(),
        raw_name: spec.raw_name.clone(),
        value: spec.value.clone(),
        old_value,
        arg: spec.arg.clone(),
        modifiers: spec.modifiers.clone(),
    }
}

fn state_of(el: &ElementHandle, raw_name: &str) -> DirectiveState {
    el.borrow()
        .directive_states
        .get(raw_name)
        .copied()
        .unwrap_or(DirectiveState::Unbound)
}

fn set_state(el: &ElementHandle, raw_name: &str, state: DirectiveState) {
    el.borrow_mut()
        .directive_states
        .insert(raw_name.to_string(), state);
}

fn clear_state(el: &ElementHandle, raw_name: &str) {
    el.borrow_mut().directive_states.remove(raw_name);
}
