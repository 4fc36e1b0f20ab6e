//! Recursion guard for the default delegation between `value`,
//! `gradient_into` and `compute`.
//!
//! The default `value`/`gradient_into` forward to `compute`, and the default
//! `compute` forwards back to them. The default `compute` engages a guard
//! around its forwarding calls; the default `value`/`gradient_into` check it
//! on entry. Reaching a default `value` or `gradient_into` while the default
//! `compute` of the same instance is on the stack means both sides of that
//! path are defaults, so the call can never terminate and panics instead.
//!
//! The check only fires for an instance whose own type left both sides
//! unimplemented. Work a thread picks up while blocked inside a real
//! `compute` (rayon work stealing, for example) never engages the guard, so
//! it cannot trip it either.
//!
//! Guards are tracked per thread and keyed by instance (address plus
//! concrete type name), so a wrapper at the same address as the cost
//! function it contains does not collide with it.

use std::cell::RefCell;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct InstanceKey {
    addr: usize,
    type_name: &'static str,
}

impl InstanceKey {
    fn of<T: ?Sized>(instance: &T) -> Self {
        Self {
            addr: instance as *const T as *const () as usize,
            type_name: std::any::type_name::<T>(),
        }
    }
}

thread_local! {
    static DELEGATING: RefCell<Vec<InstanceKey>> = const { RefCell::new(Vec::new()) };
}

/// Panic if the default `compute` of `instance` is currently forwarding.
///
/// Called on entry to the default `value` and `gradient_into`.
pub(crate) fn check_not_recursing<T: ?Sized>(instance: &T) {
    let key = InstanceKey::of(instance);
    let recursing = DELEGATING.with(|stack| stack.borrow().contains(&key));
    if recursing {
        panic!(
            "CostFunction: RECURSION in `{}`: implement `value` and `gradient_into`, \
             or `compute`",
            key.type_name
        );
    }
}

/// Scoped marker for "the default `compute` is forwarding" on one instance.
///
/// Released on drop, which also covers early `Err` returns and unwinding.
#[derive(Debug)]
pub(crate) struct DelegationGuard {
    key: InstanceKey,
}

impl DelegationGuard {
    pub(crate) fn enter<T: ?Sized>(instance: &T) -> Self {
        let key = InstanceKey::of(instance);
        DELEGATING.with(|stack| stack.borrow_mut().push(key));
        Self { key }
    }
}

impl Drop for DelegationGuard {
    fn drop(&mut self) {
        DELEGATING.with(|stack| {
            let mut stack = stack.borrow_mut();
            if let Some(pos) = stack.iter().rposition(|k| *k == self.key) {
                stack.remove(pos);
            }
        });
    }
}

/// Whether any default delegation is active on the current thread.
pub fn delegation_active() -> bool {
    DELEGATING.with(|stack| !stack.borrow().is_empty())
}
