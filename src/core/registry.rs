//! # Group registry - the group name → subscriber sequence table.
//!
//! [`Registry`] is the state shared by both dispatchers. It only stores and
//! orders subscriber handles; invoking them is the dispatcher's job.
//!
//! ## Rules
//! - The wildcard group exists from construction and is never removed.
//! - Order inside a group is insertion order; removing one member keeps the
//!   relative order of the others.
//! - Duplicates are kept: attaching the same handle twice delivers twice.
//! - Identity is the `Arc` allocation (data pointer), not `PartialEq`.
//! - Only `attach` creates groups. Lookups and `detach` on an unknown group
//!   behave as if it were empty and leave the table untouched.
//!
//! ## Delivery sequence
//! ```text
//! delivery("User:deleted") = groups["User:deleted"] ++ groups["all"]
//! delivery("all")          = groups["all"] ++ groups["all"]   (wildcard members twice)
//! ```

use std::collections::HashMap;
use std::sync::Arc;

/// Group table over shared subscriber handles.
pub struct Registry<S: ?Sized> {
    wildcard: Arc<str>,
    groups: HashMap<Arc<str>, Vec<Arc<S>>>,
}

impl<S: ?Sized> Registry<S> {
    /// Creates a registry holding only the (empty) wildcard group.
    pub fn new(wildcard: &str) -> Self {
        let wildcard: Arc<str> = Arc::from(wildcard);
        let mut groups = HashMap::new();
        groups.insert(Arc::clone(&wildcard), Vec::new());
        Self { wildcard, groups }
    }

    /// Name of the wildcard group.
    #[inline]
    pub fn wildcard(&self) -> &str {
        &self.wildcard
    }

    /// Appends `sub` to `group`, creating the group if needed.
    pub fn attach(&mut self, sub: Arc<S>, group: &str) {
        match self.groups.get_mut(group) {
            Some(members) => members.push(sub),
            None => {
                self.groups.insert(Arc::from(group), vec![sub]);
            }
        }
    }

    /// Removes every occurrence of `sub` from `group`.
    ///
    /// Returns the number of removed entries (0 if absent or unknown group).
    pub fn detach<T: ?Sized>(&mut self, sub: &Arc<T>, group: &str) -> usize {
        let Some(members) = self.groups.get_mut(group) else {
            return 0;
        };
        let before = members.len();
        members.retain(|m| !same_handle(m, sub));
        before - members.len()
    }

    /// Snapshot of the delivery sequence for `name`: named group first, wildcard second.
    pub fn delivery(&self, name: &str) -> Vec<Arc<S>> {
        let wildcard = self.members(&self.wildcard);
        let named = self.members(name);
        let mut out = Vec::with_capacity(named.len() + wildcard.len());
        out.extend(named.iter().cloned());
        out.extend(wildcard.iter().cloned());
        out
    }

    /// Members of `group` in insertion order (empty for unknown groups).
    pub fn members(&self, group: &str) -> &[Arc<S>] {
        self.groups.get(group).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of entries in `group`, duplicates included.
    #[inline]
    pub fn len(&self, group: &str) -> usize {
        self.members(group).len()
    }

    /// True if `sub` is a member of `group`.
    pub fn contains<T: ?Sized>(&self, sub: &Arc<T>, group: &str) -> bool {
        self.members(group).iter().any(|m| same_handle(m, sub))
    }

    /// Known group names, sorted.
    pub fn groups(&self) -> Vec<String> {
        let mut names: Vec<String> = self.groups.keys().map(|k| k.to_string()).collect();
        names.sort_unstable();
        names
    }

    /// True if no group has any member.
    pub fn is_empty(&self) -> bool {
        self.groups.values().all(Vec::is_empty)
    }
}

/// Compares the allocations behind two handles, ignoring vtables.
#[inline]
fn same_handle<A: ?Sized, B: ?Sized>(a: &Arc<A>, b: &Arc<B>) -> bool {
    std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
}
