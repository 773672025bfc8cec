// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Subtree containment for outside-click detection.
//!
//! A pointer-down is "outside" a control when its target is neither the control's root
//! element nor one of its descendants. Hosts that know their element hierarchy implement
//! [`ParentLookup`] and let [`is_within`] walk up from the target.

/// Look up the parent of an element.
pub trait ParentLookup<K> {
    /// Returns the parent of `node`, or `None` if `node` is a root.
    fn parent_of(&self, node: &K) -> Option<K>;
}

/// A parent provider for flat hosts where no element has a parent.
///
/// With it, only the root itself counts as inside.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoParent;

impl<K> ParentLookup<K> for NoParent {
    #[inline]
    fn parent_of(&self, _node: &K) -> Option<K> {
        None
    }
}

/// Ancestry walks stop after this many steps, so a cyclic lookup cannot hang.
pub(crate) const MAX_DEPTH: usize = 4096;

/// True if `node` is `root` or a descendant of `root`.
pub fn is_within<K: PartialEq>(parents: &impl ParentLookup<K>, node: K, root: &K) -> bool {
    let mut cur = node;
    for _ in 0..MAX_DEPTH {
        if cur == *root {
            return true;
        }
        match parents.parent_of(&cur) {
            Some(p) => cur = p,
            None => return false,
        }
    }
    tracing::debug!("ancestry walk exceeded MAX_DEPTH; treating target as outside");
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    // 1 → 2 → 3, and 4 as a separate root.
    struct Parents;
    impl ParentLookup<u32> for Parents {
        fn parent_of(&self, node: &u32) -> Option<u32> {
            match node {
                3 => Some(2),
                2 => Some(1),
                _ => None,
            }
        }
    }

    struct Cycle;
    impl ParentLookup<u32> for Cycle {
        fn parent_of(&self, node: &u32) -> Option<u32> {
            Some(if *node == 1 { 2 } else { 1 })
        }
    }

    #[test]
    fn descendants_are_within() {
        assert!(is_within(&Parents, 3_u32, &1));
        assert!(is_within(&Parents, 2_u32, &2));
        assert!(!is_within(&Parents, 4_u32, &1));
        assert!(!is_within(&Parents, 1_u32, &3));
    }

    #[test]
    fn no_parent_only_matches_root() {
        assert!(is_within(&NoParent, 5_u32, &5));
        assert!(!is_within(&NoParent, 6_u32, &5));
    }

    #[test]
    fn cycles_terminate_as_outside() {
        assert!(!is_within(&Cycle, 1_u32, &9));
    }
}
