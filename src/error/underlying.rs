//! Underlying error chains
//!
//! Errors exposing the [`Underlying`](crate::types::Underlying) capability
//! form a linked cause chain. These helpers walk that chain down to the
//! deepest error, which is usually the most specific one to report.
//!
//! A chain that loops back on itself has no root. The walk tracks visited
//! nodes, so a cyclic chain ends the iteration instead of spinning forever and
//! [`recursive_underlying_error`] reports it as `None`.

use std::collections::HashSet;

use tracing::warn;

use crate::types::Presentable;

/// Identity of a node: its address plus its concrete type.
///
/// The address alone is not enough because a field at offset zero shares
/// its parent's address. Zero-sized values of one type all share an address
/// too, which is sound here: such a node has no state, so its successor is
/// fixed by its type and a second visit repeats the walk.
type NodeId = (usize, &'static str);

fn node_id(error: &dyn Presentable) -> NodeId {
    (
        error as *const dyn Presentable as *const () as usize,
        error.type_name(),
    )
}

/// Iterator over an error and every error beneath it
#[derive(Debug)]
pub struct UnderlyingChain<'a> {
    next: Option<&'a dyn Presentable>,
    seen: HashSet<NodeId>,
    cyclic: bool,
}

impl<'a> UnderlyingChain<'a> {
    /// Whether the walk stopped because a node repeated
    pub fn is_cyclic(&self) -> bool {
        self.cyclic
    }
}

impl<'a> Iterator for UnderlyingChain<'a> {
    type Item = &'a dyn Presentable;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        if !self.seen.insert(node_id(current)) {
            self.cyclic = true;
            return None;
        }
        self.next = current
            .as_underlying()
            .and_then(|underlying| underlying.underlying_error());
        Some(current)
    }
}

/// Iterate from `error` down to its deepest underlying error
pub fn underlying_chain(error: &dyn Presentable) -> UnderlyingChain<'_> {
    UnderlyingChain {
        next: Some(error),
        seen: HashSet::new(),
        cyclic: false,
    }
}

/// Follow the underlying-error relation from `error` to the last error that
/// is still present.
///
/// Returns `error` itself when it wraps nothing, and `None` when the chain
/// is cyclic.
pub fn recursive_underlying_error(error: &dyn Presentable) -> Option<&dyn Presentable> {
    let mut chain = underlying_chain(error);
    let mut last = None;
    for node in chain.by_ref() {
        last = Some(node);
    }

    if chain.is_cyclic() {
        warn!(
            "Underlying error chain starting at {} is cyclic",
            error.type_identity()
        );
        return None;
    }

    last
}

/// Like [`recursive_underlying_error`], but falls back to `error`
pub fn recursive_underlying_error_or_self(error: &dyn Presentable) -> &dyn Presentable {
    recursive_underlying_error(error).unwrap_or(error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Underlying;
    use std::fmt;

    #[derive(Debug)]
    struct Root;

    impl fmt::Display for Root {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "root")
        }
    }

    impl std::error::Error for Root {}
    impl Presentable for Root {}

    #[derive(Debug)]
    struct Wrapping {
        inner: Option<Box<dyn Presentable>>,
    }

    impl fmt::Display for Wrapping {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "wrapping")
        }
    }

    impl std::error::Error for Wrapping {}

    impl Underlying for Wrapping {
        fn underlying_error(&self) -> Option<&dyn Presentable> {
            self.inner.as_deref()
        }
    }

    impl Presentable for Wrapping {
        fn as_underlying(&self) -> Option<&dyn Underlying> {
            Some(self)
        }
    }

    #[derive(Debug)]
    struct SelfReferencing;

    impl fmt::Display for SelfReferencing {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "loop")
        }
    }

    impl std::error::Error for SelfReferencing {}

    impl Underlying for SelfReferencing {
        fn underlying_error(&self) -> Option<&dyn Presentable> {
            Some(self)
        }
    }

    impl Presentable for SelfReferencing {
        fn as_underlying(&self) -> Option<&dyn Underlying> {
            Some(self)
        }
    }

    #[derive(Debug)]
    struct Ping;

    #[derive(Debug)]
    struct Pong;

    impl fmt::Display for Ping {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "ping")
        }
    }

    impl fmt::Display for Pong {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "pong")
        }
    }

    impl std::error::Error for Ping {}
    impl std::error::Error for Pong {}

    impl Underlying for Ping {
        fn underlying_error(&self) -> Option<&dyn Presentable> {
            Some(&Pong)
        }
    }

    impl Underlying for Pong {
        fn underlying_error(&self) -> Option<&dyn Presentable> {
            Some(&Ping)
        }
    }

    impl Presentable for Ping {
        fn as_underlying(&self) -> Option<&dyn Underlying> {
            Some(self)
        }
    }

    impl Presentable for Pong {
        fn as_underlying(&self) -> Option<&dyn Underlying> {
            Some(self)
        }
    }

    fn same(a: &dyn Presentable, b: &dyn Presentable) -> bool {
        std::ptr::addr_eq(a as *const dyn Presentable, b as *const dyn Presentable)
    }

    #[test]
    fn test_no_capability_returns_self() {
        let root = Root;
        let found = recursive_underlying_error(&root).unwrap();
        assert!(same(found, &root));
        assert!(same(recursive_underlying_error_or_self(&root), &root));
    }

    #[test]
    fn test_nested_chain_reaches_root() {
        let top = Wrapping {
            inner: Some(Box::new(Wrapping {
                inner: Some(Box::new(Root)),
            })),
        };

        let found = recursive_underlying_error(&top).unwrap();
        assert_eq!(found.type_identity(), "Root");
        assert_eq!(underlying_chain(&top).count(), 3);
    }

    #[test]
    fn test_absent_terminal_returns_last_node() {
        let top = Wrapping { inner: None };
        let found = recursive_underlying_error_or_self(&top);
        assert!(same(found, &top));
    }

    #[test]
    fn test_cycle_is_detected() {
        let looping = SelfReferencing;
        let mut chain = underlying_chain(&looping);
        assert_eq!(chain.by_ref().count(), 1);
        assert!(chain.is_cyclic());

        assert!(recursive_underlying_error(&looping).is_none());
        assert!(same(recursive_underlying_error_or_self(&looping), &looping));
    }

    #[test]
    fn test_zero_sized_loop_through_static_is_detected() {
        let mut chain = underlying_chain(&Ping);
        let visited: Vec<_> = chain.by_ref().map(|node| node.type_identity()).collect();
        assert_eq!(&visited[..2], &["Ping", "Pong"]);
        assert!(chain.is_cyclic());
        assert!(recursive_underlying_error(&Ping).is_none());
    }
}
