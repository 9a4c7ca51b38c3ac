//! Demo catalog model: named groups of runnable hooks.
//!
//! The catalog is constructed once at process start and is immutable for
//! the process lifetime. Dispatch logic receives it as an explicit value
//! rather than reading ambient global state, so tests can build an
//! alternate catalog and feed it to the same dispatcher.

use std::collections::HashSet;

use crate::error::{DemoError, DemoResult};

/// A runnable demo unit: no inputs, no observable result.
///
/// Hooks are trusted to be synchronous and to report their own failures
/// through console output. The dispatcher has no error channel from a
/// hook and never inspects what one did.
pub trait DemoHook {
    /// Run the unit for its side effects.
    fn run(&self);
}

impl<F: Fn()> DemoHook for F {
    fn run(&self) {
        self()
    }
}

/// Box a closure or fn item as a registrable hook.
pub fn hook<F: Fn() + 'static>(f: F) -> Box<dyn DemoHook> {
    Box::new(f)
}

/// A named, ordered collection of hooks representing one demo section.
pub struct DemoGroup {
    name: String,
    hooks: Vec<Box<dyn DemoHook>>,
}

impl DemoGroup {
    /// The group's catalog name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Hooks in registration order.
    pub fn hooks(&self) -> &[Box<dyn DemoHook>] {
        &self.hooks
    }

    /// Run every hook in registration order.
    pub fn run(&self) {
        for hook in &self.hooks {
            hook.run();
        }
    }
}

/// The fixed, ordered list of all demo groups known to the dispatcher.
///
/// Iteration order is registration order and defines the default
/// ("run all") execution order.
pub struct Catalog {
    groups: Vec<DemoGroup>,
}

impl std::fmt::Debug for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Catalog")
            .field("groups", &self.names())
            .finish()
    }
}

impl Catalog {
    /// Start building a catalog.
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// Groups in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &DemoGroup> {
        self.groups.iter()
    }

    /// Look up a group by name. Case-sensitive exact match.
    pub fn get(&self, name: &str) -> Option<&DemoGroup> {
        self.groups.iter().find(|group| group.name == name)
    }

    /// All group names in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.groups.iter().map(|group| group.name.as_str()).collect()
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether the catalog has no groups.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Builder for [`Catalog`]. Registration order becomes catalog order.
#[derive(Default)]
pub struct CatalogBuilder {
    groups: Vec<DemoGroup>,
}

impl CatalogBuilder {
    /// Register a group with its hooks in execution order.
    pub fn group(mut self, name: impl Into<String>, hooks: Vec<Box<dyn DemoHook>>) -> Self {
        self.groups.push(DemoGroup {
            name: name.into(),
            hooks,
        });
        self
    }

    /// Finish building. Fails if two groups share a name.
    pub fn build(self) -> DemoResult<Catalog> {
        let mut seen = HashSet::new();
        for group in &self.groups {
            if !seen.insert(group.name.as_str()) {
                return Err(DemoError::duplicate_group(&group.name));
            }
        }
        Ok(Catalog {
            groups: self.groups,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn noop() {}

    #[test]
    fn names_follow_registration_order() {
        let catalog = Catalog::builder()
            .group("alpha", vec![hook(noop)])
            .group("beta", vec![hook(noop)])
            .group("gamma", vec![])
            .build()
            .unwrap();

        assert_eq!(catalog.names(), vec!["alpha", "beta", "gamma"]);
        assert_eq!(catalog.len(), 3);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let catalog = Catalog::builder()
            .group("alpha", vec![hook(noop)])
            .build()
            .unwrap();

        assert!(catalog.get("alpha").is_some());
        assert!(catalog.get("Alpha").is_none());
        assert!(catalog.get("alpha ").is_none());
    }

    #[test]
    fn duplicate_name_is_rejected() {
        let err = Catalog::builder()
            .group("alpha", vec![hook(noop)])
            .group("alpha", vec![hook(noop)])
            .build()
            .unwrap_err();

        assert_eq!(err.kind, ErrorKind::DuplicateGroup);
        assert!(err.message.contains("alpha"));
    }

    #[test]
    fn group_runs_hooks_in_registration_order() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let trace = Rc::new(RefCell::new(Vec::new()));
        let first = Rc::clone(&trace);
        let second = Rc::clone(&trace);

        let catalog = Catalog::builder()
            .group(
                "alpha",
                vec![
                    hook(move || first.borrow_mut().push("first")),
                    hook(move || second.borrow_mut().push("second")),
                ],
            )
            .build()
            .unwrap();

        catalog.get("alpha").unwrap().run();
        assert_eq!(*trace.borrow(), vec!["first", "second"]);
    }
}
