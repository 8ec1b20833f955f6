//! Two-pass content cleaning.
//!
//! Pass one detaches subtrees matching the "unwanted" selector list,
//! skipping matches that also match a "preserve" selector. Pass two strips
//! event-handler and inline-style attributes from everything that remains.
//!
//! The pass order is an invariant: several unwanted selectors key off
//! inline style values (hidden elements), so attribute stripping must
//! never run first. The cleaner only ever receives a working clone; the
//! host tree is untouched.

use std::collections::HashSet;

use dom_query::{Document, NodeId, Selection};
use tracing::trace;

use crate::dom;
use crate::options::CleanerRules;

/// Content cleaner with an immutable rule set injected at construction.
#[derive(Debug, Clone)]
pub struct Cleaner {
    rules: CleanerRules,
}

impl Cleaner {
    /// Build a cleaner around the given rule lists.
    #[must_use]
    pub fn new(rules: CleanerRules) -> Self {
        Self { rules }
    }

    /// Clean the working document in place: removal pass, then attribute
    /// pass.
    pub fn clean(&self, doc: &Document) {
        self.remove_unwanted(doc);
        strip_attributes(doc);
    }

    /// Detach every unwanted match that is not on the preserve list.
    fn remove_unwanted(&self, doc: &Document) {
        let preserved = self.preserved_ids(doc);

        for selector in &self.rules.unwanted {
            for node in doc.select(selector).nodes() {
                if preserved.contains(&node.id) {
                    trace!(selector = selector.as_str(), "unwanted match preserved");
                    continue;
                }
                dom::remove(&Selection::from(*node));
            }
        }
    }

    /// Node ids matching any preserve selector, collected up front so the
    /// check is an identity lookup during removal.
    fn preserved_ids(&self, doc: &Document) -> HashSet<NodeId> {
        let mut ids = HashSet::new();
        for selector in &self.rules.preserve {
            for node in doc.select(selector).nodes() {
                ids.insert(node.id);
            }
        }
        ids
    }
}

impl Default for Cleaner {
    fn default() -> Self {
        Self::new(CleanerRules::default())
    }
}

/// Strip event-handler (`on*`) and inline `style` attributes from every
/// remaining element. Identity and class attributes stay: downstream
/// consumers use them for citations, and media extraction needs
/// `src`/`href`/dimension attributes intact.
fn strip_attributes(doc: &Document) {
    for node in doc.select("*").nodes() {
        let sel = Selection::from(*node);
        for (name, _) in dom::get_all_attributes(&sel) {
            if name == "style" || name.starts_with("on") {
                dom::remove_attribute(&sel, &name);
            }
        }
    }
}
