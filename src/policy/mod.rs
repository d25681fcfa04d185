//! Disambiguation policy.
//!
//! Given the candidates a host capability returned and a filter, [`decide`]
//! chooses between acting on the single surviving candidate, handing a list
//! to the host's chooser UI, or doing nothing. The filter is a
//! [`FilterPredicate`], so the title heuristics used today can be swapped
//! for another classification without touching the decision itself.

mod decision;
mod predicate;

pub use decision::{AmbiguousScope, Decision, EmptyFallback, Policy, decide, filter_candidates};
pub use predicate::{ExcludeEnclosingReference, FilterPredicate, ImportActionFilter};
