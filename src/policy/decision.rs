//! Cardinality-based decision between acting and asking.

use super::FilterPredicate;

/// What to do when no candidate survives the filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmptyFallback {
    /// Do nothing.
    Noop,
    /// Hand every unfiltered candidate to the host chooser.
    ShowAll,
}

/// Which list goes to the host chooser when several candidates survive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AmbiguousScope {
    /// Only the candidates that passed the filter.
    Filtered,
    /// Everything the host returned; the filter only detects a clear winner.
    Unfiltered,
}

/// Per-call-site parameters of [`decide`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Policy {
    pub on_empty: EmptyFallback,
    pub on_ambiguous: AmbiguousScope,
}

impl Policy {
    /// Import quick-fixes: anything but a single match opens the chooser
    /// over every action.
    pub const IMPORT_ACTION: Policy = Policy {
        on_empty: EmptyFallback::ShowAll,
        on_ambiguous: AmbiguousScope::Unfiltered,
    };

    /// Reference navigation: nothing left means nothing to do; several
    /// matches go to the panel without the self-reference.
    pub const REFERENCES: Policy = Policy {
        on_empty: EmptyFallback::Noop,
        on_ambiguous: AmbiguousScope::Filtered,
    };
}

/// Outcome of [`decide`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Decision<T> {
    /// Exactly one candidate matched; act on it directly.
    AutoApply(T),
    /// Let the user pick from this list in the host's own UI.
    DelegateToHostUi(Vec<T>),
    /// Nothing to do.
    Noop,
}

impl<T> Decision<T> {
    pub fn is_noop(&self) -> bool {
        matches!(self, Decision::Noop)
    }

    /// Short label for logs.
    pub fn label(&self) -> &'static str {
        match self {
            Decision::AutoApply(_) => "auto-apply",
            Decision::DelegateToHostUi(_) => "delegate",
            Decision::Noop => "noop",
        }
    }
}

/// Candidates accepted by `predicate`, in their original order.
///
/// The predicate is evaluated exactly once per candidate and `candidates`
/// is left untouched.
pub fn filter_candidates<T, P>(candidates: &[T], predicate: &P) -> Vec<T>
where
    T: Clone,
    P: FilterPredicate<T> + ?Sized,
{
    candidates
        .iter()
        .filter(|candidate| predicate.matches(candidate))
        .cloned()
        .collect()
}

/// Decide between auto-applying a single match and delegating to the host.
///
/// Pure: the same candidates, predicate and policy always give the same
/// decision.
pub fn decide<T, P>(candidates: &[T], predicate: &P, policy: Policy) -> Decision<T>
where
    T: Clone,
    P: FilterPredicate<T> + ?Sized,
{
    let mut filtered = filter_candidates(candidates, predicate);

    match filtered.len() {
        0 => match policy.on_empty {
            EmptyFallback::Noop => Decision::Noop,
            EmptyFallback::ShowAll => Decision::DelegateToHostUi(candidates.to_vec()),
        },
        1 => Decision::AutoApply(filtered.remove(0)),
        _ => match policy.on_ambiguous {
            AmbiguousScope::Filtered => Decision::DelegateToHostUi(filtered),
            AmbiguousScope::Unfiltered => Decision::DelegateToHostUi(candidates.to_vec()),
        },
    }
}
