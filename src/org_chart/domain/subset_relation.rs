use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Team name -> names of the teams whose rosters contain it
///
/// Only direct pairwise containment is stored; the relation is not
/// transitively closed. A team is never recorded as a subset of itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SubsetRelation {
    subsets: BTreeMap<String, BTreeSet<String>>,
}

impl SubsetRelation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `team` as a subset of `other`. Self-pairs are ignored.
    pub fn add(&mut self, team: &str, other: &str) {
        if team == other {
            return;
        }

        self.subsets
            .entry(team.to_string())
            .or_default()
            .insert(other.to_string());
    }

    pub fn is_subset(&self, team: &str, other: &str) -> bool {
        self.subsets
            .get(team)
            .is_some_and(|supersets| supersets.contains(other))
    }

    /// Names of the teams that `team` is a subset of, in name order
    pub fn subsets_of(&self, team: &str) -> Vec<&str> {
        self.subsets
            .get(team)
            .map(|supersets| supersets.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// All `(subset, superset)` pairs in name order
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.subsets.iter().flat_map(|(team, supersets)| {
            supersets
                .iter()
                .map(move |other| (team.as_str(), other.as_str()))
        })
    }

    pub fn pair_count(&self) -> usize {
        self.subsets.values().map(BTreeSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.subsets.is_empty()
    }
}
