//! Ancestry resolution over the commit graph
//!
//! Commits only know their parents, so every query here is a walk from a tip
//! towards the root. The resolver takes a parent-loading function rather than a
//! repository, which lets the same code run against the on-disk store and
//! against in-memory graphs.
//!
//! ## Merge base selection
//!
//! `common_ancestor(source, target)` first collects every ancestor of `source`.
//! It then expands a frontier from `target` one parent generation at a time
//! until the frontier meets that set. When the frontier meets it at several
//! commits at once, the candidate furthest from the root (highest generation
//! number) is chosen, and remaining ties go to the smallest commit id.

use crate::artifacts::errors::WitError;
use crate::artifacts::objects::commit::Parents;
use crate::artifacts::objects::commit_id::CommitId;
use std::cmp::Reverse;
use std::collections::{BTreeSet, HashMap};

/// Every ancestor of a commit (itself included) mapped to its direct parents
pub type ParentChain = HashMap<CommitId, Parents>;

pub struct AncestryResolver<ParentLoaderFn>
where
    ParentLoaderFn: Fn(&CommitId) -> anyhow::Result<Parents>,
{
    parent_loader: ParentLoaderFn,
}

impl<ParentLoaderFn> AncestryResolver<ParentLoaderFn>
where
    ParentLoaderFn: Fn(&CommitId) -> anyhow::Result<Parents>,
{
    pub fn new(parent_loader: ParentLoaderFn) -> Self {
        Self { parent_loader }
    }

    /// Walk the parent relation from `start` down to the root(s)
    ///
    /// Both lineages of a merge commit are followed; each commit is loaded once.
    pub fn parent_chain(&self, start: &CommitId) -> anyhow::Result<ParentChain> {
        let mut chain = ParentChain::new();
        let mut pending = vec![start.clone()];

        while let Some(oid) = pending.pop() {
            if chain.contains_key(&oid) {
                continue;
            }

            let parents = (self.parent_loader)(&oid)?;
            pending.extend(
                parents
                    .ids()
                    .into_iter()
                    .filter(|parent| !chain.contains_key(*parent))
                    .cloned(),
            );
            chain.insert(oid, parents);
        }

        Ok(chain)
    }

    /// Nearest commit reachable from both `source` and `target`
    pub fn common_ancestor(
        &self,
        source: &CommitId,
        target: &CommitId,
    ) -> anyhow::Result<CommitId> {
        let source_chain = self.parent_chain(source)?;
        let mut frontier = BTreeSet::from([target.clone()]);
        let mut expanded = BTreeSet::<CommitId>::new();

        while !frontier.is_empty() {
            let candidates = frontier
                .iter()
                .filter(|oid| source_chain.contains_key(*oid))
                .collect::<Vec<_>>();

            if !candidates.is_empty() {
                tracing::debug!(
                    candidates = candidates.len(),
                    "frontier reached the source lineage"
                );
                return Ok(Self::pick_candidate(&source_chain, candidates));
            }

            let mut next = BTreeSet::new();
            for oid in frontier.into_iter() {
                let parents = (self.parent_loader)(&oid)?;
                next.extend(
                    parents
                        .ids()
                        .into_iter()
                        .filter(|parent| !expanded.contains(*parent))
                        .cloned(),
                );
                expanded.insert(oid);
            }

            tracing::debug!(size = next.len(), "expanded merge base frontier");
            frontier = next;
        }

        Err(WitError::NoCommonAncestor(source.to_string(), target.to_string()).into())
    }

    fn pick_candidate(chain: &ParentChain, candidates: Vec<&CommitId>) -> CommitId {
        let generations = generation_numbers(chain);

        candidates
            .into_iter()
            .max_by_key(|oid| {
                (
                    generations.get(*oid).copied().unwrap_or_default(),
                    Reverse(*oid),
                )
            })
            .cloned()
            .unwrap_or_default()
    }
}

/// Length of the longest parent path from each commit down to a root
///
/// The chain is closed under the parent relation, so every parent looked up
/// here is present in it.
pub fn generation_numbers(chain: &ParentChain) -> HashMap<CommitId, usize> {
    let mut generations = HashMap::<CommitId, usize>::with_capacity(chain.len());

    for start in chain.keys() {
        let mut stack = vec![(start, false)];

        while let Some((oid, parents_done)) = stack.pop() {
            if generations.contains_key(oid) {
                continue;
            }

            let parents = chain.get(oid).map(Parents::ids).unwrap_or_default();

            if parents_done {
                let generation = parents
                    .iter()
                    .filter_map(|parent| generations.get(*parent))
                    .map(|generation| generation + 1)
                    .max()
                    .unwrap_or(0);
                generations.insert(oid.clone(), generation);
            } else {
                stack.push((oid, true));
                stack.extend(
                    parents
                        .into_iter()
                        .filter(|parent| !generations.contains_key(*parent))
                        .map(|parent| (parent, false)),
                );
            }
        }
    }

    generations
}
