//! Directed friend/enemy graph keyed by agent-ID pairs.

use std::fmt;
use std::str::FromStr;

use coop_core::AgentId;
use rustc_hash::FxHashMap;

use crate::{SocialError, SocialResult};

/// How one agent regards another.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RelationKind {
    Friend,
    Enemy,
}

impl RelationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            RelationKind::Friend => "friend",
            RelationKind::Enemy  => "enemy",
        }
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RelationKind {
    type Err = SocialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "friend" => Ok(RelationKind::Friend),
            "enemy"  => Ok(RelationKind::Enemy),
            _ => Err(SocialError::UnknownKind(s.to_owned())),
        }
    }
}

// ── RelationGraph ─────────────────────────────────────────────────────────────

/// Ordered-pair relation lookup.
///
/// `(a, b) → Friend` says nothing about `(b, a)`: A may count B as a friend
/// while B counts A as an enemy.
///
/// Alongside the pair index, each agent's friends and enemies are kept as
/// sorted `Vec`s so scoring can iterate them in a fixed order.  Only agents
/// that hold at least one relation get an entry, so a large ID costs no more
/// than a small one.
#[derive(Clone, Debug, Default)]
pub struct RelationGraph {
    pairs:   FxHashMap<(AgentId, AgentId), RelationKind>,
    friends: FxHashMap<AgentId, Vec<AgentId>>,
    enemies: FxHashMap<AgentId, Vec<AgentId>>,
}

impl RelationGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `from` regards `to` as `kind`.
    ///
    /// Re-inserting an identical edge is a no-op.
    ///
    /// # Errors
    /// - [`SocialError::SelfRelation`] if `from == to`.
    /// - [`SocialError::Conflict`] if the pair already carries the other kind.
    pub fn insert(&mut self, from: AgentId, to: AgentId, kind: RelationKind) -> SocialResult<()> {
        if from == to {
            return Err(SocialError::SelfRelation(from));
        }
        if let Some(&existing) = self.pairs.get(&(from, to)) {
            if existing == kind {
                return Ok(());
            }
            return Err(SocialError::Conflict { from, to, existing, requested: kind });
        }
        self.pairs.insert((from, to), kind);

        let lists = match kind {
            RelationKind::Friend => &mut self.friends,
            RelationKind::Enemy  => &mut self.enemies,
        };
        let list = lists.entry(from).or_default();
        if let Err(at) = list.binary_search(&to) {
            list.insert(at, to);
        }
        Ok(())
    }

    /// Insert the edge in both directions.
    pub fn insert_mutual(&mut self, a: AgentId, b: AgentId, kind: RelationKind) -> SocialResult<()> {
        self.insert(a, b, kind)?;
        self.insert(b, a, kind)
    }

    /// How `from` regards `to`, if at all.
    #[inline]
    pub fn relation(&self, from: AgentId, to: AgentId) -> Option<RelationKind> {
        self.pairs.get(&(from, to)).copied()
    }

    /// Agents `agent` counts as friends, ascending by ID.
    #[inline]
    pub fn friends_of(&self, agent: AgentId) -> &[AgentId] {
        self.friends.get(&agent).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Agents `agent` counts as enemies, ascending by ID.
    #[inline]
    pub fn enemies_of(&self, agent: AgentId) -> &[AgentId] {
        self.enemies.get(&agent).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of directed edges.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Every edge as `(from, to, kind)`, sorted by `(from, to)`.
    pub fn edges(&self) -> Vec<(AgentId, AgentId, RelationKind)> {
        let mut out: Vec<_> = self.pairs.iter().map(|(&(a, b), &k)| (a, b, k)).collect();
        out.sort_unstable_by_key(|&(a, b, _)| (a, b));
        out
    }

    /// Check that every edge names an agent below `agent_count`.
    ///
    /// Reports the lowest offending ID so the error is stable across runs.
    pub fn validate(&self, agent_count: usize) -> SocialResult<()> {
        let offender = self
            .pairs
            .keys()
            .flat_map(|&(a, b)| [a, b])
            .filter(|id| id.index() >= agent_count)
            .min();
        match offender {
            Some(agent) => Err(SocialError::UnknownAgent { agent, agent_count }),
            None => Ok(()),
        }
    }
}
