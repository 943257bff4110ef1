//! All resource nodes of a run, grouped by kind.

use coop_core::{GridWorld, Position, ResourceId};

use crate::{ResourceKind, ResourceNode, WorldError, WorldResult};

/// Per-kind resource collections.
///
/// Index `i` within a kind's `Vec` is that node's `ResourceId` and also the
/// suffix in its entity name (`water_{i}`).
#[derive(Clone, Debug, Default)]
pub struct ResourceLayout {
    pub food:  Vec<ResourceNode>,
    pub water: Vec<ResourceNode>,
    pub bath:  Vec<ResourceNode>,
}

impl ResourceLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default-parameter nodes at the given positions.
    pub fn from_positions(
        food:  impl IntoIterator<Item = Position>,
        water: impl IntoIterator<Item = Position>,
        bath:  impl IntoIterator<Item = Position>,
    ) -> Self {
        let make = |kind: ResourceKind, ps: Vec<Position>| {
            ps.into_iter().map(|p| ResourceNode::new(kind, p)).collect()
        };
        Self {
            food:  make(ResourceKind::Food, food.into_iter().collect()),
            water: make(ResourceKind::Water, water.into_iter().collect()),
            bath:  make(ResourceKind::Bath, bath.into_iter().collect()),
        }
    }

    /// Append `node` to its kind's collection and return its ID.
    pub fn push(&mut self, node: ResourceNode) -> ResourceId {
        let list = self.of_kind_mut(node.kind);
        list.push(node);
        ResourceId((list.len() - 1) as u32)
    }

    #[inline]
    pub fn of_kind(&self, kind: ResourceKind) -> &[ResourceNode] {
        match kind {
            ResourceKind::Food  => &self.food,
            ResourceKind::Water => &self.water,
            ResourceKind::Bath  => &self.bath,
        }
    }

    #[inline]
    pub fn of_kind_mut(&mut self, kind: ResourceKind) -> &mut Vec<ResourceNode> {
        match kind {
            ResourceKind::Food  => &mut self.food,
            ResourceKind::Water => &mut self.water,
            ResourceKind::Bath  => &mut self.bath,
        }
    }

    /// Total node count across all kinds.
    pub fn len(&self) -> usize {
        self.food.len() + self.water.len() + self.bath.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every node in entity order: food, then water, then bath.
    pub fn iter(&self) -> impl Iterator<Item = &ResourceNode> + '_ {
        self.food.iter().chain(self.water.iter()).chain(self.bath.iter())
    }

    /// Manhattan distance from `pos` to the closest node of `kind`.
    ///
    /// `None` when the layout has no node of that kind; callers treat that
    /// as infinitely far away.
    pub fn nearest_distance(&self, kind: ResourceKind, pos: Position) -> Option<u32> {
        self.of_kind(kind).iter().map(|n| n.position.manhattan(pos)).min()
    }

    /// `true` if some node of `kind` sits exactly on `pos`.
    #[inline]
    pub fn has_kind_at(&self, kind: ResourceKind, pos: Position) -> bool {
        self.of_kind(kind).iter().any(|n| n.position == pos)
    }

    /// First node on `pos`, scanning food, then water, then bath.
    pub fn first_at(&self, pos: Position) -> Option<(ResourceKind, ResourceId)> {
        ResourceKind::ALL.into_iter().find_map(|kind| {
            self.of_kind(kind)
                .iter()
                .position(|n| n.position == pos)
                .map(|i| (kind, ResourceId(i as u32)))
        })
    }

    /// Refill every node to capacity.
    pub fn refill_all(&mut self) {
        for kind in ResourceKind::ALL {
            for node in self.of_kind_mut(kind) {
                node.refill(None);
            }
        }
    }

    /// Check every node lies on `grid` and has sane parameters.
    pub fn validate(&self, grid: &GridWorld) -> WorldResult<()> {
        for kind in ResourceKind::ALL {
            for (index, node) in self.of_kind(kind).iter().enumerate() {
                if !grid.is_valid(node.position) {
                    return Err(WorldError::ResourceOutOfBounds { kind, index, pos: node.position });
                }
                node.validate()?;
            }
        }
        Ok(())
    }
}
