//! What happens when an agent lands on a resource cell.

use coop_agent::Needs;
use coop_core::{Position, ResourceId, SimRng};
use tracing::{debug, info};

use crate::{Capacity, ResourceKind, ResourceLayout};

/// The result of one agent's interaction with one node.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Interaction {
    pub kind:     ResourceKind,
    pub resource: ResourceId,
    /// Amount added to the matching need.  Zero only when capacity is
    /// enforced and the node was depleted.
    pub amount:   f64,
    /// The node's counter after this interaction.
    pub remaining: i64,
}

/// Resolves arrivals on resource cells.
///
/// Agents are resolved one at a time in tick order, so two agents sharing a
/// cell each get the full yield.  With `enforce_capacity` off (the default)
/// the counter is decremented but never consulted.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct InteractionResolver {
    pub enforce_capacity: bool,
}

impl InteractionResolver {
    pub fn new(enforce_capacity: bool) -> Self {
        Self { enforce_capacity }
    }

    /// Consume from the first node on `pos` (food, water, then bath) and
    /// return what was granted.  `None` when `pos` holds no resource.
    pub fn resolve(
        &self,
        layout: &mut ResourceLayout,
        pos:    Position,
        rng:    &mut SimRng,
    ) -> Option<Interaction> {
        let (kind, resource) = layout.first_at(pos)?;
        let node = &mut layout.of_kind_mut(kind)[resource.index()];

        if self.enforce_capacity && node.is_depleted() {
            debug!(%kind, id = resource.0, "depleted resource granted nothing");
            return Some(Interaction { kind, resource, amount: 0.0, remaining: node.current_amount() });
        }

        let amount = node.yield_spec.sample(rng);
        let remaining = node.consume();
        if remaining == -1 && matches!(node.capacity, Capacity::Limited(_)) {
            info!(%kind, id = resource.0, "resource counter driven below zero");
        }

        Some(Interaction { kind, resource, amount, remaining })
    }

    /// [`resolve`](Self::resolve) and add the yield to `needs`.
    pub fn apply(
        &self,
        layout: &mut ResourceLayout,
        pos:    Position,
        needs:  &mut Needs,
        rng:    &mut SimRng,
    ) -> Option<Interaction> {
        let interaction = self.resolve(layout, pos, rng)?;
        needs.add(interaction.kind.need(), interaction.amount);
        Some(interaction)
    }
}
