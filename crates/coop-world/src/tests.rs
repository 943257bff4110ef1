//! Unit tests for coop-world.

#[cfg(test)]
mod resource {
    use coop_core::{Position, SimRng};

    use crate::{Capacity, ResourceKind, ResourceNode, YieldSpec};

    #[test]
    fn defaults_per_kind() {
        let p = Position::new(0, 0);
        let food = ResourceNode::new(ResourceKind::Food, p);
        let water = ResourceNode::new(ResourceKind::Water, p);
        let bath = ResourceNode::new(ResourceKind::Bath, p);

        assert_eq!(food.current_amount(), 100);
        assert_eq!(food.yield_spec, YieldSpec::Fixed(1.0));
        assert_eq!(water.current_amount(), 1_000);
        assert_eq!(water.yield_spec, YieldSpec::Fixed(1.0));
        assert_eq!(bath.capacity, Capacity::Unbounded);
        assert_eq!(bath.current_amount(), 0);
        assert_eq!(bath.yield_spec, YieldSpec::UniformInt { low: 10, high: 25 });
    }

    #[test]
    fn consume_has_no_floor() {
        let mut n = ResourceNode::with_params(
            ResourceKind::Food,
            Position::new(0, 0),
            Capacity::Limited(1),
            YieldSpec::Fixed(3.0),
        );
        assert!(!n.is_depleted());
        assert_eq!(n.consume(), 0);
        assert!(n.is_depleted());
        assert_eq!(n.consume(), -1);
        assert_eq!(n.consume(), -2);
    }

    #[test]
    fn unbounded_never_depletes() {
        let mut n = ResourceNode::new(ResourceKind::Bath, Position::new(0, 0));
        for _ in 0..50 {
            n.consume();
        }
        assert_eq!(n.current_amount(), -50);
        assert!(!n.is_depleted());
    }

    #[test]
    fn refill_caps_at_capacity() {
        let mut n = ResourceNode::new(ResourceKind::Food, Position::new(0, 0));
        for _ in 0..10 {
            n.consume();
        }
        n.refill(Some(4));
        assert_eq!(n.current_amount(), 94);
        n.refill(Some(1_000));
        assert_eq!(n.current_amount(), 100);
        n.consume();
        n.refill(None);
        assert_eq!(n.current_amount(), 100);
    }

    #[test]
    fn uniform_yield_stays_in_range() {
        let mut rng = SimRng::new(9);
        let spec = YieldSpec::UniformInt { low: 10, high: 25 };
        for _ in 0..500 {
            let v = spec.sample(&mut rng);
            assert!((10.0..=25.0).contains(&v));
            assert_eq!(v.fract(), 0.0);
        }
    }

    #[test]
    fn invalid_params_rejected() {
        let p = Position::new(0, 0);
        let empty = ResourceNode::with_params(
            ResourceKind::Bath, p, Capacity::Unbounded, YieldSpec::UniformInt { low: 5, high: 4 },
        );
        assert!(empty.validate().is_err());

        let zero = ResourceNode::with_params(
            ResourceKind::Food, p, Capacity::Limited(0), YieldSpec::Fixed(3.0),
        );
        assert!(zero.validate().is_err());

        let nan = ResourceNode::with_params(
            ResourceKind::Water, p, Capacity::Limited(10), YieldSpec::Fixed(f64::NAN),
        );
        assert!(nan.validate().is_err());
    }
}

#[cfg(test)]
mod layout {
    use coop_core::{GridWorld, Position, ResourceId};

    use crate::{ResourceKind, ResourceLayout, ResourceNode, WorldError};

    fn p(x: i32, y: i32) -> Position {
        Position::new(x, y)
    }

    #[test]
    fn nearest_is_manhattan() {
        let layout = ResourceLayout::from_positions([p(0, 0), p(5, 5)], [], [p(2, 2)]);
        assert_eq!(layout.nearest_distance(ResourceKind::Food, p(4, 4)), Some(2));
        assert_eq!(layout.nearest_distance(ResourceKind::Food, p(1, 0)), Some(1));
        assert_eq!(layout.nearest_distance(ResourceKind::Bath, p(0, 0)), Some(4));
    }

    #[test]
    fn nearest_of_missing_kind_is_none() {
        let layout = ResourceLayout::from_positions([p(0, 0)], [], []);
        assert_eq!(layout.nearest_distance(ResourceKind::Water, p(0, 0)), None);
    }

    #[test]
    fn entity_order_is_food_water_bath() {
        let layout = ResourceLayout::from_positions([p(0, 0)], [p(1, 0)], [p(2, 0), p(3, 0)]);
        let kinds: Vec<_> = layout.iter().map(|n| n.kind).collect();
        assert_eq!(
            kinds,
            [ResourceKind::Food, ResourceKind::Water, ResourceKind::Bath, ResourceKind::Bath]
        );
        assert_eq!(layout.len(), 4);
    }

    #[test]
    fn first_at_prefers_food() {
        let mut layout = ResourceLayout::new();
        layout.push(ResourceNode::new(ResourceKind::Bath, p(1, 1)));
        layout.push(ResourceNode::new(ResourceKind::Water, p(1, 1)));
        let id = layout.push(ResourceNode::new(ResourceKind::Food, p(1, 1)));
        assert_eq!(id, ResourceId(0));
        assert_eq!(layout.first_at(p(1, 1)), Some((ResourceKind::Food, ResourceId(0))));
        assert_eq!(layout.first_at(p(0, 0)), None);
    }

    #[test]
    fn validate_catches_off_grid_node() {
        let layout = ResourceLayout::from_positions([p(0, 0)], [p(9, 9)], []);
        let err = layout.validate(&GridWorld::new(5, 5)).unwrap_err();
        assert!(matches!(
            err,
            WorldError::ResourceOutOfBounds { kind: ResourceKind::Water, index: 0, .. }
        ));
    }

    #[test]
    fn refill_all_restores_limited_nodes() {
        let mut layout = ResourceLayout::from_positions([p(0, 0)], [p(1, 1)], []);
        layout.food[0].consume();
        layout.water[0].consume();
        layout.refill_all();
        assert_eq!(layout.food[0].current_amount(), 100);
        assert_eq!(layout.water[0].current_amount(), 1_000);
    }
}

#[cfg(test)]
mod interaction {
    use coop_agent::Needs;
    use coop_core::{Position, ResourceId, SimRng};

    use crate::{Capacity, InteractionResolver, ResourceKind, ResourceLayout, ResourceNode, YieldSpec};

    fn p(x: i32, y: i32) -> Position {
        Position::new(x, y)
    }

    #[test]
    fn empty_cell_is_noop() {
        let mut layout = ResourceLayout::from_positions([p(0, 0)], [], []);
        let mut needs = Needs::default();
        let mut rng = SimRng::new(0);
        let r = InteractionResolver::default().apply(&mut layout, p(3, 3), &mut needs, &mut rng);
        assert!(r.is_none());
        assert_eq!(needs, Needs::default());
    }

    #[test]
    fn food_adds_yield_and_decrements() {
        let mut layout = ResourceLayout::from_positions([p(2, 2)], [], []);
        let mut needs = Needs::uniform(50.0);
        let mut rng = SimRng::new(0);
        let r = InteractionResolver::default()
            .apply(&mut layout, p(2, 2), &mut needs, &mut rng)
            .unwrap();
        assert_eq!(r.kind, ResourceKind::Food);
        assert_eq!(r.resource, ResourceId(0));
        assert_eq!(r.amount, 1.0);
        assert_eq!(r.remaining, 99);
        assert_eq!(needs.food, 51.0);
        assert_eq!(needs.water, 50.0);
    }

    #[test]
    fn bath_yield_goes_to_cleanliness() {
        let mut layout = ResourceLayout::from_positions([], [], [p(0, 0)]);
        let mut needs = Needs::uniform(0.0);
        let mut rng = SimRng::new(3);
        let r = InteractionResolver::default()
            .apply(&mut layout, p(0, 0), &mut needs, &mut rng)
            .unwrap();
        assert!((10.0..=25.0).contains(&needs.cleanliness));
        assert_eq!(needs.cleanliness, r.amount);
        assert_eq!(needs.food, 0.0);
    }

    #[test]
    fn capacity_is_ignored_by_default() {
        let mut layout = ResourceLayout::new();
        layout.push(ResourceNode::with_params(
            ResourceKind::Food, p(0, 0), Capacity::Limited(1), YieldSpec::Fixed(3.0),
        ));
        let resolver = InteractionResolver::default();
        let mut needs = Needs::uniform(0.0);
        let mut rng = SimRng::new(0);
        for _ in 0..3 {
            resolver.apply(&mut layout, p(0, 0), &mut needs, &mut rng);
        }
        assert_eq!(needs.food, 9.0);
        assert_eq!(layout.food[0].current_amount(), -2);
    }

    #[test]
    fn enforced_capacity_stops_yield() {
        let mut layout = ResourceLayout::new();
        layout.push(ResourceNode::with_params(
            ResourceKind::Food, p(0, 0), Capacity::Limited(2), YieldSpec::Fixed(3.0),
        ));
        let resolver = InteractionResolver::new(true);
        let mut needs = Needs::uniform(0.0);
        let mut rng = SimRng::new(0);
        for _ in 0..5 {
            resolver.apply(&mut layout, p(0, 0), &mut needs, &mut rng);
        }
        assert_eq!(needs.food, 6.0);
        assert_eq!(layout.food[0].current_amount(), 0);
    }

    #[test]
    fn shared_cell_grants_each_agent() {
        let mut layout = ResourceLayout::from_positions([], [p(1, 1)], []);
        let resolver = InteractionResolver::default();
        let mut rng = SimRng::new(0);
        let mut a = Needs::uniform(0.0);
        let mut b = Needs::uniform(0.0);
        resolver.apply(&mut layout, p(1, 1), &mut a, &mut rng);
        resolver.apply(&mut layout, p(1, 1), &mut b, &mut rng);
        assert_eq!(a.water, 1.0);
        assert_eq!(b.water, 1.0);
        assert_eq!(layout.water[0].current_amount(), 998);
    }
}
