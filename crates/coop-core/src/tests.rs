//! Unit tests for coop-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, AgentIdGen, ResourceId};

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(AgentId::INVALID.0, u32::MAX);
        assert_eq!(ResourceId::INVALID.0, u32::MAX);
        assert_eq!(AgentId::default(), AgentId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
    }

    #[test]
    fn generator_is_monotonic_from_zero() {
        let mut ids = AgentIdGen::new();
        assert_eq!(ids.next_id(), AgentId(0));
        assert_eq!(ids.next_id(), AgentId(1));
        assert_eq!(ids.next_id(), AgentId(2));
        assert_eq!(ids.issued(), 3);
    }

    #[test]
    fn independent_generators_do_not_share_state() {
        let mut a = AgentIdGen::new();
        let mut b = AgentIdGen::new();
        a.next_id();
        a.next_id();
        assert_eq!(b.next_id(), AgentId(0));
    }
}

#[cfg(test)]
mod grid {
    use proptest::prelude::*;

    use crate::{GridWorld, Move, Position};

    #[test]
    fn validity_bounds() {
        let g = GridWorld::new(5, 3);
        assert!(g.is_valid(Position::new(0, 0)));
        assert!(g.is_valid(Position::new(4, 2)));
        assert!(!g.is_valid(Position::new(5, 0)));
        assert!(!g.is_valid(Position::new(0, 3)));
        assert!(!g.is_valid(Position::new(-1, 0)));
        assert!(!g.is_valid(Position::new(0, -1)));
    }

    #[test]
    fn adjacency_is_chebyshev_one_and_excludes_self() {
        let a = Position::new(2, 2);
        assert!(GridWorld::adjacent(a, Position::new(3, 3)));
        assert!(GridWorld::adjacent(a, Position::new(2, 1)));
        assert!(!GridWorld::adjacent(a, a));
        assert!(!GridWorld::adjacent(a, Position::new(4, 2)));
    }

    #[test]
    fn distances() {
        let a = Position::new(0, 0);
        let b = Position::new(3, -4);
        assert_eq!(a.manhattan(b), 7);
        assert_eq!(a.chebyshev(b), 4);
    }

    #[test]
    fn move_deltas_and_order() {
        let p = Position::new(1, 1);
        assert_eq!(p.step(Move::North), Position::new(1, 0));
        assert_eq!(p.step(Move::South), Position::new(1, 2));
        assert_eq!(p.step(Move::East), Position::new(2, 1));
        assert_eq!(p.step(Move::West), Position::new(0, 1));
        assert_eq!(p.step(Move::Stay), p);
        for (i, mv) in Move::ALL.iter().enumerate() {
            assert_eq!(mv.index(), i);
        }
    }

    #[test]
    fn cell_index_row_major() {
        let g = GridWorld::new(4, 3);
        assert_eq!(g.cell_index(Position::new(0, 0)), Some(0));
        assert_eq!(g.cell_index(Position::new(3, 0)), Some(3));
        assert_eq!(g.cell_index(Position::new(1, 2)), Some(9));
        assert_eq!(g.cell_index(Position::new(4, 0)), None);
        assert_eq!(g.cells().count(), g.cell_count());
    }

    proptest! {
        #[test]
        fn adjacency_is_symmetric(ax in -3i32..8, ay in -3i32..8, bx in -3i32..8, by in -3i32..8) {
            let a = Position::new(ax, ay);
            let b = Position::new(bx, by);
            prop_assert_eq!(GridWorld::adjacent(a, b), GridWorld::adjacent(b, a));
        }

        #[test]
        fn valid_cells_have_an_index(w in 1u32..30, h in 1u32..30, x in -2i32..32, y in -2i32..32) {
            let g = GridWorld::new(w, h);
            let p = Position::new(x, y);
            prop_assert_eq!(g.is_valid(p), g.cell_index(p).is_some());
        }
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, SimConfig, Tick};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(Tick(15) - Tick(10), 5u64);
    }

    #[test]
    fn interval_check() {
        assert!(Tick(0).is_on_interval(5));
        assert!(Tick(10).is_on_interval(5));
        assert!(!Tick(7).is_on_interval(5));
        assert!(!Tick(10).is_on_interval(0));
    }

    #[test]
    fn clock_advances() {
        let mut clock = SimClock::new();
        clock.advance();
        clock.advance();
        assert_eq!(clock.current_tick, Tick(2));
    }

    #[test]
    fn expected_snapshot_count() {
        let cfg = SimConfig { total_ticks: 1_800, snapshot_interval_ticks: 10, ..SimConfig::default() };
        assert_eq!(cfg.expected_snapshots(), 180);
        let odd = SimConfig { total_ticks: 11, snapshot_interval_ticks: 5, ..SimConfig::default() };
        // ticks 0, 5, 10
        assert_eq!(odd.expected_snapshots(), 3);
        assert_eq!(cfg.end_tick(), Tick(1_800));
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            let a: f64 = r1.random();
            let b: f64 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn different_seeds_differ() {
        let a: u64 = SimRng::new(1).random();
        let b: u64 = SimRng::new(2).random();
        assert_ne!(a, b);
    }

    #[test]
    fn weighted_choice_respects_zero_weights() {
        let mut rng = SimRng::new(7);
        for _ in 0..500 {
            let i = rng.choose_weighted(&[0.0, 2.0, 0.0]).unwrap();
            assert_eq!(i, 1);
        }
    }

    #[test]
    fn weighted_choice_rejects_all_zero() {
        let mut rng = SimRng::new(7);
        assert!(rng.choose_weighted(&[0.0, 0.0]).is_err());
        assert!(rng.choose_weighted(&[]).is_err());
    }
}
