//! Unit tests for coop-behavior.

use coop_agent::{AgentStore, AgentStoreBuilder};
use coop_core::{GridWorld, Position, Tick};
use coop_social::RelationGraph;
use coop_world::ResourceLayout;

use crate::{DecisionContext, ScoringWeights};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn p(x: i32, y: i32) -> Position {
    Position::new(x, y)
}

fn make_store(w: u32, h: u32, positions: &[Position]) -> AgentStore {
    AgentStoreBuilder::new(GridWorld::new(w, h))
        .agents_at(positions.iter().copied())
        .build()
        .unwrap()
}

fn ctx<'a>(
    store:     &'a AgentStore,
    resources: &'a ResourceLayout,
    relations: &'a RelationGraph,
    weights:   &'a ScoringWeights,
) -> DecisionContext<'a> {
    DecisionContext::new(Tick(0), store, resources, relations, weights)
}

// ── Scoring terms ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod terms {
    use coop_core::{AgentId, Move};

    use super::*;
    use crate::policy::{need_deficit, needs_term, recency_penalty};
    use crate::{MovePolicy, Policy};

    #[test]
    fn deficit_saturates_at_zero_only() {
        assert_eq!(need_deficit(100.0, 100.0), 0.0);
        assert_eq!(need_deficit(250.0, 100.0), 0.0);
        assert_eq!(need_deficit(50.0, 100.0), 0.5);
        assert_eq!(need_deficit(-100.0, 100.0), 2.0);
    }

    #[test]
    fn empty_kind_contributes_nothing() {
        let mut store = make_store(5, 5, &[p(2, 2)]);
        store.needs[0].food = -500.0;
        store.needs[0].water = -500.0;
        store.needs[0].cleanliness = -500.0;
        let layout = ResourceLayout::new();
        let rel = RelationGraph::new();
        let w = ScoringWeights::default();
        let c = ctx(&store, &layout, &rel, &w);
        for mv in Move::ALL {
            let target = p(2, 2).step(mv);
            assert_eq!(needs_term(AgentId(0), p(2, 2), target, &c), 0.0);
        }
    }

    #[test]
    fn arrival_beats_approach() {
        let mut store = make_store(5, 5, &[p(0, 0)]);
        store.needs[0].food = 0.0;
        let layout = ResourceLayout::from_positions([p(0, 1)], [], []);
        let rel = RelationGraph::new();
        let w = ScoringWeights::default();
        let c = ctx(&store, &layout, &rel, &w);
        // Landing on food: deficit 1 × weight 1 × multiplier 3.
        assert_eq!(needs_term(AgentId(0), p(0, 0), p(0, 1), &c), 3.0);
        // Moving away earns nothing.
        assert_eq!(needs_term(AgentId(0), p(0, 0), p(1, 0), &c), 0.0);
    }

    #[test]
    fn approach_bonus_is_relative_to_current_distance() {
        let mut store = make_store(9, 9, &[p(0, 0)]);
        store.needs[0].water = 50.0;
        let layout = ResourceLayout::from_positions([], [p(0, 4)], []);
        let rel = RelationGraph::new();
        let w = ScoringWeights::default();
        let c = ctx(&store, &layout, &rel, &w);
        // deficit 0.5 × weight 1 × (1 / 4)
        assert_eq!(needs_term(AgentId(0), p(0, 0), p(0, 1), &c), 0.125);
    }

    #[test]
    fn recency_fades_with_age() {
        let mut store = make_store(5, 5, &[p(1, 1)]);
        let layout = ResourceLayout::new();
        let rel = RelationGraph::new();
        let w = ScoringWeights::default();

        store.record_visit(AgentId(0));
        assert_eq!(recency_penalty(AgentId(0), p(1, 1), &ctx(&store, &layout, &rel, &w)), 1.0);

        store.apply_move(AgentId(0), Move::West);
        for _ in 0..4 {
            store.record_visit(AgentId(0));
        }
        // Four visits elsewhere since (1,1): age 4, penalty 1 - 4/10.
        let pen = recency_penalty(AgentId(0), p(1, 1), &ctx(&store, &layout, &rel, &w));
        assert!((pen - 0.6).abs() < 1e-12);
        assert_eq!(recency_penalty(AgentId(0), p(4, 4), &ctx(&store, &layout, &rel, &w)), 0.0);
    }

    #[test]
    fn off_grid_candidate_scores_zero() {
        let store = make_store(3, 3, &[p(0, 0)]);
        let layout = ResourceLayout::new();
        let rel = RelationGraph::new();
        let w = ScoringWeights::default();
        let c = ctx(&store, &layout, &rel, &w);
        assert_eq!(Policy::NeedsDriven.raw_score(AgentId(0), Move::North, &c), 0.0);
        assert_eq!(Policy::Social.raw_score(AgentId(0), Move::West, &c), 0.0);
        assert_eq!(Policy::RandomWalk.raw_score(AgentId(0), Move::West, &c), 1.0);
    }
}

// ── Social ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod social {
    use coop_core::{AgentId, Move};
    use coop_social::RelationKind;

    use super::*;
    use crate::{score_moves, MovePolicy, Policy};

    #[test]
    fn moving_away_from_enemy_scores_higher() {
        let store = make_store(5, 5, &[p(2, 2), p(3, 2)]);
        let layout = ResourceLayout::new();
        let mut rel = RelationGraph::new();
        rel.insert_mutual(AgentId(0), AgentId(1), RelationKind::Enemy).unwrap();
        let w = ScoringWeights::default();
        let c = ctx(&store, &layout, &rel, &w);

        let scores = score_moves(&Policy::Social, AgentId(0), &c);
        let away = scores[Move::West.index()];
        let toward = scores[Move::East.index()];
        assert!(away > toward, "away {away} should beat toward {toward}");
        // Sideways also increases distance.
        assert!(scores[Move::North.index()] > toward);

        // The enemy sees it the same way.
        let scores = score_moves(&Policy::Social, AgentId(1), &c);
        assert!(scores[Move::East.index()] > scores[Move::West.index()]);
    }

    #[test]
    fn enemy_close_range_penalty() {
        use crate::policy::social_term;

        let close = |a: f64, b: f64| (a - b).abs() < 1e-12;
        let w = ScoringWeights::default();
        assert_eq!((w.enemy_repulsion, w.social_distance_factor), (0.8, 2.0));
        let layout = ResourceLayout::new();
        let mut rel = RelationGraph::new();
        rel.insert(AgentId(0), AgentId(1), RelationKind::Enemy).unwrap();

        // Enemy two cells east: stepping east lands at d_new = 1.
        // -0.8 * 1 / 2.0 for closing in, then -2 * 0.8 / 1 for being within two.
        let store = make_store(5, 5, &[p(0, 0), p(2, 0)]);
        let c = ctx(&store, &layout, &rel, &w);
        let term = social_term(AgentId(0), p(0, 0), p(1, 0), &c);
        assert!(close(term, -2.0), "d_new = 1 gave {term}");

        // Enemy three cells east: stepping east lands at d_new = 2.
        let store = make_store(5, 5, &[p(0, 0), p(3, 0)]);
        let c = ctx(&store, &layout, &rel, &w);
        let term = social_term(AgentId(0), p(0, 0), p(1, 0), &c);
        assert!(close(term, -0.4 - 0.8), "d_new = 2 gave {term}");

        // Stepping back from two cells to three: only the directional bonus.
        let store = make_store(5, 5, &[p(1, 0), p(3, 0)]);
        let c = ctx(&store, &layout, &rel, &w);
        let term = social_term(AgentId(0), p(1, 0), p(0, 0), &c);
        assert!(close(term, 0.4), "d_new = 3 gave {term}");
    }

    #[test]
    fn friend_pulls_closer() {
        let store = make_store(5, 5, &[p(0, 0), p(4, 0)]);
        let layout = ResourceLayout::new();
        let mut rel = RelationGraph::new();
        rel.insert(AgentId(0), AgentId(1), RelationKind::Friend).unwrap();
        let w = ScoringWeights::default();
        let c = ctx(&store, &layout, &rel, &w);

        let east = Policy::Social.raw_score(AgentId(0), Move::East, &c);
        let south = Policy::Social.raw_score(AgentId(0), Move::South, &c);
        assert!(east > south);
        // Even moving away keeps a reduced pull.
        assert!(south > Policy::NeedsDriven.raw_score(AgentId(0), Move::South, &c));
    }

    #[test]
    fn relations_are_one_sided() {
        let store = make_store(5, 5, &[p(0, 0), p(4, 0)]);
        let layout = ResourceLayout::new();
        let mut rel = RelationGraph::new();
        rel.insert(AgentId(0), AgentId(1), RelationKind::Friend).unwrap();
        let w = ScoringWeights::default();
        let c = ctx(&store, &layout, &rel, &w);

        // Agent 1 has no relations of its own.
        for mv in Move::ALL {
            assert_eq!(
                Policy::Social.raw_score(AgentId(1), mv, &c),
                Policy::NeedsDriven.raw_score(AgentId(1), mv, &c),
            );
        }
    }

    #[test]
    fn no_relations_matches_needs_driven() {
        let mut store = make_store(6, 6, &[p(1, 1), p(4, 4)]);
        store.needs[0].food = 20.0;
        store.needs[0].cleanliness = 70.0;
        store.record_visit(AgentId(0));
        let layout = ResourceLayout::from_positions([p(3, 1)], [p(0, 5)], [p(5, 0)]);
        let rel = RelationGraph::new();
        let w = ScoringWeights::default();
        let c = ctx(&store, &layout, &rel, &w);

        assert_eq!(
            score_moves(&Policy::Social, AgentId(0), &c),
            score_moves(&Policy::NeedsDriven, AgentId(0), &c),
        );
    }
}

// ── Engine ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod engine {
    use coop_core::{AgentId, Move, SimRng};

    use super::*;
    use crate::{choose_move, move_distribution, score_moves, BehaviorError, Policy};

    #[test]
    fn random_walk_is_uniform() {
        let store = make_store(5, 5, &[p(0, 0)]);
        let layout = ResourceLayout::from_positions([p(0, 1)], [], []);
        let rel = RelationGraph::new();
        let w = ScoringWeights::default();
        let c = ctx(&store, &layout, &rel, &w);

        let probs = move_distribution(&score_moves(&Policy::RandomWalk, AgentId(0), &c)).unwrap();
        for prob in probs {
            assert!((prob - 0.2).abs() < 1e-12);
        }
    }

    #[test]
    fn food_next_door_beats_uniform() {
        let mut store = make_store(5, 5, &[p(0, 0)]);
        let layout = ResourceLayout::from_positions([p(0, 1)], [], []);
        let rel = RelationGraph::new();
        let w = ScoringWeights::default();

        for policy in [Policy::NeedsDriven, Policy::Social] {
            let c = ctx(&store, &layout, &rel, &w);
            let probs = move_distribution(&score_moves(&policy, AgentId(0), &c)).unwrap();
            assert!(probs[Move::South.index()] > 0.2);
        }

        // A hungry agent favours the food cell over every other move.
        store.needs[0].food = 10.0;
        let c = ctx(&store, &layout, &rel, &w);
        let probs = move_distribution(&score_moves(&Policy::NeedsDriven, AgentId(0), &c)).unwrap();
        let south = probs[Move::South.index()];
        assert!(Move::ALL.iter().all(|&mv| mv == Move::South || probs[mv.index()] < south));
    }

    #[test]
    fn invalid_moves_keep_floor_weight() {
        let store = make_store(5, 5, &[p(0, 0)]);
        let layout = ResourceLayout::new();
        let rel = RelationGraph::new();
        let w = ScoringWeights::default();
        let c = ctx(&store, &layout, &rel, &w);

        let scores = score_moves(&Policy::NeedsDriven, AgentId(0), &c);
        assert_eq!(scores[Move::North.index()], w.score_floor);
        assert_eq!(scores[Move::West.index()], w.score_floor);
        assert_eq!(scores[Move::Stay.index()], 1.0);
    }

    #[test]
    fn recently_visited_stay_hits_floor() {
        let mut store = make_store(5, 5, &[p(2, 2)]);
        store.record_visit(AgentId(0));
        let layout = ResourceLayout::new();
        let rel = RelationGraph::new();
        let w = ScoringWeights::default();
        let c = ctx(&store, &layout, &rel, &w);

        let scores = score_moves(&Policy::NeedsDriven, AgentId(0), &c);
        assert_eq!(scores[Move::Stay.index()], w.score_floor);
        assert_eq!(scores[Move::East.index()], 1.0);
    }

    #[test]
    fn degenerate_vectors_rejected() {
        assert!(matches!(
            move_distribution(&[0.0; 5]),
            Err(BehaviorError::DegenerateDistribution { .. })
        ));
        assert!(move_distribution(&[1.0, f64::NAN, 1.0, 1.0, 1.0]).is_err());
        assert!(move_distribution(&[1.0, -0.5, 1.0, 1.0, 1.0]).is_err());
        assert!(move_distribution(&[1.0, f64::INFINITY, 1.0, 1.0, 1.0]).is_err());
    }

    #[test]
    fn same_seed_same_choices() {
        let store = make_store(7, 7, &[p(3, 3)]);
        let layout = ResourceLayout::from_positions([p(0, 0)], [p(6, 6)], [p(0, 6)]);
        let rel = RelationGraph::new();
        let w = ScoringWeights::default();
        let c = ctx(&store, &layout, &rel, &w);

        let run = |seed| {
            let mut rng = SimRng::new(seed);
            (0..50)
                .map(|_| choose_move(&Policy::Social, AgentId(0), &c, &mut rng).unwrap())
                .collect::<Vec<_>>()
        };
        assert_eq!(run(11), run(11));
    }

    #[test]
    fn sampled_moves_follow_distribution() {
        let mut store = make_store(5, 5, &[p(0, 0)]);
        store.needs[0].food = 0.0;
        let layout = ResourceLayout::from_positions([p(0, 1)], [], []);
        let rel = RelationGraph::new();
        let w = ScoringWeights::default();
        let c = ctx(&store, &layout, &rel, &w);

        // Scores: N,W floor; S = 1 + 3; E = 1; Stay = 1.  P(S) ≈ 0.67.
        let mut rng = SimRng::new(5);
        let south = (0..2_000)
            .filter(|_| choose_move(&Policy::NeedsDriven, AgentId(0), &c, &mut rng).unwrap() == Move::South)
            .count();
        assert!((1_200..1_450).contains(&south), "south chosen {south} times");
    }

    #[test]
    fn bad_weights_rejected() {
        let mut w = ScoringWeights::default();
        assert!(w.validate().is_ok());
        w.score_floor = 0.0;
        assert!(w.validate().is_err());
        let mut w = ScoringWeights::default();
        w.enemy_repulsion = f64::NAN;
        assert!(w.validate().is_err());
    }

    #[test]
    fn policy_names_parse() {
        assert_eq!("random-walk".parse::<Policy>().unwrap(), Policy::RandomWalk);
        assert_eq!("needs_driven".parse::<Policy>().unwrap(), Policy::NeedsDriven);
        assert_eq!("social".parse::<Policy>().unwrap(), Policy::Social);
        assert!("greedy".parse::<Policy>().is_err());
        for policy in Policy::ALL {
            assert_eq!(policy.as_str().parse::<Policy>().unwrap(), policy);
        }
    }
}

// ── Properties ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod properties {
    use coop_core::AgentId;
    use coop_social::RelationKind;
    use proptest::prelude::*;

    use super::*;
    use crate::{move_distribution, score_moves, Policy};

    proptest! {
        #[test]
        fn probabilities_sum_to_one(
            ax in 0i32..8, ay in 0i32..8,
            bx in 0i32..8, by in 0i32..8,
            food in -300.0f64..300.0,
            water in -300.0f64..300.0,
            enemy in any::<bool>(),
            policy in prop::sample::select(Policy::ALL.to_vec()),
        ) {
            let mut store = make_store(8, 8, &[p(ax, ay), p(bx, by)]);
            store.needs[0].food = food;
            store.needs[0].water = water;
            let layout = ResourceLayout::from_positions([p(7, 7)], [p(0, 7)], [p(3, 0)]);
            let mut rel = RelationGraph::new();
            let kind = if enemy { RelationKind::Enemy } else { RelationKind::Friend };
            rel.insert(AgentId(0), AgentId(1), kind).unwrap();
            let w = ScoringWeights::default();
            let c = ctx(&store, &layout, &rel, &w);

            let scores = score_moves(&policy, AgentId(0), &c);
            prop_assert!(scores.iter().all(|&s| s >= w.score_floor));
            let probs = move_distribution(&scores).unwrap();
            let total: f64 = probs.iter().sum();
            prop_assert!((total - 1.0).abs() < 1e-9);
        }
    }
}
