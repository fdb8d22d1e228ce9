//! Integration tests for the allocation patterns.
//!
//! Randomised worlds are generated from fixed ChaCha seeds so every run
//! checks the same cases.

use std::collections::BTreeSet;
use std::sync::Arc;
use std::thread;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use veinminer_core::{
    AccessError, BlockFace, BlockPosition, BlockState, FnAccessor, MemoryWorld,
};
use veinminer_matching::{BlockMatchSet, BlockMatcher};
use veinminer_pattern::{
    AllocationRequest, ExpansivePattern, PatternRegistry, StaircaseDirection, StaircasePattern,
    ThoroughPattern, TraversalConfig, TunnelPattern, VeinMiningPattern,
};

fn state(key: &str) -> BlockState {
    BlockState::parse(key).unwrap()
}

fn pos(x: i32, y: i32, z: i32) -> BlockPosition {
    BlockPosition::new(x, y, z)
}

fn as_set(positions: &[BlockPosition]) -> BTreeSet<BlockPosition> {
    positions.iter().copied().collect()
}

/// A cube of side `2 * half + 1` around the origin where each block is ore
/// with probability `density`. The origin is always ore.
fn random_world(seed: u64, half: i32, density: f64) -> MemoryWorld {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut world = MemoryWorld::new(state("stone"));
    for x in -half..=half {
        for y in -half..=half {
            for z in -half..=half {
                if rng.gen_bool(density) {
                    world.set(pos(x, y, z), state("iron_ore"));
                }
            }
        }
    }
    world.set(BlockPosition::ORIGIN, state("iron_ore"));
    world
}

fn all_patterns() -> Vec<Arc<dyn VeinMiningPattern>> {
    PatternRegistry::with_defaults().patterns().cloned().collect()
}

// ============================================================================
// Contract: cap, no origin, no duplicates
// ============================================================================

#[test]
fn test_cap_invariant_holds_for_every_pattern() {
    let matcher = BlockMatcher::of_state(&state("iron_ore"));

    for seed in 0..24 {
        let world = random_world(seed, 5, 0.55);
        let mut rng = ChaCha8Rng::seed_from_u64(seed ^ 0xA5A5);

        for pattern in all_patterns() {
            let config = TraversalConfig::default()
                .with_max_vein_size(rng.gen_range(1..=48))
                .with_include_edges(rng.gen_bool(0.5))
                .with_tunnel_radius(rng.gen_range(0..=2));
            let face = BlockFace::AXIS[rng.gen_range(0..6)];
            let request = AllocationRequest::new(BlockPosition::ORIGIN, face, &matcher, &config);

            let result = pattern.allocate(&world, &request).unwrap();

            assert!(result.len() <= config.max_vein_size, "{} seed {seed}", pattern.key());
            assert!(!result.contains(&BlockPosition::ORIGIN), "{} seed {seed}", pattern.key());
            assert_eq!(as_set(&result).len(), result.len(), "{} seed {seed}", pattern.key());
        }
    }
}

#[test]
fn test_allocation_is_deterministic() {
    let matcher = BlockMatcher::of_state(&state("iron_ore"));
    let config = TraversalConfig::default().with_max_vein_size(20).with_include_edges(true);

    for seed in 0..8 {
        let first_world = random_world(seed, 4, 0.6);
        let second_world = random_world(seed, 4, 0.6);

        for pattern in all_patterns() {
            let request =
                AllocationRequest::new(BlockPosition::ORIGIN, BlockFace::West, &matcher, &config);
            let first = pattern.allocate(&first_world, &request).unwrap();
            let second = pattern.allocate(&second_world, &request).unwrap();
            assert_eq!(first, second, "{} seed {seed}", pattern.key());
        }
    }
}

// ============================================================================
// Expansive / thorough
// ============================================================================

#[test]
fn test_expansive_and_thorough_agree_below_cap() {
    let matcher = BlockMatcher::of_state(&state("iron_ore"));

    for seed in 100..116 {
        let world = random_world(seed, 4, 0.5);
        for include_edges in [false, true] {
            let config = TraversalConfig::default()
                .with_max_vein_size(10_000)
                .with_include_edges(include_edges);
            let request =
                AllocationRequest::new(BlockPosition::ORIGIN, BlockFace::Up, &matcher, &config);

            let expansive = ExpansivePattern::new().allocate(&world, &request).unwrap();
            let thorough = ThoroughPattern::new().allocate(&world, &request).unwrap();
            assert_eq!(as_set(&expansive), as_set(&thorough), "seed {seed}");
        }
    }
}

#[test]
fn test_planar_cluster_is_fully_collected() {
    let mut world = MemoryWorld::new(state("stone"));
    for x in -2..=2 {
        for z in -2..=2 {
            world.set(pos(x, 0, z), state("coal_ore"));
        }
    }
    // Not connected to the plane
    world.set(pos(5, 0, 5), state("coal_ore"));

    let matcher = BlockMatcher::of_state(&state("coal_ore"));
    let config = TraversalConfig::default();
    let request = AllocationRequest::new(BlockPosition::ORIGIN, BlockFace::Up, &matcher, &config);

    let result = ExpansivePattern::new().allocate(&world, &request).unwrap();
    assert_eq!(result.len(), 24);
    assert!(result.iter().all(|p| p.y == 0 && p.x.abs() <= 2 && p.z.abs() <= 2));
}

#[test]
fn test_diagonals_need_edges() {
    let mut world = MemoryWorld::new(state("stone"));
    for p in [pos(0, 0, 0), pos(1, 0, 1), pos(2, 1, 1)] {
        world.set(p, state("gold_ore"));
    }
    let matcher = BlockMatcher::of_state(&state("gold_ore"));

    let faces_only = TraversalConfig::default();
    let request = AllocationRequest::new(BlockPosition::ORIGIN, BlockFace::Up, &matcher, &faces_only);
    assert!(ExpansivePattern::new().allocate(&world, &request).unwrap().is_empty());

    let with_edges = TraversalConfig::default().with_include_edges(true);
    let request = AllocationRequest::new(BlockPosition::ORIGIN, BlockFace::Up, &matcher, &with_edges);
    let result = ExpansivePattern::new().allocate(&world, &request).unwrap();
    assert_eq!(result, vec![pos(1, 0, 1), pos(2, 1, 1)]);
}

#[test]
fn test_alias_scenario() {
    let ore_a = state("mymod:ore_a");
    let ore_b = state("mymod:ore_b");

    let mut world = MemoryWorld::new(state("stone"));
    for p in [pos(0, 0, 0), pos(1, 0, 0), pos(2, 0, 0)] {
        world.set(p, ore_a.clone());
    }
    world.set(pos(1, 1, 0), ore_b.clone());
    // Different type, not aliased
    world.set(pos(0, 0, 1), state("mymod:ore_c"));

    let matcher = BlockMatcher::of_state(&ore_a);
    let aliases: BlockMatchSet =
        [BlockMatcher::of_state(&ore_a), BlockMatcher::of_state(&ore_b)].into_iter().collect();
    let config = TraversalConfig::default().with_max_vein_size(10);
    let request = AllocationRequest::new(BlockPosition::ORIGIN, BlockFace::Up, &matcher, &config)
        .with_aliases(Some(&aliases));

    let expected = as_set(&[pos(1, 0, 0), pos(2, 0, 0), pos(1, 1, 0)]);
    let patterns: [Arc<dyn VeinMiningPattern>; 2] =
        [Arc::new(ExpansivePattern::new()), Arc::new(ThoroughPattern::new())];
    for pattern in patterns {
        let result = pattern.allocate(&world, &request).unwrap();
        assert_eq!(result.len(), 3);
        assert_eq!(as_set(&result), expected);
    }

    let unaliased = AllocationRequest::new(BlockPosition::ORIGIN, BlockFace::Up, &matcher, &config);
    let result = ExpansivePattern::new().allocate(&world, &unaliased).unwrap();
    assert_eq!(as_set(&result), as_set(&[pos(1, 0, 0), pos(2, 0, 0)]));
}

#[test]
fn test_wildcard_sticks_to_origin_type() {
    let mut world = MemoryWorld::new(state("stone"));
    world.set(pos(0, 0, 0), state("coal_ore"));
    world.set(pos(1, 0, 0), state("coal_ore"));
    world.set(pos(0, 1, 0), state("iron_ore"));

    let config = TraversalConfig::default();
    let request =
        AllocationRequest::new(BlockPosition::ORIGIN, BlockFace::Up, &BlockMatcher::Wildcard, &config);

    let result = ExpansivePattern::new().allocate(&world, &request).unwrap();
    assert_eq!(result, vec![pos(1, 0, 0)]);
}

// ============================================================================
// Tunnel
// ============================================================================

#[test]
fn test_tunnel_depth_cap_on_thin_infinite_vein() {
    // Endless 1x1 vein along the z axis
    let world = FnAccessor::new(|p| {
        Ok(if p.x == 0 && p.y == 0 { state("iron_ore") } else { state("stone") })
    });
    let matcher = BlockMatcher::of_state(&state("iron_ore"));
    let config = TraversalConfig::default();
    // South face hit: tunnel runs north (-z)
    let request = AllocationRequest::new(BlockPosition::ORIGIN, BlockFace::South, &matcher, &config);

    let result = TunnelPattern::new().allocate(&world, &request).unwrap();

    // 8 layers including the origin layer
    let expected: Vec<BlockPosition> = (1..8).map(|depth| pos(0, 0, -depth)).collect();
    assert_eq!(result, expected);
}

#[test]
fn test_tunnel_through_solid_rock_hits_vein_cap() {
    let world = FnAccessor::new(|_| Ok(state("stone")));
    let matcher = BlockMatcher::of_state(&state("stone"));
    let config = TraversalConfig::default();
    let request = AllocationRequest::new(BlockPosition::ORIGIN, BlockFace::Down, &matcher, &config);

    let result = TunnelPattern::new().allocate(&world, &request).unwrap();

    assert_eq!(result.len(), 64);
    // Down face hit: tunnel runs up, 3x3 in the xz plane
    assert!(result.iter().all(|p| p.x.abs() <= 1 && p.z.abs() <= 1 && (0..8).contains(&p.y)));
}

#[test]
fn test_tunnel_stops_at_empty_layer() {
    let mut world = MemoryWorld::new(state("air"));
    for z in 0..3 {
        world.set(pos(0, 0, z), state("stone"));
    }
    world.set(pos(0, 0, 4), state("stone"));
    let matcher = BlockMatcher::of_state(&state("stone"));
    let config = TraversalConfig::default();
    // North face hit: tunnel runs south (+z)
    let request = AllocationRequest::new(BlockPosition::ORIGIN, BlockFace::North, &matcher, &config);

    let result = TunnelPattern::new().allocate(&world, &request).unwrap();
    assert_eq!(result, vec![pos(0, 0, 1), pos(0, 0, 2)]);
}

// ============================================================================
// Staircase
// ============================================================================

#[test]
fn test_staircase_rejects_floor_and_ceiling() {
    let world = FnAccessor::new(|_| Ok(state("stone")));
    let matcher = BlockMatcher::of_state(&state("stone"));
    let config = TraversalConfig::default();

    for direction in [StaircaseDirection::Up, StaircaseDirection::Down] {
        for face in [BlockFace::Up, BlockFace::Down] {
            let request = AllocationRequest::new(BlockPosition::ORIGIN, face, &matcher, &config);
            let result = StaircasePattern::new(direction).allocate(&world, &request).unwrap();
            assert!(result.is_empty());
        }
    }
}

#[test]
fn test_staircase_down_in_solid_rock() {
    let world = FnAccessor::new(|_| Ok(state("stone")));
    let matcher = BlockMatcher::of_state(&state("stone"));
    let config = TraversalConfig::default().with_max_vein_size(11);
    // West face hit: dig east (+x)
    let request = AllocationRequest::new(BlockPosition::ORIGIN, BlockFace::West, &matcher, &config);

    let result = StaircasePattern::new(StaircaseDirection::Down)
        .allocate(&world, &request)
        .unwrap();

    assert_eq!(result.len(), 11);
    for p in &result {
        // Every block lies within one of the vertical segments
        assert!((p.y + p.x).abs() <= 1, "{p}");
        assert_eq!(p.z, 0);
    }
}

// ============================================================================
// Errors and reentrancy
// ============================================================================

#[test]
fn test_accessor_errors_propagate() {
    let world = MemoryWorld::new(state("stone")).with_bounds(pos(-2, -2, -2), pos(2, 2, 2));
    let matcher = BlockMatcher::of_state(&state("stone"));
    let config = TraversalConfig::default().with_max_vein_size(1_000);
    let request = AllocationRequest::new(BlockPosition::ORIGIN, BlockFace::Up, &matcher, &config);

    let flood_fills: [Arc<dyn VeinMiningPattern>; 2] =
        [Arc::new(ExpansivePattern::new()), Arc::new(ThoroughPattern::new())];
    for pattern in flood_fills {
        let error = pattern.allocate(&world, &request).unwrap_err();
        assert!(matches!(error, AccessError::Unloaded(_)), "{error}");
    }

    let broken = FnAccessor::new(|_| Err(AccessError::WorldUnavailable("world_nether".to_owned())));
    for pattern in all_patterns() {
        let result = pattern.allocate(&broken, &request);
        let expected = Err(AccessError::WorldUnavailable("world_nether".to_owned()));
        // Staircase on an up face never reads the world
        if pattern.key().key().starts_with("staircase") {
            assert_eq!(result, Ok(Vec::new()));
        } else {
            assert_eq!(result, expected, "{}", pattern.key());
        }
    }
}

#[test]
fn test_shared_pattern_across_threads() {
    let pattern: Arc<dyn VeinMiningPattern> = Arc::new(ExpansivePattern::new());
    let world = Arc::new(random_world(7, 5, 0.6));
    let matcher = BlockMatcher::of_state(&state("iron_ore"));
    let config = TraversalConfig::default().with_max_vein_size(30);
    let expected = pattern
        .allocate(
            &*world,
            &AllocationRequest::new(BlockPosition::ORIGIN, BlockFace::Up, &matcher, &config),
        )
        .unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let pattern = Arc::clone(&pattern);
            let world = Arc::clone(&world);
            let matcher = matcher.clone();
            thread::spawn(move || {
                let request =
                    AllocationRequest::new(BlockPosition::ORIGIN, BlockFace::Up, &matcher, &config);
                pattern.allocate(&*world, &request).unwrap()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
