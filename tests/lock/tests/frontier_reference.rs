//! `BinaryFrontier` agrees with a sorted-vector reference under random
//! interleavings of insert and pop.

use goap_kernel::carrier::world_state::WorldState;
use goap_search::frontier::BinaryFrontier;
use goap_search::node::SearchNode;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn pops_match_sorted_reference() {
    let mut rng = StdRng::seed_from_u64(0xF00D);

    for _ in 0..50 {
        let mut frontier = BinaryFrontier::new();
        let mut reference: Vec<u64> = Vec::new();

        for _ in 0..500 {
            if reference.is_empty() || rng.gen_bool(0.55) {
                let f = rng.gen_range(0..40u64);
                frontier.insert(f);
                reference.push(f);
                reference.sort_unstable_by(|a, b| b.cmp(a));
            } else {
                assert_eq!(frontier.peek().copied(), reference.last().copied());
                assert_eq!(frontier.pop(), reference.pop());
            }
            assert_eq!(frontier.len(), reference.len());
        }

        while let Some(expected) = reference.pop() {
            assert_eq!(frontier.pop(), Some(expected));
        }
        assert!(frontier.is_empty());
        assert_eq!(frontier.pop(), None);
    }
}

#[test]
fn search_nodes_pop_by_f_only() {
    let mut frontier = BinaryFrontier::with_capacity(8);
    let node = |id: u64, g: u64, h: u64| SearchNode {
        node_id: id,
        state: WorldState::from_bits(id),
        depth: 0,
        g_cost: g,
        h_cost: h,
    };
    frontier.insert(node(0, 5, 0));
    frontier.insert(node(1, 1, 1));
    frontier.insert(node(2, 0, 3));
    frontier.insert(node(3, 9, 9));

    let order: Vec<u64> = std::iter::from_fn(|| frontier.pop())
        .map(|n| n.f_cost())
        .collect();
    assert_eq!(order, vec![2, 3, 5, 18]);
    assert_eq!(frontier.high_water(), 4);
}
