// Integration tests for the step generators

use algoviz::algorithms::graph::{
    bfs_steps, dfs_steps, generate_graph, generate_graph_from_text, AdjacencyMap, Edge,
    GraphTraversal,
};
use algoviz::algorithms::hanoi::{generate_hanoi, hanoi_moves, Move, Towers};
use algoviz::algorithms::constants::MAX_SIEVE_LIMIT;
use algoviz::algorithms::input::parse_count;
use algoviz::algorithms::sieve::{check_limit, sieve_events, sieve_steps, SieveEvent, SieveRun};
use algoviz::algorithms::sort::{
    bubble_sort_steps, generate_sort_from_text, insertion_sort_steps, selection_sort_steps,
    SortAlgorithm,
};
use algoviz::algorithms::tree::{generate_tree, generate_tree_from_text, Tree, TreeTraversal};
use algoviz::algorithms::{InvalidInputError, MoveError, StepError};

fn edges(pairs: &[(usize, usize)]) -> Vec<Edge> {
    pairs.iter().map(|&p| Edge::from(p)).collect()
}

fn sorted(values: &[f64]) -> Vec<f64> {
    let mut v = values.to_vec();
    v.sort_by(|a, b| a.partial_cmp(b).unwrap());
    v
}

// ========== Sorts ==========

#[test]
fn test_bubble_sort_records_only_swaps() {
    let steps = bubble_sort_steps(&[5.0, 3.0, 8.0, 1.0]);

    assert_eq!(
        steps.as_slice(),
        &[
            vec![3.0, 5.0, 8.0, 1.0],
            vec![3.0, 5.0, 1.0, 8.0],
            vec![3.0, 1.0, 5.0, 8.0],
            vec![1.0, 3.0, 5.0, 8.0],
        ]
    );
}

#[test]
fn test_selection_sort_skips_elements_in_place() {
    let steps = selection_sort_steps(&[5.0, 3.0, 8.0, 1.0]);

    assert_eq!(
        steps.as_slice(),
        &[vec![1.0, 3.0, 8.0, 5.0], vec![1.0, 3.0, 5.0, 8.0]]
    );
}

#[test]
fn test_insertion_sort_records_shifts_and_placement() {
    let steps = insertion_sort_steps(&[5.0, 3.0, 8.0, 1.0]);

    assert_eq!(
        steps.as_slice(),
        &[
            vec![5.0, 5.0, 8.0, 1.0],
            vec![3.0, 5.0, 8.0, 1.0],
            // 8 does not move but the pass still ends with a frame
            vec![3.0, 5.0, 8.0, 1.0],
            vec![3.0, 5.0, 8.0, 8.0],
            vec![3.0, 5.0, 5.0, 8.0],
            vec![3.0, 3.0, 5.0, 8.0],
            vec![1.0, 3.0, 5.0, 8.0],
        ]
    );
}

#[test]
fn test_sorted_input_frames() {
    let input = [1.0, 2.0, 3.0];

    assert!(bubble_sort_steps(&input).is_empty());
    assert!(selection_sort_steps(&input).is_empty());
    // One settle frame per outer pass
    assert_eq!(insertion_sort_steps(&input).len(), 2);
}

#[test]
fn test_empty_and_single_element() {
    for algorithm in SortAlgorithm::ALL {
        assert!(algorithm.generate(&[]).is_empty(), "{}", algorithm);
        assert!(algorithm.generate(&[42.0]).is_empty(), "{}", algorithm);
    }
}

#[test]
fn test_sorts_agree_on_final_state() {
    let inputs: Vec<Vec<f64>> = vec![
        vec![5.0, 3.0, 8.0, 1.0],
        vec![2.0, 1.0, 2.0, 1.0],
        vec![-1.5, 10.0, 0.0, -7.25, 3.0],
        vec![9.0, 8.0, 7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0],
        vec![1.0, 1.0, 1.0],
        vec![4.0, 1.0],
    ];

    for input in inputs {
        let expected = sorted(&input);
        for algorithm in SortAlgorithm::ALL {
            let steps = algorithm.generate(&input);
            let last = steps.last().cloned().unwrap_or_else(|| input.clone());
            assert_eq!(last, expected, "{} on {:?}", algorithm, input);
        }
    }
}

#[test]
fn test_sort_from_text() {
    let steps = generate_sort_from_text(SortAlgorithm::Bubble, "5,3,8,1").unwrap();
    assert_eq!(steps.last(), Some(&vec![1.0, 3.0, 5.0, 8.0]));

    let empty = generate_sort_from_text(SortAlgorithm::Insertion, "  ").unwrap();
    assert!(empty.is_empty());

    let err = generate_sort_from_text(SortAlgorithm::Selection, "5,x,1").unwrap_err();
    assert!(matches!(
        err,
        StepError::InvalidInput(InvalidInputError::InvalidNumber { position: 2, .. })
    ));
}

#[test]
fn test_sort_algorithm_names() {
    assert_eq!("bubble".parse::<SortAlgorithm>(), Ok(SortAlgorithm::Bubble));
    assert_eq!("Selection".parse::<SortAlgorithm>(), Ok(SortAlgorithm::Selection));
    assert_eq!(" INSERTION ".parse::<SortAlgorithm>(), Ok(SortAlgorithm::Insertion));
    assert!("quick".parse::<SortAlgorithm>().is_err());
    assert_eq!(SortAlgorithm::Bubble.to_string(), "Bubble");
}

// ========== Sieve ==========

#[test]
fn test_sieve_limit_ten() {
    let steps = sieve_steps(10).unwrap();
    let last = steps.last().expect("sieve always emits a final frame");

    assert_eq!(last.primes(), vec![2, 3, 5, 7]);
    for k in [0, 1, 4, 6, 8, 9, 10] {
        assert!(!last.is_prime[k], "{} should be composite", k);
    }
    assert_eq!(last.pivot, None);
}

#[test]
fn test_sieve_event_order() {
    assert_eq!(
        sieve_events(10).unwrap(),
        vec![
            SieveEvent::Pivot(2),
            SieveEvent::Marked(4),
            SieveEvent::Marked(6),
            SieveEvent::Marked(8),
            SieveEvent::Marked(10),
            SieveEvent::Pivot(3),
            SieveEvent::Marked(9),
            SieveEvent::Finished,
        ]
    );

    let pivots: Vec<usize> = sieve_events(25)
        .unwrap()
        .into_iter()
        .filter_map(|e| match e {
            SieveEvent::Pivot(p) => Some(p),
            _ => None,
        })
        .collect();
    assert_eq!(pivots, vec![2, 3, 5]);
}

#[test]
fn test_sieve_frames_carry_pivot() {
    let steps = sieve_steps(10).unwrap();
    assert_eq!(steps.len(), 8);

    // Pivot frame: 2 chosen, nothing crossed off yet
    let first = steps.get(0).unwrap();
    assert_eq!(first.pivot, Some(2));
    assert!(first.is_prime[4]);

    // After marking 4 with pivot 2
    let second = steps.get(1).unwrap();
    assert_eq!(second.pivot, Some(2));
    assert!(!second.is_prime[4]);
    assert!(second.is_prime[6]);

    assert_eq!(steps.get(5).unwrap().pivot, Some(3));
}

#[test]
fn test_sieve_small_limits() {
    for limit in 0..4 {
        let events = sieve_events(limit).unwrap();
        assert_eq!(events, vec![SieveEvent::Finished], "limit {}", limit);
    }

    assert_eq!(sieve_steps(0).unwrap().last().unwrap().is_prime, vec![false]);
    assert_eq!(sieve_steps(1).unwrap().last().unwrap().is_prime, vec![false, false]);
    assert_eq!(sieve_steps(3).unwrap().last().unwrap().primes(), vec![2, 3]);
}

#[test]
fn test_sieve_run_stops_after_finished() {
    let mut run = SieveRun::new(4).unwrap();
    assert_eq!(run.resume(), Some(SieveEvent::Pivot(2)));
    assert_eq!(run.resume(), Some(SieveEvent::Marked(4)));
    assert_eq!(run.resume(), Some(SieveEvent::Finished));
    assert!(run.is_finished());
    assert_eq!(run.resume(), None);
    assert_eq!(run.frame().primes(), vec![2, 3]);
}

#[test]
fn test_sieve_rejects_oversized_limits() {
    let huge = parse_count("18446744073709551615").unwrap();
    assert_eq!(huge, usize::MAX);

    let expected = InvalidInputError::LimitOutOfRange {
        limit: huge,
        max: MAX_SIEVE_LIMIT,
    };
    assert_eq!(sieve_steps(huge), Err(expected.clone()));
    assert_eq!(sieve_events(huge), Err(expected.clone()));
    assert_eq!(SieveRun::new(huge).unwrap_err(), expected);
    assert_eq!(check_limit(huge), Err(expected));

    assert!(sieve_steps(MAX_SIEVE_LIMIT).is_ok());
    assert!(matches!(
        sieve_steps(MAX_SIEVE_LIMIT + 1),
        Err(InvalidInputError::LimitOutOfRange { .. })
    ));
}

// ========== Hanoi ==========

#[test]
fn test_hanoi_three_disks() {
    let expected: Vec<Move> = [(0, 2), (0, 1), (2, 1), (0, 2), (1, 0), (1, 2), (0, 2)]
        .into_iter()
        .map(Move::from)
        .collect();

    assert_eq!(hanoi_moves(3, 0, 2, 1), expected);
}

#[test]
fn test_hanoi_move_count_and_invariant() {
    assert!(hanoi_moves(0, 0, 2, 1).is_empty());

    for n in 1..=8 {
        let moves = hanoi_moves(n, 0, 2, 1);
        assert_eq!(moves.len(), (1 << n) - 1, "n = {}", n);

        let mut towers = Towers::new(n);
        for mv in moves {
            towers.apply(mv).expect("generated move must be legal");
            assert!(towers.is_valid());
        }

        let expected: Vec<u32> = (1..=n as u32).rev().collect();
        assert_eq!(towers.peg(2), Some(expected.as_slice()));
        assert_eq!(towers.peg(0), Some(&[][..]));
        assert_eq!(towers.peg(1), Some(&[][..]));
    }
}

#[test]
fn test_generate_hanoi_frames() {
    let steps = generate_hanoi(2).unwrap();
    assert_eq!(steps.len(), 4);

    let start = steps.first().unwrap();
    assert_eq!(start.last_move, None);
    assert_eq!(start.towers.pegs()[0], vec![2, 1]);

    let after_first = steps.get(1).unwrap();
    assert_eq!(after_first.last_move, Some(Move::new(0, 1)));
    assert_eq!(after_first.towers.pegs()[0], vec![2]);
    assert_eq!(after_first.towers.pegs()[1], vec![1]);

    let end = steps.last().unwrap();
    assert_eq!(end.towers.pegs()[2], vec![2, 1]);
    assert!(steps.iter().all(|f| f.towers.is_valid()));
}

#[test]
fn test_generate_hanoi_rejects_bad_disk_counts() {
    assert!(matches!(
        generate_hanoi(0),
        Err(StepError::InvalidInput(InvalidInputError::DiskCountOutOfRange { disks: 0, .. }))
    ));
    assert!(matches!(
        generate_hanoi(21),
        Err(StepError::InvalidInput(InvalidInputError::DiskCountOutOfRange { disks: 21, .. }))
    ));
}

#[test]
fn test_towers_reject_illegal_moves() {
    let mut towers = Towers::new(2);

    assert_eq!(
        towers.apply(Move::new(1, 2)),
        Err(MoveError::EmptyPeg { peg: 1 })
    );
    assert_eq!(
        towers.apply(Move::new(0, 3)),
        Err(MoveError::NoSuchPeg { peg: 3 })
    );

    assert_eq!(towers.apply(Move::new(0, 1)), Ok(1));
    assert_eq!(
        towers.apply(Move::new(0, 1)),
        Err(MoveError::LargerOnSmaller {
            disk: 2,
            top: 1,
            to: 1
        })
    );
    // Failed moves leave the towers untouched
    assert_eq!(towers.pegs()[0], vec![2]);
    assert_eq!(towers.pegs()[1], vec![1]);
}

// ========== Graph traversal ==========

#[test]
fn test_path_graph_bfs() {
    let graph = AdjacencyMap::from_edges(4, &edges(&[(1, 2), (2, 3), (3, 4)])).unwrap();
    let steps = bfs_steps(&graph);

    // Each dequeue re-records the set, even when nothing new was found
    assert_eq!(
        steps.as_slice(),
        &[
            vec![1],
            vec![1, 2],
            vec![1, 2],
            vec![1, 2, 3],
            vec![1, 2, 3],
            vec![1, 2, 3, 4],
            vec![1, 2, 3, 4],
        ]
    );
}

#[test]
fn test_path_graph_dfs() {
    let graph = AdjacencyMap::from_edges(4, &edges(&[(1, 2), (2, 3), (3, 4)])).unwrap();
    let steps = dfs_steps(&graph);

    assert_eq!(
        steps.as_slice(),
        &[vec![1], vec![1, 2], vec![1, 2, 3], vec![1, 2, 3, 4]]
    );
}

#[test]
fn test_branching_graph_orders() {
    let graph = AdjacencyMap::from_edges(4, &edges(&[(1, 2), (1, 3), (2, 4)])).unwrap();

    let bfs = GraphTraversal::Bfs.generate(&graph);
    assert_eq!(bfs.last(), Some(&vec![1, 2, 3, 4]));

    let dfs = GraphTraversal::Dfs.generate(&graph);
    assert_eq!(
        dfs.as_slice(),
        &[vec![1], vec![1, 2], vec![1, 2, 4], vec![1, 2, 4, 3]]
    );
}

#[test]
fn test_graph_with_cycle_terminates() {
    let graph = AdjacencyMap::from_edges(3, &edges(&[(1, 2), (2, 3), (3, 1)])).unwrap();

    assert_eq!(dfs_steps(&graph).last(), Some(&vec![1, 2, 3]));
    assert_eq!(bfs_steps(&graph).last(), Some(&vec![1, 2, 3]));
}

#[test]
fn test_disconnected_nodes_are_not_visited() {
    let steps = generate_graph(GraphTraversal::Dfs, 3, &edges(&[(1, 2)])).unwrap();
    assert_eq!(steps.last(), Some(&vec![1, 2]));
}

#[test]
fn test_empty_graph() {
    for traversal in [GraphTraversal::Bfs, GraphTraversal::Dfs] {
        let steps = generate_graph(traversal, 0, &[]).unwrap();
        assert!(steps.is_empty());
    }
}

#[test]
fn test_adjacency_is_symmetric() {
    let graph = AdjacencyMap::from_edges(3, &edges(&[(2, 1), (3, 2)])).unwrap();
    assert_eq!(graph.neighbors(1), &[2]);
    assert_eq!(graph.neighbors(2), &[1, 3]);
    assert_eq!(graph.neighbors(3), &[2]);
    assert_eq!(graph.neighbors(9), &[] as &[usize]);
    assert_eq!(graph.edges().len(), 2);
}

#[test]
fn test_graph_rejects_out_of_range_edges() {
    let err = generate_graph(GraphTraversal::Bfs, 3, &edges(&[(1, 2), (2, 4)])).unwrap_err();
    assert_eq!(
        err,
        StepError::InvalidInput(InvalidInputError::NodeOutOfRange {
            line: 2,
            node: 4,
            nodes: 3
        })
    );
    assert_eq!(err.line(), Some(2));
}

#[test]
fn test_graph_from_text() {
    let steps =
        generate_graph_from_text(GraphTraversal::Bfs, "4", "1 2\n2 3\n3 4\n").unwrap();
    assert_eq!(steps.last(), Some(&vec![1, 2, 3, 4]));

    let err = generate_graph_from_text(GraphTraversal::Dfs, "four", "1 2").unwrap_err();
    assert!(matches!(
        err,
        StepError::InvalidInput(InvalidInputError::InvalidCount { .. })
    ));

    let err = generate_graph_from_text(GraphTraversal::Dfs, "3", "1 2\n2-3").unwrap_err();
    assert!(matches!(
        err,
        StepError::InvalidInput(InvalidInputError::MalformedEdge { line: 2, .. })
    ));
}

// ========== Tree traversal ==========

#[test]
fn test_three_node_tree_orders() {
    let e = edges(&[(1, 2), (1, 3)]);

    let pre = generate_tree(TreeTraversal::Preorder, 3, &e).unwrap();
    assert_eq!(pre.as_slice(), &[vec![1], vec![1, 2], vec![1, 2, 3]]);

    let inorder = generate_tree(TreeTraversal::Inorder, 3, &e).unwrap();
    assert_eq!(inorder.as_slice(), &[vec![2], vec![2, 1], vec![2, 1, 3]]);

    let post = generate_tree(TreeTraversal::Postorder, 3, &e).unwrap();
    assert_eq!(post.as_slice(), &[vec![2], vec![2, 3], vec![2, 3, 1]]);
}

#[test]
fn test_five_node_tree_from_text() {
    let text = "1 2\n1 3\n2 4\n2 5";

    let last = |t| {
        generate_tree_from_text(t, "5", text)
            .unwrap()
            .last()
            .cloned()
            .unwrap()
    };

    assert_eq!(last(TreeTraversal::Preorder), vec![1, 2, 4, 5, 3]);
    assert_eq!(last(TreeTraversal::Inorder), vec![4, 2, 5, 1, 3]);
    assert_eq!(last(TreeTraversal::Postorder), vec![4, 5, 2, 3, 1]);
}

#[test]
fn test_edge_direction_does_not_matter() {
    let steps = generate_tree(TreeTraversal::Preorder, 3, &edges(&[(2, 1), (3, 1)])).unwrap();
    assert_eq!(steps.last(), Some(&vec![1, 2, 3]));
}

#[test]
fn test_inorder_ignores_third_child() {
    let e = edges(&[(1, 2), (1, 3), (1, 4)]);

    let inorder = generate_tree(TreeTraversal::Inorder, 4, &e).unwrap();
    assert_eq!(inorder.last(), Some(&vec![2, 1, 3]));

    let pre = generate_tree(TreeTraversal::Preorder, 4, &e).unwrap();
    assert_eq!(pre.last(), Some(&vec![1, 2, 3, 4]));
}

#[test]
fn test_trivial_trees() {
    let single = generate_tree(TreeTraversal::Postorder, 1, &[]).unwrap();
    assert_eq!(single.as_slice(), &[vec![1]]);

    let empty = generate_tree(TreeTraversal::Inorder, 0, &[]).unwrap();
    assert!(empty.is_empty());
}

#[test]
fn test_tree_rejects_wrong_edge_count() {
    let err = Tree::new(3, &edges(&[(1, 2)])).unwrap_err();
    assert_eq!(
        err,
        InvalidInputError::WrongEdgeCount {
            nodes: 3,
            expected: 2,
            got: 1
        }
    );

    let err = generate_tree_from_text(TreeTraversal::Preorder, "2", "1 2\n2 1").unwrap_err();
    assert!(matches!(
        err,
        StepError::InvalidInput(InvalidInputError::WrongEdgeCount { got: 2, .. })
    ));
}

#[test]
fn test_tree_rejects_out_of_range_nodes() {
    let err = generate_tree_from_text(TreeTraversal::Preorder, "3", "1 2\n2 7").unwrap_err();
    assert!(matches!(
        err,
        StepError::InvalidInput(InvalidInputError::NodeOutOfRange { node: 7, line: 2, .. })
    ));
}

#[test]
fn test_tree_rejects_cycles_and_duplicates() {
    // Right edge count, but the cycle leaves node 4 stranded
    let err = Tree::new(4, &edges(&[(1, 2), (2, 3), (3, 1)])).unwrap_err();
    assert_eq!(err, InvalidInputError::NotATree { node: 4 });

    let err = Tree::new(4, &edges(&[(1, 2), (1, 2), (3, 4)])).unwrap_err();
    assert_eq!(err, InvalidInputError::NotATree { node: 3 });
}

#[test]
fn test_deep_path_tree_walks_on_small_stack() {
    let n = 2_000;
    let pairs: Vec<(usize, usize)> = (1..n).map(|k| (k, k + 1)).collect();
    let tree = Tree::new(n, &edges(&pairs)).unwrap();
    let forward: Vec<usize> = (1..=n).collect();
    let backward: Vec<usize> = (1..=n).rev().collect();

    // Walk depth must not depend on the thread's stack
    let finals = std::thread::Builder::new()
        .stack_size(128 * 1024)
        .spawn(move || {
            [
                TreeTraversal::Preorder,
                TreeTraversal::Inorder,
                TreeTraversal::Postorder,
            ]
            .map(|t| {
                let steps = tree.traverse(t);
                assert_eq!(steps.len(), n);
                steps.last().cloned().unwrap()
            })
        })
        .unwrap()
        .join()
        .unwrap();

    assert_eq!(finals[0], forward);
    // A lone child is the left child, so inorder climbs back up the path
    assert_eq!(finals[1], backward);
    assert_eq!(finals[2], backward);
}

// ========== Determinism ==========

#[test]
fn test_generators_are_idempotent() {
    let values = [4.0, -1.0, 9.5, 2.0, 2.0];
    for algorithm in SortAlgorithm::ALL {
        assert_eq!(algorithm.generate(&values), algorithm.generate(&values));
    }

    assert_eq!(sieve_steps(60).unwrap(), sieve_steps(60).unwrap());
    assert_eq!(generate_hanoi(5).unwrap(), generate_hanoi(5).unwrap());

    let e = edges(&[(1, 2), (1, 3), (3, 4), (3, 5), (2, 6)]);
    for traversal in [GraphTraversal::Bfs, GraphTraversal::Dfs] {
        assert_eq!(
            generate_graph(traversal, 6, &e).unwrap(),
            generate_graph(traversal, 6, &e).unwrap()
        );
    }
    for traversal in [
        TreeTraversal::Preorder,
        TreeTraversal::Inorder,
        TreeTraversal::Postorder,
    ] {
        assert_eq!(
            generate_tree(traversal, 6, &e).unwrap(),
            generate_tree(traversal, 6, &e).unwrap()
        );
    }
}
