//! Integration tests for header grid construction

use headergrid::domain::{
    build_grid, forest_leaf_values, max_depth, total_leaf_count, Cell, DomainError, Node,
};
use rstest::{fixture, rstest};

type N = Node<u32, &'static str>;

fn leaf(value: u32) -> N {
    Node::leaf(value)
}

fn branch(label: &'static str, children: Vec<N>) -> N {
    Node::branch(label, children).expect("non-empty branch")
}

// A1 ── B ── 1, 2
// A2 ── 3, 4
#[fixture]
fn uneven_forest() -> Vec<N> {
    vec![
        branch("A1", vec![branch("B", vec![leaf(1), leaf(2)])]),
        branch("A2", vec![leaf(3), leaf(4)]),
    ]
}

fn forests() -> Vec<Vec<N>> {
    vec![
        vec![leaf(1)],
        vec![branch("A", vec![leaf(1)])],
        vec![
            branch("A1", vec![branch("B", vec![leaf(1), leaf(2)])]),
            branch("A2", vec![leaf(3), leaf(4)]),
        ],
        vec![
            leaf(0),
            branch(
                "R",
                vec![
                    branch("P", vec![branch("PP", vec![leaf(1), leaf(2)])]),
                    leaf(3),
                    branch("Q", vec![leaf(4)]),
                    leaf(5),
                    leaf(6),
                ],
            ),
            branch("S", vec![leaf(7)]),
        ],
        vec![
            branch(
                "deep",
                vec![branch(
                    "deeper",
                    vec![branch("deepest", vec![branch("bottom", vec![leaf(1)])])],
                )],
            ),
            branch("flat", vec![leaf(2), leaf(3)]),
            leaf(4),
        ],
    ]
}

// ============================================================
// Worked examples
// ============================================================

#[rstest]
fn given_uneven_forest_when_building_grid_then_matches_expected_rows(uneven_forest: Vec<N>) {
    let grid = build_grid(&uneven_forest).unwrap();

    assert_eq!(
        grid.rows(),
        &[
            vec![Cell::labeled(2, "A1"), Cell::padding(2)],
            vec![Cell::labeled(2, "B"), Cell::labeled(2, "A2")],
        ]
    );
}

#[rstest]
fn given_uneven_forest_when_flattening_then_returns_leaves_in_order(uneven_forest: Vec<N>) {
    assert_eq!(forest_leaf_values(&uneven_forest), vec![&1, &2, &3, &4]);
}

#[test]
fn given_only_leaves_when_building_grid_then_returns_zero_rows() {
    let grid = build_grid(&[leaf(1), leaf(2)]).unwrap();
    assert!(grid.is_empty());
}

#[test]
fn given_empty_forest_when_building_grid_then_fails() {
    let forest: Vec<N> = Vec::new();
    assert_eq!(build_grid(&forest).unwrap_err(), DomainError::EmptyForest);
}

#[test]
fn given_empty_branch_when_constructing_then_fails() {
    let result: Result<N, DomainError> = Node::branch("empty", vec![]);
    assert_eq!(result.unwrap_err(), DomainError::EmptyBranch);
}

// ============================================================
// Properties over a set of forests
// ============================================================

#[rstest]
#[case(0)]
#[case(1)]
#[case(2)]
#[case(3)]
#[case(4)]
fn given_forest_when_building_grid_then_every_row_spans_all_leaves(#[case] index: usize) {
    let forest = &forests()[index];
    let grid = build_grid(forest).unwrap();
    let leaves = total_leaf_count(forest);

    for (level, span) in grid.row_spans().into_iter().enumerate() {
        assert_eq!(span, leaves, "row {} spans {} of {} leaves", level, span, leaves);
    }
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(2)]
#[case(3)]
#[case(4)]
fn given_forest_when_building_grid_then_has_one_row_per_branch_level(#[case] index: usize) {
    let forest = &forests()[index];
    let grid = build_grid(forest).unwrap();
    assert_eq!(grid.len(), max_depth(forest) - 1);
}

#[rstest]
#[case(0)]
#[case(2)]
#[case(3)]
#[case(4)]
fn given_forest_when_flattening_then_length_matches_leaf_count(#[case] index: usize) {
    let forest = &forests()[index];
    assert_eq!(forest_leaf_values(forest).len(), total_leaf_count(forest));
}

#[rstest]
#[case(2)]
#[case(3)]
fn given_forest_when_building_twice_then_results_are_identical(#[case] index: usize) {
    let forest = &forests()[index];
    assert_eq!(build_grid(forest).unwrap(), build_grid(forest).unwrap());
}

#[test]
fn given_cells_when_building_grid_then_spans_are_positive() {
    for forest in forests() {
        let grid = build_grid(&forest).unwrap();
        assert!(grid.iter().flatten().all(|cell| cell.span >= 1));
    }
}

// ============================================================
// Consecutive-run grouping
// ============================================================

#[test]
fn given_equal_depth_siblings_split_by_leaf_when_building_grid_then_cells_stay_separate() {
    // P and Q share a depth but are separated by the leaf 2: R must emit three
    // cells in the top row instead of merging P and Q into one.
    let forest = vec![branch(
        "R",
        vec![
            branch("P", vec![leaf(1)]),
            leaf(2),
            branch("Q", vec![leaf(3)]),
        ],
    )];

    let grid = build_grid(&forest).unwrap();

    assert_eq!(
        grid.rows()[0],
        vec![Cell::labeled(1, "R"), Cell::padding(1), Cell::labeled(1, "R")]
    );
    assert_eq!(
        grid.rows()[1],
        vec![Cell::labeled(1, "P"), Cell::labeled(1, "R"), Cell::labeled(1, "Q")]
    );
}

#[test]
fn given_label_deferred_by_rewrap_when_building_grid_then_appears_on_lower_row() {
    let forest = vec![
        branch("top", vec![branch("mid", vec![branch("low", vec![leaf(1)])]), leaf(2)]),
    ];

    let grid = build_grid(&forest).unwrap();

    // top labels `mid` directly; its own leaf is held open until the last row
    assert_eq!(
        grid.rows(),
        &[
            vec![Cell::labeled(1, "top"), Cell::padding(1)],
            vec![Cell::labeled(1, "mid"), Cell::padding(1)],
            vec![Cell::labeled(1, "low"), Cell::labeled(1, "top")],
        ]
    );
}
