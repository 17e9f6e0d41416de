//! Generic Life integration tests.
//!
//! These tests verify the adjacency-driven engine against a hand-built
//! 25-cell neighbor graph and against the geometric engines.

use rust_automata::core::{AutomataError, Border, Grid, GridRng, Rule};
use rust_automata::life::{life, life_generic, AdjacencyMatrix, GenericLife};

/// Neighbor graph of a 5x5 grid, one string per cell, `1` marking a
/// neighbor. Not symmetric: the bottom rows see cells of the top row, which
/// do not see them back.
const FIVE_BY_FIVE: [&str; 25] = [
    "0100011000000000000000000",
    "1010011100000000000000000",
    "0101001110000000000000000",
    "0010100111000000000000000",
    "0001000011000000000000000",
    "1100001000110000000000000",
    "1110010100111000000000000",
    "0111001010011100000000000",
    "0011100101001110000000000",
    "0001100010000110000000000",
    "0000011000010001100000000",
    "0000011100101001110000000",
    "0000001110010100111000000",
    "0000000111001010011100000",
    "0000000011100101001110000",
    "0000000001110010100111000",
    "0000000000111001010011100",
    "0000000000011100101001110",
    "0000000000001110010100111",
    "1000000000000111001010011",
    "1100000000000011100101001",
    "1110000000000001110010100",
    "0111000000000000111001010",
    "0011100000000000011100101",
    "1001110000000000001110010",
];

fn five_by_five() -> AdjacencyMatrix {
    let rows: Vec<Vec<bool>> = FIVE_BY_FIVE
        .iter()
        .map(|row| row.bytes().map(|b| b == b'1').collect())
        .collect();
    AdjacencyMatrix::from_rows(&rows).unwrap()
}

fn flat(rows: &[&str]) -> Vec<bool> {
    rows.iter()
        .flat_map(|row| row.chars().map(|ch| ch == '#'))
        .collect()
}

// =============================================================================
// Fixtures
// =============================================================================

/// Test that a glider advances four generations over the 25-cell graph.
#[test]
fn test_glider_on_fixture_graph() {
    let glider = flat(&[".....", ".###.", "...#.", "..#..", "....."]);
    let expected = flat(&["..###", "....#", "...#.", ".....", "....."]);

    let result = life_generic(&five_by_five(), &glider, 4, [2, 3], [3]).unwrap();
    assert_eq!(result, expected);
}

/// Test that the fixture graph really is asymmetric and still accepted.
#[test]
fn test_fixture_is_asymmetric() {
    let matrix = five_by_five();
    assert_eq!(matrix.side(), 25);
    let asymmetric = (0..25)
        .flat_map(|i| (0..25).map(move |j| (i, j)))
        .any(|(i, j)| matrix.is_neighbor(i, j) != matrix.is_neighbor(j, i));
    assert!(asymmetric);
}

// =============================================================================
// Equivalence With Geometric Engines
// =============================================================================

/// Test that a Moore adjacency matrix reproduces square Life under both
/// borders.
#[test]
fn test_moore_matrix_matches_square_engine() {
    let mut rng = GridRng::new(23);
    for border in [Border::Sink, Border::Periodic] {
        let matrix = AdjacencyMatrix::moore(7, 6, border);
        for _ in 0..4 {
            let grid = rng.bool_grid(7, 6, 0.4);
            let square = life(&grid, 5, border.is_periodic()).unwrap();
            let generic = life_generic(&matrix, grid.as_slice(), 5, [2, 3], [3]).unwrap();
            assert_eq!(square.into_vec(), generic, "{border:?}");
        }
    }
}

/// Test that a graph built from a predicate behaves like one built from rows.
#[test]
fn test_from_fn_matches_from_rows() {
    let fixture = five_by_five();
    let rebuilt = AdjacencyMatrix::from_fn(25, |i, j| fixture.is_neighbor(i, j));
    assert_eq!(rebuilt, fixture);
}

// =============================================================================
// Engine Behavior
// =============================================================================

/// Test that a cell with no neighbors follows the zero-count rule.
#[test]
fn test_isolated_cells() {
    let matrix = AdjacencyMatrix::from_fn(3, |_, _| false);
    let engine = GenericLife::new("B0/S0".parse::<Rule>().unwrap());
    assert_eq!(engine.run(&matrix, &[false, true, false], 1).unwrap(), vec![true; 3]);

    let conway = GenericLife::new(Rule::conway());
    assert_eq!(conway.run(&matrix, &[true, true, true], 1).unwrap(), vec![false; 3]);
}

/// Test that counts use only the row of the updating cell.
#[test]
fn test_directed_edges() {
    // Cell 1 watches cell 0; cell 0 watches nothing.
    let matrix = AdjacencyMatrix::from_fn(2, |i, j| i == 1 && j == 0);
    let result = life_generic(&matrix, &[true, false], 1, [1], [1]).unwrap();
    assert_eq!(result, vec![false, true]);
}

/// Test that an empty graph with an empty state is a no-op.
#[test]
fn test_empty_graph() {
    let matrix = AdjacencyMatrix::from_fn(0, |_, _| false);
    assert!(life_generic(&matrix, &[], 3, [2, 3], [3]).unwrap().is_empty());
}

/// Test the shape checks on matrix and state.
#[test]
fn test_shape_errors() {
    let ragged = AdjacencyMatrix::from_rows(&[vec![true, false], vec![false]]);
    assert!(matches!(ragged, Err(AutomataError::Shape(_))));

    let wide = Grid::filled(2, 3, false);
    assert!(matches!(
        AdjacencyMatrix::from_grid(wide),
        Err(AutomataError::Shape(_))
    ));

    let err = life_generic(&five_by_five(), &[false; 24], 1, [2, 3], [3]).unwrap_err();
    assert!(matches!(err, AutomataError::Shape(_)));
}
