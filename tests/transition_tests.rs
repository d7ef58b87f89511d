//! Transition and win-check tests.
//!
//! Covers the fixed scenarios of the puzzle rules plus property tests over
//! arbitrary boards and coordinates.

use lights_out::core::{Coordinate, GameRng, Grid};
use lights_out::rules::{apply_toggle, has_won, toggle_around, toggle_set};
use lights_out::create_grid;
use proptest::prelude::*;

fn grid(rows: &[&[bool]]) -> Grid {
    Grid::from_rows(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
}

/// Coordinates whose cell differs between two same-shaped grids.
fn changed_cells(a: &Grid, b: &Grid) -> Vec<Coordinate> {
    a.cells()
        .zip(b.cells())
        .filter(|((_, x), (_, y))| x != y)
        .map(|((coord, _), _)| coord)
        .collect()
}

// =============================================================================
// Fixed Scenarios
// =============================================================================

#[test]
fn test_toggle_locality() {
    let start = Grid::new(4, 5).unwrap();
    let next = toggle_around(&start, Coordinate::new(1, 1));

    let mut lit: Vec<_> = next
        .grid
        .cells()
        .filter(|&(_, lit)| lit)
        .map(|(coord, _)| coord)
        .collect();
    lit.sort();

    let mut expected = vec![
        Coordinate::new(1, 1),
        Coordinate::new(0, 1),
        Coordinate::new(2, 1),
        Coordinate::new(1, 0),
        Coordinate::new(1, 2),
    ];
    expected.sort();

    assert_eq!(lit, expected);
    assert!(!next.has_won);
}

#[test]
fn test_two_by_two_sequence() {
    let start = grid(&[&[false, true], &[true, false]]);

    let first = toggle_around(&start, Coordinate::new(0, 0));
    assert_eq!(first.grid, grid(&[&[true, false], &[false, false]]));
    assert!(!first.has_won);

    let second = toggle_around(&first.grid, Coordinate::new(0, 0));
    assert_eq!(second.grid, start);
    assert!(!second.has_won);
}

#[test]
fn test_solving_two_by_two() {
    // Pressing (0,0) then (1,1) on a dark 2x2 leaves only the corners lit;
    // pressing them back in either order clears the board.
    let mut g = Grid::new(2, 2).unwrap();
    assert!(!apply_toggle(&mut g, Coordinate::new(0, 0)));
    assert!(!apply_toggle(&mut g, Coordinate::new(1, 1)));
    assert_eq!(g, grid(&[&[true, false], &[false, true]]));

    assert!(!apply_toggle(&mut g, Coordinate::new(1, 1)));
    assert!(apply_toggle(&mut g, Coordinate::new(0, 0)));
}

#[test]
fn test_one_row_board() {
    let start = Grid::new(1, 4).unwrap();
    let next = toggle_around(&start, Coordinate::new(0, 3));
    assert_eq!(next.grid, grid(&[&[false, false, true, true]]));
}

#[test]
fn test_far_out_of_bounds_is_noop() {
    let start = create_grid(3, 3, 0.5, &mut GameRng::new(9)).unwrap();
    for coord in [
        Coordinate::new(-5, -5),
        Coordinate::new(100, 0),
        Coordinate::new(i32::MIN, i32::MAX),
        Coordinate::new(i32::MAX, i32::MAX),
    ] {
        let next = toggle_around(&start, coord);
        assert_eq!(next.grid, start, "toggle at {} changed the grid", coord);
        assert_eq!(next.has_won, start.is_all_off());
    }
}

// =============================================================================
// Properties
// =============================================================================

fn arb_grid() -> impl Strategy<Value = Grid> {
    (1usize..8, 1usize..8).prop_flat_map(|(rows, cols)| {
        prop::collection::vec(prop::collection::vec(any::<bool>(), cols), rows)
            .prop_map(|cells| Grid::from_rows(cells).unwrap())
    })
}

proptest! {
    #[test]
    fn prop_toggle_twice_is_identity(g in arb_grid(), row in -2i32..10, col in -2i32..10) {
        let coord = Coordinate::new(row, col);
        let once = toggle_around(&g, coord);
        let twice = toggle_around(&once.grid, coord);
        prop_assert_eq!(twice.grid, g);
    }

    #[test]
    fn prop_only_toggle_set_changes(g in arb_grid(), row in -2i32..10, col in -2i32..10) {
        let coord = Coordinate::new(row, col);
        let next = toggle_around(&g, coord);

        let mut changed = changed_cells(&g, &next.grid);
        let mut expected: Vec<_> = toggle_set(coord)
            .into_iter()
            .filter(|&c| g.contains(c))
            .collect();
        changed.sort();
        expected.sort();

        prop_assert_eq!(changed, expected);
    }

    #[test]
    fn prop_has_won_iff_all_off(g in arb_grid(), row in 0i32..8, col in 0i32..8) {
        let next = toggle_around(&g, Coordinate::new(row, col));
        prop_assert_eq!(next.has_won, next.grid.lit_count() == 0);
        prop_assert_eq!(next.has_won, has_won(&next.grid));
    }

    #[test]
    fn prop_shape_is_preserved(g in arb_grid(), row in -2i32..10, col in -2i32..10) {
        let next = toggle_around(&g, Coordinate::new(row, col));
        prop_assert_eq!(next.grid.rows(), g.rows());
        prop_assert_eq!(next.grid.cols(), g.cols());
    }

    #[test]
    fn prop_toggles_commute(g in arb_grid(), a in (0i32..8, 0i32..8), b in (0i32..8, 0i32..8)) {
        let (a, b) = (Coordinate::from(a), Coordinate::from(b));
        let ab = toggle_around(&toggle_around(&g, a).grid, b);
        let ba = toggle_around(&toggle_around(&g, b).grid, a);
        prop_assert_eq!(ab, ba);
    }
}
