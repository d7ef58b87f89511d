//! The toggle transition and the win check.
//!
//! Pressing a cell flips it together with its four orthogonal neighbors.
//! Neighbors that fall off the board are skipped, which is how corners and
//! edges flip fewer cells. The puzzle is won when every light is off.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::coord::Coordinate;
use crate::core::grid::Grid;

/// Offsets making up a toggle set: self, left, right, up, down.
pub const TOGGLE_OFFSETS: [(i32, i32); 5] = [(0, 0), (0, -1), (0, 1), (-1, 0), (1, 0)];

/// Whether the puzzle is still being played.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// At least one light is on.
    #[default]
    Playing,
    /// All lights are off.
    Won,
}

impl Status {
    /// Map a win flag to a status.
    #[must_use]
    pub fn from_has_won(has_won: bool) -> Self {
        if has_won {
            Status::Won
        } else {
            Status::Playing
        }
    }

    /// Is this the winning status?
    #[must_use]
    pub fn is_won(self) -> bool {
        self == Status::Won
    }
}

/// Result of one toggle: the next grid and whether it is solved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    /// Grid after the toggle.
    pub grid: Grid,
    /// True when every cell of `grid` is off.
    pub has_won: bool,
}

impl Transition {
    /// Status implied by `has_won`.
    #[must_use]
    pub fn status(&self) -> Status {
        Status::from_has_won(self.has_won)
    }
}

/// Positions flipped by pressing `coord`, before clipping to a grid.
///
/// Offsets that overflow `i32` are dropped; they could never be on a grid.
#[must_use]
pub fn toggle_set(coord: Coordinate) -> SmallVec<[Coordinate; 5]> {
    TOGGLE_OFFSETS
        .iter()
        .filter_map(|&(d_row, d_col)| coord.offset(d_row, d_col))
        .collect()
}

/// Apply the toggle at `coord` to `grid` in place and return the win flag.
///
/// Never fails. Out-of-bounds positions, including `coord` itself, are skipped.
pub fn apply_toggle(grid: &mut Grid, coord: Coordinate) -> bool {
    for target in toggle_set(coord) {
        grid.flip(target);
    }
    has_won(grid)
}

/// Toggle at `coord`, returning the next grid and the win flag.
///
/// `grid` is left untouched. The returned grid shares structure with it.
///
/// ```
/// use lights_out::core::{Coordinate, Grid};
/// use lights_out::rules::toggle_around;
///
/// let grid: Grid = ".O\nO.".parse().unwrap();
/// let next = toggle_around(&grid, Coordinate::new(0, 0));
/// assert_eq!(next.grid.to_string(), "O.\n..\n");
/// assert!(!next.has_won);
/// ```
#[must_use]
pub fn toggle_around(grid: &Grid, coord: Coordinate) -> Transition {
    let mut next = grid.clone();
    let has_won = apply_toggle(&mut next, coord);
    Transition { grid: next, has_won }
}

/// True iff every cell is off. Scans the whole grid.
#[must_use]
pub fn has_won(grid: &Grid) -> bool {
    grid.is_all_off()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(text: &str) -> Grid {
        text.parse().unwrap()
    }

    #[test]
    fn test_toggle_set_interior() {
        let set = toggle_set(Coordinate::new(2, 2));
        assert_eq!(
            set.as_slice(),
            &[
                Coordinate::new(2, 2),
                Coordinate::new(2, 1),
                Coordinate::new(2, 3),
                Coordinate::new(1, 2),
                Coordinate::new(3, 2),
            ]
        );
        assert!(!set.spilled());
    }

    #[test]
    fn test_toggle_set_overflow() {
        let set = toggle_set(Coordinate::new(i32::MAX, i32::MIN));
        assert_eq!(set.len(), 3);
        assert!(!set.contains(&Coordinate::new(i32::MIN, i32::MIN)));
    }

    #[test]
    fn test_toggle_center() {
        let next = toggle_around(&Grid::new(3, 3).unwrap(), Coordinate::new(1, 1));
        assert_eq!(next.grid, grid(".O.\nOOO\n.O."));
        assert!(!next.has_won);
        assert_eq!(next.status(), Status::Playing);
    }

    #[test]
    fn test_toggle_corners_clip() {
        let start = Grid::new(3, 3).unwrap();

        assert_eq!(
            toggle_around(&start, Coordinate::new(0, 0)).grid,
            grid("OO.\nO..\n...")
        );
        assert_eq!(
            toggle_around(&start, Coordinate::new(2, 2)).grid,
            grid("...\n..O\n.OO")
        );
        assert_eq!(
            toggle_around(&start, Coordinate::new(0, 1)).grid,
            grid("OOO\n.O.\n...")
        );
    }

    #[test]
    fn test_toggle_outside_grid() {
        let start = Grid::new(3, 3).unwrap();

        // Neighbor of an outside cell can still be on the board.
        let next = toggle_around(&start, Coordinate::new(-1, 1));
        assert_eq!(next.grid, grid(".O.\n...\n..."));

        let next = toggle_around(&start, Coordinate::new(10, 10));
        assert_eq!(next.grid, start);
        assert!(next.has_won);
    }

    #[test]
    fn test_toggle_does_not_mutate_input() {
        let start = grid("O.\n..");
        let _ = toggle_around(&start, Coordinate::new(1, 1));
        assert_eq!(start, grid("O.\n.."));
    }

    #[test]
    fn test_winning_move() {
        let start = grid("OO.\nO..\n...");
        let next = toggle_around(&start, Coordinate::new(0, 0));
        assert!(next.has_won);
        assert_eq!(next.status(), Status::Won);
    }

    #[test]
    fn test_single_cell_grid() {
        let mut g = grid("O");
        assert!(apply_toggle(&mut g, Coordinate::new(0, 0)));
        assert!(!apply_toggle(&mut g, Coordinate::new(0, 0)));
    }

    #[test]
    fn test_has_won() {
        assert!(has_won(&grid("...\n...")));
        assert!(!has_won(&grid("...\n..O")));
    }

    #[test]
    fn test_status() {
        assert_eq!(Status::default(), Status::Playing);
        assert_eq!(Status::from_has_won(true), Status::Won);
        assert!(Status::Won.is_won());
        assert!(!Status::Playing.is_won());
    }
}
