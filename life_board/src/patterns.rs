// patterns.rs - Named seed patterns and deterministic random fill

use crate::board::{Board, BoardError, DIM, GRID_START};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// A named seed shape. Cells are `(row, col)` pairs inside the playable area.
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Glider",
        cells: &[(6, 7), (7, 8), (8, 6), (8, 7), (8, 8)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(50, 49), (50, 50), (50, 51)],
    },
    Pattern {
        name: "Toad",
        cells: &[(49, 50), (49, 51), (49, 52), (50, 49), (50, 50), (50, 51)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(20, 20), (20, 21), (21, 20), (21, 21), (22, 22), (22, 23), (23, 22), (23, 23)],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            // Top section
            (45, 49), (45, 50), (45, 51), (45, 55), (45, 56), (45, 57),
            (47, 47), (47, 52), (47, 54), (47, 59),
            (48, 47), (48, 52), (48, 54), (48, 59),
            (49, 47), (49, 52), (49, 54), (49, 59),
            (50, 49), (50, 50), (50, 51), (50, 55), (50, 56), (50, 57),
            // Bottom section (mirrored)
            (52, 49), (52, 50), (52, 51), (52, 55), (52, 56), (52, 57),
            (53, 47), (53, 52), (53, 54), (53, 59),
            (54, 47), (54, 52), (54, 54), (54, 59),
            (55, 47), (55, 52), (55, 54), (55, 59),
            (57, 49), (57, 50), (57, 51), (57, 55), (57, 56), (57, 57),
        ],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(50, 50), (50, 51), (49, 51), (51, 50), (51, 49)],
    },
    Pattern {
        name: "Gosper Glider Gun",
        cells: &[
            (5, 1), (5, 2), (6, 1), (6, 2),
            (5, 11), (6, 11), (7, 11), (4, 12), (8, 12), (3, 13), (9, 13),
            (3, 14), (9, 14), (6, 15), (4, 16), (8, 16), (5, 17), (6, 17),
            (7, 17), (6, 18), (3, 21), (4, 21), (5, 21), (3, 22), (4, 22),
            (5, 22), (2, 23), (6, 23), (1, 25), (2, 25), (6, 25), (7, 25),
            (3, 35), (4, 35), (3, 36), (4, 36),
        ],
    },
];

/// Clears the board and seeds `pattern` onto it.
pub fn apply_pattern(board: &mut Board, pattern: &Pattern) -> Result<(), BoardError> {
    let cells: Vec<(usize, usize)> =
        pattern.cells.iter().map(|&(row, col)| (col, row)).collect();
    board.seed(&cells)
}

/// Clears the board, then fills the playable area at roughly one-in-three
/// density. Deterministic for a given `seed_value`.
pub fn apply_random(board: &mut Board, seed_value: u32) {
    board.clear();

    // Simple pseudo-random generator
    let mut hasher = DefaultHasher::new();
    seed_value.hash(&mut hasher);
    let mut seed = hasher.finish();

    for row in GRID_START..=DIM {
        for col in GRID_START..=DIM {
            seed = seed.wrapping_mul(1103515245).wrapping_add(12345);
            if seed % 3 == 0 {
                board.set_cell(col, row);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::StepResult;

    #[test]
    fn every_pattern_fits_the_playable_area() {
        for pattern in PATTERNS {
            for &(row, col) in pattern.cells {
                assert!(
                    (GRID_START..=DIM).contains(&row) && (GRID_START..=DIM).contains(&col),
                    "{} has cell ({row}, {col}) outside the playable area",
                    pattern.name
                );
            }
        }
    }

    #[test]
    fn apply_pattern_seeds_exactly_its_cells() {
        for pattern in PATTERNS {
            let mut board = Board::new();
            apply_pattern(&mut board, pattern).unwrap();
            assert_eq!(board.count(), pattern.cells.len(), "{}", pattern.name);
            for &(row, col) in pattern.cells {
                assert!(board.get_cell(col, row), "{} missing ({row}, {col})", pattern.name);
            }
        }
    }

    #[test]
    fn toad_oscillates_without_going_stable() {
        let toad = PATTERNS.iter().find(|p| p.name == "Toad").unwrap();
        let mut board = Board::new();
        apply_pattern(&mut board, toad).unwrap();
        for _ in 0..6 {
            assert_ne!(board.step(), StepResult::Stable);
        }
    }

    #[test]
    fn random_fill_is_deterministic_and_roughly_a_third() {
        let mut a = Board::new();
        let mut b = Board::new();
        apply_random(&mut a, 99);
        apply_random(&mut b, 99);
        assert_eq!(a.cells(), b.cells());

        let population = a.count();
        let area = DIM * DIM;
        assert!(population > area / 5 && population < area / 2);
    }

    #[test]
    fn random_fill_replaces_previous_contents() {
        let mut board = Board::new();
        apply_random(&mut board, 1);
        let first = board.cells().to_vec();
        apply_random(&mut board, 2);
        assert_ne!(board.cells(), &first[..]);
    }
}
