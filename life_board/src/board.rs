// board.rs - Bit-packed double-buffered board for Conway's Game of Life

use thiserror::Error;

// Compile-time grid size configuration
pub const DIM: usize = 100;                           // Active grid size (100x100 playing area)
pub const TOTAL_SIZE: usize = DIM + 2;                // Total size including borders
pub const GRID_START: usize = 1;                      // Start of active area
pub const GRID_END: usize = DIM + 1;                  // End of active area (1..DIM+1)

/// Bytes per buffer: one bit per cell of the bordered grid, rounded up so the
/// last partial byte is addressable.
pub const BUFFER_LEN: usize = (TOTAL_SIZE * TOTAL_SIZE + 7) / 8;

type Buffer = [u8; BUFFER_LEN];

/// Byte index and bit mask for the cell at `(x, y)`, LSB-first within a byte.
fn bit_pos(x: usize, y: usize) -> (usize, u8) {
    let pos = y * TOTAL_SIZE + x;
    (pos / 8, 1 << (pos % 8))
}

fn read_bit(buf: &Buffer, x: usize, y: usize) -> bool {
    let (i, mask) = bit_pos(x, y);
    buf[i] & mask != 0
}

fn write_bit(buf: &mut Buffer, x: usize, y: usize) {
    let (i, mask) = bit_pos(x, y);
    buf[i] |= mask;
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("cell ({x}, {y}) is outside the playable area 1..={max}", max = DIM)]
    OutOfRange { x: usize, y: usize },
}

/// Outcome of one generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepResult {
    /// No cell changed state: the board reached a fixed point. Further steps
    /// are legal and will keep returning `Stable`.
    Stable,
    /// Number of live cells after this generation.
    Live(usize),
}

/// A Life board with a one-cell dead border on every edge.
///
/// Cells are packed one bit each into two fixed buffers. Reads always target
/// the active slot; [`Board::step`] writes the next generation into the
/// inactive slot and then flips `active`, so no buffer is ever read and
/// written within the same step.
pub struct Board {
    buffers: [Buffer; 2],
    active: usize,
}

impl Board {
    pub fn new() -> Self {
        Self {
            buffers: [[0; BUFFER_LEN]; 2],
            active: 0,
        }
    }

    /// Clears the board and seeds the default demo pattern (a glider).
    pub fn init(&mut self) {
        self.clear();
        for &(y, x) in crate::patterns::PATTERNS[0].cells {
            self.set_cell(x, y);
        }
    }

    /// Whether the cell at `(x, y)` is alive in the active buffer.
    ///
    /// Coordinates include the border, so `0..TOTAL_SIZE` on both axes.
    /// Out-of-range access is a programming error and panics.
    pub fn get_cell(&self, x: usize, y: usize) -> bool {
        assert!(
            x < TOTAL_SIZE && y < TOTAL_SIZE,
            "cell ({x}, {y}) is outside the bordered grid"
        );
        read_bit(&self.buffers[self.active], x, y)
    }

    /// Sets the cell at `(x, y)` alive in the active buffer.
    ///
    /// Only interior cells may be set; the border must stay dead. There is no
    /// unset primitive: each generation starts from a zeroed write target.
    pub fn set_cell(&mut self, x: usize, y: usize) {
        assert!(
            (GRID_START..=DIM).contains(&x) && (GRID_START..=DIM).contains(&y),
            "cell ({x}, {y}) is outside the playable area"
        );
        write_bit(&mut self.buffers[self.active], x, y);
    }

    /// Clears the board, then seeds every cell in `cells` (given as `(x, y)`).
    ///
    /// Rejects coordinates outside the playable interior so the border
    /// invariant cannot be broken by caller-supplied patterns.
    pub fn seed(&mut self, cells: &[(usize, usize)]) -> Result<(), BoardError> {
        self.clear();
        for &(x, y) in cells {
            if !(GRID_START..=DIM).contains(&x) || !(GRID_START..=DIM).contains(&y) {
                return Err(BoardError::OutOfRange { x, y });
            }
            write_bit(&mut self.buffers[self.active], x, y);
        }
        Ok(())
    }

    /// Zeroes the active buffer.
    pub fn clear(&mut self) {
        self.buffers[self.active].fill(0);
    }

    /// Advances the board by one generation.
    ///
    /// Reads the active buffer, writes the inactive one, then promotes the
    /// write target to active. Runs in `O(DIM^2)` with no allocation.
    pub fn step(&mut self) -> StepResult {
        let mut total_alive = 0;
        let mut changed = 0;

        let (front, back) = self.buffers.split_at_mut(1);
        let (src, dst) = if self.active == 0 {
            (&front[0], &mut back[0])
        } else {
            (&back[0], &mut front[0])
        };
        dst.fill(0);

        for y in GRID_START..=DIM {
            for x in GRID_START..=DIM {
                let alive = read_bit(src, x, y);

                // Neighbor positions; border padding keeps these in range
                // without bounds checks.
                let neighbors = [
                    (x - 1, y - 1), (x, y - 1), (x + 1, y - 1),
                    (x - 1, y),                 (x + 1, y),
                    (x - 1, y + 1), (x, y + 1), (x + 1, y + 1),
                ];

                let mut count = 0;
                for &(nx, ny) in &neighbors {
                    if read_bit(src, nx, ny) {
                        count += 1;
                        if count > 3 {
                            break; // no rule branch distinguishes counts above 3
                        }
                    }
                }

                let next = match (alive, count) {
                    (true, 2) | (true, 3) => true,  // Survival
                    (false, 3) => true,             // Birth
                    _ => false,                     // Death or stays dead
                };

                if next {
                    write_bit(dst, x, y);
                    total_alive += 1;
                }
                if next != alive {
                    changed += 1;
                }
            }
        }

        // The only place the active slot changes.
        self.active ^= 1;

        if changed == 0 {
            StepResult::Stable
        } else {
            StepResult::Live(total_alive)
        }
    }

    /// Live-cell population of the active buffer.
    ///
    /// Independent tally from the count [`Board::step`] returns; the two must
    /// always agree.
    pub fn count(&self) -> usize {
        self.buffers[self.active]
            .iter()
            .map(|b| b.count_ones() as usize)
            .sum()
    }

    /// Raw bytes of the active buffer, row-major, LSB-first, for rendering.
    ///
    /// The view reflects the current generation only until the next call to
    /// [`Board::step`]; copy it out if a stable snapshot is needed.
    pub fn cells(&self) -> &[u8] {
        &self.buffers[self.active]
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
