use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

/// Character marking a dead cell in patterns and rendered output.
pub const DEAD_MARKER: char = '.';
/// Character marking a live cell in patterns and rendered output.
pub const LIVE_MARKER: char = 'X';

/// Errors reported at the grid's validation boundary. Every other operation
/// is total: toroidal wrapping makes all coordinates valid.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GridError {
    /// Width and height must both be positive.
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimension { width: i32, height: i32 },
    /// The alive probability passed to `randomize` must lie in [0, 1].
    #[error("alive probability must be within [0, 1], got {0}")]
    InvalidProbability(f64),
}

/// Neighbor displacements for the Moore neighborhood:
/// ```text
/// XXX
/// X.X
/// XXX
/// ```
const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// A fixed-size Game of Life board with toroidal (wraparound) topology.
///
/// Cells are stored row-major in a flat `Vec<bool>`. Any `i32` coordinate is
/// valid: it is reduced into `[0, dim)` with a mathematical modulo, so the
/// left neighbor of column 0 is the last column and likewise for rows.
#[derive(Debug, Clone)]
pub struct Grid {
    width: i32,
    height: i32,
    cells: Vec<bool>,
    /// Scratch buffer for live-neighbor counts, reused across updates.
    /// Not part of the logical state; only meaningful inside `update`.
    neighbor_counts: Vec<u8>,
}

impl Grid {
    /// Create an all-dead grid. Fails if either dimension is not positive.
    pub fn new(width: i32, height: i32) -> Result<Self, GridError> {
        if width <= 0 || height <= 0 {
            return Err(GridError::InvalidDimension { width, height });
        }
        let len = (width * height) as usize;
        Ok(Self {
            width,
            height,
            cells: vec![false; len],
            neighbor_counts: vec![0; len],
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Map a toroidal coordinate to its flat array index. The double modulo
    /// keeps negative inputs in range, unlike the bare `%` remainder.
    fn index(&self, x: i32, y: i32) -> usize {
        let wx = ((x % self.width) + self.width) % self.width;
        let wy = ((y % self.height) + self.height) % self.height;
        (wy * self.width + wx) as usize
    }

    /// Fill with random cells, each alive with probability `alive_probability`.
    ///
    /// With `Some(seed)` the result is fully deterministic for a given
    /// probability and grid size: cells are drawn one at a time in row-major
    /// order from a single seeded stream. With `None` the seed comes from the
    /// system clock, so successive calls differ.
    pub fn randomize(
        &mut self,
        alive_probability: f64,
        seed: Option<u64>,
    ) -> Result<(), GridError> {
        if !(0.0..=1.0).contains(&alive_probability) {
            return Err(GridError::InvalidProbability(alive_probability));
        }
        let seed = seed.unwrap_or_else(clock_seed);
        let mut rng = StdRng::seed_from_u64(seed);
        for cell in &mut self.cells {
            *cell = rng.gen::<f64>() < alive_probability;
        }
        Ok(())
    }

    /// Set every cell dead.
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Get cell state at a toroidal coordinate.
    pub fn get(&self, x: i32, y: i32) -> bool {
        self.cells[self.index(x, y)]
    }

    /// Set cell state at a toroidal coordinate.
    pub fn set(&mut self, x: i32, y: i32, alive: bool) {
        let idx = self.index(x, y);
        self.cells[idx] = alive;
    }

    /// Stamp a pattern onto the grid with its top-left corner at
    /// `(offset_x, offset_y)`. Rows may have different lengths; only the
    /// characters present in each row are written, with `LIVE_MARKER`
    /// meaning alive and anything else dead. Target coordinates wrap.
    pub fn set_pattern(&mut self, pattern: &[&str], offset_x: i32, offset_y: i32) {
        for (y, row) in pattern.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                self.set(x as i32 + offset_x, y as i32 + offset_y, ch == LIVE_MARKER);
            }
        }
    }

    /// Advance the board by one generation (B3/S23 on the torus).
    ///
    /// Two passes over the board: first scatter-increment the neighbor count
    /// of every live cell's 8 neighbors, then rewrite each cell from its
    /// count. The counts are computed entirely from the old generation
    /// before any cell changes, so callers never observe a half-updated
    /// board. A count of exactly 2 leaves the cell as it was; the cell array
    /// still holds the old value at that point, so no copy is needed.
    pub fn update(&mut self) {
        self.neighbor_counts.fill(0);

        for y in 0..self.height {
            for x in 0..self.width {
                if !self.cells[(y * self.width + x) as usize] {
                    continue;
                }
                for (dx, dy) in NEIGHBOR_OFFSETS {
                    let idx = self.index(x + dx, y + dy);
                    self.neighbor_counts[idx] += 1;
                }
            }
        }

        for (cell, &count) in self.cells.iter_mut().zip(&self.neighbor_counts) {
            if count < 2 || count >= 4 {
                *cell = false;
            } else if count == 3 {
                *cell = true;
            }
            // count == 2: survives if alive, stays dead otherwise.
        }
    }

    /// Count live cells.
    pub fn population(&self) -> u64 {
        self.cells.iter().filter(|&&c| c).count() as u64
    }

    /// Render the board as text, one line per row, `.` dead and `X` live.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(((self.width + 1) * self.height) as usize);
        for y in 0..self.height {
            for x in 0..self.width {
                let alive = self.cells[(y * self.width + x) as usize];
                out.push(if alive { LIVE_MARKER } else { DEAD_MARKER });
            }
            out.push('\n');
        }
        out
    }
}

/// Two grids are equal iff they have the same dimensions and the same cell
/// state at every position. The neighbor-count scratch buffer is ignored.
impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width && self.height == other.height && self.cells == other.cells
    }
}

impl Eq for Grid {}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Seed for unseeded `randomize` calls, taken from the system clock.
fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
