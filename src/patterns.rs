//! Well-known Life patterns as immutable row-string bitmaps.
//!
//! Each pattern is a slice of rows over the two-character alphabet used by
//! [`Grid::set_pattern`](crate::Grid::set_pattern): `X` live, anything else
//! dead. Patterns carry no behavior; they are just data to stamp onto a grid.

/// Glider: the smallest spaceship, travels one cell diagonally every 4
/// generations.
pub const GLIDER: &[&str] = &[
    ".X.",
    "..X",
    "XXX",
];

/// Pulsar: the classic period-3 oscillator, shown with its two-cell
/// quiescent margin.
pub const PULSAR: &[&str] = &[
    ".................",
    ".................",
    "....XXX...XXX....",
    ".................",
    "..X....X.X....X..",
    "..X....X.X....X..",
    "..X....X.X....X..",
    "....XXX...XXX....",
    ".................",
    "....XXX...XXX....",
    "..X....X.X....X..",
    "..X....X.X....X..",
    "..X....X.X....X..",
    ".................",
    "....XXX...XXX....",
    ".................",
    ".................",
];

/// Gosper glider gun: emits a glider every 30 generations, forever.
pub const GOSPER_GLIDER_GUN: &[&str] = &[
    "......................................",
    ".........................X............",
    ".......................X.X............",
    ".............XX......XX............XX.",
    "............X...X....XX............XX.",
    ".XX........X.....X...XX...............",
    ".XX........X...X.XX....X.X............",
    "...........X.....X.......X............",
    "............X...X.....................",
    ".............XX.......................",
];

/// R-pentomino: a methuselah that runs for 1103 generations.
pub const R_PENTOMINO: &[&str] = &[
    ".XX",
    "XX.",
    ".X.",
];

/// Lightweight spaceship (LWSS): travels two cells horizontally every 4
/// generations.
pub const LWSS: &[&str] = &[
    ".X..X",
    "X....",
    "X...X",
    "XXXX.",
];
