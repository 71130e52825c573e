use std::io::Write;
use std::time::Duration;
use std::{env, io, thread};

use torlife::{patterns, Grid};

const FRAME_DELAY: Duration = Duration::from_millis(100);

fn main() {
    env_logger::init();

    let name = env::args().nth(1).unwrap_or_else(|| "gun".to_string());

    let mut grid = Grid::new(70, 30).expect("dimensions are positive");
    match name.as_str() {
        "glider" => grid.set_pattern(patterns::GLIDER, 0, 0),
        "pulsar" => grid.set_pattern(patterns::PULSAR, 6, 6),
        "r-pentomino" => grid.set_pattern(patterns::R_PENTOMINO, 34, 14),
        "lwss" => grid.set_pattern(patterns::LWSS, 60, 14),
        "random" => grid
            .randomize(0.2, None)
            .expect("probability is within [0, 1]"),
        "gun" => grid.set_pattern(patterns::GOSPER_GLIDER_GUN, 0, 0),
        other => {
            eprintln!("unknown pattern '{other}'");
            eprintln!("usage: torlife [glider|pulsar|r-pentomino|lwss|random|gun]");
            std::process::exit(1);
        }
    }

    log::info!(
        "Seeded '{name}' on a {}x{} torus ({} live cells)",
        grid.width(),
        grid.height(),
        grid.population()
    );

    let mut stdout = io::stdout();
    loop {
        // Clear screen and move the cursor home before each frame.
        let _ = write!(stdout, "\x1B[2J\x1B[H{grid}");
        let _ = stdout.flush();
        grid.update();
        thread::sleep(FRAME_DELAY);
    }
}
