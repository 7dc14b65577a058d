//! Built-in seed patterns, addressable by name from the CLI.

/// Still life: 2x2 block.
pub const BLOCK: &str = "
....
.xx.
.xx.
....";

/// Period-2 oscillator.
pub const BLINKER: &str = "
.....
.....
.xxx.
.....
.....";

/// The classic diagonal traveller.
pub const GLIDER: &str = "
.x........
..x.......
xxx.......
..........
..........
..........
..........
..........";

/// Two offset rows of three, a small seed that boils for a while.
pub const SEED: &str = "
....
.xxx
xxx.
....";

pub fn builtin(name: &str) -> Option<&'static str> {
    match name.to_ascii_lowercase().as_str() {
        "block" => Some(BLOCK),
        "blinker" => Some(BLINKER),
        "glider" => Some(GLIDER),
        "seed" => Some(SEED),
        _ => None,
    }
}

/// Names accepted by [`builtin`], for CLI help and error messages.
pub const BUILTIN_NAMES: [&str; 4] = ["block", "blinker", "glider", "seed"];
