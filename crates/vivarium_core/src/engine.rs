use crate::grid::Grid;
use crate::rule::Rule;
use crate::topology::Topology;

/// Advances a [`Grid`] one generation at a time.
///
/// Every step counts live neighbors against the current grid only,
/// assembles the complete next grid as a separate structure, and swaps
/// it in. Readers handed the grid between steps therefore never see a
/// partially updated generation. `step` is total: it cannot fail on a
/// well-formed grid.
pub struct Engine {
    grid: Grid,
    topology: Topology,
    rule: Rule,
    generation: u64,
}

impl Engine {
    pub fn new(grid: Grid, topology: Topology, rule: Rule) -> Self {
        Self {
            grid,
            topology,
            rule,
            generation: 0,
        }
    }

    /// The current (most recently installed) grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn topology(&self) -> Topology {
        self.topology
    }

    pub fn rule(&self) -> Rule {
        self.rule
    }

    /// Steps taken so far. 0 until the first `step`.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Computes the next generation, installs it, and returns it.
    pub fn step(&mut self) -> &Grid {
        let shape = self.grid.dimensions();
        let next = Grid::from_fn(shape.0, shape.1, |row, col| {
            let alive = self
                .grid
                .get(row, col)
                .map(|c| c.is_alive())
                .unwrap_or(false);
            let live_neighbors = self
                .topology
                .neighbors((row, col), shape)
                .into_iter()
                .filter(|&(r, c)| {
                    self.grid.get(r, c).map(|n| n.is_alive()).unwrap_or(false)
                })
                .count() as u8;
            self.rule.next_state(alive, live_neighbors)
        });
        // from_fn only fails on zero dimensions, which the current grid
        // cannot have.
        match next {
            Ok(grid) => self.grid = grid,
            Err(_) => unreachable!("next generation shares the current grid's shape"),
        }
        self.generation += 1;
        &self.grid
    }
}
