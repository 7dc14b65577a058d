use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Boundary policy for neighbor lookup.
///
/// `Bounded` treats the grid as a finite plane: coordinates past an
/// edge simply do not exist, so corner cells have 3 neighbors and edge
/// cells 5. `Toroidal` wraps each axis independently, so every cell in
/// a grid of at least 3x3 has exactly 8 neighbors regardless of
/// position.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Topology {
    Bounded,
    #[default]
    Toroidal,
}

/// The 8 offsets of the Moore neighborhood.
const OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

impl Topology {
    /// Enumerates the distinct neighbor coordinates of `pos` in a
    /// `shape` grid.
    ///
    /// Under `Toroidal`, wrapping is per-axis: a coordinate may wrap on
    /// one axis while the other stays in range. Grids narrower than 3
    /// on an axis make several offsets land on the same cell; those
    /// collapse to a single entry. On 1-wide or 1-tall grids the wrap
    /// can land back on `pos` itself, so a cell may appear as its own
    /// neighbor; that is accepted behavior, not special-cased.
    pub fn neighbors(
        &self,
        pos: (usize, usize),
        shape: (usize, usize),
    ) -> Vec<(usize, usize)> {
        let (row, col) = (pos.0 as i64, pos.1 as i64);
        let (rows, cols) = (shape.0 as i64, shape.1 as i64);

        let mut out: Vec<(usize, usize)> = Vec::with_capacity(8);
        for (dr, dc) in OFFSETS {
            let (r, c) = (row + dr, col + dc);
            let coord = match self {
                Topology::Bounded => {
                    if r < 0 || r >= rows || c < 0 || c >= cols {
                        continue;
                    }
                    (r as usize, c as usize)
                }
                Topology::Toroidal => {
                    (r.rem_euclid(rows) as usize, c.rem_euclid(cols) as usize)
                }
            };
            if !out.contains(&coord) {
                out.push(coord);
            }
        }
        out
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Topology::Bounded => write!(f, "bounded"),
            Topology::Toroidal => write!(f, "toroidal"),
        }
    }
}

impl FromStr for Topology {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bounded" | "plane" => Ok(Topology::Bounded),
            "toroidal" | "torus" | "sphere" => Ok(Topology::Toroidal),
            other => Err(format!("unknown topology '{other}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_bounded_corner_has_three_neighbors() {
        let n = Topology::Bounded.neighbors((0, 0), (4, 4));
        let set: HashSet<_> = n.into_iter().collect();
        assert_eq!(set, HashSet::from([(0, 1), (1, 0), (1, 1)]));
    }

    #[test]
    fn test_bounded_edge_has_five_neighbors() {
        let n = Topology::Bounded.neighbors((0, 2), (4, 4));
        assert_eq!(n.len(), 5);
    }

    #[test]
    fn test_bounded_interior_has_eight_neighbors() {
        let n = Topology::Bounded.neighbors((2, 2), (4, 4));
        assert_eq!(n.len(), 8);
    }

    #[test]
    fn test_toroidal_always_eight_from_3x3_up() {
        for pos in [(0, 0), (0, 2), (3, 0), (2, 2), (3, 3)] {
            let n = Topology::Toroidal.neighbors(pos, (4, 4));
            assert_eq!(n.len(), 8, "at {pos:?}");
        }
        for pos in [(0, 0), (1, 1), (2, 0)] {
            let n = Topology::Toroidal.neighbors(pos, (3, 3));
            assert_eq!(n.len(), 8, "at {pos:?}");
        }
    }

    #[test]
    fn test_toroidal_corner_wraps_per_axis() {
        let n = Topology::Toroidal.neighbors((0, 0), (5, 7));
        let set: HashSet<_> = n.into_iter().collect();
        // Upper-left corner: row -1 wraps to 4, col -1 wraps to 6,
        // each independently of the other.
        assert_eq!(
            set,
            HashSet::from([
                (4, 6),
                (4, 0),
                (4, 1),
                (0, 6),
                (0, 1),
                (1, 6),
                (1, 0),
                (1, 1),
            ])
        );
    }

    #[test]
    fn test_toroidal_2x2_collapses_to_other_three_cells() {
        let n = Topology::Toroidal.neighbors((1, 1), (2, 2));
        let set: HashSet<_> = n.iter().copied().collect();
        assert_eq!(n.len(), 3);
        assert_eq!(set, HashSet::from([(0, 0), (0, 1), (1, 0)]));
    }

    #[test]
    fn test_toroidal_self_neighbor_on_single_row() {
        // Accepted degenerate case: on a 1-tall grid the vertical wrap
        // lands back on the cell's own row, so the cell counts itself.
        let n = Topology::Toroidal.neighbors((0, 1), (1, 3));
        assert!(n.contains(&(0, 1)));
        assert_eq!(n.len(), 3);
    }

    #[test]
    fn test_bounded_single_cell_has_no_neighbors() {
        assert!(Topology::Bounded.neighbors((0, 0), (1, 1)).is_empty());
    }

    #[test]
    fn test_from_str_aliases() {
        assert_eq!("plane".parse::<Topology>().unwrap(), Topology::Bounded);
        assert_eq!("Torus".parse::<Topology>().unwrap(), Topology::Toroidal);
        assert!("klein".parse::<Topology>().is_err());
    }
}
