use serde::{Deserialize, Serialize};

/// Birth/survival thresholds on the live-neighbor count.
///
/// A dead cell with exactly `birth` live neighbors is born; a live cell
/// outside `[survive_min, survive_max]` dies; everything else keeps its
/// state. The default is classic Life, B3/S23.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub birth: u8,
    pub survive_min: u8,
    pub survive_max: u8,
}

impl Default for Rule {
    fn default() -> Self {
        Self::LIFE
    }
}

impl Rule {
    /// Classic Conway Life.
    pub const LIFE: Rule = Rule {
        birth: 3,
        survive_min: 2,
        survive_max: 3,
    };

    /// Settles into maze-like corridors.
    pub const LABYRINTH: Rule = Rule {
        birth: 2,
        survive_min: 0,
        survive_max: 3,
    };

    /// Wider corridors than `LABYRINTH`.
    pub const LONG_CORRIDORS: Rule = Rule {
        birth: 4,
        survive_min: 0,
        survive_max: 4,
    };

    /// Next state for a cell with the given current state and number
    /// of distinct live neighbors.
    pub fn next_state(&self, alive: bool, live_neighbors: u8) -> bool {
        if alive {
            live_neighbors >= self.survive_min && live_neighbors <= self.survive_max
        } else {
            live_neighbors == self.birth
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_classic_life() {
        assert_eq!(Rule::default(), Rule::LIFE);
    }

    #[test]
    fn test_dead_cell_born_only_at_birth_count() {
        let rule = Rule::default();
        for n in 0..=8u8 {
            assert_eq!(rule.next_state(false, n), n == 3, "count {n}");
        }
    }

    #[test]
    fn test_labyrinth_never_dies_of_isolation() {
        assert!(Rule::LABYRINTH.next_state(true, 0));
        assert!(Rule::LABYRINTH.next_state(false, 2), "born at two");
        assert!(!Rule::LABYRINTH.next_state(true, 4), "dies of crowding");
        assert!(Rule::LONG_CORRIDORS.next_state(false, 4));
    }

    #[test]
    fn test_live_cell_survival_band() {
        let rule = Rule::default();
        assert!(!rule.next_state(true, 0), "isolation");
        assert!(!rule.next_state(true, 1), "isolation");
        assert!(rule.next_state(true, 2));
        assert!(rule.next_state(true, 3));
        assert!(!rule.next_state(true, 4), "overcrowding");
        assert!(!rule.next_state(true, 8), "overcrowding");
    }
}
