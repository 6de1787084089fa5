//! Conway's B3/S23 transition rule.

use std::ops::RangeInclusive;

use crate::board::TileState;

/// Neighbor count at which a dead tile comes to life.
pub const BIRTH: usize = 3;

/// Neighbor counts at which a live tile stays alive.
pub const SURVIVE: RangeInclusive<usize> = 2..=3;

/// Next state of a tile given its current state and how many of its 8 neighbors are alive.
pub fn next_tile_state(tile: TileState, alive_neighbor_count: usize) -> TileState {
    let alive = match tile {
        TileState::Alive => SURVIVE.contains(&alive_neighbor_count),
        TileState::Dead => alive_neighbor_count == BIRTH,
    };

    TileState::from(alive)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn live_tile_survives_with_two_or_three() {
        assert_eq!(next_tile_state(TileState::Alive, 2), TileState::Alive);
        assert_eq!(next_tile_state(TileState::Alive, 3), TileState::Alive);
    }

    #[test]
    fn live_tile_dies_otherwise() {
        for count in [0, 1, 4, 5, 6, 7, 8] {
            assert_eq!(next_tile_state(TileState::Alive, count), TileState::Dead, "count {count}");
        }
    }

    #[test]
    fn dead_tile_is_born_only_with_three() {
        for count in 0..=8 {
            let expected = if count == 3 {
                TileState::Alive
            } else {
                TileState::Dead
            };
            assert_eq!(next_tile_state(TileState::Dead, count), expected, "count {count}");
        }
    }
}
