//! Conway's transition rule (B3/S23).

/// Next state of a cell given its current state and the number of live
/// Moore neighbors observed this round.
///
/// - Alive with 2 or 3 live neighbors survives.
/// - Dead with exactly 3 live neighbors is born.
/// - Everything else is dead next round.
pub fn next_state(alive: bool, live_neighbours: usize) -> bool {
    matches!((alive, live_neighbours), (true, 2) | (true, 3) | (false, 3))
}
