//! The per-cell execution unit and its round protocol.

use crossbeam_channel::{Receiver, Sender};
use meshlife_core::rule;

/// One cell's share of the mesh, moved into its own thread for the
/// duration of a run.
///
/// A unit owns its alive state and one channel pair per neighbor: a
/// sender on the outbound link and a receiver on the inbound link. Moore
/// adjacency is symmetric, so `inboxes` and `outbound` always have the
/// same length — the cell's degree.
pub(crate) struct CellUnit {
    /// Flat index of this cell in the field.
    pub index: usize,
    /// Current alive state, seeded from the field.
    pub alive: bool,
    /// Rounds completed; starts at 0 after topology rebuild.
    pub round: u64,
    /// One receiver per inbound link, in the neighbor's adjacency order.
    pub inboxes: Vec<Receiver<bool>>,
    /// One sender per outbound link, in adjacency order.
    pub outbound: Vec<Sender<bool>>,
}

/// Completion signal emitted by a unit when it reaches Done.
///
/// Carries the unit's final state so the barrier doubles as the write-back
/// path: the orchestrator applies reports to the field after collecting
/// all of them.
pub(crate) struct UnitReport {
    pub index: usize,
    pub alive: bool,
    pub round: u64,
}

impl CellUnit {
    /// Run the four-step round cycle `rounds` times, then signal completion.
    ///
    /// Per round: broadcast the current state on every outbound link,
    /// collect exactly one message from every inbound link, apply the
    /// Conway rule to the collected snapshot, advance the round counter.
    /// Receiving once per link per round is what pins each collected
    /// message to the current round — link channels are FIFO and every
    /// neighbor sends exactly one message per round, so the n-th receive
    /// on a link is always the neighbor's round-n broadcast.
    ///
    /// A send or receive can only fail if a peer disappeared mid-run (a
    /// panicked unit); the unit then exits without reporting, which
    /// cascades the shutdown through the mesh instead of deadlocking it.
    pub fn run(mut self, rounds: u64, done: Sender<UnitReport>) {
        for _ in 0..rounds {
            for link in &self.outbound {
                if link.send(self.alive).is_err() {
                    return;
                }
            }
            let mut live = 0;
            for inbox in &self.inboxes {
                match inbox.recv() {
                    Ok(true) => live += 1,
                    Ok(false) => {}
                    Err(_) => return,
                }
            }
            self.alive = rule::next_state(self.alive, live);
            self.round += 1;
        }
        // Best-effort: the orchestrator may already be unwinding.
        let _ = done.send(UnitReport {
            index: self.index,
            alive: self.alive,
            round: self.round,
        });
    }
}
