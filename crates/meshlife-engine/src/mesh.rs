//! Topology wiring, unit launch, and the completion barrier.

use std::thread;

use crossbeam_channel::{bounded, Receiver, Sender};
use meshlife_core::Field;
use meshlife_space::Adjacency;

use crate::unit::{CellUnit, UnitReport};

/// Buffer capacity of every neighbor link.
///
/// Each directed neighbor pair gets its own bounded channel, and a cell
/// collects exactly one message per inbound link per round — per-link
/// FIFO is what guarantees a cell only ever counts values its neighbors
/// broadcast in the cell's own current round, even when one side of the
/// mesh runs a round ahead of the other.
///
/// Two slots suffice for that skew: one for a previous-round message the
/// receiver has not collected yet, one for the sender's current
/// broadcast. The protocol caps skew there — a sender cannot reach round
/// k+2 before the receiver (its neighbor, by symmetry) has collected
/// round k — so broadcasts never block. A cell's total inbound buffering
/// is therefore `2 × degree`, above the one-message-per-neighbor a round
/// delivers; shrinking the buffers below one round's worth risks
/// deadlock, so the value is a required invariant, not a tunable.
pub const LINK_CAPACITY: usize = 2;

/// Advance `field` by `rounds` generations, one concurrent unit per cell.
///
/// Blocking: wires the Moore topology (one bounded channel per directed
/// neighbor link, installed from each cell's adjacency list), resets
/// round counters, launches every unit, then waits on the completion
/// barrier — exactly one report per cell — before writing the final
/// states back and returning. The field is safe to read or mutate again
/// immediately after this returns.
///
/// `rounds = 0` still rebuilds topology and resets round counters but
/// performs no state transition.
///
/// # Panics
///
/// If a cell unit panics, the panic is re-raised here after the remaining
/// units have drained out; a run either completes all requested rounds or
/// the program aborts.
pub fn run(field: &mut Field, rounds: u64) {
    // Topology rebuild: links are single-run resources, and round
    // counters restart with them.
    let adjacency = Adjacency::build(field.rows(), field.cols());
    field.reset_rounds();

    let count = field.cell_count();
    let mut outbound: Vec<Vec<Sender<bool>>> = (0..count).map(|_| Vec::new()).collect();
    let mut inboxes: Vec<Vec<Receiver<bool>>> = (0..count).map(|_| Vec::new()).collect();
    for index in 0..count {
        for &neighbour in adjacency.neighbours(index) {
            let (tx, rx) = bounded(LINK_CAPACITY);
            outbound[index].push(tx);
            inboxes[neighbour].push(rx);
        }
    }

    let seed = field.snapshot();
    let (done_tx, done_rx) = bounded::<UnitReport>(count);
    let mut handles = Vec::with_capacity(count);
    for (index, (inboxes, outbound)) in inboxes.into_iter().zip(outbound).enumerate() {
        let unit = CellUnit {
            index,
            alive: seed[index],
            round: 0,
            inboxes,
            outbound,
        };
        let done = done_tx.clone();
        handles.push(thread::spawn(move || unit.run(rounds, done)));
    }
    // Only the units may hold completion senders now; otherwise
    // disconnection would never be observable.
    drop(done_tx);

    // Completion barrier: one counted signal per cell. A disconnect means
    // a unit died without reporting; fall through and let join() surface
    // the panic.
    let mut reports = Vec::with_capacity(count);
    while reports.len() < count {
        match done_rx.recv() {
            Ok(report) => reports.push(report),
            Err(_) => break,
        }
    }

    for handle in handles {
        if let Err(panic) = handle.join() {
            std::panic::resume_unwind(panic);
        }
    }

    for report in reports {
        field.record(report.index, report.alive, report.round);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_5x5_blinker() -> Field {
        let mut field = Field::all_dead(5, 5).unwrap();
        field.set_alive(2, 1, true);
        field.set_alive(2, 2, true);
        field.set_alive(2, 3, true);
        field
    }

    #[test]
    fn zero_rounds_is_a_state_noop() {
        let mut field = field_5x5_blinker();
        let before = field.snapshot();
        run(&mut field, 0);
        assert_eq!(field.snapshot(), before);
    }

    #[test]
    fn zero_rounds_still_resets_round_counters() {
        let mut field = field_5x5_blinker();
        run(&mut field, 3);
        assert_eq!(field.round(0, 0), 3);
        run(&mut field, 0);
        assert_eq!(field.round(0, 0), 0);
    }

    #[test]
    fn every_cell_completes_the_requested_rounds() {
        let mut field = field_5x5_blinker();
        run(&mut field, 4);
        for row in 0..5 {
            for col in 0..5 {
                assert_eq!(field.round(row, col), 4);
            }
        }
    }

    #[test]
    fn single_cell_grid_runs() {
        let mut field = Field::all_dead(1, 1).unwrap();
        field.set_alive(0, 0, true);
        run(&mut field, 1);
        assert!(!field.alive(0, 0), "a cell with no neighbors dies");
        assert_eq!(field.round(0, 0), 1);
    }
}
