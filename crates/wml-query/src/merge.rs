//! Batched k-way merge of per-source entry lists.
//!
//! Every input list is already time-ordered, so the merge never compares
//! entries within a list. Each round sorts the set of list heads, takes the
//! list with the earliest head as the winner, and emits the winner's run:
//! the head itself, then every following entry strictly earlier than the
//! runner-up's head. Emitting runs instead of single entries amortises the
//! head-set sorting across consecutive entries from the same source.

use chrono::NaiveDateTime;

use wml_core::LogEntry;

/// Merge time-ordered lists into one time-ordered list of at most `limit`
/// entries.
///
/// Ties across lists resolve by input position, so the output is
/// deterministic for a fixed input order.
pub fn merge_by_timestamp(lists: Vec<Vec<LogEntry>>, limit: usize) -> Vec<LogEntry> {
    let mut active: Vec<Run> = lists.into_iter().filter_map(Run::new).collect();
    let mut merged = Vec::new();

    while merged.len() < limit && !active.is_empty() {
        // Stable sort, so equal heads keep their current order.
        active.sort_by_key(Run::head_ts);
        let bound = active.get(1).and_then(Run::head_ts);

        let winner = &mut active[0];
        winner.emit_run(&mut merged, bound, limit);
        if winner.is_exhausted() {
            active.remove(0);
        }
    }

    merged
}

/// One list's remaining entries, stored reversed so the next entry to emit
/// is always the last element and emitting is a pop.
struct Run {
    entries: Vec<LogEntry>,
}

impl Run {
    fn new(mut entries: Vec<LogEntry>) -> Option<Run> {
        if entries.is_empty() {
            return None;
        }
        entries.reverse();
        Some(Run { entries })
    }

    fn head_ts(&self) -> Option<NaiveDateTime> {
        self.entries.last().map(|entry| entry.ts)
    }

    fn is_exhausted(&self) -> bool {
        self.entries.is_empty()
    }

    /// Emit the head, then keep emitting while the next entry is strictly
    /// earlier than `bound`. The head goes out unconditionally: the caller
    /// sorted it to the front, so it is earliest even on an exact tie with
    /// the runner-up, and emitting it guarantees the merge makes progress.
    fn emit_run(&mut self, out: &mut Vec<LogEntry>, bound: Option<NaiveDateTime>, limit: usize) {
        if let Some(head) = self.entries.pop() {
            out.push(head);
        }
        while out.len() < limit && self.next_is_before(bound) {
            if let Some(entry) = self.entries.pop() {
                out.push(entry);
            }
        }
    }

    fn next_is_before(&self, bound: Option<NaiveDateTime>) -> bool {
        match (self.entries.last(), bound) {
            (Some(next), Some(bound)) => next.ts < bound,
            (Some(_), None) => true,
            (None, _) => false,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
