//! Timed, staggered reveal of a submitted row
//!
//! Each submitted row becomes a batch of timestamped steps on a shared timer
//! queue. Steps fire in (time, insertion) order as the virtual clock advances.
//! Every step carries the generation of the game that scheduled it, so a
//! reset can invalidate whatever is still queued without draining it.

use super::config::RevealTiming;
use crate::core::{Color, Pattern};
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Game generation a reveal belongs to (bumped on every reset)
pub type Generation = u64;

/// What happens at a scheduled instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealStep {
    /// Outbound half of the flip begins; no color yet
    FlipStarted { col: usize },
    /// Color is assigned and the pop emphasis starts
    Colored { col: usize, color: Color },
    /// Pop emphasis ends
    PopCleared { col: usize },
    /// Tile has finished its full flip
    TileDone { col: usize },
    /// Every tile is final and the settle buffer has elapsed
    RowComplete,
}

/// A fired reveal step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealEvent {
    pub generation: Generation,
    pub row: usize,
    pub at_ms: u64,
    pub step: RevealStep,
}

/// Per-tile schedule handed to the presentation layer at submit time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileReveal {
    pub row: usize,
    pub col: usize,
    /// Delay from submit until this tile starts flipping
    pub delay_ms: u64,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Scheduled {
    seq: u64,
    event: RevealEvent,
}

impl Ord for Scheduled {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.event.at_ms, self.seq).cmp(&(other.event.at_ms, other.seq))
    }
}

impl PartialOrd for Scheduled {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Timer queue for row reveals
#[derive(Debug, Clone, Default)]
pub struct RevealSequencer {
    timing: RevealTiming,
    queue: BinaryHeap<Reverse<Scheduled>>,
    next_seq: u64,
}

impl RevealSequencer {
    #[must_use]
    pub fn new(timing: RevealTiming) -> Self {
        Self {
            timing,
            queue: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    /// Queue the reveal of `row`, starting at `now_ms`
    ///
    /// Tile `c` starts flipping at `now + c × stagger`, takes its color half a
    /// flip later and finishes a full flip after its start. A single
    /// `RowComplete` step follows the latest tile step by the settle buffer.
    /// Timestamps saturate at `u64::MAX`.
    pub fn schedule_row(
        &mut self,
        generation: Generation,
        row: usize,
        pattern: &Pattern,
        now_ms: u64,
    ) -> Vec<TileReveal> {
        let timing = self.timing;
        let mut tiles = Vec::with_capacity(pattern.len());

        for (col, &color) in pattern.colors().iter().enumerate() {
            let delay_ms = timing.tile_delay_ms(col);
            let start = now_ms.saturating_add(delay_ms);
            let colored = start.saturating_add(timing.flip_half_ms());
            let pop_cleared = colored.saturating_add(timing.pop_ms);
            let done = start.saturating_add(timing.flip_ms);

            self.push(generation, row, start, RevealStep::FlipStarted { col });
            self.push(generation, row, colored, RevealStep::Colored { col, color });
            self.push(generation, row, pop_cleared, RevealStep::PopCleared { col });
            self.push(generation, row, done, RevealStep::TileDone { col });

            tiles.push(TileReveal {
                row,
                col,
                delay_ms,
                color,
            });
        }

        let complete_at = now_ms.saturating_add(timing.row_duration_ms(pattern.len()));
        self.push(generation, row, complete_at, RevealStep::RowComplete);
        tiles
    }

    fn push(&mut self, generation: Generation, row: usize, at_ms: u64, step: RevealStep) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.queue.push(Reverse(Scheduled {
            seq,
            event: RevealEvent {
                generation,
                row,
                at_ms,
                step,
            },
        }));
    }

    /// Pop the earliest step due at or before `now_ms`
    pub fn pop_due(&mut self, now_ms: u64) -> Option<RevealEvent> {
        if self.next_due_ms()? > now_ms {
            return None;
        }
        self.queue.pop().map(|Reverse(scheduled)| scheduled.event)
    }

    /// Timestamp of the earliest queued step
    #[must_use]
    pub fn next_due_ms(&self) -> Option<u64> {
        self.queue.peek().map(|Reverse(scheduled)| scheduled.event.at_ms)
    }

    /// Timestamp of the last queued step belonging to `generation`
    #[must_use]
    pub fn last_due_ms(&self, generation: Generation) -> Option<u64> {
        self.queue
            .iter()
            .filter(|Reverse(s)| s.event.generation == generation)
            .map(|Reverse(s)| s.event.at_ms)
            .max()
    }

    /// Number of queued steps, stale ones included
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.len()
    }
}
