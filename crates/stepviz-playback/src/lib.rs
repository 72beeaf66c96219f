//! stepviz-playback — a cursor over a finished trace.
//!
//! The player owns an immutable trace and a cursor; it never mutates steps,
//! only indexes into them. Timing is the caller's concern: whatever drives
//! the animation calls [`Player::tick`] at its chosen cadence and the
//! player advances (or refuses to, at the last index). Every cursor move is
//! O(1), so there is no in-flight work to cancel — stopping the driver is
//! the whole cancellation story.
//!
//! An empty trace is a valid, displayable-as-nothing state: accessors
//! report zero steps and no operation panics.

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![warn(missing_docs, clippy::all, clippy::unwrap_used, clippy::expect_used)]

use stepviz_core::{Step, Trace};

/// Minimum tick interval accepted by [`Player::set_speed_ms`].
pub const MIN_SPEED_MS: u64 = 50;

/// Default tick interval for a fresh player.
pub const DEFAULT_SPEED_MS: u64 = 1000;

/// Read-only playback cursor over a finished trace.
#[derive(Clone, Debug)]
pub struct Player<P> {
    trace: Trace<P>,
    cursor: usize,
    playing: bool,
    speed_ms: u64,
}

impl<P> Player<P> {
    /// Wrap a finished trace, parked at step 0.
    #[must_use]
    pub fn new(trace: Trace<P>) -> Self {
        Self { trace, cursor: 0, playing: false, speed_ms: DEFAULT_SPEED_MS }
    }

    /// Current cursor position (0 for an empty trace).
    #[inline]
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.cursor
    }

    /// Total number of steps.
    #[inline]
    #[must_use]
    pub fn total_steps(&self) -> usize {
        self.trace.len()
    }

    /// Whether auto-advance is active.
    #[inline]
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Configured tick interval in milliseconds.
    #[inline]
    #[must_use]
    pub fn speed_ms(&self) -> u64 {
        self.speed_ms
    }

    /// The step under the cursor, `None` for an empty trace.
    #[inline]
    #[must_use]
    pub fn current_step(&self) -> Option<&Step<P>> {
        self.trace.get(self.cursor)
    }

    /// Borrow the whole trace (read-only).
    #[inline]
    #[must_use]
    pub fn trace(&self) -> &Trace<P> {
        &self.trace
    }

    /// Start auto-advancing. Restarts from step 0 when already parked at
    /// the last index. No-op for an empty trace.
    pub fn play(&mut self) {
        if self.trace.is_empty() {
            return;
        }
        if self.cursor >= self.trace.len() - 1 {
            self.cursor = 0;
        }
        self.playing = true;
    }

    /// Stop auto-advancing; the cursor stays put.
    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// Stop and rewind to step 0.
    pub fn reset(&mut self) {
        self.playing = false;
        self.cursor = 0;
    }

    /// Manual single step forward; pauses playback.
    pub fn next(&mut self) {
        self.playing = false;
        if self.cursor + 1 < self.trace.len() {
            self.cursor += 1;
        }
    }

    /// Manual single step backward; pauses playback.
    pub fn previous(&mut self) {
        self.playing = false;
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// Jump to `index`, clamped to `[0, len-1]`.
    pub fn seek(&mut self, index: usize) {
        self.cursor = index.min(self.trace.len().saturating_sub(1));
    }

    /// Set the tick interval, floored at [`MIN_SPEED_MS`].
    pub fn set_speed_ms(&mut self, ms: u64) {
        self.speed_ms = ms.max(MIN_SPEED_MS);
    }

    /// One timer callback: advance the cursor if playing. Returns whether
    /// the cursor moved. Reaching the last index stops playback, so a
    /// driver can keep ticking without overshooting.
    pub fn tick(&mut self) -> bool {
        if !self.playing {
            return false;
        }
        if self.cursor + 1 >= self.trace.len() {
            self.playing = false;
            return false;
        }
        self.cursor += 1;
        if self.cursor + 1 == self.trace.len() {
            self.playing = false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stepviz_core::StepMeta;

    fn player_with(n: usize) -> Player<u32> {
        let trace = (0..n)
            .map(|i| Step::new(i as u32, StepMeta::describe(format!("step {i}"))))
            .collect();
        Player::new(trace)
    }

    #[test]
    fn empty_trace_is_inert() {
        let mut p = player_with(0);
        assert_eq!(p.total_steps(), 0);
        assert!(p.current_step().is_none());
        p.play();
        assert!(!p.is_playing());
        assert!(!p.tick());
        p.seek(10);
        assert_eq!(p.current_index(), 0);
    }

    #[test]
    fn tick_advances_until_the_last_index() {
        let mut p = player_with(3);
        p.play();
        assert!(p.tick());
        assert_eq!(p.current_index(), 1);
        assert!(p.tick());
        assert_eq!(p.current_index(), 2);
        // Reaching the end stopped playback.
        assert!(!p.is_playing());
        assert!(!p.tick());
        assert_eq!(p.current_index(), 2);
    }

    #[test]
    fn play_at_the_end_restarts() {
        let mut p = player_with(2);
        p.seek(1);
        p.play();
        assert_eq!(p.current_index(), 0);
        assert!(p.is_playing());
    }

    #[test]
    fn manual_stepping_pauses_and_clamps() {
        let mut p = player_with(2);
        p.play();
        p.next();
        assert!(!p.is_playing());
        assert_eq!(p.current_index(), 1);
        p.next();
        assert_eq!(p.current_index(), 1);
        p.previous();
        assert_eq!(p.current_index(), 0);
        p.previous();
        assert_eq!(p.current_index(), 0);
    }

    #[test]
    fn seek_clamps_to_the_last_index() {
        let mut p = player_with(4);
        p.seek(99);
        assert_eq!(p.current_index(), 3);
        p.seek(1);
        assert_eq!(p.current_index(), 1);
    }

    #[test]
    fn speed_is_floored() {
        let mut p = player_with(1);
        p.set_speed_ms(10);
        assert_eq!(p.speed_ms(), MIN_SPEED_MS);
        p.set_speed_ms(400);
        assert_eq!(p.speed_ms(), 400);
    }
}
