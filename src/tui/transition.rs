//! # Screen Transitions
//!
//! Slide-and-fade between screens, keyed by tab. When the key changes the
//! previous screen slides out toward the leading edge, then the new one
//! slides in from the trailing edge. Both phases dim the content, the
//! terminal stand-in for an opacity fade.
//!
//! ```text
//!            exit (d)                 enter (d)
//! LTR   old: 0 → -OFFSET        new: +OFFSET → 0
//! RTL   old: 0 → +OFFSET        new: -OFFSET → 0
//! ```
//!
//! The navigation state has already changed by the time a transition
//! starts. This module only post-processes the frame buffer and never
//! produces actions, so input is never blocked by an animation.
//!
//! The outgoing screen is drawn from a snapshot of its last rendered cells,
//! since its state (e.g. a discarded plan) may already be gone.

use std::time::{Duration, Instant};

use ratatui::buffer::{Buffer, Cell};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use crate::core::tab::Tab;
use crate::i18n::Direction;

/// Horizontal slide distance, in columns.
pub const SLIDE_OFFSET: i16 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Exiting,
    Entering,
}

/// What to do with the current frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionFrame {
    pub phase: Phase,
    /// Columns to shift the content by (positive = right).
    pub offset: i16,
    pub dim: bool,
}

impl TransitionFrame {
    const SETTLED: TransitionFrame = TransitionFrame {
        phase: Phase::Idle,
        offset: 0,
        dim: false,
    };
}

/// Cells of a previously rendered content area.
#[derive(Debug, Clone)]
struct Snapshot {
    area: Rect,
    cells: Vec<Cell>,
}

#[derive(Debug)]
pub struct Transition {
    enabled: bool,
    /// Length of each phase.
    duration: Duration,
    key: Option<Tab>,
    started: Option<Instant>,
    /// Whether the running transition has an exit phase.
    has_exit: bool,
    snapshot: Option<Snapshot>,
}

impl Transition {
    pub fn new(duration: Duration, enabled: bool) -> Self {
        Self {
            enabled,
            duration,
            key: None,
            started: None,
            has_exit: false,
            snapshot: None,
        }
    }

    /// Record the key for this frame and report where the animation is.
    /// A new key restarts the animation; the same key never does.
    pub fn observe(&mut self, key: Tab, direction: Direction, now: Instant) -> TransitionFrame {
        if self.key != Some(key) {
            log::debug!("Transition {:?} -> {:?}", self.key, key);
            self.has_exit = self.key.is_some() && self.snapshot.is_some();
            self.key = Some(key);
            self.started = Some(now);
        }
        self.frame_at(direction, now)
    }

    fn frame_at(&self, direction: Direction, now: Instant) -> TransitionFrame {
        let started = match self.started {
            Some(started) if self.enabled && !self.duration.is_zero() => started,
            _ => return TransitionFrame::SETTLED,
        };

        let elapsed = now.saturating_duration_since(started);
        let enter_start = if self.has_exit { self.duration } else { Duration::ZERO };

        if elapsed < enter_start {
            let progress = elapsed.as_secs_f32() / self.duration.as_secs_f32();
            TransitionFrame {
                phase: Phase::Exiting,
                offset: scale(exit_offset(direction), progress),
                dim: true,
            }
        } else if elapsed < enter_start + self.duration {
            let progress = (elapsed - enter_start).as_secs_f32() / self.duration.as_secs_f32();
            TransitionFrame {
                phase: Phase::Entering,
                offset: scale(enter_offset(direction), 1.0 - progress),
                dim: true,
            }
        } else {
            TransitionFrame::SETTLED
        }
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.frame_at(Direction::Ltr, now).phase != Phase::Idle
    }

    /// Remember the un-shifted content of the current screen so it can be
    /// slid out when the key changes.
    pub fn capture(&mut self, buf: &Buffer, area: Rect) {
        let cells = area
            .positions()
            .map(|pos| buf.cell(pos).cloned().unwrap_or_default())
            .collect();
        self.snapshot = Some(Snapshot { area, cells });
    }

    /// Draw the outgoing screen. Returns false if there is nothing usable
    /// (no snapshot, or the terminal was resized since it was taken).
    pub fn paint_snapshot(&self, buf: &mut Buffer, area: Rect) -> bool {
        let Some(snapshot) = &self.snapshot else {
            return false;
        };
        if snapshot.area != area {
            return false;
        }
        for (pos, cell) in area.positions().zip(snapshot.cells.iter()) {
            if let Some(target) = buf.cell_mut(pos) {
                *target = cell.clone();
            }
        }
        true
    }
}

/// Where an entering screen starts: the trailing edge.
pub fn enter_offset(direction: Direction) -> i16 {
    SLIDE_OFFSET * direction.sign()
}

/// Where an exiting screen ends: the leading edge.
pub fn exit_offset(direction: Direction) -> i16 {
    -SLIDE_OFFSET * direction.sign()
}

fn scale(offset: i16, factor: f32) -> i16 {
    (f32::from(offset) * factor.clamp(0.0, 1.0)).round() as i16
}

/// Apply a frame's offset and dimming to an already rendered area.
pub fn apply(frame: TransitionFrame, buf: &mut Buffer, area: Rect) {
    if frame.offset != 0 {
        shift_region(buf, area, frame.offset);
    }
    if frame.dim {
        buf.set_style(area, Style::default().add_modifier(Modifier::DIM));
    }
}

/// Shift every row of `area` horizontally by `dx` columns. Cells pushed
/// past the edge are dropped; vacated cells are reset.
pub fn shift_region(buf: &mut Buffer, area: Rect, dx: i16) {
    let width = i32::from(area.width);
    for y in area.top()..area.bottom() {
        let row: Vec<Cell> = (area.left()..area.right())
            .map(|x| buf.cell((x, y)).cloned().unwrap_or_default())
            .collect();
        for (i, x) in (area.left()..area.right()).enumerate() {
            let src = i as i32 - i32::from(dx);
            let cell = if (0..width).contains(&src) {
                row[src as usize].clone()
            } else {
                Cell::default()
            };
            if let Some(target) = buf.cell_mut((x, y)) {
                *target = cell;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PHASE: Duration = Duration::from_millis(300);

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf.cell((x, y)).map(|c| c.symbol()).unwrap_or(" "))
            .collect()
    }

    #[test]
    fn test_offsets_follow_direction() {
        assert_eq!(enter_offset(Direction::Ltr), SLIDE_OFFSET);
        assert_eq!(enter_offset(Direction::Rtl), -SLIDE_OFFSET);
        assert_eq!(exit_offset(Direction::Ltr), -SLIDE_OFFSET);
        assert_eq!(exit_offset(Direction::Rtl), SLIDE_OFFSET);
    }

    #[test]
    fn test_first_screen_enters_without_exit() {
        let mut transition = Transition::new(PHASE, true);
        let start = Instant::now();

        let frame = transition.observe(Tab::Home, Direction::Ltr, start);
        assert_eq!(frame.phase, Phase::Entering);
        assert_eq!(frame.offset, SLIDE_OFFSET);

        let settled = transition.observe(Tab::Home, Direction::Ltr, start + PHASE);
        assert_eq!(settled, TransitionFrame::SETTLED);
    }

    #[test]
    fn test_key_change_exits_then_enters() {
        let mut transition = Transition::new(PHASE, true);
        let start = Instant::now();
        transition.observe(Tab::Home, Direction::Ltr, start);
        transition.capture(&Buffer::empty(Rect::new(0, 0, 4, 1)), Rect::new(0, 0, 4, 1));

        let t0 = start + PHASE * 2;
        let exiting = transition.observe(Tab::Planner, Direction::Ltr, t0);
        assert_eq!(exiting.phase, Phase::Exiting);
        assert_eq!(exiting.offset, 0);

        let late_exit = transition.observe(Tab::Planner, Direction::Ltr, t0 + PHASE - Duration::from_millis(1));
        assert_eq!(late_exit.phase, Phase::Exiting);
        assert_eq!(late_exit.offset, -SLIDE_OFFSET);

        let entering = transition.observe(Tab::Planner, Direction::Ltr, t0 + PHASE);
        assert_eq!(entering.phase, Phase::Entering);
        assert_eq!(entering.offset, SLIDE_OFFSET);

        let done = transition.observe(Tab::Planner, Direction::Ltr, t0 + PHASE * 2);
        assert_eq!(done.phase, Phase::Idle);
    }

    #[test]
    fn test_rtl_enters_from_the_left() {
        let mut transition = Transition::new(PHASE, true);
        let frame = transition.observe(Tab::Trips, Direction::Rtl, Instant::now());
        assert_eq!(frame.offset, -SLIDE_OFFSET);
    }

    #[test]
    fn test_same_key_does_not_restart() {
        let mut transition = Transition::new(PHASE, true);
        let start = Instant::now();
        transition.observe(Tab::Profile, Direction::Ltr, start);

        let later = start + PHASE * 3;
        assert_eq!(
            transition.observe(Tab::Profile, Direction::Ltr, later),
            TransitionFrame::SETTLED
        );
        assert!(!transition.is_animating(later));
    }

    #[test]
    fn test_different_key_always_restarts() {
        let mut transition = Transition::new(PHASE, true);
        let start = Instant::now();
        transition.observe(Tab::Home, Direction::Ltr, start);

        let later = start + PHASE * 3;
        transition.observe(Tab::Destinations, Direction::Ltr, later);
        assert!(transition.is_animating(later));
    }

    #[test]
    fn test_disabled_is_always_settled() {
        let mut transition = Transition::new(PHASE, false);
        let now = Instant::now();
        assert_eq!(
            transition.observe(Tab::Home, Direction::Ltr, now),
            TransitionFrame::SETTLED
        );
        assert_eq!(
            transition.observe(Tab::Trips, Direction::Rtl, now),
            TransitionFrame::SETTLED
        );
    }

    #[test]
    fn test_shift_region_right_and_left() {
        let mut buf = Buffer::with_lines(["abcdef"]);
        let area = buf.area;
        shift_region(&mut buf, area, 2);
        assert_eq!(row_text(&buf, 0), "  abcd");

        let mut buf = Buffer::with_lines(["abcdef"]);
        shift_region(&mut buf, area, -2);
        assert_eq!(row_text(&buf, 0), "cdef  ");
    }

    #[test]
    fn test_shift_region_stays_inside_area() {
        let mut buf = Buffer::with_lines(["abcdef"]);
        shift_region(&mut buf, Rect::new(1, 0, 3, 1), 1);
        assert_eq!(row_text(&buf, 0), "a bcef");
    }

    #[test]
    fn test_snapshot_round_trip_and_resize_guard() {
        let area = Rect::new(0, 0, 5, 1);
        let mut transition = Transition::new(PHASE, true);
        transition.capture(&Buffer::with_lines(["hello"]), area);

        let mut target = Buffer::empty(area);
        assert!(transition.paint_snapshot(&mut target, area));
        assert_eq!(row_text(&target, 0), "hello");

        let mut resized = Buffer::empty(Rect::new(0, 0, 6, 1));
        assert!(!transition.paint_snapshot(&mut resized, Rect::new(0, 0, 6, 1)));
    }

    #[test]
    fn test_apply_dims_content() {
        let mut buf = Buffer::with_lines(["ab"]);
        let area = buf.area;
        apply(
            TransitionFrame {
                phase: Phase::Entering,
                offset: 0,
                dim: true,
            },
            &mut buf,
            area,
        );
        let cell = buf.cell((0, 0)).unwrap();
        assert!(cell.modifier.contains(Modifier::DIM));
    }
}
