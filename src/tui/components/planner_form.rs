//! # Planner Component
//!
//! Form for requesting a trip plan: destination, length, budget tier.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `PlannerState` lives in `TuiState`
//! - `PlannerForm` is created each frame with borrowed state
//!
//! ## Planning sessions
//!
//! A session starts each time the planner tab is entered. Within a session
//! at most one request is in flight and at most one completion is accepted;
//! a completion tagged with an older session is dropped.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph};

use crate::i18n::{Direction, Translate};
use crate::planner::destinations::CATALOG;
use crate::planner::{BudgetTier, MAX_TRIP_DAYS, PlanError, PlanRequest};
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::{BRAND, start_alignment};
use crate::tui::event::TuiEvent;

const SPINNER: [&str; 4] = ["◐", "◓", "◑", "◒"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Destination,
    Days,
    Budget,
    Generate,
}

impl Field {
    const ORDER: [Field; 4] = [Field::Destination, Field::Days, Field::Budget, Field::Generate];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    fn up(self) -> Field {
        Self::ORDER[self.index().saturating_sub(1)]
    }

    fn down(self) -> Field {
        Self::ORDER[(self.index() + 1).min(Self::ORDER.len() - 1)]
    }
}

/// Events emitted by the planner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlannerEvent {
    /// Start generating a plan for this request.
    Generate { session: u64, request: PlanRequest },
}

/// Persistent state for the planner form.
#[derive(Debug)]
pub struct PlannerState {
    /// Index into the destination catalog.
    pub destination: usize,
    pub days: u8,
    pub budget: BudgetTier,
    pub focus: Field,
    /// Prop synced from the language context every frame.
    pub direction: Direction,
    in_flight: bool,
    error: Option<String>,
    session: u64,
}

impl PlannerState {
    pub fn new(default_days: u8, default_budget: BudgetTier) -> Self {
        Self {
            destination: 0,
            days: default_days.clamp(1, MAX_TRIP_DAYS),
            budget: default_budget,
            focus: Field::Destination,
            direction: Direction::Ltr,
            in_flight: false,
            error: None,
            session: 0,
        }
    }

    pub fn request(&self) -> PlanRequest {
        PlanRequest {
            destination: CATALOG
                .get(self.destination)
                .map(|d| d.name.to_string())
                .unwrap_or_default(),
            days: self.days,
            budget: self.budget,
        }
    }

    pub fn session(&self) -> u64 {
        self.session
    }

    pub fn is_generating(&self) -> bool {
        self.in_flight
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Start a new planning session. Anything still in flight from the
    /// previous one will be ignored when it lands.
    pub fn begin_session(&mut self) {
        self.session += 1;
        self.in_flight = false;
        self.error = None;
        log::debug!("Planner session {} started", self.session);
    }

    /// Accept a completion. Returns false for stale or duplicate completions.
    pub fn complete(&mut self, session: u64) -> bool {
        if session != self.session || !self.in_flight {
            log::warn!(
                "Dropping planner completion for session {} (current {}, in_flight={})",
                session,
                self.session,
                self.in_flight
            );
            return false;
        }
        self.in_flight = false;
        true
    }

    /// Record a failed generation for the current session.
    pub fn fail(&mut self, session: u64, error: &PlanError) {
        if session != self.session {
            return;
        }
        self.in_flight = false;
        self.error = Some(error.to_string());
    }

    fn adjust(&mut self, forward: bool) {
        match self.focus {
            Field::Destination => {
                let len = CATALOG.len();
                self.destination = if forward {
                    (self.destination + 1) % len
                } else {
                    (self.destination + len - 1) % len
                };
            }
            Field::Days => {
                self.days = if forward {
                    (self.days + 1).min(MAX_TRIP_DAYS)
                } else {
                    self.days.saturating_sub(1).max(1)
                };
            }
            Field::Budget => {
                self.budget = if forward {
                    self.budget.next()
                } else {
                    self.budget.prev()
                };
            }
            Field::Generate => {}
        }
    }
}

impl EventHandler for PlannerState {
    type Event = PlannerEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        // "Forward" is toward the trailing edge
        let (forward_key, back_key) = if self.direction.is_rtl() {
            (TuiEvent::CursorLeft, TuiEvent::CursorRight)
        } else {
            (TuiEvent::CursorRight, TuiEvent::CursorLeft)
        };

        match event {
            TuiEvent::CursorUp => {
                self.focus = self.focus.up();
                None
            }
            TuiEvent::CursorDown => {
                self.focus = self.focus.down();
                None
            }
            e if *e == forward_key && !self.in_flight => {
                self.adjust(true);
                None
            }
            e if *e == back_key && !self.in_flight => {
                self.adjust(false);
                None
            }
            TuiEvent::Submit => {
                if self.in_flight {
                    return None;
                }
                self.in_flight = true;
                self.error = None;
                Some(PlannerEvent::Generate {
                    session: self.session,
                    request: self.request(),
                })
            }
            _ => None,
        }
    }
}

/// Transient render wrapper for the planner form.
pub struct PlannerForm<'a> {
    state: &'a PlannerState,
    t: &'a dyn Translate,
    spinner_frame: usize,
}

impl<'a> PlannerForm<'a> {
    pub fn new(state: &'a PlannerState, t: &'a dyn Translate, spinner_frame: usize) -> Self {
        Self {
            state,
            t,
            spinner_frame,
        }
    }

    fn field_line(&self, field: Field, label: &str, value: String) -> Line<'static> {
        let focused = self.state.focus == field;
        let marker = if focused { "›" } else { " " };
        let value_style = if focused {
            Style::default().fg(Color::White).bg(BRAND).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let label = Span::styled(format!("{label}: "), Style::default().add_modifier(Modifier::BOLD));
        let value = Span::styled(format!("◀ {value} ▶"), value_style);
        if self.t.is_rtl() {
            Line::from(vec![value, Span::raw(" "), label, Span::raw(marker)])
        } else {
            Line::from(vec![Span::raw(marker), label, Span::raw(" "), value])
        }
    }

    fn status_line(&self) -> Line<'static> {
        if self.state.is_generating() {
            let spin = SPINNER[self.spinner_frame % SPINNER.len()];
            Line::from(Span::styled(
                format!("{spin} {}", self.t.t("plannerGenerating")),
                Style::default().fg(Color::Yellow),
            ))
        } else if let Some(err) = self.state.error() {
            Line::from(Span::styled(
                format!("{}: {err}", self.t.t("plannerFailed")),
                Style::default().fg(Color::Red),
            ))
        } else {
            Line::default()
        }
    }
}

impl Component for PlannerForm<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let t = self.t;
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!(" {} ", t.t("plannerTitle")))
            .title_bottom(Line::from(format!(" {} ", t.t("plannerHint"))).centered())
            .padding(Padding::uniform(1));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let request = self.state.request();
        let budget_label = t.t(self.state.budget.label_key()).into_owned();

        let generate_style = if self.state.focus == Field::Generate {
            Style::default().fg(Color::White).bg(BRAND).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(BRAND).add_modifier(Modifier::BOLD)
        };

        let lines = vec![
            self.field_line(Field::Destination, &t.t("plannerDestination"), request.destination),
            Line::default(),
            self.field_line(Field::Days, &t.t("plannerDays"), request.days.to_string()),
            Line::default(),
            self.field_line(Field::Budget, &t.t("plannerBudget"), budget_label),
            Line::default(),
            Line::from(Span::styled(format!("[ {} ]", t.t("plannerGenerate")), generate_style)),
            Line::default(),
            self.status_line(),
        ];

        frame.render_widget(
            Paragraph::new(lines).alignment(start_alignment(t.direction())),
            inner,
        );
    }
}
