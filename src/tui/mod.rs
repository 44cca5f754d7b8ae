//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the shell,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Transitioning**: draws every ~16ms while a screen slides in or out.
//! - **Generating**: draws every ~80ms to keep the planner spinner moving.
//! - **Idle**: sleeps up to 500ms, only redraws on events or terminal resize.
//!
//! When an animation ends one more frame is drawn, so the screen never
//! rests on a shifted or dimmed frame.
//!
//! ## Planning Sessions
//!
//! Plan generation runs on a tokio task and reports back over a std mpsc
//! channel. Each outcome carries the session it was started in; the planner
//! accepts at most one completion per session, and entering the planner tab
//! starts a new session.

mod component;
mod components;
mod event;
mod transition;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::cursor::Hide;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::layout::Rect;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::screen::{Screen, resolve_screen};
use crate::core::state::App;
use crate::core::tab::Tab;
use crate::i18n::{LanguageContext, Translate};
use crate::planner::{PlanError, PlanGenerator, PlanRequest, TemplatePlanner, TripPlan};
use crate::tui::component::EventHandler;
use crate::tui::components::{
    EmptyStateEvent, NavBar, NavEvent, PlannerEvent, PlannerState, TripDetailsEvent,
    TripDetailsState, TripsEmptyState,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::transition::Transition;
use crate::tui::ui::ClickTarget;

/// TUI-specific presentation state (not part of the navigation core)
pub struct TuiState {
    pub language: LanguageContext,
    // Persistent component states
    pub planner: PlannerState,
    pub trip_details: TripDetailsState,
    // Animation state
    pub transition: Transition,
    pub budget_total_sar: u32,
}

impl TuiState {
    pub fn new(config: &ResolvedConfig) -> Self {
        Self {
            language: LanguageContext::new(config.language),
            planner: PlannerState::new(config.default_days, config.default_budget),
            trip_details: TripDetailsState::new(),
            transition: Transition::new(config.transition, config.animations),
            budget_total_sar: config.budget_total_sar,
        }
    }
}

/// Result of a background generation, tagged with its planning session.
#[derive(Debug)]
pub struct PlannerOutcome {
    pub session: u64,
    pub result: Result<TripPlan, PlanError>,
}

/// What an input event asks the loop to do.
#[derive(Debug, PartialEq)]
enum Command {
    Dispatch(Action<TripPlan>),
    ToggleLanguage,
    Generate { session: u64, request: PlanRequest },
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, Hide)?;
        info!("Terminal modes enabled (mouse)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

/// Build the plan generator used by the planner screen.
pub fn build_generator(config: &ResolvedConfig) -> Arc<dyn PlanGenerator> {
    Arc::new(TemplatePlanner::new(config.planner_latency))
}

/// Map one input event to a command, given what is on screen.
/// Component-local state (form fields, scroll position) is updated in place.
fn route_event(
    event: &TuiEvent,
    app: &App<TripPlan>,
    tui: &mut TuiState,
    frame_area: Rect,
) -> Option<Command> {
    match event {
        TuiEvent::ForceQuit | TuiEvent::Quit => return Some(Command::Dispatch(Action::Quit)),
        TuiEvent::ToggleLanguage => return Some(Command::ToggleLanguage),
        TuiEvent::Resize => return None,
        TuiEvent::MouseClick(column, row) => {
            let screen = resolve_screen(app);
            let target = ui::hit_test(
                *column,
                *row,
                frame_area,
                &screen,
                &tui.language,
                tui.language.language(),
            )?;
            return Some(match target {
                ClickTarget::LanguageToggle => Command::ToggleLanguage,
                ClickTarget::Nav(tab) => Command::Dispatch(Action::SelectTab(tab)),
                ClickTarget::PlanFirst => Command::Dispatch(Action::SelectTab(Tab::Planner)),
                ClickTarget::BackToPlanner => Command::Dispatch(Action::BackToPlanner),
            });
        }
        _ => {}
    }

    let mut nav = NavBar::new(app.active_tab(), &tui.language);
    if let Some(NavEvent::Select(tab)) = nav.handle_event(event) {
        return Some(Command::Dispatch(Action::SelectTab(tab)));
    }

    match resolve_screen(app) {
        Screen::Planner => tui
            .planner
            .handle_event(event)
            .map(|PlannerEvent::Generate { session, request }| Command::Generate { session, request }),
        Screen::TripDetails(_) => tui
            .trip_details
            .handle_event(event)
            .map(|TripDetailsEvent::Back| Command::Dispatch(Action::BackToPlanner)),
        Screen::TripsEmpty => TripsEmptyState::new(&tui.language)
            .handle_event(event)
            .map(|EmptyStateEvent::PlanFirst| Command::Dispatch(Action::SelectTab(Tab::Planner))),
        Screen::Home | Screen::Budget | Screen::Destinations => None,
    }
}

/// Apply an action through the reducer, starting a planning session when
/// the planner tab is entered.
fn apply_action(app: &mut App<TripPlan>, tui: &mut TuiState, action: Action<TripPlan>) -> Effect {
    let before = app.active_tab();
    let effect = update(app, action);
    if app.active_tab() == Tab::Planner && before != Tab::Planner {
        tui.planner.begin_session();
    }
    effect
}

/// Feed a finished generation back into the app.
fn handle_outcome(app: &mut App<TripPlan>, tui: &mut TuiState, outcome: PlannerOutcome) -> Effect {
    match outcome.result {
        Ok(plan) => {
            if tui.planner.complete(outcome.session) {
                info!("Plan {} ready for {}", plan.id, plan.destination);
                if let Ok(json) = serde_json::to_string(&plan) {
                    debug!("Plan payload: {}", json);
                }
                apply_action(app, tui, Action::PlanGenerated(plan))
            } else {
                Effect::None
            }
        }
        Err(e) => {
            warn!("Plan generation failed (session {}): {}", outcome.session, e);
            tui.planner.fail(outcome.session, &e);
            Effect::Redraw
        }
    }
}

fn spawn_generation(
    generator: &Arc<dyn PlanGenerator>,
    session: u64,
    request: PlanRequest,
    tx: &mpsc::Sender<PlannerOutcome>,
) {
    let generator = Arc::clone(generator);
    let tx = tx.clone();
    debug!(
        "Spawning {} generation for session {}: {:?}",
        generator.name(),
        session,
        request
    );
    tokio::spawn(async move {
        let result = generator.generate(request).await;
        if tx.send(PlannerOutcome { session, result }).is_err() {
            warn!("Planner outcome dropped: {}", PlanError::ChannelClosed);
        }
    });
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let generator = build_generator(&config);
    let mut app: App<TripPlan> = App::new(config.start_tab);
    let mut tui = TuiState::new(&config);
    if app.active_tab() == Tab::Planner {
        tui.planner.begin_session();
    }

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let result = event_loop(&mut terminal, &mut app, &mut tui, &generator);

    ratatui::restore();
    result
}

/// Redraw cadence. A frame is due while something animates, plus one more
/// once it stops so the settled (unshifted, undimmed) screen is drawn.
#[derive(Debug, Default)]
struct Pacing {
    was_animating: bool,
}

impl Pacing {
    fn frame_due(&self, animating: bool) -> bool {
        animating || self.was_animating
    }

    /// Record what is animating after this pass and pick the poll timeout.
    fn schedule(&mut self, transitioning: bool, generating: bool) -> Duration {
        self.was_animating = transitioning || generating;
        next_timeout(transitioning, generating)
    }
}

fn next_timeout(transitioning: bool, generating: bool) -> Duration {
    if transitioning {
        Duration::from_millis(16)
    } else if generating {
        Duration::from_millis(80)
    } else {
        Duration::from_millis(500)
    }
}

/// Draw if a frame is due, then decide how long to wait for input.
/// The transition is checked again after drawing: a tab change only starts
/// its animation inside the draw that first sees the new tab.
fn frame_tick(
    tui: &mut TuiState,
    pacing: &mut Pacing,
    needs_redraw: bool,
    now: Instant,
    mut draw: impl FnMut(&mut TuiState, Instant) -> std::io::Result<()>,
) -> std::io::Result<Duration> {
    let animating = tui.transition.is_animating(now) || tui.planner.is_generating();
    if needs_redraw || pacing.frame_due(animating) {
        draw(tui, now)?;
    }
    let transitioning = tui.transition.is_animating(now);
    Ok(pacing.schedule(transitioning, tui.planner.is_generating()))
}

fn event_loop(
    terminal: &mut ratatui::DefaultTerminal,
    app: &mut App<TripPlan>,
    tui: &mut TuiState,
    generator: &Arc<dyn PlanGenerator>,
) -> std::io::Result<()> {
    // Channel for outcomes from background generation tasks
    let (tx, rx) = mpsc::channel::<PlannerOutcome>();

    // Animation timer
    let start_time = Instant::now();
    let mut pacing = Pacing::default();
    let mut needs_redraw = true; // Force first frame

    loop {
        // Sync planner props with the language context
        tui.planner.direction = tui.language.direction();

        let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
        let view: &App<TripPlan> = app;
        let timeout = frame_tick(tui, &mut pacing, needs_redraw, Instant::now(), |tui, now| {
            terminal
                .draw(|f| ui::draw_ui(f, view, tui, now, spinner_frame))
                .map(|_| ())
        })?;
        needs_redraw = false;

        // Process first event + drain all pending events before next draw
        let mut next = poll_event_timeout(timeout)?;
        if next.is_some() {
            needs_redraw = true;
        }
        while let Some(event) = next.take() {
            let frame_area = terminal.get_frame().area();
            let effect = match route_event(&event, app, tui, frame_area) {
                Some(Command::Dispatch(action)) => {
                    debug!("Dispatching {}", action.name());
                    apply_action(app, tui, action)
                }
                Some(Command::ToggleLanguage) => {
                    tui.language.toggle();
                    info!("Language switched to {}", tui.language.language().code());
                    Effect::Redraw
                }
                Some(Command::Generate { session, request }) => {
                    spawn_generation(generator, session, request, &tx);
                    Effect::Redraw
                }
                None => Effect::None,
            };
            if effect == Effect::Quit {
                info!("Quitting");
                return Ok(());
            }
            next = poll_event_immediate()?;
        }

        // Drain outcomes from background tasks
        while let Ok(outcome) = rx.try_recv() {
            if handle_outcome(app, tui, outcome) != Effect::None {
                needs_redraw = true;
            }
        }
    }
}
