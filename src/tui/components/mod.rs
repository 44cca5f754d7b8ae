//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as fields:
//! - `Header`: Title line with the language badge
//! - `NavBar`: Bottom tab bar
//! - `HomeScreen`, `BudgetScreen`, `DestinationsPlaceholder`, `TripsEmptyState`
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components whose state lives in `TuiState` and that emit events:
//! - `PlannerState` / `PlannerForm`: Trip request form, emits `Generate`
//! - `TripDetailsState` / `TripDetails`: Scrollable itinerary, emits `Back`
//!
//! Stateful components use the persistent state + transient wrapper
//! pattern: the state struct outlives frames, the render wrapper is built
//! each frame with borrowed state and props.
//!
//! ## Props-Based Data Flow
//!
//! Components never read `App` directly. The plan, the active tab and the
//! translator are handed in by `ui::draw_ui`, which is the only place that
//! asks the core which screen to show.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file, shared layout helpers)
//! ├── header.rs        (Top title line)
//! ├── nav_bar.rs       (Bottom tab bar)
//! ├── home.rs          (Home screen)
//! ├── placeholder.rs   (Trips empty state, destinations grid)
//! ├── planner_form.rs  (Planner screen)
//! ├── trip_details.rs  (Itinerary for a generated plan)
//! └── budget.rs        (Budget breakdown)
//! ```

pub mod budget;
pub mod header;
pub mod home;
pub mod nav_bar;
pub mod placeholder;
pub mod planner_form;
pub mod trip_details;

pub use budget::BudgetScreen;
pub use header::Header;
pub use home::HomeScreen;
pub use nav_bar::{NavBar, NavEvent};
pub use placeholder::{DestinationsPlaceholder, EmptyStateEvent, TripsEmptyState};
pub use planner_form::{PlannerEvent, PlannerForm, PlannerState};
pub use trip_details::{TripDetails, TripDetailsEvent, TripDetailsState};

use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::Color;
use unicode_width::UnicodeWidthStr;

use crate::i18n::Direction;

/// Brand green used for highlights and primary buttons.
pub const BRAND: Color = Color::Rgb(0, 108, 53);

/// Text alignment for body copy: start edge of the reading direction.
pub fn start_alignment(direction: Direction) -> Alignment {
    if direction.is_rtl() {
        Alignment::Right
    } else {
        Alignment::Left
    }
}

/// Display width of a string in terminal columns.
pub fn display_width(s: &str) -> u16 {
    u16::try_from(s.width()).unwrap_or(u16::MAX)
}

/// A rect `width` columns wide, centered horizontally in `area`.
pub fn centered_columns(area: Rect, width: u16) -> Rect {
    let [center] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(area);
    center
}

/// Truncate a string to fit within `max_width` columns, adding "..." if needed.
pub fn truncate_str(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > max_width - 3 {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push_str("...");
    out
}

/// True if the screen position is inside `area`.
pub fn contains(area: Rect, column: u16, row: u16) -> bool {
    area.contains(ratatui::layout::Position::new(column, row))
}
