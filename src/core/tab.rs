//! # Tabs
//!
//! The closed set of top-level screens. String identifiers (from config,
//! CLI flags, or anything else stringly-typed) enter through
//! [`Tab::from_id`], which is the only place an unknown value can appear.

use log::warn;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A top-level screen selectable from the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Home,
    Planner,
    Trips,
    Profile,
    Destinations,
}

impl Tab {
    /// Navigation bar order. Number keys 1-5 follow this order.
    pub const ALL: [Tab; 5] = [
        Tab::Home,
        Tab::Destinations,
        Tab::Planner,
        Tab::Trips,
        Tab::Profile,
    ];

    /// Stable string identifier (`"home"`, `"planner"`, ...).
    pub fn id(self) -> &'static str {
        match self {
            Tab::Home => "home",
            Tab::Planner => "planner",
            Tab::Trips => "trips",
            Tab::Profile => "profile",
            Tab::Destinations => "destinations",
        }
    }

    /// Strict parse: `None` for anything outside the five identifiers.
    pub fn parse(id: &str) -> Option<Tab> {
        match id.trim().to_ascii_lowercase().as_str() {
            "home" => Some(Tab::Home),
            "planner" => Some(Tab::Planner),
            "trips" => Some(Tab::Trips),
            "profile" => Some(Tab::Profile),
            "destinations" => Some(Tab::Destinations),
            _ => None,
        }
    }

    /// Lenient parse: unrecognized identifiers resolve to `Home`.
    pub fn from_id(id: &str) -> Tab {
        id.parse().unwrap_or_else(|e: UnknownTab| {
            warn!("{}, falling back to home", e);
            Tab::Home
        })
    }

    /// Position in the navigation bar.
    pub fn index(self) -> usize {
        Tab::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    /// Tab at a navigation position, if any.
    pub fn from_index(index: usize) -> Option<Tab> {
        Tab::ALL.get(index).copied()
    }

    /// Next tab in navigation order, wrapping around.
    pub fn next(self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    /// Previous tab in navigation order, wrapping around.
    pub fn prev(self) -> Tab {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }

    /// Translation key for the navigation label.
    pub fn label_key(self) -> &'static str {
        match self {
            Tab::Home => "navHome",
            Tab::Planner => "navPlanner",
            Tab::Trips => "navTrips",
            Tab::Profile => "navProfile",
            Tab::Destinations => "navDestinations",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Error for strict parsing via `str::parse`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTab(pub String);

impl fmt::Display for UnknownTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown tab: {}", self.0)
    }
}

impl std::error::Error for UnknownTab {}

impl FromStr for Tab {
    type Err = UnknownTab;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tab::parse(s).ok_or_else(|| UnknownTab(s.to_string()))
    }
}
