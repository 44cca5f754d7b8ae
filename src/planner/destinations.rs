//! Built-in destinations. The order here is the order shown in the
//! planner and on the home screen.

/// A city the planner can build an itinerary for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Destination {
    pub name: &'static str,
    pub region: &'static str,
    /// Daily cost at the standard tier, in SAR.
    pub base_daily_sar: u32,
    pub highlights: &'static [&'static str],
}

pub const CATALOG: &[Destination] = &[
    Destination {
        name: "Riyadh",
        region: "Central",
        base_daily_sar: 650,
        highlights: &[
            "Masmak Fortress",
            "Diriyah and At-Turaif",
            "Kingdom Centre Sky Bridge",
            "Edge of the World",
            "National Museum",
            "Boulevard City",
        ],
    },
    Destination {
        name: "Jeddah",
        region: "Makkah",
        base_daily_sar: 600,
        highlights: &[
            "Al-Balad historic district",
            "King Fahd's Fountain",
            "Jeddah Corniche",
            "Red Sea snorkeling",
            "Floating Mosque",
        ],
    },
    Destination {
        name: "AlUla",
        region: "Madinah",
        base_daily_sar: 900,
        highlights: &[
            "Hegra tombs",
            "Elephant Rock",
            "AlUla Old Town",
            "Maraya",
            "Dadan and Jabal Ikmah",
        ],
    },
    Destination {
        name: "NEOM",
        region: "Tabuk",
        base_daily_sar: 1100,
        highlights: &[
            "Sindalah island",
            "Gulf of Aqaba coast",
            "Magna beaches",
            "Hisma desert",
        ],
    },
    Destination {
        name: "Taif",
        region: "Makkah",
        base_daily_sar: 450,
        highlights: &[
            "Rose farms of Al-Hada",
            "Shubra Palace",
            "Al-Shafa mountains",
            "Souq Okaz",
        ],
    },
    Destination {
        name: "Abha",
        region: "Asir",
        base_daily_sar: 500,
        highlights: &[
            "Al-Soudah park",
            "Rijal Almaa village",
            "Abha cable car",
            "Asir National Park",
        ],
    },
];

/// Case-insensitive lookup by name.
pub fn find(name: &str) -> Option<&'static Destination> {
    let name = name.trim();
    CATALOG.iter().find(|d| d.name.eq_ignore_ascii_case(name))
}

/// Catalog names in display order.
pub fn names() -> impl Iterator<Item = &'static str> {
    CATALOG.iter().map(|d| d.name)
}
