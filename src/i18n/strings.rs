//! Static string tables. Every key in [`KEYS`] has an entry in both
//! languages; anything else is a miss and the caller decides the fallback.

use crate::i18n::Language;

pub const KEYS: &[&str] = &[
    "appTitle",
    "appTagline",
    "navHome",
    "navDestinations",
    "navPlanner",
    "navTrips",
    "navProfile",
    "homeWelcome",
    "homeSubtitle",
    "homeFeatured",
    "homeHint",
    "noActiveTrips",
    "noActiveTripsDesc",
    "planFirst",
    "exploreDest",
    "exploreDestDesc",
    "plannerTitle",
    "plannerDestination",
    "plannerDays",
    "plannerBudget",
    "plannerGenerate",
    "plannerGenerating",
    "plannerHint",
    "plannerFailed",
    "budgetEconomy",
    "budgetStandard",
    "budgetLuxury",
    "tripTitle",
    "tripDays",
    "tripEstimatedCost",
    "tripBack",
    "tripDay",
    "tripHint",
    "budgetTitle",
    "budgetTotal",
    "budgetAccommodation",
    "budgetTransport",
    "budgetFood",
    "budgetActivities",
    "currency",
    "quitHint",
];

pub fn lookup(language: Language, key: &str) -> Option<&'static str> {
    match language {
        Language::English => english(key),
        Language::Arabic => arabic(key),
    }
}

fn english(key: &str) -> Option<&'static str> {
    let text = match key {
        "appTitle" => "Safar",
        "appTagline" => "Plan your journey across Saudi Arabia",
        "navHome" => "Home",
        "navDestinations" => "Explore",
        "navPlanner" => "Planner",
        "navTrips" => "Trips",
        "navProfile" => "Budget",
        "homeWelcome" => "Welcome, traveler",
        "homeSubtitle" => "Build a day-by-day itinerary in seconds.",
        "homeFeatured" => "Featured destinations",
        "homeHint" => "Press 3 or open the Planner tab to start",
        "noActiveTrips" => "No active trips",
        "noActiveTripsDesc" => {
            "You haven't planned any trip yet. Start with the planner to build your first itinerary."
        }
        "planFirst" => "Plan your first trip",
        "exploreDest" => "Explore destinations",
        "exploreDestDesc" => "Discover the cities waiting for you.",
        "plannerTitle" => "Plan a trip",
        "plannerDestination" => "Destination",
        "plannerDays" => "Days",
        "plannerBudget" => "Budget",
        "plannerGenerate" => "Generate plan",
        "plannerGenerating" => "Generating your plan...",
        "plannerHint" => "↑↓ field  ←→ change  Enter generate",
        "plannerFailed" => "Could not generate plan",
        "budgetEconomy" => "Economy",
        "budgetStandard" => "Standard",
        "budgetLuxury" => "Luxury",
        "tripTitle" => "Your trip to",
        "tripDays" => "days",
        "tripEstimatedCost" => "Estimated cost",
        "tripBack" => "Back to planner",
        "tripDay" => "Day",
        "tripHint" => "↑↓ scroll  b back",
        "budgetTitle" => "Trip budget",
        "budgetTotal" => "Total",
        "budgetAccommodation" => "Accommodation",
        "budgetTransport" => "Transport",
        "budgetFood" => "Food",
        "budgetActivities" => "Activities",
        "currency" => "SAR",
        "quitHint" => "q quit  l language",
        _ => return None,
    };
    Some(text)
}

fn arabic(key: &str) -> Option<&'static str> {
    let text = match key {
        "appTitle" => "سفر",
        "appTagline" => "خطط لرحلتك في أنحاء المملكة",
        "navHome" => "الرئيسية",
        "navDestinations" => "الوجهات",
        "navPlanner" => "المخطط",
        "navTrips" => "رحلاتي",
        "navProfile" => "الميزانية",
        "homeWelcome" => "أهلاً بك أيها المسافر",
        "homeSubtitle" => "أنشئ جدول رحلتك يوماً بيوم خلال ثوانٍ.",
        "homeFeatured" => "وجهات مميزة",
        "homeHint" => "اضغط 3 أو افتح تبويب المخطط للبدء",
        "noActiveTrips" => "لا توجد رحلات نشطة",
        "noActiveTripsDesc" => "لم تخطط لأي رحلة بعد. ابدأ بالمخطط لإنشاء أول جدول لرحلتك.",
        "planFirst" => "خطط لرحلتك الأولى",
        "exploreDest" => "استكشف الوجهات",
        "exploreDestDesc" => "اكتشف المدن التي تنتظرك.",
        "plannerTitle" => "خطط لرحلة",
        "plannerDestination" => "الوجهة",
        "plannerDays" => "عدد الأيام",
        "plannerBudget" => "الميزانية",
        "plannerGenerate" => "أنشئ الخطة",
        "plannerGenerating" => "جارٍ إنشاء خطتك...",
        "plannerHint" => "↑↓ الحقل  ←→ تغيير  Enter إنشاء",
        "plannerFailed" => "تعذر إنشاء الخطة",
        "budgetEconomy" => "اقتصادي",
        "budgetStandard" => "قياسي",
        "budgetLuxury" => "فاخر",
        "tripTitle" => "رحلتك إلى",
        "tripDays" => "أيام",
        "tripEstimatedCost" => "التكلفة التقديرية",
        "tripBack" => "العودة إلى المخطط",
        "tripDay" => "اليوم",
        "tripHint" => "↑↓ تمرير  b رجوع",
        "budgetTitle" => "ميزانية الرحلة",
        "budgetTotal" => "الإجمالي",
        "budgetAccommodation" => "الإقامة",
        "budgetTransport" => "المواصلات",
        "budgetFood" => "الطعام",
        "budgetActivities" => "الأنشطة",
        "currency" => "ر.س",
        "quitHint" => "q خروج  l اللغة",
        _ => return None,
    };
    Some(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_key_has_both_languages() {
        for key in KEYS {
            assert!(english(key).is_some(), "missing English for {key}");
            assert!(arabic(key).is_some(), "missing Arabic for {key}");
        }
    }

    #[test]
    fn test_unknown_key_is_none() {
        assert_eq!(lookup(Language::English, "doesNotExist"), None);
        assert_eq!(lookup(Language::Arabic, "doesNotExist"), None);
    }

    #[test]
    fn test_lookup_selects_table() {
        assert_eq!(lookup(Language::English, "navTrips"), Some("Trips"));
        assert_eq!(lookup(Language::Arabic, "navTrips"), Some("رحلاتي"));
    }
}
