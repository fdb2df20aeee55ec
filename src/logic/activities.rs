use chrono::{Datelike, NaiveDate};

use crate::models::activity::SeasonalActivities;

const PLANTING: &str = "Land Preparation & Planting";
const CANOPY: &str = "Vine Growth & Canopy Development";
const FLOWERING: &str = "Flowering & Fruit Setting";
const BERRY_GROWTH: &str = "Berry Growth & Development";
const HARVEST: &str = "Berry Growth & Development / Harvesting";

fn entry(phase: &str, current: &[&str], upcoming: &[&str]) -> SeasonalActivities {
    SeasonalActivities {
        phase: phase.to_string(),
        current: current.iter().map(|s| s.to_string()).collect(),
        upcoming: upcoming.iter().map(|s| s.to_string()).collect(),
    }
}

/// Vineyard calendar for `date`: the phase in progress, what to do now, and what comes next.
/// A few months switch their advice on the 15th.
pub fn seasonal_activities(date: NaiveDate) -> SeasonalActivities {
    let day = date.day();
    let first_half = day <= 15;

    match date.month() {
        4 => entry(
            PLANTING,
            &[if first_half {
                "Deep plowing, leveling, and soil testing (April 1-15)"
            } else {
                "Apply organic manure and fertilizers (April 16-30)"
            }],
            &[
                "Install drip irrigation and trellis system (May 1-15)",
                "Plant grape saplings at spacing (May 16-31)",
                "Provide shade nets to protect young plants (June)",
            ],
        ),
        5 => entry(
            PLANTING,
            &[if first_half {
                "Install drip irrigation and trellis system (May 1-15)"
            } else {
                "Plant grape saplings at spacing (May 16-31)"
            }],
            &[
                "Provide shade nets to protect young plants (June)",
                "First training of vines on trellis/wires (July)",
                "Apply nitrogen-rich fertilizers (July)",
            ],
        ),
        6 => entry(
            PLANTING,
            &["Provide shade nets to protect young plants from excess rain"],
            &[
                "First training of vines on trellis/wires (July)",
                "Apply nitrogen-rich fertilizers (July)",
                "Spray bio-pesticides to control mealybugs (July)",
            ],
        ),
        7 => entry(
            CANOPY,
            &[
                "First training of vines on trellis/wires",
                "Apply nitrogen-rich fertilizers (Urea, Ammonium Sulfate)",
                "Spray bio-pesticides to control mealybugs",
            ],
            &[
                "Remove weak or unwanted shoots (August)",
                "First pruning (back pruning) to encourage strong growth (August)",
                "Second pruning to prepare for flowering (September)",
            ],
        ),
        8 => entry(
            CANOPY,
            &[
                "Remove weak or unwanted shoots (canopy management)",
                "First pruning (back pruning) to encourage strong shoot growth",
            ],
            &[
                "Second pruning to prepare for flowering (September)",
                "Spray Gibberellic Acid to induce flowering (September)",
                "Regular irrigation for uniform flowering (October)",
            ],
        ),
        9 => entry(
            CANOPY,
            &[
                "Second pruning (forward pruning) to prepare for flowering",
                "Spray Gibberellic Acid (GA3) to induce flowering",
            ],
            &[
                "Regular irrigation for uniform flowering (October)",
                "Apply Phosphorous and Potassium fertilizers (October)",
                "Protect from thrips, mites, and downy mildew (October)",
            ],
        ),
        10 => entry(
            FLOWERING,
            &[
                "Regular irrigation for uniform flowering",
                "Apply Phosphorous and Potassium fertilizers to strengthen flowers",
                "Protect from thrips, mites, and downy mildew",
            ],
            &[
                "Monitor and remove excess flower clusters (November)",
                "Apply Calcium Nitrate and Boron for fruit setting (November)",
                "Ensure pollination-friendly environment (December)",
            ],
        ),
        11 => entry(
            FLOWERING,
            &[
                "Monitor and remove excess flower clusters (only 2-3 per shoot)",
                "Apply Calcium Nitrate and Boron for fruit setting",
            ],
            &[
                "Ensure pollination-friendly environment (December)",
                "Apply Sulfur & Copper sprays to prevent fungal diseases (December)",
                "First fruit thinning to remove weak berries (January)",
            ],
        ),
        1 => entry(
            BERRY_GROWTH,
            &[
                "First fruit thinning to remove weak berries",
                "Apply Potassium Nitrate (KNO₃) for better berry size",
                "Use Gibberellic Acid (GA3) spray for berry elongation",
            ],
            &[
                "Bunch thinning to maintain fruit uniformity (February)",
                "Reduce nitrogen fertilizers, increase Potassium & Calcium (February)",
                "Stop heavy irrigation to prevent cracking (March)",
            ],
        ),
        2 => entry(
            BERRY_GROWTH,
            &[
                "Bunch thinning to maintain fruit uniformity",
                "Reduce nitrogen fertilizers and increase Potassium & Calcium sprays",
                "Reduce irrigation before harvesting to improve sweetness",
            ],
            &[
                "Final monitoring of diseases and fruit quality (March)",
                "Stop heavy irrigation to prevent cracking (March)",
                "First harvest for early varieties (March)",
            ],
        ),
        3 => {
            // Harvest opens mid-month.
            let harvesting = day >= 15;
            entry(
                HARVEST,
                &[
                    "Final monitoring of diseases and fruit quality",
                    "Stop heavy irrigation to prevent cracking",
                    if harvesting {
                        "First harvest for early varieties"
                    } else {
                        "Prepare for harvesting"
                    },
                ],
                if harvesting {
                    &[
                        "Sorting based on size, color, and variety (April 11-30)",
                        "Pack in ventilated boxes (April 11-30)",
                        "Transport to local mandis (April 20-May 10)",
                    ]
                } else {
                    &[
                        "Handpick grapes early in the morning (March 15 - April 10)",
                        "Remove damaged bunches during harvest",
                        "Sulfur fumigation to prevent fungal growth",
                    ]
                },
            )
        }
        // December; `month()` is always 1..=12.
        _ => entry(
            FLOWERING,
            &[
                "Fruit set stage begins; ensure pollination-friendly environment",
                "Apply Sulfur & Copper sprays to prevent fungal diseases",
            ],
            &[
                "First fruit thinning to remove weak berries (January)",
                "Apply Potassium Nitrate for better berry size (January)",
                "Use Gibberellic Acid spray for berry elongation (January)",
            ],
        ),
    }
}
