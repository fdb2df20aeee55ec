use chrono::{Duration, Months, NaiveDate};
use thiserror::Error;

use crate::models::timeline::{TaskCategory, TaskStatus, TimelineTask};

/// Years from planting to full production.
pub const PRODUCTION_YEARS: u32 = 3;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum TimelineError {
    #[error("grape variety must not be empty")]
    EmptyVariety,

    #[error("planting date {0} leaves no room for a three-year timeline")]
    DateOutOfRange(NaiveDate),
}

struct Schedule {
    planting: NaiveDate,
    tasks: Vec<TimelineTask>,
}

impl Schedule {
    fn shift(&self, from: NaiveDate, days: i64) -> Result<NaiveDate, TimelineError> {
        from.checked_add_signed(Duration::days(days))
            .ok_or(TimelineError::DateOutOfRange(self.planting))
    }

    /// Same calendar day `years` later; Feb 29 falls back to Feb 28.
    fn anniversary(&self, years: u32) -> Result<NaiveDate, TimelineError> {
        self.planting
            .checked_add_months(Months::new(12 * years))
            .ok_or(TimelineError::DateOutOfRange(self.planting))
    }

    /// Appends a task spanning `start..=due` days after `anchor`.
    fn push(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        category: TaskCategory,
        anchor: NaiveDate,
        (start, due): (i64, i64),
    ) -> Result<(), TimelineError> {
        let task = TimelineTask {
            id: (self.tasks.len() + 1).to_string(),
            title: title.into(),
            description: description.into(),
            category,
            start_date: self.shift(anchor, start)?,
            due_date: self.shift(anchor, due)?,
            status: TaskStatus::Pending,
        };
        self.tasks.push(task);
        Ok(())
    }
}

pub fn timeline_end(planting_date: NaiveDate) -> Result<NaiveDate, TimelineError> {
    planting_date
        .checked_add_months(Months::new(12 * PRODUCTION_YEARS))
        .ok_or(TimelineError::DateOutOfRange(planting_date))
}

/// Task list for establishing a vineyard of `variety` planted on `planting_date`:
/// site preparation, the first year in detail, then key milestones of years two and three.
pub fn farming_timeline(
    variety: &str,
    planting_date: NaiveDate,
) -> Result<Vec<TimelineTask>, TimelineError> {
    let variety = variety.trim();
    if variety.is_empty() {
        return Err(TimelineError::EmptyVariety);
    }

    use TaskCategory::*;
    let day0 = planting_date;
    let mut s = Schedule {
        planting: planting_date,
        tasks: Vec::new(),
    };

    // Preparation and planting
    s.push("Soil Testing", "Conduct soil pH test, check nutrient levels", Preparation, day0, (-14, -10))?;
    s.push("Land Preparation", "Deep plowing, leveling, and adding organic matter", Preparation, day0, (-10, -3))?;
    s.push("Install Irrigation System", "Set up drip irrigation system for water efficiency", Preparation, day0, (-7, -1))?;
    s.push("Planting Day", format!("Plant {variety} vines with proper spacing"), Planting, day0, (0, 0))?;

    // Establishment
    s.push("Deep Watering", "Provide 10-15 liters per plant", Water, day0, (0, 1))?;
    s.push("Apply Mulch", "Apply organic mulch around plants to retain moisture", Soil, day0, (1, 3))?;
    s.push("Regular Watering", "Water every 3-4 days (5-10 liters per vine)", Water, day0, (3, 30))?;
    s.push("First Fertilization", "Apply NPK 10-10-10 (half dose)", Fertilize, day0, (10, 10))?;
    s.push("Install Trellis System", "Set up wooden posts with wires for vine training", Structure, day0, (30, 45))?;
    s.push("Shoot Training", "Train primary shoots onto trellis", Training, day0, (45, 60))?;

    // First-year growth, in 30-day months
    for month in 4..=12_i64 {
        let (every, liters) = if (6..=9).contains(&month) {
            ("7-10", "10-12")
        } else {
            ("10-14", "8-10")
        };
        s.push(
            format!("Month {month} Watering"),
            format!("Water every {every} days ({liters} liters per vine)"),
            Water,
            day0,
            (30 * (month - 1), 30 * month),
        )?;

        match month {
            6 => s.push("First Summer Pruning", "Remove extra shoots, keeping only 2-3 strongest", Prune, day0, (165, 170))?,
            7 => s.push("Summer Fertilization", "Apply NPK 10-10-10 (full dose) + micronutrients", Fertilize, day0, (190, 195))?,
            8 => s.push("Pest Control", "Spray neem oil or organic insecticides", Pest, day0, (215, 220))?,
            11 => {
                s.push("Winter Pruning", "Prune back vines to shape for next year", Prune, day0, (310, 315))?;
                s.push("Winter Fertilization", "Apply potassium-based fertilizer for winter hardiness", Fertilize, day0, (320, 325))?;
            }
            _ => {}
        }
    }

    let year2 = s.anniversary(1)?;
    s.push("Year 2 - Winter Pruning", "Remove weak and overcrowded branches", Prune, year2, (15, 20))?;
    s.push("Year 2 - Spring Fertilization", "Apply NPK 15-15-15 + organic manure", Fertilize, year2, (30, 35))?;
    s.push("Year 2 - Flowering Stage", "Monitor flower buds appearance", Monitor, year2, (100, 120))?;
    s.push("Year 2 - Fruit Set", "Apply Calcium & Magnesium fertilizers", Fertilize, year2, (150, 155))?;
    s.push("Year 2 - First Small Harvest", format!("Harvest small amount of {variety} grapes"), Harvest, year2, (240, 260))?;

    let year3 = s.anniversary(2)?;
    s.push("Year 3 - Full Production Preparation", "Ensure trellis system can support full yield", Structure, year3, (30, 45))?;
    s.push(
        "Year 3 - First Full Harvest",
        format!("Harvest mature {variety} grapes (15-20 kg per vine)"),
        Harvest,
        year3,
        (240, 260),
    )?;

    Ok(s.tasks)
}
