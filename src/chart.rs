//! Chart Builder - four pillars from a birth timestamp
//!
//! Simplified calendar arithmetic (not solar-term based):
//! - Year: stem = (year - 4) mod 10, branch = (year - 4) mod 12
//! - Month: branch = (month + 2) mod 12, stem = ((year_stem mod 5) × 2 + month - 2) mod 10
//! - Day: offset from 1900-01-01 (defined as 甲子), stem = offset mod 10, branch = offset mod 12
//! - Hour: branch = floor(hour / 2) mod 12, stem = (start stem of day + branch) mod 10
//!
//! Only range bounds are checked; day-of-month legality is the caller's job.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::element::Element;
use crate::error::{EngineError, EngineResult};
use crate::tables::{Branch, Season, Stem, HOUR_STEM_START};

/// Julian day number of the 甲子 epoch (1900-01-01)
pub const DAY_EPOCH_JDN: i64 = 2_415_021;

/// Birth timestamp as supplied by the profile store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BirthInput {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
}

impl BirthInput {
    pub fn new(year: i32, month: u32, day: u32, hour: u32) -> Self {
        Self { year, month, day, hour }
    }

    /// Range checks only (month 1-12, day 1-31, hour 0-23)
    pub fn validate(&self) -> EngineResult<()> {
        if !(1..=12).contains(&self.month) {
            return Err(EngineError::InvalidMonth(self.month));
        }
        if !(1..=31).contains(&self.day) {
            return Err(EngineError::InvalidDay(self.day));
        }
        if self.hour > 23 {
            return Err(EngineError::InvalidHour(self.hour));
        }
        Ok(())
    }
}

/// A (stem, branch) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pillar {
    pub stem: Stem,
    pub branch: Branch,
}

impl Pillar {
    pub fn new(stem: Stem, branch: Branch) -> Self {
        Self { stem, branch }
    }

    /// Position in the 60-term cycle, if stem and branch share polarity
    pub fn cycle_index(&self) -> Option<u8> {
        let s = self.stem.index() as i64;
        let b = self.branch.index() as i64;
        if s % 2 != b % 2 {
            return None;
        }
        Some((6 * s - 5 * b).rem_euclid(60) as u8)
    }

    /// (stem element, branch element)
    pub fn elements(&self) -> (Element, Element) {
        (self.stem.element(), self.branch.element())
    }

    pub fn label(&self) -> String {
        format!("{}{}", self.stem.label(), self.branch.label())
    }
}

impl fmt::Display for Pillar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.stem, self.branch)
    }
}

/// Four pillars: year, month, day, hour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Chart {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
}

impl Chart {
    /// Pillars in year, month, day, hour order
    pub fn pillars(&self) -> [Pillar; 4] {
        [self.year, self.month, self.day, self.hour]
    }

    pub fn stems(&self) -> [Stem; 4] {
        self.pillars().map(|p| p.stem)
    }

    pub fn branches(&self) -> [Branch; 4] {
        self.pillars().map(|p| p.branch)
    }

    /// Stem of the day pillar
    pub fn day_master(&self) -> Stem {
        self.day.stem
    }

    pub fn month_branch(&self) -> Branch {
        self.month.branch
    }
}

impl fmt::Display for Chart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.year, self.month, self.day, self.hour)
    }
}

/// Build the four-pillar chart for a birth timestamp
pub fn build_chart(input: &BirthInput) -> EngineResult<Chart> {
    input.validate()?;

    let year = year_pillar(input.year);
    let month = month_pillar(year.stem, input.month);
    let day = day_pillar(input.year, input.month, input.day);
    let hour = hour_pillar(day.stem, input.hour);

    let chart = Chart { year, month, day, hour };
    tracing::debug!(
        "Chart for {}-{:02}-{:02} {:02}h: {}",
        input.year,
        input.month,
        input.day,
        input.hour,
        chart
    );
    Ok(chart)
}

/// Season of a calendar month under the same month-branch rule as the chart
pub fn season_for_month(month: u32) -> EngineResult<Season> {
    if !(1..=12).contains(&month) {
        return Err(EngineError::InvalidMonth(month));
    }
    Ok(Season::from_month_branch(month_branch_of(month)))
}

fn month_branch_of(month: u32) -> Branch {
    Branch::from_cycle(month as i64 + 2)
}

fn year_pillar(year: i32) -> Pillar {
    let offset = year as i64 - 4;
    Pillar::new(Stem::from_cycle(offset), Branch::from_cycle(offset))
}

fn month_pillar(year_stem: Stem, month: u32) -> Pillar {
    let branch = month_branch_of(month);
    let stem = Stem::from_cycle((year_stem.index() as i64 % 5) * 2 + month as i64 - 2);
    Pillar::new(stem, branch)
}

fn day_pillar(year: i32, month: u32, day: u32) -> Pillar {
    let offset = day_offset(year, month, day);
    Pillar::new(Stem::from_cycle(offset), Branch::from_cycle(offset))
}

fn hour_pillar(day_stem: Stem, hour: u32) -> Pillar {
    let branch_index = (hour / 2) % 12;
    let start = HOUR_STEM_START[day_stem.index()];
    Pillar::new(
        Stem::from_cycle(start.index() as i64 + branch_index as i64),
        Branch::from_cycle(branch_index as i64),
    )
}

/// Days between the epoch and the given date (negative before 1900-01-01)
///
/// Plain day-number arithmetic, so out-of-month days (e.g. Feb 30) roll over
/// instead of failing.
pub fn day_offset(year: i32, month: u32, day: u32) -> i64 {
    julian_day_number(year as i64, month as i64, day as i64) - DAY_EPOCH_JDN
}

fn julian_day_number(year: i64, month: i64, day: i64) -> i64 {
    let a = (14 - month) / 12;
    let y = year + 4800 - a;
    let m = month + 12 * a - 3;
    day + (153 * m + 2) / 5 + 365 * y + y.div_euclid(4) - y.div_euclid(100) + y.div_euclid(400)
        - 32045
}
