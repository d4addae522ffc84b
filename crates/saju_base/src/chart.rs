//! Four-pillar chart assembly and the calculation entry points.

use std::fmt::{Display, Formatter};

use tracing::{debug, trace};

use crate::calendar::{Calendar, CycleIndices};
use crate::deriver::{day_pillar, hour_pillar, month_pillar, year_pillar};
use crate::element::{ALL_ELEMENTS, Element};
use crate::error::CalculationError;
use crate::pillar::Pillar;

/// The four pillars of a birth chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FourPillars {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
}

impl FourPillars {
    /// Pillars in chart order: year, month, day, hour.
    pub const fn pillars(&self) -> [Pillar; 4] {
        [self.year, self.month, self.day, self.hour]
    }

    /// Element tally over all eight characters (four stems, four branches).
    pub fn element_counts(&self) -> ElementCounts {
        let mut counts = [0u8; 5];
        for p in self.pillars() {
            counts[p.stem.element().index() as usize] += 1;
            counts[p.branch.element().index() as usize] += 1;
        }
        ElementCounts { counts }
    }

    /// Space-separated hangul form, e.g. "갑진 병인 무오 갑자".
    pub fn hangul(&self) -> String {
        self.pillars()
            .iter()
            .map(|p| p.hangul())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Display for FourPillars {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} {}", self.year, self.month, self.day, self.hour)
    }
}

/// Number of chart characters belonging to each element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ElementCounts {
    counts: [u8; 5],
}

impl ElementCounts {
    /// Count for one element.
    pub const fn get(&self, element: Element) -> u8 {
        self.counts[element.index() as usize]
    }

    /// Always 8 for a full chart.
    pub fn total(&self) -> u8 {
        self.counts.iter().sum()
    }

    /// Element(s) with the highest count, in element order.
    pub fn dominant(&self) -> Vec<Element> {
        let max = self.counts.iter().copied().max().unwrap_or(0);
        ALL_ELEMENTS
            .into_iter()
            .filter(|&e| self.get(e) == max)
            .collect()
    }

    /// Elements absent from the chart.
    pub fn missing(&self) -> Vec<Element> {
        ALL_ELEMENTS
            .into_iter()
            .filter(|&e| self.get(e) == 0)
            .collect()
    }
}

/// Which calendar a birth date is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CalendarKind {
    #[default]
    Solar,
    Lunar,
}

/// Raw birth input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BirthInput {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    /// Civil hour, 0-23.
    pub hour: u32,
    pub calendar: CalendarKind,
}

impl BirthInput {
    /// Input with a Gregorian date.
    pub fn solar(year: i32, month: u32, day: u32, hour: u32) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            calendar: CalendarKind::Solar,
        }
    }

    /// Input with a lunar date in a regular (non-leap) month.
    pub fn lunar(year: i32, month: u32, day: u32, hour: u32) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            calendar: CalendarKind::Lunar,
        }
    }
}

fn check_hour(hour: u32) -> Result<(), CalculationError> {
    if hour >= 24 {
        return Err(CalculationError::InvalidHour(hour));
    }
    Ok(())
}

/// Four pillars from an already resolved lunar date.
pub fn four_pillars(
    date: &impl CycleIndices,
    hour: u32,
) -> Result<FourPillars, CalculationError> {
    check_hour(hour)?;
    // Day before hour: the hour stem depends on the day stem.
    let year = year_pillar(date);
    let month = month_pillar(date);
    let day = day_pillar(date);
    let hour = hour_pillar(date, hour);
    Ok(FourPillars {
        year,
        month,
        day,
        hour,
    })
}

/// Four pillars for a birth date and civil hour.
///
/// With `is_lunar` the date is resolved directly as a lunar date,
/// otherwise as a Gregorian date and then converted. Any calendar failure
/// yields [`CalculationError::InvalidDate`].
pub fn calculate<C: Calendar>(
    calendar: &C,
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    is_lunar: bool,
) -> Result<FourPillars, CalculationError> {
    check_hour(hour)?;

    let lunar = if is_lunar {
        calendar.resolve_lunar(year, month, day)
    } else {
        calendar
            .resolve_solar(year, month, day)
            .and_then(|solar| calendar.to_lunar(&solar))
    }
    .map_err(|e| {
        debug!(year, month, day, is_lunar, error = %e, "calendar resolution failed");
        CalculationError::InvalidDate
    })?;

    let chart = four_pillars(&lunar, hour)?;
    trace!(year, month, day, hour, is_lunar, %chart, "four pillars derived");
    Ok(chart)
}

/// [`calculate`] over a [`BirthInput`].
pub fn calculate_input<C: Calendar>(
    calendar: &C,
    input: &BirthInput,
) -> Result<FourPillars, CalculationError> {
    calculate(
        calendar,
        input.year,
        input.month,
        input.day,
        input.hour,
        input.calendar == CalendarKind::Lunar,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branch::Branch;
    use crate::stem::Stem;

    fn chart(stems: [u8; 4], branches: [u8; 4]) -> FourPillars {
        FourPillars {
            year: Pillar::from_indices(stems[0], branches[0]),
            month: Pillar::from_indices(stems[1], branches[1]),
            day: Pillar::from_indices(stems[2], branches[2]),
            hour: Pillar::from_indices(stems[3], branches[3]),
        }
    }

    #[test]
    fn display_in_chart_order() {
        let c = chart([0, 2, 4, 0], [4, 2, 6, 0]);
        assert_eq!(c.to_string(), "甲辰 丙寅 戊午 甲子");
        assert_eq!(c.hangul(), "갑진 병인 무오 갑자");
    }

    #[test]
    fn element_counts_total_eight() {
        let c = chart([0, 2, 4, 0], [4, 2, 6, 0]);
        let counts = c.element_counts();
        assert_eq!(counts.total(), 8);
        // 甲 丙 戊 甲 / 辰 寅 午 子
        assert_eq!(counts.get(Element::Wood), 3);
        assert_eq!(counts.get(Element::Fire), 2);
        assert_eq!(counts.get(Element::Earth), 2);
        assert_eq!(counts.get(Element::Metal), 0);
        assert_eq!(counts.get(Element::Water), 1);
        assert_eq!(counts.dominant(), vec![Element::Wood]);
        assert_eq!(counts.missing(), vec![Element::Metal]);
    }

    #[test]
    fn pillars_order() {
        let c = chart([1, 2, 3, 4], [5, 6, 7, 8]);
        let ps = c.pillars();
        assert_eq!(ps[0].stem, Stem::Eul);
        assert_eq!(ps[3].branch, Branch::Sin);
    }

    #[test]
    fn hour_24_rejected() {
        assert_eq!(check_hour(24), Err(CalculationError::InvalidHour(24)));
        assert_eq!(check_hour(23), Ok(()));
    }

    #[test]
    fn birth_input_default_is_solar() {
        assert_eq!(CalendarKind::default(), CalendarKind::Solar);
        assert_eq!(BirthInput::lunar(2024, 1, 1, 0).calendar, CalendarKind::Lunar);
    }
}
