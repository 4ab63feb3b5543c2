//! Multi-day weather simulation.
//!
//! Chains weather rolls into a gap-free timeline starting on a given date.
//! The last segment is clipped to the requested window for display, but
//! the day cursor always advances by the full rolled duration.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calendar::{CalendarDate, to_date};
use crate::error::{WeatherError, WeatherResult};
use crate::roller::{RollOutcome, WeatherSource};

/// One stretch of weather in a simulation log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// First day of the weather.
    pub start: CalendarDate,
    /// Last day shown, clipped to the simulation window.
    pub end: CalendarDate,
    /// The day the weather really ends, set only when it runs past the window.
    pub natural_end: Option<CalendarDate>,
    /// The roll that produced this segment.
    pub outcome: RollOutcome,
}

impl Segment {
    /// Date heading: a single date, or "start - end".
    pub fn header(&self) -> String {
        if self.start == self.end {
            self.start.to_string()
        } else {
            format!("{} - {}", self.start, self.end)
        }
    }

    /// Whether the weather continues past the simulation window.
    pub fn is_clipped(&self) -> bool {
        self.natural_end.is_some()
    }
}

/// The result of a multi-day simulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationLog {
    /// First day of the window.
    pub start: CalendarDate,
    /// Last day of the window.
    pub end: CalendarDate,
    /// Requested number of days.
    pub total_days: u64,
    /// Weather segments in chronological order.
    pub segments: Vec<Segment>,
}

impl SimulationLog {
    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether the log has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Render the log as plain text, one blank line between segments.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            out.push_str(&segment.header());
            out.push('\n');
            out.push_str(&segment.outcome.text);
            if let Some(natural_end) = segment.natural_end {
                out.push_str(&format!("\n(Ends {natural_end})"));
            }
            out.push_str("\n\n");
        }
        out
    }
}

impl std::fmt::Display for SimulationLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

/// Simulate `duration_days` of weather starting on `month`/`day` of `year`.
pub fn simulate<S: WeatherSource + ?Sized>(
    month: u32,
    day: u32,
    year: i64,
    duration_days: i64,
    source: &mut S,
) -> WeatherResult<SimulationLog> {
    let start = CalendarDate::new(month, day, year)?;
    simulate_from(start.day_of_year(), duration_days, year, source)
}

/// Simulate from an absolute day counted from the start of `start_year`.
///
/// Fails with `DateOutOfRange` when a date in the window, or the end of
/// weather clipped by it, lies past the last representable year.
pub fn simulate_from<S: WeatherSource + ?Sized>(
    start_absolute_day: u64,
    duration_days: i64,
    start_year: i64,
    source: &mut S,
) -> WeatherResult<SimulationLog> {
    if duration_days <= 0 {
        return Err(WeatherError::InvalidDuration(duration_days));
    }
    if start_absolute_day == 0 {
        return Err(WeatherError::InvalidStartDay(start_absolute_day));
    }

    let total = duration_days.unsigned_abs();
    let out_of_range = || WeatherError::DateOutOfRange {
        absolute_day: start_absolute_day,
        epoch_year: start_year,
    };
    let window_end = start_absolute_day
        .checked_add(total - 1)
        .ok_or_else(out_of_range)?;
    let start = to_date(start_absolute_day, start_year)?;
    let end = to_date(window_end, start_year)?;
    let mut elapsed = 0;
    let mut segments = Vec::new();

    while elapsed < total {
        let outcome = source.roll()?;
        // A zero-day outcome still occupies its starting day.
        let rolled = u64::from(outcome.duration_days.max(1));
        // elapsed < total, so this stays within the window.
        let segment_start = start_absolute_day + elapsed;
        let natural_end = segment_start
            .checked_add(rolled - 1)
            .ok_or_else(out_of_range)?;
        let segment_end = natural_end.min(window_end);

        let clipped = natural_end >= window_end && natural_end != segment_end;
        let segment = Segment {
            start: to_date(segment_start, start_year)?,
            end: to_date(segment_end, start_year)?,
            natural_end: if clipped {
                Some(to_date(natural_end, start_year)?)
            } else {
                None
            },
            outcome,
        };
        debug!(
            start = %segment.start,
            end = %segment.end,
            rolled,
            clipped = segment.is_clipped(),
            "weather segment"
        );
        segments.push(segment);
        elapsed += rolled;
    }

    debug!(segments = segments.len(), total, "simulation complete");
    Ok(SimulationLog {
        start,
        end,
        total_days: total,
        segments,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ScriptedSource;
    use crate::roller::{RollKind, WeatherRoller};
    use std::collections::VecDeque;

    /// Returns fixed durations in order, repeating the last one.
    struct FixedDurations {
        durations: VecDeque<u32>,
        calls: usize,
    }

    impl FixedDurations {
        fn new(durations: &[u32]) -> Self {
            Self {
                durations: durations.iter().copied().collect(),
                calls: 0,
            }
        }
    }

    impl WeatherSource for FixedDurations {
        fn roll(&mut self) -> WeatherResult<RollOutcome> {
            self.calls += 1;
            let days = if self.durations.len() > 1 {
                self.durations.pop_front().unwrap_or(1)
            } else {
                self.durations.front().copied().unwrap_or(1)
            };
            Ok(RollOutcome {
                kind: RollKind::Single { event_id: 1 },
                text: format!("Test weather\n\nDuration: {days} days"),
                duration_days: days,
            })
        }
    }

    fn date(month: u32, day: u32, year: i64) -> CalendarDate {
        CalendarDate::new(month, day, year).unwrap()
    }

    #[test]
    fn single_segment_fills_window_exactly() {
        let mut source = FixedDurations::new(&[30]);
        let log = simulate(1, 1, 2024, 30, &mut source).unwrap();
        assert_eq!(log.len(), 1);
        let seg = &log.segments[0];
        assert_eq!(seg.start, date(1, 1, 2024));
        assert_eq!(seg.end, date(1, 30, 2024));
        assert!(!seg.is_clipped());
        assert!(!log.render().contains("(Ends"));
        assert_eq!(source.calls, 1);
    }

    #[test]
    fn final_segment_is_clipped_with_note() {
        let mut source = FixedDurations::new(&[10, 10, 10]);
        let log = simulate(1, 1, 2024, 25, &mut source).unwrap();
        assert_eq!(log.len(), 3);

        let spans: Vec<_> = log.segments.iter().map(|s| (s.start, s.end)).collect();
        assert_eq!(
            spans,
            vec![
                (date(1, 1, 2024), date(1, 10, 2024)),
                (date(1, 11, 2024), date(1, 20, 2024)),
                (date(1, 21, 2024), date(1, 25, 2024)),
            ]
        );
        assert_eq!(log.segments[0].natural_end, None);
        assert_eq!(log.segments[1].natural_end, None);
        assert_eq!(log.segments[2].natural_end, Some(date(1, 30, 2024)));
    }

    #[test]
    fn rendered_text_layout() {
        let mut source = FixedDurations::new(&[10, 10, 10]);
        let log = simulate(1, 1, 2024, 25, &mut source).unwrap();
        let expected = "\
1/1/2024 - 1/10/2024
Test weather

Duration: 10 days

1/11/2024 - 1/20/2024
Test weather

Duration: 10 days

1/21/2024 - 1/25/2024
Test weather

Duration: 10 days
(Ends 1/30/2024)

";
        assert_eq!(log.render(), expected);
        assert_eq!(log.to_string(), expected);
    }

    #[test]
    fn one_day_segment_shows_single_date() {
        let mut source = FixedDurations::new(&[1, 2]);
        let log = simulate(3, 5, 9, 3, &mut source).unwrap();
        assert_eq!(log.segments[0].header(), "3/5/9");
        assert_eq!(log.segments[1].header(), "3/6/9 - 3/7/9");
    }

    #[test]
    fn clipped_to_a_single_day_still_notes_the_end() {
        let mut source = FixedDurations::new(&[4]);
        let log = simulate(6, 1, 100, 1, &mut source).unwrap();
        assert_eq!(log.len(), 1);
        assert_eq!(log.segments[0].header(), "6/1/100");
        assert_eq!(log.segments[0].natural_end, Some(date(6, 4, 100)));
    }

    #[test]
    fn segments_cross_year_boundary() {
        let mut source = FixedDurations::new(&[5]);
        let log = simulate(12, 28, 2024, 10, &mut source).unwrap();
        assert_eq!(log.segments[0].start, date(12, 28, 2024));
        assert_eq!(log.segments[0].end, date(1, 2, 2025));
        assert_eq!(log.segments[1].start, date(1, 3, 2025));
        assert_eq!(log.segments[1].end, date(1, 7, 2025));
        assert_eq!(log.end, date(1, 7, 2025));
    }

    #[test]
    fn rejects_non_positive_duration() {
        let mut source = FixedDurations::new(&[1]);
        assert_eq!(
            simulate(1, 1, 2024, 0, &mut source),
            Err(WeatherError::InvalidDuration(0))
        );
        assert_eq!(
            simulate(1, 1, 2024, -3, &mut source),
            Err(WeatherError::InvalidDuration(-3))
        );
        assert_eq!(source.calls, 0);
    }

    #[test]
    fn rejects_invalid_start_date() {
        let mut source = FixedDurations::new(&[1]);
        assert_eq!(
            simulate(13, 1, 2024, 5, &mut source),
            Err(WeatherError::InvalidDate { month: 13, day: 1 })
        );
        assert_eq!(
            simulate_from(0, 5, 2024, &mut source),
            Err(WeatherError::InvalidStartDay(0))
        );
    }

    #[test]
    fn years_past_i64_are_rejected() {
        let mut source = FixedDurations::new(&[10]);
        assert_eq!(
            simulate(1, 1, i64::MAX, 400, &mut source),
            Err(WeatherError::DateOutOfRange {
                absolute_day: 400,
                epoch_year: i64::MAX
            })
        );
        assert_eq!(source.calls, 0);

        // The last representable year still simulates.
        let log = simulate(12, 1, i64::MAX, 30, &mut source).unwrap();
        assert_eq!(log.end, date(12, 30, i64::MAX));
    }

    #[test]
    fn start_day_near_u64_max_is_rejected() {
        let mut source = FixedDurations::new(&[1]);
        assert_eq!(
            simulate_from(u64::MAX, 2, 0, &mut source),
            Err(WeatherError::DateOutOfRange {
                absolute_day: u64::MAX,
                epoch_year: 0
            })
        );
        assert_eq!(source.calls, 0);
    }

    #[test]
    fn natural_end_past_the_calendar_is_an_error() {
        let mut source = FixedDurations::new(&[10]);
        assert!(matches!(
            simulate(12, 28, i64::MAX, 2, &mut source),
            Err(WeatherError::DateOutOfRange { .. })
        ));
    }

    #[test]
    fn zero_day_outcome_still_advances() {
        let mut source = FixedDurations::new(&[0]);
        let log = simulate(1, 1, 1, 3, &mut source).unwrap();
        assert_eq!(log.len(), 3);
    }

    #[test]
    fn scripted_roller_drives_simulation() {
        // Maeoria's Clouds for 10, Uni's Rot for 8, Bleck's Shade for 3.
        let rng = ScriptedSource::new([4, 10, 8, 8, 1, 3]);
        let mut roller = WeatherRoller::new(rng);
        let log = simulate(2, 1, 7, 20, &mut roller).unwrap();
        assert_eq!(log.len(), 3);
        assert!(log.segments[0].outcome.text.starts_with("Maeoria's Clouds"));
        assert!(log.segments[1].outcome.text.starts_with("Uni's Rot"));
        assert_eq!(log.segments[2].start, date(2, 19, 7));
        assert_eq!(log.segments[2].end, date(2, 20, 7));
        assert_eq!(log.segments[2].natural_end, Some(date(2, 21, 7)));
    }

    #[test]
    fn roller_errors_propagate() {
        let mut roller = WeatherRoller::new(ScriptedSource::new([2]));
        assert_eq!(
            simulate(1, 1, 1, 5, &mut roller),
            Err(WeatherError::ScriptExhausted)
        );
    }

    #[test]
    fn log_serializes_to_json() {
        let mut source = FixedDurations::new(&[3]);
        let log = simulate(1, 1, 2024, 2, &mut source).unwrap();
        let json = serde_json::to_value(&log).unwrap();
        assert_eq!(json["total_days"], 2);
        assert_eq!(json["segments"][0]["natural_end"]["day"], 3);
        assert_eq!(json["segments"][0]["outcome"]["duration_days"], 3);
    }
}
