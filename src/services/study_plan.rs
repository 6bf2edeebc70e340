use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use thiserror::Error;

pub const DEFAULT_DAILY_HOURS: u32 = 3;
pub const FALLBACK_DAYS: i64 = 7;
pub const MAX_PLAN_DAYS: i64 = 14;

const EXAM_DATE_FORMAT: &str = "%Y-%m-%d";
const SECONDS_PER_DAY: i64 = 86_400;

const ACTIVITIES: [&str; 8] = [
    "Review notes",
    "Practice problems",
    "Watch video lectures",
    "Make flashcards",
    "Take practice quiz",
    "Group study",
    "Review mistakes",
    "Teach concept to someone",
];

#[derive(Debug, Error)]
pub enum ExamDateError {
    #[error("exam date must be formatted as YYYY-MM-DD: {0}")]
    Format(#[from] chrono::ParseError),
}

/// How far away the exam is, and whether that came from the request or from
/// the fallback.
#[derive(Debug)]
pub enum ExamHorizon {
    Parsed { exam_date: NaiveDate, days_until: i64 },
    Defaulted { reason: ExamDateError },
}

impl ExamHorizon {
    /// Whole days from `now` until midnight of the exam date, rounded down.
    /// Unparseable dates fall back to a one-week horizon.
    pub fn resolve(raw: &str, now: NaiveDateTime) -> Self {
        match NaiveDate::parse_from_str(raw, EXAM_DATE_FORMAT) {
            Ok(exam_date) => {
                let remaining = exam_date.and_time(NaiveTime::MIN) - now;
                Self::Parsed {
                    exam_date,
                    days_until: remaining.num_seconds().div_euclid(SECONDS_PER_DAY),
                }
            }
            Err(err) => Self::Defaulted {
                reason: ExamDateError::from(err),
            },
        }
    }

    pub fn days_until(&self) -> i64 {
        match self {
            Self::Parsed { days_until, .. } => *days_until,
            Self::Defaulted { .. } => FALLBACK_DAYS,
        }
    }

    /// Days until the exam capped at two weeks. Negative once the exam has
    /// passed.
    pub fn total_days(&self) -> i64 {
        self.days_until().min(MAX_PLAN_DAYS)
    }

    pub fn is_defaulted(&self) -> bool {
        matches!(self, Self::Defaulted { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudyDayPlan {
    pub day: String,
    pub tasks: Vec<String>,
}

pub fn parse_subjects(subjects: &str) -> Vec<&str> {
    subjects.split(',').map(str::trim).collect()
}

/// One entry per planned day, subjects assigned round-robin. Each day gets
/// `min(daily_hours, 8)` distinct activities and the hours are split between
/// them by integer division.
pub fn build_plan<R: Rng + ?Sized>(
    rng: &mut R,
    horizon: &ExamHorizon,
    subjects: &[&str],
    daily_hours: u32,
) -> Vec<StudyDayPlan> {
    if subjects.is_empty() {
        return Vec::new();
    }

    let num_tasks = (daily_hours as usize).min(ACTIVITIES.len());
    let num_days = horizon.total_days().max(0) as usize;
    let mut activities = ACTIVITIES;

    (0..num_days)
        .map(|i| {
            let subject = subjects[i % subjects.len()];
            activities.shuffle(rng);
            let tasks = activities[..num_tasks]
                .iter()
                .map(|activity| {
                    // num_tasks > 0 whenever this closure runs
                    let hours = daily_hours / num_tasks as u32;
                    format!("{subject}: {activity} ({hours}h)")
                })
                .collect();

            StudyDayPlan {
                day: format!("Day {} ({subject})", i + 1),
                tasks,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn noon(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .and_then(|date| date.and_hms_opt(12, 0, 0))
            .expect("valid test date")
    }

    #[test]
    fn test_days_until_rounds_down() {
        let now = noon(2025, 3, 1);
        assert_eq!(ExamHorizon::resolve("2025-03-02", now).days_until(), 0);
        assert_eq!(ExamHorizon::resolve("2025-03-06", now).days_until(), 4);
        assert_eq!(ExamHorizon::resolve("2025-03-01", now).days_until(), -1);
    }

    #[test]
    fn test_horizon_caps_at_two_weeks() {
        let now = noon(2025, 3, 1);
        let horizon = ExamHorizon::resolve("2026-01-01", now);
        assert!(!horizon.is_defaulted());
        assert_eq!(horizon.total_days(), 14);
    }

    #[test]
    fn test_past_exam_plans_nothing() {
        let mut rng = StdRng::seed_from_u64(4);
        let horizon = ExamHorizon::resolve("2024-12-25", noon(2025, 3, 1));
        assert_eq!(horizon.total_days(), -67);
        assert!(build_plan(&mut rng, &horizon, &["Math"], 3).is_empty());
    }

    #[test]
    fn test_bad_date_defaults_to_a_week() {
        let now = noon(2025, 3, 1);
        for raw in ["next friday", "2025/03/10", "2025-02-30"] {
            let horizon = ExamHorizon::resolve(raw, now);
            assert!(horizon.is_defaulted(), "{raw} should not parse");
            assert_eq!(horizon.total_days(), 7);
        }
    }

    #[test]
    fn test_subjects_round_robin() {
        let mut rng = StdRng::seed_from_u64(5);
        let now = noon(2025, 3, 1);
        let horizon = ExamHorizon::resolve("2025-03-06", now);
        let subjects = parse_subjects("Math, Physics ,Chemistry");
        let plan = build_plan(&mut rng, &horizon, &subjects, 3);

        let days: Vec<_> = plan.iter().map(|d| d.day.as_str()).collect();
        assert_eq!(
            days,
            vec!["Day 1 (Math)", "Day 2 (Physics)", "Day 3 (Chemistry)", "Day 4 (Math)"]
        );
        for day in &plan {
            assert_eq!(day.tasks.len(), 3);
            assert!(day.tasks.iter().all(|t| t.ends_with("(1h)")));
        }
    }

    #[test]
    fn test_tasks_are_distinct_and_lose_remainder() {
        let mut rng = StdRng::seed_from_u64(6);
        let horizon = ExamHorizon::resolve("not a date", noon(2025, 3, 1));
        let plan = build_plan(&mut rng, &horizon, &["Biology"], 20);
        assert_eq!(plan.len(), 7);
        for day in &plan {
            let mut tasks = day.tasks.clone();
            assert_eq!(tasks.len(), 8);
            assert!(tasks.iter().all(|t| t.ends_with("(2h)")));
            tasks.sort();
            tasks.dedup();
            assert_eq!(tasks.len(), 8);
        }
    }

    #[test]
    fn test_zero_hours_gives_empty_days() {
        let mut rng = StdRng::seed_from_u64(7);
        let horizon = ExamHorizon::resolve("2025-03-04", noon(2025, 3, 1));
        let plan = build_plan(&mut rng, &horizon, &["Art"], 0);
        assert_eq!(plan.len(), 2);
        assert!(plan.iter().all(|d| d.tasks.is_empty()));
    }
}
