//! Per-section row mappers
//!
//! Each mapper turns one positional CSV row into at most one record.
//! `Ok(None)` drops the row (too few columns, missing title, bad date,
//! unknown habit); an `Err` is reserved for numeric fields that are present
//! but unparsable, which aborts the conversion.

use crate::dates::convert_date;
use crate::error::{ConvertError, ConvertResult};
use crate::frequency::decode_frequency;
use crate::models::{DailySummary, Habit, HabitLog, MetricLog, Profile, Task};
use crate::section::Section;
use std::collections::HashMap;
use std::str::FromStr;
use tracing::debug;

const PROFILE_MIN_FIELDS: usize = 5;
const HABIT_MIN_FIELDS: usize = 5;
const HABIT_LOG_MIN_FIELDS: usize = 3;
const TASK_MIN_FIELDS: usize = 7;
const METRIC_MIN_FIELDS: usize = 3;

const DEFAULT_XP_REWARD: i64 = 10;
const DEFAULT_LOG_STATUS: &str = "skipped";
const DEFAULT_PRIORITY: &str = "medium";
const BAD_HABIT_TYPE: &str = "resistance";

/// One data row with its origin, for positional access and error context
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    pub section: Section,
    /// 1-based line number in the input file
    pub line: usize,
    pub fields: &'a [String],
}

impl<'a> Row<'a> {
    pub fn new(section: Section, line: usize, fields: &'a [String]) -> Self {
        Self {
            section,
            line,
            fields,
        }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field at `index`, empty when the row is shorter
    pub fn field(&self, index: usize) -> &'a str {
        self.fields.get(index).map(String::as_str).unwrap_or("")
    }

    /// Field as owned text, `None` when empty
    pub fn text(&self, index: usize) -> Option<String> {
        let value = self.field(index);
        (!value.is_empty()).then(|| value.to_string())
    }

    /// Case-insensitive "yes"
    pub fn is_yes(&self, index: usize) -> bool {
        self.field(index).eq_ignore_ascii_case("yes")
    }

    /// Field lower-cased, `default` when empty
    pub fn lower_or(&self, index: usize, default: &str) -> String {
        match self.field(index) {
            "" => default.to_string(),
            value => value.to_lowercase(),
        }
    }

    /// Numeric field, `None` when empty
    pub fn number<T: FromStr>(&self, index: usize) -> ConvertResult<Option<T>> {
        match self.field(index) {
            "" => Ok(None),
            value => value
                .parse::<T>()
                .map(Some)
                .map_err(|_| self.invalid_number(index, value)),
        }
    }

    /// Numeric field, `default` when empty
    pub fn number_or<T: FromStr>(&self, index: usize, default: T) -> ConvertResult<T> {
        Ok(self.number(index)?.unwrap_or(default))
    }

    fn invalid_number(&self, index: usize, value: &str) -> ConvertError {
        ConvertError::InvalidNumber {
            section: self.section,
            line: self.line,
            column: index + 1,
            value: value.to_string(),
        }
    }

    fn skip(&self, reason: &str) {
        debug!("Skipping {} row at line {}: {}", self.section, self.line, reason);
    }
}

/// PROFILE: level, xp, hp, max_hp, day_start_hour
pub fn map_profile(row: &Row) -> ConvertResult<Option<Profile>> {
    if row.len() < PROFILE_MIN_FIELDS {
        row.skip("too few columns");
        return Ok(None);
    }

    let defaults = Profile::default();
    Ok(Some(Profile {
        level: row.number_or(0, defaults.level)?,
        xp: row.number_or(1, defaults.xp)?,
        hp: row.number_or(2, defaults.hp)?,
        max_hp: row.number_or(3, defaults.max_hp)?,
        day_start_hour: row.number_or(4, defaults.day_start_hour)?,
    }))
}

/// HABITS: title, type, frequency, xp_reward, description, archived
///
/// `index` is the number of habits already mapped; it becomes both the
/// synthetic id suffix and the sort order.
pub fn map_habit(row: &Row, index: usize) -> ConvertResult<Option<Habit>> {
    if row.len() < HABIT_MIN_FIELDS {
        row.skip("too few columns");
        return Ok(None);
    }
    let Some(title) = row.text(0) else {
        row.skip("missing title");
        return Ok(None);
    };

    let frequency_days = decode_frequency(row.field(2))
        .map_err(|e| row.invalid_number(2, &e.0))?;

    Ok(Some(Habit {
        id: habit_id(index),
        title,
        description: row.text(4),
        frequency_days,
        sort_order: index as i64,
        archived: row.is_yes(5),
        is_bad_habit: row.field(1).eq_ignore_ascii_case(BAD_HABIT_TYPE),
        xp_reward: row.number_or(3, DEFAULT_XP_REWARD)?,
    }))
}

/// Synthetic habit id for the habit at `index`
pub fn habit_id(index: usize) -> String {
    format!("habit_{}", index)
}

/// HABIT LOGS: habit title, date, status
///
/// `habit_ids` maps titles of habits parsed so far to their ids.
pub fn map_habit_log(row: &Row, habit_ids: &HashMap<String, String>) -> Option<HabitLog> {
    if row.len() < HABIT_LOG_MIN_FIELDS {
        row.skip("too few columns");
        return None;
    }
    let title = row.field(0);
    if title.is_empty() {
        row.skip("missing habit title");
        return None;
    }
    let Some(habit_id) = habit_ids.get(title) else {
        row.skip("unknown habit");
        return None;
    };
    let Some(date) = convert_date(row.field(1)) else {
        row.skip("invalid date");
        return None;
    };

    Some(HabitLog {
        habit_id: habit_id.clone(),
        date,
        status: row.lower_or(2, DEFAULT_LOG_STATUS),
    })
}

/// TASKS: title, priority, completed, completed_at, is_for_today, due_date, archived
pub fn map_task(row: &Row) -> Option<Task> {
    if row.len() < TASK_MIN_FIELDS {
        row.skip("too few columns");
        return None;
    }
    let Some(title) = row.text(0) else {
        row.skip("missing title");
        return None;
    };

    Some(Task {
        title,
        priority: row.lower_or(1, DEFAULT_PRIORITY),
        completed: row.is_yes(2),
        completed_at: completion_date(row.field(3)),
        is_for_today: row.is_yes(4),
        due_date: convert_date(row.field(5)),
        archived: row.is_yes(6),
    })
}

/// Date portion of an ISO timestamp (text before the first `T`)
fn completion_date(timestamp: &str) -> Option<String> {
    if timestamp.is_empty() {
        return None;
    }
    timestamp.split('T').next().map(str::to_string)
}

/// DAILY SUMMARIES: date, mood_score, notes, xp_earned, hp_lost
pub fn map_daily_summary(row: &Row) -> ConvertResult<Option<DailySummary>> {
    if row.field(0).is_empty() {
        row.skip("missing date");
        return Ok(None);
    }
    let Some(date) = convert_date(row.field(0)) else {
        row.skip("invalid date");
        return Ok(None);
    };

    Ok(Some(DailySummary {
        date,
        mood_score: row.number(1)?,
        notes: row.text(2),
        xp_earned: row.number_or(3, 0)?,
        hp_lost: row.number_or(4, 0)?,
    }))
}

/// METRICS: metric_id, date, value
pub fn map_metric_log(row: &Row) -> ConvertResult<Option<MetricLog>> {
    if row.len() < METRIC_MIN_FIELDS {
        row.skip("too few columns");
        return Ok(None);
    }
    let Some(metric_id) = row.text(0) else {
        row.skip("missing metric id");
        return Ok(None);
    };
    let Some(date) = convert_date(row.field(1)) else {
        row.skip("invalid date");
        return Ok(None);
    };

    // JSON has no NaN or infinity; serde_json would write them as null
    let value: f64 = row.number_or(2, 0.0)?;
    if !value.is_finite() {
        return Err(row.invalid_number(2, row.field(2)));
    }

    Ok(Some(MetricLog {
        metric_id,
        date,
        value,
    }))
}
