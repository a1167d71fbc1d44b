//! Records of the Life OS import document
//!
//! Field names and order match the JSON import schema.

use serde::{Deserialize, Serialize};

/// Version tag written into every document
pub const EXPORT_VERSION: &str = "1.0";

/// Player profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub level: i64,
    pub xp: i64,
    pub hp: i64,
    pub max_hp: i64,
    pub day_start_hour: i64,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            level: 1,
            xp: 0,
            hp: 100,
            max_hp: 100,
            day_start_hour: 4,
        }
    }
}

/// Habit definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Habit {
    /// Synthetic id, `habit_<index>`
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    /// Day-of-week codes, 0 = Sunday
    pub frequency_days: Vec<i64>,
    pub sort_order: i64,
    pub archived: bool,
    /// Derived from the "Resistance" habit type
    pub is_bad_habit: bool,
    pub xp_reward: i64,
}

/// One day's outcome for a habit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HabitLog {
    pub habit_id: String,
    /// `YYYY-MM-DD`
    pub date: String,
    pub status: String,
}

/// To-do item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub title: String,
    pub priority: String,
    pub completed: bool,
    /// Date portion of the completion timestamp
    pub completed_at: Option<String>,
    pub is_for_today: bool,
    pub due_date: Option<String>,
    pub archived: bool,
}

/// End-of-day journal entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySummary {
    pub date: String,
    pub mood_score: Option<i64>,
    pub notes: Option<String>,
    pub xp_earned: i64,
    pub hp_lost: i64,
}

/// Single reading of a tracked metric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricLog {
    pub metric_id: String,
    pub date: String,
    pub value: f64,
}

/// Complete import document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifeOsExport {
    pub version: String,
    pub profile: Option<Profile>,
    pub habits: Vec<Habit>,
    pub habit_logs: Vec<HabitLog>,
    pub tasks: Vec<Task>,
    pub daily_summaries: Vec<DailySummary>,
    pub metric_logs: Vec<MetricLog>,
}

impl Default for LifeOsExport {
    fn default() -> Self {
        Self {
            version: EXPORT_VERSION.to_string(),
            profile: None,
            habits: Vec::new(),
            habit_logs: Vec::new(),
            tasks: Vec::new(),
            daily_summaries: Vec::new(),
            metric_logs: Vec::new(),
        }
    }
}

impl LifeOsExport {
    /// Pretty-printed JSON (2-space indentation)
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
