//! Section markers of the Life OS CSV export
//!
//! The export is one file holding six record groups, each introduced by a
//! literal marker line such as `=== HABITS ===`.

use std::fmt;

/// One of the six record groups in an export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Profile,
    Habits,
    HabitLogs,
    Tasks,
    DailySummaries,
    Metrics,
}

impl Section {
    /// All sections in marker-detection order
    pub const ALL: [Section; 6] = [
        Section::Profile,
        Section::Habits,
        Section::HabitLogs,
        Section::Tasks,
        Section::DailySummaries,
        Section::Metrics,
    ];

    /// Literal marker introducing this section
    pub fn marker(self) -> &'static str {
        match self {
            Section::Profile => "=== PROFILE ===",
            Section::Habits => "=== HABITS ===",
            Section::HabitLogs => "=== HABIT LOGS ===",
            Section::Tasks => "=== TASKS ===",
            Section::DailySummaries => "=== DAILY SUMMARIES ===",
            Section::Metrics => "=== METRICS ===",
        }
    }

    /// Section whose marker appears anywhere in `line`, if any
    ///
    /// Substring match: a marker followed by trailing commas (as spreadsheet
    /// tools tend to write it) still switches sections.
    pub fn detect(line: &str) -> Option<Section> {
        Self::ALL.into_iter().find(|section| line.contains(section.marker()))
    }

    /// Human-readable name used in logs and error messages
    pub fn name(self) -> &'static str {
        match self {
            Section::Profile => "PROFILE",
            Section::Habits => "HABITS",
            Section::HabitLogs => "HABIT LOGS",
            Section::Tasks => "TASKS",
            Section::DailySummaries => "DAILY SUMMARIES",
            Section::Metrics => "METRICS",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
