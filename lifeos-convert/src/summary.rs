//! Post-conversion report

use crate::models::LifeOsExport;
use std::fmt;
use std::path::{Path, PathBuf};

/// Counts and profile headline of a finished conversion
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionSummary {
    /// Profile level (default profile's level when the export had none)
    pub level: i64,
    pub xp: i64,
    pub habits: usize,
    pub habit_logs: usize,
    pub tasks: usize,
    pub daily_summaries: usize,
    pub metric_logs: usize,
    pub output: PathBuf,
}

impl ConversionSummary {
    pub fn new(export: &LifeOsExport, output: &Path) -> Self {
        let profile = export.profile.clone().unwrap_or_default();
        Self {
            level: profile.level,
            xp: profile.xp,
            habits: export.habits.len(),
            habit_logs: export.habit_logs.len(),
            tasks: export.tasks.len(),
            daily_summaries: export.daily_summaries.len(),
            metric_logs: export.metric_logs.len(),
            output: output.to_path_buf(),
        }
    }
}

impl fmt::Display for ConversionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "✓ Conversion complete!")?;
        writeln!(f, "   Profile: Level {}, XP: {}", self.level, self.xp)?;
        writeln!(f, "   Habits: {}", self.habits)?;
        writeln!(f, "   Habit Logs: {}", self.habit_logs)?;
        writeln!(f, "   Tasks: {}", self.tasks)?;
        writeln!(f, "   Daily Summaries: {}", self.daily_summaries)?;
        writeln!(f, "   Metric Logs: {}", self.metric_logs)?;
        write!(f, "   Output: {}", self.output.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converter::convert_str;

    #[test]
    fn test_summary_without_profile_uses_defaults() {
        let export = LifeOsExport::default();
        let summary = ConversionSummary::new(&export, Path::new("out.json"));
        assert_eq!(summary.level, 1);
        assert_eq!(summary.xp, 0);
        assert_eq!(summary.habits, 0);
    }

    #[test]
    fn test_summary_report_text() {
        let export = convert_str(
            "=== PROFILE ===\nh\n3,450,80,100,5\n=== HABITS ===\nh\nRun,Build,Daily,5,\n\
             === TASKS ===\nh\nA,,,,,,\nB,,,,,,\n",
        )
        .unwrap();
        let report = ConversionSummary::new(&export, Path::new("backup.json")).to_string();

        assert!(report.contains("Profile: Level 3, XP: 450"));
        assert!(report.contains("Habits: 1"));
        assert!(report.contains("Habit Logs: 0"));
        assert!(report.contains("Tasks: 2"));
        assert!(report.contains("Daily Summaries: 0"));
        assert!(report.contains("Metric Logs: 0"));
        assert!(report.ends_with("Output: backup.json"));
    }
}
