//! CSV export → import document conversion
//!
//! A single pass over the lines of the export. Section markers switch the
//! active section, the first row after each marker is the (ignored) column
//! header, and every later row goes through that section's mapper.

use crate::csv_row::{is_blank, split_fields};
use crate::error::{ConvertError, ConvertResult};
use crate::mappers::{
    map_daily_summary, map_habit, map_habit_log, map_metric_log, map_profile, map_task, Row,
};
use crate::models::LifeOsExport;
use crate::section::Section;
use crate::summary::ConversionSummary;
use lifeos_common::write_atomic;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Fold state for one conversion run
#[derive(Debug, Default)]
pub struct Converter {
    section: Option<Section>,
    header_consumed: bool,
    /// Habit title → synthetic id, for habits parsed so far
    habit_ids: HashMap<String, String>,
    export: LifeOsExport,
}

impl Converter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently active section, if any marker has been seen
    pub fn section(&self) -> Option<Section> {
        self.section
    }

    /// Process one raw line; `line_no` is 1-based and used for diagnostics
    pub fn feed_line(&mut self, line_no: usize, raw: &str) -> ConvertResult<()> {
        let line = raw.trim();

        if let Some(section) = Section::detect(line) {
            debug!("Line {}: entering {} section", line_no, section);
            self.section = Some(section);
            self.header_consumed = false;
            return Ok(());
        }

        if line.is_empty() {
            return Ok(());
        }

        let fields = split_fields(line);
        if is_blank(&fields) {
            return Ok(());
        }

        let Some(section) = self.section else {
            debug!("Line {}: ignoring row outside any section", line_no);
            return Ok(());
        };

        if !self.header_consumed {
            // Rows that look like an unrecognized marker never count as a header
            if !fields[0].starts_with("===") {
                self.header_consumed = true;
            }
            return Ok(());
        }

        self.map_row(Row::new(section, line_no, &fields))
    }

    fn map_row(&mut self, row: Row) -> ConvertResult<()> {
        match row.section {
            Section::Profile => {
                if let Some(profile) = map_profile(&row)? {
                    self.export.profile = Some(profile);
                }
            }
            Section::Habits => {
                if let Some(habit) = map_habit(&row, self.export.habits.len())? {
                    self.habit_ids.insert(habit.title.clone(), habit.id.clone());
                    self.export.habits.push(habit);
                }
            }
            Section::HabitLogs => {
                if let Some(log) = map_habit_log(&row, &self.habit_ids) {
                    self.export.habit_logs.push(log);
                }
            }
            Section::Tasks => {
                if let Some(task) = map_task(&row) {
                    self.export.tasks.push(task);
                }
            }
            Section::DailySummaries => {
                if let Some(summary) = map_daily_summary(&row)? {
                    self.export.daily_summaries.push(summary);
                }
            }
            Section::Metrics => {
                if let Some(metric) = map_metric_log(&row)? {
                    self.export.metric_logs.push(metric);
                }
            }
        }
        Ok(())
    }

    /// Finish the run and return the assembled document
    pub fn finish(self) -> LifeOsExport {
        self.export
    }
}

/// Convert the full text of a CSV export
pub fn convert_str(content: &str) -> ConvertResult<LifeOsExport> {
    let content = content.strip_prefix(BYTE_ORDER_MARK).unwrap_or(content);

    let mut converter = Converter::new();
    for (index, line) in content.split('\n').enumerate() {
        converter.feed_line(index + 1, line)?;
    }
    Ok(converter.finish())
}

/// Convert `csv_path` and write the JSON document to `json_path`
///
/// The output is only written once the whole input converted successfully.
pub fn convert_file(csv_path: &Path, json_path: &Path) -> ConvertResult<ConversionSummary> {
    if !csv_path.exists() {
        return Err(ConvertError::InputNotFound(csv_path.to_path_buf()));
    }

    info!("Reading CSV from {}", csv_path.display());
    let content = std::fs::read_to_string(csv_path)?;

    let export = convert_str(&content)?;
    let json = export.to_json_pretty()?;

    info!("Writing JSON to {}", json_path.display());
    write_atomic(json_path, json.as_bytes())?;

    Ok(ConversionSummary::new(&export, json_path))
}
