// Scheduler views, navigation direction and date label formats

use crate::error::{Error, Result};
use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

/// View granularity of the scheduler.
///
/// The page starts in `Day`; only an explicit view switch changes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SchedulerView {
    #[default]
    Day,
    Month,
}

impl SchedulerView {
    /// Every view, in view-toggle order.
    pub const ALL: [SchedulerView; 2] = [SchedulerView::Day, SchedulerView::Month];

    /// Position of this view's toggle control.
    pub fn index(self) -> usize {
        match self {
            SchedulerView::Day => 0,
            SchedulerView::Month => 1,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SchedulerView::Day => "day",
            SchedulerView::Month => "month",
        }
    }

    /// en-US label format: `Oct 16, 2026` for days, `Oct 2026` for months.
    pub fn date_label_format(self) -> &'static str {
        match self {
            SchedulerView::Day => "%b %-d, %Y",
            SchedulerView::Month => "%b %Y",
        }
    }

    /// Formats `date` the way this view labels it.
    pub fn format_date(self, date: NaiveDate) -> String {
        date.format(self.date_label_format()).to_string()
    }
}

impl fmt::Display for SchedulerView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SchedulerView {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "day" => Ok(SchedulerView::Day),
            "month" => Ok(SchedulerView::Month),
            _ => Err(Error::UnknownView(s.to_string())),
        }
    }
}

/// Direction of paged/time-based navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Parses a scheduler date label.
///
/// Accepts both the day form (`Oct 16, 2026`) and the month form
/// (`Oct 2026`, read as the first of the month).
pub fn parse_date_label(text: &str) -> Result<NaiveDate> {
    let text = text.trim();
    NaiveDate::parse_from_str(text, "%b %d, %Y")
        .or_else(|_| NaiveDate::parse_from_str(&format!("1 {}", text), "%d %b %Y"))
        .map_err(|_| Error::DateLabel(text.to_string()))
}

/// The label `text` should read as, given the `view` granularity.
///
/// The label's date is re-rendered in the view's format; a label already in
/// that format comes back unchanged.
pub fn expected_date_label(text: &str, view: SchedulerView) -> Result<String> {
    Ok(view.format_date(parse_date_label(text)?))
}
