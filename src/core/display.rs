//! Display snapshot derived from a session.
//!
//! Nothing here is stored state: a snapshot is recomputed from the session
//! whenever a front end wants to render.

use super::session::Session;
use super::settings::Labels;
use super::state::Adjustment;
use crate::format::{grouped, number_text};
use serde::Serialize;
use std::fmt;

/// A history row as shown to the user, most recent first.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HistoryRow {
    /// Index to pass to `Session::delete_history_entry`
    pub display_index: usize,
    pub label: String,
    pub value: String,
}

/// Read-only view of a session for rendering.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Snapshot {
    pub title: String,
    pub input_caption: String,
    pub result_caption: String,
    pub history_caption: String,
    /// `expression + input_buffer`
    pub input_line: String,
    /// The result, or `0` when absent
    pub result_line: String,
    /// Present only while a percentage is being entered
    pub banner: Option<String>,
    pub history: Vec<HistoryRow>,
    pub empty_history: String,
}

impl Snapshot {
    /// Derive a snapshot from `session`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shopcalc::core::{Labels, Session, Snapshot};
    ///
    /// let session = Session::new().with_expression("12+").with_input_buffer("3");
    /// let snapshot = Snapshot::of(&session, &Labels::english());
    ///
    /// assert_eq!(snapshot.input_line, "12+3");
    /// assert_eq!(snapshot.result_line, "0");
    /// assert!(snapshot.banner.is_none());
    /// ```
    pub fn of(session: &Session, labels: &Labels) -> Self {
        let banner = session.mode().adjustment().map(|kind| {
            let name = match kind {
                Adjustment::Margin => &labels.margin,
                Adjustment::Discount => &labels.discount,
            };
            format!("[{} {}] {}", name, labels.mode, labels.percent_prompt)
        });

        let history = session
            .history()
            .iter_recent()
            .map(|(display_index, entry)| HistoryRow {
                display_index,
                label: entry.label.clone(),
                value: grouped(entry.value),
            })
            .collect();

        Self {
            title: labels.title.clone(),
            input_caption: labels.input.clone(),
            result_caption: labels.result.clone(),
            history_caption: labels.history.clone(),
            input_line: session.full_expression(),
            result_line: number_text(session.result().unwrap_or(0.0)),
            banner,
            history,
            empty_history: labels.empty_history.clone(),
        }
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}: {}", self.input_caption, self.input_line)?;
        writeln!(f, "{}: {}", self.result_caption, self.result_line)?;
        if let Some(banner) = &self.banner {
            writeln!(f, "{banner}")?;
        }
        writeln!(f, "{}:", self.history_caption)?;
        if self.history.is_empty() {
            writeln!(f, "  {}", self.empty_history)?;
        }
        for row in &self.history {
            writeln!(f, "  [{}] {} = {}", row.display_index, row.label, row.value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{handle_input, History, HistoryEntry, Input};

    #[test]
    fn result_line_defaults_to_zero() {
        let snapshot = Snapshot::of(&Session::new(), &Labels::english());
        assert_eq!(snapshot.result_line, "0");
        assert!(snapshot.history.is_empty());
    }

    #[test]
    fn banner_names_active_adjustment() {
        let session = Session::new().with_result(Some(100.0));
        let session = handle_input(&session, Input::from_char('s').unwrap())
            .unwrap()
            .session;

        let snapshot = Snapshot::of(&session, &Labels::english());
        assert_eq!(
            snapshot.banner.as_deref(),
            Some("[discount mode] enter % then Enter")
        );

        let snapshot = Snapshot::of(&session, &Labels::korean());
        assert_eq!(snapshot.banner.as_deref(), Some("[할인 모드] % 입력 후 Enter"));
    }

    #[test]
    fn history_rows_are_most_recent_first() {
        let history = History::new()
            .record(HistoryEntry::new("first", 1000.0))
            .record(HistoryEntry::new("second", 2.5));
        let session = Session::new().with_history(history);

        let snapshot = Snapshot::of(&session, &Labels::english());
        assert_eq!(snapshot.history.len(), 2);
        assert_eq!(snapshot.history[0].label, "second");
        assert_eq!(snapshot.history[0].display_index, 0);
        assert_eq!(snapshot.history[1].label, "first");
        assert_eq!(snapshot.history[1].value, "1,000");
    }

    #[test]
    fn rendered_text_includes_empty_history_notice() {
        let text = Snapshot::of(&Session::new(), &Labels::english()).to_string();
        assert!(text.contains("result: 0"));
        assert!(text.contains("no history"));
    }
}
