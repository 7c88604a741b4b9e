// File: src/view.rs
// Purpose: View-binding trait between the engine and the hosting page

use crate::field::FieldId;

/// Email delivery indicator shown after a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailStatus {
    Sent,
    NotSent,
}

impl EmailStatus {
    /// Text the indicator element carries
    pub fn text(&self) -> &'static str {
        match self {
            EmailStatus::Sent => "Email sent",
            EmailStatus::NotSent => "Email not sent",
        }
    }
}

/// Page surface the engine drives
///
/// A browser binding implements this against the real document; tests use an
/// in-memory fake. The engine never touches element lookup directly, so the
/// validation and submission logic runs identically against either.
pub trait FormView {
    /// Current raw value of a field; empty string when the element is missing
    fn field_value(&self, field: FieldId) -> String;

    /// Wire code of the checked mode-of-travel option, if any
    fn selected_mode(&self) -> Option<String>;

    /// Write a field's error slot; an empty message clears it
    fn set_field_error(&mut self, field: FieldId, message: &str);

    /// Write the mode-of-travel error slot; an empty message clears it
    fn set_mode_error(&mut self, message: &str);

    /// Move focus to the input associated with the first populated error slot
    fn focus_first_error(&mut self);

    /// Toggle the submit control and swap its label
    fn set_busy(&mut self, busy: bool, label: &str);

    /// Insert the summary fragment, reveal the panel, scroll it into view
    fn show_summary(&mut self, html: &str);

    /// Hide the summary panel and drop its contents
    fn hide_summary(&mut self);

    /// Set or clear the email delivery indicator
    fn set_email_status(&mut self, status: Option<EmailStatus>);

    /// Raise a blocking alert
    fn alert(&mut self, message: &str);
}
