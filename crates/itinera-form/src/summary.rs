// File: src/summary.rs
// Purpose: Render the submitted values as an escaped definition list

use crate::field::{mode_label, FieldId};
use crate::snapshot::FormSnapshot;
use maud::html;

/// Ordered (label, value) pairs for the summary panel
///
/// Fixed order: starting location, destination, days, travelers, budget
/// (currency-prefixed), mode of travel, email, then additional preferences
/// only when non-empty. Values are shown as entered, not normalized.
pub fn summary_entries(snapshot: &FormSnapshot, currency_symbol: &str) -> Vec<(&'static str, String)> {
    let mode = snapshot
        .mode_of_travel
        .as_deref()
        .map(mode_label)
        .unwrap_or_default();

    let mut entries = vec![
        (
            FieldId::StartingLocation.label(),
            snapshot.starting_location.clone(),
        ),
        (FieldId::Destination.label(), snapshot.destination.clone()),
        (
            FieldId::NumberOfDays.label(),
            snapshot.number_of_days.clone(),
        ),
        (
            FieldId::NumberOfTravelers.label(),
            snapshot.number_of_travelers.clone(),
        ),
        (
            FieldId::Budget.label(),
            format!("{}{}", currency_symbol, snapshot.budget),
        ),
        ("Mode of travel", mode),
        (FieldId::Email.label(), snapshot.email.clone()),
    ];

    let additional = snapshot.additional_preferences.trim();
    if !additional.is_empty() {
        entries.push((
            FieldId::AdditionalPreferences.label(),
            additional.to_string(),
        ));
    }

    entries
}

/// Render the summary as a `dt`/`dd` fragment, escaped by construction
pub fn render_summary(snapshot: &FormSnapshot, currency_symbol: &str) -> String {
    let entries = summary_entries(snapshot, currency_symbol);
    html! {
        @for (label, value) in &entries {
            dt { (label) }
            dd { (value) }
        }
    }
    .into_string()
}
