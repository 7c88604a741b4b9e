// Itinera CLI — fill the itinerary form from flags and run the submit flow
// against a terminal view

use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use itinera_form::{
    EmailStatus, FieldId, FormConfig, FormController, FormView, SubmitOutcome,
};

#[derive(Parser, Debug)]
#[command(
    name = "itinera",
    about = "Submit a travel-itinerary request to the configured webhook"
)]
struct Args {
    /// Starting location
    #[arg(long = "from", value_name = "PLACE")]
    starting_location: String,

    /// Destination
    #[arg(long = "to", value_name = "PLACE")]
    destination: String,

    /// Number of days (1-365)
    #[arg(long)]
    days: String,

    /// Number of travelers (1-99)
    #[arg(long)]
    travelers: String,

    /// Budget; zero is allowed
    #[arg(long)]
    budget: String,

    /// Mode of travel: bus, train, flight, or car
    #[arg(long)]
    mode: Option<String>,

    /// Contact email for the itinerary
    #[arg(long)]
    email: String,

    /// Free-text preferences, omitted from the request when empty
    #[arg(long, default_value = "")]
    preferences: String,

    /// Path to the engine configuration
    #[arg(long, default_value = "itinera.toml")]
    config: PathBuf,
}

/// Terminal rendition of the page surface
struct TerminalView {
    values: HashMap<FieldId, String>,
    mode: Option<String>,
}

impl TerminalView {
    fn from_args(args: &Args) -> Self {
        let mut values = HashMap::new();
        values.insert(FieldId::StartingLocation, args.starting_location.clone());
        values.insert(FieldId::Destination, args.destination.clone());
        values.insert(FieldId::NumberOfDays, args.days.clone());
        values.insert(FieldId::NumberOfTravelers, args.travelers.clone());
        values.insert(FieldId::Budget, args.budget.clone());
        values.insert(FieldId::Email, args.email.clone());
        values.insert(FieldId::AdditionalPreferences, args.preferences.clone());
        Self {
            values,
            mode: args.mode.clone(),
        }
    }
}

impl FormView for TerminalView {
    fn field_value(&self, field: FieldId) -> String {
        self.values.get(&field).cloned().unwrap_or_default()
    }

    fn selected_mode(&self) -> Option<String> {
        self.mode.clone()
    }

    fn set_field_error(&mut self, field: FieldId, message: &str) {
        if !message.is_empty() {
            eprintln!("{}: {}", field.label(), message);
        }
    }

    fn set_mode_error(&mut self, message: &str) {
        if !message.is_empty() {
            eprintln!("Mode of travel: {}", message);
        }
    }

    fn focus_first_error(&mut self) {}

    fn set_busy(&mut self, busy: bool, label: &str) {
        if busy {
            println!("{}", label);
        }
    }

    fn show_summary(&mut self, html: &str) {
        println!("--- Trip summary ---");
        println!("{}", html);
    }

    fn hide_summary(&mut self) {}

    fn set_email_status(&mut self, status: Option<EmailStatus>) {
        if let Some(status) = status {
            println!("{}", status.text());
        }
    }

    fn alert(&mut self, message: &str) {
        eprintln!("{}", message);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let config = FormConfig::load(&args.config)?;
    let controller = FormController::new(config)?;
    let mut view = TerminalView::from_args(&args);

    match controller.submit(&mut view).await {
        SubmitOutcome::Rejected => anyhow::bail!("form is invalid; nothing was sent"),
        SubmitOutcome::Completed(report) if !report.succeeded => {
            anyhow::bail!("delivery failed; trip kept locally")
        }
        SubmitOutcome::Completed(_) => Ok(()),
    }
}
