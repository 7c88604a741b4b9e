// Itinera — travel-itinerary request form engine
// UI-agnostic validate / submit / summarize flow behind a view-binding trait

pub mod config;
pub mod controller;
pub mod field;
pub mod snapshot;
pub mod summary;
pub mod view;
pub mod webhook;

// Re-export the engine surface
pub use config::FormConfig;
pub use controller::{FormController, SubmissionReport, SubmitOutcome};
pub use field::{FieldId, FieldSpec, TravelMode, FIELD_SPECS};
pub use snapshot::{FormSnapshot, TripRequest};
pub use summary::{render_summary, summary_entries};
pub use view::{EmailStatus, FormView};
pub use webhook::{SubmissionAck, WebhookClient, WebhookError};

// Re-export the shared validators for callers that only need the checks
pub use itinera_validation as validation;
