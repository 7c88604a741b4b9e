// File: src/controller.rs
// Purpose: Submission state machine driving a FormView
//
// Lifecycle per submit: Idle -> Validating -> (Invalid -> Idle) or
// (Submitting -> Success | Failure) -> Idle. The cleanup step at the end of
// `submit` runs on every branch out of Submitting.

use crate::config::FormConfig;
use crate::field::{field_spec, FieldId, FIELD_SPECS};
use crate::snapshot::{FormSnapshot, TripRequest};
use crate::summary::render_summary;
use crate::view::{EmailStatus, FormView};
use crate::webhook::{WebhookClient, WebhookError};
use itinera_validation::validate_mode_selected;

/// Terminal result of one delivered (or attempted) submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionReport {
    pub succeeded: bool,
    pub email_sent: bool,
}

/// What happened to a submit request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; no request was issued
    Rejected,
    /// A request went out; the report covers both delivery branches
    Completed(SubmissionReport),
}

/// Drives validation, submission, and rendering against a [`FormView`]
pub struct FormController {
    config: FormConfig,
    client: WebhookClient,
}

impl FormController {
    pub fn new(config: FormConfig) -> Result<Self, WebhookError> {
        let client = WebhookClient::new(&config.webhook)?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    /// Re-validate a single field on an input event, updating only its slot
    pub fn handle_input<V: FormView>(&self, view: &mut V, field: FieldId) {
        if let Some(spec) = field_spec(field) {
            let value = view.field_value(field);
            match (spec.validate)(&value) {
                Ok(()) => view.set_field_error(field, ""),
                Err(message) => view.set_field_error(field, &message),
            }
        }
    }

    /// Picking any mode option clears the mode error
    pub fn handle_mode_change<V: FormView>(&self, view: &mut V) {
        view.set_mode_error("");
    }

    /// Run every field validator plus the mode check, writing error slots.
    /// Returns true when the whole form is valid.
    pub fn validate_all<V: FormView>(&self, view: &mut V) -> bool {
        let mut valid = true;

        for spec in FIELD_SPECS {
            let value = view.field_value(spec.id);
            match (spec.validate)(&value) {
                Ok(()) => view.set_field_error(spec.id, ""),
                Err(message) => {
                    view.set_field_error(spec.id, &message);
                    valid = false;
                }
            }
        }

        let mode = view.selected_mode();
        match validate_mode_selected(mode.as_deref()) {
            Ok(()) => view.set_mode_error(""),
            Err(message) => {
                view.set_mode_error(&message);
                valid = false;
            }
        }

        valid
    }

    /// Full submit flow: clear slots, validate, send, render, cleanup
    pub async fn submit<V: FormView>(&self, view: &mut V) -> SubmitOutcome {
        self.clear_errors(view);

        if !self.validate_all(view) {
            view.focus_first_error();
            return SubmitOutcome::Rejected;
        }

        view.set_busy(true, &self.config.submit.busy_label);

        let snapshot = FormSnapshot::read_from(view);
        let payload = TripRequest::from_snapshot(&snapshot);
        tracing::debug!(destination = %payload.destination, "submitting trip request");

        let report = match self.client.send(&payload).await {
            Ok(ack) => {
                self.render(view, &snapshot);
                let email_sent = ack.email_sent != Some(false);
                view.set_email_status(Some(if email_sent {
                    EmailStatus::Sent
                } else {
                    EmailStatus::NotSent
                }));
                SubmissionReport {
                    succeeded: true,
                    email_sent,
                }
            }
            Err(err) => {
                tracing::error!("webhook error: {err}");
                // The summary still renders from the local snapshot; only
                // delivery failed.
                self.render(view, &snapshot);
                view.set_email_status(Some(EmailStatus::NotSent));
                view.alert(
                    "Your trip was saved locally. There was a problem sending \
                     to the server — please try again later.",
                );
                SubmissionReport {
                    succeeded: false,
                    email_sent: false,
                }
            }
        };

        // Cleanup runs on every branch out of Submitting
        view.set_busy(false, &self.config.submit.idle_label);

        SubmitOutcome::Completed(report)
    }

    /// Clear errors, summary, and status after the host's native reset.
    /// Deferred one scheduling tick so the native reset lands first.
    pub async fn handle_reset<V: FormView>(&self, view: &mut V) {
        tokio::task::yield_now().await;
        self.clear_errors(view);
        view.hide_summary();
        view.set_email_status(None);
    }

    fn clear_errors<V: FormView>(&self, view: &mut V) {
        for spec in FIELD_SPECS {
            view.set_field_error(spec.id, "");
        }
        view.set_mode_error("");
    }

    fn render<V: FormView>(&self, view: &mut V, snapshot: &FormSnapshot) {
        let html = render_summary(snapshot, &self.config.summary.currency_symbol);
        view.show_summary(&html);
    }
}
