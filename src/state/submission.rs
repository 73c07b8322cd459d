#[cfg(test)]
#[path = "submission_test.rs"]
mod submission_test;

use crate::net::types::ContactRequest;
use crate::state::alerts::{AlertId, AlertKind, AlertQueue};
use crate::state::errors::FieldErrors;
use crate::state::fields::{Field, FormFields};

/// Alert text when the request itself fails, as opposed to the backend
/// rejecting the submission with its own message.
pub const TRANSPORT_FAILURE_MESSAGE: &str =
    "An error occurred while sending your message. Please try again.";

/// Terminal result of one submission attempt.
///
/// The network layer converts every possible failure into one of these
/// variants, so the submit flow never has an error to propagate: each attempt
/// ends in exactly one call to [`ContactFormState::finish_submit`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// The backend accepted the submission.
    Accepted { message: String },
    /// The backend rejected it. `errors` is empty for business-rule
    /// rejections that carry no per-field detail.
    Rejected {
        message: String,
        errors: FieldErrors,
    },
    /// The request or response never yielded a structured verdict: network
    /// error, non-JSON body, and the like.
    TransportFailed,
}

/// The contact form submission state machine.
///
/// Owns the field values, per-field server errors, visible alerts, and the
/// busy flag, and applies every terminal outcome in one place. It has no DOM
/// or network dependencies; rendering layers adapt it to their framework and
/// drive the one suspension point (the network call) between
/// [`ContactFormState::begin_submit`] and [`ContactFormState::finish_submit`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactFormState {
    pub fields: FormFields,
    pub errors: FieldErrors,
    pub alerts: AlertQueue,
    busy: bool,
}

impl ContactFormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a submission attempt is in flight. The UI disables the submit
    /// trigger while this is set; `begin_submit` also guards on it.
    pub fn busy(&self) -> bool {
        self.busy
    }

    /// Applies a user edit: replace one field's value and clear that field's
    /// server error, leaving other fields' errors untouched.
    pub fn edit(&mut self, field: Field, value: String) {
        self.fields.set(field, value);
        self.errors.clear(field);
    }

    /// Starts a submission attempt.
    ///
    /// Returns `None` while an attempt is already in flight, so re-entrant
    /// calls cannot start a second request. Otherwise clears errors and
    /// alerts, raises the busy flag, and returns the trimmed snapshot to
    /// send. Every `Some` return must be paired with one later call to
    /// [`ContactFormState::finish_submit`].
    pub fn begin_submit(&mut self) -> Option<ContactRequest> {
        if self.busy {
            return None;
        }
        self.errors.clear_all();
        self.alerts.clear();
        self.busy = true;
        Some(self.fields.trimmed())
    }

    /// Applies the terminal outcome of the in-flight attempt.
    ///
    /// Success resets the fields; rejection keeps them for correction and
    /// installs the per-field errors; transport failure surfaces the generic
    /// fallback alert. The busy flag drops on every arm. Returns the id of a
    /// newly shown success alert so the caller can schedule its
    /// [`auto-dismissal`](crate::state::alerts::SUCCESS_DISMISS_MS).
    pub fn finish_submit(&mut self, outcome: SubmissionOutcome) -> Option<AlertId> {
        let scheduled = match outcome {
            SubmissionOutcome::Accepted { message } => {
                let id = self.alerts.show(AlertKind::Success, message);
                self.fields.reset();
                Some(id)
            }
            SubmissionOutcome::Rejected { message, errors } => {
                self.alerts.show(AlertKind::Danger, message);
                self.errors.set_all(errors);
                None
            }
            SubmissionOutcome::TransportFailed => {
                self.alerts
                    .show(AlertKind::Danger, TRANSPORT_FAILURE_MESSAGE);
                None
            }
        };
        self.busy = false;
        scheduled
    }

    /// Removes an alert, whether from the user's dismiss button or a timer
    /// firing after [`SUCCESS_DISMISS_MS`](crate::state::alerts::SUCCESS_DISMISS_MS).
    /// Absent ids are a no-op.
    pub fn dismiss_alert(&mut self, id: AlertId) {
        self.alerts.dismiss(id);
    }
}
