//! Contact form submission: the payload handed to the email relay and the
//! submit button's feedback states.

use crate::error::FxError;

pub const SENDING_LABEL: &str = "SENDING...";
pub const SENT_LABEL: &str = "MESSAGE SENT";
pub const FAILED_LABEL: &str = "FAILED. TRY AGAIN.";

pub const SENT_REVERT_MS: i32 = 2000;
pub const FAILED_REVERT_MS: i32 = 3000;

const GOLD: &str = "#bf9b30";
const MAROON: &str = "#5e0b15";
const RED: &str = "red";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactMessage {
    pub from_name: String,
    pub from_email: String,
    pub phone: String,
    pub message: String,
    pub timestamp: String,
}

impl ContactMessage {
    /// Template parameters keyed the way the relay template expects.
    pub fn fields(&self) -> [(&'static str, &str); 5] {
        [
            ("from_name", &self.from_name),
            ("from_email", &self.from_email),
            ("phone", &self.phone),
            ("message", &self.message),
            ("timestamp", &self.timestamp),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitPhase {
    Idle,
    Sending,
    Sent,
    Failed,
}

/// Everything the adapter writes onto the submit button. `None` colours
/// clear the inline style.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonView {
    pub label: String,
    pub background: Option<&'static str>,
    pub color: Option<&'static str>,
    pub opacity: f64,
    pub disabled: bool,
}

/// Follow-up work after the relay answers.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub view: ButtonView,
    pub revert_after_ms: i32,
    /// Clear the form fields now.
    pub reset_form: bool,
    /// Close the contact modal when reverting.
    pub close_modal: bool,
}

#[derive(Debug, Clone)]
pub struct SubmitButton {
    original_label: String,
    phase: SubmitPhase,
}

impl SubmitButton {
    pub fn new(original_label: impl Into<String>) -> Self {
        Self {
            original_label: original_label.into(),
            phase: SubmitPhase::Idle,
        }
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    /// Start a submission. `None` while one is already in flight or its
    /// result is still showing.
    pub fn begin(&mut self) -> Option<ButtonView> {
        if self.phase != SubmitPhase::Idle {
            return None;
        }
        self.phase = SubmitPhase::Sending;
        Some(ButtonView {
            label: SENDING_LABEL.into(),
            background: None,
            color: None,
            opacity: 0.7,
            disabled: true,
        })
    }

    pub fn finish(&mut self, result: &Result<(), FxError>) -> Outcome {
        match result {
            Ok(()) => {
                self.phase = SubmitPhase::Sent;
                Outcome {
                    view: ButtonView {
                        label: SENT_LABEL.into(),
                        background: Some(GOLD),
                        color: Some(MAROON),
                        opacity: 0.7,
                        disabled: true,
                    },
                    revert_after_ms: SENT_REVERT_MS,
                    reset_form: true,
                    close_modal: true,
                }
            }
            Err(_) => {
                self.phase = SubmitPhase::Failed;
                Outcome {
                    view: ButtonView {
                        label: FAILED_LABEL.into(),
                        background: Some(RED),
                        color: None,
                        opacity: 0.7,
                        disabled: true,
                    },
                    revert_after_ms: FAILED_REVERT_MS,
                    reset_form: false,
                    close_modal: false,
                }
            }
        }
    }

    pub fn revert(&mut self) -> ButtonView {
        self.phase = SubmitPhase::Idle;
        ButtonView {
            label: self.original_label.clone(),
            background: None,
            color: None,
            opacity: 1.0,
            disabled: false,
        }
    }
}
