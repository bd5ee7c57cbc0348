use std::fmt;
use std::sync::Arc;

use billed_core::attachment::{validate_attachment, AttachmentDescriptor, AttachmentError};
use billed_core::bill::{Bill, BillStatus, CreateBill};
use billed_core::identity::Identity;
use billed_store::BillStore;

use crate::error::SubmissionError;

/// Lifecycle of one submission draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftState {
    Editing,
    Submitting,
    Submitted,
    Failed,
}

impl DraftState {
    pub fn as_str(&self) -> &'static str {
        match self {
            DraftState::Editing => "editing",
            DraftState::Submitting => "submitting",
            DraftState::Submitted => "submitted",
            DraftState::Failed => "failed",
        }
    }
}

impl fmt::Display for DraftState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One editable field of the draft, with its typed value.
#[derive(Debug, Clone, PartialEq)]
pub enum DraftField {
    ExpenseType(String),
    Name(String),
    Date(String),
    Amount(f64),
    Vat(f64),
    Pct(i64),
    Commentary(String),
}

#[derive(Debug, Clone, Default)]
struct DraftFields {
    expense_type: Option<String>,
    name: Option<String>,
    date: Option<String>,
    amount: Option<f64>,
    vat: Option<f64>,
    pct: Option<i64>,
    commentary: Option<String>,
}

/// Write side of the bill lifecycle: stages one draft, validates its
/// attachment, and hands the assembled record to the store exactly once.
///
/// State machine: `Editing → Submitting → {Submitted, Failed}`. A failed
/// draft returns to `Editing` on the next user action; a submitted one
/// is done, callers build a fresh controller for the next bill.
pub struct NewBill {
    store: Arc<dyn BillStore>,
    identity: Identity,
    state: DraftState,
    attachment: Option<AttachmentDescriptor>,
    fields: DraftFields,
}

impl NewBill {
    pub fn new(store: Arc<dyn BillStore>, identity: Identity) -> Self {
        Self {
            store,
            identity,
            state: DraftState::Editing,
            attachment: None,
            fields: DraftFields::default(),
        }
    }

    pub fn state(&self) -> DraftState {
        self.state
    }

    /// The attachment currently staged on the draft, if any.
    pub fn attachment(&self) -> Option<&AttachmentDescriptor> {
        self.attachment.as_ref()
    }

    /// Validate and stage a chosen receipt file.
    ///
    /// A rejected file also clears whatever was staged before: the draft
    /// never carries an attachment that did not pass validation.
    pub fn select_attachment(
        &mut self,
        descriptor: AttachmentDescriptor,
    ) -> Result<(), AttachmentError> {
        self.recover_from_failure();
        match validate_attachment(&descriptor) {
            Ok(()) => {
                self.attachment = Some(descriptor);
                Ok(())
            }
            Err(e) => {
                self.attachment = None;
                Err(e)
            }
        }
    }

    /// Stage one editable field. The value is taken as-is; the draft is
    /// only checked as a whole at submission.
    pub fn update_field(&mut self, field: DraftField) {
        self.recover_from_failure();
        match field {
            DraftField::ExpenseType(v) => self.fields.expense_type = Some(v),
            DraftField::Name(v) => self.fields.name = Some(v),
            DraftField::Date(v) => self.fields.date = Some(v),
            DraftField::Amount(v) => self.fields.amount = Some(v),
            DraftField::Vat(v) => self.fields.vat = Some(v),
            DraftField::Pct(v) => self.fields.pct = Some(v),
            DraftField::Commentary(v) => self.fields.commentary = Some(v),
        }
    }

    /// Send the draft to the store.
    ///
    /// Guards run before any network call: a draft that is mid-flight,
    /// already submitted, or missing its attachment fails synchronously
    /// without touching the store. One call, one create; no retry.
    pub async fn submit(&mut self) -> Result<Bill, SubmissionError> {
        match self.state {
            DraftState::Submitting => return Err(SubmissionError::SubmissionInProgress),
            DraftState::Submitted => return Err(SubmissionError::AlreadySubmitted),
            DraftState::Editing | DraftState::Failed => {}
        }
        self.recover_from_failure();

        let attachment = match &self.attachment {
            Some(a) => a.clone(),
            None => return Err(SubmissionError::MissingAttachment),
        };

        self.state = DraftState::Submitting;
        let input = CreateBill {
            expense_type: self.fields.expense_type.clone(),
            name: self.fields.name.clone(),
            date: self.fields.date.clone(),
            amount: self.fields.amount,
            vat: self.fields.vat,
            pct: self.fields.pct,
            commentary: self.fields.commentary.clone(),
            file_url: None,
            file_name: Some(attachment.file_name),
            status: BillStatus::Pending,
            email: self.identity.email.clone(),
        };

        match self.store.create(&input).await {
            Ok(bill) => {
                self.state = DraftState::Submitted;
                Ok(bill)
            }
            Err(e) => {
                self.state = DraftState::Failed;
                Err(SubmissionError::from(e))
            }
        }
    }

    fn recover_from_failure(&mut self) {
        if self.state == DraftState::Failed {
            self.state = DraftState::Editing;
        }
    }
}
