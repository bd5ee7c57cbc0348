use std::sync::Arc;

use billed_core::bill::{Bill, BillStatus};
use billed_core::identity::Identity;
use billed_store::BillStore;

use crate::error::ReviewError;

/// Verdict an admin hands down on a submitted bill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewDecision {
    Accept,
    Refuse,
}

impl ReviewDecision {
    fn status(self) -> BillStatus {
        match self {
            ReviewDecision::Accept => BillStatus::Accepted,
            ReviewDecision::Refuse => BillStatus::Refused,
        }
    }
}

/// Admin side of the lifecycle: accepts or refuses a submitted bill,
/// persisting the verdict and an optional comment through the store.
pub struct BillReview {
    store: Arc<dyn BillStore>,
    identity: Identity,
}

impl BillReview {
    pub fn new(store: Arc<dyn BillStore>, identity: Identity) -> Self {
        Self { store, identity }
    }

    /// Persist a decision on one bill. Transport failures classify the
    /// same way a listing fetch does.
    pub async fn decide(
        &self,
        bill: &Bill,
        decision: ReviewDecision,
        commentary: Option<String>,
    ) -> Result<Bill, ReviewError> {
        if !self.identity.is_admin() {
            return Err(ReviewError::NotAllowed);
        }
        if bill.id.is_none() {
            return Err(ReviewError::MissingId);
        }

        let mut updated = bill.clone();
        updated.status = decision.status();
        updated.comment_admin = commentary;
        self.store.update(&updated).await.map_err(ReviewError::from)
    }
}
