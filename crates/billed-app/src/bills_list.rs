use std::sync::Arc;

use billed_core::bill::Bill;
use billed_core::formatter::format_bill;
use billed_store::BillStore;
use tracing::warn;

use crate::error::FetchError;

/// Request handed to the external attachment viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachmentPreview {
    pub url: String,
}

/// Signal consumed by the external router.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationIntent {
    NewBill,
}

/// Read side of the bill lifecycle: fetches the stored records, shapes
/// them, and serves them newest-first.
pub struct BillsList {
    store: Arc<dyn BillStore>,
}

impl BillsList {
    pub fn new(store: Arc<dyn BillStore>) -> Self {
        Self { store }
    }

    /// Fetch and shape the full list.
    ///
    /// A remote failure resolves to a classified `FetchError`; there is
    /// no retry. Records that fail shaping are dropped one by one and
    /// logged, never fatal. The survivors come back sorted by date,
    /// most recent first, equal dates keeping their store order.
    pub async fn load(&self) -> Result<Vec<Bill>, FetchError> {
        let raw = self.store.list().await.map_err(FetchError::from)?;

        let mut bills = Vec::with_capacity(raw.len());
        let mut dropped = 0usize;
        for record in &raw {
            match format_bill(record) {
                Ok(bill) => bills.push(bill),
                Err(e) => {
                    dropped += 1;
                    warn!(id = ?record.id, error = %e, "dropping malformed bill record");
                }
            }
        }
        if dropped > 0 {
            warn!(dropped, kept = bills.len(), "bill list had malformed records");
        }

        // Shaped dates are zero-padded, so comparing the strings compares
        // the days. sort_by is stable, which is what keeps ties in order.
        bills.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(bills)
    }

    /// Build the viewer request for a record's attachment. `None` is the
    /// no-attachment signal; an invalid request is never constructed.
    pub fn open_preview(&self, bill: &Bill) -> Option<AttachmentPreview> {
        match bill.file_url.as_deref() {
            Some(url) if !url.is_empty() => Some(AttachmentPreview {
                url: url.to_string(),
            }),
            _ => None,
        }
    }

    /// Signal the router to move to the submission view.
    pub fn request_new_bill_navigation(&self) -> NavigationIntent {
        NavigationIntent::NewBill
    }
}
