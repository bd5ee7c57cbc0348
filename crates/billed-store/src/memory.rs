use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use billed_core::bill::{Bill, CreateBill, RawBill};
use uuid::Uuid;

use crate::{BillStore, StoreError};

/// In-memory implementation of `BillStore`.
/// Backs tests and offline runs; nothing survives the process.
pub struct MemoryStore {
    bills: Mutex<Vec<RawBill>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            bills: Mutex::new(Vec::new()),
        }
    }

    /// Start with a fixed set of raw records, exactly as a remote store
    /// would return them.
    pub fn seeded(bills: Vec<RawBill>) -> Self {
        Self {
            bills: Mutex::new(bills),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<RawBill>> {
        self.bills.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BillStore for MemoryStore {
    async fn list(&self) -> Result<Vec<RawBill>, StoreError> {
        Ok(self.lock().clone())
    }

    async fn create(&self, input: &CreateBill) -> Result<Bill, StoreError> {
        let id = Uuid::new_v4().to_string();
        // A real store resolves the uploaded file into a URL; the fake
        // synthesizes one from the staged file name.
        let file_url = input.file_url.clone().or_else(|| {
            input
                .file_name
                .as_ref()
                .map(|name| format!("memory://bills/{id}/{name}"))
        });
        let bill = Bill {
            id: Some(id),
            expense_type: input.expense_type.clone(),
            name: input.name.clone(),
            date: input.date.clone().unwrap_or_default(),
            amount: input.amount,
            vat: input.vat,
            pct: input.pct,
            commentary: input.commentary.clone(),
            file_url,
            file_name: input.file_name.clone(),
            status: input.status,
            comment_admin: None,
            email: Some(input.email.clone()),
        };
        self.lock().push(RawBill::from(&bill));
        Ok(bill)
    }

    async fn update(&self, bill: &Bill) -> Result<Bill, StoreError> {
        let id = bill
            .id
            .as_deref()
            .ok_or_else(|| StoreError::InvalidInput("bill has no id".into()))?;
        let mut bills = self.lock();
        let slot = bills
            .iter_mut()
            .find(|raw| raw.id.as_deref() == Some(id))
            .ok_or_else(|| StoreError::NotFound(format!("bill {id}")))?;
        *slot = RawBill::from(bill);
        Ok(bill.clone())
    }
}
