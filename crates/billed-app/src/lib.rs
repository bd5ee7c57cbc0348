pub mod bills_list;
pub mod error;
pub mod new_bill;
pub mod review;

pub use bills_list::{AttachmentPreview, BillsList, NavigationIntent};
pub use error::{FetchError, FetchErrorKind, ReviewError, SubmissionError};
pub use new_bill::{DraftField, DraftState, NewBill};
pub use review::{BillReview, ReviewDecision};
