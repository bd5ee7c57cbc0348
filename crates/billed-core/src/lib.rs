pub mod attachment;
pub mod bill;
pub mod formatter;
pub mod identity;

pub use attachment::{validate_attachment, AttachmentDescriptor, AttachmentError};
pub use bill::{Bill, BillStatus, CreateBill, RawBill};
pub use formatter::{format_bill, MalformedBill};
pub use identity::{ActorKind, Identity};
