pub mod call;
pub mod lead;
pub mod lead_field;
pub mod lead_status;

pub use call::CallRecord;
pub use lead::{Lead, LeadPatch, NewLead};
pub use lead_field::LeadField;
pub use lead_status::LeadStatus;
