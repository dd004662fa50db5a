use crate::core::validate::validate_new_lead;
use crate::db::pool::DbPool;
use crate::db::store::LeadStore;
use crate::errors::AppResult;
use crate::models::{Lead, NewLead};
use crate::ui::messages::success;

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Validate and store a manually entered lead (status `pending`).
    pub fn apply(pool: &mut DbPool, mut new: NewLead) -> AppResult<Lead> {
        new.name = new.name.trim().to_string();
        new.email = new.email.trim().to_string();
        new.phone = new.phone.trim().to_string();
        new.company = new
            .company
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());

        validate_new_lead(&new)?;

        let lead = pool.create_record(&new)?;
        success(format!("Lead created successfully: {} ({})", lead.name, lead.id));
        Ok(lead)
    }
}
