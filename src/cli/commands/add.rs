use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::NewLead;

/// Add a single lead by hand.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        name,
        email,
        phone,
        company,
    } = cmd
    {
        let mut pool = DbPool::open(&cfg.database)?;
        AddLogic::apply(
            &mut pool,
            NewLead {
                name: name.clone(),
                email: email.clone(),
                phone: phone.clone(),
                company: company.clone(),
            },
        )?;
    }
    Ok(())
}
