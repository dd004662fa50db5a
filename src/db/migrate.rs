use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// A schema step, applied once and recorded in the `log` table.
struct Migration {
    version: &'static str,
    description: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20251018_0001_create_leads",
        description: "Created leads table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS leads (
            id          TEXT PRIMARY KEY NOT NULL,
            name        TEXT NOT NULL,
            email       TEXT NOT NULL,
            phone       TEXT NOT NULL,
            company     TEXT,
            status      TEXT NOT NULL DEFAULT 'pending'
                        CHECK(status IN ('pending','in-progress','completed','failed')),
            created_at  TEXT NOT NULL,
            updated_at  TEXT NOT NULL,
            CHECK(updated_at >= created_at)
        );

        CREATE INDEX IF NOT EXISTS idx_leads_created_at ON leads(created_at);
        "#,
    },
    Migration {
        version: "20251018_0002_leads_status_index",
        description: "Added status and email indexes to leads",
        sql: r#"
        CREATE INDEX IF NOT EXISTS idx_leads_status ON leads(status);
        CREATE INDEX IF NOT EXISTS idx_leads_email ON leads(email);
        "#,
    },
];

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn apply(conn: &Connection, migration: &Migration) -> Result<()> {
    let tx = conn.unchecked_transaction()?;
    tx.execute_batch(migration.sql)?;
    tx.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [migration.version, migration.description],
    )?;
    tx.commit()?;

    success(format!(
        "Migration applied: {} → {}",
        migration.version, migration.description
    ));
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Called by db::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    for migration in MIGRATIONS {
        if !is_applied(conn, migration.version)? {
            apply(conn, migration)?;
        }
    }

    Ok(())
}
