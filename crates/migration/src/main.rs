//! Apply or inspect the schema outside the `keuangan` binary.
//!
//! `migration [up|down|fresh|status] [sqlite-path]`. Without a path the
//! database comes from `DATABASE_URL`, then `./keuangan.db`.

use sea_orm::Database;
use sea_orm_migration::prelude::*;

const DEFAULT_URL: &str = "sqlite:./keuangan.db?mode=rwc";
const USAGE: &str = "Usage: cargo run -p migration -- [up|down|fresh|status] [sqlite-path]";

/// A path argument wins over the environment; both fall back to the default file.
fn database_url(path: Option<String>, env_url: Option<String>) -> String {
    match (path, env_url) {
        (Some(path), _) => format!("sqlite:{path}?mode=rwc"),
        (None, Some(url)) if !url.trim().is_empty() => url,
        _ => DEFAULT_URL.to_string(),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let mut args = std::env::args().skip(1);
    let cmd = args.next().unwrap_or_else(|| "up".to_string());
    let db_url = database_url(args.next(), std::env::var("DATABASE_URL").ok());

    let db = Database::connect(&db_url).await?;

    match cmd.as_str() {
        "up" => migration::Migrator::up(&db, None).await?,
        "down" => migration::Migrator::down(&db, None).await?,
        "fresh" => migration::Migrator::fresh(&db).await?,
        "status" => migration::Migrator::status(&db).await?,
        _ => {
            eprintln!("{USAGE}");
            std::process::exit(2);
        }
    }

    Ok(())
}
