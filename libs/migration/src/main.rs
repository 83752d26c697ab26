//! Migration CLI: `migration up`, `migration down`, `migration status`, ...
//!
//! Reads the connection string from `DATABASE_URL`.

use migration::Migrator;
use sea_orm_migration::cli;

#[tokio::main]
async fn main() {
    cli::run_cli(Migrator).await;
}
