use sea_orm_migration::prelude::*;

#[tokio::main]
async fn main() {
    cli::run_cli(fittrack_tracker_migration::Migrator).await;
}
