pub use sea_orm_migration::prelude::*;

mod m20260112_000001_create_server_table;
mod m20260112_000002_create_channel_table;
mod m20260112_000003_create_message_table;
mod m20260112_000004_create_bot_status_table;
mod m20260112_000005_create_command_log_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260112_000001_create_server_table::Migration),
            Box::new(m20260112_000002_create_channel_table::Migration),
            Box::new(m20260112_000003_create_message_table::Migration),
            Box::new(m20260112_000004_create_bot_status_table::Migration),
            Box::new(m20260112_000005_create_command_log_table::Migration),
        ]
    }
}
