pub use sea_orm_migration::prelude::*;

mod m20261018_add_indexes;
mod m20261018_create_all_tables;
mod m20261018_create_sessions_table;
mod m20261018_seed_departments;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261018_create_all_tables::Migration),
            Box::new(m20261018_add_indexes::Migration),
            Box::new(m20261018_seed_departments::Migration),
            Box::new(m20261018_create_sessions_table::Migration),
        ]
    }
}
