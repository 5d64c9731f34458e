pub use sea_orm_migration::prelude::*;

mod m20250301_000000_create_tasks;
mod m20250301_000001_create_users;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000000_create_tasks::Migration),
            Box::new(m20250301_000001_create_users::Migration),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migrations_are_ordered_by_name() {
        let names: Vec<String> = Migrator::migrations()
            .iter()
            .map(|m| m.name().to_string())
            .collect();

        assert_eq!(
            names,
            vec![
                "m20250301_000000_create_tasks",
                "m20250301_000001_create_users"
            ]
        );
    }
}
