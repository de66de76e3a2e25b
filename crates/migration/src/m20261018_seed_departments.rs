use models::department::DepartmentCode;
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut insert = Query::insert()
            .into_table(Departments::Table)
            .columns([Departments::Code, Departments::Name])
            .on_conflict(OnConflict::column(Departments::Code).do_nothing().to_owned())
            .to_owned();

        // Names default to the code until the registrar's names are loaded
        for code in DepartmentCode::all() {
            insert
                .values([code.as_str().into(), code.as_str().into()])
                .map_err(|e| DbErr::Custom(e.to_string()))?;
        }

        manager.exec_stmt(insert).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let codes: Vec<String> = DepartmentCode::choices();

        let delete = Query::delete()
            .from_table(Departments::Table)
            .and_where(Expr::col(Departments::Code).is_in(codes))
            .to_owned();

        manager.exec_stmt(delete).await
    }
}

#[derive(Iden)]
enum Departments {
    Table,
    Code,
    Name,
}
