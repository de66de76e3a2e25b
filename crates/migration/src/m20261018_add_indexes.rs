use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Duplicate detection looks courses up by title
        manager
            .create_index(
                Index::create()
                    .name("idx_courses_title")
                    .table(Courses::Table)
                    .col(Courses::Title)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_courses_department_id")
                    .table(Courses::Table)
                    .col(Courses::DepartmentId)
                    .to_owned(),
            )
            .await?;

        // Index on sections.course_id for faster joins
        manager
            .create_index(
                Index::create()
                    .name("idx_sections_course_id")
                    .table(Sections::Table)
                    .col(Sections::CourseId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_sections_course_id").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_courses_department_id").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_courses_title").to_owned())
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum Courses {
    Table,
    Title,
    DepartmentId,
}

#[derive(Iden)]
enum Sections {
    Table,
    CourseId,
}
