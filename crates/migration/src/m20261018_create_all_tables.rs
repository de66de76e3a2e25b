use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create departments table
        manager
            .create_table(
                Table::create()
                    .table(Departments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Departments::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Departments::Code).string_len(64).unique_key())
                    .col(ColumnDef::new(Departments::Name).string_len(64))
                    .to_owned(),
            )
            .await?;

        // Create courses table
        manager
            .create_table(
                Table::create()
                    .table(Courses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Courses::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Courses::Course).string_len(64))
                    .col(ColumnDef::new(Courses::Title).string_len(64))
                    .col(ColumnDef::new(Courses::DepartmentId).integer())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-courses-department_id")
                            .from(Courses::Table, Courses::DepartmentId)
                            .to(Departments::Table, Departments::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // Create numbers table
        manager
            .create_table(
                Table::create()
                    .table(Numbers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Numbers::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Numbers::Number).integer())
                    .to_owned(),
            )
            .await?;

        // Create professors table
        manager
            .create_table(
                Table::create()
                    .table(Professors::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Professors::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Professors::FullName).string_len(64))
                    .to_owned(),
            )
            .await?;

        // Create meetings table
        manager
            .create_table(
                Table::create()
                    .table(Meetings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Meetings::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Meetings::Days).string_len(64))
                    .col(ColumnDef::new(Meetings::Start).time())
                    .col(ColumnDef::new(Meetings::End).time())
                    .to_owned(),
            )
            .await?;

        // Create sections table linking a course to its number, professor and meeting
        manager
            .create_table(
                Table::create()
                    .table(Sections::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Sections::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Sections::CourseId).integer())
                    .col(ColumnDef::new(Sections::NumberId).integer())
                    .col(ColumnDef::new(Sections::ProfessorId).integer())
                    .col(ColumnDef::new(Sections::MeetingId).integer())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-sections-course_id")
                            .from(Sections::Table, Sections::CourseId)
                            .to(Courses::Table, Courses::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-sections-number_id")
                            .from(Sections::Table, Sections::NumberId)
                            .to(Numbers::Table, Numbers::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-sections-professor_id")
                            .from(Sections::Table, Sections::ProfessorId)
                            .to(Professors::Table, Professors::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-sections-meeting_id")
                            .from(Sections::Table, Sections::MeetingId)
                            .to(Meetings::Table, Meetings::Id),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop in reverse order of foreign key dependencies
        manager
            .drop_table(Table::drop().table(Sections::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Meetings::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Professors::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Numbers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Courses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Departments::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum Departments {
    Table,
    Id,
    Code,
    Name,
}

#[derive(Iden)]
enum Courses {
    Table,
    Id,
    Course,
    Title,
    DepartmentId,
}

#[derive(Iden)]
enum Numbers {
    Table,
    Id,
    Number,
}

#[derive(Iden)]
enum Professors {
    Table,
    Id,
    FullName,
}

#[derive(Iden)]
enum Meetings {
    Table,
    Id,
    Days,
    Start,
    End,
}

#[derive(Iden)]
enum Sections {
    Table,
    Id,
    CourseId,
    NumberId,
    ProfessorId,
    MeetingId,
}
