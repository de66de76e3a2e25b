use crate::{
    entities::{course, department, meeting, number, professor, section},
    services::department::DepartmentService,
};
use log::{debug, info};
use models::{
    course_form::NewCourse,
    department::DepartmentPair,
    listing::{CourseListing, JoinedSection},
};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, DatabaseConnection,
    DbBackend, DbErr, EntityTrait, JoinType, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
    Statement, TransactionTrait,
};

/// Result of a get-or-create on the course title
#[derive(Debug, Clone, PartialEq)]
pub enum AddCourseOutcome {
    Created(course::Model),
    AlreadyExists(course::Model),
}

pub struct CourseService;

impl CourseService {
    /// List the courses of both departments with their sections, professors and meetings
    pub async fn compare_departments(
        db: &DatabaseConnection,
        pair: &DepartmentPair,
    ) -> Result<CourseListing, DbErr> {
        let department_ids = DepartmentService::find_ids_by_codes(db, &pair.codes()).await?;
        if department_ids.is_empty() {
            debug!("No departments found for {} and {}", pair.first, pair.second);
            return Ok(CourseListing::new());
        }

        let rows = Self::joined_sections(db, department_ids).await?;
        debug!(
            "Found {} sections for {} and {}",
            rows.len(),
            pair.first,
            pair.second
        );

        Ok(rows.into_iter().collect())
    }

    /// Inner join of courses, departments, sections, numbers, professors and meetings
    async fn joined_sections(
        db: &DatabaseConnection,
        department_ids: Vec<i32>,
    ) -> Result<Vec<JoinedSection>, DbErr> {
        course::Entity::find()
            .select_only()
            .column_as(department::Column::Code, "code")
            .column_as(department::Column::Name, "name")
            .column_as(course::Column::Course, "course")
            .column_as(number::Column::Number, "number")
            .column_as(course::Column::Title, "title")
            .column_as(professor::Column::FullName, "full_name")
            .column_as(meeting::Column::Days, "days")
            .column_as(meeting::Column::Start, "start")
            .column_as(meeting::Column::End, "end")
            .join(JoinType::InnerJoin, course::Relation::Department.def())
            .join(JoinType::InnerJoin, course::Relation::Sections.def())
            .join(JoinType::InnerJoin, section::Relation::Number.def())
            .join(JoinType::InnerJoin, section::Relation::Professor.def())
            .join(JoinType::InnerJoin, section::Relation::Meeting.def())
            .filter(department::Column::Id.is_in(department_ids))
            .order_by_asc(department::Column::Code)
            .order_by_asc(course::Column::Course)
            .order_by_asc(number::Column::Number)
            .into_model::<JoinedSection>()
            .all(db)
            .await
    }

    /// Insert a course unless one with the same title already exists.
    ///
    /// The lookup and the insert share a transaction holding an advisory lock
    /// keyed on the title, so concurrent submissions of one title serialize.
    pub async fn add_course(
        db: &DatabaseConnection,
        new_course: NewCourse,
    ) -> Result<AddCourseOutcome, DbErr> {
        let txn = db.begin().await?;

        txn.execute(Statement::from_sql_and_values(
            DbBackend::Postgres,
            "SELECT pg_advisory_xact_lock(hashtext($1))",
            [new_course.title.as_str().into()],
        ))
        .await?;

        let existing = course::Entity::find()
            .filter(course::Column::Title.eq(new_course.title.as_str()))
            .one(&txn)
            .await?;

        if let Some(existing) = existing {
            txn.commit().await?;
            debug!("Course titled {:?} already exists", new_course.title);
            return Ok(AddCourseOutcome::AlreadyExists(existing));
        }

        let created = course::ActiveModel {
            course: Set(Some(new_course.course)),
            title: Set(Some(new_course.title)),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
        txn.commit().await?;

        info!("Added course {} ({:?})", created.id, created.title);
        Ok(AddCourseOutcome::Created(created))
    }
}
