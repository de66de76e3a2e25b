use crate::entities::department;
use models::department::DepartmentCode;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

pub struct DepartmentService;

impl DepartmentService {
    /// Get the ids of the departments with the given codes
    ///
    /// Codes without a matching row contribute nothing.
    pub async fn find_ids_by_codes(
        db: &DatabaseConnection,
        codes: &[DepartmentCode],
    ) -> Result<Vec<i32>, DbErr> {
        if codes.is_empty() {
            return Ok(vec![]);
        }

        let departments = department::Entity::find()
            .filter(department::Column::Code.is_in(codes.iter().map(|c| c.as_str())))
            .all(db)
            .await?;

        Ok(departments.into_iter().map(|d| d.id).collect())
    }

    /// Get all departments ordered by code
    pub async fn list(db: &DatabaseConnection) -> Result<Vec<department::Model>, DbErr> {
        department::Entity::find()
            .order_by_asc(department::Column::Code)
            .all(db)
            .await
    }
}
