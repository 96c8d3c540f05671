use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "employees")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    /// Owning side of the worker relationship. The department's worker set
    /// is always derived by querying this column.
    pub worker_department_id: Option<i32>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::department::Entity",
        from = "Column::WorkerDepartmentId",
        to = "super::department::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    WorkerDepartment,
}

impl Related<super::department::Entity> for Entity {
    fn to() -> RelationDef {
        super::freelancer_department::Relation::Department.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::freelancer_department::Relation::Employee.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
