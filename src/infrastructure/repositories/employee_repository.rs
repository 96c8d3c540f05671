//! SeaORM implementation of EmployeeStore

use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};

use crate::domain::{DomainError, Employee, EmployeeStore};
use crate::models::{department, employee, freelancer_department};

/// SeaORM-based implementation of EmployeeStore
pub struct SeaOrmEmployeeStore {
    db: DatabaseConnection,
}

impl SeaOrmEmployeeStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn view(model: employee::Model) -> Employee {
    Employee {
        id: Some(model.id),
        name: model.name,
        managed_department_id: None,
        worker_department_id: model.worker_department_id,
        freelance_department_ids: Vec::new(),
    }
}

#[async_trait]
impl EmployeeStore for SeaOrmEmployeeStore {
    async fn find_by_id(&self, id: i32) -> Result<Option<Employee>, DomainError> {
        let Some(row) = employee::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        // Derived mirror of departments.manager_id.
        let managed = department::Entity::find()
            .filter(department::Column::ManagerId.eq(id))
            .one(&self.db)
            .await?;

        let freelance_ids: Vec<i32> = freelancer_department::Entity::find()
            .filter(freelancer_department::Column::EmployeeId.eq(id))
            .all(&self.db)
            .await?
            .into_iter()
            .map(|m| m.department_id)
            .collect();

        Ok(Some(Employee {
            managed_department_id: managed.map(|d| d.id),
            freelance_department_ids: freelance_ids,
            ..view(row)
        }))
    }

    async fn save(&self, emp: Employee) -> Result<Employee, DomainError> {
        let now = chrono::Utc::now().to_rfc3339();

        match emp.id {
            Some(id) => {
                let row = employee::Entity::find_by_id(id)
                    .one(&self.db)
                    .await?
                    .ok_or(DomainError::NotFound)?;

                let mut active: employee::ActiveModel = row.into();
                active.name = Set(emp.name.clone());
                active.worker_department_id = Set(emp.worker_department_id);
                active.updated_at = Set(now);
                active.update(&self.db).await?;

                Ok(emp)
            }
            None => {
                let active = employee::ActiveModel {
                    name: Set(emp.name.clone()),
                    worker_department_id: Set(emp.worker_department_id),
                    created_at: Set(now.clone()),
                    updated_at: Set(now),
                    ..Default::default()
                };

                let row = active.insert(&self.db).await?;

                Ok(Employee {
                    id: Some(row.id),
                    ..emp
                })
            }
        }
    }

    async fn find_workers(&self, department_id: i32) -> Result<Vec<Employee>, DomainError> {
        let rows = employee::Entity::find()
            .filter(employee::Column::WorkerDepartmentId.eq(department_id))
            .all(&self.db)
            .await?;

        Ok(rows.into_iter().map(view).collect())
    }

    async fn find_freelancers(&self, department_id: i32) -> Result<Vec<Employee>, DomainError> {
        let memberships = freelancer_department::Entity::find()
            .filter(freelancer_department::Column::DepartmentId.eq(department_id))
            .all(&self.db)
            .await?;

        let employee_ids: Vec<i32> = memberships.into_iter().map(|m| m.employee_id).collect();

        if employee_ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = employee::Entity::find()
            .filter(employee::Column::Id.is_in(employee_ids))
            .all(&self.db)
            .await?;

        Ok(rows.into_iter().map(view).collect())
    }

    async fn add_freelance_department(
        &self,
        employee_id: i32,
        department_id: i32,
    ) -> Result<(), DomainError> {
        let membership = freelancer_department::ActiveModel {
            employee_id: Set(employee_id),
            department_id: Set(department_id),
        };

        let insert = freelancer_department::Entity::insert(membership)
            .on_conflict(
                OnConflict::columns([
                    freelancer_department::Column::EmployeeId,
                    freelancer_department::Column::DepartmentId,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec(&self.db)
            .await;

        match insert {
            Ok(_) => Ok(()),
            // Membership already present; set semantics make this a no-op.
            Err(DbErr::RecordNotInserted) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
