//! SeaORM implementation of DepartmentStore

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use crate::domain::{Department, DepartmentStore, DomainError, Employee};
use crate::models::{department, employee};

/// SeaORM-based implementation of DepartmentStore
pub struct SeaOrmDepartmentStore {
    db: DatabaseConnection,
}

impl SeaOrmDepartmentStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn load_manager(&self, manager_id: Option<i32>) -> Result<Option<Employee>, DomainError> {
        let Some(id) = manager_id else {
            return Ok(None);
        };

        let row = employee::Entity::find_by_id(id).one(&self.db).await?;

        Ok(row.map(|e| Employee {
            id: Some(e.id),
            name: e.name,
            managed_department_id: None,
            worker_department_id: e.worker_department_id,
            freelance_department_ids: Vec::new(),
        }))
    }
}

fn view(model: department::Model, manager: Option<Employee>) -> Department {
    Department {
        id: Some(model.id),
        title: model.title,
        manager,
        // Derived collections are filled by the service layer, never stored.
        workers: Vec::new(),
        freelancers: Vec::new(),
    }
}

#[async_trait]
impl DepartmentStore for SeaOrmDepartmentStore {
    async fn find_by_id(&self, id: i32) -> Result<Option<Department>, DomainError> {
        let Some(row) = department::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let manager = self.load_manager(row.manager_id).await?;
        Ok(Some(view(row, manager)))
    }

    async fn save(&self, dept: Department) -> Result<Department, DomainError> {
        let now = chrono::Utc::now().to_rfc3339();
        let manager_id = dept.manager.as_ref().and_then(|m| m.id);

        match dept.id {
            Some(id) => {
                let row = department::Entity::find_by_id(id)
                    .one(&self.db)
                    .await?
                    .ok_or(DomainError::NotFound)?;

                let mut active: department::ActiveModel = row.into();
                active.title = Set(dept.title.clone());
                active.manager_id = Set(manager_id);
                active.updated_at = Set(now);
                active.update(&self.db).await?;

                Ok(dept)
            }
            None => {
                let active = department::ActiveModel {
                    title: Set(dept.title.clone()),
                    manager_id: Set(manager_id),
                    created_at: Set(now.clone()),
                    updated_at: Set(now),
                    ..Default::default()
                };

                let row = active.insert(&self.db).await?;

                Ok(Department {
                    id: Some(row.id),
                    ..dept
                })
            }
        }
    }

    async fn find_by_manager_id(
        &self,
        employee_id: i32,
    ) -> Result<Option<Department>, DomainError> {
        // Matches on the manager_id column only; no employee record is
        // loaded to perform the match.
        let Some(row) = department::Entity::find()
            .filter(department::Column::ManagerId.eq(employee_id))
            .one(&self.db)
            .await?
        else {
            return Ok(None);
        };

        let manager = self.load_manager(row.manager_id).await?;
        Ok(Some(view(row, manager)))
    }
}
