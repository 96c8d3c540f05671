use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};

use crate::domain::DomainError;
use crate::infrastructure::AppState;
use crate::models::department;

/// Seed a small demo organization. Goes through the services so the
/// ownership rules apply to seeded data too.
pub async fn seed_demo_data(db: &DatabaseConnection) -> Result<(), DomainError> {
    let existing = department::Entity::find().count(db).await?;
    if existing > 0 {
        tracing::info!("Demo data already present, skipping seed");
        return Ok(());
    }

    let state = AppState::new(db.clone());

    let hr = state.departments.create_department("HR").await?;
    let engineering = state.departments.create_department("Engineering").await?;

    let alice = state.employees.create_employee("Alice").await?;
    let bob = state.employees.create_employee("Bob").await?;
    let carol = state.employees.create_employee("Carol").await?;

    let (hr_id, eng_id) = (hr.id.unwrap_or_default(), engineering.id.unwrap_or_default());

    if let (Some(alice_id), Some(bob_id), Some(carol_id)) = (alice.id, bob.id, carol.id) {
        state.departments.assign_manager(hr_id, alice_id).await?;
        state.departments.assign_worker(hr_id, bob_id).await?;
        state.departments.assign_freelancer(hr_id, carol_id).await?;
        state.departments.assign_freelancer(eng_id, carol_id).await?;
    }

    Ok(())
}
