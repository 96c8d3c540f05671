use crate::api;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::health::health_check,
        api::department::create_department,
        api::department::get_department,
        api::department::assign_manager,
        api::department::manager_of,
        api::department::assign_worker,
        api::department::assign_freelancer,
        // Employee endpoints get documented once they grow beyond create/get
    ),
    components(
        schemas(
            api::department::CreateDepartmentRequest,
        )
    ),
    tags(
        (name = "orgdir", description = "Organization directory API")
    )
)]
pub struct ApiDoc;
