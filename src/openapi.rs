use utoipa::openapi::security::{ApiKey, ApiKeyValue, HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::handlers::{EnrollRequest, RegisterRequest};
use crate::models::{ClassOverview, Member};

pub struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.as_mut().unwrap();
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
        components.add_security_scheme(
            "query_token",
            SecurityScheme::ApiKey(ApiKey::Query(ApiKeyValue::new("token"))),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::root,
        crate::handlers::healthz_live,
        crate::handlers::healthz_ready,
        crate::handlers::register_member,
        crate::handlers::get_member,
        crate::handlers::check_in_member,
        crate::handlers::check_out_member,
        crate::handlers::list_classes,
        crate::handlers::enroll_in_class,
        crate::handlers::withdraw_from_class
    ),
    components(schemas(Member, ClassOverview, RegisterRequest, EnrollRequest)),
    tags(
        (name = "gym", description = "Member check-in and class enrollment operations")
    ),
    modifiers(&SecurityAddon),
)]
pub struct ApiDoc;
