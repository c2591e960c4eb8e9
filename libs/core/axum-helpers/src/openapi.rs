use utoipa::Modify;
use utoipa::openapi::OpenApi;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};

/// Name paths use in `security(("bearer_auth" = []))`.
pub const BEARER_AUTH: &str = "bearer_auth";

/// Registers the HS256 bearer scheme on the generated document.
pub struct BearerAuthAddon;

impl Modify for BearerAuthAddon {
    fn modify(&self, openapi: &mut OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        let scheme = HttpBuilder::new()
            .scheme(HttpAuthScheme::Bearer)
            .bearer_format("JWT")
            .build();
        components.add_security_scheme(BEARER_AUTH, SecurityScheme::Http(scheme));
    }
}
