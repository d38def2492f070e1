//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::login_handler;

/// OpenAPI documentation for the credential intake service
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Credent",
        version = "0.1.0",
        description = "Credential intake boundary for a login endpoint",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        login_handler::login,
    ),
    components(
        schemas(
            login_handler::LoginRequest,
            login_handler::LoginAccepted,
            login_handler::LoginAcceptedResponse,
        )
    ),
    tags(
        (name = "Login", description = "Login request intake")
    )
)]
pub struct ApiDoc;
