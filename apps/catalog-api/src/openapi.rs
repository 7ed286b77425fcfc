//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for the Catalog API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Catalog API",
        version = "1.0.0",
        description = "E-commerce product catalog: products and categories over MongoDB"
    ),
    servers(
        (url = "http://localhost:5000", description = "Local development server")
    ),
    nest(
        (path = "/api/products", api = domain_products::ApiDoc),
        (path = "/api/categories", api = domain_categories::ApiDoc)
    ),
    tags(
        (name = "Products", description = "Product management endpoints"),
        (name = "Categories", description = "Category management endpoints")
    )
)]
pub struct ApiDoc;
