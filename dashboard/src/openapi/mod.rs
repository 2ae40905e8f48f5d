//! OpenAPI documentation for the dashboard API.
//!
//! The document is generated from the `#[utoipa::path]` annotations on the handlers, served as
//! JSON at `/api-docs/openapi.json` and rendered with Scalar at `/docs`.

use utoipa::OpenApi;

use crate::{api, errors};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Dashboard API",
        description = "Create and list invoices, and look up customers, for the billing dashboard."
    ),
    paths(
        api::handlers::invoices::create_invoice,
        api::handlers::invoices::list_invoices,
        api::handlers::customers::get_customers,
    ),
    components(
        schemas(
            api::models::invoices::InvoiceCreateRequest,
            api::models::invoices::InvoiceResponse,
            api::models::invoices::InvoiceWithCustomerResponse,
            api::models::invoices::InvoiceCreatedEnvelope,
            api::models::invoices::InvoiceListEnvelope,
            api::models::customers::CustomerResponse,
            api::validation::FieldErrors,
            errors::ValidationErrorEnvelope,
            errors::FailureEnvelope,
            errors::BareError,
            crate::types::InvoiceStatus,
        )
    ),
    tags(
        (name = "invoices", description = "Invoice creation and listing"),
        (name = "customers", description = "Customer lookup"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_endpoint() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/api/invoice"));
        assert!(doc.paths.paths.contains_key("/api/test"));

        let invoice = &doc.paths.paths["/api/invoice"];
        assert!(invoice.get.is_some());
        assert!(invoice.post.is_some());
    }

    #[test]
    fn test_document_serializes() {
        let json = ApiDoc::openapi().to_json().unwrap();
        assert!(json.contains("\"openapi\""));
        assert!(json.contains("Dashboard API"));
        assert!(json.contains("InvoiceCreatedEnvelope"));
    }
}
