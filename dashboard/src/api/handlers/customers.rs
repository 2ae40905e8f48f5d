//! HTTP handlers for customer lookup.

use crate::{
    AppState,
    api::models::customers::CustomerResponse,
    errors::{BareError, Error, Result},
};
use axum::{extract::State, response::Json};

pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch customers";

/// List customers
///
/// Returns the customer records as a bare JSON array. Errors use `{ "error": ... }` rather than
/// the invoice envelope; existing clients depend on that shape.
#[utoipa::path(
    get,
    path = "/api/test",
    tag = "customers",
    summary = "List customers",
    responses(
        (status = 200, description = "All customers, by name", body = [CustomerResponse]),
        (status = 500, description = "The customers could not be read", body = BareError),
    )
)]
#[tracing::instrument(skip_all)]
pub async fn get_customers(State(state): State<AppState>) -> Result<Json<Vec<CustomerResponse>>> {
    let customers = state
        .store
        .fetch_customers()
        .await
        .map_err(|e| Error::store_bare(FETCH_FAILED_MESSAGE, e))?;

    Ok(Json(customers.into_iter().map(CustomerResponse::from).collect()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{db::in_memory::InMemoryStore, test_utils::create_test_app};
    use axum::http::StatusCode;
    use serde_json::{Value, json};

    #[test_log::test(tokio::test)]
    async fn test_get_customers_returns_raw_array() {
        let store = InMemoryStore::new();
        store.insert_customer("c2", "Lee Robinson", "lee@robinson.com");
        store.insert_customer("c1", "Amy Burns", "amy@burns.com");
        let server = create_test_app(store);

        let response = server.get("/api/test").await;

        response.assert_status_ok();
        response.assert_json(&json!([
            { "id": "c1", "name": "Amy Burns", "email": "amy@burns.com" },
            { "id": "c2", "name": "Lee Robinson", "email": "lee@robinson.com" }
        ]));
    }

    #[test_log::test(tokio::test)]
    async fn test_get_customers_empty() {
        let server = create_test_app(InMemoryStore::new());

        let body: Value = server.get("/api/test").await.json();
        assert_eq!(body, json!([]));
    }

    #[test_log::test(tokio::test)]
    async fn test_get_customers_failure_uses_bare_error() {
        let store = InMemoryStore::new();
        store.set_unavailable(true);
        let server = create_test_app(store);

        let response = server.get("/api/test").await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        response.assert_json(&json!({ "error": FETCH_FAILED_MESSAGE }));
    }
}
