//! HTTP handlers for invoice endpoints.

use crate::{
    AppState,
    api::{
        models::invoices::{
            InvoiceCreateRequest, InvoiceCreatedEnvelope, InvoiceListEnvelope, InvoiceResponse, InvoiceWithCustomerResponse,
        },
        validation::validate_invoice_create,
    },
    db::models::invoices::InvoiceCreateDBRequest,
    errors::{Error, FailureEnvelope, Result, ValidationErrorEnvelope},
};
use axum::{body::Bytes, extract::State, http::StatusCode, response::Json};
use chrono::Utc;
use serde_json::Value;

pub const INVOICE_CREATED_MESSAGE: &str = "Invoice created successfully";
pub const CREATE_FAILED_MESSAGE: &str = "Failed to create invoice. Please try again.";
pub const LIST_FAILED_MESSAGE: &str = "Failed to fetch invoices";

/// Create a new invoice
///
/// The body is read as raw bytes so that mistyped fields are reported through the validation
/// envelope instead of axum's plain-text extractor rejections. A body that is not JSON at all is
/// a failed create (500).
#[utoipa::path(
    post,
    path = "/api/invoice",
    tag = "invoices",
    summary = "Create an invoice",
    description = "Validate the body, convert the dollar amount to cents and insert one invoice dated today (UTC).",
    request_body = InvoiceCreateRequest,
    responses(
        (status = 201, description = "Invoice created", body = InvoiceCreatedEnvelope),
        (status = 400, description = "Missing or invalid fields", body = ValidationErrorEnvelope),
        (status = 500, description = "The invoice could not be stored", body = FailureEnvelope),
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_invoice(State(state): State<AppState>, body: Bytes) -> Result<(StatusCode, Json<InvoiceCreatedEnvelope>)> {
    let value: Value = serde_json::from_slice(&body).map_err(|e| Error::body(CREATE_FAILED_MESSAGE, e))?;

    let create = validate_invoice_create(&value).map_err(Error::validation)?;

    let request = InvoiceCreateDBRequest {
        customer_id: create.customer_id,
        amount: create.amount,
        status: create.status,
        date: Utc::now().date_naive(),
    };

    let invoice = state
        .store
        .create_invoice(&request)
        .await
        .map_err(|e| Error::store(CREATE_FAILED_MESSAGE, e))?;

    tracing::info!(invoice_id = %invoice.id, "Invoice created");

    Ok((
        StatusCode::CREATED,
        Json(InvoiceCreatedEnvelope {
            success: true,
            message: INVOICE_CREATED_MESSAGE.to_string(),
            data: InvoiceResponse::from(invoice),
        }),
    ))
}

/// List invoices
#[utoipa::path(
    get,
    path = "/api/invoice",
    tag = "invoices",
    summary = "List invoices",
    description = "Every invoice that has a customer, with the customer's name and email, newest first.",
    responses(
        (status = 200, description = "All invoices", body = InvoiceListEnvelope),
        (status = 500, description = "The invoices could not be read", body = FailureEnvelope),
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_invoices(State(state): State<AppState>) -> Result<Json<InvoiceListEnvelope>> {
    let rows = state.store.list_invoices().await.map_err(|e| Error::store(LIST_FAILED_MESSAGE, e))?;

    Ok(Json(InvoiceListEnvelope {
        success: true,
        data: rows.into_iter().map(InvoiceWithCustomerResponse::from).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        api::validation::{AMOUNT_NOT_A_NUMBER, AMOUNT_NOT_POSITIVE, CUSTOMER_ID_REQUIRED, STATUS_INVALID},
        db::{in_memory::InMemoryStore, models::invoices::InvoiceDBResponse},
        errors::VALIDATION_FAILED_MESSAGE,
        test_utils::create_test_app,
        types::{Cents, InvoiceStatus},
    };
    use chrono::NaiveDate;
    use serde_json::json;

    const CUSTOMER: &str = "3958dc9e-712f-4377-85e9-fec4b6a6442a";

    fn seeded_store() -> InMemoryStore {
        let store = InMemoryStore::new();
        store.insert_customer(CUSTOMER, "Delba de Oliveira", "delba@oliveira.com");
        store
    }

    fn stored_invoice(id: &str, customer_id: &str, cents: i32, status: InvoiceStatus, date: &str) -> InvoiceDBResponse {
        InvoiceDBResponse {
            id: id.to_string(),
            customer_id: customer_id.to_string(),
            amount: Cents::new(cents),
            status,
            date: date.parse::<NaiveDate>().unwrap(),
        }
    }

    #[test_log::test(tokio::test)]
    async fn test_create_invoice_round_trip() {
        let store = seeded_store();
        let server = create_test_app(store.clone());

        let response = server
            .post("/api/invoice")
            .json(&json!({ "customerId": CUSTOMER, "amount": 45, "status": "pending" }))
            .await;

        response.assert_status(StatusCode::CREATED);
        let body: Value = response.json();
        assert_eq!(body["success"], json!(true));
        assert_eq!(body["message"], json!(INVOICE_CREATED_MESSAGE));
        assert_eq!(body["data"]["customer_id"], json!(CUSTOMER));
        assert_eq!(body["data"]["amount"], json!(45));
        assert_eq!(body["data"]["status"], json!("pending"));
        assert_eq!(body["data"]["date"], json!(Utc::now().date_naive().to_string()));

        let stored = store.invoices();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].amount.get(), 4500);
        assert_eq!(body["data"]["id"], json!(stored[0].id));

        let list: Value = server.get("/api/invoice").await.json();
        assert_eq!(list["data"][0]["amount"], json!(45));
    }

    #[test_log::test(tokio::test)]
    async fn test_create_invoice_fractional_amount() {
        let store = seeded_store();
        let server = create_test_app(store.clone());

        let response = server
            .post("/api/invoice")
            .json(&json!({ "customerId": CUSTOMER, "amount": 19.99, "status": "paid" }))
            .await;

        response.assert_status(StatusCode::CREATED);
        let body: Value = response.json();
        assert_eq!(body["data"]["amount"], json!(19.99));
        assert_eq!(store.invoices()[0].amount.get(), 1999);
    }

    #[test_log::test(tokio::test)]
    async fn test_create_invoice_accepts_numeric_string() {
        let store = seeded_store();
        let server = create_test_app(store.clone());

        let response = server
            .post("/api/invoice")
            .json(&json!({ "customerId": CUSTOMER, "amount": " 12.5 ", "status": "paid" }))
            .await;

        response.assert_status(StatusCode::CREATED);
        assert_eq!(store.invoices()[0].amount.get(), 1250);
    }

    #[test_log::test(tokio::test)]
    async fn test_create_invoice_ignores_client_date() {
        let store = seeded_store();
        let server = create_test_app(store.clone());

        server
            .post("/api/invoice")
            .json(&json!({ "customerId": CUSTOMER, "amount": 1, "status": "paid", "date": "1999-01-01" }))
            .await
            .assert_status(StatusCode::CREATED);

        assert_eq!(store.invoices()[0].date, Utc::now().date_naive());
    }

    #[test_log::test(tokio::test)]
    async fn test_create_invoice_rejects_non_positive_amounts() {
        for amount in [json!(0), json!(-5), json!("0"), json!(null), json!(0.001)] {
            let store = seeded_store();
            let server = create_test_app(store.clone());

            let response = server
                .post("/api/invoice")
                .json(&json!({ "customerId": CUSTOMER, "amount": amount, "status": "pending" }))
                .await;

            response.assert_status(StatusCode::BAD_REQUEST);
            let body: Value = response.json();
            assert_eq!(body["success"], json!(false), "amount {amount}");
            assert_eq!(body["errors"]["amount"], json!([AMOUNT_NOT_POSITIVE]), "amount {amount}");
            assert_eq!(body["message"], json!(VALIDATION_FAILED_MESSAGE));
            assert!(store.invoices().is_empty());
        }
    }

    #[test_log::test(tokio::test)]
    async fn test_create_invoice_rejects_nan_amount() {
        let store = seeded_store();
        let server = create_test_app(store.clone());

        let response = server
            .post("/api/invoice")
            .json(&json!({ "customerId": CUSTOMER, "amount": "abc", "status": "pending" }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["errors"]["amount"], json!([AMOUNT_NOT_A_NUMBER]));
        assert!(body["errors"].get("customerId").is_none());
        assert!(store.invoices().is_empty());
    }

    #[test_log::test(tokio::test)]
    async fn test_create_invoice_rejects_bad_status() {
        for status in [json!("overdue"), json!("PAID"), json!(null)] {
            let store = seeded_store();
            let server = create_test_app(store.clone());

            let response = server
                .post("/api/invoice")
                .json(&json!({ "customerId": CUSTOMER, "amount": 10, "status": status }))
                .await;

            response.assert_status(StatusCode::BAD_REQUEST);
            let body: Value = response.json();
            assert_eq!(body["errors"]["status"], json!([STATUS_INVALID]), "status {status}");
            assert!(store.invoices().is_empty());
        }
    }

    #[test_log::test(tokio::test)]
    async fn test_create_invoice_rejects_empty_customer() {
        let store = seeded_store();
        let server = create_test_app(store.clone());

        let response = server
            .post("/api/invoice")
            .json(&json!({ "customerId": "", "amount": 10, "status": "paid" }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["errors"]["customerId"], json!([CUSTOMER_ID_REQUIRED]));
        assert!(store.invoices().is_empty());
    }

    #[test_log::test(tokio::test)]
    async fn test_create_invoice_reports_every_failing_field() {
        let store = seeded_store();
        let server = create_test_app(store.clone());

        let response = server.post("/api/invoice").json(&json!({})).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        let errors = body["errors"].as_object().unwrap();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors["customerId"], json!(["Required"]));
        assert_eq!(errors["amount"], json!([AMOUNT_NOT_A_NUMBER]));
        assert_eq!(errors["status"], json!([STATUS_INVALID]));
        assert!(store.invoices().is_empty());
    }

    #[test_log::test(tokio::test)]
    async fn test_create_invoice_malformed_body() {
        let store = seeded_store();
        let server = create_test_app(store.clone());

        for body in ["{not json", ""] {
            let response = server
                .post("/api/invoice")
                .content_type("application/json")
                .bytes(Bytes::from(body))
                .await;

            response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
            response.assert_json(&json!({ "success": false, "message": CREATE_FAILED_MESSAGE }));
        }
        assert!(store.invoices().is_empty());
    }

    #[test_log::test(tokio::test)]
    async fn test_create_invoice_json_that_is_not_an_object() {
        let store = seeded_store();
        let server = create_test_app(store.clone());

        for body in ["[1, 2, 3]", "null", "42"] {
            let response = server
                .post("/api/invoice")
                .content_type("application/json")
                .bytes(Bytes::from(body))
                .await;

            response.assert_status(StatusCode::BAD_REQUEST);
            response.assert_json(&json!({
                "success": false,
                "errors": {},
                "message": VALIDATION_FAILED_MESSAGE
            }));
        }
        assert!(store.invoices().is_empty());
    }

    #[test_log::test(tokio::test)]
    async fn test_create_invoice_store_failure() {
        let store = seeded_store();
        store.set_unavailable(true);
        let server = create_test_app(store.clone());

        let response = server
            .post("/api/invoice")
            .json(&json!({ "customerId": CUSTOMER, "amount": 10, "status": "paid" }))
            .await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        response.assert_json(&json!({ "success": false, "message": CREATE_FAILED_MESSAGE }));
        assert!(store.invoices().is_empty());
    }

    #[test_log::test(tokio::test)]
    async fn test_create_invoice_unknown_customer() {
        let store = seeded_store().with_foreign_keys();
        let server = create_test_app(store.clone());

        let response = server
            .post("/api/invoice")
            .json(&json!({ "customerId": "d6e15727-9fe1-4961-8c5b-ea44a9bd81aa", "amount": 10, "status": "paid" }))
            .await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        response.assert_json(&json!({ "success": false, "message": CREATE_FAILED_MESSAGE }));
        assert!(store.invoices().is_empty());
    }

    #[test_log::test(tokio::test)]
    async fn test_list_invoices_sorted_with_customer() {
        let store = seeded_store();
        store.insert_invoice(stored_invoice("a", CUSTOMER, 1000, InvoiceStatus::Paid, "2026-01-02"));
        store.insert_invoice(stored_invoice("b", CUSTOMER, 2050, InvoiceStatus::Pending, "2026-03-01"));
        store.insert_invoice(stored_invoice("c", CUSTOMER, 5, InvoiceStatus::Paid, "2025-12-31"));
        let server = create_test_app(store);

        let response = server.get("/api/invoice").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["success"], json!(true));
        let rows = body["data"].as_array().unwrap();
        let ids: Vec<&str> = rows.iter().map(|r| r["id"].as_str().unwrap()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
        assert_eq!(rows[0]["amount"], json!(20.5));
        assert_eq!(rows[1]["amount"], json!(10));
        assert_eq!(rows[2]["amount"], json!(0.05));
        assert_eq!(rows[0]["name"], json!("Delba de Oliveira"));
        assert_eq!(rows[0]["email"], json!("delba@oliveira.com"));
    }

    #[test_log::test(tokio::test)]
    async fn test_list_invoices_excludes_orphans() {
        let store = seeded_store();
        store.insert_invoice(stored_invoice("kept", CUSTOMER, 100, InvoiceStatus::Paid, "2026-01-01"));
        store.insert_invoice(stored_invoice("orphan", "no-such-customer", 100, InvoiceStatus::Paid, "2026-02-01"));
        let server = create_test_app(store);

        let body: Value = server.get("/api/invoice").await.json();
        let rows = body["data"].as_array().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["id"], json!("kept"));
    }

    #[test_log::test(tokio::test)]
    async fn test_list_invoices_empty() {
        let server = create_test_app(InMemoryStore::new());

        let response = server.get("/api/invoice").await;

        response.assert_status_ok();
        response.assert_json(&json!({ "success": true, "data": [] }));
    }

    #[test_log::test(tokio::test)]
    async fn test_list_invoices_store_unreachable() {
        let store = seeded_store();
        store.set_unavailable(true);
        let server = create_test_app(store);

        let response = server.get("/api/invoice").await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        response.assert_json(&json!({ "success": false, "message": LIST_FAILED_MESSAGE }));
    }
}
