//! Defines the JSON route handlers for creating and listing transactions.
use axum::{
    Json,
    extract::{FromRef, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde_json::Value;

use crate::{
    AppState, Error,
    transaction::{RawTransaction, Transaction, TransactionStore, validate},
};

impl FromRef<AppState> for TransactionStore {
    fn from_ref(state: &AppState) -> Self {
        state.store.clone()
    }
}

/// A route handler for creating a new transaction.
///
/// Responds with 201 and the created transaction, or 400 and the reason the
/// input was rejected. A body that is not a JSON object is validated as if it
/// were an empty object.
pub async fn create_transaction_endpoint(
    State(store): State<TransactionStore>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Transaction>), Error> {
    let raw_transaction = match payload {
        Ok(Json(value)) => RawTransaction::from(value),
        Err(rejection) => {
            tracing::debug!("could not read transaction JSON, using an empty object: {rejection}");
            RawTransaction::default()
        }
    };

    let new_transaction = validate(&raw_transaction)
        .inspect_err(|error| tracing::debug!("rejected transaction: {error}"))?;

    let transaction = store.append(new_transaction)?;
    tracing::info!("created transaction {}", transaction.id);

    Ok((StatusCode::CREATED, Json(transaction)))
}

/// A route handler that lists every transaction in the order it was created.
pub async fn list_transactions_endpoint(
    State(store): State<TransactionStore>,
) -> Result<Json<Vec<Transaction>>, Error> {
    store.list_all().map(Json)
}
