//! Transaction management for the transaction tracker.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and the in-memory `TransactionStore`
//! - Validation of untrusted transaction input
//! - The JSON API route handlers
//! - The web page for entering and viewing transactions

mod api;
mod page;
mod store;
mod validation;

pub use api::{create_transaction_endpoint, list_transactions_endpoint};
pub use page::{create_transaction_form_endpoint, get_home_page};
pub use store::{Transaction, TransactionId, TransactionStore};
pub use validation::{
    MAX_DESCRIPTION_LENGTH, NewTransaction, RawTransaction, ValidationError, validate,
};
