//! The API endpoints URIs.

/// The page for entering and viewing transactions.
pub const HOME_VIEW: &str = "/";
/// The route the transaction form on the home page is submitted to.
pub const NEW_TRANSACTION_FORM: &str = "/transactions/new";

/// The JSON route for creating and listing transactions.
pub const TRANSACTIONS_API: &str = "/transactions";
