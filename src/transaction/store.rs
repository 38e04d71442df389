//! Defines the transaction model and the in-memory store that owns every transaction.

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{Error, transaction::validation::NewTransaction};

/// The ID of a transaction. IDs start at 1.
pub type TransactionId = u64;

// ============================================================================
// MODELS
// ============================================================================

/// A record of money that was spent.
///
/// Transactions are created by [TransactionStore::append] and are never
/// modified afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// The amount of money in dollars, always greater than zero.
    pub amount: f64,
    /// A text description of what the transaction was for.
    pub description: String,
    /// When the transaction was recorded.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

// ============================================================================
// STORE
// ============================================================================

/// An append-only, in-memory list of transactions kept in insertion order.
///
/// Cloning the store gives another handle to the same list.
#[derive(Debug, Clone, Default)]
pub struct TransactionStore {
    transactions: Arc<Mutex<Vec<Transaction>>>,
}

impl TransactionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a transaction to the end of the store and return it.
    ///
    /// The new transaction gets the ID after the most recent transaction's ID,
    /// or 1 if the store is empty, and is timestamped with the current time.
    ///
    /// # Errors
    /// Returns [Error::StoreLockError] if the store lock is poisoned.
    pub fn append(&self, new_transaction: NewTransaction) -> Result<Transaction, Error> {
        let mut transactions = self.lock()?;

        let id = transactions
            .last()
            .map_or(1, |transaction| transaction.id + 1);

        let transaction = Transaction {
            id,
            amount: new_transaction.amount,
            description: new_transaction.description,
            created_at: OffsetDateTime::now_utc(),
        };

        transactions.push(transaction.clone());

        Ok(transaction)
    }

    /// Get a copy of every transaction in the order they were added.
    ///
    /// # Errors
    /// Returns [Error::StoreLockError] if the store lock is poisoned.
    pub fn list_all(&self) -> Result<Vec<Transaction>, Error> {
        Ok(self.lock()?.clone())
    }

    /// Get the number of transactions in the store.
    ///
    /// # Errors
    /// Returns [Error::StoreLockError] if the store lock is poisoned.
    pub fn count(&self) -> Result<usize, Error> {
        Ok(self.lock()?.len())
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Vec<Transaction>>, Error> {
        self.transactions
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire store lock: {error}"))
            .map_err(|_| Error::StoreLockError)
    }
}

// ============================================================================
// TESTS
// ============================================================================
