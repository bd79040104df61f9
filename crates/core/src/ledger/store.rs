//! In-memory transaction log.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use roomkeeper_shared::types::{TransactionId, TransactionKind};
use rust_decimal::Decimal;

use super::error::LedgerError;
use super::transaction::Transaction;

/// Ordered, mutable collection of transactions.
///
/// Ids come from a store-wide counter that is never reset, not even by
/// [`TransactionStore::clear`], so an id is never handed out twice.
#[derive(Debug, Clone)]
pub struct TransactionStore {
    transactions: Vec<Transaction>,
    next_id: TransactionId,
}

impl TransactionStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            transactions: Vec::new(),
            next_id: TransactionId::from_raw(1),
        }
    }

    /// Appends a transaction and returns its id.
    ///
    /// Room and balance are not checked here; that is the validator's job.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::InvalidAmount` if `amount <= 0`.
    pub fn add(
        &mut self,
        date: NaiveDate,
        kind: TransactionKind,
        amount: Decimal,
    ) -> Result<TransactionId, LedgerError> {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::InvalidAmount);
        }

        let id = self.next_id;
        self.next_id = id.next();
        self.transactions.push(Transaction {
            id,
            date,
            kind,
            amount,
        });
        Ok(id)
    }

    /// Removes the transaction with `id`, returning whether one was removed.
    ///
    /// Removing an absent id is a harmless no-op.
    pub fn remove(&mut self, id: TransactionId) -> bool {
        let before = self.transactions.len();
        self.transactions.retain(|t| t.id != id);
        self.transactions.len() != before
    }

    /// Removes every transaction. The id counter keeps counting.
    pub fn clear(&mut self) {
        self.transactions.clear();
    }

    /// All transactions in insertion order.
    #[must_use]
    pub fn all(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Looks up a transaction by id.
    #[must_use]
    pub fn get(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    /// Number of stored transactions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Returns true if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// The id the next `add` will assign.
    #[must_use]
    pub fn next_id(&self) -> TransactionId {
        self.next_id
    }

    /// Transactions dated in `year`, in insertion order.
    pub fn in_year(&self, year: i32) -> impl Iterator<Item = &Transaction> + '_ {
        self.transactions.iter().filter(move |t| t.year() == year)
    }

    /// Total deposited in `year`.
    #[must_use]
    pub fn deposits_in_year(&self, year: i32) -> Decimal {
        self.in_year(year)
            .filter(|t| t.is_deposit())
            .map(|t| t.amount)
            .sum()
    }

    /// Total withdrawn in `year`.
    #[must_use]
    pub fn withdrawals_in_year(&self, year: i32) -> Decimal {
        self.in_year(year)
            .filter(|t| t.is_withdrawal())
            .map(|t| t.amount)
            .sum()
    }

    /// Total deposits minus total withdrawals across all years.
    #[must_use]
    pub fn lifetime_balance(&self) -> Decimal {
        self.transactions.iter().map(Transaction::signed_amount).sum()
    }

    /// Distinct years with activity, ascending.
    #[must_use]
    pub fn years(&self) -> BTreeSet<i32> {
        self.transactions.iter().map(Transaction::year).collect()
    }

    /// Transactions ordered newest first, ties keeping the later insert first.
    #[must_use]
    pub fn sorted_by_date_desc(&self) -> Vec<&Transaction> {
        let mut sorted: Vec<&Transaction> = self.transactions.iter().collect();
        sorted.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
        sorted
    }
}

impl Default for TransactionStore {
    fn default() -> Self {
        Self::new()
    }
}
