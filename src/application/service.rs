use crate::domain::{
    Category, Cents, ExchangeRates, Kind, Ledger, Totals, Transaction, TransactionId,
    compute_totals,
};

use super::{AppError, SummaryReport, build_summary};

/// Application service providing the session's ledger operations.
/// This is the primary interface for any client (the bundled interactive
/// CLI, or any other presentation layer).
///
/// Mutations take `&mut self`, so exclusive access is enforced by the
/// borrow checker; there is exactly one caller per session.
pub struct LedgerService {
    ledger: Ledger,
    rates: ExchangeRates,
}

impl LedgerService {
    /// Create a service with an empty ledger and the session's fixed
    /// exchange rates.
    pub fn new(rates: ExchangeRates) -> Self {
        Self {
            ledger: Ledger::new(),
            rates,
        }
    }

    pub fn rates(&self) -> ExchangeRates {
        self.rates
    }

    // ========================
    // Transaction operations
    // ========================

    /// Record a new income or expense transaction.
    pub fn add_transaction(
        &mut self,
        kind: Kind,
        amount_cents: Cents,
        category: Category,
    ) -> Result<Transaction, AppError> {
        validate_amount(amount_cents)?;
        validate_category(kind, category)?;

        Ok(self.ledger.insert(kind, amount_cents, category).clone())
    }

    /// Replace an existing transaction's amount and category in place.
    /// Its id, kind and creation timestamp are preserved; the category is
    /// checked against the stored transaction's kind. Validation runs
    /// before any mutation, so a failed update leaves the record
    /// untouched.
    pub fn update_transaction(
        &mut self,
        id: TransactionId,
        amount_cents: Cents,
        category: Category,
    ) -> Result<Transaction, AppError> {
        let kind = self
            .ledger
            .get(id)
            .ok_or(AppError::TransactionNotFound(id))?
            .kind;
        validate_amount(amount_cents)?;
        validate_category(kind, category)?;

        let entry = self
            .ledger
            .get_mut(id)
            .ok_or(AppError::TransactionNotFound(id))?;
        entry.amount_cents = amount_cents;
        entry.category = category;
        Ok(entry.clone())
    }

    /// Remove a transaction permanently, returning it. Deleting an
    /// unknown id is an error, not a no-op.
    pub fn delete_transaction(&mut self, id: TransactionId) -> Result<Transaction, AppError> {
        self.ledger
            .remove(id)
            .ok_or(AppError::TransactionNotFound(id))
    }

    pub fn get_transaction(&self, id: TransactionId) -> Result<&Transaction, AppError> {
        self.ledger.get(id).ok_or(AppError::TransactionNotFound(id))
    }

    /// All transactions in insertion order. Presentation order (the UI
    /// shows most recent first) is the caller's concern.
    pub fn transactions(&self) -> &[Transaction] {
        self.ledger.transactions()
    }

    // ========================
    // Derived figures
    // ========================

    /// Current totals, recomputed from the ledger on every call.
    pub fn totals(&self) -> Totals {
        compute_totals(self.ledger.transactions())
    }

    /// Full session summary: totals, trend and USD equivalents.
    pub fn summary(&self) -> SummaryReport {
        build_summary(self.ledger.transactions(), self.rates)
    }
}

fn validate_amount(amount_cents: Cents) -> Result<(), AppError> {
    if amount_cents <= 0 {
        return Err(AppError::InvalidAmount(
            "Amount must be positive".to_string(),
        ));
    }
    Ok(())
}

fn validate_category(kind: Kind, category: Category) -> Result<(), AppError> {
    if !category.valid_for(kind) {
        return Err(AppError::CategoryMismatch { kind, category });
    }
    Ok(())
}
