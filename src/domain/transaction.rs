use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Category, Cents};

/// Ledger-assigned identifier: monotonically increasing, never reused
/// within a session.
pub type TransactionId = u64;

/// The direction of a transaction, fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Income,
    Expense,
}

impl Kind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Income => "income",
            Kind::Expense => "expense",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "income" => Some(Kind::Income),
            "expense" => Some(Kind::Expense),
            _ => None,
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single recorded income or expense event.
/// `id`, `kind` and `created_at` are fixed at creation; edits replace
/// amount and category in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    pub kind: Kind,
    /// Amount in céntimos (always positive)
    pub amount_cents: Cents,
    pub category: Category,
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Create a new transaction. Ids are assigned by the ledger.
    pub fn new(id: TransactionId, kind: Kind, amount_cents: Cents, category: Category) -> Self {
        assert!(amount_cents > 0, "Transaction amount must be positive");
        Self {
            id,
            kind,
            amount_cents,
            category,
            created_at: Utc::now(),
        }
    }

    pub fn is_income(&self) -> bool {
        matches!(self.kind, Kind::Income)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_roundtrip() {
        for kind in [Kind::Income, Kind::Expense] {
            let s = kind.as_str();
            let parsed = Kind::from_str(s).unwrap();
            assert_eq!(kind, parsed);
        }
        assert_eq!(Kind::from_str("Expense"), Some(Kind::Expense));
        assert_eq!(Kind::from_str("transfer"), None);
    }

    #[test]
    fn test_create_transaction() {
        let transaction = Transaction::new(1, Kind::Income, 100000, Category::Salario);

        assert_eq!(transaction.id, 1);
        assert_eq!(transaction.amount_cents, 100000);
        assert_eq!(transaction.category, Category::Salario);
        assert!(transaction.is_income());
    }

    #[test]
    #[should_panic(expected = "Transaction amount must be positive")]
    fn test_transaction_requires_positive_amount() {
        Transaction::new(1, Kind::Expense, 0, Category::Comida);
    }
}
