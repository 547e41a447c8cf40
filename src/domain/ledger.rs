use serde::{Deserialize, Serialize};

use super::{Category, Cents, Kind, Transaction, TransactionId};

/// The in-memory collection of transaction records for one session.
/// Ids are assigned monotonically and never reused, so uniqueness holds
/// across any sequence of inserts and removals. Entries are kept in
/// insertion order; presentation order is the caller's concern.
#[derive(Debug)]
pub struct Ledger {
    entries: Vec<Transaction>,
    next_id: TransactionId,
}

impl Ledger {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
        }
    }

    /// Append a new transaction, assigning the next id and the current
    /// timestamp. Amount and category must already be validated.
    pub fn insert(&mut self, kind: Kind, amount_cents: Cents, category: Category) -> &Transaction {
        let id = self.next_id;
        self.next_id += 1;

        let index = self.entries.len();
        self.entries
            .push(Transaction::new(id, kind, amount_cents, category));
        &self.entries[index]
    }

    pub fn get(&self, id: TransactionId) -> Option<&Transaction> {
        self.entries.iter().find(|t| t.id == id)
    }

    pub fn get_mut(&mut self, id: TransactionId) -> Option<&mut Transaction> {
        self.entries.iter_mut().find(|t| t.id == id)
    }

    /// Remove a transaction, returning it. `None` if the id is absent;
    /// removal is permanent and the id is never handed out again.
    pub fn remove(&mut self, id: TransactionId) -> Option<Transaction> {
        let index = self.entries.iter().position(|t| t.id == id)?;
        Some(self.entries.remove(index))
    }

    /// All current transactions in insertion order.
    pub fn transactions(&self) -> &[Transaction] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

/// Derived totals over a set of transactions. Never stored; recomputed
/// from the ledger on every read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    pub income: Cents,
    pub expenses: Cents,
    pub balance: Cents,
}

/// Compute income, expense and net totals in a single pass.
pub fn compute_totals(transactions: &[Transaction]) -> Totals {
    let (income, expenses) =
        transactions
            .iter()
            .fold((0, 0), |(income, expenses), t| match t.kind {
                Kind::Income => (income + t.amount_cents, expenses),
                Kind::Expense => (income, expenses + t.amount_cents),
            });

    Totals {
        income,
        expenses,
        balance: income - expenses,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Favorable,
    Unfavorable,
}

impl TrendDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrendDirection::Favorable => "favorable",
            TrendDirection::Unfavorable => "unfavorable",
        }
    }
}

impl std::fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Whether the net balance is favorable relative to income, and by how
/// much.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceTrend {
    pub direction: TrendDirection,
    /// Rounded percentage of income kept (or overspent). Exceeds 100 when
    /// expenses outrun income.
    pub percentage: i64,
}

/// Derive the balance trend indicator from totals.
///
/// With income recorded, the percentage is `|balance| / income * 100`,
/// rounded, favorable iff the balance is non-negative. With no income,
/// any spending at all reads as 100% unfavorable, and a fully empty
/// ledger shows no indicator.
pub fn balance_trend(totals: &Totals) -> Option<BalanceTrend> {
    if totals.income == 0 {
        if totals.expenses > 0 {
            return Some(BalanceTrend {
                direction: TrendDirection::Unfavorable,
                percentage: 100,
            });
        }
        return None;
    }

    let direction = if totals.balance >= 0 {
        TrendDirection::Favorable
    } else {
        TrendDirection::Unfavorable
    };
    let percentage = (totals.balance.abs() * 100 + totals.income / 2) / totals.income;

    Some(BalanceTrend {
        direction,
        percentage,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn totals(income: Cents, expenses: Cents) -> Totals {
        Totals {
            income,
            expenses,
            balance: income - expenses,
        }
    }

    #[test]
    fn test_insert_assigns_monotonic_ids() {
        let mut ledger = Ledger::new();
        let first = ledger.insert(Kind::Income, 100000, Category::Salario).id;
        let second = ledger.insert(Kind::Expense, 30000, Category::Comida).id;

        assert_eq!(first, 1);
        assert_eq!(second, 2);
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn test_ids_are_not_reused_after_removal() {
        let mut ledger = Ledger::new();
        let id = ledger.insert(Kind::Expense, 5000, Category::Hogar).id;
        ledger.remove(id).unwrap();

        let next = ledger.insert(Kind::Expense, 5000, Category::Hogar).id;
        assert_ne!(id, next);
    }

    #[test]
    fn test_remove_unknown_id() {
        let mut ledger = Ledger::new();
        ledger.insert(Kind::Expense, 5000, Category::Comida);

        assert!(ledger.remove(999).is_none());
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_compute_totals_empty() {
        assert_eq!(
            compute_totals(&[]),
            Totals {
                income: 0,
                expenses: 0,
                balance: 0
            }
        );
    }

    #[test]
    fn test_compute_totals_mixed() {
        let mut ledger = Ledger::new();
        ledger.insert(Kind::Income, 100000, Category::Salario);
        ledger.insert(Kind::Income, 20000, Category::Ventas);
        ledger.insert(Kind::Expense, 30000, Category::Comida);

        let totals = compute_totals(ledger.transactions());
        assert_eq!(totals.income, 120000);
        assert_eq!(totals.expenses, 30000);
        assert_eq!(totals.balance, 90000);
    }

    #[test]
    fn test_trend_favorable() {
        let trend = balance_trend(&totals(100000, 30000)).unwrap();
        assert_eq!(trend.direction, TrendDirection::Favorable);
        assert_eq!(trend.percentage, 70);
    }

    #[test]
    fn test_trend_unfavorable() {
        let trend = balance_trend(&totals(10000, 30000)).unwrap();
        assert_eq!(trend.direction, TrendDirection::Unfavorable);
        assert_eq!(trend.percentage, 200);
    }

    #[test]
    fn test_trend_rounds_percentage() {
        // balance 666 of income 1000 -> 66.6% -> 67
        let trend = balance_trend(&totals(1000, 334)).unwrap();
        assert_eq!(trend.percentage, 67);
    }

    #[test]
    fn test_trend_zero_income_with_expenses() {
        let trend = balance_trend(&totals(0, 5000)).unwrap();
        assert_eq!(trend.direction, TrendDirection::Unfavorable);
        assert_eq!(trend.percentage, 100);
    }

    #[test]
    fn test_trend_empty_ledger_has_no_indicator() {
        assert_eq!(balance_trend(&totals(0, 0)), None);
    }

    #[test]
    fn test_trend_balanced_ledger_is_favorable_at_zero() {
        let trend = balance_trend(&totals(50000, 50000)).unwrap();
        assert_eq!(trend.direction, TrendDirection::Favorable);
        assert_eq!(trend.percentage, 0);
    }
}
