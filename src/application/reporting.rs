use serde::{Deserialize, Serialize};

use crate::domain::{
    BalanceTrend, Cents, ExchangeRates, Totals, Transaction, balance_trend, compute_totals,
    to_usd_cents,
};

/// USD equivalents of one Bolívar figure under both session rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FxPair {
    pub official: Cents,
    pub parallel: Cents,
}

impl FxPair {
    pub fn of(amount_cents: Cents, rates: ExchangeRates) -> Self {
        Self {
            official: to_usd_cents(amount_cents, rates.official),
            parallel: to_usd_cents(amount_cents, rates.parallel),
        }
    }
}

/// The session summary: the three running totals, the balance trend, and
/// each figure's USD equivalents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryReport {
    pub totals: Totals,
    pub trend: Option<BalanceTrend>,
    pub income_usd: FxPair,
    pub expenses_usd: FxPair,
    pub balance_usd: FxPair,
}

/// Build the session summary from the current transactions. Always a
/// fresh computation over the ledger's state at call time.
pub fn build_summary(transactions: &[Transaction], rates: ExchangeRates) -> SummaryReport {
    let totals = compute_totals(transactions);

    SummaryReport {
        totals,
        trend: balance_trend(&totals),
        income_usd: FxPair::of(totals.income, rates),
        expenses_usd: FxPair::of(totals.expenses, rates),
        balance_usd: FxPair::of(totals.balance, rates),
    }
}
