use serde::{Deserialize, Serialize};

use super::Cents;

/// Default official (BCV) rate: Bs 36,50 per USD.
pub const DEFAULT_OFFICIAL_RATE: Cents = 3650;

/// Default parallel-market rate: Bs 38,20 per USD.
pub const DEFAULT_PARALLEL_RATE: Cents = 3820;

/// The session's two Bs-per-USD conversion rates, in céntimos per dollar.
/// Supplied at startup and immutable for the process lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeRates {
    pub official: Cents,
    pub parallel: Cents,
}

impl ExchangeRates {
    pub fn new(official: Cents, parallel: Cents) -> Self {
        assert!(
            official > 0 && parallel > 0,
            "Exchange rates must be positive"
        );
        Self { official, parallel }
    }
}

impl Default for ExchangeRates {
    fn default() -> Self {
        Self {
            official: DEFAULT_OFFICIAL_RATE,
            parallel: DEFAULT_PARALLEL_RATE,
        }
    }
}

/// Convert a Bolívar amount to its USD equivalent at the given rate, both
/// in céntimos. Rounds half away from zero.
/// Example: 70000 (Bs 700,00) at rate 10300 -> 680 ($6.80)
pub fn to_usd_cents(amount_cents: Cents, rate_cents: Cents) -> Cents {
    debug_assert!(rate_cents > 0, "rate must be positive");

    let scaled = amount_cents as i128 * 100;
    let rate = rate_cents as i128;
    let quotient = (scaled.abs() + rate / 2) / rate;

    if amount_cents < 0 {
        -(quotient as Cents)
    } else {
        quotient as Cents
    }
}
