// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use cuadre::application::LedgerService;
use cuadre::domain::{Category, Cents, ExchangeRates, Kind, Transaction};

/// Rates fixed so USD figures in assertions stay stable:
/// official 103,00 Bs/USD, parallel 140,00 Bs/USD.
pub const OFFICIAL_RATE: Cents = 10300;
pub const PARALLEL_RATE: Cents = 14000;

/// Helper to create a test service with fixed exchange rates
pub fn test_service() -> LedgerService {
    LedgerService::new(ExchangeRates::new(OFFICIAL_RATE, PARALLEL_RATE))
}

/// Test fixture: one income and one expense.
/// Bs 1.000,00 Salario, Bs 300,00 Comida.
pub fn seed_salary_and_food(service: &mut LedgerService) -> (Transaction, Transaction) {
    let income = service
        .add_transaction(Kind::Income, 100_000, Category::Salario)
        .unwrap();
    let expense = service
        .add_transaction(Kind::Expense, 30_000, Category::Comida)
        .unwrap();
    (income, expense)
}
