mod category;
mod ledger;
mod money;
mod rates;
mod transaction;

pub use category::*;
pub use ledger::*;
pub use money::*;
pub use rates::*;
pub use transaction::*;
