pub mod canada;
pub mod income;

pub use canada::{federal, Province, Tax, TaxBracket, TaxCredits};
pub use income::{income_tax, total_income_tax, TaxBreakdown};
