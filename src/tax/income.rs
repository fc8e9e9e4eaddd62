use super::canada::{federal, Tax};
use rust_decimal::Decimal;

/// Calculate the tax owed to a single jurisdiction.
///
/// Walks the ordered brackets accumulating rate deltas: each bracket whose
/// limit the income exceeds contributes `(income - limit) * (rate -
/// previous rate)`. Income exactly equal to a limit stays in the lower
/// bracket. The basic personal credit is subtracted at the end; it cannot
/// turn the tax into a refund.
pub fn income_tax(income: Decimal, tax: &Tax) -> Decimal {
    let mut amount = Decimal::ZERO;
    let mut previous_rate = Decimal::ZERO;

    for bracket in &tax.brackets {
        if income <= bracket.income_limit {
            break;
        }
        amount += (income - bracket.income_limit) * (bracket.tax_rate - previous_rate);
        previous_rate = bracket.tax_rate;
    }

    (amount - tax.total_tax_credit()).max(Decimal::ZERO)
}

/// Combined provincial and federal tax for an income
pub fn total_income_tax(income: Decimal, provincial: &Tax) -> Decimal {
    income_tax(income, provincial) + income_tax(income, &federal())
}

/// Per-jurisdiction breakdown of the tax owed on an income
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxBreakdown {
    pub provincial: Decimal,
    pub federal: Decimal,
    pub total: Decimal,
    pub after_tax: Decimal,
}

impl TaxBreakdown {
    pub fn calculate(income: Decimal, provincial: &Tax) -> Self {
        let provincial_amount = income_tax(income, provincial);
        let federal_amount = income_tax(income, &federal());
        TaxBreakdown {
            provincial: provincial_amount,
            federal: federal_amount,
            total: total_income_tax(income, provincial),
            after_tax: income - provincial_amount - federal_amount,
        }
    }
}
