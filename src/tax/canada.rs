use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// A single marginal tax bracket: income above `income_limit` is taxed at
/// `tax_rate` (up to the next bracket's limit).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxBracket {
    pub income_limit: Decimal,
    pub tax_rate: Decimal,
}

/// Non-refundable personal tax credits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxCredits {
    pub basic_personal_amount: Decimal,
}

/// A jurisdiction's tax table: ordered brackets plus credits.
///
/// Brackets are ascending by `income_limit` with the first at 0. The tables
/// below are trusted constants so no ordering validation is performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tax {
    pub province: &'static str,
    pub credits: TaxCredits,
    pub brackets: Vec<TaxBracket>,
}

impl Tax {
    /// The basic personal amount exempted at the lowest bracket's rate
    pub fn total_tax_credit(&self) -> Decimal {
        self.credits.basic_personal_amount * self.brackets[0].tax_rate
    }
}

/// Province for which a 2021 tax table is available
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Province {
    BritishColumbia,
    Alberta,
    Quebec,
    Ontario,
}

impl Province {
    pub fn tax(&self) -> Tax {
        match self {
            Province::BritishColumbia => british_columbia(),
            Province::Alberta => alberta(),
            Province::Quebec => quebec(),
            Province::Ontario => ontario(),
        }
    }
}

fn bracket(income_limit: Decimal, tax_rate: Decimal) -> TaxBracket {
    TaxBracket {
        income_limit,
        tax_rate,
    }
}

// 2021 federal and provincial brackets:
// https://www.canada.ca/en/revenue-agency/services/tax/individuals/frequently-asked-questions-individuals/canadian-income-tax-rates-individuals-current-previous-years.html
//
// 2021 Non-Refundable Personal Tax Credits - Base Amounts:
// https://www.taxtips.ca/nrcredits/tax-credits-2021-base.htm#tax-credits-other-provinces

pub fn federal() -> Tax {
    Tax {
        province: "Federal",
        credits: TaxCredits {
            // TODO: 2020 value, update to the 2021 base amount
            basic_personal_amount: dec!(13229),
        },
        brackets: vec![
            bracket(dec!(0), dec!(0.15)),
            bracket(dec!(49020), dec!(0.205)),
            bracket(dec!(98040), dec!(0.26)),
            bracket(dec!(151978), dec!(0.29)),
            bracket(dec!(216511), dec!(0.33)),
        ],
    }
}

pub fn british_columbia() -> Tax {
    Tax {
        province: "British Columbia",
        credits: TaxCredits {
            basic_personal_amount: dec!(11070),
        },
        brackets: vec![
            bracket(dec!(0), dec!(0.0506)),
            bracket(dec!(42185), dec!(0.0770)),
            bracket(dec!(84370), dec!(0.1050)),
            bracket(dec!(96867), dec!(0.1229)),
            bracket(dec!(117624), dec!(0.1470)),
            bracket(dec!(159484), dec!(0.1680)),
            bracket(dec!(222421), dec!(0.2050)),
        ],
    }
}

pub fn alberta() -> Tax {
    Tax {
        province: "Alberta",
        credits: TaxCredits {
            basic_personal_amount: dec!(19369),
        },
        brackets: vec![
            bracket(dec!(0), dec!(0.10)),
            bracket(dec!(128145), dec!(0.12)),
            bracket(dec!(153773), dec!(0.13)),
            bracket(dec!(205031), dec!(0.14)),
            bracket(dec!(307547), dec!(0.15)),
        ],
    }
}

pub fn quebec() -> Tax {
    Tax {
        province: "Quebec",
        credits: TaxCredits {
            basic_personal_amount: dec!(15532),
        },
        brackets: vec![
            bracket(dec!(0), dec!(0.15)),
            bracket(dec!(45105), dec!(0.20)),
            bracket(dec!(90200), dec!(0.24)),
            bracket(dec!(109755), dec!(0.2575)),
        ],
    }
}

pub fn ontario() -> Tax {
    Tax {
        province: "Ontario",
        credits: TaxCredits {
            basic_personal_amount: dec!(10880),
        },
        brackets: vec![
            bracket(dec!(0), dec!(0.0505)),
            bracket(dec!(45142), dec!(0.0915)),
            bracket(dec!(90287), dec!(0.1116)),
            bracket(dec!(150000), dec!(0.1216)),
            bracket(dec!(220000), dec!(0.1316)),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_tables() -> Vec<Tax> {
        vec![
            federal(),
            british_columbia(),
            alberta(),
            quebec(),
            ontario(),
        ]
    }

    #[test]
    fn first_bracket_starts_at_zero() {
        for tax in all_tables() {
            assert_eq!(
                tax.brackets[0].income_limit,
                Decimal::ZERO,
                "{}",
                tax.province
            );
        }
    }

    #[test]
    fn brackets_ascend_by_income_limit() {
        for tax in all_tables() {
            for pair in tax.brackets.windows(2) {
                assert!(
                    pair[0].income_limit < pair[1].income_limit,
                    "{}: {} !< {}",
                    tax.province,
                    pair[0].income_limit,
                    pair[1].income_limit
                );
            }
        }
    }

    #[test]
    fn rates_are_fractions() {
        for tax in all_tables() {
            for bracket in &tax.brackets {
                assert!(bracket.tax_rate >= Decimal::ZERO);
                assert!(bracket.tax_rate < Decimal::ONE);
            }
        }
    }

    #[test]
    fn federal_total_tax_credit() {
        assert_eq!(federal().total_tax_credit(), dec!(1984.35));
    }

    #[test]
    fn ontario_total_tax_credit() {
        assert_eq!(ontario().total_tax_credit(), dec!(549.44));
    }

    #[test]
    fn province_tables_carry_their_own_name() {
        assert_eq!(Province::BritishColumbia.tax().province, "British Columbia");
        assert_eq!(Province::Alberta.tax().province, "Alberta");
        assert_eq!(Province::Quebec.tax().province, "Quebec");
        assert_eq!(Province::Ontario.tax().province, "Ontario");
    }
}
