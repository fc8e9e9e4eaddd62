use rust_decimal::Decimal;
use rusty_money::define_currency_set;

pub type Money<'a> = rusty_money::Money<'a, currencies::Currency>;

define_currency_set!(
    currencies {
        CAD: {
            code: "CAD",
            exponent: 2,
            locale: EnUs,
            minor_units: 100,
            name: "Canadian Dollar",
            symbol: "$",
            symbol_first: true,
        }
    }
);

pub fn cad<'a>(amount: Decimal) -> Money<'a> {
    rusty_money::Money::from_decimal(amount, currencies::CAD)
}

/// Format as localized currency, e.g. "$12,345.67".
///
/// Amounts are rescaled to cents so whole-dollar values keep their
/// trailing ".00".
pub fn display_amount(amt: &Money) -> String {
    let mut cents = amt.amount().round_dp(2);
    cents.rescale(2);
    let rounded = rusty_money::Money::from_decimal(cents, amt.currency());
    let params = rusty_money::Params {
        symbol: Some(amt.currency().symbol),
        ..Default::default()
    };
    rusty_money::Formatter::money(&rounded, params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn symbol_and_grouping() {
        assert_eq!(display_amount(&cad(dec!(12345.67))), "$12,345.67");
    }

    #[test]
    fn whole_amounts_keep_cents() {
        assert_eq!(display_amount(&cad(dec!(100000))), "$100,000.00");
    }

    #[test]
    fn rounds_to_cents() {
        assert_eq!(display_amount(&cad(dec!(6944.9693))), "$6,944.97");
        assert_eq!(display_amount(&cad(dec!(22447.2447))), "$22,447.24");
    }

    #[test]
    fn zero() {
        assert_eq!(display_amount(&cad(dec!(0))), "$0.00");
    }

    #[test]
    fn negative_amounts_keep_sign() {
        assert_eq!(display_amount(&cad(dec!(-1234.5))), "-$1,234.50");
    }
}
