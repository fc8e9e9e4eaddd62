pub mod report;
pub mod summary;

use crate::tax::Province;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// The hypothetical annual income every report is computed for
pub const ANNUAL_INCOME: Decimal = dec!(100000);

/// Cities and the provincial table that applies to each
pub const CITIES: [(&str, Province); 4] = [
    ("Vancouver", Province::BritishColumbia),
    ("Edmonton", Province::Alberta),
    ("Montreal", Province::Quebec),
    ("Toronto", Province::Ontario),
];
