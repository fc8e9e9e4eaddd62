//! Summary command - per-city tax totals on stdout

use crate::cmd::{ANNUAL_INCOME, CITIES};
use crate::money::{cad, display_amount};
use crate::tax::TaxBreakdown;
use clap::Args;
use serde::Serialize;

#[derive(Args, Debug)]
pub struct SummaryCommand {
    /// Output as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

/// Summary data for JSON output
#[derive(Debug, Serialize)]
struct SummaryData {
    income: String,
    cities: Vec<CitySummary>,
}

#[derive(Debug, Serialize)]
struct CitySummary {
    city: String,
    province: String,
    provincial_tax: String,
    federal_tax: String,
    total_tax: String,
    after_tax_income: String,
}

impl SummaryCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let summaries: Vec<CitySummary> = CITIES
            .iter()
            .map(|(city, province)| {
                let tax = province.tax();
                let breakdown = TaxBreakdown::calculate(ANNUAL_INCOME, &tax);
                CitySummary {
                    city: city.to_string(),
                    province: tax.province.to_string(),
                    provincial_tax: display_amount(&cad(breakdown.provincial)),
                    federal_tax: display_amount(&cad(breakdown.federal)),
                    total_tax: display_amount(&cad(breakdown.total)),
                    after_tax_income: display_amount(&cad(breakdown.after_tax)),
                }
            })
            .collect();

        let data = SummaryData {
            income: display_amount(&cad(ANNUAL_INCOME)),
            cities: summaries,
        };

        if self.json {
            println!("{}", serde_json::to_string_pretty(&data)?);
        } else {
            print_summary(&data);
        }
        Ok(())
    }
}

fn print_summary(data: &SummaryData) {
    println!();
    println!("CANADA TAX SUMMARY ({} income)", data.income);
    println!();

    for city in &data.cities {
        println!("{} ({})", city.city, city.province);
        println!("  Provincial: {}", city.provincial_tax);
        println!("  Federal: {}", city.federal_tax);
        println!("  Total: {}", city.total_tax);
        println!("  After tax income: {}", city.after_tax_income);
        println!();
    }
}
