//! Markdown report generation
//!
//! Writes the summary document the whole program exists for: one bullet
//! block per city with total, provincial and federal tax plus the after-tax
//! income, formatted as Canadian dollars.

use crate::cmd::{ANNUAL_INCOME, CITIES};
use crate::money::{cad, display_amount};
use crate::tax::TaxBreakdown;
use clap::Args;
use rust_decimal::Decimal;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct ReportCommand {
    /// Output file path
    #[arg(short, long, default_value = "README.md")]
    output: PathBuf,
}

impl ReportCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let file = File::create(&self.output)?;
        let mut writer = BufWriter::new(file);
        generate(ANNUAL_INCOME, &mut writer)?;
        writer.flush()?;
        log::info!("report written to {}", self.output.display());
        Ok(())
    }
}

/// Line-oriented markdown sink. Heading lines get a trailing blank line.
pub struct Document<W: Write> {
    writer: W,
}

impl<W: Write> Document<W> {
    pub fn new(writer: W) -> Self {
        Document { writer }
    }

    pub fn println(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.writer, "{line}")?;
        if line.starts_with('#') {
            writeln!(self.writer)?;
        }
        Ok(())
    }
}

/// Write the full markdown report for an income
pub fn generate<W: Write>(income: Decimal, writer: W) -> io::Result<()> {
    let mut doc = Document::new(writer);

    doc.println("# Canada Tax Brackets")?;
    doc.println(
        "If you are making $x per year, how much tax would you pay \
        if you are living Vancouver, Toronto, Montreal, or Edmonton? ",
    )?;
    doc.println("")?;

    let income_formatted = display_amount(&cad(income));
    doc.println(&format!(
        "If you are making {income_formatted} per year, you would pay ..."
    ))?;

    for (city, province) in CITIES {
        let breakdown = TaxBreakdown::calculate(income, &province.tax());

        doc.println(&format!(
            " + {} of tax in {}",
            display_amount(&cad(breakdown.total)),
            city
        ))?;
        doc.println(&format!(
            "   -  Provincial: {}",
            display_amount(&cad(breakdown.provincial))
        ))?;
        doc.println(&format!(
            "   -  Federal: {}",
            display_amount(&cad(breakdown.federal))
        ))?;
        doc.println(&format!(
            "   -  After tax income: {}",
            display_amount(&cad(breakdown.after_tax))
        ))?;
    }

    doc.println("")?;
    Ok(())
}
