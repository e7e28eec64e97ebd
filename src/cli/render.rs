//! Text, JSON and CSV rendering of entries and summaries.

use std::io::Write;

use anyhow::Result;

use crate::domain::{
    CategoryTotal, DATE_FORMAT, Entry, MonthlySummary, NothingToSummarize, Totals, format_cents,
    format_grouped,
};
use crate::io::write_entries;

pub fn balance<W: Write>(out: &mut W, totals: &Totals, currency: &str, format: &str) -> Result<()> {
    match format {
        "json" => {
            writeln!(out, "{}", serde_json::to_string_pretty(totals)?)?;
        }
        "csv" => {
            let mut writer = csv::Writer::from_writer(&mut *out);
            writer.write_record(["income", "expense", "balance"])?;
            writer.write_record([
                format_cents(totals.income_total),
                format_cents(totals.expense_total),
                format_cents(totals.net_balance),
            ])?;
            writer.flush()?;
        }
        _ => {
            writeln!(out)?;
            writeln!(out, "---- Current Financial Summary ----")?;
            writeln!(
                out,
                "Total Income:    {}",
                format_grouped(totals.income_total, currency)
            )?;
            writeln!(
                out,
                "Total Expenses:  {}",
                format_grouped(totals.expense_total, currency)
            )?;
            writeln!(
                out,
                "Current Balance: {}",
                format_grouped(totals.net_balance, currency)
            )?;
        }
    }
    Ok(())
}

pub fn categories<W: Write>(
    out: &mut W,
    summary: &Result<Vec<CategoryTotal>, NothingToSummarize>,
    currency: &str,
    format: &str,
) -> Result<()> {
    let categories = match summary {
        Ok(categories) => categories,
        Err(nothing) => {
            writeln!(out, "{}", nothing)?;
            return Ok(());
        }
    };

    match format {
        "json" => {
            writeln!(out, "{}", serde_json::to_string_pretty(categories)?)?;
        }
        "csv" => {
            let mut writer = csv::Writer::from_writer(&mut *out);
            writer.write_record(["category", "total", "count", "percentage"])?;
            for c in categories {
                writer.write_record([
                    c.category.clone(),
                    format_cents(c.total),
                    c.count.to_string(),
                    format!("{:.2}", c.percentage),
                ])?;
            }
            writer.flush()?;
        }
        _ => {
            writeln!(out)?;
            writeln!(out, "---- Category-wise Expense Summary ----")?;
            writeln!(
                out,
                "{:<20} {:>15} {:>6} {:>7}",
                "CATEGORY", "AMOUNT", "COUNT", "SHARE"
            )?;
            writeln!(out, "{}", "-".repeat(51))?;
            for c in categories {
                writeln!(
                    out,
                    "{:<20} {:>15} {:>6} {:>6.1}%",
                    truncate(&c.category, 20),
                    format_grouped(c.total, currency),
                    c.count,
                    c.percentage
                )?;
            }
        }
    }
    Ok(())
}

pub fn monthly<W: Write>(
    out: &mut W,
    summary: &Result<Vec<MonthlySummary>, NothingToSummarize>,
    currency: &str,
    format: &str,
) -> Result<()> {
    let months = match summary {
        Ok(months) => months,
        Err(nothing) => {
            writeln!(out, "{}", nothing)?;
            return Ok(());
        }
    };

    match format {
        "json" => {
            writeln!(out, "{}", serde_json::to_string_pretty(months)?)?;
        }
        "csv" => {
            let mut writer = csv::Writer::from_writer(&mut *out);
            writer.write_record(["month", "income", "expense", "balance"])?;
            for m in months {
                writer.write_record([
                    m.month.to_string(),
                    format_cents(m.totals.income_total),
                    format_cents(m.totals.expense_total),
                    format_cents(m.totals.net_balance),
                ])?;
            }
            writer.flush()?;
        }
        _ => {
            writeln!(out)?;
            writeln!(out, "---- Monthly Summary ----")?;
            writeln!(
                out,
                "{:<8} {:>15} {:>15} {:>15}",
                "MONTH", "INCOME", "EXPENSE", "BALANCE"
            )?;
            writeln!(out, "{}", "-".repeat(56))?;
            for m in months {
                writeln!(
                    out,
                    "{:<8} {:>15} {:>15} {:>15}",
                    m.month.to_string(),
                    format_grouped(m.totals.income_total, currency),
                    format_grouped(m.totals.expense_total, currency),
                    format_grouped(m.totals.net_balance, currency)
                )?;
            }
        }
    }
    Ok(())
}

pub fn entries<W: Write>(
    out: &mut W,
    entries: &[Entry],
    currency: &str,
    format: &str,
) -> Result<()> {
    match format {
        "json" => {
            writeln!(out, "{}", serde_json::to_string_pretty(entries)?)?;
            return Ok(());
        }
        "csv" => {
            write_entries(&mut *out, entries)?;
            return Ok(());
        }
        _ => {}
    }

    if entries.is_empty() {
        writeln!(out, "No entries recorded yet.")?;
        return Ok(());
    }

    writeln!(
        out,
        "{:<12} {:<8} {:<15} {:>15} DESCRIPTION",
        "DATE", "TYPE", "CATEGORY", "AMOUNT"
    )?;
    writeln!(out, "{}", "-".repeat(70))?;
    for entry in entries {
        writeln!(
            out,
            "{:<12} {:<8} {:<15} {:>15} {}",
            entry.date().format(DATE_FORMAT).to_string(),
            entry.kind().as_str(),
            truncate(entry.category(), 15),
            format_grouped(entry.amount_cents(), currency),
            truncate(entry.description(), 30)
        )?;
    }
    Ok(())
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
