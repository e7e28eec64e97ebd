//! Read-only summaries computed from the current ledger contents.
//!
//! Every function here is a pure fold over a slice of entries: calling one
//! twice without appending in between gives identical results.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Serialize, Serializer};
use thiserror::Error;

use super::{Cents, Entry, EntryKind};

/// Income, expense and their difference over some set of entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub income_total: Cents,
    pub expense_total: Cents,
    pub net_balance: Cents,
}

impl Totals {
    // Saturates rather than wrapping: admitted amounts are capped at
    // MAX_AMOUNT_CENTS, so only thousands of maximal entries reach the bound.
    fn record(&mut self, entry: &Entry) {
        match entry.kind() {
            EntryKind::Income => {
                self.income_total = self.income_total.saturating_add(entry.amount_cents())
            }
            EntryKind::Expense => {
                self.expense_total = self.expense_total.saturating_add(entry.amount_cents())
            }
        }
        self.net_balance = self.income_total.saturating_sub(self.expense_total);
    }
}

/// Calendar month used as the monthly grouping key. Orders chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl Serialize for YearMonth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Cents,
    /// Number of expense entries in this category
    pub count: usize,
    /// Share of all expenses, 0-100
    pub percentage: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthlySummary {
    pub month: YearMonth,
    #[serde(flatten)]
    pub totals: Totals,
}

/// Returned instead of an empty table when there is nothing to report.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NothingToSummarize {
    #[error("No data to summarize.")]
    NoEntries,

    #[error("No expenses recorded yet.")]
    NoExpenses,
}

/// Overall income, expense and net balance. All zero for an empty ledger.
pub fn balance(entries: &[Entry]) -> Totals {
    entries.iter().fold(Totals::default(), |mut totals, entry| {
        totals.record(entry);
        totals
    })
}

/// Expense totals grouped by exact category label, largest first.
/// Equal totals keep the order in which their categories first appeared.
pub fn by_category(entries: &[Entry]) -> Result<Vec<CategoryTotal>, NothingToSummarize> {
    if entries.is_empty() {
        return Err(NothingToSummarize::NoEntries);
    }

    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut buckets: Vec<(&str, Cents, usize)> = Vec::new();

    for entry in entries.iter().filter(|e| e.is_expense()) {
        let slot = *index.entry(entry.category()).or_insert_with(|| {
            buckets.push((entry.category(), 0, 0));
            buckets.len() - 1
        });
        buckets[slot].1 = buckets[slot].1.saturating_add(entry.amount_cents());
        buckets[slot].2 += 1;
    }

    if buckets.is_empty() {
        return Err(NothingToSummarize::NoExpenses);
    }

    let expense_total = buckets
        .iter()
        .fold(0 as Cents, |sum, (_, total, _)| sum.saturating_add(*total));

    // sort_by is stable, so ties stay in first-seen order
    buckets.sort_by(|a, b| b.1.cmp(&a.1));

    Ok(buckets
        .into_iter()
        .map(|(category, total, count)| CategoryTotal {
            category: category.to_string(),
            total,
            count,
            percentage: if expense_total == 0 {
                0.0
            } else {
                (total as f64 / expense_total as f64) * 100.0
            },
        })
        .collect())
}

/// Income/expense/net per calendar month, oldest month first.
pub fn by_month(entries: &[Entry]) -> Result<Vec<MonthlySummary>, NothingToSummarize> {
    if entries.is_empty() {
        return Err(NothingToSummarize::NoEntries);
    }

    let mut months: BTreeMap<YearMonth, Totals> = BTreeMap::new();
    for entry in entries {
        months
            .entry(YearMonth::of(entry.date()))
            .or_default()
            .record(entry);
    }

    Ok(months
        .into_iter()
        .map(|(month, totals)| MonthlySummary { month, totals })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{RawEntry, validate_on};

    fn make_entry(kind: &str, category: &str, amount: &str, date: &str) -> Entry {
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        validate_on(
            RawEntry {
                kind,
                category,
                description: "",
                amount,
                date,
            },
            today,
        )
        .unwrap()
    }

    fn sample() -> Vec<Entry> {
        vec![
            make_entry("Income", "Salary", "3000", "2024-01-01"),
            make_entry("Expense", "Rent", "1200", "2024-01-02"),
            make_entry("Expense", "Food", "150.25", "2024-01-15"),
            make_entry("Expense", "Food", "80.75", "2024-02-03"),
            make_entry("Income", "Freelance", "450", "2024-02-20"),
            make_entry("Expense", "Transport", "60", "2023-12-30"),
        ]
    }

    #[test]
    fn test_balance_income_and_expense() {
        let entries = vec![
            make_entry("Income", "Salary", "1000", "2024-01-05"),
            make_entry("Expense", "Food", "200", "2024-01-10"),
        ];

        let totals = balance(&entries);
        assert_eq!(totals.income_total, 100000);
        assert_eq!(totals.expense_total, 20000);
        assert_eq!(totals.net_balance, 80000);
    }

    #[test]
    fn test_balance_empty_is_zero() {
        assert_eq!(balance(&[]), Totals::default());
        assert_eq!(balance(&[]).net_balance, 0);
    }

    #[test]
    fn test_balance_net_identity() {
        let totals = balance(&sample());
        assert_eq!(
            totals.net_balance,
            totals.income_total - totals.expense_total
        );
    }

    #[test]
    fn test_category_merges_same_label() {
        let entries = vec![
            make_entry("Expense", "Food", "50", "2024-01-01"),
            make_entry("Expense", "Food", "30", "2024-02-01"),
        ];

        let categories = by_category(&entries).unwrap();
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].category, "Food");
        assert_eq!(categories[0].total, 8000);
        assert_eq!(categories[0].count, 2);
        assert!((categories[0].percentage - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_category_sorted_descending_ignores_income() {
        let categories = by_category(&sample()).unwrap();
        let labels: Vec<&str> = categories.iter().map(|c| c.category.as_str()).collect();
        assert_eq!(labels, vec!["Rent", "Food", "Transport"]);
        assert_eq!(categories[1].total, 23100);
    }

    #[test]
    fn test_category_ties_keep_first_seen_order() {
        let entries = vec![
            make_entry("Expense", "Books", "10", "2024-01-01"),
            make_entry("Expense", "Games", "25", "2024-01-02"),
            make_entry("Expense", "Apps", "10", "2024-01-03"),
            make_entry("Expense", "Coffee", "10", "2024-01-04"),
        ];

        let labels: Vec<String> = by_category(&entries)
            .unwrap()
            .into_iter()
            .map(|c| c.category)
            .collect();
        assert_eq!(labels, vec!["Games", "Books", "Apps", "Coffee"]);
    }

    #[test]
    fn test_category_labels_are_case_sensitive() {
        let entries = vec![
            make_entry("Expense", "food", "5", "2024-01-01"),
            make_entry("Expense", "Food", "7", "2024-01-01"),
        ];
        assert_eq!(by_category(&entries).unwrap().len(), 2);
    }

    #[test]
    fn test_category_totals_sum_to_expense_total() {
        let entries = sample();
        let sum: Cents = by_category(&entries).unwrap().iter().map(|c| c.total).sum();
        assert_eq!(sum, balance(&entries).expense_total);
    }

    #[test]
    fn test_category_empty_signals() {
        assert_eq!(by_category(&[]), Err(NothingToSummarize::NoEntries));

        let income_only = vec![make_entry("Income", "Salary", "10", "2024-01-01")];
        assert_eq!(
            by_category(&income_only),
            Err(NothingToSummarize::NoExpenses)
        );
    }

    #[test]
    fn test_category_percentage_with_zero_total() {
        let entries = vec![make_entry("Expense", "Free", "0", "2024-01-01")];
        let categories = by_category(&entries).unwrap();
        assert_eq!(categories[0].percentage, 0.0);
    }

    #[test]
    fn test_monthly_defaults_missing_side_to_zero() {
        let entries = vec![
            make_entry("Income", "Salary", "500", "2024-01-15"),
            make_entry("Expense", "Misc", "100", "2024-02-15"),
        ];

        let months = by_month(&entries).unwrap();
        assert_eq!(
            months,
            vec![
                MonthlySummary {
                    month: YearMonth {
                        year: 2024,
                        month: 1
                    },
                    totals: Totals {
                        income_total: 50000,
                        expense_total: 0,
                        net_balance: 50000,
                    },
                },
                MonthlySummary {
                    month: YearMonth {
                        year: 2024,
                        month: 2
                    },
                    totals: Totals {
                        income_total: 0,
                        expense_total: 10000,
                        net_balance: -10000,
                    },
                },
            ]
        );
    }

    #[test]
    fn test_monthly_is_chronological_not_insertion_order() {
        let months: Vec<String> = by_month(&sample())
            .unwrap()
            .iter()
            .map(|m| m.month.to_string())
            .collect();
        assert_eq!(months, vec!["2023-12", "2024-01", "2024-02"]);
    }

    #[test]
    fn test_monthly_net_sums_to_overall_net() {
        let entries = sample();
        let sum: Cents = by_month(&entries)
            .unwrap()
            .iter()
            .map(|m| m.totals.net_balance)
            .sum();
        assert_eq!(sum, balance(&entries).net_balance);
    }

    #[test]
    fn test_monthly_empty_signal() {
        assert_eq!(by_month(&[]), Err(NothingToSummarize::NoEntries));
    }

    #[test]
    fn test_summaries_are_idempotent() {
        let entries = sample();
        assert_eq!(balance(&entries), balance(&entries));
        assert_eq!(by_category(&entries), by_category(&entries));
        assert_eq!(by_month(&entries), by_month(&entries));
    }

    #[test]
    fn test_largest_amounts_sum_without_overflow() {
        use crate::domain::MAX_AMOUNT_CENTS;

        let entries = vec![
            make_entry("Income", "Windfall", "10000000000000", "2024-01-01"),
            make_entry("Income", "Windfall", "10000000000000", "2024-01-02"),
            make_entry("Expense", "Yacht", "10000000000000", "2024-01-03"),
            make_entry("Expense", "Yacht", "10000000000000", "2024-01-04"),
        ];
        assert_eq!(entries[0].amount_cents(), MAX_AMOUNT_CENTS);

        let totals = balance(&entries[..2]);
        assert_eq!(totals.income_total, 2 * MAX_AMOUNT_CENTS);
        assert_eq!(totals.net_balance, 2 * MAX_AMOUNT_CENTS);

        let totals = balance(&entries);
        assert_eq!(totals.expense_total, 2 * MAX_AMOUNT_CENTS);
        assert_eq!(totals.net_balance, 0);

        let categories = by_category(&entries).unwrap();
        assert_eq!(categories[0].total, 2 * MAX_AMOUNT_CENTS);
        assert!((categories[0].percentage - 100.0).abs() < f64::EPSILON);

        let months = by_month(&entries).unwrap();
        assert_eq!(months[0].totals, totals);
    }

    #[test]
    fn test_totals_saturate_instead_of_wrapping() {
        let entry = make_entry("Income", "Windfall", "10000000000000", "2024-01-01");
        let entries = vec![entry; 10_000];

        let totals = balance(&entries);
        assert_eq!(totals.income_total, Cents::MAX);
        assert_eq!(totals.net_balance, Cents::MAX);
    }

    #[test]
    fn test_year_month_json() {
        let summary = MonthlySummary {
            month: YearMonth {
                year: 2024,
                month: 3,
            },
            totals: Totals::default(),
        };
        let json = serde_json::to_value(summary).unwrap();
        assert_eq!(json["month"], "2024-03");
        assert_eq!(json["income_total"], 0);
    }
}
