//! Summary statistics over a generated table

use chrono::NaiveDate;
use std::collections::HashSet;
use std::fmt;

use crate::catalog::Category;
use crate::generator::TransactionLine;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DatasetSummary {
    pub row_count: usize,
    pub first_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
    pub distinct_dates: usize,
    pub distinct_branches: usize,
    pub distinct_products: usize,
    pub total_revenue: f64,
    pub average_ticket: f64,
    pub max_ticket: f64,
    /// Categories in order of first appearance, with line counts
    pub categories: Vec<(Category, usize)>,
}

impl DatasetSummary {
    pub fn from_lines(lines: &[TransactionLine]) -> Self {
        let mut dates = HashSet::new();
        let mut branches = HashSet::new();
        let mut products = HashSet::new();
        let mut categories: Vec<(Category, usize)> = Vec::new();
        let mut total_revenue = 0.0;
        let mut max_ticket: f64 = 0.0;

        for line in lines {
            dates.insert(line.date);
            branches.insert(line.branch_id);
            products.insert(line.product_name);
            total_revenue += line.total_amount;
            max_ticket = max_ticket.max(line.total_amount);

            match categories.iter_mut().find(|(c, _)| *c == line.category) {
                Some((_, count)) => *count += 1,
                None => categories.push((line.category, 1)),
            }
        }

        let average_ticket = if lines.is_empty() {
            0.0
        } else {
            total_revenue / lines.len() as f64
        };

        Self {
            row_count: lines.len(),
            first_date: dates.iter().min().copied(),
            last_date: dates.iter().max().copied(),
            distinct_dates: dates.len(),
            distinct_branches: branches.len(),
            distinct_products: products.len(),
            total_revenue,
            average_ticket,
            max_ticket,
            categories,
        }
    }

    /// Average transaction lines per simulated day
    pub fn lines_per_day(&self) -> f64 {
        if self.distinct_dates == 0 {
            0.0
        } else {
            self.row_count as f64 / self.distinct_dates as f64
        }
    }

    /// Share of lines in a category, 0.0 when absent
    pub fn category_share(&self, category: Category) -> f64 {
        if self.row_count == 0 {
            return 0.0;
        }
        self.categories
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, count)| *count as f64 / self.row_count as f64)
            .unwrap_or(0.0)
    }
}

impl fmt::Display for DatasetSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Dataset generated with {} records", self.row_count)?;
        match (self.first_date, self.last_date) {
            (Some(first), Some(last)) => writeln!(f, "Period: {} to {}", first, last)?,
            _ => writeln!(f, "Period: (empty)")?,
        }
        writeln!(f, "Branches: {}", self.distinct_branches)?;
        writeln!(f, "Unique products: {}", self.distinct_products)?;
        writeln!(f, "Total sales: ${}", format_money(self.total_revenue))?;
        writeln!(f)?;
        writeln!(f, "Basic statistics:")?;
        writeln!(f, "  - Lines per day: {:.1}", self.lines_per_day())?;
        writeln!(f, "  - Average ticket: ${:.2}", self.average_ticket)?;
        writeln!(f, "  - Max ticket: ${:.2}", self.max_ticket)?;
        let names: Vec<&str> = self.categories.iter().map(|(c, _)| c.as_str()).collect();
        write!(f, "  - Categories: {}", names.join(", "))
    }
}

/// Format an amount with thousands separators and two decimals
fn format_money(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (idx, c) in whole.chars().enumerate() {
        if idx > 0 && (whole.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, cents)
}
