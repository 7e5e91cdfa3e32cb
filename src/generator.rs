//! Dataset generator: walks every day and branch, emitting transaction lines

use anyhow::{bail, Result};
use chrono::{Datelike, NaiveDate};
use serde::{Serialize, Serializer};

use crate::calendar::{date_range, expected_transactions, promotion_probability, DayContext};
use crate::catalog::{products_in, round_to, unit_price, Branch, Category, Zone, BRANCHES};
use crate::sampler::{Sampler, SeededSampler};
use crate::ui::{Phase, SilentUi, Ui};

/// Seed used when none is given
pub const DEFAULT_SEED: u64 = 42;

/// Default simulated range, 2022-01-01 through 2024-12-31
pub const DEFAULT_START: NaiveDate = ymd(2022, 1, 1);
pub const DEFAULT_END: NaiveDate = ymd(2024, 12, 31);

const fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid calendar date"),
    }
}

/// Bounds on transaction lines per branch per day
pub const MIN_DAILY_TRANSACTIONS: u64 = 1;
pub const MAX_DAILY_TRANSACTIONS: u64 = 25;

/// Quantity boost on days hotter than the threshold
pub const HOT_DAY_QUANTITY_BOOST: f64 = 1.2;

/// One generated sale record, fields in output column order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionLine {
    pub date: NaiveDate,
    pub branch_id: u32,
    pub category: Category,
    pub product_name: &'static str,
    pub unit_price: f64,
    pub quantity_sold: u64,
    pub total_amount: f64,
    pub day_of_week: u32,
    pub month: u32,
    #[serde(serialize_with = "as_flag")]
    pub promotion_active: bool,
    pub special_event: &'static str,
    pub average_temperature: f64,
    #[serde(serialize_with = "as_flag")]
    pub rain: bool,
    pub branch_zone: Zone,
}

/// Booleans are written as 0/1
fn as_flag<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u8(u8::from(*value))
}

/// Run parameters. Demand factors stay fixed; only seed and range vary.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub seed: u64,
    /// First simulated day
    pub start: NaiveDate,
    /// Last simulated day, inclusive
    pub end: NaiveDate,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            start: DEFAULT_START,
            end: DEFAULT_END,
        }
    }
}

impl GeneratorConfig {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.start > self.end {
            bail!(
                "Start date {} is after end date {}",
                self.start,
                self.end
            );
        }
        Ok(())
    }

    /// Number of simulated days
    pub fn day_count(&self) -> u64 {
        ((self.end - self.start).num_days() + 1).max(0) as u64
    }
}

/// Generate the default three-year dataset for a seed
pub fn generate(seed: u64) -> Vec<TransactionLine> {
    let generator = DatasetGenerator::new(GeneratorConfig::with_seed(seed));
    let mut sampler = SeededSampler::new(seed);
    generator.simulate(&mut sampler, &mut SilentUi::new())
}

pub struct DatasetGenerator {
    config: GeneratorConfig,
}

impl DatasetGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Validate the config, then generate and sort the full table
    pub fn run(
        &self,
        sampler: &mut impl Sampler,
        ui: &mut impl Ui,
    ) -> Result<Vec<TransactionLine>> {
        self.config.validate()?;
        Ok(self.simulate(sampler, ui))
    }

    fn simulate(&self, sampler: &mut impl Sampler, ui: &mut impl Ui) -> Vec<TransactionLine> {
        let total_days = self.config.day_count();
        ui.set_phase(Phase::Generating);
        ui.log(format!("Generating data for {} days...", total_days));

        let mut lines = Vec::new();
        for (idx, date) in date_range(self.config.start, self.config.end).enumerate() {
            let day = DayContext::simulate(date, sampler);
            for branch in BRANCHES {
                self.generate_branch_day(&day, branch, sampler, &mut lines);
            }
            ui.set_info(day.describe());
            ui.set_progress(idx as u64 + 1, total_days, date.to_string());
        }

        ui.set_phase(Phase::Sorting);
        ui.clear_progress();
        sort_lines(&mut lines);
        ui.log(format!("Generated {} transaction lines", lines.len()));

        lines
    }

    /// Emit every line sold by one branch on one day
    pub fn generate_branch_day(
        &self,
        day: &DayContext,
        branch: &Branch,
        sampler: &mut impl Sampler,
        out: &mut Vec<TransactionLine>,
    ) {
        let mean = expected_transactions(day.date, branch.zone, day.event);
        let count = sampler
            .poisson(mean)
            .clamp(MIN_DAILY_TRANSACTIONS, MAX_DAILY_TRANSACTIONS);

        for _ in 0..count {
            out.push(self.generate_line(day, branch, sampler));
        }
    }

    fn generate_line(
        &self,
        day: &DayContext,
        branch: &Branch,
        sampler: &mut impl Sampler,
    ) -> TransactionLine {
        let weights = Category::ALL.map(Category::weight);
        let category = Category::ALL[sampler.weighted_choice(&weights)];

        let products = products_in(category);
        let product = &products[sampler.choose_index(products.len()).min(products.len() - 1)];
        let price = unit_price(product, day.date.year());

        let base_quantity = sampler.poisson(category.mean_quantity());
        let heat = if day.is_hot() { HOT_DAY_QUANTITY_BOOST } else { 1.0 };
        let quantity = ((base_quantity as f64 * day.event_multiplier() * heat).floor() as u64).max(1);

        let promotion_active = sampler.bernoulli(promotion_probability(day.event));

        TransactionLine {
            date: day.date,
            branch_id: branch.id,
            category,
            product_name: product.name,
            unit_price: price,
            quantity_sold: quantity,
            total_amount: round_to(price * quantity as f64, 2),
            day_of_week: day.day_of_week(),
            month: day.date.month(),
            promotion_active,
            special_event: day.event_name(),
            average_temperature: day.reported_temperature(),
            rain: day.rain,
            branch_zone: branch.zone,
        }
    }
}

/// Stable sort by (date, branch_id); lines within a branch-day keep their order
pub fn sort_lines(lines: &mut [TransactionLine]) {
    lines.sort_by_key(|line| (line.date, line.branch_id));
}
