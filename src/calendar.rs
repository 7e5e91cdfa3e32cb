//! Calendar-driven demand factors and the per-day weather proxy

use chrono::{Datelike, NaiveDate, Weekday};
use std::f64::consts::PI;

use crate::catalog::{round_to, Event, Zone, EVENTS};
use crate::sampler::Sampler;

/// Mean daily transaction lines for a branch before any multiplier
pub const BASE_DAILY_TRANSACTIONS: f64 = 8.0;

/// Mean temperature around which the seasonal curve oscillates
pub const BASE_TEMPERATURE: f64 = 24.0;
pub const SEASONAL_AMPLITUDE: f64 = 3.0;
pub const TEMPERATURE_NOISE_STD_DEV: f64 = 2.0;

/// Above this temperature, quantities get a boost
pub const HOT_DAY_THRESHOLD: f64 = 28.0;

/// Iterate every calendar day from `start` to `end`, both inclusive
pub fn date_range(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    start.iter_days().take_while(move |d| *d <= end)
}

/// Find the first declared event occurring on this date
pub fn resolve_event(date: NaiveDate) -> Option<&'static Event> {
    EVENTS
        .iter()
        .find(|event| event.occurs_on(date.month(), date.day()))
}

pub fn weekday_multiplier(date: NaiveDate) -> f64 {
    match date.weekday() {
        Weekday::Fri => 1.4,
        Weekday::Sat => 1.6,
        Weekday::Sun => 1.2,
        _ => 1.0,
    }
}

pub fn month_multiplier(month: u32) -> f64 {
    match month {
        12 => 1.5,
        6 | 7 | 8 => 1.2,
        _ => 1.0,
    }
}

pub fn event_multiplier(event: Option<&Event>) -> f64 {
    if event.is_some() {
        2.0
    } else {
        1.0
    }
}

/// Poisson mean of the transaction count for one branch on one day
pub fn expected_transactions(date: NaiveDate, zone: Zone, event: Option<&Event>) -> f64 {
    BASE_DAILY_TRANSACTIONS
        * weekday_multiplier(date)
        * month_multiplier(date.month())
        * event_multiplier(event)
        * zone.demand_multiplier()
}

/// Rain is likelier during the two rainy seasons
pub fn rain_probability(month: u32) -> f64 {
    match month {
        4 | 5 | 10 | 11 => 0.4,
        _ => 0.1,
    }
}

pub fn promotion_probability(event: Option<&Event>) -> f64 {
    if event.is_some() {
        0.30
    } else {
        0.15
    }
}

/// Seasonal mean temperature for a month, without noise
pub fn seasonal_temperature(month: u32) -> f64 {
    BASE_TEMPERATURE + SEASONAL_AMPLITUDE * (2.0 * PI * month as f64 / 12.0).sin()
}

/// Day-level attributes shared by every branch
#[derive(Debug, Clone)]
pub struct DayContext {
    pub date: NaiveDate,
    pub event: Option<&'static Event>,
    /// Unrounded simulated temperature
    pub temperature: f64,
    pub rain: bool,
}

impl DayContext {
    /// Resolve the event and draw the weather for a date
    pub fn simulate(date: NaiveDate, sampler: &mut impl Sampler) -> Self {
        let event = resolve_event(date);
        let temperature =
            seasonal_temperature(date.month()) + sampler.normal(0.0, TEMPERATURE_NOISE_STD_DEV);
        let rain = sampler.bernoulli(rain_probability(date.month()));

        Self {
            date,
            event,
            temperature,
            rain,
        }
    }

    pub fn event_name(&self) -> &'static str {
        self.event
            .map(|e| e.name)
            .unwrap_or(crate::catalog::NO_EVENT)
    }

    pub fn event_multiplier(&self) -> f64 {
        event_multiplier(self.event)
    }

    pub fn is_hot(&self) -> bool {
        self.temperature > HOT_DAY_THRESHOLD
    }

    /// Temperature as written to the dataset
    pub fn reported_temperature(&self) -> f64 {
        round_to(self.temperature, 1)
    }

    /// Short event and weather line for progress output
    pub fn describe(&self) -> String {
        let rain = if self.rain { ", rain" } else { "" };
        format!(
            "{}, {:.1}°C{}",
            self.event_name(),
            self.reported_temperature(),
            rain
        )
    }

    /// ISO weekday, 1 = Monday through 7 = Sunday
    pub fn day_of_week(&self) -> u32 {
        self.date.weekday().number_from_monday()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_date_range_covers_three_years() {
        let days: Vec<_> = date_range(date(2022, 1, 1), date(2024, 12, 31)).collect();
        assert_eq!(days.len(), 1096);
        assert_eq!(days.first(), Some(&date(2022, 1, 1)));
        assert_eq!(days.last(), Some(&date(2024, 12, 31)));
        assert!(days.contains(&date(2024, 2, 29)));
    }

    #[test]
    fn test_date_range_single_and_empty() {
        assert_eq!(date_range(date(2023, 5, 1), date(2023, 5, 1)).count(), 1);
        assert_eq!(date_range(date(2023, 5, 2), date(2023, 5, 1)).count(), 0);
    }

    #[test]
    fn test_resolve_event() {
        assert_eq!(resolve_event(date(2022, 12, 25)).unwrap().name, "Navidad");
        assert_eq!(resolve_event(date(2023, 12, 31)).unwrap().name, "Año_Nuevo");
        assert_eq!(resolve_event(date(2024, 3, 31)).unwrap().name, "Pascua");
        assert_eq!(resolve_event(date(2024, 6, 19)).unwrap().name, "Dia_Padre");
        assert!(resolve_event(date(2022, 4, 12)).is_none());
    }

    #[test]
    fn test_weekday_multiplier() {
        // 2022-01-07 was a Friday
        assert_eq!(weekday_multiplier(date(2022, 1, 7)), 1.4);
        assert_eq!(weekday_multiplier(date(2022, 1, 8)), 1.6);
        assert_eq!(weekday_multiplier(date(2022, 1, 9)), 1.2);
        assert_eq!(weekday_multiplier(date(2022, 1, 10)), 1.0);
    }

    #[test]
    fn test_month_multiplier() {
        assert_eq!(month_multiplier(12), 1.5);
        assert_eq!(month_multiplier(7), 1.2);
        assert_eq!(month_multiplier(4), 1.0);
    }

    #[test]
    fn test_christmas_center_demand_exceeds_april_weekday() {
        let christmas = date(2022, 12, 25); // Sunday
        let event = resolve_event(christmas);
        let high = expected_transactions(christmas, Zone::Center, event);
        assert!((high - 8.0 * 1.3 * 1.5 * 2.0 * 1.2).abs() < 1e-9);

        let april = date(2022, 4, 12); // Tuesday
        let baseline = expected_transactions(april, Zone::Center, resolve_event(april));
        assert!((baseline - 8.0 * 1.3).abs() < 1e-9);
        assert!(high > 3.0 * baseline);
    }

    #[test]
    fn test_rain_probability_by_month() {
        for month in [4, 5, 10, 11] {
            assert_eq!(rain_probability(month), 0.4, "month {}", month);
        }
        for month in [1, 2, 3, 6, 7, 8, 9, 12] {
            assert_eq!(rain_probability(month), 0.1, "month {}", month);
        }
    }

    #[test]
    fn test_promotion_probability() {
        assert_eq!(promotion_probability(resolve_event(date(2022, 10, 31))), 0.30);
        assert_eq!(promotion_probability(resolve_event(date(2022, 10, 30))), 0.15);
        assert_eq!(promotion_probability(None), 0.15);
    }

    #[test]
    fn test_seasonal_temperature() {
        assert!((seasonal_temperature(3) - 27.0).abs() < 1e-9);
        assert!((seasonal_temperature(9) - 21.0).abs() < 1e-9);
        assert!((seasonal_temperature(12) - 24.0).abs() < 1e-9);
    }

    #[test]
    fn test_day_context_attributes() {
        let mut sampler = crate::sampler::SeededSampler::new(42);
        let ctx = DayContext::simulate(date(2022, 12, 25), &mut sampler);
        assert_eq!(ctx.event_name(), "Navidad");
        assert_eq!(ctx.event_multiplier(), 2.0);
        assert_eq!(ctx.day_of_week(), 7);

        let described = DayContext {
            temperature: 23.44,
            rain: true,
            ..ctx.clone()
        };
        assert_eq!(described.describe(), "Navidad, 23.4°C, rain");

        let plain = DayContext::simulate(date(2022, 4, 12), &mut sampler);
        assert_eq!(plain.event_name(), "None");
        assert_eq!(plain.day_of_week(), 2);
    }
}
