use serde::Serialize;
use tokio::sync::watch;
use ts_rs::TS;

use super::category::BudgetCategory;
use super::config::BudgetConfig;
use super::input;
use crate::error::AppError;
use crate::validation::require_finite;

/// Read model handed to the UI after every change.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct BudgetSnapshot {
    #[ts(type = "number")]
    pub value: i64,
    #[ts(type = "number")]
    pub min: i64,
    #[ts(type = "number")]
    pub max: i64,
    #[ts(type = "number")]
    pub step: i64,
    pub percentage: f64,
    pub category: BudgetCategory,
}

/// Bounded trip budget with clamped mutation primitives.
///
/// `value` stays inside `[min_budget, max_budget]` after every call. Each
/// mutation returns whether the value changed; subscribers are only notified
/// on change.
pub struct BudgetStore {
    config: BudgetConfig,
    value: i64,
    tx: watch::Sender<BudgetSnapshot>,
}

impl BudgetStore {
    /// Build a store from `config`, starting at `initial` or the configured default.
    pub fn new(config: BudgetConfig, initial: Option<i64>) -> Result<Self, AppError> {
        config.validate()?;
        let value = config.clamp(initial.unwrap_or(config.default_value));
        let snapshot = snapshot_of(&config, value);
        let (tx, _rx) = watch::channel(snapshot);

        tracing::debug!(
            min = config.min_budget,
            max = config.max_budget,
            step = config.step,
            value,
            "Budget store created"
        );

        Ok(Self { config, value, tx })
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn config(&self) -> &BudgetConfig {
        &self.config
    }

    pub fn presets(&self) -> &[i64] {
        &self.config.presets
    }

    /// Position of the value inside the range, in `[0, 100]`.
    pub fn percentage(&self) -> f64 {
        percentage_of(&self.config, self.value)
    }

    pub fn category(&self) -> BudgetCategory {
        BudgetCategory::from_percentage(self.percentage())
    }

    pub fn snapshot(&self) -> BudgetSnapshot {
        snapshot_of(&self.config, self.value)
    }

    pub fn subscribe(&self) -> watch::Receiver<BudgetSnapshot> {
        self.tx.subscribe()
    }

    pub fn increment(&mut self) -> bool {
        let next = self.value.saturating_add(self.config.step);
        self.apply(next)
    }

    pub fn decrement(&mut self) -> bool {
        let next = self.value.saturating_sub(self.config.step);
        self.apply(next)
    }

    /// Round `amount` to the nearest unit and clamp it into range.
    ///
    /// NaN and infinities are rejected and leave the value untouched.
    pub fn set_exact(&mut self, amount: f64) -> Result<bool, AppError> {
        require_finite("budget", amount)?;
        let clamped = amount
            .round()
            .clamp(self.config.min_budget as f64, self.config.max_budget as f64);
        Ok(self.apply(clamped as i64))
    }

    /// Apply free-text entry. Text without any digit resets to the minimum.
    pub fn set_from_text(&mut self, text: &str) -> bool {
        let next = match input::parse_amount(text) {
            Some(amount) => i64::try_from(amount).unwrap_or(i64::MAX),
            None => self.config.min_budget,
        };
        self.apply(next)
    }

    /// Jump to a shortcut amount. Presets need not sit on a step boundary.
    pub fn quick_set(&mut self, preset: f64) -> Result<bool, AppError> {
        self.set_exact(preset)
    }

    fn apply(&mut self, candidate: i64) -> bool {
        let next = self.config.clamp(candidate);
        if next == self.value {
            return false;
        }
        tracing::debug!(from = self.value, to = next, "Budget changed");
        self.value = next;
        self.tx.send_replace(self.snapshot());
        true
    }
}

fn percentage_of(config: &BudgetConfig, value: i64) -> f64 {
    let span = config.max_budget as f64 - config.min_budget as f64;
    let offset = value as f64 - config.min_budget as f64;
    (offset / span * 100.0).clamp(0.0, 100.0)
}

fn snapshot_of(config: &BudgetConfig, value: i64) -> BudgetSnapshot {
    let percentage = percentage_of(config, value);
    BudgetSnapshot {
        value,
        min: config.min_budget,
        max: config.max_budget,
        step: config.step,
        percentage,
        category: BudgetCategory::from_percentage(percentage),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trip_store(value: i64) -> BudgetStore {
        BudgetStore::new(BudgetConfig::new(200, 10_000, 100), Some(value)).unwrap()
    }

    #[test]
    fn test_rejects_invalid_configuration() {
        let result = BudgetStore::new(BudgetConfig::new(10_000, 200, 100), None);
        assert!(matches!(result, Err(AppError::InvalidConfiguration(_))));
        let result = BudgetStore::new(BudgetConfig::new(200, 10_000, 0), None);
        assert!(matches!(result, Err(AppError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_initial_value_is_clamped() {
        assert_eq!(trip_store(50).value(), 200);
        assert_eq!(trip_store(99_999).value(), 10_000);
        let store = BudgetStore::new(BudgetConfig::default(), None).unwrap();
        assert_eq!(store.value(), 1_000);
    }

    #[test]
    fn test_increment_then_quick_set_scenario() {
        let mut store = trip_store(1_000);
        assert!(store.increment());
        assert_eq!(store.value(), 1_100);

        assert!(store.quick_set(5_000.0).unwrap());
        assert_eq!(store.value(), 5_000);
        assert!((store.percentage() - 48.979_591_836_734_7).abs() < 1e-9);
        assert_eq!(store.category(), BudgetCategory::Moderate);
    }

    #[test]
    fn test_increment_and_decrement_clamp_at_bounds() {
        let mut store = trip_store(9_950);
        assert!(store.increment());
        assert_eq!(store.value(), 10_000);
        assert!(!store.increment());
        assert_eq!(store.value(), 10_000);

        let mut store = trip_store(250);
        assert!(store.decrement());
        assert_eq!(store.value(), 200);
        assert!(!store.decrement());
        assert_eq!(store.value(), 200);
    }

    #[test]
    fn test_increment_at_max_is_silent() {
        let mut store = trip_store(10_000);
        let before = store.snapshot();
        let rx = store.subscribe();

        assert!(!store.increment());
        assert_eq!(store.snapshot(), before);
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn test_subscribers_see_changes() {
        let mut store = trip_store(1_000);
        let mut rx = store.subscribe();

        store.increment();
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().value, 1_100);
    }

    #[test]
    fn test_set_exact_rounds_and_clamps() {
        let mut store = trip_store(1_000);
        store.set_exact(1_234.5).unwrap();
        assert_eq!(store.value(), 1_235);
        store.set_exact(-40.0).unwrap();
        assert_eq!(store.value(), 200);
        store.set_exact(1e18).unwrap();
        assert_eq!(store.value(), 10_000);
    }

    #[test]
    fn test_set_exact_rejects_non_finite() {
        let mut store = trip_store(1_000);
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = store.set_exact(bad).unwrap_err();
            assert!(matches!(err, AppError::InvalidInput(_)));
            assert_eq!(store.value(), 1_000);
        }
    }

    #[test]
    fn test_set_from_text() {
        let mut store = trip_store(1_000);
        store.set_from_text("");
        assert_eq!(store.value(), 200);

        store.set_from_text("3 500 MAD");
        assert_eq!(store.value(), 3_500);

        store.set_from_text("abc");
        assert_eq!(store.value(), 200);

        // "1e9" keeps only "19", which clamps up to the floor
        store.set_from_text("1e9");
        assert_eq!(store.value(), 200);

        store.set_from_text(&"9".repeat(30));
        assert_eq!(store.value(), 10_000);
    }

    #[test]
    fn test_quick_set_off_step_preset() {
        let mut store = trip_store(1_000);
        store.quick_set(2_750.0).unwrap();
        assert_eq!(store.value(), 2_750);
        store.quick_set(50_000.0).unwrap();
        assert_eq!(store.value(), 10_000);
    }

    #[test]
    fn test_percentage_endpoints() {
        let store = trip_store(200);
        assert_eq!(store.percentage(), 0.0);
        assert_eq!(store.category(), BudgetCategory::Economic);
        let store = trip_store(10_000);
        assert_eq!(store.percentage(), 100.0);
        assert_eq!(store.category(), BudgetCategory::Premium);
    }

    #[test]
    fn test_category_follows_percentage_not_value() {
        // 25% of [0, 400] is 100, which is a Moderate budget in this range
        let store = BudgetStore::new(BudgetConfig::new(0, 400, 10), Some(100)).unwrap();
        assert_eq!(store.percentage(), 25.0);
        assert_eq!(store.category(), BudgetCategory::Moderate);
    }

    #[test]
    fn test_snapshot_serializes() {
        let store = trip_store(5_100);
        let json = serde_json::to_value(store.snapshot()).unwrap();
        assert_eq!(json["value"], 5_100);
        assert_eq!(json["percentage"], 50.0);
        assert_eq!(json["category"], "comfortable");
    }
}
