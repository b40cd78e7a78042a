use climate_api::models::{Alert, AlertType, Metric, Severity};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Comparator {
    /// `value > threshold`
    Above,
    /// `value >= threshold`
    AtOrAbove,
    /// `value < threshold`
    Below,
    /// `value <= threshold`
    AtOrBelow,
}

impl Comparator {
    pub fn matches(&self, value: f64, threshold: f64) -> bool {
        match self {
            Comparator::Above => value > threshold,
            Comparator::AtOrAbove => value >= threshold,
            Comparator::Below => value < threshold,
            Comparator::AtOrBelow => value <= threshold,
        }
    }

    fn describe(&self) -> &'static str {
        match self {
            Comparator::Above => "above",
            Comparator::AtOrAbove => "at or above",
            Comparator::Below => "below",
            Comparator::AtOrBelow => "at or below",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertRule {
    pub metric: Metric,
    pub comparator: Comparator,
    pub threshold: f64,
    pub severity: Severity,
    pub alert_type: AlertType,
}

impl AlertRule {
    pub const fn new(
        metric: Metric,
        comparator: Comparator,
        threshold: f64,
        severity: Severity,
        alert_type: AlertType,
    ) -> Self {
        Self {
            metric,
            comparator,
            threshold,
            severity,
            alert_type,
        }
    }

    /// Built-in rule table. Temperature before humidity, high before low,
    /// each side ordered warning then critical.
    pub fn defaults() -> Vec<Self> {
        use AlertType::*;
        use Comparator::*;
        use Metric::*;
        use Severity::*;

        vec![
            Self::new(Temperature, Above, 30.0, Warning, TemperatureHigh),
            Self::new(Temperature, AtOrAbove, 40.0, Critical, TemperatureHigh),
            Self::new(Temperature, Below, 10.0, Warning, TemperatureLow),
            Self::new(Temperature, AtOrBelow, 0.0, Critical, TemperatureLow),
            Self::new(Humidity, Above, 60.0, Warning, HumidityHigh),
            Self::new(Humidity, AtOrAbove, 80.0, Critical, HumidityHigh),
            Self::new(Humidity, Below, 30.0, Info, HumidityLow),
            Self::new(Humidity, AtOrBelow, 15.0, Warning, HumidityLow),
        ]
    }

    pub fn check(&self, value: f64) -> Option<Alert> {
        if !self.comparator.matches(value, self.threshold) {
            return None;
        }

        let unit = self.metric.unit();

        // `+ 0.0` folds a negative zero into zero.
        Some(Alert {
            alert_type: self.alert_type,
            severity: self.severity,
            message: format!(
                "{} {}{unit} is {} the {} threshold of {}{unit} by {}{unit}.",
                self.metric,
                value + 0.0,
                self.comparator.describe(),
                self.severity,
                self.threshold + 0.0,
                describe_distance((value - self.threshold).abs()),
            ),
        })
    }
}

/// Distance rounded to hundredths; a crossing smaller than that is never shown as zero.
fn describe_distance(distance: f64) -> String {
    let rounded = (distance * 100.0).round() / 100.0;

    if rounded == 0.0 && distance > 0.0 {
        "less than 0.01".to_string()
    } else {
        rounded.to_string()
    }
}

pub struct AlertService {
    rules: Vec<AlertRule>,
}

impl AlertService {
    pub fn new(rules: Vec<AlertRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[AlertRule] {
        &self.rules
    }

    /// One alert per satisfied rule, in rule table order.
    pub fn evaluate(&self, temperature: f64, humidity: f64) -> Vec<Alert> {
        self.rules
            .iter()
            .filter_map(|rule| {
                let value = match rule.metric {
                    Metric::Temperature => temperature,
                    Metric::Humidity => humidity,
                };

                rule.check(value)
            })
            .collect()
    }
}

impl Default for AlertService {
    fn default() -> Self {
        Self::new(AlertRule::defaults())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(alerts: &[Alert]) -> Vec<(AlertType, Severity)> {
        alerts.iter().map(|a| (a.alert_type, a.severity)).collect()
    }

    #[test]
    fn test_readings_within_limits() {
        let service = AlertService::default();

        assert!(service.evaluate(21.5, 45.0).is_empty());
        assert!(service.evaluate(10.0, 30.0).is_empty());
        assert!(service.evaluate(30.0, 60.0).is_empty());
    }

    #[test]
    fn test_high_temperature() {
        let alerts = AlertService::default().evaluate(32.5, 45.0);

        assert_eq!(kinds(&alerts), vec![(AlertType::TemperatureHigh, Severity::Warning)]);
        assert_eq!(
            alerts[0].message,
            "Temperature 32.5°C is above the warning threshold of 30°C by 2.5°C."
        );
    }

    #[test]
    fn test_every_satisfied_rule_fires() {
        let alerts = AlertService::default().evaluate(45.0, 85.0);

        assert_eq!(
            kinds(&alerts),
            vec![
                (AlertType::TemperatureHigh, Severity::Warning),
                (AlertType::TemperatureHigh, Severity::Critical),
                (AlertType::HumidityHigh, Severity::Warning),
                (AlertType::HumidityHigh, Severity::Critical),
            ]
        );
    }

    #[test]
    fn test_low_readings() {
        let alerts = AlertService::default().evaluate(-5.0, 10.0);

        assert_eq!(
            kinds(&alerts),
            vec![
                (AlertType::TemperatureLow, Severity::Warning),
                (AlertType::TemperatureLow, Severity::Critical),
                (AlertType::HumidityLow, Severity::Info),
                (AlertType::HumidityLow, Severity::Warning),
            ]
        );
        assert_eq!(
            alerts[1].message,
            "Temperature -5°C is at or below the critical threshold of 0°C by 5°C."
        );
    }

    #[test]
    fn test_threshold_boundaries() {
        let service = AlertService::default();

        // exclusive upper warning, inclusive critical
        assert!(service.evaluate(30.0, 45.0).is_empty());
        assert_eq!(
            kinds(&service.evaluate(40.0, 45.0)),
            vec![
                (AlertType::TemperatureHigh, Severity::Warning),
                (AlertType::TemperatureHigh, Severity::Critical),
            ]
        );

        // exclusive lower warning, inclusive critical
        assert!(service.evaluate(10.0, 45.0).is_empty());
        assert_eq!(
            kinds(&service.evaluate(0.0, 45.0)),
            vec![
                (AlertType::TemperatureLow, Severity::Warning),
                (AlertType::TemperatureLow, Severity::Critical),
            ]
        );

        assert_eq!(
            kinds(&service.evaluate(20.0, 80.0)),
            vec![
                (AlertType::HumidityHigh, Severity::Warning),
                (AlertType::HumidityHigh, Severity::Critical),
            ]
        );
        assert_eq!(
            kinds(&service.evaluate(20.0, 15.0)),
            vec![
                (AlertType::HumidityLow, Severity::Info),
                (AlertType::HumidityLow, Severity::Warning),
            ]
        );

        for _ in 0..10 {
            assert!(service.evaluate(30.0, 60.0).is_empty());
        }
    }

    #[test]
    fn test_no_epsilon() {
        let service = AlertService::default();

        assert_eq!(
            kinds(&service.evaluate(30.000001, 45.0)),
            vec![(AlertType::TemperatureHigh, Severity::Warning)]
        );
        assert!(service.evaluate(29.999999, 45.0).is_empty());
    }

    #[test]
    fn test_message_just_past_threshold() {
        let service = AlertService::default();

        let alerts = service.evaluate(30.04, 45.0);
        assert_eq!(
            alerts[0].message,
            "Temperature 30.04°C is above the warning threshold of 30°C by 0.04°C."
        );

        let alerts = service.evaluate(30.001, 45.0);
        assert_eq!(
            alerts[0].message,
            "Temperature 30.001°C is above the warning threshold of 30°C by less than 0.01°C."
        );

        let alerts = service.evaluate(-0.04, 45.0);
        assert_eq!(
            alerts[1].message,
            "Temperature -0.04°C is at or below the critical threshold of 0°C by 0.04°C."
        );

        let alerts = service.evaluate(-0.0, 45.0);
        assert_eq!(
            alerts[1].message,
            "Temperature 0°C is at or below the critical threshold of 0°C by 0°C."
        );
    }

    #[test]
    fn test_evaluation_is_repeatable() {
        let service = AlertService::default();

        let first = service.evaluate(41.3, 12.0);
        let second = service.evaluate(41.3, 12.0);

        assert!(!first.is_empty());
        assert_eq!(first, second);
    }

    #[test]
    fn test_non_finite_values_never_fire() {
        let service = AlertService::default();

        assert!(service.evaluate(f64::NAN, f64::NAN).is_empty());
    }

    #[test]
    fn test_custom_rule_order() {
        let service = AlertService::new(vec![
            AlertRule::new(
                Metric::Humidity,
                Comparator::AtOrAbove,
                50.0,
                Severity::Info,
                AlertType::HumidityHigh,
            ),
            AlertRule::new(
                Metric::Temperature,
                Comparator::AtOrAbove,
                20.0,
                Severity::Critical,
                AlertType::TemperatureHigh,
            ),
        ]);

        assert_eq!(
            kinds(&service.evaluate(20.0, 50.0)),
            vec![
                (AlertType::HumidityHigh, Severity::Info),
                (AlertType::TemperatureHigh, Severity::Critical),
            ]
        );
        assert_eq!(service.rules().len(), 2);
    }

    #[test]
    fn test_empty_rule_table() {
        assert!(AlertService::new(vec![]).evaluate(100.0, 100.0).is_empty());
    }
}
