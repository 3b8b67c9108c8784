use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Seed used for the process-wide reading set so every run shows the same
/// simulated values.
pub const READING_SEED: u64 = 42;

/// The eight dashboard metrics, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metric {
    No2,
    O3,
    Co,
    Hcho,
    So2,
    Ch4,
    RelativeHumidity,
    Temperature,
}

impl Metric {
    pub const ALL: [Metric; 8] = [
        Metric::No2,
        Metric::O3,
        Metric::Co,
        Metric::Hcho,
        Metric::So2,
        Metric::Ch4,
        Metric::RelativeHumidity,
        Metric::Temperature,
    ];

    /// Card title shown on the dashboard.
    pub fn label(&self) -> &'static str {
        match self {
            Metric::No2 => "NO2 Concentration",
            Metric::O3 => "O3 Concentration",
            Metric::Co => "CO Concentration",
            Metric::Hcho => "HCHO Concentration",
            Metric::So2 => "SO2 Concentration",
            Metric::Ch4 => "CH4 Concentration",
            Metric::RelativeHumidity => "Relative Humidity",
            Metric::Temperature => "Temperature",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Metric::RelativeHumidity => "%",
            Metric::Temperature => "°C",
            _ => "µg/m³",
        }
    }

    /// Uniform sampling bounds for the simulated value, `[lo, hi)`.
    pub fn range(&self) -> (f64, f64) {
        match self {
            Metric::No2 => (20.0, 40.0),
            Metric::O3 => (40.0, 60.0),
            Metric::Co => (5.0, 15.0),
            Metric::Hcho => (5.0, 20.0),
            Metric::So2 => (5.0, 10.0),
            Metric::Ch4 => (50.0, 150.0),
            Metric::RelativeHumidity => (30.0, 70.0),
            Metric::Temperature => (10.0, 30.0),
        }
    }

    /// Prerendered chart image for this metric, relative to the static root.
    pub fn chart_file(&self) -> &'static str {
        match self {
            Metric::No2 => "graph1.png",
            Metric::O3 => "graph2.png",
            Metric::Co => "graph3.png",
            Metric::Hcho => "graph4.png",
            Metric::So2 => "graph5.png",
            Metric::Ch4 => "graph6.png",
            Metric::RelativeHumidity => "graph7.png",
            Metric::Temperature => "graph8.png",
        }
    }
}

/// A simulated measurement for one metric.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Reading {
    pub metric: Metric,
    pub value: f64,
}

impl Reading {
    /// Two-decimal value with the metric's unit, e.g. `"23.57 µg/m³"`.
    pub fn formatted(&self) -> String {
        format!("{:.2} {}", self.value, self.metric.unit())
    }
}

/// The immutable reading set computed once at process start.
#[derive(Debug, Clone)]
pub struct Dashboard {
    readings: Vec<Reading>,
}

impl Dashboard {
    /// Draw one value per metric from a seeded RNG. Draws happen in
    /// `Metric::ALL` order, so a given seed always yields the same set.
    pub fn generate(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let readings = Metric::ALL
            .iter()
            .map(|&metric| {
                let (lo, hi) = metric.range();
                Reading {
                    metric,
                    value: rng.gen_range(lo..hi),
                }
            })
            .collect();
        Self { readings }
    }

    pub fn readings(&self) -> &[Reading] {
        &self.readings
    }

    pub fn get(&self, metric: Metric) -> Option<&Reading> {
        self.readings.iter().find(|r| r.metric == metric)
    }
}

#[derive(Debug, Error)]
pub enum AqiError {
    #[error("{field} is not a number: {value:?}")]
    InvalidNumber { field: &'static str, value: String },
}

/// Simplified AQI estimate: an even weighting of temperature and humidity,
/// rounded to the nearest integer. Deliberately not a standards-based index.
pub fn estimate_aqi(temperature: f64, humidity: f64) -> i64 {
    (0.5 * temperature + 0.5 * humidity).round() as i64
}

/// Parse raw form text and estimate the AQI.
pub fn estimate_aqi_from_text(temperature: &str, humidity: &str) -> Result<i64, AqiError> {
    let t = parse_field("temperature", temperature)?;
    let h = parse_field("humidity", humidity)?;
    Ok(estimate_aqi(t, h))
}

fn parse_field(field: &'static str, raw: &str) -> Result<f64, AqiError> {
    raw.trim().parse::<f64>().map_err(|_| AqiError::InvalidNumber {
        field,
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_is_deterministic() {
        let a = Dashboard::generate(READING_SEED);
        let b = Dashboard::generate(READING_SEED);
        assert_eq!(a.readings().len(), 8);
        for (x, y) in a.readings().iter().zip(b.readings()) {
            assert_eq!(x.metric, y.metric);
            assert_eq!(x.value, y.value);
        }
    }

    #[test]
    fn values_fall_within_metric_ranges() {
        let dash = Dashboard::generate(READING_SEED);
        for r in dash.readings() {
            let (lo, hi) = r.metric.range();
            assert!(r.value >= lo && r.value < hi, "{:?} = {}", r.metric, r.value);
        }
    }

    #[test]
    fn readings_keep_catalog_order() {
        let dash = Dashboard::generate(READING_SEED);
        let order: Vec<Metric> = dash.readings().iter().map(|r| r.metric).collect();
        assert_eq!(order, Metric::ALL);
        assert!(dash.get(Metric::Temperature).is_some());
    }

    #[test]
    fn formatted_value_is_two_decimals_then_unit() {
        let dash = Dashboard::generate(READING_SEED);
        for r in dash.readings() {
            let s = r.formatted();
            let (number, unit) = s.split_once(' ').expect("number and unit");
            assert_eq!(unit, r.metric.unit());
            let (_, frac) = number.split_once('.').expect("decimal point");
            assert_eq!(frac.len(), 2, "bad formatting: {s}");
            number.parse::<f64>().expect("numeric prefix");
        }
    }

    #[test]
    fn aqi_is_the_rounded_even_weighting() {
        assert_eq!(estimate_aqi(20.0, 50.0), 35);
        assert_eq!(estimate_aqi(-10.0, 0.0), -5);
        assert_eq!(estimate_aqi(25.5, 44.5), 35);
        assert_eq!(estimate_aqi(0.0, 0.0), 0);
    }

    #[test]
    fn text_inputs_parse_with_surrounding_whitespace() {
        assert_eq!(estimate_aqi_from_text(" 25.5 ", "44.5").unwrap(), 35);
        assert_eq!(estimate_aqi_from_text("-10", "0").unwrap(), -5);
    }

    #[test]
    fn non_numeric_input_names_the_offending_field() {
        let err = estimate_aqi_from_text("abc", "50").unwrap_err();
        assert!(matches!(
            err,
            AqiError::InvalidNumber { field: "temperature", .. }
        ));
        assert_eq!(err.to_string(), "temperature is not a number: \"abc\"");

        let err = estimate_aqi_from_text("20", "").unwrap_err();
        assert!(matches!(err, AqiError::InvalidNumber { field: "humidity", .. }));
    }
}
