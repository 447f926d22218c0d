//! Two-segment fuel tank gauge.

use crate::format::compact;

pub const AVAILABLE_COLOR: &str = "#FF6384";
pub const USED_COLOR: &str = "#36A2EB";

/// Volume unit shown in the gauge label.
const UNIT: &str = "L";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gauge {
    current: f64,
    max: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub title: &'static str,
    pub value: f64,
    pub color: &'static str,
}

impl Gauge {
    pub fn new(current: f64, max: f64) -> Self {
        Self { current, max }
    }

    /// Capacity, negative capacities are treated as an empty tank.
    pub fn max(&self) -> f64 {
        self.max.max(0.0)
    }

    /// Available and used segments, they always sum up to the capacity.
    pub fn segments(&self) -> [Segment; 2] {
        let max = self.max();
        let available = self.current.clamp(0.0, max);
        [
            Segment {
                title: "Available",
                value: available,
                color: AVAILABLE_COLOR,
            },
            Segment {
                title: "Used",
                value: max - available,
                color: USED_COLOR,
            },
        ]
    }

    /// Fill percentage in `[0, 100]`.
    pub fn percentage(&self) -> f64 {
        if self.max() == 0.0 {
            return 0.0;
        }
        (self.current / self.max() * 100.0).clamp(0.0, 100.0)
    }

    pub fn label(&self) -> String {
        format!("{} {} of {} {}", compact(self.current), UNIT, compact(self.max), UNIT)
    }

    pub fn title(&self) -> String {
        format!("Tank level ({})", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_of_thirty_five() {
        let gauge = Gauge::new(10.0, 35.0);
        let [available, used] = gauge.segments();
        assert_eq!(available.value, 10.0);
        assert_eq!(used.value, 25.0);
        assert_eq!(available.value + used.value, 35.0);
        assert_eq!(gauge.label(), "10 L of 35 L");
        assert_eq!(gauge.title(), "Tank level (10 L of 35 L)");
    }

    #[test]
    fn percentage() {
        assert!((Gauge::new(10.0, 40.0).percentage() - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn zero_capacity() {
        let gauge = Gauge::new(0.0, 0.0);
        assert_eq!(gauge.percentage(), 0.0);
        let [available, used] = gauge.segments();
        assert_eq!(available.value + used.value, 0.0);
    }

    #[test]
    fn overfilled() {
        let gauge = Gauge::new(50.0, 35.0);
        let [available, used] = gauge.segments();
        assert_eq!(available.value, 35.0);
        assert_eq!(used.value, 0.0);
        assert_eq!(gauge.percentage(), 100.0);
    }

    #[test]
    fn negative_reading() {
        let [available, used] = Gauge::new(-5.0, 35.0).segments();
        assert_eq!(available.value, 0.0);
        assert_eq!(used.value, 35.0);
    }
}
