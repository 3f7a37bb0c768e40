/// Display unit for temperatures. Data always arrives in Celsius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Unit {
    #[default]
    Metric,
    Imperial,
}

impl Unit {
    pub fn convert(self, celsius: f64) -> f64 {
        match self {
            Unit::Metric => celsius,
            Unit::Imperial => celsius * 9.0 / 5.0 + 32.0,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Unit::Metric => "°C",
            Unit::Imperial => "°F",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Unit::Metric => Unit::Imperial,
            Unit::Imperial => Unit::Metric,
        }
    }

    /// `15.2` -> `15°C`, rounding halves toward positive infinity.
    pub fn format(self, celsius: f64) -> String {
        format!("{}{}", round_half_up(self.convert(celsius)), self.symbol())
    }
}

pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}
