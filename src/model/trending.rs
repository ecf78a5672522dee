use std::fmt;

/// Time window for the trending chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrendingTime {
    #[default]
    Week,
    Month,
    AllTime,
}

impl TrendingTime {
    /// Parse the API spelling, falling back to the default window for anything else.
    pub fn parse_lossy(value: &str) -> Self {
        match value {
            "week" => Self::Week,
            "month" => Self::Month,
            "allTime" => Self::AllTime,
            other => {
                if !other.is_empty() {
                    tracing::debug!("Unknown trending window {:?}, using default", other);
                }
                Self::default()
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Week => "week",
            Self::Month => "month",
            Self::AllTime => "allTime",
        }
    }
}

impl fmt::Display for TrendingTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
