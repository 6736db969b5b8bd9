//! K-line period and depth step allow-lists

use std::fmt;
use std::str::FromStr;

use crate::error::TypeError;
use crate::params::ParamValue;

/// K-line (candlestick) period in minutes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub enum KlinePeriod {
    /// 1 minute
    #[default]
    M1 = 1,
    /// 5 minutes
    M5 = 5,
    /// 15 minutes
    M15 = 15,
    /// 30 minutes
    M30 = 30,
    /// 1 hour
    H1 = 60,
    /// 1 day
    D1 = 1440,
    /// 1 week
    W1 = 10080,
    /// 1 month (30 days)
    Month1 = 43200,
}

impl KlinePeriod {
    /// Every accepted period, shortest first
    pub const ALL: [KlinePeriod; 8] = [
        Self::M1,
        Self::M5,
        Self::M15,
        Self::M30,
        Self::H1,
        Self::D1,
        Self::W1,
        Self::Month1,
    ];

    /// Returns the period length in minutes, as sent on the wire
    pub fn minutes(&self) -> u32 {
        *self as u32
    }

    /// Short human label (`1m`, `1h`, `1M`, ...)
    pub fn label(&self) -> &'static str {
        match self {
            Self::M1 => "1m",
            Self::M5 => "5m",
            Self::M15 => "15m",
            Self::M30 => "30m",
            Self::H1 => "1h",
            Self::D1 => "1d",
            Self::W1 => "1w",
            Self::Month1 => "1M",
        }
    }
}

impl TryFrom<u32> for KlinePeriod {
    type Error = TypeError;

    fn try_from(minutes: u32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|period| period.minutes() == minutes)
            .ok_or(TypeError::InvalidPeriod(minutes))
    }
}

impl From<KlinePeriod> for ParamValue {
    fn from(period: KlinePeriod) -> Self {
        ParamValue::from(period.minutes())
    }
}

impl fmt::Display for KlinePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Order book aggregation step for the depth endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DepthStep {
    /// No aggregation
    #[default]
    Step0,
    /// First aggregation level
    Step1,
    /// Second aggregation level
    Step2,
}

impl DepthStep {
    /// Returns the step name as used in API requests
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Step0 => "step0",
            Self::Step1 => "step1",
            Self::Step2 => "step2",
        }
    }
}

impl FromStr for DepthStep {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "step0" => Ok(Self::Step0),
            "step1" => Ok(Self::Step1),
            "step2" => Ok(Self::Step2),
            other => Err(TypeError::InvalidStep(other.to_string())),
        }
    }
}

impl From<DepthStep> for ParamValue {
    fn from(step: DepthStep) -> Self {
        ParamValue::from(step.as_str())
    }
}

impl fmt::Display for DepthStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
