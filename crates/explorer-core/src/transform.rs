// File: crates/explorer-core/src/transform.rs
// Summary: Per-datum numeric transform chain (rescale -> rezero -> modulo -> abs) and the safe logarithm.

use serde::{Deserialize, Serialize};

/// Value returned by [`safe_log`] for non-positive input.
pub const SAFE_LOG_SENTINEL: f64 = -99.0;

/// Base-10 logarithm that maps `v <= 0` to [`SAFE_LOG_SENTINEL`] instead of `-inf`/`NaN`.
/// `NaN` input stays `NaN` so missing cells are still filtered downstream.
#[inline]
pub fn safe_log(v: f64) -> f64 {
    if v <= 0.0 { SAFE_LOG_SENTINEL } else { v.log10() }
}

/// First stage of the chain.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rescale {
    #[default]
    Linear,
    Log,
    LogAbs,
    Exp,
}

impl Rescale {
    #[inline]
    pub fn apply(self, raw: f64) -> f64 {
        match self {
            Rescale::Linear => raw,
            Rescale::Log => safe_log(raw),
            Rescale::LogAbs => safe_log(raw.abs()),
            Rescale::Exp => 10f64.powf(raw),
        }
    }
}

/// Transform configuration owned by an axis or a series.
/// `divisor == 0` disables the modulo stage.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformConfig {
    pub rescale: Rescale,
    pub rezero: f64,
    pub divisor: f64,
    pub absval: bool,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self { rescale: Rescale::Linear, rezero: 0.0, divisor: 0.0, absval: false }
    }
}

impl TransformConfig {
    pub fn with_rescale(mut self, rescale: Rescale) -> Self { self.rescale = rescale; self }
    pub fn with_rezero(mut self, rezero: f64) -> Self { self.rezero = rezero; self }
    pub fn with_divisor(mut self, divisor: f64) -> Self { self.divisor = divisor; self }
    pub fn with_absval(mut self, absval: bool) -> Self { self.absval = absval; self }

    /// True when every stage is a no-op.
    pub fn is_identity(&self) -> bool {
        self.rescale == Rescale::Linear && self.rezero == 0.0 && self.divisor == 0.0 && !self.absval
    }

    /// Run the full chain on one raw value. Order is fixed.
    #[inline]
    pub fn apply(&self, raw: f64) -> f64 {
        let mut v = self.rescale.apply(raw) - self.rezero;
        // f64 `%` keeps the sign of the dividend
        if self.divisor != 0.0 {
            v %= self.divisor;
        }
        if self.absval { v.abs() } else { v }
    }
}

/// Free-function form of [`TransformConfig::apply`].
#[inline]
pub fn apply(config: &TransformConfig, raw: f64) -> f64 {
    config.apply(raw)
}
