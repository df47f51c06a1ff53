/*
MIT License
Copyright (c) 2021 Germán Molina
Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:
The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.
THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
*/

use crate::Float;
use thiserror::Error;

/// Invalid parameters, detected when surface models, cameras or the
/// ray-tracer are configured. Never produced while tracing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("metric tensor '{0}' is not symmetric")]
    NonSymmetricMetric(&'static str),

    #[error("metric tensor '{0}' is singular")]
    SingularMetric(&'static str),

    #[error("vector '{0}' has zero length")]
    ZeroLengthVector(&'static str),

    #[error("parameter '{name}' must be positive (found {value})")]
    NonPositive { name: &'static str, value: Float },

    #[error("parameter '{name}' must be in [{min}, {max}] (found {value})")]
    OutOfRange {
        name: &'static str,
        value: Float,
        min: Float,
        max: Float,
    },

    #[error("focal length cannot be zero")]
    ZeroFocalLength,

    #[error("maximum trace depth must be between 1 and {max} (found {found})")]
    InvalidTraceDepth { found: usize, max: usize },

    #[error("number of samples per pixel must be at least 1")]
    InvalidSampleCount,

    #[error("invalid geometry: {0}")]
    Geometry(String),
}

impl From<String> for ConfigError {
    fn from(e: String) -> Self {
        Self::Geometry(e)
    }
}

/// Checks that `value` is a finite positive number
pub(crate) fn check_positive(name: &'static str, value: Float) -> Result<Float, ConfigError> {
    if value > 0. && value.is_finite() {
        Ok(value)
    } else {
        Err(ConfigError::NonPositive { name, value })
    }
}

/// Checks that `value` is within `[min, max]`
pub(crate) fn check_range(
    name: &'static str,
    value: Float,
    min: Float,
    max: Float,
) -> Result<Float, ConfigError> {
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(ConfigError::OutOfRange {
            name,
            value,
            min,
            max,
        })
    }
}
