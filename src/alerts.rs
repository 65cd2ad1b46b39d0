// src/alerts.rs

use crate::models::{LogEntry, Parameter};

/// 可接受区间 [min, max]，两端都包含
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlertRange {
    pub min: f64,
    pub max: f64,
}

impl AlertRange {
    pub fn for_parameter(param: Parameter) -> Self {
        let (min, max) = match param {
            Parameter::Ph => (6.0, 8.0),
            Parameter::Ammonia => (0.0, 1.0),
            Parameter::Nitrite => (0.0, 0.5),
            Parameter::Nitrate => (0.0, 20.0),
        };
        AlertRange { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        !is_out_of_range(value, self.min, self.max)
    }
}

/// True iff `value` lies strictly outside `[min, max]`.
pub fn is_out_of_range(value: f64, min: f64, max: f64) -> bool {
    value < min || value > max
}

/// 一行记录中需要高亮的参数
pub fn out_of_range_parameters(entry: &LogEntry) -> Vec<Parameter> {
    Parameter::ALL
        .into_iter()
        .filter(|&p| !AlertRange::for_parameter(p).contains(entry.value(p)))
        .collect()
}
