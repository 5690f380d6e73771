use std::collections::HashMap;

use serde::{Serialize, Serializer};

use crate::input::NumericList;

pub struct Statistics;

impl Statistics {
    pub fn mean(values: &NumericList) -> f64 {
        let values = values.as_slice();
        let mut sum = 0.0;
        for &v in values {
            sum += v;
        }
        sum / values.len() as f64
    }

    /// Sorts a copy; the input keeps its order.
    pub fn median(values: &NumericList) -> f64 {
        let mut sorted = values.as_slice().to_vec();
        sorted.sort_by(f64::total_cmp);

        let mid = sorted.len() / 2;
        if sorted.len() % 2 == 1 {
            sorted[mid]
        } else {
            sorted[mid - 1].midpoint(sorted[mid])
        }
    }

    /// Most frequent value, or every value sharing the top count.
    ///
    /// Ties come back in first-occurrence order.
    pub fn mode(values: &NumericList) -> ModeValue {
        // Distinct values in first-seen order, with their counts.
        let mut distinct: Vec<(f64, usize)> = Vec::new();
        let mut index: HashMap<u64, usize> = HashMap::new();
        for &v in values.as_slice() {
            // Adding 0.0 folds -0.0 into 0.0 so both count as one value.
            let v = v + 0.0;
            let slot = *index.entry(v.to_bits()).or_insert_with(|| {
                distinct.push((v, 0));
                distinct.len() - 1
            });
            distinct[slot].1 += 1;
        }

        let top = distinct.iter().map(|&(_, n)| n).max().unwrap_or(0);
        let mut winners: Vec<f64> = distinct
            .into_iter()
            .filter(|&(_, n)| n == top)
            .map(|(v, _)| v)
            .collect();

        if winners.len() == 1 {
            ModeValue::Single(winners.remove(0))
        } else {
            ModeValue::Tied(winners)
        }
    }

    pub fn compute(operation: Operation, values: &NumericList) -> StatResult {
        let value = match operation {
            Operation::Mean => StatValue::Number(Self::mean(values)),
            Operation::Median => StatValue::Number(Self::median(values)),
            Operation::Mode => match Self::mode(values) {
                ModeValue::Single(v) => StatValue::Number(v),
                ModeValue::Tied(vs) => StatValue::Numbers(vs),
            },
        };
        StatResult { operation, value }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ModeValue {
    Single(f64),
    Tied(Vec<f64>),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Mean,
    Median,
    Mode,
}

impl Operation {
    pub fn name(self) -> &'static str {
        match self {
            Self::Mean => "mean",
            Self::Median => "median",
            Self::Mode => "mode",
        }
    }
}

/// A statistic is a bare number, except a tied mode which is a list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StatValue {
    Number(#[serde(serialize_with = "serialize_number")] f64),
    Numbers(#[serde(serialize_with = "serialize_numbers")] Vec<f64>),
}

impl StatValue {
    pub fn is_finite(&self) -> bool {
        match self {
            Self::Number(v) => v.is_finite(),
            Self::Numbers(vs) => vs.iter().all(|v| v.is_finite()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatResult {
    pub operation: Operation,
    pub value: StatValue,
}

// Largest magnitude below which every integer is exactly representable.
const MAX_EXACT_INT: f64 = 9_007_199_254_740_992.0;

/// Whole numbers go out as JSON integers (`2`, not `2.0`).
fn serialize_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    let v = *value;
    if v.fract() == 0.0 && v.abs() < MAX_EXACT_INT {
        serializer.serialize_i64(v as i64)
    } else {
        serializer.serialize_f64(v)
    }
}

fn serialize_numbers<S: Serializer>(values: &[f64], serializer: S) -> Result<S::Ok, S::Error> {
    #[derive(Serialize)]
    struct Num(#[serde(serialize_with = "serialize_number")] f64);

    serializer.collect_seq(values.iter().map(|&v| Num(v)))
}
