//! `range` and `length` arguments as unions of closed intervals

use std::cmp::Ordering;

#[derive(Debug, Clone, Copy)]
enum Number {
    Int(i128),
    Decimal(f64),
}

impl Number {
    fn parse(text: &str) -> Option<Self> {
        if let Ok(i) = text.parse::<i128>() {
            return Some(Number::Int(i));
        }
        text.parse::<f64>()
            .ok()
            .filter(|f| f.is_finite())
            .map(Number::Decimal)
    }

    fn as_f64(&self) -> f64 {
        match self {
            Number::Int(i) => *i as f64,
            Number::Decimal(f) => *f,
        }
    }

    fn compare(&self, other: &Number) -> Ordering {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => a.cmp(b),
            _ => self
                .as_f64()
                .partial_cmp(&other.as_f64())
                .unwrap_or(Ordering::Equal),
        }
    }
}

/// `min` sorts below every number and `max` above
#[derive(Debug, Clone, Copy)]
enum Bound {
    Min,
    Value(Number),
    Max,
}

impl Bound {
    fn parse(text: &str) -> Option<Self> {
        match text.trim() {
            "min" => Some(Bound::Min),
            "max" => Some(Bound::Max),
            other => Number::parse(other).map(Bound::Value),
        }
    }

    fn compare(&self, other: &Bound) -> Ordering {
        match (self, other) {
            (Bound::Min, Bound::Min) | (Bound::Max, Bound::Max) => Ordering::Equal,
            (Bound::Min, _) | (_, Bound::Max) => Ordering::Less,
            (Bound::Max, _) | (_, Bound::Min) => Ordering::Greater,
            (Bound::Value(a), Bound::Value(b)) => a.compare(b),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Interval {
    low: Bound,
    high: Bound,
}

impl Interval {
    fn contains(&self, other: &Interval) -> bool {
        self.low.compare(&other.low) != Ordering::Greater
            && self.high.compare(&other.high) != Ordering::Less
    }

    fn same(&self, other: &Interval) -> bool {
        self.low.compare(&other.low) == Ordering::Equal
            && self.high.compare(&other.high) == Ordering::Equal
    }
}

/// Parsed `range`/`length` argument, e.g. `1..10 | 20 | 100..max`
#[derive(Debug, Clone)]
pub struct SectionExpression {
    sections: Vec<Interval>,
}

impl SectionExpression {
    /// `None` if any part is not a number, `min` or `max`
    pub fn parse(argument: &str) -> Option<Self> {
        let mut sections = Vec::new();
        for part in argument.split('|') {
            let part = part.trim();
            let interval = match part.split_once("..") {
                Some((low, high)) => Interval {
                    low: Bound::parse(low)?,
                    high: Bound::parse(high)?,
                },
                None => {
                    let single = Bound::parse(part)?;
                    Interval {
                        low: single,
                        high: single,
                    }
                }
            };
            sections.push(interval);
        }
        if sections.is_empty() {
            return None;
        }
        Some(Self { sections })
    }

    /// Every section of `self` lies inside some section of `other`
    pub fn is_subset(&self, other: &SectionExpression) -> bool {
        self.sections
            .iter()
            .all(|s| other.sections.iter().any(|o| o.contains(s)))
    }

    pub fn same_as(&self, other: &SectionExpression) -> bool {
        self.sections.len() == other.sections.len()
            && self
                .sections
                .iter()
                .zip(other.sections.iter())
                .all(|(a, b)| a.same(b))
    }
}
