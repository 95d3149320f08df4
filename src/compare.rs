//! Comparators decide whether a fetched value violates a threshold
//!
//! `compare(x, y)` is asked with the fetched value as `x` and the warn or
//! crit threshold as `y`; `true` means the threshold is hit. All
//! comparators are stateless.

use crate::threshold::{
    AgentStatusTuple, CpuTuple, LoadTuple, RangeThreshold, SizeThreshold, Threshold,
    ThresholdValue,
};

pub trait Comparator<T: ?Sized> {
    fn compare(&self, x: &T, y: &T) -> bool;
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    fn compare(&self, x: &T, y: &T) -> bool {
        self(x, y)
    }
}

/// The six relational operators on thresholds
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Relation {
    Lt,
    Le,
    Eq,
    Ne,
    Ge,
    Gt,
}

impl Relation {
    pub fn holds<T: ThresholdValue>(self, x: &Threshold<T>, y: &Threshold<T>) -> bool {
        match self {
            Relation::Lt => x.is_lt(y),
            Relation::Le => x.is_le(y),
            Relation::Eq => x.is_eq(y),
            Relation::Ne => x.is_ne(y),
            Relation::Ge => x.is_ge(y),
            Relation::Gt => x.is_gt(y),
        }
    }
}

impl<T: ThresholdValue> Comparator<Threshold<T>> for Relation {
    fn compare(&self, x: &Threshold<T>, y: &Threshold<T>) -> bool {
        self.holds(x, y)
    }
}

/// Hit when the absolute part is at or below, or the relative part at or
/// above the threshold: little space left, or much space used
#[derive(Clone, Copy, Debug)]
pub struct AbsoluteRelativeCmp {
    pub absolute: Relation,
    pub relative: Relation,
}

impl Default for AbsoluteRelativeCmp {
    fn default() -> AbsoluteRelativeCmp {
        AbsoluteRelativeCmp {
            absolute: Relation::Le,
            relative: Relation::Ge,
        }
    }
}

impl Comparator<SizeThreshold> for AbsoluteRelativeCmp {
    fn compare(&self, x: &SizeThreshold, y: &SizeThreshold) -> bool {
        self.absolute.holds(&x.absolute, &y.absolute) || self.relative.holds(&x.relative, &y.relative)
    }
}

/// Hit when `x` leaves the range `y`, or enters it if `y` is negated
#[derive(Clone, Copy, Debug)]
pub struct RangeCmp {
    pub lower: Relation,
    pub upper: Relation,
}

impl Default for RangeCmp {
    fn default() -> RangeCmp {
        RangeCmp {
            lower: Relation::Lt,
            upper: Relation::Gt,
        }
    }
}

impl<T: ThresholdValue> Comparator<RangeThreshold<T>> for RangeCmp {
    fn compare(&self, x: &RangeThreshold<T>, y: &RangeThreshold<T>) -> bool {
        let outside = self.lower.holds(&x.min, &y.min) || self.upper.holds(&x.max, &y.max);
        outside != y.negated
    }
}

/// Applies one relation to every field of a record, hit if any field is
#[derive(Clone, Copy, Debug)]
pub struct AnyField(pub Relation);

impl Default for AnyField {
    fn default() -> AnyField {
        AnyField(Relation::Ge)
    }
}

impl Comparator<CpuTuple> for AnyField {
    fn compare(&self, x: &CpuTuple, y: &CpuTuple) -> bool {
        let rel = self.0;
        rel.holds(&x.user, &y.user)
            || rel.holds(&x.system, &y.system)
            || rel.holds(&x.idle, &y.idle)
            || rel.holds(&x.wait, &y.wait)
    }
}

impl Comparator<LoadTuple> for AnyField {
    fn compare(&self, x: &LoadTuple, y: &LoadTuple) -> bool {
        let rel = self.0;
        rel.holds(&x.load1, &y.load1) || rel.holds(&x.load5, &y.load5) || rel.holds(&x.load15, &y.load15)
    }
}

/// Hit when the agent was last updated at or before the threshold time,
/// or when either memory increase counter reached its threshold
#[derive(Clone, Copy, Debug, Default)]
pub struct AgentStatusCmp;

impl Comparator<AgentStatusTuple> for AgentStatusCmp {
    fn compare(&self, x: &AgentStatusTuple, y: &AgentStatusTuple) -> bool {
        x.updated.is_le(&y.updated)
            || x.vsz_increases.is_ge(&y.vsz_increases)
            || x.rsz_increases.is_ge(&y.rsz_increases)
    }
}
