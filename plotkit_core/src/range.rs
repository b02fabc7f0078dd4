// Copyright 2025 the Plotkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Closed numeric ranges used for axes and data extents.

/// Restricts range queries to one sign of the coordinate.
///
/// Logarithmic axes can only show one sign domain at a time, so plottables are asked for
/// their extents restricted to the domain the axis currently displays.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SignDomain {
    /// Only strictly negative coordinates.
    Negative,
    /// All coordinates.
    #[default]
    Both,
    /// Only strictly positive coordinates.
    Positive,
}

impl SignDomain {
    /// Returns whether `value` lies in this sign domain.
    pub fn contains(self, value: f64) -> bool {
        match self {
            Self::Negative => value < 0.0,
            Self::Both => true,
            Self::Positive => value > 0.0,
        }
    }
}

/// A closed range `[lower, upper]` of plot coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Range {
    /// Lower bound.
    pub lower: f64,
    /// Upper bound.
    pub upper: f64,
}

impl Range {
    /// Smallest span considered a usable axis range.
    pub const MIN_SPAN: f64 = 1e-280;
    /// Largest span (and bound magnitude) considered a usable axis range.
    pub const MAX_SPAN: f64 = 1e250;

    /// Creates a new range. Bounds are stored as given; see [`Range::normalized`].
    pub const fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    /// Returns `upper - lower`.
    pub fn size(&self) -> f64 {
        self.upper - self.lower
    }

    /// Returns the midpoint of the range.
    pub fn center(&self) -> f64 {
        (self.upper + self.lower) * 0.5
    }

    /// Returns whether `value` lies within the closed range.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }

    /// Returns a copy with `lower <= upper`.
    pub fn normalized(self) -> Self {
        if self.lower > self.upper {
            Self::new(self.upper, self.lower)
        } else {
            self
        }
    }

    /// Grows this range so it also covers `other`.
    ///
    /// `NaN` bounds are replaced by the bounds of `other`.
    pub fn expand(&mut self, other: Self) {
        if self.lower > other.lower || self.lower.is_nan() {
            self.lower = other.lower;
        }
        if self.upper < other.upper || self.upper.is_nan() {
            self.upper = other.upper;
        }
    }

    /// Returns a copy of this range grown to cover `other`.
    pub fn expanded(mut self, other: Self) -> Self {
        self.expand(other);
        self
    }

    /// Returns whether this range can be displayed by an axis.
    ///
    /// The absolute span must lie in `(MIN_SPAN, MAX_SPAN)`, both bounds inside
    /// `±MAX_SPAN`, and the bound ratio must stay finite. Bound order is not checked, so a
    /// reversed range such as `[2, 1]` is valid.
    pub fn is_valid(&self) -> bool {
        let span = (self.lower - self.upper).abs();
        self.lower > -Self::MAX_SPAN
            && self.upper < Self::MAX_SPAN
            && span > Self::MIN_SPAN
            && span < Self::MAX_SPAN
            && !(self.lower > 0.0 && (self.upper / self.lower).is_infinite())
            && !(self.upper < 0.0 && (self.lower / self.upper).is_infinite())
    }

    /// Returns a normalized copy that does not straddle or touch zero.
    ///
    /// Logarithmic axes cannot show zero or both signs at once. The wider sign interval is
    /// kept and the zero bound is moved to a small fraction of the other bound.
    pub fn sanitized_for_log_scale(self) -> Self {
        const RANGE_FAC: f64 = 1e-3;
        let mut r = self.normalized();
        let clamp_lower = |r: &mut Self| {
            r.lower = if RANGE_FAC < r.upper * RANGE_FAC {
                RANGE_FAC
            } else {
                r.upper * RANGE_FAC
            };
        };
        let clamp_upper = |r: &mut Self| {
            r.upper = if -RANGE_FAC > r.lower * RANGE_FAC {
                -RANGE_FAC
            } else {
                r.lower * RANGE_FAC
            };
        };
        if r.lower == 0.0 && r.upper != 0.0 {
            clamp_lower(&mut r);
        } else if r.lower != 0.0 && r.upper == 0.0 {
            clamp_upper(&mut r);
        } else if r.lower < 0.0 && r.upper > 0.0 {
            if -r.lower > r.upper {
                clamp_upper(&mut r);
            } else {
                clamp_lower(&mut r);
            }
        }
        r
    }
}
