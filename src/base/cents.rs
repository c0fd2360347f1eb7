use crate::base;

/// Integral representation of monetary quantities up to two decimal places.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    derive_more::From,
    derive_more::Into,
    derive_more::Neg,
)]
pub struct Cents(pub i64);

impl Cents {
    pub const MAX: Self = Self(i64::MAX);
    /// Kept symmetric with [`Cents::MAX`] so every value has an absolute value.
    pub const MIN: Self = Self(-i64::MAX);

    pub const fn abs(self) -> Self {
        Self(self.0.abs())
    }

    /// Rounds a decimal amount to two places, with halves rounded away from
    /// zero. Rounding is applied to `value * 100` as computed in `f64`, so an
    /// amount such as `1.005` whose binary value sits just below the half
    /// rounds down. Out of range values saturate to [`Cents::MAX`] or
    /// [`Cents::MIN`] and NaN becomes zero.
    pub fn from_f64_rounded(value: f64) -> Self {
        Self(((value * 100.0).round() as i64).max(Self::MIN.0))
    }

    /// Adds without overflow, saturating at [`Cents::MAX`] or [`Cents::MIN`].
    pub fn saturating_add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0).clamp(Self::MIN.0, Self::MAX.0))
    }

    pub fn to_f64(self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Returns `cents.to_string().len()` without actually building a string.
    pub fn charlen(self) -> usize {
        let n = self.abs().0.max(100) as u64;
        let mut len = base::util::count_digits(n);
        len += (len - 3) / 3; // commas
        len += 1; // decimal point
        if self.0 < 0 {
            len += 2; // parentheses
        }
        len
    }

    /// Returns `cents.charlen()` assuming a non-negative quantity has a
    /// trailing space in its string representation. Having a trailing space
    /// means regardless of sign, the string representation has 3 characters
    /// after the decimal point, meaning right-aligning is equivalent to
    /// aligning on the decimal point.
    pub fn charlen_for_alignment(self) -> usize {
        self.charlen() + (self >= Self(0)) as usize
    }

    /// Serializes as a JSON number in currency units, e.g. `Cents(1235)` as
    /// `12.35`.
    pub fn serialize_units<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_f64(self.to_f64())
    }
}

impl std::fmt::Display for Cents {
    /// Formats with two decimal places and thousands separators. Negative
    /// quantities are wrapped in parentheses.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut cents = self.abs().0;
        let mut bytes = Vec::<u8>::new();
        macro_rules! pop_digit {
            () => {
                bytes.push(b'0' + (cents % 10) as u8);
                cents /= 10
            };
        }

        pop_digit!();
        pop_digit!();
        bytes.push(b'.');
        pop_digit!();
        let mut i = 1;
        while cents > 0 {
            if i % 3 == 0 {
                bytes.push(b',');
            }
            i += 1;
            pop_digit!();
        }
        bytes.reverse();
        if self.0 < 0 {
            bytes.insert(0, b'(');
            bytes.push(b')');
        }
        let s = std::str::from_utf8(&bytes).expect("all chars should be ascii");
        f.write_str(s)
    }
}
