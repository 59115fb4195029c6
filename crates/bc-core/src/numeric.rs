use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};

use crate::BcError;

/// Floating point type used throughout system
pub type Real = f64;

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, BcError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(BcError::NonFinite { what, value: v })
    }
}

/// Distance along a stream.
///
/// Always finite; `-0.0` is folded into `0.0` so equality and hashing can
/// work on the bit pattern.
#[derive(Clone, Copy)]
pub struct Station(Real);

impl Station {
    pub fn new(value: Real) -> Result<Self, BcError> {
        let value = ensure_finite(value, "station")?;
        Ok(Self(if value == 0.0 { 0.0 } else { value }))
    }

    pub fn value(self) -> Real {
        self.0
    }
}

impl PartialEq for Station {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for Station {}

impl Hash for Station {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl PartialOrd for Station {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Station {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Debug for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Station({:?})", self.0)
    }
}

/// Spelled the way synthetic node ids have always been spelled: shortest
/// round-trip digits, plain decimal with a trailing `.0` for whole values in
/// `[1e-3, 1e7)`, and `1.0E-4` style outside that range.
impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let magnitude = self.0.abs();
        if magnitude == 0.0 || (1e-3..1e7).contains(&magnitude) {
            return write!(f, "{:?}", self.0);
        }

        let scientific = format!("{:e}", self.0);
        let (mantissa, exponent) = scientific
            .split_once('e')
            .unwrap_or((scientific.as_str(), "0"));
        if mantissa.contains('.') {
            write!(f, "{mantissa}E{exponent}")
        } else {
            write!(f, "{mantissa}.0E{exponent}")
        }
    }
}
