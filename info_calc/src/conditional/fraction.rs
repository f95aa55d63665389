use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use num::{BigInt, BigRational, FromPrimitive, Integer, Signed, ToPrimitive, Zero};
use num::rational::Ratio;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde::de;

use crate::{EnsembleError, EnsembleResult};
use crate::rounding::SCALE;

/// Anything that can be read back as a probability for the entropy step.
pub trait AsFloat {
    fn as_f64(&self) -> f64;
}

impl AsFloat for f64 {
    fn as_f64(&self) -> f64 {
        *self
    }
}

/// One cell of a conditional probability matrix.
///
/// Dependent ensembles get exact fractions in lowest terms; independent
/// ensembles get the rounded marginal, since there the conditional
/// probability is the marginal itself.
#[derive(Debug, Clone, PartialEq)]
pub enum CondProb {
    Fraction(BigRational),
    Value(f64),
}

impl CondProb {
    pub fn to_f64(&self) -> f64 {
        match self {
            CondProb::Fraction(ratio) => ratio_to_f64(ratio),
            CondProb::Value(v) => *v,
        }
    }
}

impl AsFloat for CondProb {
    fn as_f64(&self) -> f64 {
        self.to_f64()
    }
}

fn ratio_to_f64(ratio: &BigRational) -> f64 {
    match (ratio.numer().to_f64(), ratio.denom().to_f64()) {
        (Some(n), Some(d)) => n / d,
        _ => f64::NAN,
    }
}

/// Truncates `value * 1000` toward zero into a big integer.
fn scale_to_int(value: f64) -> EnsembleResult<BigInt> {
    BigInt::from_f64((value * SCALE).trunc()).ok_or(EnsembleError::InvalidProbability(value))
}

/// Divides both sides by their gcd. The denominator must be non-zero.
fn reduce_ints(numer: BigInt, denom: BigInt) -> BigRational {
    // gcd(0, d) == |d|, so a zero numerator reduces to 0/1
    let gcd = numer.gcd(&denom);
    let (numer, denom) = (numer / &gcd, denom / &gcd);
    if denom.is_negative() {
        Ratio::new_raw(-numer, -denom)
    } else {
        Ratio::new_raw(numer, denom)
    }
}

/// Expresses `numerator / denominator` as a reduced fraction of thousandths.
///
/// Both probabilities are scaled by 1000 and truncated before reduction,
/// so `reduce_fraction(0.25, 0.5)` is `250/500 = 1/2`.
pub fn reduce_fraction(numerator: f64, denominator: f64) -> EnsembleResult<BigRational> {
    let int_num = scale_to_int(numerator)?;
    let int_den = scale_to_int(denominator)?;
    if int_den.is_zero() {
        return Err(EnsembleError::DivisionByZero);
    }
    Ok(reduce_ints(int_num, int_den))
}

impl Display for CondProb {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            // Ratio's own Display drops a denominator of 1
            CondProb::Fraction(ratio) => write!(f, "{}/{}", ratio.numer(), ratio.denom()),
            CondProb::Value(v) => write!(f, "{}", v),
        }
    }
}

impl FromStr for CondProb {
    type Err = EnsembleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let parse_err = || EnsembleError::Parse(String::from(s));
        match s.split_once('/') {
            Some((n, d)) => {
                let numer = BigInt::from_str(n.trim()).map_err(|_| parse_err())?;
                let denom = BigInt::from_str(d.trim()).map_err(|_| parse_err())?;
                if denom.is_zero() {
                    return Err(EnsembleError::DivisionByZero);
                }
                Ok(CondProb::Fraction(reduce_ints(numer, denom)))
            },
            None => match f64::from_str(s) {
                Ok(v) if v.is_finite() => Ok(CondProb::Value(v)),
                _ => Err(parse_err()),
            },
        }
    }
}

impl Serialize for CondProb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CondProb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        CondProb::from_str(&s).map_err(de::Error::custom)
    }
}
