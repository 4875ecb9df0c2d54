//! Enum dispatch over the built-in curves.
//!
//! [`Curve`] wraps every built-in [`PricingCurve`] behind one `Copy` enum so
//! a pool's formula can be chosen from configuration without `dyn` trait
//! objects.  Each variant is feature-gated to match its curve.

use core::fmt;
use core::str::FromStr;

use primitive_types::U512;

use super::ConstantProduct;
#[cfg(feature = "constant-sum")]
use super::ConstantSum;
use crate::domain::{Amount, Reserves};
use crate::error::{PoolError, Result};
use crate::traits::PricingCurve;

/// Closed set of built-in pricing curves.
///
/// Serialized as a snake-case name: `"constant_product"`,
/// `"constant_sum"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Curve {
    /// `x · y = k`.
    #[default]
    ConstantProduct,

    /// `x + y = k`.
    #[cfg(feature = "constant-sum")]
    ConstantSum,
}

/// Forwards a [`PricingCurve`] method to the curve selected by each variant.
macro_rules! delegate {
    ($self:ident, $method:ident ( $($arg:expr),* )) => {
        match $self {
            Curve::ConstantProduct => ConstantProduct.$method($($arg),*),
            #[cfg(feature = "constant-sum")]
            Curve::ConstantSum => ConstantSum.$method($($arg),*),
        }
    };
}

impl PricingCurve for Curve {
    fn amount_out(
        &self,
        reserve_in: Amount,
        reserve_out: Amount,
        amount_in: Amount,
    ) -> Result<Amount> {
        delegate!(self, amount_out(reserve_in, reserve_out, amount_in))
    }

    fn invariant(&self, reserves: &Reserves) -> U512 {
        delegate!(self, invariant(reserves))
    }

    fn name(&self) -> &'static str {
        delegate!(self, name())
    }
}

impl FromStr for Curve {
    type Err = PoolError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "constant_product" => Ok(Self::ConstantProduct),
            #[cfg(feature = "constant-sum")]
            "constant_sum" => Ok(Self::ConstantSum),
            _ => Err(PoolError::InvalidConfiguration("unknown pricing curve")),
        }
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn default_is_constant_product() {
        assert_eq!(Curve::default(), Curve::ConstantProduct);
    }

    #[test]
    fn delegates_to_constant_product() {
        assert_eq!(
            Curve::ConstantProduct.amount_out(
                Amount::new(1_000),
                Amount::new(1_000),
                Amount::new(100)
            ),
            Ok(Amount::new(90))
        );
    }

    #[cfg(feature = "constant-sum")]
    #[test]
    fn delegates_to_constant_sum() {
        assert_eq!(
            Curve::ConstantSum.amount_out(
                Amount::new(1_000),
                Amount::new(1_000),
                Amount::new(100)
            ),
            Ok(Amount::new(100))
        );
        assert_eq!(Curve::ConstantSum.name(), "constant_sum");
    }

    #[test]
    fn parse_and_display_agree() {
        let Ok(c) = "constant_product".parse::<Curve>() else {
            panic!("expected Ok");
        };
        assert_eq!(c, Curve::ConstantProduct);
        assert_eq!(c.to_string(), "constant_product");
    }

    #[test]
    fn unknown_name_rejected() {
        assert!(matches!(
            "weighted".parse::<Curve>(),
            Err(PoolError::InvalidConfiguration(_))
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_snake_case() {
        let Ok(json) = serde_json::to_string(&Curve::ConstantProduct) else {
            panic!("serialize");
        };
        assert_eq!(json, "\"constant_product\"");
    }
}
