//! Type compatibility and numeric promotion.
//!
//! SPL has no user-defined conversions. Two relations cover the language:
//!
//! - [`is_compatible`]: may a value of type `R` be stored where `L` is
//!   expected (declarations, call arguments). Not symmetric.
//! - [`promote_numeric`]: the common type of two arithmetic operands.

use spl_core::SplType;

/// Whether a value of type `rhs` may initialize or be passed as `lhs`.
///
/// Holds when
/// 1. `lhs == rhs`,
/// 2. `lhs` is `real` and `rhs` is `integer` (never the reverse),
/// 3. one side is `integer` or `real` and the other is a unit, in either
///    direction.
///
/// ```
/// use spl_compiler::is_compatible;
/// use spl_core::SplType;
///
/// assert!(is_compatible(&SplType::real(), &SplType::integer()));
/// assert!(!is_compatible(&SplType::integer(), &SplType::real()));
/// ```
pub fn is_compatible(lhs: &SplType, rhs: &SplType) -> bool {
    if lhs == rhs {
        return true;
    }
    if lhs.is_real() && rhs.is_integer() {
        return true;
    }
    (lhs.is_numeric_primitive() && rhs.is_unit()) || (lhs.is_unit() && rhs.is_numeric_primitive())
}

/// Common type of two numeric operands.
///
/// | lhs | rhs | result |
/// |---|---|---|
/// | integer | integer | integer |
/// | integer/real | integer/real | real |
/// | unit `U` | integer/real | `U` |
/// | integer/real | unit `U` | `U` |
/// | unit `U` | unit `U` | `U` |
///
/// Returns `None` for anything else, including two different units.
pub fn promote_numeric(lhs: &SplType, rhs: &SplType) -> Option<SplType> {
    match (lhs.is_unit(), rhs.is_unit()) {
        (true, true) => (lhs == rhs).then(|| lhs.clone()),
        (true, false) => rhs.is_numeric_primitive().then(|| lhs.clone()),
        (false, true) => lhs.is_numeric_primitive().then(|| rhs.clone()),
        (false, false) => {
            if !lhs.is_numeric_primitive() || !rhs.is_numeric_primitive() {
                None
            } else if lhs.is_integer() && rhs.is_integer() {
                Some(SplType::integer())
            } else {
                Some(SplType::real())
            }
        }
    }
}

/// Whether a value is usable as numeric: `integer`, `real` or a unit.
#[inline]
pub fn is_numeric(ty: &SplType) -> bool {
    ty.is_numeric_primitive() || ty.is_unit()
}
