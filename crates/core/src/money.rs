//! Fixed-point money and rate helpers.
//!
//! Monetary amounts (`DECIMAL(10,2)`) and discount rates (`DECIMAL(5,2)`)
//! are `rust_decimal::Decimal` values, never binary floats, so invoice
//! totals accumulate without rounding drift.

use rust_decimal::Decimal;

use crate::error::{DomainError, DomainResult};

/// Scale of every persisted monetary column.
pub const MONEY_SCALE: u32 = 2;

/// Build an amount from whole currency units and cents, e.g. `montant(10, 0)`
/// for 10.00.
pub fn montant(units: i64, cents: u32) -> Decimal {
    Decimal::new(units * 100 + i64::from(cents), MONEY_SCALE)
}

/// Round to the persisted money scale.
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp(MONEY_SCALE)
}

/// Reject negative unit prices and totals.
pub fn check_non_negative(label: &str, value: Decimal) -> DomainResult<()> {
    if value < Decimal::ZERO {
        return Err(DomainError::constraint(format!("{label} must be >= 0, got {value}")));
    }
    Ok(())
}

/// Discount rates are percentages: 0.00 ..= 100.00.
pub fn check_taux(value: Decimal) -> DomainResult<()> {
    if value < Decimal::ZERO || value > Decimal::from(100) {
        return Err(DomainError::constraint(format!(
            "taux_reduction must be within 0..=100, got {value}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn montant_builds_fixed_point_values() {
        assert_eq!(montant(10, 0).to_string(), "10.00");
        assert_eq!(montant(5, 25).to_string(), "5.25");
    }

    #[test]
    fn sums_carry_no_float_drift() {
        // 0.10 added ten times is exactly 1.00.
        let dime = montant(0, 10);
        let total: Decimal = (0..10).map(|_| dime).sum();
        assert_eq!(total, montant(1, 0));
    }

    #[test]
    fn negative_amounts_are_rejected() {
        let err = check_non_negative("prix_unitaire", montant(-1, 0)).unwrap_err();
        assert!(matches!(err, DomainError::Constraint(_)));
    }

    #[test]
    fn taux_outside_percentage_range_is_rejected() {
        assert!(check_taux(montant(15, 50)).is_ok());
        assert!(check_taux(Decimal::from(101)).is_err());
        assert!(check_taux(montant(-1, 0)).is_err());
    }
}
