//! Promotion record (`Promotions` table).

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use comptoir_core::money;
use comptoir_core::{DomainError, DomainResult, Entity, ProduitId, PromotionId};

/// A discount window on one product.
///
/// A product may carry overlapping promotions; which one wins is a
/// business-layer decision, not a schema rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Promotion {
    pub id_promotion: PromotionId,
    pub id_produit: ProduitId,
    pub description: Option<String>,
    pub date_debut: NaiveDate,
    pub date_fin: NaiveDate,
    /// Fixed-point DECIMAL(5,2) percentage, 0..=100.
    pub taux_reduction: Decimal,
}

impl Promotion {
    /// `date_debut <= date_fin` must hold for every row.
    pub fn check_window(date_debut: NaiveDate, date_fin: NaiveDate) -> DomainResult<()> {
        if date_debut > date_fin {
            return Err(DomainError::constraint(format!(
                "date_debut {date_debut} is after date_fin {date_fin}"
            )));
        }
        Ok(())
    }

    pub fn check_taux(taux: Decimal) -> DomainResult<()> {
        money::check_taux(taux)
    }

    /// Active iff `date_debut <= date <= date_fin` (both bounds inclusive).
    pub fn is_active_on(&self, date: NaiveDate) -> bool {
        self.date_debut <= date && date <= self.date_fin
    }
}

impl Entity for Promotion {
    type Id = PromotionId;

    fn id(&self) -> PromotionId {
        self.id_promotion
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use comptoir_core::money::montant;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn soldes() -> Promotion {
        Promotion {
            id_promotion: PromotionId::new(1),
            id_produit: ProduitId::new(1),
            description: Some("Soldes d'hiver".to_string()),
            date_debut: date(2025, 1, 8),
            date_fin: date(2025, 2, 4),
            taux_reduction: montant(20, 0),
        }
    }

    #[test]
    fn reversed_window_is_rejected() {
        let err = Promotion::check_window(date(2025, 2, 4), date(2025, 1, 8)).unwrap_err();
        assert!(matches!(err, DomainError::Constraint(_)));
    }

    #[test]
    fn single_day_window_is_allowed() {
        assert!(Promotion::check_window(date(2025, 1, 8), date(2025, 1, 8)).is_ok());
    }

    #[test]
    fn activity_bounds_are_inclusive() {
        let promo = soldes();
        assert!(promo.is_active_on(date(2025, 1, 8)));
        assert!(promo.is_active_on(date(2025, 2, 4)));
        assert!(!promo.is_active_on(date(2025, 2, 5)));
        assert!(!promo.is_active_on(date(2025, 1, 7)));
    }
}
