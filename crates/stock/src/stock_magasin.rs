//! Per-store stock record (`Stock_Magasins` table).

use serde::{Deserialize, Serialize};

use comptoir_core::{DomainError, DomainResult, MagasinId, ProduitId};

/// Available stock of one product at one store.
///
/// Identity is the composite key (`id_magasin`, `id_produit`); exactly one
/// row may exist per pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockMagasin {
    pub id_magasin: MagasinId,
    pub id_produit: ProduitId,
    /// Must never be < 0, under any interleaving of operations.
    pub stock_disponible: i64,
}

impl StockMagasin {
    pub fn key(&self) -> (MagasinId, ProduitId) {
        (self.id_magasin, self.id_produit)
    }

    /// Quantities moved by reservations/replenishments must be positive.
    pub fn check_quantite(quantite: i64) -> DomainResult<()> {
        if quantite <= 0 {
            return Err(DomainError::constraint(format!(
                "quantite must be > 0, got {quantite}"
            )));
        }
        Ok(())
    }

    /// Remaining stock after reserving `quantite` units, refusing to go
    /// negative.
    pub fn reserve(&self, quantite: i64) -> DomainResult<i64> {
        Self::check_quantite(quantite)?;
        if quantite > self.stock_disponible {
            return Err(DomainError::InsufficientStock {
                requested: quantite,
                available: self.stock_disponible,
            });
        }
        Ok(self.stock_disponible - quantite)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn row(stock_disponible: i64) -> StockMagasin {
        StockMagasin {
            id_magasin: MagasinId::new(1),
            id_produit: ProduitId::new(1),
            stock_disponible,
        }
    }

    #[test]
    fn reserving_the_last_unit_is_allowed() {
        assert_eq!(row(1).reserve(1).unwrap(), 0);
    }

    #[test]
    fn reserving_more_than_available_is_refused() {
        let err = row(1).reserve(2).unwrap_err();
        assert_eq!(
            err,
            DomainError::InsufficientStock {
                requested: 2,
                available: 1
            }
        );
    }

    #[test]
    fn non_positive_quantities_are_refused() {
        assert!(matches!(row(5).reserve(0).unwrap_err(), DomainError::Constraint(_)));
        assert!(matches!(row(5).reserve(-1).unwrap_err(), DomainError::Constraint(_)));
    }

    proptest! {
        /// Property: an accepted reservation never leaves negative stock.
        #[test]
        fn reservations_never_go_negative(available in 0i64..1_000, quantite in -10i64..2_000) {
            if let Ok(rest) = row(available).reserve(quantite) {
                prop_assert!(rest >= 0);
                prop_assert_eq!(rest, available - quantite);
            }
        }
    }
}
