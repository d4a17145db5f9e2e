//! Product record (`Produits` table).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use comptoir_core::money;
use comptoir_core::{DomainError, DomainResult, Entity, ProduitId};

/// One sellable product/SKU.
///
/// `prix_unitaire` is the *current* price; order lines snapshot it at order
/// creation and are never rewritten when it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Produit {
    pub id_produit: ProduitId,
    pub nom_produit: String,
    pub categorie: String,
    /// Fixed-point DECIMAL(10,2), >= 0.
    pub prix_unitaire: Decimal,
    /// Central warehouse count, >= 0.
    pub stock_central: i64,
}

impl Produit {
    pub fn check_prix(prix: Decimal) -> DomainResult<()> {
        money::check_non_negative("prix_unitaire", prix)
    }

    /// Apply a signed delta to `stock_central`, refusing to go negative.
    pub fn stock_central_after(&self, delta: i64) -> DomainResult<i64> {
        let next = self.stock_central + delta;
        if next < 0 {
            return Err(DomainError::InsufficientStock {
                requested: -delta,
                available: self.stock_central,
            });
        }
        Ok(next)
    }
}

impl Entity for Produit {
    type Id = ProduitId;

    fn id(&self) -> ProduitId {
        self.id_produit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use comptoir_core::money::montant;

    fn produit(stock_central: i64) -> Produit {
        Produit {
            id_produit: ProduitId::new(1),
            nom_produit: "Stylo".to_string(),
            categorie: "Papeterie".to_string(),
            prix_unitaire: montant(2, 50),
            stock_central,
        }
    }

    #[test]
    fn stock_central_accepts_decrement_to_zero() {
        assert_eq!(produit(5).stock_central_after(-5).unwrap(), 0);
    }

    #[test]
    fn stock_central_refuses_going_negative() {
        let err = produit(5).stock_central_after(-6).unwrap_err();
        assert_eq!(
            err,
            DomainError::InsufficientStock {
                requested: 6,
                available: 5
            }
        );
    }

    #[test]
    fn negative_price_is_rejected() {
        assert!(Produit::check_prix(montant(-1, 0)).is_err());
    }
}
