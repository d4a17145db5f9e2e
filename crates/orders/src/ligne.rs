//! Order line record (`Lignes_Commande` table).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use comptoir_core::{CommandeId, DomainError, DomainResult, Entity, LigneId, ProduitId};

/// One product line within an order.
///
/// `prix_unitaire` is a snapshot of the product price at order creation.
/// It is immutable once written: later catalog price changes never rewrite
/// history (the historical-price invariant).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LigneCommande {
    pub id_ligne: LigneId,
    pub id_commande: CommandeId,
    pub id_produit: ProduitId,
    /// Must be > 0.
    pub quantite: i64,
    pub prix_unitaire: Decimal,
}

impl LigneCommande {
    pub fn check_quantite(quantite: i64) -> DomainResult<()> {
        if quantite <= 0 {
            return Err(DomainError::constraint(format!(
                "quantite must be > 0, got {quantite}"
            )));
        }
        Ok(())
    }

    /// Line subtotal, `quantite * prix_unitaire` in fixed point.
    pub fn sous_total(&self) -> Decimal {
        Decimal::from(self.quantite) * self.prix_unitaire
    }
}

impl Entity for LigneCommande {
    type Id = LigneId;

    fn id(&self) -> LigneId {
        self.id_ligne
    }
}

/// Caller-side input for one line of a new order; the price is snapshotted
/// by the store, not supplied here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NouvelleLigne {
    pub id_produit: ProduitId,
    pub quantite: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use comptoir_core::money::montant;

    #[test]
    fn zero_and_negative_quantities_are_rejected() {
        assert!(LigneCommande::check_quantite(0).is_err());
        assert!(LigneCommande::check_quantite(-3).is_err());
        assert!(LigneCommande::check_quantite(1).is_ok());
    }

    #[test]
    fn sous_total_multiplies_in_fixed_point() {
        let ligne = LigneCommande {
            id_ligne: LigneId::new(1),
            id_commande: CommandeId::new(1),
            id_produit: ProduitId::new(1),
            quantite: 3,
            prix_unitaire: montant(2, 50),
        };
        assert_eq!(ligne.sous_total(), montant(7, 50));
    }
}
