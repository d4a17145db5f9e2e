//! Invoice record (`Factures` table).

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use comptoir_core::{CommandeId, Entity, FactureId};

use crate::ligne::LigneCommande;

/// Billing document for an order; one-to-one with `Commandes`.
///
/// `montant_total` is derived at creation from the order's lines and never
/// recomputed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facture {
    pub id_facture: FactureId,
    pub id_commande: CommandeId,
    pub montant_total: Decimal,
    pub date_facture: DateTime<Utc>,
}

impl Facture {
    /// Invoice total: sum of `quantite * prix_unitaire` over the lines.
    pub fn montant_total(lignes: &[LigneCommande]) -> Decimal {
        lignes.iter().map(LigneCommande::sous_total).sum()
    }
}

impl Entity for Facture {
    type Id = FactureId;

    fn id(&self) -> FactureId {
        self.id_facture
    }
}
