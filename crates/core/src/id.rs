//! Strongly-typed row identifiers used across the domain.
//!
//! All identifiers are integers assigned by per-table sequences at row
//! creation. The newtypes keep a `CommandeId` from ever being handed to an
//! operation expecting a `ClientId`.

use serde::{Deserialize, Serialize};

macro_rules! impl_row_id {
    ($(#[$doc:meta])* $t:ident) => {
        $(#[$doc])*
        #[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $t(i64);

        impl $t {
            pub fn new(raw: i64) -> Self {
                Self(raw)
            }

            pub fn as_i64(&self) -> i64 {
                self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<i64> for $t {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$t> for i64 {
            fn from(value: $t) -> Self {
                value.0
            }
        }
    };
}

impl_row_id!(
    /// Row id of `Users.id_user`.
    UserId
);
impl_row_id!(
    /// Row id of `Sessions.id`.
    SessionId
);
impl_row_id!(
    /// Row id of `Magasins.id_magasin`.
    MagasinId
);
impl_row_id!(
    /// Row id of `Produits.id_produit`.
    ProduitId
);
impl_row_id!(
    /// Row id of `Clients.id_client`.
    ClientId
);
impl_row_id!(
    /// Row id of `Promotions.id_promotion`.
    PromotionId
);
impl_row_id!(
    /// Row id of `Commandes.id_commande`.
    CommandeId
);
impl_row_id!(
    /// Row id of `Lignes_Commande.id_ligne`.
    LigneId
);
impl_row_id!(
    /// Row id of `Livraisons.id_livraison`.
    LivraisonId
);
impl_row_id!(
    /// Row id of `Factures.id_facture`.
    FactureId
);
impl_row_id!(
    /// Row id of `Historique_Fidelite.id_historique`.
    HistoriqueId
);
