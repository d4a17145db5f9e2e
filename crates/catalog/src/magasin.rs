//! Store record (`Magasins` table).

use serde::{Deserialize, Serialize};

use comptoir_core::{Entity, MagasinId};

/// One physical retail location. Owns the orders, deliveries and per-store
/// stock rows placed at it (ownership is parent -> child only).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Magasin {
    pub id_magasin: MagasinId,
    pub nom_magasin: String,
    pub adresse: String,
    pub ville: String,
    pub telephone: String,
}

impl Entity for Magasin {
    type Id = MagasinId;

    fn id(&self) -> MagasinId {
        self.id_magasin
    }
}
