//! Loyalty ledger record (`Historique_Fidelite` table).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use comptoir_core::{ClientId, Entity, HistoriqueId};

/// One loyalty-point adjustment. `points_ajoutes` is signed: positive for
/// awards, negative for redemptions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoriqueFidelite {
    pub id_historique: HistoriqueId,
    pub id_client: ClientId,
    pub date_operation: DateTime<Utc>,
    pub points_ajoutes: i64,
    pub description: Option<String>,
}

impl Entity for HistoriqueFidelite {
    type Id = HistoriqueId;

    fn id(&self) -> HistoriqueId {
        self.id_historique
    }
}

/// Running sum of a ledger slice. The store keeps `Client.points_fidelite`
/// equal to this at all times.
pub fn solde(entries: &[HistoriqueFidelite]) -> i64 {
    entries.iter().map(|e| e.points_ajoutes).sum()
}
