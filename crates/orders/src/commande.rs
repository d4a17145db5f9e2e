//! Order header record (`Commandes` table) and its status machine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use comptoir_core::{ClientId, CommandeId, DomainError, DomainResult, Entity, MagasinId};

/// Order status, persisted as the historical French wire strings of the
/// `statut_commande` column. `EnCours` is the only non-terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum StatutCommande {
    #[default]
    #[serde(rename = "En cours")]
    EnCours,
    #[serde(rename = "Livrée")]
    Livree,
    #[serde(rename = "Annulée")]
    Annulee,
}

impl StatutCommande {
    pub fn is_terminal(self) -> bool {
        !matches!(self, StatutCommande::EnCours)
    }

    /// Validate a transition: EnCours -> Livree and EnCours -> Annulee are
    /// the only legal moves; terminal states accept nothing.
    pub fn transition_to(self, next: StatutCommande) -> DomainResult<StatutCommande> {
        match (self, next) {
            (StatutCommande::EnCours, StatutCommande::Livree)
            | (StatutCommande::EnCours, StatutCommande::Annulee) => Ok(next),
            _ => Err(DomainError::invalid_transition(self, next)),
        }
    }
}

impl core::fmt::Display for StatutCommande {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            StatutCommande::EnCours => write!(f, "En cours"),
            StatutCommande::Livree => write!(f, "Livrée"),
            StatutCommande::Annulee => write!(f, "Annulée"),
        }
    }
}

/// One row of `Commandes`. Owns one or more lines, zero or more deliveries
/// and at most one invoice (looked up through the store's indices).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commande {
    pub id_commande: CommandeId,
    pub id_client: ClientId,
    pub id_magasin: MagasinId,
    pub date_commande: DateTime<Utc>,
    pub statut_commande: StatutCommande,
}

impl Entity for Commande {
    type Id = CommandeId;

    fn id(&self) -> CommandeId {
        self.id_commande
    }
}
