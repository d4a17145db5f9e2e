//! Delivery record (`Livraisons` table) and its status machine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use comptoir_core::{CommandeId, DomainError, DomainResult, Entity, LivraisonId, MagasinId};

/// Delivery status, persisted as the French wire strings of the
/// `statut_livraison` column. The machine is forward-only:
/// EnAttente -> EnCours -> Livree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum StatutLivraison {
    #[default]
    #[serde(rename = "En attente")]
    EnAttente,
    #[serde(rename = "En cours")]
    EnCours,
    #[serde(rename = "Livrée")]
    Livree,
}

impl StatutLivraison {
    fn rank(self) -> u8 {
        match self {
            StatutLivraison::EnAttente => 0,
            StatutLivraison::EnCours => 1,
            StatutLivraison::Livree => 2,
        }
    }

    /// Only single forward steps are legal; skipping a stage or moving
    /// backwards is an invalid transition.
    pub fn transition_to(self, next: StatutLivraison) -> DomainResult<StatutLivraison> {
        if next.rank() == self.rank() + 1 {
            Ok(next)
        } else {
            Err(DomainError::invalid_transition(self, next))
        }
    }
}

impl core::fmt::Display for StatutLivraison {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            StatutLivraison::EnAttente => write!(f, "En attente"),
            StatutLivraison::EnCours => write!(f, "En cours"),
            StatutLivraison::Livree => write!(f, "Livrée"),
        }
    }
}

/// One delivery event fulfilling (part of) an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Livraison {
    pub id_livraison: LivraisonId,
    pub id_commande: CommandeId,
    pub id_magasin: MagasinId,
    pub date_livraison: DateTime<Utc>,
    pub statut_livraison: StatutLivraison,
}

impl Entity for Livraison {
    type Id = LivraisonId;

    fn id(&self) -> LivraisonId {
        self.id_livraison
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_status_is_en_attente() {
        assert_eq!(StatutLivraison::default(), StatutLivraison::EnAttente);
    }

    #[test]
    fn forward_steps_are_accepted() {
        let s = StatutLivraison::EnAttente
            .transition_to(StatutLivraison::EnCours)
            .unwrap();
        assert_eq!(s.transition_to(StatutLivraison::Livree).unwrap(), StatutLivraison::Livree);
    }

    #[test]
    fn skipping_a_stage_is_refused() {
        assert!(
            StatutLivraison::EnAttente
                .transition_to(StatutLivraison::Livree)
                .is_err()
        );
    }

    #[test]
    fn moving_backwards_is_refused() {
        assert!(
            StatutLivraison::Livree
                .transition_to(StatutLivraison::EnCours)
                .is_err()
        );
        assert!(
            StatutLivraison::EnCours
                .transition_to(StatutLivraison::EnAttente)
                .is_err()
        );
    }
}
