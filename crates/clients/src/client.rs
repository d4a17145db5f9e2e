//! Customer record (`Clients` table).

use serde::{Deserialize, Serialize};

use comptoir_core::{ClientId, DomainError, DomainResult, Entity};

/// One customer.
///
/// `points_fidelite` is kept equal to the running sum of the client's
/// `Historique_Fidelite` deltas; both are written as one atomic unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub id_client: ClientId,
    pub nom_client: String,
    /// Free-form classification ("particulier", "entreprise", ...).
    pub type_client: String,
    pub adresse: Option<String>,
    pub telephone: Option<String>,
    /// Loyalty balance, >= 0.
    pub points_fidelite: i64,
}

impl Client {
    /// Balance after a signed delta; redemptions may not overdraw.
    pub fn points_after(&self, delta: i64) -> DomainResult<i64> {
        let next = self.points_fidelite + delta;
        if next < 0 {
            return Err(DomainError::InsufficientPoints {
                requested: -delta,
                available: self.points_fidelite,
            });
        }
        Ok(next)
    }
}

impl Entity for Client {
    type Id = ClientId;

    fn id(&self) -> ClientId {
        self.id_client
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn client(points: i64) -> Client {
        Client {
            id_client: ClientId::new(1),
            nom_client: "Durand".to_string(),
            type_client: "particulier".to_string(),
            adresse: None,
            telephone: None,
            points_fidelite: points,
        }
    }

    #[test]
    fn redemption_down_to_zero_is_allowed() {
        assert_eq!(client(30).points_after(-30).unwrap(), 0);
    }

    #[test]
    fn overdraw_reports_requested_and_available() {
        let err = client(30).points_after(-31).unwrap_err();
        assert_eq!(
            err,
            DomainError::InsufficientPoints {
                requested: 31,
                available: 30
            }
        );
    }

    proptest! {
        /// Property: whatever the delta, an accepted adjustment never leaves
        /// a negative balance.
        #[test]
        fn accepted_adjustments_never_go_negative(points in 0i64..10_000, delta in -20_000i64..20_000) {
            if let Ok(next) = client(points).points_after(delta) {
                prop_assert!(next >= 0);
                prop_assert_eq!(next, points + delta);
            } else {
                prop_assert!(points + delta < 0);
            }
        }
    }
}
