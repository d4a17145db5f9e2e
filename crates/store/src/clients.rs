//! Customer & loyalty operations.

use chrono::{DateTime, Utc};

use comptoir_clients::{Client, HistoriqueFidelite};
use comptoir_core::{ClientId, DomainError, DomainResult};

use crate::store::Store;

impl Store {
    pub fn create_client(
        &self,
        nom_client: &str,
        type_client: &str,
        adresse: Option<&str>,
        telephone: Option<&str>,
    ) -> DomainResult<Client> {
        let mut tables = self.write()?;
        let id_client = tables.seq.next_client();
        let client = Client {
            id_client,
            nom_client: nom_client.to_string(),
            type_client: type_client.to_string(),
            adresse: adresse.map(str::to_string),
            telephone: telephone.map(str::to_string),
            points_fidelite: 0,
        };
        tables.clients.insert(id_client, client.clone());
        tracing::debug!(%id_client, nom_client, "client created");
        Ok(client)
    }

    pub fn find_client(&self, id: ClientId) -> DomainResult<Client> {
        Ok(self.read()?.client(id)?.clone())
    }

    /// Record one loyalty transaction: append a `Historique_Fidelite` row
    /// and move `points_fidelite` by the same delta, as one atomic unit.
    /// On `InsufficientPoints` neither write happens.
    pub fn adjust_points(
        &self,
        id_client: ClientId,
        points_ajoutes: i64,
        description: Option<&str>,
        date_operation: DateTime<Utc>,
    ) -> DomainResult<HistoriqueFidelite> {
        let mut tables = self.write()?;
        let solde = tables.client(id_client)?.points_after(points_ajoutes)?;

        let id_historique = tables.seq.next_historique();
        let entry = HistoriqueFidelite {
            id_historique,
            id_client,
            date_operation,
            points_ajoutes,
            description: description.map(str::to_string),
        };
        tables.historique.insert(id_historique, entry.clone());
        tables.client_mut(id_client)?.points_fidelite = solde;

        tracing::debug!(%id_client, points_ajoutes, solde, "loyalty points adjusted");
        Ok(entry)
    }

    /// The client's ledger, in insertion order.
    pub fn historique_fidelite(&self, id_client: ClientId) -> DomainResult<Vec<HistoriqueFidelite>> {
        let tables = self.read()?;
        tables.client(id_client)?;
        Ok(tables
            .historique
            .values()
            .filter(|h| h.id_client == id_client)
            .cloned()
            .collect())
    }

    /// RESTRICT delete: refused while orders or ledger rows still reference
    /// the client.
    pub fn delete_client(&self, id: ClientId) -> DomainResult<()> {
        let mut tables = self.write()?;
        tables.client(id)?;

        if tables.commandes.values().any(|c| c.id_client == id) {
            return Err(DomainError::constraint("client is referenced by commandes"));
        }
        if tables.historique.values().any(|h| h.id_client == id) {
            return Err(DomainError::constraint(
                "client is referenced by historique_fidelite",
            ));
        }

        tables.clients.remove(&id);
        tracing::debug!(id_client = %id, "client deleted");
        Ok(())
    }
}
