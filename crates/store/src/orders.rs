//! Order lifecycle operations: header, lines, deliveries, invoice.

use chrono::{DateTime, Utc};

use comptoir_core::{ClientId, CommandeId, DomainError, DomainResult, LivraisonId, MagasinId};
use comptoir_orders::{
    Commande, Facture, LigneCommande, Livraison, NouvelleLigne, StatutCommande, StatutLivraison,
};

use crate::store::Store;

impl Store {
    /// Create an order with its lines in one transaction.
    ///
    /// Requires at least one line, each with `quantite > 0` and an existing
    /// product. Every line's `prix_unitaire` is copied from the product's
    /// current price: a snapshot, not a live reference.
    pub fn create_commande(
        &self,
        id_client: ClientId,
        id_magasin: MagasinId,
        date_commande: DateTime<Utc>,
        lignes: &[NouvelleLigne],
    ) -> DomainResult<Commande> {
        if lignes.is_empty() {
            return Err(DomainError::constraint("commande requires at least one ligne"));
        }

        let mut tables = self.write()?;
        tables.client(id_client)?;
        tables.magasin(id_magasin)?;

        // Validate everything before the first write.
        let mut prix = Vec::with_capacity(lignes.len());
        for ligne in lignes {
            LigneCommande::check_quantite(ligne.quantite)?;
            prix.push(tables.produit(ligne.id_produit)?.prix_unitaire);
        }

        let id_commande = tables.seq.next_commande();
        let commande = Commande {
            id_commande,
            id_client,
            id_magasin,
            date_commande,
            statut_commande: StatutCommande::default(),
        };
        tables.commandes.insert(id_commande, commande.clone());

        for (ligne, prix_unitaire) in lignes.iter().zip(prix) {
            let id_ligne = tables.seq.next_ligne();
            tables.lignes.insert(
                id_ligne,
                LigneCommande {
                    id_ligne,
                    id_commande,
                    id_produit: ligne.id_produit,
                    quantite: ligne.quantite,
                    prix_unitaire,
                },
            );
        }

        tracing::info!(%id_commande, %id_client, %id_magasin, lignes = lignes.len(), "commande created");
        Ok(commande)
    }

    pub fn find_commande(&self, id: CommandeId) -> DomainResult<Commande> {
        Ok(self.read()?.commande(id)?.clone())
    }

    /// The order's lines, in insertion order.
    pub fn lignes_commande(&self, id: CommandeId) -> DomainResult<Vec<LigneCommande>> {
        let tables = self.read()?;
        tables.commande(id)?;
        Ok(tables.lignes_of(id))
    }

    /// Attach a delivery to an order; status starts at its default
    /// `En attente`.
    pub fn add_livraison(
        &self,
        id_commande: CommandeId,
        id_magasin: MagasinId,
        date_livraison: DateTime<Utc>,
    ) -> DomainResult<Livraison> {
        let mut tables = self.write()?;
        tables.commande(id_commande)?;
        tables.magasin(id_magasin)?;

        let id_livraison = tables.seq.next_livraison();
        let livraison = Livraison {
            id_livraison,
            id_commande,
            id_magasin,
            date_livraison,
            statut_livraison: StatutLivraison::default(),
        };
        tables.livraisons.insert(id_livraison, livraison.clone());
        tracing::debug!(%id_livraison, %id_commande, "livraison added");
        Ok(livraison)
    }

    /// Move a delivery along its forward-only machine
    /// (`En attente` -> `En cours` -> `Livrée`).
    pub fn update_livraison_statut(
        &self,
        id: LivraisonId,
        statut: StatutLivraison,
    ) -> DomainResult<Livraison> {
        let mut tables = self.write()?;
        let livraison = tables.livraison_mut(id)?;
        livraison.statut_livraison = livraison.statut_livraison.transition_to(statut)?;
        Ok(livraison.clone())
    }

    pub fn livraisons_commande(&self, id: CommandeId) -> DomainResult<Vec<Livraison>> {
        let tables = self.read()?;
        tables.commande(id)?;
        Ok(tables
            .livraisons
            .values()
            .filter(|l| l.id_commande == id)
            .cloned()
            .collect())
    }

    /// Generate the order's invoice, at most once. `montant_total` is the
    /// sum of `quantite * prix_unitaire` over the order's lines at this
    /// moment, derived once and stored.
    pub fn generate_facture(
        &self,
        id_commande: CommandeId,
        date_facture: DateTime<Utc>,
    ) -> DomainResult<Facture> {
        let mut tables = self.write()?;
        let commande = tables.commande(id_commande)?;
        if commande.statut_commande == StatutCommande::Annulee {
            return Err(DomainError::constraint("cannot invoice a cancelled commande"));
        }
        if tables.facture_by_commande.contains_key(&id_commande) {
            return Err(DomainError::InvoiceAlreadyExists);
        }

        let lignes = tables.lignes_of(id_commande);
        let montant_total = Facture::montant_total(&lignes);

        let id_facture = tables.seq.next_facture();
        let facture = Facture {
            id_facture,
            id_commande,
            montant_total,
            date_facture,
        };
        tables.factures.insert(id_facture, facture.clone());
        tables.facture_by_commande.insert(id_commande, id_facture);

        tracing::info!(%id_facture, %id_commande, %montant_total, "facture generated");
        Ok(facture)
    }

    pub fn facture_commande(&self, id: CommandeId) -> DomainResult<Facture> {
        let tables = self.read()?;
        tables.commande(id)?;
        let id_facture = tables
            .facture_by_commande
            .get(&id)
            .ok_or(DomainError::not_found("Facture"))?;
        Ok(tables.factures[id_facture].clone())
    }

    /// Cancel an order. Only a still-running, not-yet-invoiced order may be
    /// cancelled; cancellation after invoicing is refused.
    pub fn cancel_commande(&self, id: CommandeId) -> DomainResult<Commande> {
        let mut tables = self.write()?;
        if tables.facture_by_commande.contains_key(&id) {
            return Err(DomainError::constraint("commande is already invoiced"));
        }
        let commande = tables.commande_mut(id)?;
        commande.statut_commande = commande
            .statut_commande
            .transition_to(StatutCommande::Annulee)?;
        tracing::info!(id_commande = %id, "commande cancelled");
        Ok(commande.clone())
    }

    /// Mark an order delivered (`En cours` -> `Livrée` only).
    pub fn mark_commande_livree(&self, id: CommandeId) -> DomainResult<Commande> {
        let mut tables = self.write()?;
        let commande = tables.commande_mut(id)?;
        commande.statut_commande = commande
            .statut_commande
            .transition_to(StatutCommande::Livree)?;
        Ok(commande.clone())
    }
}
