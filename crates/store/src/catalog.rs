//! Catalog operations: stores, products, central stock, promotions.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use comptoir_catalog::{Magasin, Produit, Promotion};
use comptoir_core::{DomainError, DomainResult, MagasinId, ProduitId};

use crate::store::Store;

impl Store {
    pub fn create_magasin(
        &self,
        nom_magasin: &str,
        adresse: &str,
        ville: &str,
        telephone: &str,
    ) -> DomainResult<Magasin> {
        let mut tables = self.write()?;
        let id_magasin = tables.seq.next_magasin();
        let magasin = Magasin {
            id_magasin,
            nom_magasin: nom_magasin.to_string(),
            adresse: adresse.to_string(),
            ville: ville.to_string(),
            telephone: telephone.to_string(),
        };
        tables.magasins.insert(id_magasin, magasin.clone());
        tracing::debug!(%id_magasin, nom_magasin, "magasin created");
        Ok(magasin)
    }

    pub fn update_magasin(
        &self,
        id: MagasinId,
        nom_magasin: &str,
        adresse: &str,
        ville: &str,
        telephone: &str,
    ) -> DomainResult<Magasin> {
        let mut tables = self.write()?;
        let magasin = tables
            .magasins
            .get_mut(&id)
            .ok_or(DomainError::not_found("Magasin"))?;
        magasin.nom_magasin = nom_magasin.to_string();
        magasin.adresse = adresse.to_string();
        magasin.ville = ville.to_string();
        magasin.telephone = telephone.to_string();
        Ok(magasin.clone())
    }

    pub fn find_magasin(&self, id: MagasinId) -> DomainResult<Magasin> {
        Ok(self.read()?.magasin(id)?.clone())
    }

    /// Insert a `Produits` row; `stock_central` starts at its default 0 and
    /// moves through [`Store::adjust_stock_central`].
    pub fn create_produit(
        &self,
        nom_produit: &str,
        categorie: &str,
        prix_unitaire: Decimal,
    ) -> DomainResult<Produit> {
        Produit::check_prix(prix_unitaire)?;

        let mut tables = self.write()?;
        let id_produit = tables.seq.next_produit();
        let produit = Produit {
            id_produit,
            nom_produit: nom_produit.to_string(),
            categorie: categorie.to_string(),
            prix_unitaire,
            stock_central: 0,
        };
        tables.produits.insert(id_produit, produit.clone());
        tracing::debug!(%id_produit, nom_produit, "produit created");
        Ok(produit)
    }

    /// Update the catalog fields of a product. Existing order lines keep
    /// their snapshotted `prix_unitaire` untouched.
    pub fn update_produit(
        &self,
        id: ProduitId,
        nom_produit: &str,
        categorie: &str,
        prix_unitaire: Decimal,
    ) -> DomainResult<Produit> {
        Produit::check_prix(prix_unitaire)?;

        let mut tables = self.write()?;
        let produit = tables.produit_mut(id)?;
        produit.nom_produit = nom_produit.to_string();
        produit.categorie = categorie.to_string();
        produit.prix_unitaire = prix_unitaire;
        Ok(produit.clone())
    }

    pub fn find_produit(&self, id: ProduitId) -> DomainResult<Produit> {
        Ok(self.read()?.produit(id)?.clone())
    }

    /// Apply a signed delta to the central warehouse count; a decrement
    /// past zero is `InsufficientStock` and writes nothing.
    pub fn adjust_stock_central(&self, id: ProduitId, delta: i64) -> DomainResult<i64> {
        let mut tables = self.write()?;
        let produit = tables.produit_mut(id)?;
        let next = produit.stock_central_after(delta)?;
        produit.stock_central = next;
        tracing::debug!(id_produit = %id, delta, stock_central = next, "stock_central adjusted");
        Ok(next)
    }

    pub fn create_promotion(
        &self,
        id_produit: ProduitId,
        description: Option<&str>,
        date_debut: NaiveDate,
        date_fin: NaiveDate,
        taux_reduction: Decimal,
    ) -> DomainResult<Promotion> {
        Promotion::check_window(date_debut, date_fin)?;
        Promotion::check_taux(taux_reduction)?;

        let mut tables = self.write()?;
        tables.produit(id_produit)?;
        let id_promotion = tables.seq.next_promotion();
        let promotion = Promotion {
            id_promotion,
            id_produit,
            description: description.map(str::to_string),
            date_debut,
            date_fin,
            taux_reduction,
        };
        tables.promotions.insert(id_promotion, promotion.clone());
        Ok(promotion)
    }

    /// Promotions of a product whose window contains `date` (inclusive on
    /// both bounds). Overlapping windows all come back; picking one is the
    /// business layer's call.
    pub fn promotions_actives(
        &self,
        id_produit: ProduitId,
        date: NaiveDate,
    ) -> DomainResult<Vec<Promotion>> {
        let tables = self.read()?;
        tables.produit(id_produit)?;
        Ok(tables
            .promotions
            .values()
            .filter(|p| p.id_produit == id_produit && p.is_active_on(date))
            .cloned()
            .collect())
    }

    /// RESTRICT delete: refused while order lines, promotions or per-store
    /// stock rows still reference the product.
    pub fn delete_produit(&self, id: ProduitId) -> DomainResult<()> {
        let mut tables = self.write()?;
        tables.produit(id)?;

        if tables.lignes.values().any(|l| l.id_produit == id) {
            return Err(DomainError::constraint("produit is referenced by lignes_commande"));
        }
        if tables.promotions.values().any(|p| p.id_produit == id) {
            return Err(DomainError::constraint("produit is referenced by promotions"));
        }
        if tables.stocks.keys().any(|(_, p)| *p == id) {
            return Err(DomainError::constraint("produit is referenced by stock_magasins"));
        }

        tables.produits.remove(&id);
        tracing::debug!(id_produit = %id, "produit deleted");
        Ok(())
    }

    /// RESTRICT delete: refused while orders, deliveries or stock rows
    /// still reference the store.
    pub fn delete_magasin(&self, id: MagasinId) -> DomainResult<()> {
        let mut tables = self.write()?;
        tables.magasin(id)?;

        if tables.commandes.values().any(|c| c.id_magasin == id) {
            return Err(DomainError::constraint("magasin is referenced by commandes"));
        }
        if tables.livraisons.values().any(|l| l.id_magasin == id) {
            return Err(DomainError::constraint("magasin is referenced by livraisons"));
        }
        if tables.stocks.keys().any(|(m, _)| *m == id) {
            return Err(DomainError::constraint("magasin is referenced by stock_magasins"));
        }

        tables.magasins.remove(&id);
        tracing::debug!(id_magasin = %id, "magasin deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use comptoir_core::money::montant;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn stock_central_cannot_go_negative() {
        let store = Store::new();
        let produit = store.create_produit("Cahier", "Papeterie", montant(3, 0)).unwrap();
        store.adjust_stock_central(produit.id_produit, 10).unwrap();

        let err = store.adjust_stock_central(produit.id_produit, -11).unwrap_err();
        assert_eq!(
            err,
            DomainError::InsufficientStock {
                requested: 11,
                available: 10
            }
        );
        // Refused write left the count untouched.
        assert_eq!(store.find_produit(produit.id_produit).unwrap().stock_central, 10);
    }

    #[test]
    fn price_update_keeps_catalog_current() {
        let store = Store::new();
        let produit = store.create_produit("Stylo", "Papeterie", montant(2, 0)).unwrap();
        store
            .update_produit(produit.id_produit, "Stylo", "Papeterie", montant(2, 50))
            .unwrap();
        assert_eq!(
            store.find_produit(produit.id_produit).unwrap().prix_unitaire,
            montant(2, 50)
        );
    }

    #[test]
    fn promotion_requires_an_existing_product() {
        let store = Store::new();
        let err = store
            .create_promotion(
                ProduitId::new(99),
                None,
                date(2025, 1, 1),
                date(2025, 1, 31),
                montant(10, 0),
            )
            .unwrap_err();
        assert_eq!(err, DomainError::not_found("Produit"));
    }

    #[test]
    fn promotion_lookup_filters_by_window() {
        let store = Store::new();
        let produit = store.create_produit("Agenda", "Papeterie", montant(12, 0)).unwrap();
        store
            .create_promotion(
                produit.id_produit,
                Some("Rentrée"),
                date(2025, 8, 20),
                date(2025, 9, 10),
                montant(15, 0),
            )
            .unwrap();

        assert_eq!(
            store
                .promotions_actives(produit.id_produit, date(2025, 9, 1))
                .unwrap()
                .len(),
            1
        );
        // Outside every window: no active promotion.
        assert!(
            store
                .promotions_actives(produit.id_produit, date(2025, 10, 1))
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn reversed_promotion_window_is_refused() {
        let store = Store::new();
        let produit = store.create_produit("Gomme", "Papeterie", montant(1, 0)).unwrap();
        let err = store
            .create_promotion(
                produit.id_produit,
                None,
                date(2025, 2, 1),
                date(2025, 1, 1),
                montant(5, 0),
            )
            .unwrap_err();
        assert!(matches!(err, DomainError::Constraint(_)));
    }

    #[test]
    fn delete_produit_is_restricted_while_referenced() {
        let store = Store::new();
        let produit = store.create_produit("Cartable", "Maroquinerie", montant(35, 0)).unwrap();
        store
            .create_promotion(
                produit.id_produit,
                None,
                date(2025, 1, 1),
                date(2025, 1, 31),
                montant(10, 0),
            )
            .unwrap();

        let err = store.delete_produit(produit.id_produit).unwrap_err();
        assert!(matches!(err, DomainError::Constraint(_)));
        assert!(store.find_produit(produit.id_produit).is_ok());
    }
}
