//! Per-store stock operations: reservation and replenishment.

use comptoir_core::{DomainError, DomainResult, MagasinId, ProduitId};
use comptoir_stock::StockMagasin;

use crate::store::Store;

impl Store {
    /// Upsert the (`id_magasin`, `id_produit`) row; the composite key keeps
    /// one row per pair.
    pub fn set_stock_magasin(
        &self,
        id_magasin: MagasinId,
        id_produit: ProduitId,
        stock_disponible: i64,
    ) -> DomainResult<StockMagasin> {
        if stock_disponible < 0 {
            return Err(DomainError::constraint(format!(
                "stock_disponible must be >= 0, got {stock_disponible}"
            )));
        }

        let mut tables = self.write()?;
        tables.magasin(id_magasin)?;
        tables.produit(id_produit)?;

        let row = StockMagasin {
            id_magasin,
            id_produit,
            stock_disponible,
        };
        tables.stocks.insert(row.key(), row);
        Ok(row)
    }

    /// Available units at a store; a pair without a row counts as zero.
    pub fn stock_disponible(&self, id_magasin: MagasinId, id_produit: ProduitId) -> DomainResult<i64> {
        let tables = self.read()?;
        tables.magasin(id_magasin)?;
        tables.produit(id_produit)?;
        Ok(tables
            .stocks
            .get(&(id_magasin, id_produit))
            .map(|s| s.stock_disponible)
            .unwrap_or(0))
    }

    /// Reserve `quantite` units for an order line at a store. Fails with
    /// `InsufficientStock` rather than letting `stock_disponible` go
    /// negative; concurrent reservations serialize on the writer lock.
    pub fn reserve_stock(
        &self,
        id_magasin: MagasinId,
        id_produit: ProduitId,
        quantite: i64,
    ) -> DomainResult<i64> {
        let mut tables = self.write()?;
        tables.magasin(id_magasin)?;
        tables.produit(id_produit)?;

        let row = tables
            .stocks
            .get(&(id_magasin, id_produit))
            .copied()
            .unwrap_or(StockMagasin {
                id_magasin,
                id_produit,
                stock_disponible: 0,
            });
        let reste = row.reserve(quantite)?;

        tables.stocks.insert(
            row.key(),
            StockMagasin {
                stock_disponible: reste,
                ..row
            },
        );
        tracing::debug!(%id_magasin, %id_produit, quantite, reste, "stock reserved");
        Ok(reste)
    }

    /// Move `quantite` units from the central warehouse to a store: both
    /// the `stock_central` decrement and the `stock_disponible` increment,
    /// or neither. Returns (stock_central, stock_disponible) after.
    pub fn replenish_stock(
        &self,
        id_magasin: MagasinId,
        id_produit: ProduitId,
        quantite: i64,
    ) -> DomainResult<(i64, i64)> {
        StockMagasin::check_quantite(quantite)?;

        let mut tables = self.write()?;
        tables.magasin(id_magasin)?;
        let central = tables.produit(id_produit)?.stock_central_after(-quantite)?;

        tables.produit_mut(id_produit)?.stock_central = central;
        let row = tables
            .stocks
            .entry((id_magasin, id_produit))
            .or_insert(StockMagasin {
                id_magasin,
                id_produit,
                stock_disponible: 0,
            });
        row.stock_disponible += quantite;
        let disponible = row.stock_disponible;

        tracing::debug!(%id_magasin, %id_produit, quantite, central, disponible, "stock replenished");
        Ok((central, disponible))
    }
}
