//! In-memory tables, secondary indices and id sequences.

use std::collections::{BTreeMap, HashMap};

use comptoir_auth::{Session, User};
use comptoir_catalog::{Magasin, Produit, Promotion};
use comptoir_clients::{Client, HistoriqueFidelite};
use comptoir_core::{
    ClientId, CommandeId, DomainError, DomainResult, FactureId, HistoriqueId, LigneId, LivraisonId,
    MagasinId, ProduitId, PromotionId, SessionId, UserId,
};
use comptoir_orders::{Commande, Facture, LigneCommande, Livraison};
use comptoir_stock::StockMagasin;

/// Per-table id sequences; each `next_*` hands out the next row id.
#[derive(Debug, Default)]
pub(crate) struct Sequences {
    users: i64,
    sessions: i64,
    magasins: i64,
    produits: i64,
    promotions: i64,
    clients: i64,
    commandes: i64,
    lignes: i64,
    livraisons: i64,
    factures: i64,
    historique: i64,
}

macro_rules! next_id {
    ($fn_name:ident, $field:ident, $id:ty) => {
        pub(crate) fn $fn_name(&mut self) -> $id {
            self.$field += 1;
            <$id>::new(self.$field)
        }
    };
}

impl Sequences {
    next_id!(next_user, users, UserId);
    next_id!(next_session, sessions, SessionId);
    next_id!(next_magasin, magasins, MagasinId);
    next_id!(next_produit, produits, ProduitId);
    next_id!(next_promotion, promotions, PromotionId);
    next_id!(next_client, clients, ClientId);
    next_id!(next_commande, commandes, CommandeId);
    next_id!(next_ligne, lignes, LigneId);
    next_id!(next_livraison, livraisons, LivraisonId);
    next_id!(next_facture, factures, FactureId);
    next_id!(next_historique, historique, HistoriqueId);
}

/// Every table of the schema, plus the unique-key indices the operations
/// enforce at write time. Child rows that are listed per parent live in
/// `BTreeMap`s so iteration follows insertion (id) order.
#[derive(Debug, Default)]
pub(crate) struct Tables {
    pub(crate) users: HashMap<UserId, User>,
    /// Unique `Users.username`.
    pub(crate) users_by_username: HashMap<String, UserId>,
    pub(crate) sessions: HashMap<SessionId, Session>,
    /// Unique `Sessions.session_token`.
    pub(crate) sessions_by_token: HashMap<String, SessionId>,

    pub(crate) magasins: HashMap<MagasinId, Magasin>,
    pub(crate) produits: HashMap<ProduitId, Produit>,
    pub(crate) promotions: BTreeMap<PromotionId, Promotion>,

    pub(crate) clients: HashMap<ClientId, Client>,
    pub(crate) historique: BTreeMap<HistoriqueId, HistoriqueFidelite>,

    pub(crate) commandes: HashMap<CommandeId, Commande>,
    pub(crate) lignes: BTreeMap<LigneId, LigneCommande>,
    pub(crate) livraisons: BTreeMap<LivraisonId, Livraison>,
    pub(crate) factures: HashMap<FactureId, Facture>,
    /// One-to-one `Factures.id_commande`.
    pub(crate) facture_by_commande: HashMap<CommandeId, FactureId>,

    /// Composite key (`id_magasin`, `id_produit`); one row per pair.
    pub(crate) stocks: HashMap<(MagasinId, ProduitId), StockMagasin>,

    pub(crate) seq: Sequences,
}

// Foreign-key lookups shared by the operation modules. Every reference must
// resolve before a dependent row is written.
impl Tables {
    pub(crate) fn user(&self, id: UserId) -> DomainResult<&User> {
        self.users.get(&id).ok_or(DomainError::not_found("User"))
    }

    pub(crate) fn magasin(&self, id: MagasinId) -> DomainResult<&Magasin> {
        self.magasins.get(&id).ok_or(DomainError::not_found("Magasin"))
    }

    pub(crate) fn produit(&self, id: ProduitId) -> DomainResult<&Produit> {
        self.produits.get(&id).ok_or(DomainError::not_found("Produit"))
    }

    pub(crate) fn produit_mut(&mut self, id: ProduitId) -> DomainResult<&mut Produit> {
        self.produits.get_mut(&id).ok_or(DomainError::not_found("Produit"))
    }

    pub(crate) fn client(&self, id: ClientId) -> DomainResult<&Client> {
        self.clients.get(&id).ok_or(DomainError::not_found("Client"))
    }

    pub(crate) fn client_mut(&mut self, id: ClientId) -> DomainResult<&mut Client> {
        self.clients.get_mut(&id).ok_or(DomainError::not_found("Client"))
    }

    pub(crate) fn commande(&self, id: CommandeId) -> DomainResult<&Commande> {
        self.commandes.get(&id).ok_or(DomainError::not_found("Commande"))
    }

    pub(crate) fn commande_mut(&mut self, id: CommandeId) -> DomainResult<&mut Commande> {
        self.commandes.get_mut(&id).ok_or(DomainError::not_found("Commande"))
    }

    pub(crate) fn livraison_mut(&mut self, id: LivraisonId) -> DomainResult<&mut Livraison> {
        self.livraisons.get_mut(&id).ok_or(DomainError::not_found("Livraison"))
    }

    pub(crate) fn lignes_of(&self, id: CommandeId) -> Vec<LigneCommande> {
        self.lignes
            .values()
            .filter(|l| l.id_commande == id)
            .cloned()
            .collect()
    }
}
