//! `comptoir-orders` — order lifecycle: header, lines, deliveries, invoice.

pub mod commande;
pub mod facture;
pub mod ligne;
pub mod livraison;

pub use commande::{Commande, StatutCommande};
pub use facture::Facture;
pub use ligne::{LigneCommande, NouvelleLigne};
pub use livraison::{Livraison, StatutLivraison};
