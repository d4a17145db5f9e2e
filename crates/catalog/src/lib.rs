//! `comptoir-catalog` — stores, products and promotions.

pub mod magasin;
pub mod produit;
pub mod promotion;

pub use magasin::Magasin;
pub use produit::Produit;
pub use promotion::Promotion;
