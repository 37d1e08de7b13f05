use fsa_catalog::product::{ProductCategory, BRAND};
use fsa_catalog::ProductSubject;
use std::collections::BTreeMap;

use crate::error::{StoreError, StoreResult};

/// Listings created at startup: (id, category, variant, opening stock)
const SEED_LISTINGS: &[(&str, ProductCategory, &str, u32)] = &[
    ("LIP001", ProductCategory::Lipstick, "red", 10),
    ("LIP002", ProductCategory::Lipstick, "brown", 8),
    ("LIP003", ProductCategory::Lipstick, "pink", 7),
    ("MASC001", ProductCategory::Mascara, "waterproof", 15),
    ("MASC002", ProductCategory::Mascara, "regular", 12),
    ("BLUSH001", ProductCategory::Blush, "red", 7),
    ("BLUSH002", ProductCategory::Blush, "peach", 6),
    ("BLUSH003", ProductCategory::Blush, "pink", 9),
];

/// In-memory product catalog keyed by listing id
#[derive(Debug, Clone, Default)]
pub struct CatalogRepository {
    products: BTreeMap<String, ProductSubject>,
}

impl CatalogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog populated with the store's standard listings
    pub fn seeded() -> Self {
        let mut repo = Self::new();
        for (id, category, variant, stock) in SEED_LISTINGS {
            let product = category.create(variant);
            repo.products.insert(
                id.to_string(),
                ProductSubject::new(*id, product.listing_name(), BRAND, product.unit_cost, *stock),
            );
        }
        tracing::debug!("Seeded catalog with {} products", repo.products.len());
        repo
    }

    pub fn insert(&mut self, product: ProductSubject) -> StoreResult<()> {
        if self.products.contains_key(&product.id) {
            return Err(StoreError::DuplicateProduct(product.id));
        }
        self.products.insert(product.id.clone(), product);
        Ok(())
    }

    pub fn lookup(&self, id: &str) -> Option<&ProductSubject> {
        self.products.get(id)
    }

    pub fn lookup_mut(&mut self, id: &str) -> Option<&mut ProductSubject> {
        self.products.get_mut(id)
    }

    /// All listings in id order
    pub fn list(&self) -> Vec<&ProductSubject> {
        self.products.values().collect()
    }

    pub fn product_ids(&self) -> Vec<String> {
        self.products.keys().cloned().collect()
    }

    /// Listed and in stock
    pub fn is_available(&self, id: &str) -> bool {
        self.lookup(id).is_some_and(|p| p.is_available())
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_catalog() {
        let repo = CatalogRepository::seeded();

        assert_eq!(repo.len(), 8);
        let lipstick = repo.lookup("LIP002").unwrap();
        assert_eq!(lipstick.name, "Luxury Lipstick (Brown)");
        assert_eq!(lipstick.stock(), 8);
        assert_eq!(lipstick.price(), 24.99);

        assert_eq!(repo.list().len(), 8);
        let ids = repo.product_ids();
        assert_eq!(ids.first().map(String::as_str), Some("BLUSH001"));
        assert_eq!(ids.last().map(String::as_str), Some("MASC002"));
    }

    #[test]
    fn test_lookup_missing() {
        let repo = CatalogRepository::seeded();
        assert!(repo.lookup("NAIL001").is_none());
        assert!(!repo.is_available("NAIL001"));
    }

    #[test]
    fn test_insert_rejects_duplicate_id() {
        let mut repo = CatalogRepository::new();
        assert!(repo.is_empty());

        repo.insert(ProductSubject::new("LIP_DEMO", "Demo Lipstick", BRAND, 24.99, 5)).unwrap();
        let err = repo
            .insert(ProductSubject::new("LIP_DEMO", "Other", BRAND, 1.0, 1))
            .unwrap_err();

        assert!(matches!(err, StoreError::DuplicateProduct(id) if id == "LIP_DEMO"));
        assert_eq!(repo.lookup("LIP_DEMO").unwrap().name, "Demo Lipstick");
    }
}
