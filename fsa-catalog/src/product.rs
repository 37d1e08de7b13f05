use serde::{Deserialize, Serialize};
use std::fmt;

pub const BRAND: &str = "FSA_Beauty";

/// Product lines the store can manufacture
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductCategory {
    Lipstick,
    Mascara,
    Blush,
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ProductCategory::Lipstick => "Lipstick",
            ProductCategory::Mascara => "Mascara",
            ProductCategory::Blush => "Blush",
        };
        f.write_str(name)
    }
}

/// Immutable priced item produced by a factory
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CosmeticProduct {
    pub name: String,
    pub brand: String,
    pub category: ProductCategory,
    pub color: String,
    /// Finish for lipstick, formula for mascara, texture for blush
    pub kind: String,
    pub unit_cost: f64,
}

impl CosmeticProduct {
    pub fn description(&self) -> String {
        match self.category {
            ProductCategory::Lipstick => format!(
                "{} {} - Color: {}, Finish: {}",
                self.brand, self.name, self.color, self.kind
            ),
            ProductCategory::Mascara => format!("{} {} - Type: {}", self.brand, self.name, self.kind),
            ProductCategory::Blush => format!("{} {} - Color: {}", self.brand, self.name, self.color),
        }
    }

    /// Catalog listing name with the variant in parentheses, e.g. "Soft Blush (Peach)"
    pub fn listing_name(&self) -> String {
        let variant = match self.category {
            ProductCategory::Mascara => &self.kind,
            _ => &self.color,
        };
        format!("{} ({})", self.name, variant)
    }

    /// Multi-line info card
    pub fn info(&self) -> String {
        format!(
            "Name: {}\nBrand: {}\nPrice: ${:.2}\nDescription: {}",
            self.name,
            self.brand,
            self.unit_cost,
            self.description()
        )
    }
}

impl ProductCategory {
    /// Factory method. Unknown variants fall back to the line's default
    /// (Red lipstick, Regular mascara, Peach blush).
    pub fn create(&self, variant: &str) -> CosmeticProduct {
        tracing::debug!("Creating {} with variant: {}", self, variant);

        let variant = variant.to_lowercase();
        match self {
            ProductCategory::Lipstick => {
                let color = match variant.as_str() {
                    "brown" => "Brown",
                    "pink" => "Pink",
                    _ => "Red",
                };
                lipstick(color)
            }
            ProductCategory::Mascara => {
                let kind = match variant.as_str() {
                    "waterproof" => "Waterproof",
                    _ => "Regular",
                };
                mascara(kind)
            }
            ProductCategory::Blush => {
                let color = match variant.as_str() {
                    "red" => "Red",
                    "pink" => "Pink",
                    _ => "Peach",
                };
                blush(color)
            }
        }
    }

    pub fn factory_type(&self) -> &'static str {
        match self {
            ProductCategory::Lipstick => "FSA Lipstick Factory",
            ProductCategory::Mascara => "FSA Mascara Factory",
            ProductCategory::Blush => "FSA Blush Factory",
        }
    }
}

fn lipstick(color: &str) -> CosmeticProduct {
    CosmeticProduct {
        name: "Luxury Lipstick".to_string(),
        brand: BRAND.to_string(),
        category: ProductCategory::Lipstick,
        color: color.to_string(),
        kind: "Matte".to_string(),
        unit_cost: 24.99,
    }
}

fn mascara(kind: &str) -> CosmeticProduct {
    CosmeticProduct {
        name: "Volume Mascara".to_string(),
        brand: BRAND.to_string(),
        category: ProductCategory::Mascara,
        color: "Black".to_string(),
        kind: kind.to_string(),
        unit_cost: 19.99,
    }
}

fn blush(color: &str) -> CosmeticProduct {
    CosmeticProduct {
        name: "Soft Blush".to_string(),
        brand: BRAND.to_string(),
        category: ProductCategory::Blush,
        color: color.to_string(),
        kind: "Powder".to_string(),
        unit_cost: 22.99,
    }
}

/// Map a catalog listing name (e.g. "Luxury Lipstick (Pink)") back to a factory product.
/// Anything unrecognised becomes a red lipstick.
pub fn resolve_from_name(name: &str) -> CosmeticProduct {
    let name = name.to_lowercase();
    let pick = |candidates: &[&'static str], fallback: &'static str| {
        candidates
            .iter()
            .copied()
            .find(|c| name.contains(*c))
            .unwrap_or(fallback)
    };

    if name.contains("lipstick") {
        ProductCategory::Lipstick.create(pick(&["red", "brown", "pink"], "red"))
    } else if name.contains("mascara") {
        ProductCategory::Mascara.create(pick(&["waterproof"], "regular"))
    } else if name.contains("blush") {
        ProductCategory::Blush.create(pick(&["red", "peach", "pink"], "pink"))
    } else {
        ProductCategory::Lipstick.create("red")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factories_create_requested_variant() {
        let lipstick = ProductCategory::Lipstick.create("Brown");
        assert_eq!(lipstick.color, "Brown");
        assert_eq!(lipstick.unit_cost, 24.99);
        assert_eq!(lipstick.description(), "FSA_Beauty Luxury Lipstick - Color: Brown, Finish: Matte");

        let mascara = ProductCategory::Mascara.create("waterproof");
        assert_eq!(mascara.kind, "Waterproof");
        assert_eq!(mascara.color, "Black");

        let blush = ProductCategory::Blush.create("pink");
        assert_eq!(blush.description(), "FSA_Beauty Soft Blush - Color: Pink");
    }

    #[test]
    fn test_unknown_variant_uses_default() {
        assert_eq!(ProductCategory::Lipstick.create("violet").color, "Red");
        assert_eq!(ProductCategory::Mascara.create("curling").kind, "Regular");
        assert_eq!(ProductCategory::Blush.create("").color, "Peach");
    }

    #[test]
    fn test_resolve_from_name() {
        assert_eq!(resolve_from_name("Luxury Lipstick (Pink)").color, "Pink");
        assert_eq!(resolve_from_name("Volume Mascara").kind, "Regular");
        assert_eq!(resolve_from_name("Waterproof Volume Mascara").kind, "Waterproof");
        assert_eq!(resolve_from_name("Soft Blush").color, "Pink");

        for variant in ["red", "peach", "pink"] {
            let blush = ProductCategory::Blush.create(variant);
            assert_eq!(resolve_from_name(&blush.listing_name()), blush);
        }
        assert_eq!(ProductCategory::Mascara.create("waterproof").listing_name(), "Volume Mascara (Waterproof)");

        let fallback = resolve_from_name("Nail Polish");
        assert_eq!(fallback.category, ProductCategory::Lipstick);
        assert_eq!(fallback.color, "Red");
    }
}
