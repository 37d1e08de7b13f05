use fsa_core::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

use crate::product::{CosmeticProduct, ProductCategory};

/// A named bundle of products plus presentation options
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BeautySet {
    pub name: String,
    pub products: Vec<CosmeticProduct>,
    pub gift_wrap: bool,
    pub personal_card: bool,
    pub box_type: Option<String>,
    pub occasion: Option<String>,
    pub difficulty_level: Option<String>,
}

impl BeautySet {
    pub fn total_price(&self) -> f64 {
        self.products.iter().map(|p| p.unit_cost).sum()
    }

    pub fn set_description(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.name);
        let _ = writeln!(
            out,
            "Occasion: {} | Level: {}",
            self.occasion.as_deref().unwrap_or("-"),
            self.difficulty_level.as_deref().unwrap_or("-")
        );
        out.push_str("Products included:\n");
        for product in &self.products {
            let _ = writeln!(out, " • {}", product.description());
        }
        let _ = writeln!(out, "Box: {}", self.box_type.as_deref().unwrap_or("-"));
        if self.gift_wrap {
            out.push_str("Includes gift wrap\n");
        }
        if self.personal_card {
            out.push_str("Includes personal card\n");
        }
        let _ = write!(out, "Total Price: ${:.2}", self.total_price());
        out
    }
}

/// Step-by-step assembly of a beauty set
pub trait BeautySetBuilder {
    fn build_set_name(&mut self);
    fn build_products(&mut self);
    fn build_gift_wrap(&mut self);
    fn build_personal_card(&mut self);
    fn build_box_type(&mut self);
    fn build_occasion(&mut self);
    fn build_difficulty_level(&mut self);

    /// Hand over the assembled set and start a fresh one
    fn take_set(&mut self) -> BeautySet;
}

/// Product picks per set, as (category, variant)
type Lineup = &'static [(ProductCategory, &'static str)];

struct SetTemplate {
    name: &'static str,
    lineup: Lineup,
    box_type: &'static str,
    occasion: &'static str,
    difficulty_level: &'static str,
}

/// Shared mechanics for the stock builders; each kind only differs in its template
struct TemplateBuilder {
    template: SetTemplate,
    set: BeautySet,
}

impl TemplateBuilder {
    fn new(template: SetTemplate) -> Self {
        Self {
            template,
            set: BeautySet::default(),
        }
    }
}

impl BeautySetBuilder for TemplateBuilder {
    fn build_set_name(&mut self) {
        self.set.name = self.template.name.to_string();
    }

    fn build_products(&mut self) {
        tracing::debug!("Building products for {}", self.template.name);
        self.set.products = self
            .template
            .lineup
            .iter()
            .map(|(category, variant)| category.create(variant))
            .collect();
    }

    fn build_gift_wrap(&mut self) {
        self.set.gift_wrap = true;
    }

    fn build_personal_card(&mut self) {
        self.set.personal_card = true;
    }

    fn build_box_type(&mut self) {
        self.set.box_type = Some(self.template.box_type.to_string());
    }

    fn build_occasion(&mut self) {
        self.set.occasion = Some(self.template.occasion.to_string());
    }

    fn build_difficulty_level(&mut self) {
        self.set.difficulty_level = Some(self.template.difficulty_level.to_string());
    }

    fn take_set(&mut self) -> BeautySet {
        std::mem::take(&mut self.set)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BeautySetKind {
    Beginner,
    Professional,
    Gift,
}

impl BeautySetKind {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "beginner" => Some(BeautySetKind::Beginner),
            "professional" => Some(BeautySetKind::Professional),
            "gift" => Some(BeautySetKind::Gift),
            _ => None,
        }
    }

    pub fn builder(&self) -> Box<dyn BeautySetBuilder> {
        use ProductCategory::*;

        let template = match self {
            BeautySetKind::Beginner => SetTemplate {
                name: "FSA Beginner Makeup Kit",
                lineup: &[(Lipstick, "pink"), (Mascara, "regular"), (Blush, "peach")],
                box_type: "Beginner Friendly Box",
                occasion: "Everyday Makeup",
                difficulty_level: "Beginner",
            },
            BeautySetKind::Professional => SetTemplate {
                name: "FSA Professional Makeup Collection",
                lineup: &[
                    (Lipstick, "red"),
                    (Lipstick, "brown"),
                    (Mascara, "waterproof"),
                    (Blush, "red"),
                    (Blush, "pink"),
                ],
                box_type: "Professional Luxury Box",
                occasion: "Special Events & Photography",
                difficulty_level: "Professional",
            },
            BeautySetKind::Gift => SetTemplate {
                name: "FSA Perfect Gift Set",
                lineup: &[(Lipstick, "red"), (Mascara, "regular"), (Blush, "pink")],
                box_type: "Premium Gift Box with Ribbon",
                occasion: "Birthday & Holidays",
                difficulty_level: "All Levels",
            },
        };

        Box::new(TemplateBuilder::new(template))
    }
}

/// Runs a builder through a fixed sequence of steps
#[derive(Default)]
pub struct BeautySetDirector {
    builder: Option<Box<dyn BeautySetBuilder>>,
}

impl BeautySetDirector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_builder(&mut self, builder: Box<dyn BeautySetBuilder>) {
        self.builder = Some(builder);
    }

    fn builder(&mut self) -> CoreResult<&mut Box<dyn BeautySetBuilder>> {
        self.builder
            .as_mut()
            .ok_or_else(|| CoreError::NotConfigured("beauty set builder".to_string()))
    }

    /// Every step
    pub fn construct(&mut self) -> CoreResult<BeautySet> {
        self.construct_custom(true, true)
    }

    /// Name, products and box only
    pub fn construct_quick(&mut self) -> CoreResult<BeautySet> {
        let builder = self.builder()?;
        builder.build_set_name();
        builder.build_products();
        builder.build_box_type();
        Ok(builder.take_set())
    }

    /// All steps, with gift wrap and personal card on request
    pub fn construct_custom(&mut self, gift_wrap: bool, personal_card: bool) -> CoreResult<BeautySet> {
        let builder = self.builder()?;
        builder.build_set_name();
        builder.build_products();
        if gift_wrap {
            builder.build_gift_wrap();
        }
        if personal_card {
            builder.build_personal_card();
        }
        builder.build_box_type();
        builder.build_occasion();
        builder.build_difficulty_level();
        Ok(builder.take_set())
    }
}

/// Build a complete set of the given kind
pub fn create_beauty_set(kind: BeautySetKind) -> CoreResult<BeautySet> {
    let mut director = BeautySetDirector::new();
    director.set_builder(kind.builder());
    director.construct()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_director_without_builder_is_not_configured() {
        let mut director = BeautySetDirector::new();

        assert!(matches!(director.construct(), Err(CoreError::NotConfigured(_))));
        assert!(matches!(director.construct_quick(), Err(CoreError::NotConfigured(_))));
    }

    #[test]
    fn test_beginner_set() {
        let set = create_beauty_set(BeautySetKind::Beginner).unwrap();

        assert_eq!(set.name, "FSA Beginner Makeup Kit");
        assert_eq!(set.products.len(), 3);
        assert!(set.gift_wrap && set.personal_card);
        assert!((set.total_price() - (24.99 + 19.99 + 22.99)).abs() < 1e-9);
        assert!(set.set_description().ends_with("Total Price: $67.97"));
    }

    #[test]
    fn test_professional_set_has_five_products() {
        let set = create_beauty_set(BeautySetKind::Professional).unwrap();

        assert_eq!(set.products.len(), 5);
        assert_eq!(set.difficulty_level.as_deref(), Some("Professional"));
    }

    #[test]
    fn test_quick_set_skips_extras() {
        let mut director = BeautySetDirector::new();
        director.set_builder(BeautySetKind::Beginner.builder());

        let set = director.construct_quick().unwrap();

        assert_eq!(set.box_type.as_deref(), Some("Beginner Friendly Box"));
        assert!(!set.gift_wrap);
        assert!(set.occasion.is_none());
        assert!(!set.set_description().contains("Includes gift wrap"));
    }

    #[test]
    fn test_custom_set_and_builder_reuse() {
        let mut director = BeautySetDirector::new();
        director.set_builder(BeautySetKind::Gift.builder());

        let first = director.construct_custom(true, false).unwrap();
        assert!(first.gift_wrap);
        assert!(!first.personal_card);

        // Builder starts over after handing out a set
        let second = director.construct_custom(false, true).unwrap();
        assert!(!second.gift_wrap);
        assert!(second.personal_card);
        assert_eq!(second.products.len(), 3);
    }

    #[test]
    fn test_kind_parse() {
        assert_eq!(BeautySetKind::parse("GIFT"), Some(BeautySetKind::Gift));
        assert_eq!(BeautySetKind::parse("deluxe"), None);
    }
}
