use serde::{Deserialize, Serialize};

use crate::product::CosmeticProduct;

pub const PERSONALIZATION_FEE: f64 = 3.99;
pub const CONSULTATION_RATE_PER_MINUTE: f64 = 0.5;

pub const DEFAULT_WRAP_STYLE: &str = "Standard";
pub const DEFAULT_DELIVERY_DAYS: u32 = 1;
pub const DEFAULT_FONT: &str = "Elegant";
pub const DEFAULT_SAMPLE_KIT: &str = "Beauty Sampler";
pub const DEFAULT_CONSULTATION_MINUTES: u32 = 30;

/// Gift wrap surcharge by style, case-insensitive. Unknown styles cost the standard rate.
pub fn gift_wrap_rate(style: &str) -> f64 {
    match style.to_lowercase().as_str() {
        "premium" => 12.99,
        "luxury" => 19.99,
        _ => 5.99,
    }
}

/// Delivery surcharge: next-day 15.99, two-day 9.99, anything else is same-day 19.99.
pub fn delivery_rate(days: u32) -> f64 {
    match days {
        1 => 15.99,
        2 => 9.99,
        _ => 19.99,
    }
}

/// Sample kit surcharge by kit name, case-insensitive. Unknown kits cost 4.99.
pub fn sample_kit_rate(kit_type: &str) -> f64 {
    match kit_type.to_lowercase().as_str() {
        "premium sampler" => 8.99,
        "luxury trial kit" => 12.99,
        _ => 4.99,
    }
}

pub fn consultation_rate(minutes: u32) -> f64 {
    minutes as f64 * CONSULTATION_RATE_PER_MINUTE
}

/// One link in a service chain. Every chain bottoms out in exactly one `Base`.
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceNode {
    Base(CosmeticProduct),
    GiftWrap {
        inner: Box<ServiceNode>,
        style: String,
    },
    ExpressDelivery {
        inner: Box<ServiceNode>,
        days: u32,
    },
    Personalization {
        inner: Box<ServiceNode>,
        message: String,
        font: String,
    },
    SampleKit {
        inner: Box<ServiceNode>,
        kit_type: String,
    },
    Consultation {
        inner: Box<ServiceNode>,
        minutes: u32,
    },
}

impl ServiceNode {
    pub fn base(item: CosmeticProduct) -> Self {
        ServiceNode::Base(item)
    }

    pub fn gift_wrap(self, style: impl Into<String>) -> Self {
        ServiceNode::GiftWrap {
            inner: Box::new(self),
            style: style.into(),
        }
    }

    pub fn express_delivery(self, days: u32) -> Self {
        ServiceNode::ExpressDelivery {
            inner: Box::new(self),
            days,
        }
    }

    pub fn personalization(self, message: impl Into<String>, font: impl Into<String>) -> Self {
        ServiceNode::Personalization {
            inner: Box::new(self),
            message: message.into(),
            font: font.into(),
        }
    }

    pub fn sample_kit(self, kit_type: impl Into<String>) -> Self {
        ServiceNode::SampleKit {
            inner: Box::new(self),
            kit_type: kit_type.into(),
        }
    }

    pub fn consultation(self, minutes: u32) -> Self {
        ServiceNode::Consultation {
            inner: Box::new(self),
            minutes,
        }
    }

    /// Wrap `self` in each option, first option innermost
    pub fn with_services(self, options: &[ServiceOption]) -> Self {
        options.iter().fold(self, |node, option| option.wrap(node))
    }

    pub fn inner(&self) -> Option<&ServiceNode> {
        match self {
            ServiceNode::Base(_) => None,
            ServiceNode::GiftWrap { inner, .. }
            | ServiceNode::ExpressDelivery { inner, .. }
            | ServiceNode::Personalization { inner, .. }
            | ServiceNode::SampleKit { inner, .. }
            | ServiceNode::Consultation { inner, .. } => Some(inner.as_ref()),
        }
    }

    /// The product at the bottom of the chain
    pub fn base_item(&self) -> &CosmeticProduct {
        match self {
            ServiceNode::Base(item) => item,
            ServiceNode::GiftWrap { inner, .. }
            | ServiceNode::ExpressDelivery { inner, .. }
            | ServiceNode::Personalization { inner, .. }
            | ServiceNode::SampleKit { inner, .. }
            | ServiceNode::Consultation { inner, .. } => inner.base_item(),
        }
    }

    /// Number of decorators above the base
    pub fn depth(&self) -> usize {
        self.inner().map_or(0, |inner| inner.depth() + 1)
    }

    /// This node's own contribution: unit cost for the base, surcharge otherwise
    pub fn surcharge(&self) -> f64 {
        match self {
            ServiceNode::Base(item) => item.unit_cost,
            ServiceNode::GiftWrap { style, .. } => gift_wrap_rate(style),
            ServiceNode::ExpressDelivery { days, .. } => delivery_rate(*days),
            ServiceNode::Personalization { .. } => PERSONALIZATION_FEE,
            ServiceNode::SampleKit { kit_type, .. } => sample_kit_rate(kit_type),
            ServiceNode::Consultation { minutes, .. } => consultation_rate(*minutes),
        }
    }

    fn label(&self) -> String {
        match self {
            ServiceNode::Base(item) => item.name.clone(),
            ServiceNode::GiftWrap { style, .. } => format!("{} Gift Wrap", style),
            ServiceNode::ExpressDelivery { days, .. } => {
                format!("Express Delivery ({} {})", days, if *days == 1 { "day" } else { "days" })
            }
            ServiceNode::Personalization { .. } => "Personalization".to_string(),
            ServiceNode::SampleKit { kit_type, .. } => kit_type.clone(),
            ServiceNode::Consultation { minutes, .. } => format!("Beauty Consultation ({}min)", minutes),
        }
    }

    fn detail_line(&self) -> String {
        match self {
            ServiceNode::Base(item) => {
                format!("Basic Product: {} - ${:.2}", item.description(), item.unit_cost)
            }
            ServiceNode::Personalization { message, font, .. } => format!(
                "   + Personal Card ({} font, message: \"{}\"): ${:.2}",
                font,
                message,
                self.surcharge()
            ),
            ServiceNode::Consultation { minutes, .. } => format!(
                "   + Beauty Consultation ({} minutes): ${:.2}",
                minutes,
                self.surcharge()
            ),
            _ => format!("   + {}: ${:.2}", self.label(), self.surcharge()),
        }
    }

    /// Inner description followed by this node's label, outermost last
    pub fn description(&self) -> String {
        match self.inner() {
            Some(inner) => format!("{} + {}", inner.description(), self.label()),
            None => self.label(),
        }
    }

    /// Sum of the base unit cost and every surcharge in the chain
    pub fn cost(&self) -> f64 {
        self.surcharge() + self.inner().map_or(0.0, ServiceNode::cost)
    }

    /// One line per node, base first
    pub fn service_details(&self) -> String {
        match self.inner() {
            Some(inner) => format!("{}\n{}", inner.service_details(), self.detail_line()),
            None => self.detail_line(),
        }
    }
}

/// Declarative add-on, e.g. loaded from a package definition
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "service", rename_all = "snake_case")]
pub enum ServiceOption {
    GiftWrap {
        #[serde(default = "default_wrap_style")]
        style: String,
    },
    ExpressDelivery {
        #[serde(default = "default_delivery_days")]
        days: u32,
    },
    Personalization {
        message: String,
        #[serde(default = "default_font")]
        font: String,
    },
    SampleKit {
        #[serde(default = "default_sample_kit")]
        kit_type: String,
    },
    Consultation {
        #[serde(default = "default_consultation_minutes")]
        minutes: u32,
    },
}

fn default_wrap_style() -> String { DEFAULT_WRAP_STYLE.to_string() }
fn default_delivery_days() -> u32 { DEFAULT_DELIVERY_DAYS }
fn default_font() -> String { DEFAULT_FONT.to_string() }
fn default_sample_kit() -> String { DEFAULT_SAMPLE_KIT.to_string() }
fn default_consultation_minutes() -> u32 { DEFAULT_CONSULTATION_MINUTES }

impl ServiceOption {
    pub fn wrap(&self, node: ServiceNode) -> ServiceNode {
        match self {
            ServiceOption::GiftWrap { style } => node.gift_wrap(style.clone()),
            ServiceOption::ExpressDelivery { days } => node.express_delivery(*days),
            ServiceOption::Personalization { message, font } => node.personalization(message.clone(), font.clone()),
            ServiceOption::SampleKit { kit_type } => node.sample_kit(kit_type.clone()),
            ServiceOption::Consultation { minutes } => node.consultation(*minutes),
        }
    }
}
