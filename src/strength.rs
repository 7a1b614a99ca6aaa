// src/strength.rs
//
// Entropy here assumes uniform, independent draws from the pool. It is a
// display heuristic for generated credentials, not a guarantee.
use serde::{Serialize, Deserialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
pub enum StrengthTier {
    NotApplicable,
    VeryWeak,
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl StrengthTier {
    pub fn from_entropy(bits: f64) -> Self {
        if bits < 40.0 {
            StrengthTier::VeryWeak
        } else if bits < 60.0 {
            StrengthTier::Weak
        } else if bits < 80.0 {
            StrengthTier::Medium
        } else if bits < 100.0 {
            StrengthTier::Strong
        } else {
            StrengthTier::VeryStrong
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StrengthTier::NotApplicable => "N/A",
            StrengthTier::VeryWeak => "Very Weak",
            StrengthTier::Weak => "Weak",
            StrengthTier::Medium => "Medium",
            StrengthTier::Strong => "Strong",
            StrengthTier::VeryStrong => "Very Strong",
        }
    }

    /// Colour token consumed by the browser UI.
    pub fn color(&self) -> &'static str {
        match self {
            StrengthTier::NotApplicable => "bg-gray-500",
            StrengthTier::VeryWeak => "bg-red-500",
            StrengthTier::Weak => "bg-orange-500",
            StrengthTier::Medium => "bg-yellow-500",
            StrengthTier::Strong => "bg-blue-500",
            StrengthTier::VeryStrong => "bg-green-500",
        }
    }

    pub fn width_percent(&self) -> u8 {
        match self {
            StrengthTier::NotApplicable => 0,
            StrengthTier::VeryWeak => 20,
            StrengthTier::Weak => 40,
            StrengthTier::Medium => 60,
            StrengthTier::Strong => 80,
            StrengthTier::VeryStrong => 100,
        }
    }
}

impl Default for StrengthTier {
    fn default() -> Self {
        StrengthTier::NotApplicable
    }
}

impl std::fmt::Display for StrengthTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StrengthRating {
    /// Tier label, e.g. "Very Strong"
    pub text: String,
    /// Display colour token
    pub color: String,
    /// Meter width as a CSS percentage, e.g. "80%"
    pub width: String,
    /// Estimated entropy in bits (0 when not applicable)
    pub entropy_bits: f64,
    #[serde(skip)]
    pub tier: StrengthTier,
}

impl StrengthRating {
    fn new(tier: StrengthTier, entropy_bits: f64) -> Self {
        Self {
            text: tier.label().to_string(),
            color: tier.color().to_string(),
            width: format!("{}%", tier.width_percent()),
            entropy_bits,
            tier,
        }
    }
}

pub fn entropy_bits(pool_size: usize, unit_count: usize) -> f64 {
    if pool_size == 0 {
        return 0.0;
    }
    unit_count as f64 * (pool_size as f64).log2()
}

/// Rate a generated credential.
///
/// `unit_count` is the number of independent draws (characters or words) and
/// is taken as given rather than re-derived from `output`, since a separator
/// may also occur inside the drawn units.
pub fn estimate_strength(output: &str, pool_size: usize, unit_count: usize) -> StrengthRating {
    if output.is_empty() || pool_size == 0 {
        return StrengthRating::new(StrengthTier::NotApplicable, 0.0);
    }

    let bits = entropy_bits(pool_size, unit_count);
    StrengthRating::new(StrengthTier::from_entropy(bits), bits)
}
