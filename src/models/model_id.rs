use std::fmt;
use std::str::FromStr;

/// Recommendation models the page knows how to label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelId {
    LProd,
    BProd,
    FProd,
    TProd,
}

impl ModelId {
    /// Dropdown order.
    pub const ALL: [ModelId; 4] = [ModelId::LProd, ModelId::BProd, ModelId::FProd, ModelId::TProd];

    pub fn as_str(&self) -> &'static str {
        match self {
            ModelId::LProd => "L_prod",
            ModelId::BProd => "B_prod",
            ModelId::FProd => "F_prod",
            ModelId::TProd => "T_prod",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ModelId::LProd => "You May Like",
            ModelId::BProd => "Similar Items",
            ModelId::FProd => "Frequently Bought Together",
            ModelId::TProd => "Top Sellers",
        }
    }

    /// Label shown in the model dropdown, e.g. `B_prod (Similar Items)`.
    pub fn option_label(&self) -> String {
        format!("{} ({})", self.as_str(), self.display_name())
    }
}

impl FromStr for ModelId {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModelId::ALL.into_iter().find(|m| m.as_str() == s).ok_or(())
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Human-readable name for a raw model identifier; unknown ids are shown as-is.
pub fn display_name(raw: &str) -> String {
    match raw.parse::<ModelId>() {
        Ok(model) => model.display_name().to_string(),
        Err(()) => raw.to_string(),
    }
}

/// Dropdown label for a raw model identifier; unknown ids are shown as-is.
pub fn option_label(raw: &str) -> String {
    match raw.parse::<ModelId>() {
        Ok(model) => model.option_label(),
        Err(()) => raw.to_string(),
    }
}
