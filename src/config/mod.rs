use serde::{Deserialize, Serialize};

use crate::domain::project::DEFAULT_IMAGE_REF;

/// Presentation-facing defaults handed to the ledger at startup. The core
/// never interprets these beyond seeding new projects; user-facing
/// formatting stays with the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub locale: String,
    pub currency: String,
    pub default_image_ref: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "en-US".into(),
            currency: "USD".into(),
            default_image_ref: DEFAULT_IMAGE_REF.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_every_field() {
        let config = Config::default();
        assert_eq!(config.currency, "USD");
        assert_eq!(config.default_image_ref, DEFAULT_IMAGE_REF);
    }
}
