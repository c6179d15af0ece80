use mojifix_repair::ConfigError;

/// Solid background fill applied to cells that still hold U+FFFD after
/// decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FillMarker {
    argb: String,
}

impl Default for FillMarker {
    fn default() -> Self {
        Self::purple()
    }
}

impl FillMarker {
    pub const PURPLE_ARGB: &'static str = "FF800080";

    pub fn purple() -> Self {
        Self {
            argb: Self::PURPLE_ARGB.to_string(),
        }
    }

    /// Accepts `RRGGBB` or `AARRGGBB`, optionally prefixed with `#`.
    pub fn parse(color: &str) -> Result<Self, ConfigError> {
        let hex = color.trim().trim_start_matches('#');
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ConfigError::InvalidColor(color.to_string()));
        }
        let argb = match hex.len() {
            6 => format!("FF{}", hex.to_ascii_uppercase()),
            8 => hex.to_ascii_uppercase(),
            _ => return Err(ConfigError::InvalidColor(color.to_string())),
        };
        Ok(Self { argb })
    }

    pub fn argb(&self) -> &str {
        &self.argb
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_gets_opaque_alpha() {
        assert_eq!(FillMarker::parse("800080").unwrap(), FillMarker::purple());
        assert_eq!(FillMarker::parse("#ff0000").unwrap().argb(), "FFFF0000");
        assert_eq!(FillMarker::parse("80FFFF00").unwrap().argb(), "80FFFF00");
    }

    #[test]
    fn malformed_colors_are_rejected() {
        for bad in ["", "purple", "12345", "#12345G"] {
            assert_eq!(
                FillMarker::parse(bad),
                Err(ConfigError::InvalidColor(bad.to_string()))
            );
        }
    }
}
