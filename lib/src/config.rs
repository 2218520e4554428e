use crate::error::{Error, Result};

/// Input file rendered by the command-line tool
pub const INPUT_PATH: &str = "snail.bmp";

/// Source pixels per output character, horizontally
pub const DEFAULT_SCALE_X: u32 = 2;

/// Source pixels per output character, vertically
pub const DEFAULT_SCALE_Y: u32 = 4;

/// Glyph ramp ordered darkest-appearing to lightest
pub const DEFAULT_RAMP: &str = "MNHQ$OC?7>!:-;. ";

/// Configuration for ASCII rendering
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Block sampling
    pub scale_x: u32,            // default 2
    pub scale_y: u32,            // default 4, glyphs are taller than wide

    /// Glyphs
    pub ramp: &'static str,      // default "MNHQ$OC?7>!:-;. "
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            scale_x: DEFAULT_SCALE_X,
            scale_y: DEFAULT_SCALE_Y,
            ramp: DEFAULT_RAMP,
        }
    }
}

impl RenderConfig {
    /// Validates the configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.scale_x == 0 {
            return Err(Error::InvalidConfig("scale_x must be at least 1".into()));
        }
        if self.scale_y == 0 {
            return Err(Error::InvalidConfig("scale_y must be at least 1".into()));
        }
        if self.ramp.is_empty() {
            return Err(Error::InvalidConfig("ramp must not be empty".into()));
        }
        if !self.ramp.is_ascii() {
            return Err(Error::InvalidConfig(format!(
                "ramp must be ASCII, got {:?}",
                self.ramp
            )));
        }
        Ok(())
    }
}
