use palette::Srgb;
use palette::rgb::FromHexError;
use thiserror::Error;

const DEFAULT_COLORS: [(u8, u8, u8); 12] = [
    (0xFF, 0x6B, 0x6B),
    (0x4E, 0xCD, 0xC4),
    (0x45, 0xB7, 0xD1),
    (0xFF, 0xA0, 0x7A),
    (0x98, 0xD8, 0xC8),
    (0xF7, 0xDC, 0x6F),
    (0xBB, 0x8F, 0xCE),
    (0x85, 0xC1, 0xE2),
    (0xFF, 0x8A, 0x80),
    (0x82, 0xB1, 0xFF),
    (0xB9, 0xF6, 0xCA),
    (0xFF, 0xD1, 0x80),
];

#[derive(Debug, Error)]
pub enum PaletteError {
    #[error("Palette needs at least one color")]
    Empty,
    #[error("Invalid color '{value}': {source}")]
    InvalidHex {
        value: String,
        #[source]
        source: FromHexError,
    },
}

/// Segment fill colors, cycled when there are more segments than colors.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette(Vec<Srgb<u8>>);

impl Palette {
    pub fn new(colors: Vec<Srgb<u8>>) -> Result<Self, PaletteError> {
        if colors.is_empty() {
            return Err(PaletteError::Empty);
        }
        Ok(Self(colors))
    }

    /// Parses `#RRGGBB` (or `RRGGBB`) strings.
    pub fn from_hex<I, S>(values: I) -> Result<Self, PaletteError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let colors = values
            .into_iter()
            .map(|v| {
                let v = v.as_ref().trim();
                v.parse::<Srgb<u8>>()
                    .map_err(|source| PaletteError::InvalidHex {
                        value: v.to_string(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(colors)
    }

    pub fn color_for(&self, index: usize) -> Srgb<u8> {
        self.0[index % self.0.len()]
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self(
            DEFAULT_COLORS
                .iter()
                .map(|&(r, g, b)| Srgb::new(r, g, b))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette_cycles() {
        let palette = Palette::default();
        assert_eq!(palette.len(), 12);
        assert_eq!(palette.color_for(0), Srgb::new(0xFF, 0x6B, 0x6B));
        assert_eq!(palette.color_for(12), palette.color_for(0));
        assert_eq!(palette.color_for(13), Srgb::new(0x4E, 0xCD, 0xC4));
    }

    #[test]
    fn test_from_hex() {
        let palette = Palette::from_hex(["#000000", " ffffff "]).unwrap();
        assert_eq!(palette.color_for(0), Srgb::new(0, 0, 0));
        assert_eq!(palette.color_for(1), Srgb::new(255, 255, 255));
    }

    #[test]
    fn test_from_hex_rejects_garbage() {
        assert!(matches!(
            Palette::from_hex(["#12345G"]),
            Err(PaletteError::InvalidHex { .. })
        ));
        assert!(matches!(
            Palette::from_hex(Vec::<String>::new()),
            Err(PaletteError::Empty)
        ));
    }
}
