//! Planet color palettes.

use cosmos_core::Rgba;

/// Two-stop gradient pair assigned to a planet for its lifetime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanetPalette {
    /// Highlight color at the lit side of the disc.
    pub primary: Rgba,
    pub secondary: Rgba,
}

impl PlanetPalette {
    const fn new(primary: Rgba, secondary: Rgba) -> Self {
        Self { primary, secondary }
    }
}

pub const PLANET_PALETTES: [PlanetPalette; 5] = [
    // Pink
    PlanetPalette::new(Rgba::rgb(0xff, 0x9a, 0x9e), Rgba::rgb(0xfe, 0xcf, 0xef)),
    // Purple
    PlanetPalette::new(Rgba::rgb(0xa1, 0x8c, 0xd1), Rgba::rgb(0xfb, 0xc2, 0xeb)),
    // Teal
    PlanetPalette::new(Rgba::rgb(0x84, 0xfa, 0xb0), Rgba::rgb(0x8f, 0xd3, 0xf4)),
    // Blue-purple
    PlanetPalette::new(Rgba::rgb(0xe0, 0xc3, 0xfc), Rgba::rgb(0x8e, 0xc5, 0xfc)),
    // Red-purple
    PlanetPalette::new(Rgba::rgb(0xf0, 0x93, 0xfb), Rgba::rgb(0xf5, 0x57, 0x6c)),
];

/// Dark tone every planet fades into at its rim.
pub const PLANET_SHADOW: Rgba = Rgba::new(10, 10, 30, 0.8);
