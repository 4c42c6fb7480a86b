use rand::Rng;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Fixed palette of page background colors. One entry is chosen uniformly
/// at random on every successful refresh taking the flat-color path.
///
pub const BACKGROUND_PALETTE: [ColorSpec; 10] = [
    ColorSpec {
        r: 244,
        g: 244,
        b: 244,
    },
    ColorSpec {
        r: 224,
        g: 247,
        b: 250,
    },
    ColorSpec {
        r: 255,
        g: 224,
        b: 178,
    },
    ColorSpec {
        r: 200,
        g: 230,
        b: 201,
    },
    ColorSpec {
        r: 187,
        g: 222,
        b: 251,
    },
    ColorSpec {
        r: 209,
        g: 196,
        b: 233,
    },
    ColorSpec {
        r: 255,
        g: 204,
        b: 188,
    },
    ColorSpec {
        r: 178,
        g: 223,
        b: 219,
    },
    ColorSpec {
        r: 248,
        g: 187,
        b: 208,
    },
    ColorSpec {
        r: 255,
        g: 236,
        b: 179,
    },
];

/// Pick one background color uniformly at random from the fixed palette.
///
pub fn random_background() -> ColorSpec {
    let index = rand::thread_rng().gen_range(0..BACKGROUND_PALETTE.len());
    BACKGROUND_PALETTE[index]
}

/// Color specification that can be serialized/deserialized.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSpec {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorSpec {
    pub fn to_color(&self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

/// Theme color palette defining the text and chrome colors used in the
/// application. The page background itself comes from `BACKGROUND_PALETTE`
/// or the photo backdrop, never from the theme.
///
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,

    // Text colors
    pub text: ColorSpec,
    pub text_secondary: ColorSpec,
    pub text_muted: ColorSpec,

    // Status and accent colors
    pub accent: ColorSpec,
    pub error: ColorSpec,

    // Chrome colors
    pub surface: ColorSpec,
    pub border_active: ColorSpec,
    pub border_normal: ColorSpec,
    pub footer_label: ColorSpec,
}

impl Theme {
    /// Dark text over the pastel background palette.
    ///
    pub fn light() -> Self {
        Theme {
            name: "light".to_string(),
            text: ColorSpec {
                r: 40,
                g: 40,
                b: 48,
            },
            text_secondary: ColorSpec {
                r: 92,
                g: 95,
                b: 119,
            },
            text_muted: ColorSpec {
                r: 130,
                g: 132,
                b: 148,
            },
            accent: ColorSpec {
                r: 38,
                g: 139,
                b: 210,
            },
            error: ColorSpec {
                r: 210,
                g: 15,
                b: 57,
            },
            surface: ColorSpec {
                r: 250,
                g: 250,
                b: 250,
            },
            border_active: ColorSpec {
                r: 38,
                g: 139,
                b: 210,
            },
            border_normal: ColorSpec {
                r: 92,
                g: 95,
                b: 119,
            },
            footer_label: ColorSpec {
                r: 38,
                g: 139,
                b: 210,
            },
        }
    }

    /// Light-on-dark scheme, applied whenever a photo backdrop is active.
    ///
    pub fn dark() -> Self {
        Theme {
            name: "dark".to_string(),
            text: ColorSpec {
                r: 248,
                g: 248,
                b: 242,
            },
            text_secondary: ColorSpec {
                r: 204,
                g: 204,
                b: 204,
            },
            text_muted: ColorSpec {
                r: 150,
                g: 152,
                b: 164,
            },
            accent: ColorSpec {
                r: 125,
                g: 207,
                b: 255,
            },
            error: ColorSpec {
                r: 247,
                g: 118,
                b: 142,
            },
            surface: ColorSpec {
                r: 26,
                g: 27,
                b: 38,
            },
            border_active: ColorSpec {
                r: 125,
                g: 207,
                b: 255,
            },
            border_normal: ColorSpec {
                r: 117,
                g: 121,
                b: 148,
            },
            footer_label: ColorSpec {
                r: 125,
                g: 207,
                b: 255,
            },
        }
    }

    /// Get a theme by name.
    ///
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "light" => Some(Self::light()),
            "dark" => Some(Self::dark()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_background_always_picks_from_palette() {
        for _ in 0..100 {
            assert!(BACKGROUND_PALETTE.contains(&random_background()));
        }
    }

    #[test]
    fn from_name_resolves_known_themes() {
        assert_eq!(Theme::from_name("light").unwrap().name, "light");
        assert_eq!(Theme::from_name("dark").unwrap().name, "dark");
        assert!(Theme::from_name("solarized").is_none());
    }

    #[test]
    fn color_spec_converts_to_rgb() {
        let spec = ColorSpec {
            r: 244,
            g: 244,
            b: 244,
        };
        assert_eq!(spec.to_color(), Color::Rgb(244, 244, 244));
    }
}
