//! Light and dark palettes.
//!
//! A [`Theme`] is a plain value derived from the `dark_mode` flag and handed to
//! whatever renders the interface.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const fn from_hex(hex: u32) -> Self {
        Rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub dark: bool,
    /// Widget label color.
    pub text: Rgb,
    pub input_background: Rgb,
    pub selection_background: Rgb,
    pub foreground: Rgb,
    pub background: Rgb,
}

pub const LIGHT: Theme = Theme {
    dark: false,
    text: Rgb::from_hex(0x200305),
    input_background: Rgb::from_hex(0xffffff),
    selection_background: Rgb::from_hex(0x000080),
    foreground: Rgb(0, 0, 0),
    background: Rgb(192, 192, 192),
};

pub const DARK: Theme = Theme {
    dark: true,
    text: Rgb::from_hex(0x9f9f9f),
    input_background: Rgb::from_hex(0x202020),
    selection_background: Rgb::from_hex(0xafafaf),
    foreground: Rgb(230, 230, 230),
    background: Rgb(40, 40, 40),
};

impl Theme {
    pub fn for_mode(dark_mode: bool) -> Self {
        if dark_mode {
            DARK
        } else {
            LIGHT
        }
    }

    pub fn name(&self) -> &'static str {
        if self.dark {
            "dark"
        } else {
            "light"
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        LIGHT
    }
}
