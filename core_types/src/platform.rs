use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

use crate::CoreTypeError;

/// Hardware platforms that can be named on a game case, cartridge label or disc.
#[derive(
    Debug, Clone, PartialEq, Copy, EnumIter, Display, Eq, Ord, PartialOrd, Hash, Serialize, Deserialize,
)]
pub enum Platform {
    #[strum(serialize = "Master System")]
    MasterSystem,
    #[strum(serialize = "Mega Drive")]
    MegaDrive,
    #[strum(serialize = "Game Gear")]
    GameGear,
    #[strum(serialize = "Sega CD")]
    SegaCd,
    Saturn,
    Dreamcast,
    #[strum(serialize = "NES")]
    Nes,
    #[strum(serialize = "SNES")]
    Snes,
    #[strum(serialize = "Nintendo 64")]
    Nintendo64,
    #[strum(serialize = "Game Boy")]
    GameBoy,
    #[strum(serialize = "Game Boy Advance")]
    GameBoyAdvance,
    GameCube,
    Wii,
    #[strum(serialize = "Nintendo DS")]
    NintendoDs,
    #[strum(serialize = "Nintendo Switch")]
    NintendoSwitch,
    PlayStation,
    #[strum(serialize = "PlayStation 2")]
    PlayStation2,
    #[strum(serialize = "PlayStation 3")]
    PlayStation3,
    #[strum(serialize = "PlayStation 4")]
    PlayStation4,
    #[strum(serialize = "PSP")]
    Psp,
    Xbox,
    #[strum(serialize = "Xbox 360")]
    Xbox360,
}

impl Platform {
    /// Lower-case names this platform is printed under on packaging.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Platform::MasterSystem => &["sega master system", "master system", "mastersystem"],
            Platform::MegaDrive => &["mega drive", "megadrive", "sega genesis", "genesis"],
            Platform::GameGear => &["game gear", "gamegear"],
            Platform::SegaCd => &["sega cd", "mega cd", "mega-cd"],
            Platform::Saturn => &["sega saturn"],
            Platform::Dreamcast => &["dreamcast"],
            Platform::Nes => &["nintendo entertainment system", "famicom"],
            Platform::Snes => &["super nintendo", "super famicom", "snes"],
            Platform::Nintendo64 => &["nintendo 64", "n64"],
            Platform::GameBoy => &["game boy", "gameboy"],
            Platform::GameBoyAdvance => &["game boy advance", "gameboy advance", "gba"],
            Platform::GameCube => &["gamecube", "game cube"],
            Platform::Wii => &["nintendo wii"],
            Platform::NintendoDs => &["nintendo ds"],
            Platform::NintendoSwitch => &["nintendo switch"],
            Platform::PlayStation => &["playstation", "psone", "psx", "ps1"],
            Platform::PlayStation2 => &["playstation 2", "playstation2", "ps2"],
            Platform::PlayStation3 => &["playstation 3", "playstation3", "ps3"],
            Platform::PlayStation4 => &["playstation 4", "playstation4", "ps4"],
            Platform::Psp => &["playstation portable", "psp"],
            Platform::Xbox => &["xbox"],
            Platform::Xbox360 => &["xbox 360", "xbox360"],
        }
    }
}

impl TryFrom<&str> for Platform {
    type Error = CoreTypeError;

    /// Accepts the display name or any alias, ignoring case.
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        use strum::IntoEnumIterator;

        let needle = value.trim().to_lowercase();
        Platform::iter()
            .find(|platform| {
                platform.to_string().to_lowercase() == needle
                    || platform.aliases().contains(&needle.as_str())
            })
            .ok_or_else(|| CoreTypeError::ConversionError(format!("Unknown platform: {}", value)))
    }
}
