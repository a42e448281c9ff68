// src/xam/tiles.rs
// Tile asset types stored alongside a profile

/// Tile image kinds a profile or title can ask for
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TileType {
    Achievement = 0x0,
    GameIcon = 0x1,
    GamerTile = 0x2,
    GamerTileSmall = 0x3,
    LocalGamerTile = 0x4,
    LocalGamerTileSmall = 0x5,
    Background = 0x6,
    AwardedGamerTile = 0x7,
    AwardedGamerTileSmall = 0x8,
    GamerTileByImageId = 0x9,
    PersonalGamerTile = 0xA,
    PersonalGamerTileSmall = 0xB,
    GamerTileByKey = 0xC,
    AvatarGamerTile = 0xD,
    AvatarGamerTileSmall = 0xE,
    AvatarFullBody = 0xF,
}

impl TileType {
    pub fn from_raw(raw: u32) -> Option<Self> {
        match raw {
            0x0 => Some(TileType::Achievement),
            0x1 => Some(TileType::GameIcon),
            0x2 => Some(TileType::GamerTile),
            0x3 => Some(TileType::GamerTileSmall),
            0x4 => Some(TileType::LocalGamerTile),
            0x5 => Some(TileType::LocalGamerTileSmall),
            0x6 => Some(TileType::Background),
            0x7 => Some(TileType::AwardedGamerTile),
            0x8 => Some(TileType::AwardedGamerTileSmall),
            0x9 => Some(TileType::GamerTileByImageId),
            0xA => Some(TileType::PersonalGamerTile),
            0xB => Some(TileType::PersonalGamerTileSmall),
            0xC => Some(TileType::GamerTileByKey),
            0xD => Some(TileType::AvatarGamerTile),
            0xE => Some(TileType::AvatarGamerTileSmall),
            0xF => Some(TileType::AvatarFullBody),
            _ => None,
        }
    }
}

/// File name a tile type is stored under in the profile directory, for the
/// types known to be persisted there
// TODO: find filenames of the other tile types stored in profiles
pub fn tile_file_name(tile: TileType) -> Option<&'static str> {
    match tile {
        TileType::PersonalGamerTile => Some("tile_64.png"),
        TileType::PersonalGamerTileSmall => Some("tile_32.png"),
        TileType::AvatarGamerTile => Some("avtr_64.png"),
        TileType::AvatarGamerTileSmall => Some("avtr_32.png"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_mapping_is_closed() {
        assert_eq!(TileType::from_raw(0xF), Some(TileType::AvatarFullBody));
        assert_eq!(TileType::from_raw(0x10), None);
    }

    #[test]
    fn test_known_file_names() {
        assert_eq!(tile_file_name(TileType::PersonalGamerTile), Some("tile_64.png"));
        assert_eq!(tile_file_name(TileType::GameIcon), None);
    }
}

// 🎮🖼️🧩
