use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::normalize_key;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SongGenre {
    Pop,
    Rock,
    Alternative,
    Indie,
    Metal,
    Punk,
    HardRock,
    HeavyMetal,
    HipHop,
    Rap,
    Rnb,
    Soul,
    Funk,
    Blues,
    Jazz,
    Classical,
    Ambient,
    Electronic,
    Dance,
    House,
    Trance,
    Techno,
    Reggae,
    Latin,
    Folk,
    Country,
    World,
    Disco,
}

impl SongGenre {
    pub const ALL: [SongGenre; 28] = [
        SongGenre::Pop,
        SongGenre::Rock,
        SongGenre::Alternative,
        SongGenre::Indie,
        SongGenre::Metal,
        SongGenre::Punk,
        SongGenre::HardRock,
        SongGenre::HeavyMetal,
        SongGenre::HipHop,
        SongGenre::Rap,
        SongGenre::Rnb,
        SongGenre::Soul,
        SongGenre::Funk,
        SongGenre::Blues,
        SongGenre::Jazz,
        SongGenre::Classical,
        SongGenre::Ambient,
        SongGenre::Electronic,
        SongGenre::Dance,
        SongGenre::House,
        SongGenre::Trance,
        SongGenre::Techno,
        SongGenre::Reggae,
        SongGenre::Latin,
        SongGenre::Folk,
        SongGenre::Country,
        SongGenre::World,
        SongGenre::Disco,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SongGenre::Pop => "POP",
            SongGenre::Rock => "ROCK",
            SongGenre::Alternative => "ALTERNATIVE",
            SongGenre::Indie => "INDIE",
            SongGenre::Metal => "METAL",
            SongGenre::Punk => "PUNK",
            SongGenre::HardRock => "HARD_ROCK",
            SongGenre::HeavyMetal => "HEAVY_METAL",
            SongGenre::HipHop => "HIP_HOP",
            SongGenre::Rap => "RAP",
            SongGenre::Rnb => "RNB",
            SongGenre::Soul => "SOUL",
            SongGenre::Funk => "FUNK",
            SongGenre::Blues => "BLUES",
            SongGenre::Jazz => "JAZZ",
            SongGenre::Classical => "CLASSICAL",
            SongGenre::Ambient => "AMBIENT",
            SongGenre::Electronic => "ELECTRONIC",
            SongGenre::Dance => "DANCE",
            SongGenre::House => "HOUSE",
            SongGenre::Trance => "TRANCE",
            SongGenre::Techno => "TECHNO",
            SongGenre::Reggae => "REGGAE",
            SongGenre::Latin => "LATIN",
            SongGenre::Folk => "FOLK",
            SongGenre::Country => "COUNTRY",
            SongGenre::World => "WORLD",
            SongGenre::Disco => "DISCO",
        }
    }
}

impl fmt::Display for SongGenre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SongGenre {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize_key(s);
        SongGenre::ALL
            .into_iter()
            .find(|g| g.as_str() == key)
            .ok_or(())
    }
}

/// Named bundles of related genres that can be requested as one filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GenreGroup {
    PopGroup,
    RockGroup,
    HardRockGroup,
    MetalGroup,
    ElectronicGroup,
    UrbanGroup,
    AcousticGroup,
    LatinWorldGroup,
}

impl GenreGroup {
    pub const ALL: [GenreGroup; 8] = [
        GenreGroup::PopGroup,
        GenreGroup::RockGroup,
        GenreGroup::HardRockGroup,
        GenreGroup::MetalGroup,
        GenreGroup::ElectronicGroup,
        GenreGroup::UrbanGroup,
        GenreGroup::AcousticGroup,
        GenreGroup::LatinWorldGroup,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GenreGroup::PopGroup => "POP_GROUP",
            GenreGroup::RockGroup => "ROCK_GROUP",
            GenreGroup::HardRockGroup => "HARD_ROCK_GROUP",
            GenreGroup::MetalGroup => "METAL_GROUP",
            GenreGroup::ElectronicGroup => "ELECTRONIC_GROUP",
            GenreGroup::UrbanGroup => "URBAN_GROUP",
            GenreGroup::AcousticGroup => "ACOUSTIC_GROUP",
            GenreGroup::LatinWorldGroup => "LATIN_WORLD_GROUP",
        }
    }

    pub fn members(&self) -> &'static [SongGenre] {
        use SongGenre::*;
        match self {
            GenreGroup::PopGroup => &[Pop, Rnb, Alternative, Rock],
            GenreGroup::RockGroup => &[Rock, HardRock, Indie, Alternative, Pop],
            GenreGroup::HardRockGroup => &[HardRock, Metal, HeavyMetal, Punk, Alternative, Rock],
            GenreGroup::MetalGroup => &[Metal, HeavyMetal, Punk, HardRock],
            GenreGroup::ElectronicGroup => &[Electronic, Dance, House, Trance, Techno],
            GenreGroup::UrbanGroup => &[HipHop, Rap, Rnb, Soul, Funk],
            GenreGroup::AcousticGroup => &[Folk, Country, Blues, Jazz],
            GenreGroup::LatinWorldGroup => &[Latin, Reggae, World],
        }
    }
}

impl fmt::Display for GenreGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A genre criterion: either one genre or a whole group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GenreFilter {
    Group(GenreGroup),
    Genre(SongGenre),
}

impl GenreFilter {
    /// Resolve free text, trying group names before single genres.
    pub fn resolve(raw: &str) -> Option<Self> {
        let key = normalize_key(raw);
        if key.is_empty() {
            return None;
        }

        if let Some(group) = GenreGroup::ALL.into_iter().find(|g| g.as_str() == key) {
            return Some(GenreFilter::Group(group));
        }
        key.parse::<SongGenre>().ok().map(GenreFilter::Genre)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GenreFilter::Group(g) => g.as_str(),
            GenreFilter::Genre(g) => g.as_str(),
        }
    }

    pub fn allows(&self, genre: SongGenre) -> bool {
        match self {
            GenreFilter::Group(g) => g.members().contains(&genre),
            GenreFilter::Genre(g) => *g == genre,
        }
    }

    /// Every name `resolve` understands, groups first.
    pub fn known_names() -> impl Iterator<Item = &'static str> {
        GenreGroup::ALL
            .into_iter()
            .map(|g| g.as_str())
            .chain(SongGenre::ALL.into_iter().map(|g| g.as_str()))
    }
}

impl fmt::Display for GenreFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
