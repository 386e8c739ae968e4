use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::normalize_key;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SongMood {
    Happy,
    Sad,
    Energetic,
    Calm,
    Angry,
    Romantic,
    Melancholic,
    Uplifting,
    Dark,
    Chill,
    Party,
    Driving,
    Mellow,
    Intense,
    Dreamy,
    Nostalgic,
    Groovy,
}

// Each row links a mood to the moods listed after it. Links go both ways.
const RELATED: &[(SongMood, &[SongMood])] = {
    use SongMood::*;
    &[
        (Energetic, &[Driving, Party, Groovy]),
        (Mellow, &[Calm, Dreamy, Nostalgic]),
        (Happy, &[Uplifting, Party, Driving]),
        (Sad, &[Melancholic, Dark]),
        (Intense, &[Angry, Driving]),
        (Romantic, &[Mellow, Dreamy, Nostalgic, Uplifting]),
        (Chill, &[Calm, Mellow, Dreamy]),
        (Uplifting, &[Happy, Party, Groovy]),
        (Dark, &[Sad, Intense, Melancholic]),
        (Party, &[Energetic, Uplifting, Groovy]),
        (Driving, &[Energetic, Intense, Groovy]),
        (Groovy, &[Party, Energetic, Driving]),
        (Melancholic, &[Sad, Dark, Nostalgic]),
        (Dreamy, &[Mellow, Romantic, Chill]),
        (Nostalgic, &[Mellow, Dreamy, Melancholic]),
        (Calm, &[Chill, Mellow, Dreamy]),
        (Angry, &[Intense, Driving, Dark]),
    ]
};

impl SongMood {
    pub const ALL: [SongMood; 17] = [
        SongMood::Happy,
        SongMood::Sad,
        SongMood::Energetic,
        SongMood::Calm,
        SongMood::Angry,
        SongMood::Romantic,
        SongMood::Melancholic,
        SongMood::Uplifting,
        SongMood::Dark,
        SongMood::Chill,
        SongMood::Party,
        SongMood::Driving,
        SongMood::Mellow,
        SongMood::Intense,
        SongMood::Dreamy,
        SongMood::Nostalgic,
        SongMood::Groovy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SongMood::Happy => "HAPPY",
            SongMood::Sad => "SAD",
            SongMood::Energetic => "ENERGETIC",
            SongMood::Calm => "CALM",
            SongMood::Angry => "ANGRY",
            SongMood::Romantic => "ROMANTIC",
            SongMood::Melancholic => "MELANCHOLIC",
            SongMood::Uplifting => "UPLIFTING",
            SongMood::Dark => "DARK",
            SongMood::Chill => "CHILL",
            SongMood::Party => "PARTY",
            SongMood::Driving => "DRIVING",
            SongMood::Mellow => "MELLOW",
            SongMood::Intense => "INTENSE",
            SongMood::Dreamy => "DREAMY",
            SongMood::Nostalgic => "NOSTALGIC",
            SongMood::Groovy => "GROOVY",
        }
    }

    /// Moods that sit close to this one, in declaration order.
    pub fn related(&self) -> Vec<SongMood> {
        SongMood::ALL
            .into_iter()
            .filter(|other| other != self && self.is_linked_to(*other))
            .collect()
    }

    /// True for the same mood or a related one.
    pub fn is_compatible_with(&self, other: SongMood) -> bool {
        *self == other || self.is_linked_to(other)
    }

    fn is_linked_to(&self, other: SongMood) -> bool {
        RELATED.iter().any(|(key, others)| {
            (*key == *self && others.contains(&other)) || (*key == other && others.contains(self))
        })
    }
}

impl fmt::Display for SongMood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SongMood {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize_key(s);
        SongMood::ALL
            .into_iter()
            .find(|m| m.as_str() == key)
            .ok_or(())
    }
}
