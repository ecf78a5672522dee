//! Genres the API knows about.
//!
//! Validation is advisory only: the client passes whatever genre string it
//! is given straight through, and callers use [`Genre::from_name`] when they
//! want to warn about a typo.

use std::fmt;

macro_rules! genres {
    ($($variant:ident => $name:literal),+ $(,)?) => {
        /// A named musical genre as spelled by the API.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Genre {
            $($variant),+
        }

        impl Genre {
            /// Every genre, in the API's listing order.
            pub const ALL: &'static [Genre] = &[$(Genre::$variant),+];

            /// Exact API spelling.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Genre::$variant => $name),+
                }
            }
        }
    };
}

genres! {
    Electronic => "Electronic",
    Rock => "Rock",
    Metal => "Metal",
    Alternative => "Alternative",
    HipHopRap => "Hip-Hop/Rap",
    Experimental => "Experimental",
    Punk => "Punk",
    Folk => "Folk",
    Pop => "Pop",
    Ambient => "Ambient",
    Soundtrack => "Soundtrack",
    World => "World",
    Jazz => "Jazz",
    Acoustic => "Acoustic",
    Funk => "Funk",
    RnbSoul => "R&B/Soul",
    Devotional => "Devotional",
    Classical => "Classical",
    Reggae => "Reggae",
    Podcasts => "Podcasts",
    Country => "Country",
    SpokenWord => "Spoken Word",
    Comedy => "Comedy",
    Blues => "Blues",
    Kids => "Kids",
    Audiobooks => "Audiobooks",
    Latin => "Latin",
    Techno => "Techno",
    Trap => "Trap",
    House => "House",
    TechHouse => "Tech House",
    DeepHouse => "Deep House",
    Disco => "Disco",
    Electro => "Electro",
    Jungle => "Jungle",
    ProgressiveHouse => "Progressive House",
    Hardstyle => "Hardstyle",
    GlitchHop => "Glitch Hop",
    Trance => "Trance",
    FutureBass => "Future Bass",
    FutureHouse => "Future House",
    TropicalHouse => "Tropical House",
    Downtempo => "Downtempo",
    DrumAndBass => "Drum & Bass",
    Dubstep => "Dubstep",
    JerseyClub => "Jersey Club",
    Vaporwave => "Vaporwave",
    Moombahton => "Moombahton",
}

impl Genre {
    /// Case-insensitive lookup by API spelling.
    pub fn from_name(name: &str) -> Option<Genre> {
        Self::ALL
            .iter()
            .copied()
            .find(|g| g.as_str().eq_ignore_ascii_case(name.trim()))
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_genres_listed() {
        assert_eq!(Genre::ALL.len(), 48);
        assert_eq!(Genre::ALL[0], Genre::Electronic);
        assert_eq!(Genre::ALL[47], Genre::Moombahton);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Genre::from_name("Hip-Hop/Rap"), Some(Genre::HipHopRap));
        assert_eq!(Genre::from_name("drum & bass"), Some(Genre::DrumAndBass));
        assert_eq!(Genre::from_name(" Jazz "), Some(Genre::Jazz));
        assert_eq!(Genre::from_name("Polka"), None);
    }

    #[test]
    fn test_names_round_trip() {
        for genre in Genre::ALL {
            assert_eq!(Genre::from_name(genre.as_str()), Some(*genre));
        }
    }
}
