//! Deterministic, human readable palette names.
//!
//! The word lists, salts and suffix rules below are part of the output
//! contract: changing any of them renames every palette.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::classify::{classify, Tag, Tags};

const ADJECTIVE_SALT: u64 = 17;
const NOUN_SALT: u64 = 91;
const PASTEL_EXTRA_SALT: u64 = 29;
const CONTRAST_EXTRA_SALT: u64 = 53;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Theme {
    Pastel,
    Red,
    Blue,
    Green,
    Dark,
    Light,
    Neutral,
    Warm,
    Cool,
}

/// First matching tag picks the word bank; [`Theme::Cool`] otherwise.
const THEME_PRIORITY: [(Tag, Theme); 8] = [
    (Tag::Pastels, Theme::Pastel),
    (Tag::Reds, Theme::Red),
    (Tag::Blues, Theme::Blue),
    (Tag::Greens, Theme::Green),
    (Tag::Dark, Theme::Dark),
    (Tag::Light, Theme::Light),
    (Tag::Neutrals, Theme::Neutral),
    (Tag::Warm, Theme::Warm),
];

struct WordBank {
    adjectives: &'static [&'static str],
    nouns: &'static [&'static str],
}

static WORD_BANKS: Lazy<HashMap<Theme, WordBank>> = Lazy::new(|| {
    let mut banks = HashMap::new();

    banks.insert(
        Theme::Pastel,
        WordBank {
            adjectives: &["Soft", "Powder", "Blush", "Dreamy", "Airy", "Gentle", "Milky", "Cotton"],
            nouns: &["Macaron", "Meringue", "Petal", "Sorbet", "Cloud", "Ribbon", "Blossom"],
        },
    );
    banks.insert(
        Theme::Red,
        WordBank {
            adjectives: &["Crimson", "Scarlet", "Molten", "Ruby", "Fiery", "Cardinal", "Brick"],
            nouns: &["Flame", "Ember", "Lantern", "Poppy", "Cinder", "Rose", "Hearth"],
        },
    );
    banks.insert(
        Theme::Blue,
        WordBank {
            adjectives: &["Azure", "Cobalt", "Tidal", "Glacial", "Sapphire", "Marine", "Cerulean"],
            nouns: &["Lagoon", "Harbor", "Current", "Fjord", "Horizon", "Tide", "Reef"],
        },
    );
    banks.insert(
        Theme::Green,
        WordBank {
            adjectives: &["Verdant", "Mossy", "Fern", "Jade", "Leafy", "Sage", "Evergreen"],
            nouns: &["Grove", "Meadow", "Canopy", "Thicket", "Orchard", "Glade"],
        },
    );
    banks.insert(
        Theme::Dark,
        WordBank {
            adjectives: &["Midnight", "Shadow", "Obsidian", "Nocturnal", "Inky", "Smoky", "Moonless"],
            nouns: &["Vault", "Abyss", "Eclipse", "Raven", "Cavern", "Nightfall"],
        },
    );
    banks.insert(
        Theme::Light,
        WordBank {
            adjectives: &["Luminous", "Pale", "Morning", "Ivory", "Bright", "Sunlit", "Frosted"],
            nouns: &["Dawn", "Linen", "Daylight", "Feather", "Mist", "Glow"],
        },
    );
    banks.insert(
        Theme::Neutral,
        WordBank {
            adjectives: &["Stone", "Ashen", "Muted", "Slate", "Quiet", "Sandy", "Concrete"],
            nouns: &["Pebble", "Canvas", "Driftwood", "Gravel", "Flint", "Plaster"],
        },
    );
    banks.insert(
        Theme::Warm,
        WordBank {
            adjectives: &["Amber", "Golden", "Sunset", "Spiced", "Copper", "Honeyed", "Terracotta"],
            nouns: &["Desert", "Harvest", "Canyon", "Saffron", "Autumn", "Bonfire"],
        },
    );
    banks.insert(
        Theme::Cool,
        WordBank {
            adjectives: &["Arctic", "Minty", "Frosty", "Crisp", "Lunar", "Silver", "Breezy"],
            nouns: &["Tundra", "Aurora", "Glacier", "Breeze", "Drift", "Lake"],
        },
    );

    banks
});

const PASTEL_EXTRAS: &[&str] = &["Whisper", "Haze", "Dream", "Pastel"];
const CONTRAST_EXTRAS: &[&str] = &["Edge", "Pulse", "Strike", "Contrast"];

/// DJB2 over the UTF-16 units of the lowercased colors, concatenated.
pub fn seed<S: AsRef<str>>(colors: &[S]) -> u32 {
    let mut hash: u32 = 5381;

    for color in colors {
        for unit in color.as_ref().trim().to_lowercase().encode_utf16() {
            hash = (hash << 5).wrapping_add(hash).wrapping_add(u32::from(unit));
        }
    }

    hash
}

fn pick(words: &'static [&'static str], seed: u32, salt: u64) -> &'static str {
    words[((u64::from(seed) + salt) % words.len() as u64) as usize]
}

fn theme_for(tags: &Tags) -> Theme {
    THEME_PRIORITY
        .iter()
        .find(|(tag, _)| tags.contains(tag))
        .map(|(_, theme)| *theme)
        .unwrap_or(Theme::Cool)
}

/// Names a palette. Order sensitive, since the order feeds the seed.
pub fn name<S: AsRef<str>>(colors: &[S]) -> String {
    name_with_tags(colors, &classify(colors))
}

/// Like [`name`], reusing tags the caller already computed.
pub fn name_with_tags<S: AsRef<str>>(colors: &[S], tags: &Tags) -> String {
    let seed = seed(colors);
    let theme = theme_for(tags);
    let bank = &WORD_BANKS[&theme];

    let mut words = vec![
        pick(bank.adjectives, seed, ADJECTIVE_SALT),
        pick(bank.nouns, seed, NOUN_SALT),
    ];

    if tags.contains(&Tag::Pastels) && seed % 3 == 0 {
        words.push(pick(PASTEL_EXTRAS, seed, PASTEL_EXTRA_SALT));
    }
    if tags.contains(&Tag::HighContrast) && seed % 5 == 0 {
        words.push(pick(CONTRAST_EXTRAS, seed, CONTRAST_EXTRA_SALT));
    }

    debug!("Named palette with seed {} and theme {:?}", seed, theme);
    words.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const HAPPY_DAY: [&str; 5] = ["#073B4C", "#118AB2", "#06D6A0", "#FFD166", "#EF476F"];

    #[test]
    fn seed_is_djb2_over_lowercase_hex() {
        assert_eq!(seed::<&str>(&[]), 5381);
        // 5381 * 33 + '#' (35)
        assert_eq!(seed(&["#"]), 177_608);
        assert_eq!(seed(&["#ABC"]), seed(&["#abc"]));
        assert_eq!(seed(&["#abc", "#def"]), seed(&["#abc#def"]));
    }

    #[test]
    fn names_are_deterministic() {
        assert_eq!(name(&HAPPY_DAY), name(&HAPPY_DAY));
    }

    #[test]
    fn order_changes_the_seed() {
        let mut reversed = HAPPY_DAY;
        reversed.reverse();

        assert_ne!(seed(&HAPPY_DAY), seed(&reversed));
    }

    #[test]
    fn names_have_two_to_four_words() {
        let palettes: [&[&str]; 5] = [
            &HAPPY_DAY,
            &["#fde2e4", "#fad2e1", "#e2ece9", "#bee1e6", "#f0efeb"],
            &["#000000", "#ffffff"],
            &["#101010"],
            &[],
        ];

        for palette in palettes {
            let name = name(palette);
            let words = name.split(' ').count();
            assert!((2..=4).contains(&words), "{name:?} has {words} words");
            assert!(name.split(' ').all(|w| !w.is_empty()));
        }
    }

    #[test]
    fn tag_priority_picks_the_word_bank() {
        let mut tags = Tags::new();
        assert_eq!(theme_for(&tags), Theme::Cool);

        tags.insert(Tag::Warm);
        assert_eq!(theme_for(&tags), Theme::Warm);

        tags.insert(Tag::Dark);
        tags.insert(Tag::Blues);
        assert_eq!(theme_for(&tags), Theme::Blue);

        tags.insert(Tag::Pastels);
        assert_eq!(theme_for(&tags), Theme::Pastel);
    }

    #[test]
    fn words_come_from_the_selected_bank() {
        let tags: Tags = [Tag::Greens].into_iter().collect();
        let name = name_with_tags(&HAPPY_DAY, &tags);
        let (adjective, noun) = name.split_once(' ').unwrap();
        let bank = &WORD_BANKS[&Theme::Green];

        assert!(bank.adjectives.contains(&adjective));
        assert!(bank.nouns.contains(&noun));
    }

    #[test]
    fn suffixes_follow_the_seed() {
        let colors = ["#fde2e4", "#fad2e1"];
        let seed = seed(&colors);
        let tags: Tags = [Tag::Pastels, Tag::HighContrast].into_iter().collect();
        let words = name_with_tags(&colors, &tags).split(' ').count();

        let expected = 2 + usize::from(seed % 3 == 0) + usize::from(seed % 5 == 0);
        assert_eq!(words, expected);
    }
}
