//! Generators for plausible looking sample data.
//!
//! Every generator is generic over [`Rng`] so tests can pass a seeded RNG and get
//! reproducible output.

use rand::Rng;

const SURNAMES: &[&str] = &[
    "Abbott", "Adeyemi", "Bergstrom", "Calloway", "Castellanos", "Dietrich", "Dubois",
    "Eriksen", "Fitzgerald", "Fontaine", "Gallagher", "Grimaldi", "Hartmann", "Haverford",
    "Ishikawa", "Jablonski", "Kovacs", "Kowalczyk", "Lindgren", "Lockhart", "Mancini",
    "Marchetti", "Nakamura", "Novak", "Okafor", "Oyelaran", "Pemberton", "Price", "Quigley",
    "Rasmussen", "Rourke", "Schaefer", "Sorensen", "Tanaka", "Thornbury", "Underwood",
    "Valdivia", "Vance", "Whitfield", "Yamamoto", "Zielinski",
];

const COMPANY_SUFFIXES: &[&str] = &["Inc", "LLC", "Group", "and Sons", "Ltd", "Holdings"];

const HIPSTER_WORDS: &[&str] = &[
    "artisan", "asymmetrical", "austin", "banjo", "beard", "bespoke", "biodiesel", "bitters",
    "brooklyn", "brunch", "butcher", "chambray", "chillwave", "cliche", "cold-pressed",
    "cornhole", "cred", "distillery", "dreamcatcher", "ethical", "etsy", "fanny pack",
    "fingerstache", "fixie", "flannel", "flexitarian", "forage", "gastropub", "gentrify",
    "gluten-free", "hashtag", "heirloom", "helvetica", "hoodie", "kale chips", "keffiyeh",
    "kombucha", "letterpress", "locavore", "lomo", "marfa", "meditation", "messenger bag",
    "mixtape", "mlkshk", "mumblecore", "normcore", "organic", "paleo", "pickled", "polaroid",
    "pop-up", "portland", "post-ironic", "pour-over", "quinoa", "raw denim", "readymade",
    "retro", "sartorial", "scenester", "seitan", "selvage", "semiotics", "single-origin coffee",
    "skateboard", "small batch", "sriracha", "sustainable", "synth", "tattooed", "thundercats",
    "tofu", "tote bag", "trust fund", "typewriter", "umami", "vegan", "vinyl", "wayfarers",
    "whatever", "williamsburg",
];

fn pick<'a, R: Rng>(rng: &mut R, words: &[&'a str]) -> &'a str {
    words[rng.random_range(0..words.len())]
}

/// Generates a company name such as `Hartmann Inc`, `Kovacs-Lindgren`, or
/// `Price, Oyelaran and Vance`.
pub fn company_name<R: Rng>(rng: &mut R) -> String {
    match rng.random_range(0..3) {
        0 => format!("{} {}", pick(rng, SURNAMES), pick(rng, COMPANY_SUFFIXES)),
        1 => format!("{}-{}", pick(rng, SURNAMES), pick(rng, SURNAMES)),
        _ => format!(
            "{}, {} and {}",
            pick(rng, SURNAMES),
            pick(rng, SURNAMES),
            pick(rng, SURNAMES)
        ),
    }
}

/// Generates a capitalized, period terminated sentence of 4 to 10 hipster words.
pub fn hipster_sentence<R: Rng>(rng: &mut R) -> String {
    let word_count = rng.random_range(4..=10);
    let words: Vec<&str> = (0..word_count).map(|_| pick(rng, HIPSTER_WORDS)).collect();
    let sentence = words.join(" ");

    let mut chars = sentence.chars();
    match chars.next() {
        Some(first) => format!("{}{}.", first.to_uppercase(), chars.as_str()),
        None => String::new(),
    }
}

/// Generates a paragraph of 3 to 5 hipster sentences.
pub fn hipster_paragraph<R: Rng>(rng: &mut R) -> String {
    let sentence_count = rng.random_range(3..=5);

    (0..sentence_count)
        .map(|_| hipster_sentence(rng))
        .collect::<Vec<_>>()
        .join(" ")
}
