//! Genre rule tables.
//!
//! Every table is checked top to bottom against the normalized genre label
//! and the first row with a matching substring wins. A hybrid label such as
//! `"sci-fi thriller"` therefore takes whichever of its genres appears first
//! in the table.

use marquee_core::MAX_TITLE_CHARS;

type Rule<T> = (&'static [&'static str], T);

const MOOD_RULES: &[Rule<&str>] = &[
    (&["horror"], "dark and suspenseful"),
    (&["thriller", "mystery", "crime"], "tense and gripping"),
    (&["comedy"], "light-hearted and playful"),
    (&["romance"], "romantic and emotional"),
    (&["action", "adventure"], "dynamic and energetic"),
    (&["sci", "fantasy"], "futuristic and imaginative"),
    (&["documentary"], "serious and realistic"),
];
const DEFAULT_MOOD: &str = "dramatic";

const PALETTE_RULES: &[Rule<&str>] = &[
    (&["horror", "thriller", "crime"], "dark reds, deep blacks and muted blues"),
    (&["comedy", "family"], "bright and warm yellows, oranges and light blues"),
    (&["romance"], "soft pinks, warm reds and gentle purples"),
    (&["action", "adventure"], "high-contrast oranges and blues"),
    (&["sci", "fantasy"], "cool neon blues, purples and cyans"),
    (&["documentary"], "natural, muted earth tones and soft blues"),
];
const DEFAULT_PALETTE: &str = "balanced warm and cool tones";

const KEYWORD_RULES: &[Rule<&[&str]>] = &[
    (&["horror"], &["gritty", "high contrast", "moody lighting", "distressed textures"]),
    (
        &["thriller", "crime", "mystery"],
        &["noir-inspired", "shadowy", "dramatic lighting", "cinematic close-up"],
    ),
    (&["comedy"], &["colorful", "bold typography", "playful composition"]),
    (&["romance"], &["soft focus", "glowing highlights", "gentle gradients"]),
    (&["action", "adventure"], &["dynamic composition", "motion blur", "epic scale"]),
    (&["sci", "fantasy"], &["futuristic", "high contrast", "neon glow", "surreal elements"]),
    (&["documentary"], &["minimalist", "photographic", "clean layout"]),
];
const DEFAULT_KEYWORDS: &[&str] = &["cinematic", "atmospheric", "high contrast"];

const TAGLINE_RULES: &[Rule<&str>] = &[
    (&["horror"], "nightmare"),
    (&["thriller", "crime"], "game of secrets"),
    (&["comedy"], "ride of laughter"),
    (&["romance"], "journey of hearts"),
    (&["action", "adventure"], "mission you'll never forget"),
    (&["sci", "fantasy"], "world beyond imagination"),
];
const DEFAULT_TAGLINE_CORE: &str = "story";

/// Most words of the summary used for a title.
const TITLE_WORDS: usize = 6;

/// Lower-case and trim a genre label.
pub fn normalize_genre(genre: &str) -> String {
    genre.trim().to_lowercase()
}

fn first_match<T: Copy>(rules: &[Rule<T>], genre: &str, default: T) -> T {
    let genre = normalize_genre(genre);
    rules
        .iter()
        .find(|(needles, _)| needles.iter().any(|needle| genre.contains(needle)))
        .map(|(_, output)| *output)
        .unwrap_or(default)
}

/// Mood phrase for a genre.
///
/// ```
/// use marquee_campaign::rules::mood;
///
/// assert_eq!(mood("Horror"), "dark and suspenseful");
/// assert_eq!(mood("Western"), "dramatic");
/// ```
pub fn mood(genre: &str) -> &'static str {
    first_match(MOOD_RULES, genre, DEFAULT_MOOD)
}

/// Color palette description for a genre.
pub fn color_palette(genre: &str) -> &'static str {
    first_match(PALETTE_RULES, genre, DEFAULT_PALETTE)
}

/// Visual style keywords for a genre, in presentation order.
pub fn visual_style_keywords(genre: &str) -> Vec<String> {
    first_match(KEYWORD_RULES, genre, DEFAULT_KEYWORDS)
        .iter()
        .map(|keyword| keyword.to_string())
        .collect()
}

/// Tagline of the form `A {mood} {core}.`
pub fn tagline(genre: &str, mood: &str) -> String {
    let core = first_match(TAGLINE_RULES, genre, DEFAULT_TAGLINE_CORE);
    format!("A {} {}.", mood, core)
}

/// Title built from the opening words of the summary.
///
/// Quotes and line breaks become spaces, at most six words are kept, the
/// result is title-cased and cut to 60 characters. A summary with no words
/// yields `Untitled {genre} Film`.
///
/// ```
/// use marquee_campaign::rules::title;
///
/// assert_eq!(
///     title("a legendary jedi rises to confront a new sith empire", "Action"),
///     "A Legendary Jedi Rises To Confront"
/// );
/// assert_eq!(title("", "Drama"), "Untitled Drama Film");
/// ```
pub fn title(summary: &str, genre: &str) -> String {
    let clean: String = summary
        .chars()
        .map(|c| if matches!(c, '"' | '\n' | '\r') { ' ' } else { c })
        .collect();
    let words: Vec<&str> = clean.split_whitespace().take(TITLE_WORDS).collect();

    let candidate = truncate_chars(&title_case(&words.join(" ")), MAX_TITLE_CHARS)
        .trim()
        .to_string();
    if !candidate.is_empty() {
        return candidate;
    }
    truncate_chars(&format!("Untitled {} Film", genre), MAX_TITLE_CHARS).to_string()
}

/// Title-case every cased letter that follows a non-cased character and
/// lower-case the rest, so `"they're"` becomes `"They'Re"`.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut previous_cased = false;
    for c in text.chars() {
        if previous_cased {
            out.extend(c.to_lowercase());
        } else {
            push_titlecase(c, &mut out);
        }
        previous_cased = is_cased(c);
    }
    out
}

/// Titlecase mapping for letters whose titlecase differs from their
/// uppercase; everything else is upper-cased.
fn push_titlecase(c: char, out: &mut String) {
    match c {
        'ß' => out.push_str("Ss"),
        'ﬀ' => out.push_str("Ff"),
        'ﬁ' => out.push_str("Fi"),
        'ﬂ' => out.push_str("Fl"),
        'ﬃ' => out.push_str("Ffi"),
        'ﬄ' => out.push_str("Ffl"),
        'ﬅ' | 'ﬆ' => out.push_str("St"),
        'Ǆ' | 'ǅ' | 'ǆ' => out.push('ǅ'),
        'Ǉ' | 'ǈ' | 'ǉ' => out.push('ǈ'),
        'Ǌ' | 'ǋ' | 'ǌ' => out.push('ǋ'),
        'Ǳ' | 'ǲ' | 'ǳ' => out.push('ǲ'),
        _ => out.extend(c.to_uppercase()),
    }
}

fn is_cased(c: char) -> bool {
    c.is_lowercase() || c.is_uppercase() || matches!(c, 'ǅ' | 'ǈ' | 'ǋ' | 'ǲ')
}

fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((index, _)) => &text[..index],
        None => text,
    }
}
