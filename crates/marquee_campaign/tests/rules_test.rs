use marquee_campaign::rules::{
    color_palette, mood, normalize_genre, tagline, title, visual_style_keywords,
};

#[test]
fn test_unknown_genre_uses_defaults() {
    assert_eq!(mood("Western"), "dramatic");
    assert_eq!(color_palette("Western"), "balanced warm and cool tones");
    assert_eq!(
        visual_style_keywords("Western"),
        vec!["cinematic", "atmospheric", "high contrast"]
    );
    assert_eq!(tagline("Western", "dramatic"), "A dramatic story.");
}

#[test]
fn test_genre_is_normalized() {
    assert_eq!(normalize_genre("  Sci-Fi "), "sci-fi");
    assert_eq!(mood("  HORROR\n"), "dark and suspenseful");
}

#[test]
fn test_action_rules() {
    let mood = mood("Action");
    assert_eq!(mood, "dynamic and energetic");
    assert_eq!(color_palette("Action"), "high-contrast oranges and blues");
    assert_eq!(
        visual_style_keywords("Adventure"),
        vec!["dynamic composition", "motion blur", "epic scale"]
    );
    assert_eq!(
        tagline("Action", mood),
        "A dynamic and energetic mission you'll never forget."
    );
}

#[test]
fn test_hybrid_labels_take_first_row() {
    // horror is checked before thriller
    assert_eq!(mood("Horror Thriller"), "dark and suspenseful");
    // thriller row precedes sci row
    assert_eq!(mood("sci-fi thriller"), "tense and gripping");
    assert_eq!(tagline("sci-fi thriller", "x"), "A x game of secrets.");
    // mystery only appears in the mood and keyword tables
    assert_eq!(color_palette("Mystery"), "balanced warm and cool tones");
    assert_eq!(
        visual_style_keywords("Mystery"),
        vec!["noir-inspired", "shadowy", "dramatic lighting", "cinematic close-up"]
    );
    // family only affects the palette
    assert_eq!(
        color_palette("Family"),
        "bright and warm yellows, oranges and light blues"
    );
    assert_eq!(mood("Family"), "dramatic");
    // documentary has no tagline row
    assert_eq!(
        tagline("Documentary", "serious and realistic"),
        "A serious and realistic story."
    );
}

#[test]
fn test_title_takes_up_to_six_words() {
    assert_eq!(
        title(
            "A legendary Jedi rises to confront a new Sith empire threatening the galaxy.",
            "Action"
        ),
        "A Legendary Jedi Rises To Confront"
    );
    assert_eq!(title("Three little pigs", "Family"), "Three Little Pigs");
    assert_eq!(title("Heist", "Crime"), "Heist");
    assert_eq!(title("two words", "Crime"), "Two Words");
}

#[test]
fn test_title_strips_quotes_and_newlines() {
    assert_eq!(
        title("\"The\nLast\r\n\"Summer\" of love", "Romance"),
        "The Last Summer Of Love"
    );
}

#[test]
fn test_title_falls_back_when_empty() {
    assert_eq!(title("", "Drama"), "Untitled Drama Film");
    assert_eq!(title("  \"\"\n ", "Horror"), "Untitled Horror Film");
}

#[test]
fn test_title_never_exceeds_limit() {
    let long_words = "Supercalifragilisticexpialidocious ".repeat(6);
    let t = title(&long_words, "Comedy");
    assert!(t.chars().count() <= 60);
    assert!(!t.ends_with(' '));

    let long_genre = "x".repeat(100);
    let t = title("", &long_genre);
    assert_eq!(t.chars().count(), 60);
    assert!(t.starts_with("Untitled xxx"));
}

#[test]
fn test_rules_are_deterministic() {
    for genre in ["Action", "Horror", "Comedy", "Unknown", ""] {
        assert_eq!(mood(genre), mood(genre));
        assert_eq!(title("Same input twice", genre), title("Same input twice", genre));
    }
}
