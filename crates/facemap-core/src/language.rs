//! Language tags and the sample text used to estimate character widths

use std::fmt;

/// Text used when nothing better is known about a language
pub const DEFAULT_SAMPLE: &str = "The quick brown fox jumps over the lazy dog.";

/// Pangrams (or near enough) per language, most specific tag first.
static SAMPLES: &[(&str, &str)] = &[
    ("ar", "نص حكيم له سر قاطع وذو شأن عظيم مكتوب على ثوب أخضر ومغلف بجلد أزرق."),
    ("cs", "Příliš žluťoučký kůň úpěl ďábelské ódy."),
    ("da", "Quizdeltagerne spiste jordbær med fløde, mens cirkusklovnen Walther spillede på xylofon."),
    ("de", "Falsches Üben von Xylophonmusik quält jeden größeren Zwerg."),
    ("el", "Θέλει αρετή και τόλμη η ελευθερία. (Ανδρέας Κάλβος)"),
    ("en", DEFAULT_SAMPLE),
    ("es", "Jovencillo emponzoñado de whisky: ¡qué figurota exhibe!"),
    ("fi", "Viekas kettu punaturkki laiskan koiran takaa kurkki."),
    ("fr", "Voix ambiguë d'un cœur qui, au zéphyr, préfère les jattes de kiwis."),
    ("he", "דג סקרן שט בים מאוכזב ולפתע מצא חברה"),
    ("hu", "Egy hűtlen vejét fülöncsípő, dühös mexikói úr Wesselényinél mázol Quitóban."),
    ("it", "Ma la volpe, col suo balzo, ha raggiunto il quieto Fido."),
    ("ja", "いろはにほへと ちりぬるを 色は匂へど 散りぬるを"),
    ("ko", "다람쥐 헌 쳇바퀴에 타고파"),
    ("nl", "Pa's wijze lynx bezag vroom het fikse aquaduct."),
    ("pl", "Pchnąć w tę łódź jeża lub ośm skrzyń fig."),
    ("pt", "Vejam a bruxa da raposa Salta-Pocinhas e o cão feliz que dorme regalado."),
    ("ru", "В чащах юга жил бы цитрус? Да, но фальшивый экземпляр!"),
    ("sv", "Flygande bäckasiner söka strax hwila på mjuka tuvor."),
    ("tr", "Pijamalı hasta yağız şoföre çabucak güvendi."),
    ("uk", "Чуєш їх, доцю, га? Кумедна ж ти, прощайся без ґольфів!"),
    ("zh-tw", "我能吞下玻璃而不傷身體。"),
    ("zh", "我能吞下玻璃而不伤身体。"),
];

/// A normalized language tag such as `en` or `zh-tw`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Language(String);

impl Language {
    /// Normalizes case and separators: `"zh_TW"` becomes `"zh-tw"`.
    pub fn new(tag: &str) -> Self {
        let normalized = tag
            .trim()
            .chars()
            .map(|c| if c == '_' { '-' } else { c.to_ascii_lowercase() })
            .collect();
        Self(normalized)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Representative text for this language.
    ///
    /// Tags are matched by prefix on subtag boundaries, so `de-at` uses
    /// the `de` sample. Unknown languages get [`DEFAULT_SAMPLE`].
    pub fn sample_string(&self) -> &'static str {
        SAMPLES
            .iter()
            .find(|(tag, _)| self.matches(tag))
            .map(|(_, sample)| *sample)
            .unwrap_or(DEFAULT_SAMPLE)
    }

    /// True if `range` is this tag or a prefix of it ending at a subtag boundary.
    pub fn matches(&self, range: &str) -> bool {
        match self.0.strip_prefix(range) {
            Some(rest) => rest.is_empty() || rest.starts_with('-'),
            None => false,
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Self::new("en")
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Language {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}
