//! Identifier tokenisation, variant rendering, and style classification.

/// The closed set of recognised casing styles, plus the `Original` sentinel.
///
/// Order matters: this is the fixed priority order used both when claiming
/// overlapping occurrences (§4.3) and when classifying an arbitrary string
/// (§4.1) — in both cases, later entries are "more specific" and win ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Casing {
    Original,
    LowerCase,
    UpperCase,
    CamelCase,
    TitleCase,
    SnakeCase,
    KebabCase,
    UpperSnakeCase,
    UpperKebabCase,
}

/// The 8 canonical renderings, in priority order. `Original` is excluded
/// since it is never a derived rendering — it's always the literal input.
const CANONICAL_ORDER: [Casing; 8] = [
    Casing::LowerCase,
    Casing::UpperCase,
    Casing::CamelCase,
    Casing::TitleCase,
    Casing::SnakeCase,
    Casing::KebabCase,
    Casing::UpperSnakeCase,
    Casing::UpperKebabCase,
];

/// The full priority order including `Original`, used when claiming
/// occurrences during scanning (§4.3).
pub const PRIORITY_ORDER: [Casing; 9] = [
    Casing::Original,
    Casing::LowerCase,
    Casing::UpperCase,
    Casing::CamelCase,
    Casing::TitleCase,
    Casing::SnakeCase,
    Casing::KebabCase,
    Casing::UpperSnakeCase,
    Casing::UpperKebabCase,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variant {
    pub casing: Casing,
    pub value: String,
}

/// The nine renderings of one base identifier, always one entry per
/// `Casing` tag, ordered per `PRIORITY_ORDER`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantSet {
    variants: Vec<Variant>,
}

impl VariantSet {
    /// Looks up the rendering for `casing`. Falls back to the `Original`
    /// entry if `casing` is somehow absent (it never should be, since a
    /// `VariantSet` always carries all nine tags).
    pub fn lookup(&self, casing: Casing) -> &Variant {
        self.variants
            .iter()
            .find(|v| v.casing == casing)
            .or_else(|| self.variants.iter().find(|v| v.casing == Casing::Original))
            .expect("VariantSet always contains an Original entry")
    }

    pub fn iter(&self) -> impl Iterator<Item = &Variant> {
        self.variants.iter()
    }
}

/// A single word token extracted from an identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Token {
    text: String,
}

/// Splits `s` into lowercase-oriented word tokens. Delimiters (`_`, `-`,
/// ` `) are consumed; word boundaries are also cut at lower/digit-to-upper
/// transitions and at the tail of an uppercase run that's followed by a
/// lowercase letter (so `HTMLParser` splits as `HTML|Parser`, i.e. the
/// tokens `html`, `parser`), and at letter/digit transitions.
fn tokenize(s: &str) -> Vec<Token> {
    let chars: Vec<char> = s.chars().collect();
    let mut tokens = Vec::new();
    let mut current = String::new();

    for i in 0..chars.len() {
        let c = chars[i];

        if c == '_' || c == '-' || c == ' ' {
            if !current.is_empty() {
                tokens.push(Token {
                    text: std::mem::take(&mut current),
                });
            }
            continue;
        }

        if c.is_alphanumeric() {
            if i > 0 && !current.is_empty() {
                let prev = chars[i - 1];
                let should_split = (prev.is_lowercase() && c.is_uppercase())
                    || (prev.is_alphabetic() && c.is_ascii_digit())
                    || (prev.is_ascii_digit() && c.is_alphabetic())
                    || (prev.is_uppercase()
                        && c.is_uppercase()
                        && i + 1 < chars.len()
                        && chars[i + 1].is_lowercase());

                if should_split {
                    tokens.push(Token {
                        text: std::mem::take(&mut current),
                    });
                }
            }
            current.push(c);
        }
    }

    if !current.is_empty() {
        tokens.push(Token { text: current });
    }

    tokens
}

/// Title-cases a single token: uppercase first character, lowercase the
/// rest. Empty tokens render as empty strings.
fn title_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => {
            first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
        },
    }
}

fn render_camel(tokens: &[Token]) -> String {
    let mut result = String::new();
    for (i, token) in tokens.iter().enumerate() {
        if i == 0 {
            result.push_str(&token.text.to_lowercase());
        } else {
            result.push_str(&title_word(&token.text));
        }
    }
    result
}

fn render_title(tokens: &[Token]) -> String {
    tokens.iter().map(|t| title_word(&t.text)).collect()
}

fn render_snake(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| t.text.to_lowercase())
        .collect::<Vec<_>>()
        .join("_")
}

fn render_kebab(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| t.text.to_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}

/// Generates the nine-entry `VariantSet` for `s` (§4.1).
///
/// Invariant: `generate_variants(s).lookup(Casing::Original).value == s`.
pub fn generate_variants(s: &str) -> VariantSet {
    let tokens = tokenize(s);

    let snake = render_snake(&tokens);
    let kebab = render_kebab(&tokens);

    let variants = vec![
        Variant {
            casing: Casing::Original,
            value: s.to_string(),
        },
        Variant {
            casing: Casing::LowerCase,
            value: s.to_lowercase(),
        },
        Variant {
            casing: Casing::UpperCase,
            value: s.to_uppercase(),
        },
        Variant {
            casing: Casing::CamelCase,
            value: render_camel(&tokens),
        },
        Variant {
            casing: Casing::TitleCase,
            value: render_title(&tokens),
        },
        Variant {
            casing: Casing::SnakeCase,
            value: snake.clone(),
        },
        Variant {
            casing: Casing::KebabCase,
            value: kebab.clone(),
        },
        Variant {
            casing: Casing::UpperSnakeCase,
            value: snake.to_uppercase(),
        },
        Variant {
            casing: Casing::UpperKebabCase,
            value: kebab.to_uppercase(),
        },
    ];

    VariantSet { variants }
}

/// Classifies `s` into its most specific recognised style (§4.1).
///
/// Candidates are re-derived from `s`'s own `VariantSet` and tested in
/// `CANONICAL_ORDER`; the last match wins. `SnakeCase`/`UpperSnakeCase`
/// require `_` to be present in `s`, and `KebabCase`/`UpperKebabCase`
/// require `-`, guarding against a bare single word trivially matching a
/// separator-joined rendering of itself. Returns `Casing::Original` when
/// nothing matches.
///
/// For single-token inputs, `CamelCase` and `LowerCase` (and similarly
/// `SnakeCase`/`KebabCase`) render identically, so the fixed priority
/// order — not an inherent property of the string — decides the winner.
/// This only fully determines classification for multi-token inputs (see
/// `spec.md` §8 Testable Property 2 and `DESIGN.md`).
pub fn determine_casing(s: &str) -> Casing {
    if s.is_empty() {
        return Casing::Original;
    }

    let variants = generate_variants(s);
    let mut found = None;

    for &tag in &CANONICAL_ORDER {
        if matches!(tag, Casing::SnakeCase | Casing::UpperSnakeCase) && !s.contains('_') {
            continue;
        }
        if matches!(tag, Casing::KebabCase | Casing::UpperKebabCase) && !s.contains('-') {
            continue;
        }
        if variants.lookup(tag).value == s {
            found = Some(tag);
        }
    }

    found.unwrap_or(Casing::Original)
}
