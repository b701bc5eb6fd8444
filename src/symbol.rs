//! # Chord Symbol Grammar
//!
//! Decomposes a roman-numeral chord symbol into the parts the engine resolves.
//!
//! ## Surface Forms
//! - **Primary**: a single symbol, e.g. `I7`, `♭VI7`, `ii-7`, `iv°7`
//! - **Compound**: two symbols in one bar separated by a space, e.g. `ii- V7`
//! - **Slash**: an upper symbol over a roman-numeral bass, e.g. `v-/I`
//!
//! None of these functions fail. Symbols that mean nothing to the voicing
//! table pass through untouched and are handled by the lookup fallback.

/// The symbol that drives voicing and bass lookup for a bar.
///
/// A slash chord keeps everything before the first `/`. Otherwise a compound
/// bar keeps everything before the first space. Only one cut is made, so a
/// compound bar over a slash bass (`ii- V7/IV`) keeps both halves and falls
/// through to the lookup fallback.
///
/// # Example
/// ```
/// use blues_flow::primary_symbol;
///
/// assert_eq!(primary_symbol("I7"), "I7");
/// assert_eq!(primary_symbol("ii- V7"), "ii-");
/// assert_eq!(primary_symbol("IV7/♭VII"), "IV7");
/// ```
pub fn primary_symbol(chord_symbol: &str) -> &str {
    if let Some((upper, _)) = chord_symbol.split_once('/') {
        upper
    } else if let Some((first, _)) = chord_symbol.split_once(' ') {
        first
    } else {
        chord_symbol
    }
}

/// The second chord of a compound bar, if there is one.
///
/// ```
/// use blues_flow::symbol::second_symbol;
///
/// assert_eq!(second_symbol("♭VI7 V7"), Some("V7"));
/// assert_eq!(second_symbol("I7"), None);
/// ```
pub fn second_symbol(chord_symbol: &str) -> Option<&str> {
    let (_, rest) = chord_symbol.split_once(' ')?;
    let second = primary_symbol(rest);
    if second.is_empty() {
        None
    } else {
        Some(second)
    }
}

/// The roman-numeral bass of a slash chord: the text after the first `/`,
/// up to any further `/`.
pub fn slash_bass(chord_symbol: &str) -> Option<&str> {
    let (_, rest) = chord_symbol.split_once('/')?;
    Some(match rest.split_once('/') {
        Some((bass, _)) => bass,
        None => rest,
    })
}

/// Rewrite ASCII accidentals in front of a roman numeral to the spelling the
/// tables use: `bVI7` becomes `♭VI7` and `♯IV7` becomes `#IV7`.
///
/// Returns `None` when the symbol is already in table spelling.
pub fn respell(symbol: &str) -> Option<String> {
    let mut chars = symbol.chars();
    let replacement = match chars.next()? {
        'b' => '♭',
        '♯' => '#',
        _ => return None,
    };
    let rest = chars.as_str();
    if !rest.starts_with(is_roman_numeral) {
        return None;
    }
    let mut respelled = String::with_capacity(symbol.len() + 2);
    respelled.push(replacement);
    respelled.push_str(rest);
    Some(respelled)
}

fn is_roman_numeral(c: char) -> bool {
    matches!(c, 'I' | 'V' | 'i' | 'v')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_symbol_plain() {
        assert_eq!(primary_symbol("I7"), "I7");
        assert_eq!(primary_symbol("♭VI7"), "♭VI7");
        assert_eq!(primary_symbol("iv°7"), "iv°7");
        assert_eq!(primary_symbol(""), "");
    }

    #[test]
    fn test_primary_symbol_compound() {
        assert_eq!(primary_symbol("v- I7"), "v-");
        assert_eq!(primary_symbol("♭VI7 V7"), "♭VI7");
        assert_eq!(primary_symbol("VIImaj ♭VIImaj"), "VIImaj");
    }

    #[test]
    fn test_primary_symbol_slash() {
        assert_eq!(primary_symbol("v-/I"), "v-");
        assert_eq!(primary_symbol("i-/IV"), "i-");
        assert_eq!(primary_symbol("I7/Imaj"), "I7");
    }

    #[test]
    fn test_slash_wins_over_compound() {
        assert_eq!(primary_symbol("ii- V7/IV"), "ii- V7");
        assert_eq!(primary_symbol("I7 /V"), "I7 ");
        // mixed forms are not idempotent: a second pass makes the space cut
        assert_eq!(primary_symbol(primary_symbol("ii- V7/IV")), "ii-");
    }

    #[test]
    fn test_primary_symbol_is_idempotent() {
        let inputs = ["I7", "ii- V7", "v-/I", "IV7/♭VII", "a b c", "/", " ", "x/y/z", ""];
        for input in inputs {
            let once = primary_symbol(input);
            assert_eq!(primary_symbol(once), once, "input {:?}", input);
        }
    }

    #[test]
    fn test_second_symbol() {
        assert_eq!(second_symbol("iii- VI7"), Some("VI7"));
        assert_eq!(second_symbol("#i- ♭V7"), Some("♭V7"));
        assert_eq!(second_symbol("v-/I"), None);
        assert_eq!(second_symbol("I7 "), None);
        assert_eq!(second_symbol("ii- V7/IV"), Some("V7"));
    }

    #[test]
    fn test_slash_bass() {
        assert_eq!(slash_bass("v-/I"), Some("I"));
        assert_eq!(slash_bass("IV7/♭VII"), Some("♭VII"));
        assert_eq!(slash_bass("a/b/c"), Some("b"));
        assert_eq!(slash_bass("I7"), None);
        assert_eq!(slash_bass("I7/"), Some(""));
    }

    #[test]
    fn test_respell() {
        assert_eq!(respell("bVI7").as_deref(), Some("♭VI7"));
        assert_eq!(respell("bvii-").as_deref(), Some("♭vii-"));
        assert_eq!(respell("♯IV7").as_deref(), Some("#IV7"));
        assert_eq!(respell("♭VI7"), None);
        assert_eq!(respell("I7"), None);
        assert_eq!(respell("b"), None);
        assert_eq!(respell("bx"), None);
    }
}
