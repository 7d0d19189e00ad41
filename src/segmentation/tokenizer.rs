use std::sync::OnceLock;

use regex::Regex;

pub const DEFAULT_MIN_WORD_LENGTH: usize = 3;

/// Any Unicode letter, which covers the Spanish accented letters and `ñ`.
pub fn is_word_char(c: char) -> bool {
    c.is_alphabetic()
}

/// Lower-cases `text`, splits on whitespace, drops every non-letter character
/// and discards candidates shorter than `min_length` characters.
///
/// The returned iterator is lazy and can be restarted by calling again.
pub fn normalize(text: &str, min_length: usize) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace().filter_map(move |chunk| {
        let word: String = chunk.to_lowercase().chars().filter(|c| is_word_char(*c)).collect();
        (word.chars().count() >= min_length).then_some(word)
    })
}

fn tag_regex() -> &'static Regex {
    static TAGS: OnceLock<Regex> = OnceLock::new();
    TAGS.get_or_init(|| Regex::new(r"(?s)<[^>]*>").expect("static regex"))
}

fn entity_regex() -> &'static Regex {
    static ENTITIES: OnceLock<Regex> = OnceLock::new();
    ENTITIES.get_or_init(|| {
        Regex::new(r"&(#[xX][0-9a-fA-F]+|#[0-9]+|[a-zA-Z]+);").expect("static regex")
    })
}

/// Decodes an entity body (the part between `&` and `;`) when it stands for a letter.
fn decode_entity(entity: &str) -> Option<String> {
    let code = if let Some(hex) = entity.strip_prefix("#x").or_else(|| entity.strip_prefix("#X")) {
        u32::from_str_radix(hex, 16).ok()
    } else if let Some(dec) = entity.strip_prefix('#') {
        dec.parse::<u32>().ok()
    } else {
        None
    };
    if entity.starts_with('#') {
        return code.and_then(char::from_u32).filter(|c| c.is_alphabetic()).map(String::from);
    }

    let letter = match entity.to_ascii_lowercase().as_str() {
        "aacute" => 'á',
        "eacute" => 'é',
        "iacute" => 'í',
        "oacute" => 'ó',
        "uacute" => 'ú',
        "uuml" => 'ü',
        "ntilde" => 'ñ',
        _ => return None,
    };
    if entity.starts_with(|c: char| c.is_ascii_uppercase()) {
        Some(letter.to_uppercase().collect())
    } else {
        Some(letter.to_string())
    }
}

/// Removes HTML tags and decodes character entities. Tags and entities that
/// don't stand for a letter are replaced with whitespace.
pub fn strip_markup(text: &str) -> String {
    let without_tags = tag_regex().replace_all(text, " ");
    entity_regex()
        .replace_all(&without_tags, |caps: &regex::Captures| {
            decode_entity(&caps[1]).unwrap_or_else(|| " ".to_string())
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(text: &str) -> Vec<String> {
        normalize(text, DEFAULT_MIN_WORD_LENGTH).collect()
    }

    #[test]
    fn lowercases_and_strips_punctuation() {
        assert_eq!(tokens("¡Hola, Mundo!"), vec!["hola", "mundo"]);
        assert_eq!(tokens("¿Cómo estás?  Señor"), vec!["cómo", "estás", "señor"]);
    }

    #[test]
    fn discards_short_and_empty_candidates() {
        assert_eq!(tokens("el sol y la luna"), vec!["sol", "luna"]);
        assert!(tokens("").is_empty());
        assert!(tokens("123 ... --").is_empty());
    }

    #[test]
    fn digits_inside_words_are_removed() {
        assert_eq!(tokens("casa1 2perro"), vec!["casa", "perro"]);
    }

    #[test]
    fn respects_configured_minimum() {
        let words: Vec<String> = normalize("sol luna estrella", 5).collect();
        assert_eq!(words, vec!["estrella"]);
    }

    #[test]
    fn iteration_is_restartable() {
        let text = "uno dos tres";
        assert_eq!(normalize(text, 3).count(), 3);
        assert_eq!(normalize(text, 3).collect::<Vec<_>>(), vec!["uno", "dos", "tres"]);
    }

    #[test]
    fn strips_tags_and_entities() {
        let cleaned = strip_markup("<div>la&nbsp;<b>canci&oacute;n</b></div>");
        assert_eq!(tokens(&cleaned), vec!["canción"]);
        assert_eq!(tokens(&strip_markup("casa<br/>perro")), vec!["casa", "perro"]);
    }

    #[test]
    fn decodes_numeric_and_capitalized_entities() {
        assert_eq!(tokens(&strip_markup("canci&#243;n")), vec!["canción"]);
        assert_eq!(tokens(&strip_markup("coraz&#xF3;n")), vec!["corazón"]);
        assert_eq!(tokens(&strip_markup("&Aacute;rbol ma&ntilde;ana")), vec!["árbol", "mañana"]);
        assert_eq!(strip_markup("&Ntilde;o&ntilde;o"), "Ñoño");
    }

    #[test]
    fn unknown_and_invalid_entities_become_whitespace() {
        assert_eq!(tokens(&strip_markup("casa&amp;perro")), vec!["casa", "perro"]);
        assert_eq!(tokens(&strip_markup("casa&#xD800;perro")), vec!["casa", "perro"]);
        assert_eq!(tokens(&strip_markup("casa&#38;perro")), vec!["casa", "perro"]);
    }
}
