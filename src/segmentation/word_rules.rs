use super::rule_matcher::{
    Rule,
    TokenMatcher,
};
use crate::core::Category;

const ARTICLES: &[&str] = &["el", "la", "lo", "los", "las", "un", "una", "unos", "unas"];

const DETERMINERS: &[&str] = &[
    "este", "esta", "estos", "estas", "ese", "esa", "esos", "esas", "aquel", "aquella", "aquellos",
    "aquellas", "mi", "mis", "tu", "tus", "su", "sus", "nuestro", "nuestra", "nuestros",
    "nuestras", "vuestro", "vuestra", "vuestros", "vuestras", "cada", "algún", "alguna",
    "algunos", "algunas", "ningún", "ninguna", "otro", "otra", "otros", "otras", "todo", "toda",
    "todos", "todas",
];

const COORDINATING_CONJUNCTIONS: &[&str] = &["y", "e", "o", "u", "ni", "pero", "sino", "mas"];

const SUBORDINATING_CONJUNCTIONS: &[&str] = &[
    "que", "porque", "aunque", "cuando", "como", "si", "mientras", "pues", "donde", "conque",
    "luego",
];

const PRONOUNS: &[&str] = &[
    "yo", "tú", "él", "ella", "ello", "ellos", "ellas", "usted", "ustedes", "nosotros",
    "nosotras", "vosotros", "vosotras", "me", "te", "se", "nos", "os", "le", "les", "mí", "ti",
    "sí", "conmigo", "contigo", "consigo", "esto", "eso", "aquello", "algo", "nada", "alguien",
    "nadie", "quien", "quién", "quienes", "cuál", "cuáles", "qué",
];

const PREPOSITIONS: &[&str] = &[
    "a", "al", "ante", "bajo", "cabe", "con", "contra", "de", "del", "desde", "durante", "en",
    "entre", "hacia", "hasta", "mediante", "para", "por", "según", "sin", "so", "sobre", "tras",
    "versus", "vía",
];

const AUXILIARIES: &[&str] = &[
    "he", "has", "ha", "hemos", "habéis", "han", "había", "habías", "habíamos", "habíais",
    "habían", "hay", "haya", "hayan", "hube", "habrá", "habría",
];

const INFINITIVE_ENDINGS: &[&str] = &["ar", "er", "ir", "arse", "erse", "irse"];

const PARTICIPLE_ENDINGS: &[&str] =
    &["ado", "ada", "ados", "adas", "ido", "ida", "idos", "idas"];

const GERUND_ENDINGS: &[&str] = &["ando", "iendo", "yendo"];

const ADJECTIVE_SUFFIXES: &[&str] = &[
    "oso", "osa", "osos", "osas", "able", "ables", "ible", "ibles", "ivo", "iva", "ivos", "ivas",
    "ico", "ica", "icos", "icas", "al", "ales",
];

const ADVERB_SUFFIXES: &[&str] = &["mente"];

const NOUN_SUFFIXES: &[&str] = &[
    "ción", "ciones", "sión", "siones", "dad", "dades", "tad", "tades", "miento", "mientos",
    "aje", "ajes", "ismo", "ismos", "ista", "istas", "eza", "ezas", "ura", "uras", "encia",
    "encias", "ancia", "ancias", "ería", "erías",
];

const NUMERALS: &[&str] = &[
    "uno", "dos", "tres", "cuatro", "cinco", "seis", "siete", "ocho", "nueve", "diez", "once",
    "doce", "trece", "catorce", "quince", "veinte", "treinta", "cuarenta", "cincuenta",
    "sesenta", "setenta", "ochenta", "noventa", "cien", "ciento", "doscientos", "quinientos",
    "mil", "millón", "millones", "primero", "primera", "segundo", "segunda", "tercero", "tercera",
];

/**
 * Order matters. Several suffixes are ambiguous (`-al`, `-ar`), so verbal
 * endings are tried before adjectival ones, and numerals are the last resort.
 */
pub fn create_default_rules() -> Vec<Rule> {
    vec![
        Rule {
            name: "Article",
            matcher: TokenMatcher::Word(ARTICLES),
            category: Category::Determiner,
        },
        Rule {
            name: "Determiner",
            matcher: TokenMatcher::Word(DETERMINERS),
            category: Category::Determiner,
        },
        Rule {
            name: "Coordinating conjunction",
            matcher: TokenMatcher::Word(COORDINATING_CONJUNCTIONS),
            category: Category::CoordinatingConjunction,
        },
        Rule {
            name: "Subordinating conjunction",
            matcher: TokenMatcher::Word(SUBORDINATING_CONJUNCTIONS),
            category: Category::SubordinatingConjunction,
        },
        Rule {
            name: "Pronoun",
            matcher: TokenMatcher::Word(PRONOUNS),
            category: Category::Pronoun,
        },
        Rule {
            name: "Preposition",
            matcher: TokenMatcher::Word(PREPOSITIONS),
            category: Category::Adposition,
        },
        Rule {
            name: "Auxiliary haber",
            matcher: TokenMatcher::Word(AUXILIARIES),
            category: Category::AuxiliaryVerb,
        },
        Rule {
            name: "Infinitive",
            matcher: TokenMatcher::Suffix { suffixes: INFINITIVE_ENDINGS, min_stem: 1 },
            category: Category::Verb,
        },
        Rule {
            name: "Participle",
            matcher: TokenMatcher::Suffix { suffixes: PARTICIPLE_ENDINGS, min_stem: 2 },
            category: Category::Verb,
        },
        Rule {
            name: "Gerund",
            matcher: TokenMatcher::Suffix { suffixes: GERUND_ENDINGS, min_stem: 2 },
            category: Category::Verb,
        },
        Rule {
            name: "Adjective suffix",
            matcher: TokenMatcher::Suffix { suffixes: ADJECTIVE_SUFFIXES, min_stem: 3 },
            category: Category::Adjective,
        },
        Rule {
            name: "Adverb in -mente",
            matcher: TokenMatcher::Suffix { suffixes: ADVERB_SUFFIXES, min_stem: 2 },
            category: Category::Adverb,
        },
        Rule {
            name: "Noun-forming suffix",
            matcher: TokenMatcher::Suffix { suffixes: NOUN_SUFFIXES, min_stem: 2 },
            category: Category::Noun,
        },
        Rule {
            name: "Numeral",
            matcher: TokenMatcher::Numeral(NUMERALS),
            category: Category::Numeral,
        },
    ]
}
