//! Bundled bilingual quote corpus.

#[cfg(test)]
#[path = "quotes_test.rs"]
mod quotes_test;

use crate::storage::Language;

/// One quote in one language.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Quote {
    pub text: &'static str,
    pub author: &'static str,
}

impl Quote {
    pub const EMPTY: Quote = Quote { text: "", author: "" };
}

/// The same quote in every supported language.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuoteEntry {
    pub english: Quote,
    pub spanish: Quote,
}

impl QuoteEntry {
    pub fn get(&self, language: Language) -> Quote {
        match language {
            Language::English => self.english,
            Language::Spanish => self.spanish,
        }
    }
}

const fn entry(en: (&'static str, &'static str), es: (&'static str, &'static str)) -> QuoteEntry {
    QuoteEntry {
        english: Quote { text: en.0, author: en.1 },
        spanish: Quote { text: es.0, author: es.1 },
    }
}

pub static QUOTES: &[QuoteEntry] = &[
    entry(
        ("The only way to do great work is to love what you do.", "Steve Jobs"),
        ("La única manera de hacer un gran trabajo es amar lo que haces.", "Steve Jobs"),
    ),
    entry(
        ("It always seems impossible until it's done.", "Nelson Mandela"),
        ("Siempre parece imposible hasta que se hace.", "Nelson Mandela"),
    ),
    entry(
        ("Believe you can and you're halfway there.", "Theodore Roosevelt"),
        ("Cree que puedes y ya estarás a medio camino.", "Theodore Roosevelt"),
    ),
    entry(
        ("Act as if what you do makes a difference. It does.", "William James"),
        ("Actúa como si lo que haces marcara la diferencia. La marca.", "William James"),
    ),
    entry(
        (
            "Success is not final, failure is not fatal: it is the courage to continue that counts.",
            "Winston Churchill",
        ),
        (
            "El éxito no es definitivo, el fracaso no es fatal: lo que cuenta es el valor para continuar.",
            "Winston Churchill",
        ),
    ),
    entry(
        ("You miss 100% of the shots you don't take.", "Wayne Gretzky"),
        ("Fallas el 100% de los tiros que no intentas.", "Wayne Gretzky"),
    ),
    entry(
        ("The future depends on what you do today.", "Mahatma Gandhi"),
        ("El futuro depende de lo que hagas hoy.", "Mahatma Gandhi"),
    ),
    entry(
        ("Well done is better than well said.", "Benjamin Franklin"),
        ("Bien hecho es mejor que bien dicho.", "Benjamin Franklin"),
    ),
    entry(
        ("Quality is not an act, it is a habit.", "Aristotle"),
        ("La calidad no es un acto, es un hábito.", "Aristóteles"),
    ),
    entry(
        ("What we think, we become.", "Buddha"),
        ("En lo que pensamos, nos convertimos.", "Buda"),
    ),
];

/// Quote at `index` in `language`, or [`Quote::EMPTY`] when out of range.
pub fn quote_at(quotes: &[QuoteEntry], index: usize, language: Language) -> Quote {
    quotes.get(index).map_or(Quote::EMPTY, |e| e.get(language))
}
