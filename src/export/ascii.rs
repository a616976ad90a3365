/// Replacements for the characters that show up in German tariff names and amounts.
const SUBSTITUTIONS: &[(char, &str)] = &[
    ('€', "EUR"),
    ('ä', "ae"),
    ('ö', "oe"),
    ('ü', "ue"),
    ('Ä', "Ae"),
    ('Ö', "Oe"),
    ('Ü', "Ue"),
    ('ß', "ss"),
];

/// Placeholder for anything else outside of ASCII.
const UNKNOWN: char = '?';

/// Make the text representable in encodings limited to ASCII.
#[must_use]
pub fn to_ascii(text: &str) -> String {
    let mut ascii = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_ascii() {
            ascii.push(c);
        } else if let Some((_, replacement)) = SUBSTITUTIONS.iter().find(|(from, _)| *from == c) {
            ascii.push_str(replacement);
        } else {
            ascii.push(UNKNOWN);
        }
    }
    ascii
}
