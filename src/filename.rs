/// Polish letters and the ASCII letter they are replaced with in file names.
const TRANSLITERATION: [(char, char); 18] = [
    ('ą', 'a'),
    ('ć', 'c'),
    ('ę', 'e'),
    ('ł', 'l'),
    ('ń', 'n'),
    ('ó', 'o'),
    ('ś', 's'),
    ('ź', 'z'),
    ('ż', 'z'),
    ('Ą', 'A'),
    ('Ć', 'C'),
    ('Ę', 'E'),
    ('Ł', 'L'),
    ('Ń', 'N'),
    ('Ó', 'O'),
    ('Ś', 'S'),
    ('Ź', 'Z'),
    ('Ż', 'Z'),
];

fn transliterate(c: char) -> char {
    TRANSLITERATION
        .iter()
        .find_map(|&(from, to)| (from == c).then_some(to))
        .unwrap_or(c)
}

/// Replaces Polish diacritics with their ASCII counterpart, everything else is
/// kept as is.
#[must_use]
pub fn sanitize(name: &str) -> String {
    name.chars().map(transliterate).collect()
}

/// Characters that can not be part of a file name on common platforms, or
/// that break a quoted `Content-Disposition` filename.
const RESERVED: [char; 9] = ['/', '\\', '"', ':', '*', '?', '<', '>', '|'];

/// Replaces path separators, reserved and control characters with `_`, so the
/// result is a single path component.
#[must_use]
pub(crate) fn path_safe(name: &str) -> String {
    name.chars()
        .map(|c| {
            if RESERVED.contains(&c) || c.is_control() {
                '_'
            } else {
                c
            }
        })
        .collect()
}
