use std::ops::Deref;

use derive_more::Display;

/// Text that has been escaped for use as XML character data or attribute value.
#[derive(Debug, Clone, Display, PartialEq, Eq)]
#[display("{}", _0)]
pub struct XmlString(String);

/// Characters allowed by the `Char` production of XML 1.0.
fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\r'
            | '\u{20}'..='\u{D7FF}'
            | '\u{E000}'..='\u{FFFD}'
            | '\u{10000}'..='\u{10FFFF}'
    )
}

impl XmlString {
    /// Escapes markup and drops characters that may not appear in an XML
    /// document at all (most control characters).
    #[must_use]
    pub fn escape(value: &str) -> Self {
        if value.chars().all(is_xml_char) {
            return Self(v_htmlescape::escape(value).to_string());
        }

        let value = value.chars().filter(|&c| is_xml_char(c)).collect::<String>();
        Self(v_htmlescape::escape(&value).to_string())
    }
}

impl Deref for XmlString {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_escapes_markup() {
        assert_eq!(
            &*XmlString::escape("<w:t> & \"x\""),
            "&lt;w:t&gt; &amp; &quot;x&quot;"
        );
    }

    #[test]
    fn test_drops_control_characters() {
        assert_eq!(&*XmlString::escape("dobra\u{0B}praca\u{0C}"), "dobrapraca");
        assert_eq!(&*XmlString::escape("a\u{0}b\u{1F}c\u{FFFE}"), "abc");
        assert_eq!(&*XmlString::escape("tab\tok\r\n"), "tab\tok\r\n");
    }

    #[test]
    fn test_keeps_polish_letters() {
        assert_eq!(&*XmlString::escape("Zespół Kuratorskiej Służby Sądowej"), "Zespół Kuratorskiej Służby Sądowej");
        assert_eq!(&*XmlString::escape("  wykonał  w   marcu"), "  wykonał  w   marcu");
    }
}
