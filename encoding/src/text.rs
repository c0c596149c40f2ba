//! This module contains the components for decoding text in DICOM
//! data structures, including support for a wide range of legacy
//! character repertoires.
//!
//! Decoding always produces UTF-8:
//! bytes which cannot be interpreted in the source repertoire
//! are substituted with the Unicode replacement character,
//! so text decoding never fails.
//!
//! These capabilities are available through [`SpecificCharacterSet`].

use encoding::all::{
    GB18030, GBK, ISO_2022_JP, ISO_8859_1, ISO_8859_2, ISO_8859_3, ISO_8859_4, ISO_8859_5,
    ISO_8859_6, ISO_8859_7, ISO_8859_8, UTF_8, WINDOWS_1254, WINDOWS_31J, WINDOWS_874,
    WINDOWS_949,
};
use encoding::{DecoderTrap, Encoding};
use std::borrow::Cow;

/// A holder of the decoding mechanism for text in DICOM content,
/// which according to the standard, depends on the specific character set.
pub trait TextCodec {
    /// Obtain the defined term (unique name) of the text encoding,
    /// which may be used as the value of a
    /// Specific Character Set (0008,0005) element to refer to this codec.
    ///
    /// Should contain no leading or trailing spaces.
    /// This method may be useful for testing purposes, considering that
    /// `TextCodec` is often used as a trait object.
    fn name(&self) -> Cow<'static, str>;

    /// Decode the given byte buffer as a single string. The resulting string
    /// _may_ contain backslash characters ('\') to delimit individual values,
    /// and should be split later on if required.
    ///
    /// Undecodable input is replaced with the Unicode replacement character,
    /// so this operation never fails.
    fn decode(&self, text: &[u8]) -> String;
}

impl<T: ?Sized> TextCodec for Box<T>
where
    T: TextCodec,
{
    fn name(&self) -> Cow<'static, str> {
        self.as_ref().name()
    }

    fn decode(&self, text: &[u8]) -> String {
        self.as_ref().decode(text)
    }
}

impl<'a, T: ?Sized> TextCodec for &'a T
where
    T: TextCodec,
{
    fn name(&self) -> Cow<'static, str> {
        (**self).name()
    }

    fn decode(&self, text: &[u8]) -> String {
        (**self).decode(text)
    }
}

/// A descriptor for a specific character set,
/// taking part in text decoding
/// as per [PS3.5 ch 6 6.1](https://dicom.nema.org/medical/dicom/2023e/output/chtml/part05/chapter_6.html#sect_6.1).
///
/// # Example
///
/// Use [`from_code`](SpecificCharacterSet::from_code)
/// or one of the associated constants to create a character set.
/// From there, use the [`TextCodec`] trait to decode text.
///
/// ```
/// use dcmlite_encoding::text::{SpecificCharacterSet, TextCodec};
///
/// let character_set = SpecificCharacterSet::from_code("ISO_IR 100").unwrap();
/// assert_eq!(character_set, SpecificCharacterSet::ISO_IR_100);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SpecificCharacterSet(CharsetImpl);

impl SpecificCharacterSet {
    /// The default character repertoire, decoded as UTF-8.
    pub const DEFAULT: SpecificCharacterSet = SpecificCharacterSet(CharsetImpl::Default);

    /// ISO IR 100: ISO 8859-1, the Western Europe character set
    pub const ISO_IR_100: SpecificCharacterSet = SpecificCharacterSet(CharsetImpl::IsoIr100);

    /// ISO IR 192: UTF-8 encoding
    pub const ISO_IR_192: SpecificCharacterSet = SpecificCharacterSet(CharsetImpl::IsoIr192);

    /// Obtain the specific character set identified by the given code string.
    ///
    /// Supported code strings include the possible values
    /// in the respective DICOM element (0008,0005),
    /// with the `ISO 2022` escape-designating forms
    /// accepted as synonyms of their single-byte counterparts.
    ///
    /// # Example
    ///
    /// ```
    /// use dcmlite_encoding::text::{SpecificCharacterSet, TextCodec};
    ///
    /// let character_set = SpecificCharacterSet::from_code("ISO_IR 100").unwrap();
    /// assert_eq!(character_set.name(), "ISO_IR 100");
    /// ```
    pub fn from_code(code: &str) -> Option<Self> {
        CharsetImpl::from_code(code).map(SpecificCharacterSet)
    }
}

impl TextCodec for SpecificCharacterSet {
    fn name(&self) -> Cow<'static, str> {
        self.0.name()
    }

    fn decode(&self, text: &[u8]) -> String {
        self.0.decode(text)
    }
}

/// An enum type for individual supported character sets.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, PartialOrd, Ord)]
#[non_exhaustive]
enum CharsetImpl {
    /// The default character repertoire, decoded as UTF-8.
    #[default]
    Default,
    /// **ISO-IR 100** (ISO-8859-1): Right-hand part of the Latin alphabet no. 1,
    /// the Western Europe character set.
    IsoIr100,
    /// **ISO-IR 101** (ISO-8859-2): Right-hand part of the Latin alphabet no. 2,
    /// the Central/Eastern Europe character set.
    IsoIr101,
    /// **ISO-IR 109** (ISO-8859-3): Right-hand part of the Latin alphabet no. 3,
    /// the South Europe character set.
    IsoIr109,
    /// **ISO-IR 110** (ISO-8859-4): Right-hand part of the Latin alphabet no. 4,
    /// the North Europe character set.
    IsoIr110,
    /// **ISO-IR 144** (ISO-8859-5): The Latin/Cyrillic character set.
    IsoIr144,
    /// **ISO-IR 127** (ISO-8859-6): The Latin/Arabic character set.
    IsoIr127,
    /// **ISO-IR 126** (ISO-8859-7): The Latin/Greek character set.
    IsoIr126,
    /// **ISO-IR 138** (ISO-8859-8): The Latin/Hebrew character set.
    IsoIr138,
    /// **ISO-IR 148** (ISO-8859-9): The Latin alphabet no. 5, the Turkish
    /// character set, decoded through its Windows-1254 superset.
    IsoIr148,
    /// **ISO-IR 13** (JIS X 0201): Japanese romaji and katakana,
    /// decoded through its Windows-31J superset.
    IsoIr13,
    /// **ISO-IR 166** (TIS 620-2533): The Thai character set,
    /// decoded through its Windows-874 superset.
    IsoIr166,
    /// **ISO 2022 IR 87** (JIS X 0208): The Japanese graphic character set,
    /// with ISO 2022 escape sequences.
    Iso2022Ir87,
    /// **ISO-IR 149** (KS X 1001): The Korean character set,
    /// decoded through its Windows-949 superset.
    IsoIr149,
    /// **ISO-IR 58** (GB 2312): The Simplified Chinese character set,
    /// decoded through its GBK superset.
    IsoIr58,
    /// **ISO-IR 192**: The Unicode character set based on the UTF-8 encoding.
    IsoIr192,
    /// **GB18030**: The Simplified Chinese character set.
    Gb18030,
    /// **GBK**: The extended Simplified Chinese character set.
    Gbk,
}

impl CharsetImpl {
    /// Obtain the specific character set identified by the given code string.
    ///
    /// Supported code strings include the possible values
    /// in the respective DICOM element (0008,0005).
    pub fn from_code(code: &str) -> Option<Self> {
        use self::CharsetImpl::*;
        match code.trim_end() {
            "Default" | "" | "ISO_IR_6" | "ISO_IR 6" | "ISO 2022 IR 6" => Some(Default),
            "ISO_IR_100" | "ISO_IR 100" | "ISO 2022 IR 100" => Some(IsoIr100),
            "ISO_IR_101" | "ISO_IR 101" | "ISO 2022 IR 101" => Some(IsoIr101),
            "ISO_IR_109" | "ISO_IR 109" | "ISO 2022 IR 109" => Some(IsoIr109),
            "ISO_IR_110" | "ISO_IR 110" | "ISO 2022 IR 110" => Some(IsoIr110),
            "ISO_IR_144" | "ISO_IR 144" | "ISO 2022 IR 144" => Some(IsoIr144),
            "ISO_IR_127" | "ISO_IR 127" | "ISO 2022 IR 127" => Some(IsoIr127),
            "ISO_IR_126" | "ISO_IR 126" | "ISO 2022 IR 126" => Some(IsoIr126),
            "ISO_IR_138" | "ISO_IR 138" | "ISO 2022 IR 138" => Some(IsoIr138),
            "ISO_IR_148" | "ISO_IR 148" | "ISO 2022 IR 148" => Some(IsoIr148),
            "ISO_IR_13" | "ISO_IR 13" | "ISO 2022 IR 13" => Some(IsoIr13),
            "ISO_IR_166" | "ISO_IR 166" | "ISO 2022 IR 166" => Some(IsoIr166),
            "ISO_IR_87" | "ISO_IR 87" | "ISO 2022 IR 87" => Some(Iso2022Ir87),
            "ISO_IR_149" | "ISO_IR 149" | "ISO 2022 IR 149" => Some(IsoIr149),
            "ISO_IR_58" | "ISO_IR 58" | "ISO 2022 IR 58" => Some(IsoIr58),
            "ISO_IR_192" | "ISO_IR 192" => Some(IsoIr192),
            "GB18030" => Some(Gb18030),
            "GBK" => Some(Gbk),
            _ => None,
        }
    }
}

impl TextCodec for CharsetImpl {
    fn name(&self) -> Cow<'static, str> {
        Cow::Borrowed(match self {
            CharsetImpl::Default => "Default",
            CharsetImpl::IsoIr100 => "ISO_IR 100",
            CharsetImpl::IsoIr101 => "ISO_IR 101",
            CharsetImpl::IsoIr109 => "ISO_IR 109",
            CharsetImpl::IsoIr110 => "ISO_IR 110",
            CharsetImpl::IsoIr144 => "ISO_IR 144",
            CharsetImpl::IsoIr127 => "ISO_IR 127",
            CharsetImpl::IsoIr126 => "ISO_IR 126",
            CharsetImpl::IsoIr138 => "ISO_IR 138",
            CharsetImpl::IsoIr148 => "ISO_IR 148",
            CharsetImpl::IsoIr13 => "ISO_IR 13",
            CharsetImpl::IsoIr166 => "ISO_IR 166",
            CharsetImpl::Iso2022Ir87 => "ISO 2022 IR 87",
            CharsetImpl::IsoIr149 => "ISO_IR 149",
            CharsetImpl::IsoIr58 => "ISO_IR 58",
            CharsetImpl::IsoIr192 => "ISO_IR 192",
            CharsetImpl::Gb18030 => "GB18030",
            CharsetImpl::Gbk => "GBK",
        })
    }

    fn decode(&self, text: &[u8]) -> String {
        match self {
            CharsetImpl::Default => DefaultCharacterSetCodec.decode(text),
            CharsetImpl::IsoIr100 => IsoIr100CharacterSetCodec.decode(text),
            CharsetImpl::IsoIr101 => IsoIr101CharacterSetCodec.decode(text),
            CharsetImpl::IsoIr109 => IsoIr109CharacterSetCodec.decode(text),
            CharsetImpl::IsoIr110 => IsoIr110CharacterSetCodec.decode(text),
            CharsetImpl::IsoIr144 => IsoIr144CharacterSetCodec.decode(text),
            CharsetImpl::IsoIr127 => IsoIr127CharacterSetCodec.decode(text),
            CharsetImpl::IsoIr126 => IsoIr126CharacterSetCodec.decode(text),
            CharsetImpl::IsoIr138 => IsoIr138CharacterSetCodec.decode(text),
            CharsetImpl::IsoIr148 => IsoIr148CharacterSetCodec.decode(text),
            CharsetImpl::IsoIr13 => IsoIr13CharacterSetCodec.decode(text),
            CharsetImpl::IsoIr166 => IsoIr166CharacterSetCodec.decode(text),
            CharsetImpl::Iso2022Ir87 => Iso2022Ir87CharacterSetCodec.decode(text),
            CharsetImpl::IsoIr149 => IsoIr149CharacterSetCodec.decode(text),
            CharsetImpl::IsoIr58 => IsoIr58CharacterSetCodec.decode(text),
            CharsetImpl::IsoIr192 => Utf8CharacterSetCodec.decode(text),
            CharsetImpl::Gb18030 => Gb18030CharacterSetCodec.decode(text),
            CharsetImpl::Gbk => GbkCharacterSetCodec.decode(text),
        }
    }
}

/// Create and implement a character set type using the `encoding` crate.
macro_rules! decl_character_set {
    ($typ: ident, $term: literal, $val: expr) => {
        #[derive(Debug, Default, Copy, Clone, Eq, Hash, PartialEq)]
        #[doc = "Data type for the "]
        #[doc = $term]
        #[doc = " character set encoding."]
        pub struct $typ;

        impl TextCodec for $typ {
            fn name(&self) -> Cow<'static, str> {
                Cow::Borrowed($term)
            }

            fn decode(&self, text: &[u8]) -> String {
                match $val.decode(text, DecoderTrap::Replace) {
                    Ok(text) => text,
                    // Replace never fails on the codecs declared here
                    Err(_) => String::from_utf8_lossy(text).into_owned(),
                }
            }
        }
    };
}

/// Data type representing the default character repertoire,
/// decoded as UTF-8 per the decoder's canonical text form.
#[derive(Debug, Default, Copy, Clone, Eq, Hash, PartialEq)]
pub struct DefaultCharacterSetCodec;

impl TextCodec for DefaultCharacterSetCodec {
    fn name(&self) -> Cow<'static, str> {
        Cow::Borrowed("Default")
    }

    fn decode(&self, text: &[u8]) -> String {
        String::from_utf8_lossy(text).into_owned()
    }
}

decl_character_set!(IsoIr100CharacterSetCodec, "ISO_IR 100", ISO_8859_1);
decl_character_set!(IsoIr101CharacterSetCodec, "ISO_IR 101", ISO_8859_2);
decl_character_set!(IsoIr109CharacterSetCodec, "ISO_IR 109", ISO_8859_3);
decl_character_set!(IsoIr110CharacterSetCodec, "ISO_IR 110", ISO_8859_4);
decl_character_set!(IsoIr144CharacterSetCodec, "ISO_IR 144", ISO_8859_5);
decl_character_set!(IsoIr127CharacterSetCodec, "ISO_IR 127", ISO_8859_6);
decl_character_set!(IsoIr126CharacterSetCodec, "ISO_IR 126", ISO_8859_7);
decl_character_set!(IsoIr138CharacterSetCodec, "ISO_IR 138", ISO_8859_8);
decl_character_set!(IsoIr148CharacterSetCodec, "ISO_IR 148", WINDOWS_1254);
decl_character_set!(IsoIr13CharacterSetCodec, "ISO_IR 13", WINDOWS_31J);
decl_character_set!(IsoIr166CharacterSetCodec, "ISO_IR 166", WINDOWS_874);
decl_character_set!(Iso2022Ir87CharacterSetCodec, "ISO 2022 IR 87", ISO_2022_JP);
decl_character_set!(IsoIr149CharacterSetCodec, "ISO_IR 149", WINDOWS_949);
decl_character_set!(IsoIr58CharacterSetCodec, "ISO_IR 58", GBK);
decl_character_set!(Utf8CharacterSetCodec, "ISO_IR 192", UTF_8);
decl_character_set!(Gb18030CharacterSetCodec, "GB18030", GB18030);
decl_character_set!(GbkCharacterSetCodec, "GBK", GBK);

#[cfg(test)]
mod tests {
    use super::*;

    fn test_codec<T: TextCodec>(codec: T, data: &[u8], expected: &str) {
        assert_eq!(codec.decode(data), expected);
    }

    #[test]
    fn iso_ir_100_decodes_latin_1() {
        let codec = SpecificCharacterSet::from_code("ISO_IR 100").unwrap();
        test_codec(&codec, b"Sim\xF5es^Jo\xE3o", "Simões^João");
        test_codec(&codec, b"G\xfcnther^Hans", "Günther^Hans");
        // 0xC4 is 'Ä' in ISO-8859-1
        test_codec(&codec, &[0xC4, 0x6F, 0x65], "Äoe");
    }

    #[test]
    fn iso_ir_144_decodes_cyrillic() {
        let codec = SpecificCharacterSet::from_code("ISO_IR 144").unwrap();
        test_codec(&codec, &[0xBB, 0xEE, 0xDA, 0x63, 0x65, 0x6C], "Люкcel");
    }

    #[test]
    fn default_repertoire_is_utf8() {
        let codec = SpecificCharacterSet::DEFAULT;
        test_codec(&codec, b"Smith^John", "Smith^John");
        // invalid UTF-8 input never fails, it is replaced
        let decoded = codec.decode(&[0x41, 0xFF, 0x42]);
        assert_eq!(decoded, "A\u{FFFD}B");
    }

    #[test]
    fn from_code_accepts_iso_2022_synonyms() {
        assert_eq!(
            SpecificCharacterSet::from_code("ISO 2022 IR 100"),
            SpecificCharacterSet::from_code("ISO_IR 100"),
        );
        assert_eq!(
            SpecificCharacterSet::from_code("ISO 2022 IR 6"),
            Some(SpecificCharacterSet::DEFAULT),
        );
        // trailing padding is tolerated
        assert_eq!(
            SpecificCharacterSet::from_code("ISO_IR 192 "),
            Some(SpecificCharacterSet::ISO_IR_192),
        );
    }

    #[test]
    fn from_code_rejects_unknown_identifiers() {
        assert_eq!(SpecificCharacterSet::from_code("ISO_IR 999"), None);
    }

    #[test]
    fn utf8_charset_decodes_multibyte() {
        let codec = SpecificCharacterSet::from_code("ISO_IR 192").unwrap();
        test_codec(&codec, "Иванов^Иван".as_bytes(), "Иванов^Иван");
    }
}
