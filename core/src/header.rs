//! This module contains the types required for interpreting DICOM data
//! elements: the attribute tag, the value representation, the value length,
//! and the in-memory data element with its item-or-bytes payload.

use crate::dataset::Dataset;
use byteordered::Endianness;
use snafu::{ensure, Backtrace, OptionExt, ResultExt, Snafu};
use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::str::{from_utf8, FromStr};

/// Idiomatic alias for a tag's group number.
pub type GroupNumber = u16;
/// Idiomatic alias for a tag's element number.
pub type ElementNumber = u16;

/// The data type for DICOM data element tags.
///
/// The first component is the group number
/// and the second component is the element number.
/// Both `(u16, u16)` and `[u16; 2]` can be
/// efficiently converted to this type.
#[derive(PartialEq, Eq, Hash, PartialOrd, Ord, Clone, Copy)]
pub struct Tag(pub GroupNumber, pub ElementNumber);

impl Tag {
    /// Getter for the tag's group value.
    #[inline]
    pub fn group(self) -> GroupNumber {
        self.0
    }

    /// Getter for the tag's element value.
    #[inline]
    pub fn element(self) -> ElementNumber {
        self.1
    }

    /// Check whether this tag is in the file meta information group.
    #[inline]
    pub fn is_meta(self) -> bool {
        self.0 == 0x0002
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Tag({:#06X?}, {:#06X?})", self.0, self.1)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({:04X},{:04X})", self.0, self.1)
    }
}

impl PartialEq<(u16, u16)> for Tag {
    fn eq(&self, other: &(u16, u16)) -> bool {
        self.0 == other.0 && self.1 == other.1
    }
}

impl PartialEq<[u16; 2]> for Tag {
    fn eq(&self, other: &[u16; 2]) -> bool {
        self.0 == other[0] && self.1 == other[1]
    }
}

impl From<(u16, u16)> for Tag {
    #[inline]
    fn from(value: (u16, u16)) -> Tag {
        Tag(value.0, value.1)
    }
}

impl From<[u16; 2]> for Tag {
    #[inline]
    fn from(value: [u16; 2]) -> Tag {
        Tag(value[0], value[1])
    }
}

/// An error returned when parsing an invalid tag textual form.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum ParseTagError {
    /// Not enough tag components, expected `(group,element)`
    #[snafu(display("Not enough tag components, expected `(group,element)`"))]
    MissingComponent { backtrace: Backtrace },
    #[snafu(display("tag component has an invalid length: got {} but must be 4", got))]
    InvalidComponentLength { got: usize, backtrace: Backtrace },
    #[snafu(display("invalid hexadecimal number in tag component"))]
    InvalidNumber {
        backtrace: Backtrace,
        source: std::num::ParseIntError,
    },
}

/// Obtain a tag from its textual form `(GGGG,EEEE)`,
/// with or without the surrounding parentheses.
impl FromStr for Tag {
    type Err = ParseTagError;

    fn from_str(mut s: &str) -> Result<Self, Self::Err> {
        if s.starts_with('(') && s.ends_with(')') {
            s = &s[1..s.len() - 1];
        }
        let mut parts = s.split(',');
        let group = parts.next().context(MissingComponentSnafu)?;
        let element = parts.next().context(MissingComponentSnafu)?;
        ensure!(
            group.len() == 4,
            InvalidComponentLengthSnafu { got: group.len() }
        );
        ensure!(
            element.len() == 4,
            InvalidComponentLengthSnafu { got: element.len() }
        );
        let group = u16::from_str_radix(group, 16).context(InvalidNumberSnafu)?;
        let element = u16::from_str_radix(element, 16).context(InvalidNumberSnafu)?;
        Ok(Tag(group, element))
    }
}

/// A type for representing data element value lengths, in bytes.
/// An internal value of `0xFFFF_FFFF` represents an undefined
/// (unspecified) length, which has to be resolved
/// by traversing the content until a delimiter is found.
///
/// Note that two undefined lengths never compare equal,
/// and comparing an undefined length with any other length is always
/// `false`.
#[derive(Clone, Copy)]
pub struct Length(pub u32);

const UNDEFINED_LEN: u32 = 0xFFFF_FFFF;

impl Length {
    /// A length that is undefined.
    pub const UNDEFINED: Self = Length(UNDEFINED_LEN);

    /// Create a new length value from its internal representation.
    /// This is equivalent to `Length(len)`.
    pub fn new(len: u32) -> Self {
        Length(len)
    }

    /// Create a new length value with the given number of bytes.
    ///
    /// # Panic
    ///
    /// This function will panic if `len` represents an undefined length.
    pub fn defined(len: u32) -> Self {
        assert_ne!(len, UNDEFINED_LEN);
        Length(len)
    }

    /// Check whether this length is undefined.
    #[inline]
    pub fn is_undefined(self) -> bool {
        self.0 == UNDEFINED_LEN
    }

    /// Check whether this length is well defined (not undefined).
    #[inline]
    pub fn is_defined(self) -> bool {
        !self.is_undefined()
    }

    /// Fetch the concrete length value, if defined.
    #[inline]
    pub fn get(self) -> Option<u32> {
        match self.0 {
            UNDEFINED_LEN => None,
            v => Some(v),
        }
    }
}

impl From<u32> for Length {
    fn from(o: u32) -> Self {
        Length(o)
    }
}

impl PartialEq<Length> for Length {
    fn eq(&self, rhs: &Length) -> bool {
        match (self.0, rhs.0) {
            (UNDEFINED_LEN, _) | (_, UNDEFINED_LEN) => false,
            (l1, l2) => l1 == l2,
        }
    }
}

impl PartialOrd<Length> for Length {
    fn partial_cmp(&self, rhs: &Length) -> Option<Ordering> {
        match (self.0, rhs.0) {
            (UNDEFINED_LEN, _) | (_, UNDEFINED_LEN) => None,
            (l1, l2) => Some(l1.cmp(&l2)),
        }
    }
}

impl fmt::Debug for Length {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            UNDEFINED_LEN => f.write_str("Length(Undefined)"),
            l => write!(f, "Length({})", l),
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            UNDEFINED_LEN => f.write_str("U/L"),
            l => write!(f, "{}", l),
        }
    }
}

/// An enum type for a DICOM value representation.
///
/// Covers the closed set of codes recognised by the decoder.
/// Codes read from a stream which are not in this set
/// are coerced to [`UN`](VR::UN).
#[derive(Debug, Eq, PartialEq, Hash, Copy, Clone, Ord, PartialOrd)]
pub enum VR {
    /// Application Entity
    AE,
    /// Age String
    AS,
    /// Attribute Tag
    AT,
    /// Code String
    CS,
    /// Date
    DA,
    /// Decimal String
    DS,
    /// Date Time
    DT,
    /// Floating Point Single
    FL,
    /// Floating Point Double
    FD,
    /// Integer String
    IS,
    /// Long String
    LO,
    /// Long Text
    LT,
    /// Other Byte
    OB,
    /// Other Double
    OD,
    /// Other Float
    OF,
    /// Other Long
    OL,
    /// Other Word
    OW,
    /// Person Name
    PN,
    /// Short String
    SH,
    /// Signed Long
    SL,
    /// Sequence of Items
    SQ,
    /// Signed Short
    SS,
    /// Short Text
    ST,
    /// Time
    TM,
    /// Unlimited Characters
    UC,
    /// Unique Identifier (UID)
    UI,
    /// Unsigned Long
    UL,
    /// Unknown
    UN,
    /// Universal Resource Identifier or Universal Resource Locator (URI/URL)
    UR,
    /// Unsigned Short
    US,
    /// Unlimited Text
    UT,
}

impl VR {
    /// Obtain the value representation corresponding to the given two bytes.
    /// Each byte should represent an alphabetic character in upper case.
    pub fn from_binary(chars: [u8; 2]) -> Option<Self> {
        from_utf8(chars.as_ref())
            .ok()
            .and_then(|s| VR::from_str(s).ok())
    }

    /// Retrieve a string representation of this VR.
    pub fn to_string(self) -> &'static str {
        use VR::*;
        match self {
            AE => "AE",
            AS => "AS",
            AT => "AT",
            CS => "CS",
            DA => "DA",
            DS => "DS",
            DT => "DT",
            FL => "FL",
            FD => "FD",
            IS => "IS",
            LO => "LO",
            LT => "LT",
            OB => "OB",
            OD => "OD",
            OF => "OF",
            OL => "OL",
            OW => "OW",
            PN => "PN",
            SH => "SH",
            SL => "SL",
            SQ => "SQ",
            SS => "SS",
            ST => "ST",
            TM => "TM",
            UC => "UC",
            UI => "UI",
            UL => "UL",
            UN => "UN",
            UR => "UR",
            US => "US",
            UT => "UT",
        }
    }

    /// Retrieve a copy of this VR's byte representation.
    /// The function returns two alphabetic characters in upper case.
    pub fn to_bytes(self) -> [u8; 2] {
        let bytes = self.to_string().as_bytes();
        [bytes[0], bytes[1]]
    }

    /// Whether an explicit VR data element with this representation
    /// encodes its length as a 32-bit integer preceded by two reserved bytes,
    /// rather than a plain 16-bit integer.
    #[inline]
    pub fn has_reserved_length(self) -> bool {
        matches!(self, VR::OB | VR::OW | VR::SQ | VR::UN | VR::UT)
    }

    /// Whether values of this representation may carry a single pad byte
    /// (`0x00` or `0x20`) to reach an even length.
    pub fn is_padded(self) -> bool {
        use VR::*;
        matches!(
            self,
            UI | OB | CS | DS | IS | AE | AS | DA | DT | LO | LT | OD | OF | OW | PN | SH | ST
                | TM | UT
        )
    }

    /// Whether values of this representation hold text
    /// subject to the specific character set of the data set.
    #[inline]
    pub fn is_specific_charset_text(self) -> bool {
        matches!(self, VR::SH | VR::LO | VR::ST | VR::PN | VR::LT | VR::UT)
    }
}

/// Obtain the value representation corresponding to the given string.
/// The string should hold exactly two UTF-8 encoded alphabetic characters
/// in upper case, otherwise no match is made.
impl FromStr for VR {
    type Err = &'static str;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        use VR::*;
        match string {
            "AE" => Ok(AE),
            "AS" => Ok(AS),
            "AT" => Ok(AT),
            "CS" => Ok(CS),
            "DA" => Ok(DA),
            "DS" => Ok(DS),
            "DT" => Ok(DT),
            "FL" => Ok(FL),
            "FD" => Ok(FD),
            "IS" => Ok(IS),
            "LO" => Ok(LO),
            "LT" => Ok(LT),
            "OB" => Ok(OB),
            "OD" => Ok(OD),
            "OF" => Ok(OF),
            "OL" => Ok(OL),
            "OW" => Ok(OW),
            "PN" => Ok(PN),
            "SH" => Ok(SH),
            "SL" => Ok(SL),
            "SQ" => Ok(SQ),
            "SS" => Ok(SS),
            "ST" => Ok(ST),
            "TM" => Ok(TM),
            "UC" => Ok(UC),
            "UI" => Ok(UI),
            "UL" => Ok(UL),
            "UN" => Ok(UN),
            "UR" => Ok(UR),
            "US" => Ok(US),
            "UT" => Ok(UT),
            _ => Err("no such value representation"),
        }
    }
}

impl fmt::Display for VR {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(VR::to_string(*self))
    }
}

/// The payload of a data element:
/// either raw value bytes or an ordered list of items,
/// never both.
#[derive(Debug, Clone, PartialEq)]
pub enum ElementValue {
    /// Raw value bytes of a defined-length, non-sequence element.
    Bytes(Vec<u8>),
    /// The items of a sequence, of an undefined-length element,
    /// or of encapsulated pixel data.
    Items(Vec<Item>),
}

impl ElementValue {
    /// An empty byte payload.
    pub fn empty() -> Self {
        ElementValue::Bytes(Vec::new())
    }
}

/// A single item inside a data element.
///
/// Whether an item holds an embedded data set or a raw fragment
/// is decided at parse time by the enclosing element's tag:
/// pixel data items are fragments, all other items are data sets.
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    /// A sequence item: an embedded data set.
    Dataset(Dataset),
    /// An encapsulated pixel data fragment.
    Fragment(Vec<u8>),
}

impl Item {
    /// Retrieve the embedded data set, if this is a sequence item.
    pub fn dataset(&self) -> Option<&Dataset> {
        match self {
            Item::Dataset(dataset) => Some(dataset),
            Item::Fragment(_) => None,
        }
    }

    /// Retrieve the fragment bytes, if this is a pixel data fragment.
    pub fn fragment(&self) -> Option<&[u8]> {
        match self {
            Item::Dataset(_) => None,
            Item::Fragment(data) => Some(data),
        }
    }
}

/// A data type that represents and owns a DICOM data element,
/// together with the dictionary metadata resolved for its tag.
#[derive(Debug, Clone, PartialEq)]
pub struct DataElement {
    tag: Tag,
    /// attribute keyword, or `Unknown(GGGG,EEEE)` for unrecognised tags
    alias: Cow<'static, str>,
    /// value multiplicity as specified by the dictionary (`"1"`, `"1-n"`, ...)
    vm: Cow<'static, str>,
    vr: VR,
    /// the byte order the element's binary values were encoded in
    endianness: Endianness,
    len: Length,
    value: ElementValue,
}

impl DataElement {
    /// Create a data element from the given parts.
    /// This method will not check whether the value representation
    /// is compatible with the given payload.
    pub fn new(
        tag: Tag,
        alias: Cow<'static, str>,
        vm: Cow<'static, str>,
        vr: VR,
        endianness: Endianness,
        len: Length,
        value: ElementValue,
    ) -> Self {
        DataElement {
            tag,
            alias,
            vm,
            vr,
            endianness,
            len,
            value,
        }
    }

    /// Create an empty little endian data element
    /// with no dictionary metadata.
    pub fn empty(tag: Tag, vr: VR) -> Self {
        DataElement {
            tag,
            alias: Cow::Borrowed(""),
            vm: Cow::Borrowed("1"),
            vr,
            endianness: Endianness::Little,
            len: Length(0),
            value: ElementValue::empty(),
        }
    }

    /// Retrieve the element's tag.
    #[inline]
    pub fn tag(&self) -> Tag {
        self.tag
    }

    /// Retrieve the attribute keyword resolved for the element's tag,
    /// such as `PatientName`.
    pub fn name(&self) -> &str {
        &self.alias
    }

    /// Retrieve the value multiplicity specification
    /// from the attribute's dictionary record.
    pub fn vm(&self) -> &str {
        &self.vm
    }

    /// Retrieve the element's value representation.
    #[inline]
    pub fn vr(&self) -> VR {
        self.vr
    }

    /// Retrieve the byte order in which the element's values were encoded.
    #[inline]
    pub fn endianness(&self) -> Endianness {
        self.endianness
    }

    /// Retrieve the declared value length,
    /// already adjusted for any stripped pad byte.
    #[inline]
    pub fn len(&self) -> Length {
        self.len
    }

    /// Whether the element has neither value bytes nor items.
    pub fn is_empty(&self) -> bool {
        match &self.value {
            ElementValue::Bytes(data) => data.is_empty(),
            ElementValue::Items(items) => items.is_empty(),
        }
    }

    /// Retrieve the full element payload.
    pub fn value(&self) -> &ElementValue {
        &self.value
    }

    /// Retrieve the element's raw value bytes.
    /// Elements holding items yield an empty slice.
    pub fn data(&self) -> &[u8] {
        match &self.value {
            ElementValue::Bytes(data) => data,
            ElementValue::Items(_) => &[],
        }
    }

    /// Retrieve the element's items.
    /// Elements holding raw value bytes yield an empty slice.
    pub fn items(&self) -> &[Item] {
        match &self.value {
            ElementValue::Bytes(_) => &[],
            ElementValue::Items(items) => items,
        }
    }

    /// Obtain mutable access to the element's items, if it has any.
    pub fn items_mut(&mut self) -> Option<&mut Vec<Item>> {
        match &mut self.value {
            ElementValue::Bytes(_) => None,
            ElementValue::Items(items) => Some(items),
        }
    }

    /// Replace the element's raw value bytes,
    /// updating the recorded value length accordingly.
    ///
    /// This is used when text payloads are re-encoded to UTF-8
    /// after the data set's specific character set is known.
    /// It has no effect on elements holding items.
    pub fn set_data(&mut self, data: Vec<u8>) {
        if let ElementValue::Bytes(_) = self.value {
            self.len = Length(data.len() as u32);
            self.value = ElementValue::Bytes(data);
        }
    }
}
