//! Typed access to data element values.
//!
//! Stored payloads are raw bytes;
//! the methods in this module interpret them on demand
//! according to the element's value representation and byte order.
//! Targets incompatible with the element's VR
//! are rejected with a [`CastValueError`].
//! Elements with the [`UN`](VR::UN) representation
//! accept any target on a best-effort basis.

use crate::header::{DataElement, VR};
use byteordered::byteorder::{BigEndian, ByteOrder, LittleEndian};
use byteordered::Endianness;
use smallvec::SmallVec;
use snafu::Snafu;

/// Helper type alias for multi-valued results.
pub type C<T> = SmallVec<[T; 2]>;

/// An error raised when requesting a value as a type
/// which is incompatible with the element's value representation,
/// or when the payload does not hold a full value of the target type.
#[derive(Debug, Snafu, Clone, PartialEq)]
#[snafu(display("Cannot interpret {} value as {}", vr, requested))]
pub struct CastValueError {
    /// The name of the requested target type.
    pub requested: &'static str,
    /// The element's value representation.
    pub vr: VR,
}

type Result<T> = std::result::Result<T, CastValueError>;

/// the value representations which hold textual payloads
fn is_text(vr: VR) -> bool {
    use VR::*;
    matches!(
        vr,
        SH | LO | ST | PN | LT | UT | IS | DS | TM | DA | DT | UI | CS | AS | AE
    )
}

fn read_u16(endianness: Endianness, data: &[u8]) -> u16 {
    match endianness {
        Endianness::Little => LittleEndian::read_u16(data),
        Endianness::Big => BigEndian::read_u16(data),
    }
}

fn read_u32(endianness: Endianness, data: &[u8]) -> u32 {
    match endianness {
        Endianness::Little => LittleEndian::read_u32(data),
        Endianness::Big => BigEndian::read_u32(data),
    }
}

fn read_i16(endianness: Endianness, data: &[u8]) -> i16 {
    match endianness {
        Endianness::Little => LittleEndian::read_i16(data),
        Endianness::Big => BigEndian::read_i16(data),
    }
}

fn read_i32(endianness: Endianness, data: &[u8]) -> i32 {
    match endianness {
        Endianness::Little => LittleEndian::read_i32(data),
        Endianness::Big => BigEndian::read_i32(data),
    }
}

fn read_f32(endianness: Endianness, data: &[u8]) -> f32 {
    match endianness {
        Endianness::Little => LittleEndian::read_f32(data),
        Endianness::Big => BigEndian::read_f32(data),
    }
}

fn read_f64(endianness: Endianness, data: &[u8]) -> f64 {
    match endianness {
        Endianness::Little => LittleEndian::read_f64(data),
        Endianness::Big => BigEndian::read_f64(data),
    }
}

impl DataElement {
    fn check(&self, compatible: bool, requested: &'static str) -> Result<()> {
        if compatible || self.vr() == VR::UN {
            Ok(())
        } else {
            Err(CastValueError {
                requested,
                vr: self.vr(),
            })
        }
    }

    /// interpret the payload as a sequence of fixed-width units,
    /// requiring at least one full unit for single-value access
    fn units<T>(
        &self,
        size: usize,
        requested: &'static str,
        decode: impl Fn(Endianness, &[u8]) -> T,
    ) -> Result<C<T>> {
        let endianness = self.endianness();
        let out: C<T> = self
            .data()
            .chunks_exact(size)
            .map(|chunk| decode(endianness, chunk))
            .collect();
        if out.is_empty() && !self.data().is_empty() {
            // payload too short for even one unit
            return Err(CastValueError {
                requested,
                vr: self.vr(),
            });
        }
        Ok(out)
    }

    fn single<T>(
        &self,
        size: usize,
        requested: &'static str,
        decode: impl Fn(Endianness, &[u8]) -> T,
    ) -> Result<T> {
        self.units(size, requested, decode)?
            .into_iter()
            .next()
            .ok_or(CastValueError {
                requested,
                vr: self.vr(),
            })
    }

    /// Retrieve the full payload as a single string,
    /// with trailing space and NUL padding excluded.
    ///
    /// The string may still contain backslash characters (`\`)
    /// delimiting individual values;
    /// use [`strings`](DataElement::strings) to have them split.
    pub fn string(&self) -> Result<String> {
        self.check(is_text(self.vr()), "str")?;
        let text = String::from_utf8_lossy(self.data());
        Ok(text.trim_end_matches(|c| c == ' ' || c == '\0').to_string())
    }

    /// Retrieve the payload as a list of strings,
    /// split on the `\` value delimiter.
    pub fn strings(&self) -> Result<C<String>> {
        let joined = self.string()?;
        if joined.is_empty() {
            return Ok(C::new());
        }
        Ok(joined.split('\\').map(|s| s.to_string()).collect())
    }

    /// Retrieve the value as a single 32-bit floating point number.
    pub fn float32(&self) -> Result<f32> {
        self.check(self.vr() == VR::FL, "f32")?;
        self.single(4, "f32", read_f32)
    }

    /// Retrieve the value as a list of 32-bit floating point numbers.
    pub fn float32_multi(&self) -> Result<C<f32>> {
        self.check(self.vr() == VR::FL, "f32")?;
        self.units(4, "f32", read_f32)
    }

    /// Retrieve the value as a single 64-bit floating point number.
    pub fn float64(&self) -> Result<f64> {
        self.check(self.vr() == VR::FD, "f64")?;
        self.single(8, "f64", read_f64)
    }

    /// Retrieve the value as a list of 64-bit floating point numbers.
    pub fn float64_multi(&self) -> Result<C<f64>> {
        self.check(self.vr() == VR::FD, "f64")?;
        self.units(8, "f64", read_f64)
    }

    /// Retrieve the value as a single signed 16-bit integer.
    pub fn int16(&self) -> Result<i16> {
        self.check(self.vr() == VR::SS, "i16")?;
        self.single(2, "i16", read_i16)
    }

    /// Retrieve the value as a list of signed 16-bit integers.
    pub fn int16_multi(&self) -> Result<C<i16>> {
        self.check(self.vr() == VR::SS, "i16")?;
        self.units(2, "i16", read_i16)
    }

    /// Retrieve the value as a single unsigned 16-bit integer.
    pub fn uint16(&self) -> Result<u16> {
        self.check(self.vr() == VR::US, "u16")?;
        self.single(2, "u16", read_u16)
    }

    /// Retrieve the value as a list of unsigned 16-bit integers.
    pub fn uint16_multi(&self) -> Result<C<u16>> {
        self.check(self.vr() == VR::US, "u16")?;
        self.units(2, "u16", read_u16)
    }

    /// Retrieve the value as a single signed 32-bit integer.
    pub fn int32(&self) -> Result<i32> {
        self.check(self.vr() == VR::SL, "i32")?;
        self.single(4, "i32", read_i32)
    }

    /// Retrieve the value as a list of signed 32-bit integers.
    pub fn int32_multi(&self) -> Result<C<i32>> {
        self.check(self.vr() == VR::SL, "i32")?;
        self.units(4, "i32", read_i32)
    }

    /// Retrieve the value as a single unsigned 32-bit integer.
    ///
    /// Attribute tag values (VR `AT`) are accepted as well:
    /// each value is assembled as `(group << 16) | element`.
    pub fn uint32(&self) -> Result<u32> {
        self.check(matches!(self.vr(), VR::UL | VR::AT), "u32")?;
        self.single(4, "u32", Self::read_u32_or_tag(self.vr()))
    }

    /// Retrieve the value as a list of unsigned 32-bit integers,
    /// with `AT` values assembled as `(group << 16) | element`.
    pub fn uint32_multi(&self) -> Result<C<u32>> {
        self.check(matches!(self.vr(), VR::UL | VR::AT), "u32")?;
        self.units(4, "u32", Self::read_u32_or_tag(self.vr()))
    }

    fn read_u32_or_tag(vr: VR) -> impl Fn(Endianness, &[u8]) -> u32 {
        move |endianness, chunk| {
            if vr == VR::AT {
                // group and element are separate 16-bit integers on the wire
                let group = read_u16(endianness, &chunk[0..2]);
                let element = read_u16(endianness, &chunk[2..4]);
                (u32::from(group) << 16) | u32::from(element)
            } else {
                read_u32(endianness, chunk)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::{ElementValue, Length, Tag};
    use std::borrow::Cow;

    fn element(vr: VR, endianness: Endianness, data: &[u8]) -> DataElement {
        DataElement::new(
            Tag(0x0009, 0x0001),
            Cow::Borrowed("Test"),
            Cow::Borrowed("1"),
            vr,
            endianness,
            Length(data.len() as u32),
            ElementValue::Bytes(data.to_vec()),
        )
    }

    #[test]
    fn text_values_split_on_backslash() {
        let e = element(VR::CS, Endianness::Little, b"DERIVED\\PRIMARY");
        assert_eq!(e.string().unwrap(), "DERIVED\\PRIMARY");
        let parts = e.strings().unwrap();
        assert_eq!(parts.as_slice(), &["DERIVED".to_string(), "PRIMARY".to_string()][..]);
    }

    #[test]
    fn string_excludes_trailing_padding() {
        let e = element(VR::PN, Endianness::Little, b"\xc3\x84oe  ");
        assert_eq!(e.string().unwrap(), "Äoe");
    }

    #[test]
    fn empty_text_value() {
        let e = element(VR::LO, Endianness::Little, b"");
        assert_eq!(e.string().unwrap(), "");
        assert!(e.strings().unwrap().is_empty());
    }

    #[test]
    fn integers_honour_endianness() {
        let e = element(VR::US, Endianness::Little, &[0x01, 0x02, 0x03, 0x04]);
        assert_eq!(e.uint16().unwrap(), 0x0201);
        assert_eq!(e.uint16_multi().unwrap().as_slice(), &[0x0201, 0x0403][..]);

        let e = element(VR::US, Endianness::Big, &[0x01, 0x02, 0x03, 0x04]);
        assert_eq!(e.uint16_multi().unwrap().as_slice(), &[0x0102, 0x0304][..]);

        let e = element(VR::SS, Endianness::Little, &[0xFF, 0xFF]);
        assert_eq!(e.int16().unwrap(), -1);

        let e = element(VR::UL, Endianness::Big, &[0x00, 0x00, 0x00, 0x2A]);
        assert_eq!(e.uint32().unwrap(), 42);

        let e = element(VR::SL, Endianness::Little, &[0xFE, 0xFF, 0xFF, 0xFF]);
        assert_eq!(e.int32().unwrap(), -2);
    }

    #[test]
    fn floats() {
        let mut data = [0u8; 4];
        LittleEndian::write_f32(&mut data, 0.5);
        let e = element(VR::FL, Endianness::Little, &data);
        assert_eq!(e.float32().unwrap(), 0.5);

        let mut data = [0u8; 16];
        BigEndian::write_f64(&mut data[0..8], 1.25);
        BigEndian::write_f64(&mut data[8..16], -8.0);
        let e = element(VR::FD, Endianness::Big, &data);
        assert_eq!(e.float64_multi().unwrap().as_slice(), &[1.25, -8.0][..]);
    }

    #[test]
    fn attribute_tag_as_u32() {
        // (0010,0010) in little endian: group first, then element
        let e = element(VR::AT, Endianness::Little, &[0x10, 0x00, 0x10, 0x00]);
        assert_eq!(e.uint32().unwrap(), 0x0010_0010);

        let e = element(VR::AT, Endianness::Big, &[0x7F, 0xE0, 0x00, 0x10]);
        assert_eq!(e.uint32().unwrap(), 0x7FE0_0010);
    }

    #[test]
    fn incompatible_target_is_rejected() {
        let e = element(VR::PN, Endianness::Little, b"Smith^J");
        let err = e.uint16().unwrap_err();
        assert_eq!(err.requested, "u16");
        assert_eq!(err.vr, VR::PN);
        assert!(e.float64().is_err());

        let e = element(VR::US, Endianness::Little, &[0x01, 0x00]);
        assert!(e.string().is_err());
    }

    #[test]
    fn unknown_vr_accepts_any_target() {
        let e = element(VR::UN, Endianness::Little, &[0x2A, 0x00]);
        assert_eq!(e.uint16().unwrap(), 42);
        // the trailing NUL counts as padding for the textual reading
        assert_eq!(e.string().unwrap(), "*");
    }

    #[test]
    fn short_payload_is_rejected() {
        let e = element(VR::UL, Endianness::Little, &[0x01, 0x02]);
        assert!(e.uint32().is_err());
        assert!(e.uint32_multi().is_err());
    }
}
