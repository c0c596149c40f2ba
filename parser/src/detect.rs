//! Transfer syntax auto-detection.
//!
//! At the boundary between the file meta group and the main data set,
//! the encoding of the elements that follow is inferred
//! from a 6-byte look-ahead
//! instead of trusting the declared transfer syntax UID,
//! so that malformed streams are tolerated.

use byteordered::byteorder::{ByteOrder, LittleEndian};
use byteordered::Endianness;
use dcmlite_core::VR;

/// The outcome of probing a stream for its data set encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodingHint {
    /// The detected byte order.
    pub endianness: Endianness,
    /// Whether data elements carry an explicit VR field.
    pub explicit_vr: bool,
}

/// Infer the data set encoding from the first six bytes
/// of the element at the current stream position.
///
/// The first two bytes hold the element's group number:
/// little endian is assumed when its little endian reading
/// is below `0x2000` or equals `0x7FE0` (pixel data),
/// otherwise big endian.
/// Bytes 4..6 hold a VR code in explicit VR streams:
/// a recognised code implies explicit VR, anything else implicit VR.
pub fn detect_encoding(bytes: [u8; 6]) -> EncodingHint {
    let group = LittleEndian::read_u16(&bytes[0..2]);
    let endianness = if group < 0x2000 || group == 0x7FE0 {
        Endianness::Little
    } else {
        Endianness::Big
    };
    let explicit_vr = VR::from_binary([bytes[4], bytes[5]]).is_some();
    EncodingHint {
        endianness,
        explicit_vr,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_little_endian() {
        // (0008,0005) CS ...
        let hint = detect_encoding([0x08, 0x00, 0x05, 0x00, 0x43, 0x53]);
        assert_eq!(hint.endianness, Endianness::Little);
        assert!(hint.explicit_vr);
    }

    #[test]
    fn implicit_little_endian() {
        // (0008,0010) with a 4-byte length of 4
        let hint = detect_encoding([0x08, 0x00, 0x10, 0x00, 0x04, 0x00]);
        assert_eq!(hint.endianness, Endianness::Little);
        assert!(!hint.explicit_vr);
    }

    #[test]
    fn explicit_big_endian() {
        // (7FE0,0010) OW, big endian group comes out as 0xE07F
        let hint = detect_encoding([0x7F, 0xE0, 0x00, 0x10, 0x4F, 0x57]);
        assert_eq!(hint.endianness, Endianness::Big);
        assert!(hint.explicit_vr);
    }

    #[test]
    fn implicit_big_endian() {
        let hint = detect_encoding([0x7F, 0xE0, 0x00, 0x10, 0x00, 0x00]);
        assert_eq!(hint.endianness, Endianness::Big);
        assert!(!hint.explicit_vr);
    }

    #[test]
    fn pixel_data_group_in_little_endian_is_not_big_endian() {
        // (7FE0,0010) in little endian: group bytes E0 7F read as 0x7FE0
        let hint = detect_encoding([0xE0, 0x7F, 0x10, 0x00, 0x4F, 0x42]);
        assert_eq!(hint.endianness, Endianness::Little);
        assert!(hint.explicit_vr);
    }
}
