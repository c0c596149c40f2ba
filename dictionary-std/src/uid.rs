//! UID dictionary implementation

use crate::uids::UID_ENTRIES;
use dcmlite_core::dictionary::{UidDictionary, UidDictionaryEntryRef};
use once_cell::sync::Lazy;
use std::collections::HashMap;

static DICT: Lazy<StandardUidRegistry> = Lazy::new(init_dictionary);

/// Retrieve a singleton instance of the standard UID registry.
///
/// Note that one does not generally have to call this
/// unless when retrieving the underlying registry is important.
/// The unit type [`StandardUidDictionary`]
/// already provides a lazy loaded singleton implementing the necessary traits.
#[inline]
pub fn registry() -> &'static StandardUidRegistry {
    &DICT
}

/// The data struct actually containing the standard UID dictionary.
///
/// This structure is made opaque via the unit type [`StandardUidDictionary`],
/// which provides a lazy loaded singleton.
#[derive(Debug)]
pub struct StandardUidRegistry {
    /// mapping: keyword → entry
    by_keyword: HashMap<&'static str, &'static UidDictionaryEntryRef<'static>>,
    /// mapping: uid → entry
    by_uid: HashMap<&'static str, &'static UidDictionaryEntryRef<'static>>,
}

impl StandardUidRegistry {
    fn new() -> StandardUidRegistry {
        StandardUidRegistry {
            by_keyword: HashMap::with_capacity(UID_ENTRIES.len()),
            by_uid: HashMap::with_capacity(UID_ENTRIES.len()),
        }
    }

    /// record the given dictionary entry reference
    fn index(&mut self, entry: &'static UidDictionaryEntryRef<'static>) -> &mut Self {
        self.by_keyword.insert(entry.alias, entry);
        self.by_uid.insert(entry.uid, entry);
        self
    }
}

fn init_dictionary() -> StandardUidRegistry {
    let mut d = StandardUidRegistry::new();
    for entry in UID_ENTRIES {
        d.index(entry);
    }
    d
}

/// A UID dictionary which consults
/// the library's embedded registry of well-known unique identifiers.
///
/// UID values read from a stream may carry trailing space or NUL padding;
/// [`by_uid`](UidDictionary::by_uid) excludes such padding before the lookup.
///
/// The dictionary index is automatically initialized upon the first use.
#[derive(Debug, Default, Copy, Clone, Eq, Hash, PartialEq)]
pub struct StandardUidDictionary;

impl UidDictionary for StandardUidDictionary {
    type Entry = UidDictionaryEntryRef<'static>;

    fn by_keyword(&self, keyword: &str) -> Option<&Self::Entry> {
        registry().by_keyword.get(keyword).copied()
    }

    fn by_uid(&self, uid: &str) -> Option<&Self::Entry> {
        let uid = uid.trim_end_matches(|c: char| c.is_whitespace() || c == '\0');
        registry().by_uid.get(uid).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::StandardUidDictionary;
    use dcmlite_core::dictionary::{UidDictionary, UidType};

    #[test]
    fn lookup_by_uid() {
        let entry = StandardUidDictionary
            .by_uid("1.2.840.10008.1.2.1")
            .expect("Explicit VR Little Endian should be registered");
        assert_eq!(entry.name, "Explicit VR Little Endian");
        assert_eq!(entry.r#type, UidType::TransferSyntax);
        assert!(!entry.retired);
    }

    #[test]
    fn lookup_ignores_trailing_padding() {
        // UI values are NUL-padded to even length on the wire
        let entry = StandardUidDictionary
            .by_uid("1.2.840.10008.1.2\0")
            .expect("padded UID should still be found");
        assert_eq!(entry.alias, "ImplicitVRLittleEndian");
    }

    #[test]
    fn lookup_by_keyword() {
        let entry = StandardUidDictionary
            .by_keyword("CTImageStorage")
            .expect("keyword lookup should succeed");
        assert_eq!(entry.uid, "1.2.840.10008.5.1.4.1.1.2");
        assert_eq!(entry.r#type, UidType::SopClass);
    }

    #[test]
    fn unknown_uid_is_not_found() {
        assert!(StandardUidDictionary.by_uid("1.2.3.4.5").is_none());
    }
}
