//! Data element dictionary implementation

use crate::entries::ENTRIES;
use dcmlite_core::dictionary::{DataDictionary, DataDictionaryEntryRef};
use dcmlite_core::Tag;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;

static DICT: Lazy<StandardDataDictionaryRegistry> = Lazy::new(init_dictionary);

/// Retrieve a singleton instance of the standard dictionary registry.
///
/// Note that one does not generally have to call this
/// unless when retrieving the underlying registry is important.
/// The unit type [`StandardDataDictionary`]
/// already provides a lazy loaded singleton implementing the necessary traits.
#[inline]
pub fn registry() -> &'static StandardDataDictionaryRegistry {
    &DICT
}

/// The data struct actually containing the standard dictionary.
///
/// This structure is made opaque via the unit type [`StandardDataDictionary`],
/// which provides a lazy loaded singleton.
#[derive(Debug)]
pub struct StandardDataDictionaryRegistry {
    /// mapping: keyword → entry
    by_name: HashMap<&'static str, &'static DataDictionaryEntryRef<'static>>,
    /// mapping: tag → entry
    by_tag: HashMap<Tag, &'static DataDictionaryEntryRef<'static>>,
}

impl StandardDataDictionaryRegistry {
    fn new() -> StandardDataDictionaryRegistry {
        StandardDataDictionaryRegistry {
            by_name: HashMap::with_capacity(ENTRIES.len()),
            by_tag: HashMap::with_capacity(ENTRIES.len()),
        }
    }

    /// record the given dictionary entry reference
    fn index(&mut self, entry: &'static DataDictionaryEntryRef<'static>) -> &mut Self {
        self.by_name.insert(entry.alias, entry);
        self.by_tag.insert(entry.tag, entry);
        self
    }
}

fn init_dictionary() -> StandardDataDictionaryRegistry {
    let mut d = StandardDataDictionaryRegistry::new();
    for entry in ENTRIES {
        d.index(entry);
    }
    d
}

/// An attribute dictionary which consults
/// the library's embedded standard attribute registry.
///
/// The dictionary index is automatically initialized upon the first use.
#[derive(Debug, Default, Copy, Clone, Eq, Hash, PartialEq)]
pub struct StandardDataDictionary;

impl DataDictionary for StandardDataDictionary {
    fn by_tag(&self, tag: Tag) -> Option<&DataDictionaryEntryRef<'static>> {
        registry().by_tag.get(&tag).copied()
    }

    fn by_name(&self, name: &str) -> Option<&DataDictionaryEntryRef<'static>> {
        registry().by_name.get(name).copied()
    }
}

impl fmt::Display for StandardDataDictionary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("Standard DICOM attribute dictionary")
    }
}

#[cfg(test)]
mod tests {
    use super::StandardDataDictionary;
    use dcmlite_core::dictionary::DataDictionary;
    use dcmlite_core::{Tag, VR};

    #[test]
    fn lookup_by_tag() {
        let entry = StandardDataDictionary
            .by_tag(Tag(0x0010, 0x0010))
            .expect("Patient's Name should be in the dictionary");
        assert_eq!(entry.alias, "PatientName");
        assert_eq!(entry.name, "Patient's Name");
        assert_eq!(entry.vr, VR::PN);
        assert_eq!(entry.vm, "1");
        assert!(!entry.retired);

        let entry = StandardDataDictionary
            .by_tag(Tag(0x0040, 0x0275))
            .expect("Request Attributes Sequence should be in the dictionary");
        assert_eq!(entry.vr, VR::SQ);
    }

    #[test]
    fn lookup_by_name() {
        let entry = StandardDataDictionary
            .by_name("SpecificCharacterSet")
            .expect("keyword lookup should succeed");
        assert_eq!(entry.tag, Tag(0x0008, 0x0005));
        assert_eq!(entry.vr, VR::CS);
        assert_eq!(entry.vm, "1-n");
    }

    #[test]
    fn unknown_tag_yields_placeholder_record() {
        let record = StandardDataDictionary.record_for(Tag(0x0011, 0x0101));
        assert!(!record.known);
        assert_eq!(record.alias, "Unknown(0011,0101)");
        assert_eq!(record.vr, VR::UN);
    }

    #[test]
    fn retired_attributes_are_flagged() {
        let entry = StandardDataDictionary
            .by_tag(Tag(0x0008, 0x0001))
            .expect("Length to End should be in the dictionary");
        assert!(entry.retired);
    }
}
