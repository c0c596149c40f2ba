//! Core data element dictionary types

use crate::header::{Tag, VR};
use std::borrow::Cow;

/// A data type for a dictionary entry using string slices for its data,
/// suitable for being declared in a static dictionary table.
#[derive(Debug, Clone, PartialEq)]
pub struct DataDictionaryEntryRef<'a> {
    /// The attribute tag.
    pub tag: Tag,
    /// The attribute keyword (canonical name), such as `PatientName`.
    pub alias: &'a str,
    /// The human readable attribute name, such as `Patient's Name`.
    pub name: &'a str,
    /// The typical value representation.
    pub vr: VR,
    /// The value multiplicity specification (`"1"`, `"1-n"`, `"2"`, ...).
    pub vm: &'a str,
    /// Whether the attribute is retired from the standard.
    pub retired: bool,
}

/// An owned dictionary record for a single attribute,
/// as resolved for a concrete tag found in a stream.
///
/// When the tag is not known by the dictionary,
/// a placeholder record is synthesized
/// with the keyword `Unknown(GGGG,EEEE)`,
/// value representation [`UN`](VR::UN),
/// and value multiplicity `1`.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeRecord {
    /// The attribute tag.
    pub tag: Tag,
    /// The attribute keyword, or the `Unknown(GGGG,EEEE)` placeholder.
    pub alias: Cow<'static, str>,
    /// The value representation registered for the attribute.
    pub vr: VR,
    /// The value multiplicity specification.
    pub vm: Cow<'static, str>,
    /// Whether the attribute is retired from the standard.
    pub retired: bool,
    /// Whether the tag was actually found in the dictionary.
    pub known: bool,
}

/// Type trait for a dictionary of DICOM attributes.
///
/// The main purpose of an attribute dictionary is
/// to retrieve a record containing additional information
/// about a data element, either by DICOM tag or by its keyword.
/// Lookup methods return `None` when the tag or keyword
/// is not recognised by the dictionary.
pub trait DataDictionary {
    /// Fetch an entry by its concrete tag.
    fn by_tag(&self, tag: Tag) -> Option<&DataDictionaryEntryRef<'static>>;

    /// Fetch an entry by its attribute keyword,
    /// such as `PatientName`.
    /// Keywords are case sensitive.
    fn by_name(&self, name: &str) -> Option<&DataDictionaryEntryRef<'static>>;

    /// Resolve the record for the given tag,
    /// synthesizing a placeholder record when the tag is unknown.
    fn record_for(&self, tag: Tag) -> AttributeRecord {
        match self.by_tag(tag) {
            Some(entry) => AttributeRecord {
                tag,
                alias: Cow::Borrowed(entry.alias),
                vr: entry.vr,
                vm: Cow::Borrowed(entry.vm),
                retired: entry.retired,
                known: true,
            },
            None => AttributeRecord {
                tag,
                alias: Cow::Owned(format!("Unknown{}", tag)),
                vr: VR::UN,
                vm: Cow::Borrowed("1"),
                retired: false,
                known: false,
            },
        }
    }
}

impl<T: ?Sized> DataDictionary for &T
where
    T: DataDictionary,
{
    fn by_tag(&self, tag: Tag) -> Option<&DataDictionaryEntryRef<'static>> {
        (**self).by_tag(tag)
    }

    fn by_name(&self, name: &str) -> Option<&DataDictionaryEntryRef<'static>> {
        (**self).by_name(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct SingleEntryDict;

    static ENTRY: DataDictionaryEntryRef<'static> = DataDictionaryEntryRef {
        tag: Tag(0x0010, 0x0010),
        alias: "PatientName",
        name: "Patient's Name",
        vr: VR::PN,
        vm: "1",
        retired: false,
    };

    impl DataDictionary for SingleEntryDict {
        fn by_tag(&self, tag: Tag) -> Option<&DataDictionaryEntryRef<'static>> {
            if tag == ENTRY.tag {
                Some(&ENTRY)
            } else {
                None
            }
        }

        fn by_name(&self, name: &str) -> Option<&DataDictionaryEntryRef<'static>> {
            if name == ENTRY.alias {
                Some(&ENTRY)
            } else {
                None
            }
        }
    }

    #[test]
    fn record_for_known_tag() {
        let record = SingleEntryDict.record_for(Tag(0x0010, 0x0010));
        assert!(record.known);
        assert_eq!(record.alias, "PatientName");
        assert_eq!(record.vr, VR::PN);
        assert_eq!(record.vm, "1");
    }

    #[test]
    fn record_for_unknown_tag_synthesizes_placeholder() {
        let record = SingleEntryDict.record_for(Tag(0x0029, 0x1001));
        assert!(!record.known);
        assert_eq!(record.alias, "Unknown(0029,1001)");
        assert_eq!(record.vr, VR::UN);
        assert_eq!(record.vm, "1");
        assert!(!record.retired);
    }
}
