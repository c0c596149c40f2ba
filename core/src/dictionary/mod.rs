//! This module holds the dictionary abstractions:
//! attribute dictionaries mapping tags to metadata records,
//! and UID dictionaries mapping unique identifier strings
//! to their registered purpose.

mod data_element;
mod uid;

pub use data_element::{AttributeRecord, DataDictionary, DataDictionaryEntryRef};
pub use uid::{UidDictionary, UidDictionaryEntry, UidDictionaryEntryRef, UidType};
