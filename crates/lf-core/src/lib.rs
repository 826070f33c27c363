//! # lf-core
//!
//! Core types for the Labfolder electronic lab notebook client.
//!
//! This crate has no I/O. It provides:
//! - The logged-in user record and initials derivation
//! - Entries and the element references they carry
//! - Typed element records (text, file, image, data, table, well plate)
//! - Structured data items (groups, descriptive and single values)
//! - Conversion between Labfolder's sheet wire format and editable frames
//! - Cross-cutting error types

pub mod de;
pub mod elements;
pub mod entry;
pub mod enums;
pub mod errors;
pub mod table;
pub mod user;

pub use elements::{
    DataElement, DataItem, Element, FileElement, ImageElement, RawElement, TextElement,
    WellPlateElement, parse_element,
};
pub use entry::{ElementRef, Entry};
pub use enums::ElementKind;
pub use errors::CoreError;
pub use table::{CellValue, Frame, TableElement};
pub use user::UserInfo;
