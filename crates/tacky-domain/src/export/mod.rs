//! Board import/export functionality.
//!
//! A board is exported as its persisted record, so an exported file can be
//! re-imported on any device without conversion.

pub mod exporter;
pub mod importer;

pub use exporter::BoardExporter;
pub use importer::BoardImporter;
