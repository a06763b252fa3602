//! In-memory XML document model.

pub mod element;

pub use element::Element;
