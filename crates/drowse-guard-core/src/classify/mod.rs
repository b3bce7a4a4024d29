pub(crate) mod client;
mod label;
mod result;

pub use {
    client::{HttpClassifier, SegmentClassifier},
    label::Label,
    result::ClassificationResult,
};
