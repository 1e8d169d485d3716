pub mod labels;

pub use labels::{LabelEntry, LabelId, LabelTable};
