pub mod history_transformer;

pub use history_transformer::{DisplayPoint, TransformedHistory, transform_history};
