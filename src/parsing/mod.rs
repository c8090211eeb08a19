pub mod classifier;
pub mod extractor;
pub mod normalizer;
pub mod parser;

pub use classifier::LineClassifier;
pub use extractor::FieldExtractor;
pub use normalizer::LineNormalizer;
pub use parser::{MrzParser, MrzParserConfig};
