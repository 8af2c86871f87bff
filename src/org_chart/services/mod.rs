mod hierarchy_builder;
mod model_assembler;
mod orphan_finder;
mod subset_detector;

pub use hierarchy_builder::HierarchyBuilder;
pub use model_assembler::ModelAssembler;
pub use orphan_finder::OrphanFinder;
pub use subset_detector::SubsetDetector;
