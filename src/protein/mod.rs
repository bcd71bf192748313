pub mod properties;
pub mod report;
pub mod residues;
pub mod sequence;

pub use properties::*;
pub use report::*;
pub use residues::*;
pub use sequence::*;
