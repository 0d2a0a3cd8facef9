pub mod stage0_encoding;
pub mod stage1_breaks;
pub mod stage2_stopwords;
pub mod stage3_chorus;
pub mod stage4_canonicalize;
pub mod stage5_guard;

pub use stage0_encoding::*;
pub use stage1_breaks::*;
pub use stage2_stopwords::*;
pub use stage3_chorus::*;
pub use stage4_canonicalize::*;
pub use stage5_guard::*;
