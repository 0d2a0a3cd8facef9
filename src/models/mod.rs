pub mod chorus;
pub mod diagnostic;
pub mod keyword;
pub mod stanza;

pub use chorus::*;
pub use diagnostic::*;
pub use keyword::*;
pub use stanza::*;
