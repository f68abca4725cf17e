pub mod issue;
pub mod scan;

pub use issue::*;
pub use scan::*;
