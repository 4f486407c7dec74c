pub mod analysis;
pub mod diagnostics;
pub mod resume;
