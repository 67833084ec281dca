pub mod options;
pub mod program;
pub mod span;
