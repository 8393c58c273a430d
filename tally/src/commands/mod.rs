pub mod eval;
pub mod history;
