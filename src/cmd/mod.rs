pub mod batch;
pub mod calc;
pub mod casual;
pub mod eval;
