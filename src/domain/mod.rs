pub mod expander;
pub mod models;
pub mod ranker;
pub mod suggest;
