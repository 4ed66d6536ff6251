pub mod eval;
pub mod export;
pub mod report;
pub mod scenario;
pub mod tokenize;

#[cfg(test)]
mod export_test;
