pub mod check;
pub mod dump;
pub mod hash;
pub mod lookup;
pub mod settings;
pub mod table_loader;

#[cfg(test)]
mod table_loader_tests;
