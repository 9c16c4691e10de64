// Library API shared by the CLI and the integration tests
pub mod canonical;
pub mod catalog;
pub mod dictionary;
pub mod enumerate;
pub mod errors;
pub mod expand;
pub mod log;
pub mod mask;
pub mod reach;
pub mod solver;
