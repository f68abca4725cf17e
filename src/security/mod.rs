pub mod checks;
pub mod risk;
pub mod rules;
pub mod scanner;

pub use scanner::WebformScanner;
