pub mod case;
pub mod country;
pub mod file;
