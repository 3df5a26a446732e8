pub mod macros;

pub mod pashabank;
pub use self::pashabank::PashaBank;
