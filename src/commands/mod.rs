pub mod analysis;
pub mod reference;
