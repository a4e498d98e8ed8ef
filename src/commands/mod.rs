pub mod certificate;
pub mod check;
pub mod compare;
pub mod signature;
