pub mod pid5;
pub mod sas;
