pub mod codes;
pub mod inventory;
pub mod sensors;
pub mod status;
