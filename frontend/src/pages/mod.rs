pub mod claim;
pub mod home;
