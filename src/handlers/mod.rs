pub mod assets;
pub mod helpers;
pub mod home;
