pub mod education;
pub mod experiences;
pub mod home;
pub mod json_error;
pub mod profile;
pub mod projects;
pub mod skills;
pub mod system;
