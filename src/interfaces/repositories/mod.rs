pub mod education;
pub mod experience;
pub mod memory_repo;
pub mod profile;
pub mod project;
pub mod skill;
