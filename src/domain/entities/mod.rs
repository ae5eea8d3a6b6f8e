pub mod education;
pub mod experience;
pub mod option_fields;
pub mod profile;
pub mod project;
pub mod query_params;
pub mod seed;
pub mod skill;
pub mod timestamp;
