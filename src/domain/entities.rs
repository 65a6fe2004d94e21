pub mod project;
pub mod skill;
pub mod token;
