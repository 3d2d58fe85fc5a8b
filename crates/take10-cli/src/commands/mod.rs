pub mod generate;
pub mod roll;
pub mod skills;
pub mod strategies;
