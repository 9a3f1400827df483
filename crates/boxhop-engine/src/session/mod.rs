pub mod context;
pub mod menu;
pub mod run;
pub mod scores;
pub mod settings;
