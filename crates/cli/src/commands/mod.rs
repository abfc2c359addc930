pub mod params;
pub mod run;
pub mod shell;
