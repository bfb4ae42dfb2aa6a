pub mod add;
pub mod commons;
pub mod delete;
pub mod edit;
pub mod export;
pub mod find;
pub mod import;
pub mod list;
pub mod raw;
pub mod run;
