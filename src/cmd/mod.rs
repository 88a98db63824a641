pub mod apps;
pub mod days;
pub mod init;
pub mod root;
pub mod weekday;
