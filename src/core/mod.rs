pub mod calculator;
pub mod logic;
pub mod report_file;
pub mod session;
