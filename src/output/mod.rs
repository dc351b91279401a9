pub mod csv;
pub mod highlights;
pub mod json;
pub mod report;
pub mod table;
