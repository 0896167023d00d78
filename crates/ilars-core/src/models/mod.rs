pub mod daily;
pub mod eq5d5l;
pub mod monthly;
pub mod schedule;
pub mod series;
pub mod weekly;
