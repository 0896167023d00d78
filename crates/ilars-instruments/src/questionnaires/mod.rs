pub mod daily;
pub mod eq5d5l;
pub mod monthly;
pub mod weekly;
