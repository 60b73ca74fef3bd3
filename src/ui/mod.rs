//! Console surfaces: the industry menu / prompt and the result table.

pub mod menu;
pub mod table;
