//! Component 3 – output. Only the Lua table is produced.
pub mod lua;
