pub mod case;
pub mod path;
