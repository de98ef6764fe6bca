pub mod fa2json;
pub mod validate;
