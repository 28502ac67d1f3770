pub mod compare;
pub mod rules;
