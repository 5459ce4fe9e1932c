/// Pell on a Postcard: bracketed lookup tables plus a child credit.
pub mod constants;
pub mod rules;
pub mod table;
