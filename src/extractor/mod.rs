pub mod json;
pub mod path;
pub mod valid_book;
