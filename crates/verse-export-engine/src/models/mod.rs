pub mod book;
pub mod note;
pub mod verse;

pub use book::BibleBook;
pub use note::{Note, Notes, book_reference_id};
pub use verse::Verse;
