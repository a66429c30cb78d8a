mod document;
mod error;
mod packet;
mod writer;

pub use document::assemble;
pub use error::WriteError;
pub use packet::CzmlDocument;
pub use writer::write_document;
