use clap::Subcommand;

mod cfi;
mod debug;

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the debugged contents of folio_epub::Book.
    Debug(debug::DebugCommand),
    /// Decode an EPUB CFI into a reading position.
    Cfi(cfi::CfiCommand),
}
