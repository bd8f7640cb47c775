use clap::Args;
use folio_epub::Book;
use folio_epub::errors::EbookResult;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct DebugCommand {
    /// An EPUB file or directory containing the contents of an unzipped EPUB
    pub ebook_path: PathBuf,

    /// Directory `.epub` files are unpacked into
    #[arg(long)]
    unzip_dir: Option<PathBuf>,

    /// Fail on malformed content instead of skipping it
    #[arg(long)]
    strict: bool,

    /// Display all metadata
    #[arg(long)]
    metadata: bool,

    /// Display the manifest
    #[arg(long)]
    resources: bool,

    /// Display the spine
    #[arg(long)]
    spine: bool,

    /// Display the ToC
    #[arg(long)]
    toc: bool,

    /// Display the media overlays
    #[arg(long)]
    smil: bool,
}

impl DebugCommand {
    pub fn debug(&self) -> EbookResult<()> {
        let mut options = Book::options().strict(self.strict);
        if let Some(unzip_dir) = &self.unzip_dir {
            options = options.unzip_dir(unzip_dir);
        }

        let book = options.open(&self.ebook_path)?;
        self.show_debug(&book);

        Ok(())
    }

    pub fn has_selected_components(&self) -> bool {
        self.metadata || self.resources || self.spine || self.toc || self.smil
    }

    pub fn show_debug(&self, book: &Book) {
        if !self.has_selected_components() {
            println!("{book:#?}");
            return;
        }

        let debug_structs: &[(bool, &dyn std::fmt::Debug)] = &[
            (self.metadata, book.metadata()),
            (self.resources, book.resources()),
            (self.spine, book.spine()),
            (self.toc, &book.table_of_contents()),
            (self.smil, book.smil_files()),
        ];

        for (is_print, debug_struct) in debug_structs {
            if *is_print {
                println!("{debug_struct:#?}");
            }
        }
    }
}
