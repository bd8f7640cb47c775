use clap::Args;
use folio_epub::Cfi;

#[derive(Debug, Args)]
pub struct CfiCommand {
    /// A CFI such as `#epubcfi(/6/4!/4/2/1:0)`
    pub cfi: String,
}

impl CfiCommand {
    pub fn cfi(&self) {
        match self.cfi.parse::<Cfi>() {
            Ok(cfi) => println!("{cfi:#?}"),
            Err(error) => eprintln!("Invalid CFI `{}`: {error}", self.cfi),
        }
    }
}
