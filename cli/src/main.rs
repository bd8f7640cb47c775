use clap::Parser;
use folio_epub::errors::EbookResult;
use folio_epub_cli::Cli;
use folio_epub_cli::command::Commands;

fn main() -> EbookResult<()> {
    let cli = Cli::parse();
    cli.init_logging();

    match cli.commands {
        Commands::Debug(debug) => debug.debug()?,
        Commands::Cfi(cfi) => cfi.cfi(),
    }

    Ok(())
}
