use std::env;
use std::error::Error;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

const INPUT_EPUB_DIR: &str = "tests/ebooks/example_epub";
const OUTPUT_EPUB_FILE: &str = "example.epub";
const MIMETYPE: &str = "mimetype";

/// Convenient script to convert the example epub directory into a `.epub` file.
fn main() -> Result<(), Box<dyn Error>> {
    let out_path = PathBuf::from(env::var("OUT_DIR")?);
    let input = Path::new(INPUT_EPUB_DIR);
    println!("cargo:rerun-if-changed={INPUT_EPUB_DIR}");

    let mut zip = ZipWriter::new(File::create(out_path.join(OUTPUT_EPUB_FILE))?);

    // The OCF requires `mimetype` to be the first, uncompressed entry
    let stored = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
    zip.start_file(MIMETYPE, stored)?;
    zip.write_all(&fs::read(input.join(MIMETYPE))?)?;

    let mut pending = vec![input.to_path_buf()];
    while let Some(dir) = pending.pop() {
        let mut entries = fs::read_dir(&dir)?.collect::<Result<Vec<_>, _>>()?;
        entries.sort_by_key(|entry| entry.path());

        for entry in entries {
            let path = entry.path();
            let name = path
                .strip_prefix(input)?
                .to_string_lossy()
                .replace('\\', "/");

            if path.is_dir() {
                zip.add_directory(name, SimpleFileOptions::default())?;
                pending.push(path);
            } else if name != MIMETYPE {
                zip.start_file(name, SimpleFileOptions::default())?;
                zip.write_all(&fs::read(&path)?)?;
            }
        }
    }
    zip.finish()?;

    Ok(())
}
