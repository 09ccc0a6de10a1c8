use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Creates a folder (and any necessary parent directories) at `folder_path`.
pub fn create_folder(folder_path: &Path) -> io::Result<()> {
    fs::create_dir_all(folder_path)
}

/// Writes `contents` to `path`, creating missing parent directories and
/// truncating any existing file. The handle is closed when this returns.
pub fn write_text_file(path: &Path, contents: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            create_folder(parent)?;
        }
    }

    let mut out = BufWriter::new(File::create(path)?);
    out.write_all(contents.as_bytes())?;
    out.flush()
}
