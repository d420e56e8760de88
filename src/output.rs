use std::error::Error;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile;

pub trait ReportWriter {
    fn new(path: &str) -> Self;
    fn write_document(&self, document: &str) -> Result<(), Box<dyn Error>>;
}

pub struct HtmlFileOutput {
    path: String,
}

impl ReportWriter for HtmlFileOutput {
    fn new(path: &str) -> HtmlFileOutput {
        HtmlFileOutput {
            path: path.to_string(),
        }
    }

    // stage into a temp file beside the destination, then persist: the
    // document lands whole or not at all
    fn write_document(&self, document: &str) -> Result<(), Box<dyn Error>> {
        let path = Path::new(&self.path);
        let dir = match path.parent() {
            Some(parent) if parent != Path::new("") => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let mut staged = tempfile::NamedTempFile::new_in(&dir)?;
        staged.write_all(document.as_bytes())?;
        staged.persist(path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn writes_the_whole_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("grid.html");
        let writer = HtmlFileOutput::new(path.to_str().unwrap());
        writer.write_document("<table></table>").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "<table></table>");
    }

    #[test]
    fn overwrites_a_previous_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("grid.html");
        let writer = HtmlFileOutput::new(path.to_str().unwrap());
        writer.write_document("old").unwrap();
        writer.write_document("new").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn an_unwritable_destination_is_an_error() {
        let writer = HtmlFileOutput::new("/no-such-directory/deep/grid.html");
        assert!(writer.write_document("document").is_err());
    }

    #[test]
    fn no_stray_temp_files_after_a_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("grid.html");
        let writer = HtmlFileOutput::new(path.to_str().unwrap());
        writer.write_document("document").unwrap();
        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }
}
