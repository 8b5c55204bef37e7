use crate::domain::ports::Output;
use crate::utils::error::Result;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutOutput;

impl Output for StdoutOutput {
    fn write(&self, rendered: &str) -> Result<String> {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        writeln!(handle, "{}", rendered)?;
        handle.flush()?;
        Ok("stdout".to_string())
    }
}

#[derive(Debug, Clone)]
pub struct FileOutput {
    path: PathBuf,
}

impl FileOutput {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl Output for FileOutput {
    fn write(&self, rendered: &str) -> Result<String> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(&self.path, format!("{}\n", rendered))?;
        Ok(self.path.display().to_string())
    }
}

pub fn output_for(path: Option<&str>) -> Box<dyn Output> {
    match path {
        Some(path) => Box::new(FileOutput::new(path)),
        None => Box::new(StdoutOutput),
    }
}
