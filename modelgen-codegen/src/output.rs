//! Buffered output files and the output directory.

use crate::resource::Resource;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const INDENT: &str = "    ";

/// Indented line buffer holding the body of one generated file.
#[derive(Debug, Default, Clone)]
pub struct Output {
    lines: Vec<String>,
    indent: usize,
}

impl Output {
    /// Creates an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a line at the current indentation.
    pub fn line(&mut self, line: impl AsRef<str>) {
        let line = line.as_ref();
        if line.is_empty() {
            self.lines.push(String::new());
        } else {
            self.lines.push(format!("{}{}", INDENT.repeat(self.indent), line));
        }
    }

    /// Appends an empty line.
    pub fn blank(&mut self) {
        self.lines.push(String::new());
    }

    /// Increases the indentation of subsequent lines.
    pub fn indent(&mut self) {
        self.indent += 1;
    }

    /// Decreases the indentation of subsequent lines.
    pub fn dedent(&mut self) {
        self.indent = self.indent.saturating_sub(1);
    }

    /// Writes `header {`, the lines produced by `f` one level deeper, and `}`.
    pub fn block(&mut self, header: impl AsRef<str>, f: impl FnOnce(&mut Self)) {
        self.line(format!("{} {{", header.as_ref()));
        self.indent();
        f(self);
        self.dedent();
        self.line("}");
    }

    /// Writes a description as `///` lines, one per description line.
    ///
    /// Lines are copied as written; only a trailing `\r` is dropped.
    pub fn doc_comment(&mut self, description: Option<&str>) {
        let Some(description) = description else {
            return;
        };
        for line in description.split('\n') {
            let line = line.strip_suffix('\r').unwrap_or(line);
            if line.is_empty() {
                self.line("///");
            } else {
                self.line(format!("/// {line}"));
            }
        }
    }

    /// Returns true if nothing has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns the buffered lines.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Renders `header` followed by the buffered body.
    #[must_use]
    pub fn render(&self, header: &[String]) -> String {
        let mut out = String::new();
        for line in header {
            out.push_str(line);
            out.push('\n');
        }
        if !header.is_empty() && !self.lines.is_empty() {
            out.push('\n');
        }
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}

/// Output directory of a generation run.
#[derive(Debug, Clone)]
pub struct OutDir {
    root: PathBuf,
}

impl OutDir {
    /// Creates a handle for the given root. Nothing is touched on disk.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Removes the whole tree and recreates an empty root.
    ///
    /// # Errors
    /// Returns an IO error if the tree cannot be removed or created.
    pub fn reset(&self) -> io::Result<()> {
        match fs::remove_dir_all(&self.root) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(e),
        }
        fs::create_dir_all(&self.root)
    }

    /// Writes a file relative to the root, creating parent directories.
    ///
    /// # Errors
    /// Returns an IO error if the file cannot be written.
    pub fn write(&self, relative: impl AsRef<Path>, content: &str) -> io::Result<()> {
        let path = self.root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)
    }

    /// Copies a static resource verbatim into the root.
    ///
    /// # Errors
    /// Returns an IO error if the file cannot be written.
    pub fn add_resource(&self, resource: &Resource) -> io::Result<()> {
        self.write(resource.file_name, resource.content)
    }
}
