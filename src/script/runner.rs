//! Script execution against a [`Scene`].

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::{parse_command, Command};
use crate::color::Rgba;
use crate::config::RenderConfig;
use crate::error::{Error, Result};
use crate::framebuffer::Framebuffer;
use crate::output::PngEncoder;
use crate::primitive::Primitive;
use crate::scene::Scene;

/// A script line that was rejected and skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineError {
    /// 1-based line number.
    pub line: usize,
    /// Why the line was rejected.
    pub message: String,
}

impl fmt::Display for LineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}

/// Outcome of running a whole script.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Commands executed successfully.
    pub executed: usize,
    /// Images written, in order.
    pub saved: Vec<PathBuf>,
    /// Lines that were skipped.
    pub skipped: Vec<LineError>,
}

/// Interpreter state for one script: canvas size, pen color and scene.
#[derive(Debug, Clone)]
pub struct ScriptRunner {
    output_dir: PathBuf,
    config: RenderConfig,
    width: u32,
    height: u32,
    pen: Rgba,
    scene: Scene,
}

impl ScriptRunner {
    /// Create a runner writing images to `output_dir`, with default settings.
    #[must_use]
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self::with_config(output_dir, RenderConfig::default())
    }

    /// Create a runner with explicit settings.
    #[must_use]
    pub fn with_config(output_dir: impl Into<PathBuf>, config: RenderConfig) -> Self {
        Self {
            output_dir: output_dir.into(),
            width: config.canvas_width,
            height: config.canvas_height,
            config,
            pen: Rgba::BLACK,
            scene: Scene::new(),
        }
    }

    /// Current canvas size.
    #[must_use]
    pub const fn canvas_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Color assigned to the next defined primitive.
    #[must_use]
    pub const fn pen_color(&self) -> Rgba {
        self.pen
    }

    /// Primitives defined so far.
    #[must_use]
    pub const fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Execute a parsed command.
    ///
    /// Returns the path of the written image for `saveCanvas`.
    ///
    /// # Errors
    ///
    /// Returns an error if the command references an unknown primitive, is not
    /// allowed on the primitive's type, or the image cannot be written.
    pub fn execute(&mut self, command: Command) -> Result<Option<PathBuf>> {
        match command {
            Command::ResetCanvas { width, height } => {
                Framebuffer::byte_len(width, height)?;
                self.width = width;
                self.height = height;
                self.scene.clear();
            }
            Command::SaveCanvas { name } => return self.save(&name).map(Some),
            Command::SetColor(color) => self.pen = color,
            Command::Draw { id, kind, points } => {
                self.scene.insert(id, Primitive::new(kind, points, self.pen));
            }
            Command::Translate { id, dx, dy } => self.scene.translate(&id, dx, dy)?,
            Command::Rotate { id, pivot, degrees } => self.scene.rotate(&id, pivot, degrees)?,
            Command::Scale { id, pivot, factor } => self.scene.scale(&id, pivot, factor)?,
            Command::Clip {
                id,
                window,
                algorithm,
            } => {
                if !self.scene.clip(&id, window, algorithm)? {
                    debug!(%id, "clipped away, primitive removed");
                }
            }
        }
        Ok(None)
    }

    /// Parse and execute one line.
    ///
    /// # Errors
    ///
    /// Returns the parse or execution error for the line.
    pub fn run_line(&mut self, line: &str) -> Result<Option<PathBuf>> {
        match parse_command(line)? {
            Some(command) => {
                debug!(command = command.keyword(), "executing");
                self.execute(command)
            }
            None => Ok(None),
        }
    }

    /// Run every line of `reader`.
    ///
    /// Malformed or rejected lines are logged, recorded in the report and
    /// skipped.
    ///
    /// # Errors
    ///
    /// Returns an error only if reading the script or writing an image fails.
    pub fn run<R: BufRead>(&mut self, reader: R) -> Result<RunReport> {
        let mut report = RunReport::default();

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let line_no = idx + 1;
            if line.trim().is_empty() {
                continue;
            }

            match self.run_line(&line) {
                Ok(saved) => {
                    report.executed += 1;
                    report.saved.extend(saved);
                }
                Err(err @ (Error::Io(_) | Error::PngEncoding(_))) => return Err(err),
                Err(err) => {
                    warn!(line = line_no, error = %err, "skipping script line");
                    report.skipped.push(LineError {
                        line: line_no,
                        message: err.to_string(),
                    });
                }
            }
        }

        Ok(report)
    }

    /// Run a script file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or an image cannot be
    /// written.
    pub fn run_file(&mut self, path: impl AsRef<Path>) -> Result<RunReport> {
        let file = File::open(path)?;
        self.run(BufReader::new(file))
    }

    /// Paint the current scene over a background-filled canvas.
    ///
    /// # Errors
    ///
    /// Returns an error if the canvas size is invalid.
    pub fn render(&self) -> Result<Framebuffer> {
        let mut fb = Framebuffer::new(self.width, self.height)?;
        fb.clear(self.config.background);
        self.scene.render(&mut fb, self.config.curve_steps);
        Ok(fb)
    }

    fn save(&self, name: &str) -> Result<PathBuf> {
        let fb = self.render()?;
        std::fs::create_dir_all(&self.output_dir)?;
        let path = self.output_dir.join(format!("{name}.png"));
        PngEncoder::write_to_file(&fb, &path)?;
        info!(path = %path.display(), primitives = self.scene.len(), "saved canvas");
        Ok(path)
    }
}
