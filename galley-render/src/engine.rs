//! Document converter — renders one source document into the destination
//! folder, optionally through a Tera page template.
//!
//! Templates receive the rendered fragment as `content`; a page template
//! interpolates it with `{{ content | safe }}`. When several templates are
//! configured they are all registered (so `{% include %}`/`{% extends %}`
//! resolve by file name) and the first one is evaluated.

use std::path::{Path, PathBuf};

use tera::Tera;

use galley_core::select::output_name;

use crate::error::{io_err, RenderError};
use crate::html::render_html;

/// Converts source documents into rendered HTML files.
pub struct Converter {
    templates: Option<PageTemplates>,
}

struct PageTemplates {
    tera: Tera,
    /// Name of the entry template (first configured file).
    entry: String,
}

impl Converter {
    /// Load `templates` once for the run.
    ///
    /// An empty list means rendered fragments are written as-is.
    pub fn new(templates: &[PathBuf]) -> Result<Self, RenderError> {
        let Some(first) = templates.first() else {
            return Ok(Self { templates: None });
        };

        let mut tera = Tera::default();
        let mut entry = None;
        for path in templates {
            let name = template_name(path)?;
            tera.add_template_file(path, Some(name.as_str()))?;
            if path == first {
                entry = Some(name);
            }
        }

        Ok(Self {
            templates: entry.map(|entry| PageTemplates { tera, entry }),
        })
    }

    /// Convert `<source_dir>/<filename>` and write the result to
    /// `<destination_dir>/<stem>.html`, creating the destination folder if
    /// absent. Returns the output path.
    pub fn convert(
        &self,
        filename: &str,
        source_dir: &Path,
        destination_dir: &Path,
    ) -> Result<PathBuf, RenderError> {
        let source = source_dir.join(filename);
        let markdown = std::fs::read_to_string(&source).map_err(|e| io_err(&source, e))?;
        let fragment = render_html(&markdown);

        std::fs::create_dir_all(destination_dir).map_err(|e| io_err(destination_dir, e))?;
        let output = destination_dir.join(output_name(filename));

        let page = match &self.templates {
            Some(page) => {
                let mut ctx = tera::Context::new();
                ctx.insert("content", &fragment);
                page.tera.render(&page.entry, &ctx)?
            }
            None => fragment,
        };

        std::fs::write(&output, page).map_err(|e| io_err(&output, e))?;
        Ok(output)
    }
}

fn template_name(path: &Path) -> Result<String, RenderError> {
    match path.file_name() {
        Some(name) => Ok(name.to_string_lossy().into_owned()),
        None => Err(io_err(
            path,
            std::io::Error::other("template path has no file name"),
        )),
    }
}
