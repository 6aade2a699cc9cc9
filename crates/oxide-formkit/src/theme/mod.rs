//! Theme table: maps (theme, template kind) to a template.
//!
//! Two themes are built in, plain HTML and Bootstrap 5, each with a template
//! for every [`FieldType`] plus the form wrapper. Their templates are compiled
//! once per process and never change afterwards. A [`CustomTheme`] reads the
//! same set of templates from a directory instead, on first use.

mod bootstrap;
mod html;

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use once_cell::sync::Lazy;
use tera::{Context, Tera};
use tracing::debug;

use crate::error::{tera_message, FormError, Result};
use crate::field::FieldType;

/// Which template of a theme to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    /// The form wrapper.
    Form,
    /// The body of one field.
    Field(FieldType),
}

impl TemplateKind {
    /// Returns the template file stem (`form`, `text`, `select`, ...).
    pub fn stem(self) -> &'static str {
        match self {
            Self::Form => "form",
            Self::Field(field_type) => field_type.as_str(),
        }
    }

    /// Iterates over the wrapper and every field kind.
    pub fn all() -> impl Iterator<Item = Self> {
        std::iter::once(Self::Form).chain(FieldType::ALL.into_iter().map(Self::Field))
    }
}

impl From<FieldType> for TemplateKind {
    fn from(field_type: FieldType) -> Self {
        Self::Field(field_type)
    }
}

/// Escapes HTML special characters.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Creates a template engine that escapes every substituted value.
fn new_engine() -> Tera {
    let mut tera = Tera::default();
    tera.autoescape_on(vec![".html"]);
    tera.set_escape_fn(escape_html);
    tera
}

static BUILTIN: Lazy<std::result::Result<Tera, String>> = Lazy::new(|| {
    let mut tera = new_engine();
    for theme in BuiltinTheme::ALL {
        for kind in TemplateKind::all() {
            let name = theme.template_name(kind);
            tera.add_raw_template(&name, theme.source(kind))
                .map_err(|e| format!("{name}: {}", tera_message(&e)))?;
        }
    }
    Ok(tera)
});

/// A theme shipped with the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BuiltinTheme {
    /// Plain markup without framework classes.
    Html,
    /// Bootstrap 5 classes and layout.
    #[default]
    Bootstrap5,
}

impl BuiltinTheme {
    /// All built-in themes.
    pub const ALL: [Self; 2] = [Self::Html, Self::Bootstrap5];

    /// Returns the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Bootstrap5 => "bootstrap5",
        }
    }

    /// Returns the template source for a kind.
    pub fn source(self, kind: TemplateKind) -> &'static str {
        match self {
            Self::Html => html::template(kind),
            Self::Bootstrap5 => bootstrap::template(kind),
        }
    }

    fn template_name(self, kind: TemplateKind) -> String {
        format!("{}/{}.html", self.name(), kind.stem())
    }

    /// Renders the template for `kind` with the given context.
    pub fn render(self, kind: TemplateKind, context: &Context) -> Result<String> {
        let tera = BUILTIN
            .as_ref()
            .map_err(|message| FormError::TemplateParse {
                template: self.name().to_string(),
                message: message.clone(),
            })?;
        let name = self.template_name(kind);
        tera.render(&name, context)
            .map_err(|e| FormError::Render {
                message: tera_message(&e),
                template: name,
            })
    }
}

impl fmt::Display for BuiltinTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BuiltinTheme {
    type Err = FormError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.name() == s)
            .ok_or_else(|| FormError::UnknownTheme(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy)]
enum Resolved {
    File,
    Fallback(BuiltinTheme),
}

#[derive(Clone)]
struct TemplateCache {
    engine: Tera,
    resolved: HashMap<TemplateKind, Resolved>,
}

/// A theme whose templates live in files.
///
/// The template for a kind is `<root>/<name>/<stem>.html`, for example
/// `templates/corporate/select.html`. Each file is read the first time a render
/// needs it and kept afterwards. A missing file uses the fallback theme when one
/// is set and is an error otherwise.
#[derive(Clone)]
pub struct CustomTheme {
    name: String,
    root: PathBuf,
    fallback: Option<BuiltinTheme>,
    cache: RefCell<TemplateCache>,
}

impl fmt::Debug for CustomTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomTheme")
            .field("name", &self.name)
            .field("root", &self.root)
            .field("fallback", &self.fallback)
            .finish_non_exhaustive()
    }
}

impl CustomTheme {
    /// Creates a custom theme reading from `<root>/<name>/`.
    pub fn new(name: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            root: root.into(),
            fallback: None,
            cache: RefCell::new(TemplateCache {
                engine: new_engine(),
                resolved: HashMap::new(),
            }),
        }
    }

    /// Uses a built-in theme for kinds that have no template file.
    #[must_use]
    pub fn with_fallback(mut self, theme: BuiltinTheme) -> Self {
        self.fallback = Some(theme);
        self
    }

    /// Returns the theme name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the templates root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the fallback theme, if any.
    pub fn fallback(&self) -> Option<BuiltinTheme> {
        self.fallback
    }

    /// Returns the file a kind is read from.
    pub fn template_path(&self, kind: TemplateKind) -> PathBuf {
        self.root
            .join(&self.name)
            .join(format!("{}.html", kind.stem()))
    }

    fn template_name(&self, kind: TemplateKind) -> String {
        format!("{}/{}.html", self.name, kind.stem())
    }

    fn resolve(&self, kind: TemplateKind) -> Result<Resolved> {
        if let Some(resolved) = self.cache.borrow().resolved.get(&kind) {
            return Ok(*resolved);
        }

        let path = self.template_path(kind);
        let resolved = match std::fs::read_to_string(&path) {
            Ok(source) => {
                self.cache
                    .borrow_mut()
                    .engine
                    .add_raw_template(&self.template_name(kind), &source)
                    .map_err(|e| FormError::TemplateParse {
                        template: path.display().to_string(),
                        message: tera_message(&e),
                    })?;
                debug!(theme = %self.name, path = %path.display(), "loaded template");
                Resolved::File
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => match self.fallback {
                Some(theme) => {
                    debug!(
                        theme = %self.name,
                        template = kind.stem(),
                        fallback = theme.name(),
                        "no template file, using fallback"
                    );
                    Resolved::Fallback(theme)
                }
                None => {
                    return Err(FormError::TemplateNotFound {
                        theme: self.name.clone(),
                        template: kind.stem().to_string(),
                    })
                }
            },
            Err(source) => return Err(FormError::TemplateRead { path, source }),
        };

        self.cache.borrow_mut().resolved.insert(kind, resolved);
        Ok(resolved)
    }

    /// Renders the template for `kind`, loading it first if needed.
    pub fn render(&self, kind: TemplateKind, context: &Context) -> Result<String> {
        match self.resolve(kind)? {
            Resolved::File => {
                let name = self.template_name(kind);
                self.cache
                    .borrow()
                    .engine
                    .render(&name, context)
                    .map_err(|e| FormError::Render {
                        message: tera_message(&e),
                        template: name,
                    })
            }
            Resolved::Fallback(theme) => theme.render(kind, context),
        }
    }
}

/// The template set a form renders with.
#[derive(Debug, Clone)]
pub enum Theme {
    /// One of the built-in themes.
    Builtin(BuiltinTheme),
    /// Templates read from a directory.
    Custom(CustomTheme),
}

impl Default for Theme {
    fn default() -> Self {
        Self::Builtin(BuiltinTheme::default())
    }
}

impl From<BuiltinTheme> for Theme {
    fn from(theme: BuiltinTheme) -> Self {
        Self::Builtin(theme)
    }
}

impl From<CustomTheme> for Theme {
    fn from(theme: CustomTheme) -> Self {
        Self::Custom(theme)
    }
}

impl Theme {
    /// Returns the theme name.
    pub fn name(&self) -> &str {
        match self {
            Self::Builtin(theme) => theme.name(),
            Self::Custom(theme) => theme.name(),
        }
    }

    /// Renders the template for `kind` with the given context.
    pub fn render(&self, kind: TemplateKind, context: &Context) -> Result<String> {
        match self {
            Self::Builtin(theme) => theme.render(kind, context),
            Self::Custom(theme) => theme.render(kind, context),
        }
    }
}
