//! Declarative form definitions.
//!
//! A definition describes a form as data (usually JSON) and goes through the
//! same registration path as code, so invalid entries end up in the form's
//! error log rather than failing the whole load.
//!
//! ```json
//! {
//!   "name": "profile_form",
//!   "method": "POST",
//!   "action": "/goform",
//!   "theme": "html",
//!   "group_classes": ["col-md-12", "mb-2"],
//!   "fields": [
//!     { "type": "text", "name": "name", "placeholder": "What's your name" },
//!     { "type": "select", "name": "city", "value": "VEN",
//!       "options": [{ "key": "AMS", "value": "Amsterdam" }, { "key": "VEN", "value": "Venice" }] }
//!   ]
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::{FormError, Result};
use crate::field::FieldOption;
use crate::form::Form;

fn default_method() -> String {
    "POST".to_string()
}

/// A whole form.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FormDefinition {
    /// Form name (also the default id).
    pub name: String,
    /// HTTP method. Defaults to `POST`.
    #[serde(default = "default_method")]
    pub method: String,
    /// Action URL.
    #[serde(default)]
    pub action: String,
    /// Form id, if different from the name.
    #[serde(default)]
    pub id: Option<String>,
    /// Built-in theme name.
    #[serde(default)]
    pub theme: Option<String>,
    /// Whether to send as `multipart/form-data`.
    #[serde(default)]
    pub multipart: bool,
    /// Classes on the form element.
    #[serde(default)]
    pub classes: Vec<String>,
    /// Inline styles on the form element.
    #[serde(default)]
    pub styles: BTreeMap<String, String>,
    /// Default group classes for fields without their own.
    #[serde(default)]
    pub group_classes: Vec<String>,
    /// Fields, in render order.
    #[serde(default)]
    pub fields: Vec<FieldDefinition>,
}

/// One field of a [`FormDefinition`].
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldDefinition {
    /// Field type tag. Kept as a string so unknown tags are logged, not fatal.
    #[serde(rename = "type")]
    pub field_type: String,
    /// Field name.
    pub name: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub help_text: Option<String>,
    #[serde(default)]
    pub options: Vec<FieldOption>,
    #[serde(default)]
    pub classes: Vec<String>,
    #[serde(default)]
    pub label_classes: Vec<String>,
    #[serde(default)]
    pub group_classes: Vec<String>,
    #[serde(default)]
    pub styles: BTreeMap<String, String>,
    #[serde(default)]
    pub attrs: BTreeMap<String, String>,
}

impl FormDefinition {
    /// Parses a definition from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::Definition`] if the JSON does not match.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a definition file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| FormError::DefinitionRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Builds the form.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::UnknownTheme`] if the theme name is not a built-in
    /// theme. Field problems do not fail; they are recorded in
    /// [`Form::errors`].
    pub fn into_form(self) -> Result<Form> {
        let mut form = Form::new(self.name, self.method, self.action);
        if let Some(id) = self.id {
            form.set_id(id);
        }
        if let Some(theme) = &self.theme {
            form.set_theme_name(theme)?;
        }
        form.set_multipart(self.multipart);
        for class in self.classes {
            form.add_class(class);
        }
        for (property, value) in self.styles {
            form.add_style(&property, value);
        }
        for class in self.group_classes {
            form.add_default_group_class(class);
        }
        for field in self.fields {
            field.register(&mut form);
        }
        Ok(form)
    }
}

impl FieldDefinition {
    fn register(self, form: &mut Form) {
        let mut builder = form.add_field(&self.field_type, &self.name, self.value);
        if !builder.is_registered() {
            return;
        }

        if let Some(id) = self.id {
            builder = builder.id(&id);
        }
        if let Some(label) = self.label {
            builder = builder.label(label);
        }
        if let Some(placeholder) = self.placeholder {
            builder = builder.placeholder(placeholder);
        }
        if let Some(help_text) = self.help_text {
            builder = builder.help_text(help_text);
        }
        if !self.options.is_empty() {
            builder = builder.options(self.options);
        }
        for class in self.classes {
            builder = builder.class(class);
        }
        for class in self.label_classes {
            builder = builder.label_class(class);
        }
        for class in self.group_classes {
            builder = builder.group_class(class);
        }
        for (property, value) in self.styles {
            builder = builder.style(&property, value);
        }
        for (name, value) in self.attrs {
            builder = builder.attr(&name, value);
        }
    }
}
