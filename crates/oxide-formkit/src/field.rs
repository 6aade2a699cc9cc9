//! Field types and field data.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FormError;

/// The kind of control (or decoration) a field renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldType {
    /// A standalone label showing the field value.
    Label,
    /// Single-line text input.
    Text,
    /// Read-only value next to a label.
    TextLabel,
    /// Password input.
    Password,
    /// Dropdown select.
    Select,
    /// Radio button group.
    Radio,
    /// Multi-line text input.
    Textarea,
    /// Checkbox.
    Checkbox,
    /// File upload.
    File,
    /// Hidden input.
    Hidden,
    /// Plain button.
    Button,
    /// Submit button.
    Submit,
    /// Layout break between groups of fields.
    Row,
}

impl FieldType {
    /// Every field type, in declaration order.
    pub const ALL: [Self; 13] = [
        Self::Label,
        Self::Text,
        Self::TextLabel,
        Self::Password,
        Self::Select,
        Self::Radio,
        Self::Textarea,
        Self::Checkbox,
        Self::File,
        Self::Hidden,
        Self::Button,
        Self::Submit,
        Self::Row,
    ];

    /// Returns the lowercase tag for this type.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Label => "label",
            Self::Text => "text",
            Self::TextLabel => "textlabel",
            Self::Password => "password",
            Self::Select => "select",
            Self::Radio => "radio",
            Self::Textarea => "textarea",
            Self::Checkbox => "checkbox",
            Self::File => "file",
            Self::Hidden => "hidden",
            Self::Button => "button",
            Self::Submit => "submit",
            Self::Row => "row",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldType {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| FormError::UnknownFieldType(s.to_string()))
    }
}

/// A key/display pair for select and radio fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldOption {
    /// Submitted value.
    pub key: String,
    /// Text shown to the user.
    pub value: String,
}

impl FieldOption {
    /// Creates a new option.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl<K: Into<String>, V: Into<String>> From<(K, V)> for FieldOption {
    fn from((key, value): (K, V)) -> Self {
        Self::new(key, value)
    }
}

/// Stable reference to a registered field.
///
/// Fields are never removed or reordered, so a handle stays valid for the
/// lifetime of the form that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldHandle(pub(crate) usize);

impl FieldHandle {
    /// Returns the registration position of the field (0-based).
    pub fn index(self) -> usize {
        self.0
    }
}

/// One field of a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Field type.
    pub field_type: FieldType,
    /// Normalized name, unique within the form.
    pub name: String,
    /// Element id. Defaults to the name.
    pub id: String,
    /// Current value.
    pub value: String,
    /// Label text.
    pub label: String,
    /// Placeholder text.
    pub placeholder: String,
    /// Help text shown under the control.
    pub help_text: String,
    /// Options for select and radio fields.
    pub options: Vec<FieldOption>,
    /// Classes on the control element.
    pub classes: Vec<String>,
    /// Classes on the field's label.
    pub label_classes: Vec<String>,
    /// Classes on the layout container. Empty means "use the form default".
    pub group_classes: Vec<String>,
    /// Inline CSS declarations.
    pub styles: BTreeMap<String, String>,
    /// Extra HTML attributes on the control element.
    pub attrs: BTreeMap<String, String>,
}

impl Field {
    /// Creates a field with a normalized name used as its id.
    pub fn new(field_type: FieldType, name: &str, value: impl Into<String>) -> Self {
        let name = normalize_name(name);
        Self {
            field_type,
            id: name.clone(),
            name,
            value: value.into(),
            label: String::new(),
            placeholder: String::new(),
            help_text: String::new(),
            options: Vec::new(),
            classes: Vec::new(),
            label_classes: Vec::new(),
            group_classes: Vec::new(),
            styles: BTreeMap::new(),
            attrs: BTreeMap::new(),
        }
    }

    /// Returns the group classes to render, falling back to `default` when
    /// the field has none of its own.
    pub fn effective_group_classes<'a>(&'a self, default: &'a [String]) -> &'a [String] {
        if self.group_classes.is_empty() {
            default
        } else {
            &self.group_classes
        }
    }
}

/// Lowercases a name and strips all whitespace from it.
pub fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}
