//! The form and its field registry.

use std::collections::BTreeMap;
use std::path::PathBuf;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::error::{ErrorLog, Result};
use crate::field::{normalize_name, Field, FieldHandle, FieldOption, FieldType};
use crate::render;
use crate::theme::{BuiltinTheme, CustomTheme, Theme};

static ATTRIBUTE_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z_:][A-Za-z0-9_:.-]*$").expect("Invalid attribute name regex")
});

static STYLE_PROPERTY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^-{0,2}[A-Za-z_][A-Za-z0-9_-]*$").expect("Invalid style property regex")
});

/// Attributes the templates write themselves. Setting them as extra
/// attributes would emit them twice.
const MANAGED_ATTRIBUTES: &[&str] = &[
    "type",
    "name",
    "id",
    "class",
    "style",
    "value",
    "placeholder",
];

/// An HTML form: identity, presentation and an ordered list of fields.
///
/// Fields are rendered in the order they were added. Registration problems
/// never abort construction; they are collected in [`Form::errors`].
#[derive(Debug, Clone)]
pub struct Form {
    name: String,
    id: String,
    method: String,
    action: String,
    multipart: bool,
    theme: Theme,
    fields: Vec<Field>,
    classes: Vec<String>,
    styles: BTreeMap<String, String>,
    default_group_classes: Vec<String>,
    errors: ErrorLog,
}

impl Form {
    /// Creates an empty form. The id defaults to the name and the theme to
    /// Bootstrap 5.
    pub fn new(
        name: impl Into<String>,
        method: impl Into<String>,
        action: impl Into<String>,
    ) -> Self {
        let name = name.into();
        Self {
            id: name.clone(),
            name,
            method: method.into(),
            action: action.into(),
            multipart: false,
            theme: Theme::default(),
            fields: Vec::new(),
            classes: Vec::new(),
            styles: BTreeMap::new(),
            default_group_classes: Vec::new(),
            errors: ErrorLog::new(),
        }
    }

    /// Returns the form name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the form id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the HTTP method.
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Returns the action URL.
    pub fn action(&self) -> &str {
        &self.action
    }

    /// Returns whether the form is sent as `multipart/form-data`.
    pub fn is_multipart(&self) -> bool {
        self.multipart
    }

    /// Returns the selected theme.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Returns the fields in registration order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns whether the form has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns the form element classes.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Returns the form element inline styles.
    pub fn styles(&self) -> &BTreeMap<String, String> {
        &self.styles
    }

    /// Returns the group classes used by fields that have none.
    pub fn default_group_classes(&self) -> &[String] {
        &self.default_group_classes
    }

    /// Returns the registration problems recorded so far.
    pub fn errors(&self) -> &ErrorLog {
        &self.errors
    }

    /// Sets the form id.
    pub fn set_id(&mut self, id: impl Into<String>) -> &mut Self {
        self.id = id.into();
        self
    }

    /// Selects the theme.
    pub fn set_theme(&mut self, theme: impl Into<Theme>) -> &mut Self {
        self.theme = theme.into();
        self
    }

    /// Selects a built-in theme by name (`html` or `bootstrap5`).
    ///
    /// # Errors
    ///
    /// Returns [`FormError::UnknownTheme`](crate::FormError::UnknownTheme) if
    /// no built-in theme has that name. The current theme is kept.
    pub fn set_theme_name(&mut self, name: &str) -> Result<&mut Self> {
        let theme: BuiltinTheme = name.parse()?;
        Ok(self.set_theme(theme))
    }

    /// Selects templates read from `<root>/<name>/<kind>.html`.
    pub fn set_custom_theme(
        &mut self,
        name: impl Into<String>,
        root: impl Into<PathBuf>,
    ) -> &mut Self {
        self.set_theme(CustomTheme::new(name, root))
    }

    /// Sends the form as `multipart/form-data`.
    pub fn set_multipart(&mut self, enabled: bool) -> &mut Self {
        self.multipart = enabled;
        self
    }

    /// Adds a class to the form element.
    pub fn add_class(&mut self, class: impl Into<String>) -> &mut Self {
        self.classes.push(class.into());
        self
    }

    /// Sets an inline style on the form element.
    pub fn add_style(&mut self, property: &str, value: impl Into<String>) -> &mut Self {
        if STYLE_PROPERTY.is_match(property) {
            self.styles.insert(property.to_string(), value.into());
        } else {
            let subject = self.name.clone();
            self.reject(subject, format!("invalid style property '{property}'"));
        }
        self
    }

    /// Adds a group class applied to every field without group classes of
    /// its own.
    pub fn add_default_group_class(&mut self, class: impl Into<String>) -> &mut Self {
        self.default_group_classes.push(class.into());
        self
    }

    /// Adds a field of a known type.
    ///
    /// The name is lowercased and stripped of whitespace, and becomes the
    /// field id as well. A name already used in this form is rejected and
    /// logged; the returned builder then ignores every setter.
    pub fn add(
        &mut self,
        field_type: FieldType,
        name: &str,
        value: impl Into<String>,
    ) -> FieldBuilder<'_> {
        let field = Field::new(field_type, name, value);

        let handle = if field.name.is_empty() {
            self.reject(field_type.as_str(), "field name is empty");
            None
        } else if self.handle_of(&field.name).is_some() {
            let subject = field.name.clone();
            self.reject(subject, "field already exists");
            None
        } else {
            debug!(form = %self.name, field = %field.name, field_type = %field_type, "added field");
            let handle = FieldHandle(self.fields.len());
            self.fields.push(field);
            Some(handle)
        };

        FieldBuilder { form: self, handle }
    }

    /// Adds a field whose type is given by its tag (`"text"`, `"select"`, ...).
    ///
    /// An unknown tag is logged and nothing is added.
    pub fn add_field(
        &mut self,
        field_type: &str,
        name: &str,
        value: impl Into<String>,
    ) -> FieldBuilder<'_> {
        match field_type.parse::<FieldType>() {
            Ok(field_type) => self.add(field_type, name, value),
            Err(_) => {
                self.reject(field_type, "field type does not exist");
                FieldBuilder {
                    form: self,
                    handle: None,
                }
            }
        }
    }

    /// Adds a row break.
    pub fn add_row(&mut self, name: &str) -> FieldBuilder<'_> {
        self.add(FieldType::Row, name, "")
    }

    /// Adds a plain button showing `text`.
    pub fn add_button(&mut self, name: &str, text: impl Into<String>) -> FieldBuilder<'_> {
        self.add(FieldType::Button, name, text)
    }

    /// Adds a submit button showing `text`.
    pub fn add_submit(&mut self, name: &str, text: impl Into<String>) -> FieldBuilder<'_> {
        self.add(FieldType::Submit, name, text)
    }

    /// Returns the field behind a handle.
    pub fn field(&self, handle: FieldHandle) -> Option<&Field> {
        self.fields.get(handle.0)
    }

    /// Returns a builder for further changes to a field.
    pub fn field_mut(&mut self, handle: FieldHandle) -> Option<FieldBuilder<'_>> {
        if handle.0 < self.fields.len() {
            Some(FieldBuilder {
                form: self,
                handle: Some(handle),
            })
        } else {
            None
        }
    }

    /// Looks a field up by name. The name is normalized first.
    pub fn field_by_name(&self, name: &str) -> Option<&Field> {
        self.handle_of(&normalize_name(name))
            .and_then(|handle| self.field(handle))
    }

    /// Returns the handle of the field with this (normalized) name.
    pub fn handle_of(&self, name: &str) -> Option<FieldHandle> {
        self.fields
            .iter()
            .position(|field| field.name == name)
            .map(FieldHandle)
    }

    /// Renders the whole form.
    ///
    /// # Errors
    ///
    /// Returns an error if a template is missing, unreadable or fails to render.
    pub fn render(&self) -> Result<String> {
        render::render_form(self)
    }

    /// Renders the fields only, without the form wrapper.
    ///
    /// # Errors
    ///
    /// Returns an error if a field template is missing, unreadable or fails to
    /// render.
    pub fn render_elements(&self) -> Result<String> {
        render::render_elements(self)
    }

    fn reject(&mut self, subject: impl Into<String>, message: impl Into<String>) {
        let subject = subject.into();
        let message = message.into();
        debug!(form = %self.name, subject = %subject, "rejected: {message}");
        self.errors.add(subject, message);
    }
}

/// Fluent access to one field of a [`Form`].
///
/// Returned by the `add*` methods and [`Form::field_mut`]. When the field was
/// rejected at registration the builder has no handle and every setter does
/// nothing. Single-valued setters replace, list setters append.
#[derive(Debug)]
pub struct FieldBuilder<'a> {
    form: &'a mut Form,
    handle: Option<FieldHandle>,
}

impl FieldBuilder<'_> {
    /// Returns the handle of the field, or `None` if it was rejected.
    pub fn handle(&self) -> Option<FieldHandle> {
        self.handle
    }

    /// Returns whether the field was registered.
    pub fn is_registered(&self) -> bool {
        self.handle.is_some()
    }

    fn update(self, f: impl FnOnce(&mut Field)) -> Self {
        if let Some(field) = self.handle.and_then(|h| self.form.fields.get_mut(h.0)) {
            f(field);
        }
        self
    }

    fn field_name(&self) -> Option<String> {
        self.handle
            .and_then(|h| self.form.fields.get(h.0))
            .map(|field| field.name.clone())
    }

    /// Sets the element id. The id is normalized like a name.
    pub fn id(self, id: &str) -> Self {
        let id = normalize_name(id);
        self.update(|field| field.id = id)
    }

    /// Sets the label text.
    pub fn label(self, label: impl Into<String>) -> Self {
        let label = label.into();
        self.update(|field| field.label = label)
    }

    /// Sets the placeholder text.
    pub fn placeholder(self, placeholder: impl Into<String>) -> Self {
        let placeholder = placeholder.into();
        self.update(|field| field.placeholder = placeholder)
    }

    /// Sets the help text.
    pub fn help_text(self, help_text: impl Into<String>) -> Self {
        let help_text = help_text.into();
        self.update(|field| field.help_text = help_text)
    }

    /// Sets the value.
    pub fn value(self, value: impl Into<String>) -> Self {
        let value = value.into();
        self.update(|field| field.value = value)
    }

    /// Replaces the options.
    pub fn options<I>(self, options: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<FieldOption>,
    {
        let options: Vec<FieldOption> = options.into_iter().map(Into::into).collect();
        self.update(|field| field.options = options)
    }

    /// Appends one option.
    pub fn option(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let option = FieldOption::new(key, value);
        self.update(|field| field.options.push(option))
    }

    /// Adds a class to the control element.
    pub fn class(self, class: impl Into<String>) -> Self {
        let class = class.into();
        self.update(|field| field.classes.push(class))
    }

    /// Adds a class to the field label.
    pub fn label_class(self, class: impl Into<String>) -> Self {
        let class = class.into();
        self.update(|field| field.label_classes.push(class))
    }

    /// Adds a class to the group container. A field with its own group
    /// classes no longer receives the form defaults.
    pub fn group_class(self, class: impl Into<String>) -> Self {
        let class = class.into();
        self.update(|field| field.group_classes.push(class))
    }

    /// Sets an inline style declaration, e.g. `("color", "red")`.
    pub fn style(self, property: &str, value: impl Into<String>) -> Self {
        if STYLE_PROPERTY.is_match(property) {
            let value = value.into();
            let property = property.to_string();
            return self.update(|field| {
                field.styles.insert(property, value);
            });
        }
        self.reject_key(format!("invalid style property '{property}'"))
    }

    /// Sets an extra HTML attribute, e.g. `("maxlength", "20")`.
    ///
    /// Attributes written by the templates themselves (`name`, `id`, `class`,
    /// `style`, `type`, `value`, `placeholder`) have dedicated setters and are
    /// refused here.
    pub fn attr(self, name: &str, value: impl Into<String>) -> Self {
        if !ATTRIBUTE_NAME.is_match(name) {
            return self.reject_key(format!("invalid attribute name '{name}'"));
        }
        if MANAGED_ATTRIBUTES.contains(&name.to_ascii_lowercase().as_str()) {
            return self.reject_key(format!("attribute '{name}' has its own setter"));
        }
        let value = value.into();
        let name = name.to_string();
        self.update(|field| {
            field.attrs.insert(name, value);
        })
    }

    fn reject_key(self, message: String) -> Self {
        if let Some(subject) = self.field_name() {
            self.form.reject(subject, message);
        }
        self
    }
}
