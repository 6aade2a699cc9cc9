//! Form rendering.
//!
//! Rendering runs in two passes. The element pass renders every field with the
//! template for its type, in registration order. The wrapper pass then renders
//! the form template around the concatenated elements. Nothing is cached
//! between calls.

use std::collections::BTreeMap;

use serde::Serialize;
use tera::Context;
use tracing::debug;

use crate::error::Result;
use crate::field::Field;
use crate::form::Form;
use crate::theme::{TemplateKind, Theme};

#[derive(Debug, Serialize)]
struct OptionContext<'a> {
    key: &'a str,
    value: &'a str,
    selected: bool,
}

#[derive(Debug, Serialize)]
struct AttributeContext<'a> {
    name: &'a str,
    value: &'a str,
}

/// Values a field template can substitute.
#[derive(Debug, Serialize)]
struct FieldContext<'a> {
    #[serde(rename = "type")]
    field_type: &'static str,
    name: &'a str,
    id: &'a str,
    value: &'a str,
    label: &'a str,
    placeholder: &'a str,
    help_text: &'a str,
    classes: String,
    label_classes: String,
    group_classes: String,
    style: String,
    attributes: Vec<AttributeContext<'a>>,
    options: Vec<OptionContext<'a>>,
}

impl<'a> FieldContext<'a> {
    fn new(field: &'a Field, default_group_classes: &'a [String]) -> Self {
        Self {
            field_type: field.field_type.as_str(),
            name: &field.name,
            id: &field.id,
            value: &field.value,
            label: &field.label,
            placeholder: &field.placeholder,
            help_text: &field.help_text,
            classes: field.classes.join(" "),
            label_classes: field.label_classes.join(" "),
            group_classes: field.effective_group_classes(default_group_classes).join(" "),
            style: style_declarations(&field.styles),
            attributes: field
                .attrs
                .iter()
                .map(|(name, value)| AttributeContext { name, value })
                .collect(),
            options: field
                .options
                .iter()
                .map(|option| OptionContext {
                    key: &option.key,
                    value: &option.value,
                    selected: option.key == field.value,
                })
                .collect(),
        }
    }
}

/// Values the wrapper template can substitute.
#[derive(Debug, Serialize)]
struct FormContext<'a> {
    name: &'a str,
    id: &'a str,
    method: &'a str,
    action: &'a str,
    classes: String,
    style: String,
    multipart: bool,
}

/// Joins CSS declarations into a `style` attribute value.
pub fn style_declarations(styles: &BTreeMap<String, String>) -> String {
    styles
        .iter()
        .map(|(property, value)| format!("{property}: {value};"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Renders a single field with a theme.
///
/// `default_group_classes` applies only when the field has no group classes
/// of its own.
///
/// # Errors
///
/// Returns an error if the theme has no usable template for the field type.
pub fn render_field(
    theme: &Theme,
    field: &Field,
    default_group_classes: &[String],
) -> Result<String> {
    let mut context = Context::new();
    context.insert("field", &FieldContext::new(field, default_group_classes));
    theme.render(TemplateKind::Field(field.field_type), &context)
}

/// Renders every field of the form, in registration order, without the
/// form wrapper.
///
/// # Errors
///
/// Stops at the first field whose template is missing or fails.
pub fn render_elements(form: &Form) -> Result<String> {
    let theme = form.theme();
    let mut html = String::new();
    for field in form.fields() {
        html.push_str(&render_field(theme, field, form.default_group_classes())?);
    }
    Ok(html)
}

/// Renders the whole form: every field inside the form wrapper.
///
/// # Errors
///
/// Returns the first template error from either pass.
pub fn render_form(form: &Form) -> Result<String> {
    debug!(
        form = %form.name(),
        theme = %form.theme().name(),
        fields = form.len(),
        "rendering form"
    );

    let elements = render_elements(form)?;

    let mut context = Context::new();
    context.insert(
        "form",
        &FormContext {
            name: form.name(),
            id: form.id(),
            method: form.method(),
            action: form.action(),
            classes: form.classes().join(" "),
            style: style_declarations(form.styles()),
            multipart: form.is_multipart(),
        },
    );
    context.insert("elements", &elements);
    form.theme().render(TemplateKind::Form, &context)
}
