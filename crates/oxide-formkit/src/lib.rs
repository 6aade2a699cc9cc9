//! # oxide-formkit
//!
//! Declarative HTML form construction with themed templates.
//!
//! This crate provides:
//! - An ordered field registry with fluent field configuration
//! - Plain HTML and Bootstrap 5 themes covering every field type
//! - Custom themes loaded from a templates directory
//! - JSON form definitions
//!
//! ## Quick Start
//!
//! ```rust
//! use oxide_formkit::Form;
//!
//! let mut form = Form::new("profile_form", "POST", "/goform");
//! form.add_default_group_class("col-md-12");
//!
//! form.add_field("text", "name", "")
//!     .label("Name")
//!     .placeholder("Your name")
//!     .style("color", "red");
//!
//! form.add_field("select", "city", "VEN")
//!     .options([("AMS", "Amsterdam"), ("VEN", "Venice")])
//!     .group_class("col-md-4");
//!
//! form.add_submit("save", "Update profile").class("btn-primary");
//!
//! let html = form.render().unwrap();
//! assert!(html.contains(r#"method="POST" action="/goform""#));
//! assert!(html.contains(r#"<option value="VEN" selected>Venice</option>"#));
//! ```
//!
//! ## Registration errors
//!
//! Unknown field types and duplicate names do not abort construction. The
//! offending field is skipped and the problem is recorded on the form.
//!
//! ```rust
//! use oxide_formkit::{Form, LogOutput};
//!
//! let mut form = Form::new("f", "POST", "/");
//! form.add_field("slider", "volume", "");
//! form.add_field("text", "city", "");
//! form.add_field("text", "City", "");
//!
//! assert_eq!(form.len(), 1);
//! assert_eq!(
//!     form.errors().output(LogOutput::Return),
//!     "slider : field type does not exist\ncity : field already exists\n",
//! );
//! ```
//!
//! ## Themes
//!
//! ```rust
//! use oxide_formkit::{BuiltinTheme, CustomTheme, Form};
//!
//! let mut form = Form::new("f", "POST", "/");
//! form.set_theme(BuiltinTheme::Html);
//!
//! // Templates from ./templates/corporate/<kind>.html, built-ins for the rest.
//! form.set_theme(
//!     CustomTheme::new("corporate", "templates").with_fallback(BuiltinTheme::Bootstrap5),
//! );
//! ```
//!
//! All substituted values are HTML-escaped.

pub mod definition;
mod error;
mod field;
mod form;
pub mod render;
pub mod theme;

pub use definition::{FieldDefinition, FormDefinition};
pub use error::{ErrorLog, FormError, LogEntry, LogOutput, Result};
pub use field::{normalize_name, Field, FieldHandle, FieldOption, FieldType};
pub use form::{FieldBuilder, Form};
pub use theme::{BuiltinTheme, CustomTheme, TemplateKind, Theme};
