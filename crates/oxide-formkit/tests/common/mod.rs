#![allow(dead_code)]

use oxide_formkit::{BuiltinTheme, Form, FieldOption};

pub fn cities() -> Vec<FieldOption> {
    vec![
        FieldOption::new("", "Choose your favorite city"),
        FieldOption::new("AMS", "Amsterdam"),
        FieldOption::new("VEN", "Venice"),
        FieldOption::new("KYO", "Kyoto"),
    ]
}

pub fn age_ranges() -> Vec<FieldOption> {
    vec![
        FieldOption::new("1", "1 - 9 yo"),
        FieldOption::new("2", "10 - 19 yo"),
        FieldOption::new("3", "20 - 29 yo"),
    ]
}

/// A profile form using every field type.
pub fn profile_form(theme: BuiltinTheme) -> Form {
    let mut form = Form::new("profile_form", "POST", "/goform");
    form.set_theme(theme);
    form.add_default_group_class("col-md-12");
    form.add_default_group_class("mb-2");

    form.add_field("label", "userdetails", "User profile")
        .style("font-size", "2em")
        .style("font-weight", "bold");
    form.add_field("textlabel", "username", "john@bender.com")
        .label("Your username:");
    form.add_field("text", "name", "")
        .label("What's your name")
        .placeholder("What's your name")
        .style("color", "red");
    form.add_field("radio", "age_range", "2")
        .label("Age range")
        .options(age_ranges());
    form.add_field("text", "street", "")
        .placeholder("Street")
        .attr("maxlength", "20")
        .group_class("col-md-4")
        .group_class("mb-2");
    form.add_field("select", "city", "VEN")
        .options(cities())
        .group_class("col-md-4");
    form.add_row("skills");
    for i in 1..=3 {
        form.add_field("text", &format!("skill_{i}"), "")
            .placeholder(format!("Skill {i}"))
            .group_class("col-md-6");
    }
    form.add_field("textarea", "resume", "Resume")
        .help_text("Tell us about yourself");
    form.add_field("password", "password", "")
        .label("Set new password")
        .placeholder("Set new password");
    form.add_field("file", "pic", "").label("Attach your photo");
    form.add_field("checkbox", "legal", "accepted")
        .label("Must read and accept Legal/Privacy");
    form.add_field("hidden", "id", "1");
    form.add_button("reset", "Reset");
    form.add_submit("submit", "Update profile")
        .class("btn-danger")
        .class("btn-lg");
    form
}

/// Byte offset of the first occurrence of `needle`, panicking if absent.
pub fn position(html: &str, needle: &str) -> usize {
    html.find(needle)
        .unwrap_or_else(|| panic!("{needle:?} not found in:\n{html}"))
}
