//! Rendering behavior shared by both built-in themes.

mod common;

use common::{position, profile_form};
use oxide_formkit::{BuiltinTheme, FieldType, Form, LogOutput};

fn each_theme(test: impl Fn(BuiltinTheme)) {
    for theme in BuiltinTheme::ALL {
        test(theme);
    }
}

#[test]
fn test_fields_render_in_registration_order() {
    each_theme(|theme| {
        let mut form = Form::new("f", "POST", "/");
        form.set_theme(theme);
        let names = ["zeta", "alpha", "mike", "bravo", "yankee"];
        for name in names {
            form.add(FieldType::Text, name, "");
        }

        let html = form.render().unwrap();
        let offsets: Vec<usize> = names
            .iter()
            .map(|name| position(&html, &format!(r#"name="{name}""#)))
            .collect();
        let mut sorted = offsets.clone();
        sorted.sort_unstable();
        assert_eq!(offsets, sorted, "{theme}: fields out of order");
    });
}

#[test]
fn test_mixed_field_types_keep_order() {
    each_theme(|theme| {
        let html = profile_form(theme).render().unwrap();
        let order = [
            r#"name="name""#,
            r#"name="age_range""#,
            r#"name="street""#,
            r#"name="city""#,
            r#"name="skill_1""#,
            r#"name="skill_3""#,
            r#"name="resume""#,
            r#"name="password""#,
            r#"name="pic""#,
            r#"name="legal""#,
            r#"name="id""#,
            r#"name="reset""#,
            r#"name="submit""#,
        ];
        let mut last = 0;
        for needle in order {
            let at = position(&html, needle);
            assert!(at >= last, "{theme}: {needle} rendered out of order");
            last = at;
        }
    });
}

#[test]
fn test_profile_scenario() {
    each_theme(|theme| {
        let mut form = Form::new("profile_form", "POST", "/goform");
        form.set_theme(theme);
        form.add_field("text", "name", "")
            .placeholder("What's your name");

        let html = form.render().unwrap();
        assert!(html.starts_with("<form"), "{theme}: {html}");
        assert!(html.contains(r#"method="POST" action="/goform""#), "{theme}: {html}");

        let input = position(&html, r#"<input type="text" name="name""#);
        assert!(input > position(&html, "<form"));
        assert!(input < position(&html, "</form>"));
        assert!(html.contains(r#"placeholder="What&#x27;s your name""#), "{theme}: {html}");
    });
}

#[test]
fn test_only_the_matching_option_is_selected() {
    each_theme(|theme| {
        let mut form = Form::new("f", "POST", "/");
        form.set_theme(theme);
        form.add_field("select", "city", "VEN").options([
            ("AMS", "Amsterdam"),
            ("VEN", "Venice"),
            ("KYO", "Kyoto"),
        ]);

        let html = form.render_elements().unwrap();
        assert_eq!(html.matches(" selected").count(), 1, "{theme}: {html}");
        assert!(html.contains(r#"<option value="VEN" selected>Venice</option>"#));
        assert!(html.contains(r#"<option value="AMS">Amsterdam</option>"#));
        assert!(html.contains(r#"<option value="KYO">Kyoto</option>"#));
    });
}

#[test]
fn test_only_the_matching_radio_is_checked() {
    each_theme(|theme| {
        let mut form = Form::new("f", "POST", "/");
        form.set_theme(theme);
        form.add_field("radio", "size", "m")
            .options([("s", "Small"), ("m", "Medium"), ("l", "Large")]);

        let html = form.render_elements().unwrap();
        assert_eq!(html.matches(" checked").count(), 1, "{theme}: {html}");
        assert!(html.contains(r#"value="m" checked"#), "{theme}: {html}");
    });
}

#[test]
fn test_no_option_selected_without_matching_value() {
    let mut form = Form::new("f", "POST", "/");
    form.add_field("select", "city", "PAR")
        .options([("AMS", "Amsterdam"), ("VEN", "Venice")]);
    assert!(!form.render_elements().unwrap().contains("selected"));
}

#[test]
fn test_rendering_twice_is_identical() {
    each_theme(|theme| {
        let form = profile_form(theme);
        let first = form.render().unwrap();
        let second = form.render().unwrap();
        assert_eq!(first, second);
        assert_eq!(form.render_elements().unwrap(), form.render_elements().unwrap());
    });
}

#[test]
fn test_rendering_reflects_later_mutations() {
    let mut form = Form::new("f", "POST", "/");
    form.add_field("text", "first", "");
    let before = form.render().unwrap();

    form.add_field("text", "second", "");
    let after = form.render().unwrap();

    assert!(!before.contains(r#"name="second""#));
    assert!(after.contains(r#"name="second""#));
    assert_eq!(after.matches(r#"name="first""#).count(), 1);
}

#[test]
fn test_elements_are_embedded_in_wrapper() {
    each_theme(|theme| {
        let form = profile_form(theme);
        let elements = form.render_elements().unwrap();
        let whole = form.render().unwrap();
        assert!(!elements.contains("<form"));
        assert!(whole.contains(&elements), "{theme}: wrapper does not embed elements");
    });
}

#[test]
fn test_default_group_classes_apply_once() {
    let mut form = Form::new("f", "POST", "/");
    form.add_default_group_class("col-md-12");
    form.add_default_group_class("mb-2");
    form.add_field("text", "name", "");

    for _ in 0..3 {
        let html = form.render().unwrap();
        assert!(html.contains(r#"<div id="group_name" class="col-md-12 mb-2">"#), "{html}");
        assert_eq!(html.matches("col-md-12").count(), 1);
    }
}

#[test]
fn test_own_group_classes_are_never_overridden() {
    let mut form = Form::new("f", "POST", "/");
    form.add_field("text", "before", "").group_class("col-md-4");
    form.add_default_group_class("col-md-12");
    form.add_field("text", "after", "").group_class("col-md-6");
    form.add_field("text", "plain", "");

    let html = form.render().unwrap();
    assert!(html.contains(r#"<div id="group_before" class="col-md-4">"#), "{html}");
    assert!(html.contains(r#"<div id="group_after" class="col-md-6">"#), "{html}");
    assert!(html.contains(r#"<div id="group_plain" class="col-md-12">"#), "{html}");
    assert_eq!(form.field_by_name("plain").unwrap().group_classes.len(), 0);
}

#[test]
fn test_html_theme_groups_only_when_classes_exist() {
    let mut form = Form::new("f", "POST", "/");
    form.set_theme(BuiltinTheme::Html);
    form.add_field("text", "bare", "");
    form.add_field("text", "grouped", "").group_class("inline");

    let html = form.render_elements().unwrap();
    assert!(!html.contains(r#"id="group_bare""#));
    assert!(html.contains(r#"<div id="group_grouped" class="inline">"#));
}

#[test]
fn test_rejected_fields_do_not_render() {
    let mut form = Form::new("f", "POST", "/");
    form.add_field("text", "city", "").placeholder("kept");
    form.add_field("text", "CITY", "").placeholder("dropped");
    form.add_field("colour", "tint", "");

    let html = form.render().unwrap();
    assert_eq!(html.matches(r#"name="city""#).count(), 1);
    assert!(html.contains("kept"));
    assert!(!html.contains("dropped"));
    assert!(!html.contains("tint"));
    assert_eq!(
        form.errors().output(LogOutput::Return),
        "city : field already exists\ncolour : field type does not exist\n"
    );
}

#[test]
fn test_unknown_type_adds_exactly_one_log_entry() {
    let mut form = Form::new("f", "POST", "/");
    form.add_field("text", "a", "");
    let before = form.fields().to_vec();

    form.add_field("datetime", "when", "").label("When").class("x");

    assert_eq!(form.fields(), before.as_slice());
    assert_eq!(form.errors().len(), 1);
    assert_eq!(form.errors().entries()[0].subject, "datetime");
}

#[test]
fn test_form_attributes_render() {
    each_theme(|theme| {
        let mut form = Form::new("upload", "POST", "/upload");
        form.set_theme(theme);
        form.set_id("upload-form")
            .set_multipart(true)
            .add_class("card")
            .add_class("p-3")
            .add_style("max-width", "40rem");

        let html = form.render().unwrap();
        assert!(html.contains(r#"name="upload""#));
        assert!(html.contains(r#"id="upload-form""#));
        assert!(html.contains(r#"enctype="multipart/form-data""#));
        assert!(html.contains(r#"class="card p-3""#));
        assert!(html.contains(r#"style="max-width: 40rem;""#));
    });
}

#[test]
fn test_values_are_escaped() {
    each_theme(|theme| {
        let mut form = Form::new("f", "POST", "/search?a=1&b=2");
        form.set_theme(theme);
        form.add_field("text", "q", r#""><script>alert(1)</script>"#)
            .label("<b>Query</b>");
        form.add_field("select", "kind", "")
            .option("a&b", "Fish & Chips");

        let html = form.render().unwrap();
        assert!(!html.contains("<script>"), "{theme}: {html}");
        assert!(!html.contains("<b>"), "{theme}: {html}");
        assert!(html.contains(r#"action="/search?a=1&amp;b=2""#));
        assert!(html.contains("&quot;&gt;&lt;script&gt;"));
        assert!(html.contains(r#"<option value="a&amp;b">Fish &amp; Chips</option>"#));
    });
}

#[test]
fn test_extra_attributes_and_styles_render() {
    each_theme(|theme| {
        let mut form = Form::new("f", "POST", "/");
        form.set_theme(theme);
        form.add_field("text", "street", "")
            .attr("maxlength", "20")
            .attr("autocomplete", "street-address")
            .style("color", "red")
            .style("font-weight", "bold");

        let html = form.render_elements().unwrap();
        assert!(
            html.contains(r#" autocomplete="street-address" maxlength="20""#),
            "{theme}: {html}"
        );
        assert!(html.contains(r#"style="color: red; font-weight: bold;""#), "{theme}: {html}");
    });
}

#[test]
fn test_bootstrap_row_splits_layout() {
    let mut form = Form::new("f", "POST", "/");
    form.add_field("text", "a", "");
    form.add_row("skills");
    form.add_field("text", "b", "");

    let html = form.render().unwrap();
    let row_main = position(&html, r#"<div class="row" id="row_main">"#);
    let row_skills = position(&html, r#"<div class="row" id="row_skills">"#);
    assert!(row_main < position(&html, r#"name="a""#));
    assert!(row_skills > position(&html, r#"name="a""#));
    assert!(row_skills < position(&html, r#"name="b""#));
    assert_eq!(html.matches("<div").count(), html.matches("</div>").count());
}

#[test]
fn test_bootstrap_classes() {
    let html = profile_form(BuiltinTheme::Bootstrap5).render().unwrap();
    assert!(html.contains(r#"class="btn btn-danger btn-lg""#));
    assert!(html.contains(r#"class="form-select""#));
    assert!(html.contains(r#"<div id="group_legal" class="form-check col-md-12 mb-2">"#));
    assert!(html.contains(
        r#"<small id="resumeHelp" class="form-text text-muted">Tell us about yourself</small>"#
    ));
    assert!(html.contains(r#"<input type="hidden" name="id" id="id" value="1">"#));
}

#[test]
fn test_html_theme_has_no_framework_classes() {
    let html = profile_form(BuiltinTheme::Html).render().unwrap();
    assert!(!html.contains("form-control"));
    assert!(!html.contains("form-select"));
    assert!(!html.contains("row_main"));
    assert!(html.contains("<br />"));
}

#[test]
fn test_profile_form_has_no_registration_errors() {
    let form = profile_form(BuiltinTheme::Bootstrap5);
    assert!(form.errors().is_empty(), "{}", form.errors());
    assert_eq!(form.len(), 17);
}

#[test]
fn test_button_labels_render() {
    each_theme(|theme| {
        let mut form = Form::new("f", "POST", "/");
        form.set_theme(theme);
        form.add_button("reset", "Reset")
            .label("Start over")
            .label_class("fw-bold");
        form.add_submit("save", "Save").label("Done?");
        form.add_submit("plain", "Go");

        let html = form.render_elements().unwrap();
        let reset_label = position(&html, ">Start over</label>");
        assert!(reset_label < position(&html, r#"<button type="button" name="reset""#));
        assert!(html.contains(r#"for="reset""#), "{theme}: {html}");
        assert!(html.contains("fw-bold"), "{theme}: {html}");
        assert!(html.contains(">Done?</label>"), "{theme}: {html}");
        assert!(!html.contains(r#"for="plain""#), "{theme}: {html}");
    });
}
