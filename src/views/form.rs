use super::escape;
use crate::forms::FieldErrors;
use crate::models::{Genre, US_STATES};

fn error_list(messages: &[String]) -> String {
    if messages.is_empty() {
        return String::new();
    }
    let items: String = messages
        .iter()
        .map(|m| format!("<li>{}</li>", escape(m)))
        .collect();
    format!(r#"<ul class="errors">{items}</ul>"#)
}

pub fn text_input(name: &str, label: &str, value: &str, errors: &FieldErrors) -> String {
    format!(
        r#"<div class="field">
  <label for="{name}">{label}</label>
  <input type="text" id="{name}" name="{name}" value="{value}">
  {errors}
</div>
"#,
        label = escape(label),
        value = escape(value),
        errors = error_list(errors.get(name)),
    )
}

pub fn textarea(name: &str, label: &str, value: &str, errors: &FieldErrors) -> String {
    format!(
        r#"<div class="field">
  <label for="{name}">{label}</label>
  <textarea id="{name}" name="{name}">{value}</textarea>
  {errors}
</div>
"#,
        label = escape(label),
        value = escape(value),
        errors = error_list(errors.get(name)),
    )
}

pub fn checkbox(name: &str, label: &str, checked: bool, errors: &FieldErrors) -> String {
    format!(
        r#"<div class="field">
  <input type="checkbox" id="{name}" name="{name}" value="y"{checked}>
  <label for="{name}">{label}</label>
  {errors}
</div>
"#,
        label = escape(label),
        checked = if checked { " checked" } else { "" },
        errors = error_list(errors.get(name)),
    )
}

fn select<'a, I>(
    name: &str,
    label: &str,
    options: I,
    selected: &[String],
    multiple: bool,
    errors: &FieldErrors,
) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let options: String = options
        .into_iter()
        .map(|option| {
            let mark = if selected.iter().any(|s| s == option) {
                " selected"
            } else {
                ""
            };
            format!(
                r#"<option value="{0}"{mark}>{0}</option>"#,
                escape(option)
            )
        })
        .collect();
    format!(
        r#"<div class="field">
  <label for="{name}">{label}</label>
  <select id="{name}" name="{name}"{multiple}>{options}</select>
  {errors}
</div>
"#,
        label = escape(label),
        multiple = if multiple { " multiple" } else { "" },
        errors = error_list(errors.get(name)),
    )
}

pub fn state_select(selected: &str, errors: &FieldErrors) -> String {
    select(
        "state",
        "State",
        US_STATES,
        &[selected.to_string()],
        false,
        errors,
    )
}

pub fn genre_select(selected: &[String], errors: &FieldErrors) -> String {
    select(
        "genres",
        "Genres",
        Genre::ALL.iter().map(|g| g.as_str()),
        selected,
        true,
        errors,
    )
}

/// Wraps rendered fields in a POST form with a heading and submit button.
pub fn form_page(heading: &str, action: &str, submit: &str, fields: &str) -> String {
    format!(
        r#"<h1>{heading}</h1>
<form method="post" action="{action}">
{fields}
  <button type="submit">{submit}</button>
</form>"#,
        heading = escape(heading),
        action = escape(action),
        submit = escape(submit),
    )
}
