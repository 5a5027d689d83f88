//! HTML page surfaces.
//!
//! Two handlebars templates cover the whole web UI: the credential form and
//! a generic message page used for validation failures, empty-scan results,
//! and region failure notes. Handlebars escapes every interpolated value, so
//! remote-derived text (error messages, service labels) cannot inject markup.

use crate::app::errors::RenderError;
use handlebars::Handlebars;
use once_cell::sync::Lazy;
use serde_json::json;

const INDEX_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>AWS Services Scanner</title>
    <style>
        body { font-family: Arial, sans-serif; margin: 20px; padding: 0; }
        form { width: 300px; margin-bottom: 20px; }
        label { font-weight: bold; margin-top: 10px; }
        input[type="text"], input[type="password"] { width: 100%; padding: 8px; margin-top: 5px; margin-bottom: 10px; }
        input[type="submit"] { padding: 10px 20px; background-color: #007bff; color: white; border: none; cursor: pointer; }
        input[type="submit"]:hover { background-color: #0056b3; }
    </style>
</head>
<body>

<h1>AWS Services Scanner</h1>

<form method="post" action="/scan">
    <label for="access_key">AWS Access Key:</label>
    <input type="text" id="access_key" name="access_key" required>

    <label for="secret_key">AWS Secret Key:</label>
    <input type="password" id="secret_key" name="secret_key" required>

    <label for="session_token">AWS Session Token (Optional):</label>
    <input type="text" id="session_token" name="session_token">

    <input type="submit" value="Scan AWS Services">
</form>

</body>
</html>
"#;

const MESSAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>{{title}}</title>
    <style>
        body { font-family: Arial, sans-serif; margin: 20px; padding: 0; }
        .note { margin: 4px 0; }
        a { color: #007bff; }
    </style>
</head>
<body>

<h1>{{title}}</h1>
{{#each notes}}
<p class="note">{{this}}</p>
{{/each}}
<p><a href="/">Back to scanner</a></p>

</body>
</html>
"#;

static TEMPLATES: Lazy<Handlebars<'static>> = Lazy::new(|| {
    let mut handlebars = Handlebars::new();
    handlebars
        .register_template_string("index", INDEX_TEMPLATE)
        .expect("index template is valid");
    handlebars
        .register_template_string("message", MESSAGE_TEMPLATE)
        .expect("message template is valid");
    handlebars
});

/// The credential form.
pub fn index_page() -> Result<String, RenderError> {
    let rendered = TEMPLATES.render("index", &json!({}))?;
    Ok(rendered)
}

/// A titled message page with zero or more note paragraphs. Every value is
/// escaped by the template engine.
pub fn message_page(title: &str, notes: &[String]) -> Result<String, RenderError> {
    let rendered = TEMPLATES.render(
        "message",
        &json!({
            "title": title,
            "notes": notes,
        }),
    )?;
    Ok(rendered)
}
