use zero::renderer::{substitute, PlaceholderRenderer, Substitutions, TemplateRenderer};

fn values(pairs: &[(&str, &str)]) -> Substitutions {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_substitute_replaces_every_occurrence() {
    let result = substitute("{{name}} and {{name}} again", &values(&[("name", "foo")]));
    assert_eq!(result, "foo and foo again");
}

#[test]
fn test_unknown_placeholder_is_kept() {
    let result = substitute("{{name}}: {{unknown}}", &values(&[("name", "foo")]));
    assert_eq!(result, "foo: {{unknown}}");
}

#[test]
fn test_whitespace_inside_braces() {
    let result = substitute("{{ name }}", &values(&[("name", "foo")]));
    assert_eq!(result, "foo");
}

#[test]
fn test_non_identifier_braces_are_untouched() {
    let text = "const x = {{}}; {{ a.b }} {{1abc}} ${PORT} {name}";
    let values = values(&[("name", "foo"), ("1abc", "bar")]);
    assert_eq!(substitute(text, &values), text);
}

#[test]
fn test_values_are_not_rescanned() {
    let result = substitute("{{a}}", &values(&[("a", "{{b}}"), ("b", "nope")]));
    assert_eq!(result, "{{b}}");
}

#[test]
fn test_placeholder_renderer() {
    let renderer = PlaceholderRenderer::new();
    let result = renderer.render("# {{title}}", &values(&[("title", "My App")]));
    assert_eq!(result, "# My App");
}
