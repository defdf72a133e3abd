use std::collections::HashMap;

/// Substitutes `{{ key }}` placeholders with values from `context`.
///
/// Whitespace inside the braces is ignored. Placeholders whose key is not in
/// `context`, and unterminated `{{`, are copied through unchanged.
pub fn render(template: &str, context: &HashMap<&str, String>) -> String {
  let mut output = String::with_capacity(template.len());
  let mut rest = template;

  while let Some(start) = rest.find("{{") {
    output.push_str(&rest[..start]);
    let after_open = &rest[start + 2..];

    let Some(end) = after_open.find("}}") else {
      output.push_str(&rest[start..]);
      return output;
    };

    let key = after_open[..end].trim();
    match context.get(key) {
      Some(value) => output.push_str(value),
      None => output.push_str(&rest[start..start + 2 + end + 2]),
    }

    rest = &after_open[end + 2..];
  }

  output.push_str(rest);
  output
}
