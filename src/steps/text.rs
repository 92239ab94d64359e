/// Strip markup tags from a step's display text for narration.
///
/// Tags become spaces and runs of whitespace collapse, so
/// `"a <strong>pure tone</strong>"` narrates as `"a pure tone"`.
pub fn strip_markup(markup: &str) -> String {
    let mut flat = String::with_capacity(markup.len());
    let mut in_tag = false;
    for ch in markup.chars() {
        match ch {
            '<' => {
                in_tag = true;
                flat.push(' ');
            }
            '>' if in_tag => in_tag = false,
            _ if in_tag => {}
            _ => flat.push(ch),
        }
    }
    flat.split_whitespace().collect::<Vec<_>>().join(" ")
}
