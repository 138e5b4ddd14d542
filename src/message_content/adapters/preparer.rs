//! Default content preparer that links elements by name.

use crate::message_content::domain::{MessageElement, PreparedContent, StepId};
use crate::message_content::ports::ContentPreparer;

/// Content preparer that resolves element names in the text.
///
/// - Elements scoped to the step with `inline` display become the inlined set.
/// - Every occurrence of an element name is scanned for, longest names
///   first. When it names a scoped `side` or `page` element it is replaced by
///   a markdown link and the element joins the reference set once.
/// - The text is trimmed, and fenced as code when a non-empty language is given.
///
/// # Examples
///
/// ```
/// use chatview::message_content::adapters::ElementContentPreparer;
/// use chatview::message_content::domain::{ElementDisplay, MessageElement, StepId};
/// use chatview::message_content::ports::ContentPreparer;
///
/// let step = StepId::new("s1");
/// let elements = vec![
///     MessageElement::new("e1", "sales chart", ElementDisplay::Side).with_for_id(step.clone()),
/// ];
/// let prepared = ElementContentPreparer.prepare(&elements, &step, "See sales chart.", None);
/// assert_eq!(prepared.text, "See [sales chart](sales_chart).");
/// assert_eq!(prepared.ref_elements.len(), 1);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ElementContentPreparer;

impl ContentPreparer for ElementContentPreparer {
    fn prepare(
        &self,
        elements: &[MessageElement],
        step_id: &StepId,
        content: &str,
        language: Option<&str>,
    ) -> PreparedContent {
        let scoped: Vec<&MessageElement> = elements
            .iter()
            .filter(|element| element.is_scoped_to(step_id))
            .collect();
        let inlined_elements = scoped
            .iter()
            .filter(|element| !element.display.is_reference())
            .map(|element| (*element).clone())
            .collect();

        let mut ref_elements = Vec::new();
        let linked = link_element_names(content.trim(), elements, &scoped, &mut ref_elements);

        let text = match language {
            Some(tag) if !tag.is_empty() && !linked.is_empty() => {
                format!("```{tag}\n{linked}\n```")
            }
            _ => linked,
        };

        PreparedContent {
            text,
            inlined_elements,
            ref_elements,
        }
    }
}

fn link_element_names(
    text: &str,
    elements: &[MessageElement],
    scoped: &[&MessageElement],
    ref_elements: &mut Vec<MessageElement>,
) -> String {
    let mut names: Vec<&str> = elements
        .iter()
        .map(|element| element.name.as_str())
        .filter(|name| !name.is_empty())
        .collect();
    if names.is_empty() {
        return text.to_owned();
    }
    names.sort_by(|left, right| right.len().cmp(&left.len()).then_with(|| left.cmp(right)));
    names.dedup();

    let mut linked = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(next) = rest.chars().next() {
        let Some(name) = names.iter().copied().find(|name| rest.starts_with(name)) else {
            linked.push(next);
            rest = rest.get(next.len_utf8()..).unwrap_or_default();
            continue;
        };

        match scoped.iter().find(|element| element.name == name) {
            Some(element) if element.display.is_reference() => {
                if !ref_elements.iter().any(|known| known.id == element.id) {
                    ref_elements.push((*element).clone());
                }
                linked.push('[');
                linked.push_str(name);
                linked.push_str("](");
                linked.push_str(&name.replace(' ', "_"));
                linked.push(')');
            }
            _ => linked.push_str(name),
        }
        rest = rest.get(name.len()..).unwrap_or_default();
    }
    linked
}
