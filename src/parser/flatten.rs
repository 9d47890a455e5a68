use super::markup::MarkupElement;

enum Step<'a> {
    /// Flatten the descendants of every element in the slice
    Expand(&'a [MarkupElement]),
    /// Append the slice itself
    Emit(&'a [MarkupElement]),
}

/// Flatten a list of sibling elements and their whole subtrees.
///
/// For a list `L` the output is the flattened children of `L[0]`, then the
/// flattened children of `L[1]`, and so on, followed by `L` itself in
/// document order. Applied recursively this puts nested elements before
/// their ancestors and leaves the top-level siblings at the end:
///
/// `[A(A1, A2), B]` flattens to `[A1, A2, A, B]`.
///
/// Runs on an explicit stack so deeply nested layouts cannot overflow.
pub fn flatten_elements(elements: &[MarkupElement]) -> Vec<&MarkupElement> {
    let mut output = Vec::new();
    let mut steps = vec![Step::Expand(elements)];

    while let Some(step) = steps.pop() {
        match step {
            Step::Expand(siblings) => {
                if siblings.is_empty() {
                    continue;
                }
                steps.push(Step::Emit(siblings));
                for element in siblings.iter().rev() {
                    steps.push(Step::Expand(element.children()));
                }
            }
            Step::Emit(siblings) => output.extend(siblings.iter()),
        }
    }

    output
}
