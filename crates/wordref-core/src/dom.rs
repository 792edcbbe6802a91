/// Read-and-detach view over a parsed markup tree.
///
/// The parser never talks to a markup library directly; anything that can
/// answer these four questions can feed it. Selectors are the usual
/// `tag`, `.class` and `tag.class` forms.
pub trait DocumentNode: Clone {
    /// Descendant elements matching `selector`, in document order,
    /// excluding anything already detached.
    fn select(&self, selector: &str) -> Vec<Self>;

    /// Concatenated text of the subtree, minus detached parts.
    fn text(&self) -> String;

    /// Attribute value, `None` when the attribute is absent.
    fn attr(&self, name: &str) -> Option<String>;

    /// Detach the first descendant matching `selector` and return it.
    ///
    /// The detached subtree stays readable through the returned node but
    /// disappears from later `select` and `text` calls on its ancestors.
    fn detach_first(&self, selector: &str) -> Option<Self>;
}

/// Root of a parsed document.
pub trait Document {
    type Node: DocumentNode;

    /// Elements matching `selector` anywhere in the document.
    fn select(&self, selector: &str) -> Vec<Self::Node>;
}
