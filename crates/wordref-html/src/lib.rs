//! `scraper`-backed implementation of the document accessor the parser
//! consumes.
//!
//! `scraper` trees are immutable, but the accessor contract includes
//! detaching subtrees (the parser pulls part-of-speech markers and header
//! rows out before reading what is left). Detachment is therefore modelled
//! as a shared exclusion set of node ids: detached nodes stay in the tree
//! but stop being visible to `select` and `text`.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use ego_tree::{NodeId, NodeRef};
use scraper::node::Node;
use scraper::{ElementRef, Html, Selector};
use wordref_core::{Document, DocumentNode};

type Removed = Rc<RefCell<HashSet<NodeId>>>;

/// A parsed page, ready to hand to `wordref_core::parse_translation`.
pub struct HtmlDocument {
    html: Rc<Html>,
    removed: Removed,
}

impl HtmlDocument {
    pub fn parse(html: &str) -> Self {
        Self {
            html: Rc::new(Html::parse_document(html)),
            removed: Rc::new(RefCell::new(HashSet::new())),
        }
    }
}

/// One element of a parsed page. Cheap to clone; all clones share the
/// document and its exclusion set.
#[derive(Clone)]
pub struct HtmlNode {
    html: Rc<Html>,
    id: NodeId,
    removed: Removed,
}

impl HtmlNode {
    fn node_ref(&self) -> Option<NodeRef<'_, Node>> {
        self.html.tree.get(self.id)
    }

    fn element(&self) -> Option<ElementRef<'_>> {
        self.node_ref().and_then(ElementRef::wrap)
    }

    fn wrap(&self, id: NodeId) -> HtmlNode {
        HtmlNode {
            html: Rc::clone(&self.html),
            id,
            removed: Rc::clone(&self.removed),
        }
    }

    /// Whether `node` sits in a detached subtree, looking no further up
    /// than this node itself. A detached node still sees its own content.
    fn hidden_below_self(&self, node: NodeRef<'_, Node>) -> bool {
        let removed = self.removed.borrow();
        let mut current = Some(node);
        while let Some(n) = current {
            if n.id() == self.id {
                return false;
            }
            if removed.contains(&n.id()) {
                return true;
            }
            current = n.parent();
        }
        false
    }

    fn collect_text(&self, node: NodeRef<'_, Node>, out: &mut String) {
        for child in node.children() {
            if self.removed.borrow().contains(&child.id()) {
                continue;
            }
            match child.value() {
                Node::Text(text) => out.push_str(&text.text),
                Node::Element(_) => self.collect_text(child, out),
                _ => {}
            }
        }
    }
}

fn compile(selector: &str) -> Option<Selector> {
    match Selector::parse(selector) {
        Ok(sel) => Some(sel),
        Err(err) => {
            tracing::warn!("unusable selector `{selector}`: {err:?}");
            None
        }
    }
}

impl DocumentNode for HtmlNode {
    fn select(&self, selector: &str) -> Vec<Self> {
        let Some(sel) = compile(selector) else {
            return Vec::new();
        };
        let Some(element) = self.element() else {
            return Vec::new();
        };
        element
            .select(&sel)
            .filter(|found| !self.hidden_below_self(**found))
            .map(|found| self.wrap(found.id()))
            .collect()
    }

    fn text(&self) -> String {
        let mut out = String::new();
        if let Some(node) = self.node_ref() {
            self.collect_text(node, &mut out);
        }
        out
    }

    fn attr(&self, name: &str) -> Option<String> {
        self.element()?.value().attr(name).map(str::to_string)
    }

    fn detach_first(&self, selector: &str) -> Option<Self> {
        let first = self.select(selector).into_iter().next()?;
        self.removed.borrow_mut().insert(first.id);
        Some(first)
    }
}

impl Document for HtmlDocument {
    type Node = HtmlNode;

    fn select(&self, selector: &str) -> Vec<HtmlNode> {
        let Some(sel) = compile(selector) else {
            return Vec::new();
        };
        let removed = self.removed.borrow();
        self.html
            .select(&sel)
            .filter(|found| {
                !std::iter::once(**found)
                    .chain(found.ancestors())
                    .any(|n| removed.contains(&n.id()))
            })
            .map(|found| HtmlNode {
                html: Rc::clone(&self.html),
                id: found.id(),
                removed: Rc::clone(&self.removed),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(html: &str) -> HtmlDocument {
        HtmlDocument::parse(html)
    }

    #[test]
    fn select_and_text() {
        let doc = doc(r#"<table class="WRD"><tr class="even"><td class="FrWrd"><strong>cuire</strong></td></tr></table>"#);
        let tables = doc.select("table.WRD");
        assert_eq!(tables.len(), 1);
        let cells = tables[0].select("td.FrWrd");
        assert_eq!(cells.len(), 1);
        assert_eq!(cells[0].text(), "cuire");
    }

    #[test]
    fn attr_presence_is_explicit() {
        let doc = doc(r#"<em class="POS2" lang="en">vtr</em>"#);
        let marker = &doc.select("em.POS2")[0];
        assert_eq!(marker.attr("lang").as_deref(), Some("en"));
        assert_eq!(marker.attr("title"), None);
    }

    #[test]
    fn detach_hides_subtree_from_text_and_select() {
        // Stray cells outside a table get dropped by the HTML5 tree builder,
        // so even small fixtures need the full table scaffolding.
        let doc = doc(r#"<table><tr><td class="FrWrd">cuire <em class="POS2">vtr</em></td></tr></table>"#);
        let cell = &doc.select("td.FrWrd")[0];

        let marker = cell.detach_first("em.POS2").unwrap();
        assert_eq!(marker.text(), "vtr");
        assert_eq!(cell.text().trim(), "cuire");
        assert!(cell.select("em.POS2").is_empty());
        assert!(cell.detach_first("em.POS2").is_none());
    }

    #[test]
    fn detached_node_keeps_its_own_subtree_readable() {
        let doc = doc(r#"<table><tr class="wrtopsection"><td><span class="ph" data-ph="sMainMeanings">Principal</span></td></tr></table>"#);
        let table = doc.select("table").into_iter().next().unwrap();
        let detached = table.detach_first("tr.wrtopsection").unwrap();
        assert!(doc.select("tr.wrtopsection").is_empty());

        let marker = detached.select(".ph");
        assert_eq!(marker.len(), 1);
        assert_eq!(
            marker[0].attr("data-ph").as_deref(),
            Some("sMainMeanings")
        );
    }

    #[test]
    fn document_select_skips_detached_rows() {
        let doc = doc(concat!(
            r#"<table class="WRD">"#,
            r#"<tr class="wrtopsection"><td>header</td></tr>"#,
            r#"<tr class="even"><td>data</td></tr>"#,
            "</table>",
        ));
        let table = doc.select("table.WRD").into_iter().next().unwrap();
        table.detach_first("tr.wrtopsection").unwrap();

        let rows = table.select("tr");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].attr("class").as_deref(), Some("even"));
        // Root-level selection agrees.
        assert_eq!(doc.select("tr").len(), 1);
    }
}
