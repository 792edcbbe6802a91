//! Hand-rolled element tree for exercising the parser without a real
//! markup backend. Supports just the selector forms the parser uses:
//! `tag`, `.class` and `tag.class`.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::dom::{Document, DocumentNode};

#[derive(Clone)]
pub struct TestNode(Rc<RefCell<NodeData>>);

struct NodeData {
    tag: String,
    attrs: HashMap<String, String>,
    text: String,
    children: Vec<TestNode>,
    detached: bool,
}

pub fn el(tag: &str) -> TestNode {
    TestNode(Rc::new(RefCell::new(NodeData {
        tag: tag.to_string(),
        attrs: HashMap::new(),
        text: String::new(),
        children: Vec::new(),
        detached: false,
    })))
}

impl TestNode {
    pub fn with_attr(self, name: &str, value: &str) -> Self {
        self.0
            .borrow_mut()
            .attrs
            .insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_text(self, text: &str) -> Self {
        self.0.borrow_mut().text = text.to_string();
        self
    }

    pub fn with_child(self, child: TestNode) -> Self {
        self.0.borrow_mut().children.push(child);
        self
    }

    fn matches(&self, selector: &Selector) -> bool {
        let data = self.0.borrow();
        let tag_ok = selector.tag.is_empty() || data.tag == selector.tag;
        let class_ok = selector.class.is_empty()
            || data
                .attrs
                .get("class")
                .is_some_and(|c| c.split_whitespace().any(|part| part == selector.class));
        tag_ok && class_ok
    }

    fn collect(&self, selector: &Selector, out: &mut Vec<TestNode>) {
        for child in &self.0.borrow().children {
            if child.0.borrow().detached {
                continue;
            }
            if child.matches(selector) {
                out.push(child.clone());
            }
            child.collect(selector, out);
        }
    }

    fn collect_text(&self, out: &mut String) {
        let data = self.0.borrow();
        out.push_str(&data.text);
        for child in &data.children {
            if child.0.borrow().detached {
                continue;
            }
            child.collect_text(out);
        }
    }
}

struct Selector {
    tag: String,
    class: String,
}

impl Selector {
    fn parse(selector: &str) -> Self {
        match selector.split_once('.') {
            Some((tag, class)) => Self {
                tag: tag.to_string(),
                class: class.to_string(),
            },
            None => Self {
                tag: selector.to_string(),
                class: String::new(),
            },
        }
    }
}

impl DocumentNode for TestNode {
    fn select(&self, selector: &str) -> Vec<Self> {
        let selector = Selector::parse(selector);
        let mut out = Vec::new();
        self.collect(&selector, &mut out);
        out
    }

    fn text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn attr(&self, name: &str) -> Option<String> {
        self.0.borrow().attrs.get(name).cloned()
    }

    fn detach_first(&self, selector: &str) -> Option<Self> {
        let first = DocumentNode::select(self, selector).into_iter().next()?;
        first.0.borrow_mut().detached = true;
        Some(first)
    }
}

impl Document for TestNode {
    type Node = TestNode;

    fn select(&self, selector: &str) -> Vec<TestNode> {
        DocumentNode::select(self, selector)
    }
}
