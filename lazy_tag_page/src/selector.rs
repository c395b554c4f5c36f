// Copyright 2025 the Lazy Tag Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compound simple selectors: `div`, `#id`, `.class`, `*`, and combinations like `div#a.b`.
//!
//! Not supported, and matching nothing because the selector fails to parse:
//! - combinators, attribute selectors and pseudo-classes;
//! - identifiers outside ASCII letters, digits, `-` and `_` (`#café`) and CSS escapes.

use alloc::vec::Vec;

use crate::types::ElementNode;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Selector<'a> {
    tag: Option<&'a str>,
    ids: Vec<&'a str>,
    classes: Vec<&'a str>,
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

/// Split a leading identifier off `s`, returning `(ident, rest)`.
fn take_ident(s: &str) -> (&str, &str) {
    let end = s.find(|c: char| !is_ident_char(c)).unwrap_or(s.len());
    s.split_at(end)
}

impl<'a> Selector<'a> {
    pub(crate) fn parse(input: &'a str) -> Option<Self> {
        let mut rest = input.trim();
        if rest.is_empty() {
            return None;
        }
        let mut sel = Self::default();

        if let Some(after) = rest.strip_prefix('*') {
            rest = after;
        } else {
            let (tag, after) = take_ident(rest);
            if !tag.is_empty() {
                sel.tag = Some(tag);
                rest = after;
            }
        }

        while let Some(marker) = rest.chars().next() {
            let (ident, after) = take_ident(&rest[marker.len_utf8()..]);
            if ident.is_empty() {
                return None;
            }
            match marker {
                '#' => sel.ids.push(ident),
                '.' => sel.classes.push(ident),
                _ => return None,
            }
            rest = after;
        }
        Some(sel)
    }

    pub(crate) fn matches(&self, node: &ElementNode) -> bool {
        if let Some(tag) = self.tag
            && !tag.eq_ignore_ascii_case(&node.tag_name)
        {
            return false;
        }
        if !self.ids.iter().all(|id| node.id.as_deref() == Some(*id)) {
            return false;
        }
        self.classes
            .iter()
            .all(|class| node.classes.iter().any(|c| c == class))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node() -> ElementNode {
        ElementNode::new("div")
            .with_id("ad-slot")
            .with_class("lazy")
            .with_class("wide")
    }

    #[test]
    fn simple_forms_match() {
        let n = node();
        for s in ["div", "DIV", "#ad-slot", ".lazy", ".wide", "*", "div#ad-slot.lazy.wide"] {
            let sel = Selector::parse(s).unwrap();
            assert!(sel.matches(&n), "{s} should match");
        }
    }

    #[test]
    fn mismatches_are_rejected() {
        let n = node();
        for s in ["span", "#other", ".narrow", "div#ad-slot.narrow", "#ad-slot#other"] {
            let sel = Selector::parse(s).unwrap();
            assert!(!sel.matches(&n), "{s} should not match");
        }
    }

    #[test]
    fn unsupported_syntax_does_not_parse() {
        for s in [
            "", "   ", "div > p", "div p", "[data-x]", "a:hover", "#", ".", "#café", ".naïve", "é",
        ] {
            assert!(Selector::parse(s).is_none(), "{s:?} should not parse");
        }
    }
}
