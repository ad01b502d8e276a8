use std::collections::HashSet;
use std::error::Error;

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use lazy_static::lazy_static;
use markup5ever_rcdom::{ Handle, NodeData, RcDom };
use reqwest::Client;

use crate::fetch_page::simple_get;

// The page where the list of mathematicians is found
pub const NAMES_URL: &str = "http://www.fabpedigree.com/james/mathmen.htm";

// Downloads the list page and returns the distinct names found in it,
// one per entry. Failing to get the page at all is fatal to the run,
// never an empty list.
pub async fn get_names(client: &Client) -> Result<Vec<String>, Box<dyn Error>> {
    match simple_get(client, NAMES_URL).await {
        Some(body) => Ok(extract_names(&body)),
        None => Err(format!("Error retrieving contents at {}", NAMES_URL).into()),
    }
}

// Parses the body as HTML and collects the trimmed text fragments found in
// list items. Duplicates collapse through a set, so the returned order is
// unspecified; downstream consumption does not depend on it.
pub fn extract_names(html: &str) -> Vec<String> {
    let parser: html5ever::Parser<RcDom> = parse_document(RcDom::default(), Default::default());
    let dom: RcDom = parser.one(html.to_string());

    let mut names: HashSet<String> = HashSet::new();
    collect_list_item_names(&dom.document, &mut names);
    names.into_iter().collect()
}

// Recursive DOM walk looking for list items
fn collect_list_item_names(handle: &Handle, names: &mut HashSet<String>) {
    let node = handle;
    match node.data {
        NodeData::Element { ref name, .. } if name.local.as_ref() == "li" => {
            let mut text: String = String::new();
            collect_visible_text(node, &mut text, &TAGS_WITH_LINE_BREAK);

            // Several names can share one list item, separated by line breaks
            for fragment in text.split('\n') {
                let fragment: &str = fragment.trim();
                if !fragment.is_empty() {
                    names.insert(fragment.to_string());
                }
            }
        }
        _ => {
            for child in node.children.borrow().iter() {
                collect_list_item_names(child, names);
            }
        }
    }
}

// Recursive function collecting the visible text under a node, with a
// newline after every tag in the passed set
fn collect_visible_text(
    handle: &Handle,
    result: &mut String,
    tags_with_line_break: &HashSet<&'static str>
) {
    let node = handle;
    match node.data {
        NodeData::Element { ref name, .. } => {
            let tag_name: &str = name.local.as_ref();
            if tag_name != "script" && tag_name != "style" {
                for child in node.children.borrow().iter() {
                    collect_visible_text(child, result, tags_with_line_break);
                }
                if tags_with_line_break.contains(tag_name) {
                    result.push('\n');
                }
            }
        }
        NodeData::Text { ref contents } => {
            let text = &contents.borrow();
            if !text.is_empty() {
                result.push_str(text);
            }
        }
        _ => {
            for child in node.children.borrow().iter() {
                collect_visible_text(child, result, tags_with_line_break);
            }
        }
    }
}

// Tags that end a name within a single list item
lazy_static! {
    static ref TAGS_WITH_LINE_BREAK: HashSet<&'static str> = {
        let mut set = HashSet::new();
        set.insert("br");
        set.insert("p");
        set.insert("div");
        set
    };
}

#[cfg(test)]
mod tests {
    use super::extract_names;

    #[test]
    fn duplicate_list_items_collapse() {
        let html =
            "<html><body><ol>\
            <li>Leonhard Euler</li>\
            <li> Leonhard Euler </li>\
            <li>Carl Gauss</li>\
            </ol></body></html>";
        let mut names = extract_names(html);
        names.sort();
        assert_eq!(names, vec!["Carl Gauss".to_string(), "Leonhard Euler".to_string()]);
    }

    #[test]
    fn names_split_on_line_breaks_within_one_item() {
        let html = "<ul><li>Isaac Newton<br>Carl Gauss<br> Euclid </li></ul>";
        let mut names = extract_names(html);
        names.sort();
        assert_eq!(
            names,
            vec!["Carl Gauss".to_string(), "Euclid".to_string(), "Isaac Newton".to_string()]
        );
    }

    #[test]
    fn whitespace_only_fragments_are_discarded() {
        let html = "<ul><li>  \n   \n </li><li>Archimedes</li></ul>";
        let names = extract_names(html);
        assert_eq!(names, vec!["Archimedes".to_string()]);
    }

    #[test]
    fn tolerates_unclosed_tags() {
        let html = "<ul><li>Pythagoras<li>Thales";
        let mut names = extract_names(html);
        names.sort();
        assert_eq!(names, vec!["Pythagoras".to_string(), "Thales".to_string()]);
    }

    #[test]
    fn no_list_items_means_no_names() {
        let html = "<html><body><p>Nothing listed here</p></body></html>";
        assert!(extract_names(html).is_empty());
    }
}
