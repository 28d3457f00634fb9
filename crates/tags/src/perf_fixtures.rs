pub const BLOCK_TEMPLATE: &str =
    "<item id=\"1\">\n  <name>widget</name>\n  <tags><tag>a</tag><br/></tags>\n</item>\n";

/// A well-formed document of `blocks` items under one root.
pub fn make_blocks(blocks: usize) -> String {
    let mut xml = String::with_capacity(BLOCK_TEMPLATE.len() * blocks + 64);
    xml.push_str("<?xml version=\"1.0\"?>\n<catalog>\n");
    for _ in 0..blocks {
        xml.push_str(BLOCK_TEMPLATE);
    }
    xml.push_str("</catalog>\n");
    xml
}

/// `depth` nested opens followed by `depth` end tags that match nothing, so
/// every end tag searches the whole stack.
pub fn make_unmatched(depth: usize) -> String {
    let mut xml = String::with_capacity(depth * 16);
    for i in 0..depth {
        xml.push_str(&format!("<n{i}>\n"));
    }
    for i in 0..depth {
        xml.push_str(&format!("</m{i}>\n"));
    }
    xml
}

#[cfg(test)]
mod tests {
    use super::{make_blocks, make_unmatched};
    use crate::validate_str;

    #[test]
    fn blocks_are_well_formed() {
        assert!(validate_str(&make_blocks(16)).well_formed);
    }

    #[test]
    fn unmatched_reports_every_tag() {
        let outcome = validate_str(&make_unmatched(8));
        assert_eq!(outcome.diagnostics.len(), 16);
    }
}
