use crate::types::config::Config;
use tracing::{debug, warn};

const DELIMITER: &str = "---";

fn is_delimiter(line: &str) -> bool {
    line.trim_end_matches(['\r', '\n']) == DELIMITER
}

/// Split a leading `---` block from `text`. Returns the block body and the
/// remaining content, or `None` when the text has no complete front matter.
pub fn split_front_matter(text: &str) -> Option<(&str, &str)> {
    let mut lines = text.split_inclusive('\n');
    let first = lines.next()?;
    if !is_delimiter(first) {
        return None;
    }

    let body_start = first.len();
    let mut offset = body_start;
    for line in lines {
        if is_delimiter(line) {
            let body = &text[body_start..offset];
            let rest = &text[offset + line.len()..];
            return Some((body, rest));
        }
        offset += line.len();
    }
    None
}

/// Strip front matter from `text`, merging it into `output`. Malformed YAML
/// merges nothing; the block is still removed.
pub fn apply_front_matter<'a>(text: &'a str, output: &mut Config) -> &'a str {
    let Some((block, rest)) = split_front_matter(text) else {
        return text;
    };

    match Config::from_yaml_str(block) {
        Ok(front) => {
            debug!(keys = front.mapping().len(), "merging front matter");
            output.deep_merge(&front);
        }
        Err(e) => warn!("ignoring malformed front matter: {:#}", e),
    }
    rest
}
