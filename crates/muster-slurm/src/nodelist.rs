//! Expand compact SLURM node-list specifications.
//!
//! A specification is a basename followed by an optional bracketed range
//! list: `node[01-03,07]` names `node01`, `node02`, `node03`, `node07`.
//! Without a bracket the whole string is a single literal hostname.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NodeListError {
    #[error("Unclosed '[' in node list: {0}")]
    UnclosedBracket(String),
    #[error("Invalid range bound '{bound}' in node list: {spec}")]
    InvalidBound { spec: String, bound: String },
    #[error("Inverted range {low}-{high} in node list: {spec}")]
    InvertedRange { spec: String, low: u32, high: u32 },
}

/// Parse one side of a `low-high` range item.
fn parse_bound(spec: &str, bound: &str) -> Result<u32, NodeListError> {
    bound.parse().map_err(|_| NodeListError::InvalidBound {
        spec: spec.to_string(),
        bound: bound.to_string(),
    })
}

/// Expand a node-list specification into explicit hostnames.
///
/// Range-expanded numbers are zero-padded to at least two digits
/// (`node[1-3]` gives `node01`..`node03`), matching SLURM's usual
/// fixed-width node numbering. Single tokens are appended to the
/// basename verbatim, so `node[1,3]` gives `node1` and `node3`.
///
/// Output order follows the range list left to right, ascending within
/// each range. Only the first `[...]` block is recognized; nested
/// brackets are not supported.
pub fn expand(raw: &str) -> Result<Vec<String>, NodeListError> {
    let Some(open) = raw.find('[') else {
        // No suffix at all: a single literal hostname.
        return Ok(vec![raw.to_string()]);
    };

    let basename = &raw[..open];
    let close = raw[open..]
        .find(']')
        .ok_or_else(|| NodeListError::UnclosedBracket(raw.to_string()))?
        + open;

    let mut nodes = Vec::new();
    for item in raw[open + 1..close].split(',') {
        match item.split_once('-') {
            Some((lo, hi)) => {
                let low = parse_bound(raw, lo)?;
                let high = parse_bound(raw, hi)?;
                if low > high {
                    return Err(NodeListError::InvertedRange {
                        spec: raw.to_string(),
                        low,
                        high,
                    });
                }
                for n in low..=high {
                    nodes.push(format!("{}{:02}", basename, n));
                }
            }
            None => nodes.push(format!("{}{}", basename, item)),
        }
    }

    Ok(nodes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_name_passthrough() {
        assert_eq!(expand("gpu7").unwrap(), vec!["gpu7"]);
        assert_eq!(expand("login-a").unwrap(), vec!["login-a"]);
    }

    #[test]
    fn test_expand_range() {
        assert_eq!(
            expand("node[01-03]").unwrap(),
            vec!["node01", "node02", "node03"]
        );
    }

    #[test]
    fn test_range_width_normalized() {
        // Unpadded bounds still come out two digits wide.
        assert_eq!(
            expand("node[1-3]").unwrap(),
            vec!["node01", "node02", "node03"]
        );
    }

    #[test]
    fn test_wide_range_keeps_natural_width() {
        assert_eq!(expand("node[100-101]").unwrap(), vec!["node100", "node101"]);
    }

    #[test]
    fn test_single_tokens_verbatim() {
        assert_eq!(
            expand("node[01,03,05]").unwrap(),
            vec!["node01", "node03", "node05"]
        );
        // No re-padding of single tokens.
        assert_eq!(expand("node[1,3]").unwrap(), vec!["node1", "node3"]);
    }

    #[test]
    fn test_mixed_ranges_and_singles() {
        assert_eq!(
            expand("node[01-03,07]").unwrap(),
            vec!["node01", "node02", "node03", "node07"]
        );
    }

    #[test]
    fn test_single_element_range() {
        assert_eq!(expand("node[05-05]").unwrap(), vec!["node05"]);
    }

    #[test]
    fn test_unclosed_bracket() {
        assert!(matches!(
            expand("node[01-03"),
            Err(NodeListError::UnclosedBracket(_))
        ));
    }

    #[test]
    fn test_invalid_range_bound() {
        assert!(matches!(
            expand("node[1-x]"),
            Err(NodeListError::InvalidBound { .. })
        ));
        // A bare '-' leaves an empty low bound.
        assert!(matches!(
            expand("node[-5]"),
            Err(NodeListError::InvalidBound { .. })
        ));
    }

    #[test]
    fn test_inverted_range() {
        assert!(matches!(
            expand("node[3-1]"),
            Err(NodeListError::InvertedRange { low: 3, high: 1, .. })
        ));
    }
}
