//! Input normalization
//!
//! Parses and validates raw textual parameters into bounded, structured input
//! values. Each accepted shape has its own entry point:
//!
//! - [`parse_array`]: flat number list — `"[-2,1,-3,4]"` or `"-2,1,-3,4"`
//! - [`parse_tree`]: level-order tree list with `null` gaps
//! - [`parse_list`]: linked-list values plus an optional cycle-entry index
//! - [`parse_paired`]: two lists with declared join offsets into a shared tail
//! - [`parse_random`]: value + random-index pairs — `"[[7,null],[13,0]]"`
//! - [`parse_rotation`] / [`parse_kth`]: scalar parameters
//!
//! Normalization is a pure validating transform: on failure it returns a
//! descriptive [`InputError`] and nothing downstream is touched. Every
//! structural parameter is range-checked here so the structure builders can be
//! infallible, and element values are bounded by [`MAX_VALUE_MAGNITUDE`] so
//! the generators can sum freely without i64 overflow.

pub mod errors;

pub use errors::InputError;

/// Per-kind node-count ceilings
pub const MAX_ARRAY_LEN: usize = 41;
pub const MAX_TREE_NODES: usize = 31;
pub const MAX_LIST_NODES: usize = 24;
pub const MAX_INTERSECT_NODES: usize = 16;
pub const MAX_RANDOM_NODES: usize = 12;

/// Element-value magnitude bound. Together with the node-count ceilings this
/// keeps every sum a generator can form over one structure inside i64 range.
pub const MAX_VALUE_MAGNITUDE: i64 = 1_000_000_000_000;

/// A validated flat number list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayInput {
    pub values: Vec<i64>,
}

/// A validated level-order tree description; `None` slots are the null gaps
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeInput {
    pub slots: Vec<Option<i64>>,
}

/// Validated linked-list values plus an optional cycle entry position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListInput {
    pub values: Vec<i64>,
    pub cycle: Option<usize>,
}

/// Two validated lists with join offsets into a shared tail
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairedListsInput {
    pub a: Vec<i64>,
    pub b: Vec<i64>,
    pub skip_a: usize,
    pub skip_b: usize,
}

/// Validated value + random-target pairs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomListInput {
    pub entries: Vec<(i64, Option<usize>)>,
}

/// Strip one optional pair of surrounding brackets
fn strip_brackets(raw: &str) -> &str {
    let trimmed = raw.trim();
    match trimmed.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
        Some(inner) => inner,
        None => trimmed,
    }
}

/// Split a bracket-stripped literal into trimmed comma-separated tokens
fn split_tokens(inner: &str) -> Vec<&str> {
    if inner.trim().is_empty() {
        return Vec::new();
    }
    inner.split(',').map(str::trim).collect()
}

fn parse_number(token: &str) -> Result<i64, InputError> {
    token.parse::<i64>().map_err(|_| InputError::BadToken {
        token: token.to_string(),
        expected: "a number",
    })
}

/// Parse an element value and enforce the magnitude bound; indices and other
/// scalar parameters go through [`parse_number`] directly.
fn parse_value(token: &str) -> Result<i64, InputError> {
    let value = parse_number(token)?;
    if value > MAX_VALUE_MAGNITUDE || value < -MAX_VALUE_MAGNITUDE {
        return Err(InputError::BadParameter {
            what: "value",
            message: format!("{} exceeds the magnitude limit {}", value, MAX_VALUE_MAGNITUDE),
        });
    }
    Ok(value)
}

fn check_ceiling(what: &'static str, count: usize, limit: usize) -> Result<(), InputError> {
    if count > limit {
        return Err(InputError::TooLarge { what, count, limit });
    }
    Ok(())
}

/// Parse a flat number list under the array ceiling
pub fn parse_array(raw: &str) -> Result<ArrayInput, InputError> {
    let tokens = split_tokens(strip_brackets(raw));
    check_ceiling("array", tokens.len(), MAX_ARRAY_LEN)?;
    let values = tokens
        .iter()
        .map(|token| parse_value(token))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ArrayInput { values })
}

/// Parse a level-order tree literal with `null` gaps.
///
/// Beyond token checks, placement is simulated to reject entries no parent
/// would ever consume (e.g. `[1,null,null,4]`), which keeps the tree builder
/// infallible and every node reachable.
pub fn parse_tree(raw: &str) -> Result<TreeInput, InputError> {
    let tokens = split_tokens(strip_brackets(raw));
    check_ceiling("tree", tokens.len(), MAX_TREE_NODES)?;

    let mut slots = Vec::with_capacity(tokens.len());
    for token in &tokens {
        if token.eq_ignore_ascii_case("null") {
            slots.push(None);
        } else {
            slots.push(Some(parse_value(token)?));
        }
    }

    // Simulate breadth-first placement: every node consumes the next two
    // entries as children; whatever is left over has no parent.
    let mut consumed = 0;
    let mut parents = std::collections::VecDeque::new();
    if let Some(Some(_)) = slots.first() {
        parents.push_back(0usize);
        consumed = 1;
    }
    while parents.pop_front().is_some() {
        for _ in 0..2 {
            if consumed < slots.len() {
                if slots[consumed].is_some() {
                    parents.push_back(consumed);
                }
                consumed += 1;
            }
        }
    }
    if let Some(orphan) = slots[consumed.min(slots.len())..]
        .iter()
        .position(|slot| slot.is_some())
    {
        return Err(InputError::Inconsistent {
            message: format!(
                "entry at position {} has no parent to attach to",
                consumed + orphan
            ),
        });
    }

    Ok(TreeInput { slots })
}

/// Parse linked-list values and an optional cycle-entry index.
///
/// `cycle` follows the usual convention: absent or `-1` means no cycle; a
/// non-negative index must point at an existing node.
pub fn parse_list(raw: &str, cycle: Option<&str>) -> Result<ListInput, InputError> {
    let tokens = split_tokens(strip_brackets(raw));
    check_ceiling("list", tokens.len(), MAX_LIST_NODES)?;
    let values = tokens
        .iter()
        .map(|token| parse_value(token))
        .collect::<Result<Vec<_>, _>>()?;

    let cycle = match cycle {
        None => None,
        Some(token) => {
            let index = parse_number(token.trim())?;
            if index == -1 {
                None
            } else if index < 0 {
                return Err(InputError::BadParameter {
                    what: "cycle index",
                    message: format!("{} is negative (use -1 for no cycle)", index),
                });
            } else if (index as usize) >= values.len() {
                return Err(InputError::IndexOutOfRange {
                    what: "cycle index",
                    index,
                    limit: values.len(),
                });
            } else {
                Some(index as usize)
            }
        }
    };

    Ok(ListInput { values, cycle })
}

/// Parse two lists plus their declared join offsets.
///
/// The declared suffixes must agree exactly: equal length from each join point
/// and equal values, since those nodes are physically shared.
pub fn parse_paired(
    raw_a: &str,
    raw_b: &str,
    raw_skip_a: &str,
    raw_skip_b: &str,
) -> Result<PairedListsInput, InputError> {
    let a_tokens = split_tokens(strip_brackets(raw_a));
    let b_tokens = split_tokens(strip_brackets(raw_b));
    check_ceiling("list A", a_tokens.len(), MAX_INTERSECT_NODES)?;
    check_ceiling("list B", b_tokens.len(), MAX_INTERSECT_NODES)?;

    let a = a_tokens
        .iter()
        .map(|token| parse_value(token))
        .collect::<Result<Vec<_>, _>>()?;
    let b = b_tokens
        .iter()
        .map(|token| parse_value(token))
        .collect::<Result<Vec<_>, _>>()?;

    let skip_a = parse_number(raw_skip_a.trim())?;
    let skip_b = parse_number(raw_skip_b.trim())?;
    if skip_a < 0 || (skip_a as usize) > a.len() {
        return Err(InputError::IndexOutOfRange {
            what: "join offset for list A",
            index: skip_a,
            limit: a.len() + 1,
        });
    }
    if skip_b < 0 || (skip_b as usize) > b.len() {
        return Err(InputError::IndexOutOfRange {
            what: "join offset for list B",
            index: skip_b,
            limit: b.len() + 1,
        });
    }
    let (skip_a, skip_b) = (skip_a as usize, skip_b as usize);

    if a.len() - skip_a != b.len() - skip_b {
        return Err(InputError::Inconsistent {
            message: format!(
                "shared tails differ in length: {} from offset {} vs {} from offset {}",
                a.len() - skip_a,
                skip_a,
                b.len() - skip_b,
                skip_b
            ),
        });
    }
    if a[skip_a..] != b[skip_b..] {
        return Err(InputError::Inconsistent {
            message: "shared tails differ in values".to_string(),
        });
    }

    Ok(PairedListsInput {
        a,
        b,
        skip_a,
        skip_b,
    })
}

/// Parse value + random-index pairs like `[[7,null],[13,0]]`.
///
/// Random targets may be forward references, so index validation happens only
/// after every pair has been read.
pub fn parse_random(raw: &str) -> Result<RandomListInput, InputError> {
    let inner = strip_brackets(raw);
    let groups = split_groups(inner)?;
    check_ceiling("random-pointer list", groups.len(), MAX_RANDOM_NODES)?;

    let mut entries = Vec::with_capacity(groups.len());
    for group in &groups {
        let tokens = split_tokens(group);
        if tokens.len() != 2 {
            return Err(InputError::BadToken {
                token: format!("[{}]", group),
                expected: "a [value, random-index] pair",
            });
        }
        let value = parse_value(tokens[0])?;
        let random = if tokens[1].eq_ignore_ascii_case("null") {
            None
        } else {
            Some(parse_number(tokens[1])?)
        };
        entries.push((value, random));
    }

    let mut resolved = Vec::with_capacity(entries.len());
    for (value, random) in &entries {
        let random = match random {
            None => None,
            Some(index) if *index < 0 || (*index as usize) >= entries.len() => {
                return Err(InputError::IndexOutOfRange {
                    what: "random target",
                    index: *index,
                    limit: entries.len(),
                });
            }
            Some(index) => Some(*index as usize),
        };
        resolved.push((*value, random));
    }

    Ok(RandomListInput { entries: resolved })
}

/// Split `"[7,null],[13,0]"` into its top-level bracket groups
fn split_groups(inner: &str) -> Result<Vec<String>, InputError> {
    let mut groups = Vec::new();
    let mut depth = 0usize;
    let mut current = String::new();
    for ch in inner.chars() {
        match ch {
            '[' => {
                depth += 1;
                if depth > 1 {
                    return Err(InputError::BadToken {
                        token: inner.to_string(),
                        expected: "a list of [value, random-index] pairs",
                    });
                }
            }
            ']' => {
                if depth == 0 {
                    return Err(InputError::BadToken {
                        token: inner.to_string(),
                        expected: "balanced brackets",
                    });
                }
                depth -= 1;
                groups.push(current.trim().to_string());
                current.clear();
            }
            ',' if depth == 0 => {}
            _ if depth == 1 => current.push(ch),
            _ if ch.is_whitespace() => {}
            _ => {
                return Err(InputError::BadToken {
                    token: ch.to_string(),
                    expected: "'[' or ','",
                });
            }
        }
    }
    if depth != 0 {
        return Err(InputError::BadToken {
            token: inner.to_string(),
            expected: "balanced brackets",
        });
    }
    Ok(groups)
}

/// Parse the rotation amount. Any integer is allowed; generators normalize it
/// into `[0, n)`.
pub fn parse_rotation(raw: &str) -> Result<i64, InputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty {
            what: "rotation amount",
        });
    }
    parse_number(trimmed)
}

/// Parse k for kth-smallest: must satisfy `1 <= k <= node_count`
pub fn parse_kth(raw: &str, node_count: usize) -> Result<usize, InputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty { what: "k" });
    }
    let k = parse_number(trimmed)?;
    if k < 1 || (k as usize) > node_count {
        return Err(InputError::BadParameter {
            what: "k",
            message: format!("{} is outside 1..={}", k, node_count),
        });
    }
    Ok(k as usize)
}
