use indexmap::IndexMap;

/// Quote the column name with the flavor's identifier quoting.
pub const OPT_WITH_QUOTE: &str = "withquote";

/// Skip the column when the field holds its empty value. Takes an optional
/// list of tags the option is scoped to.
pub const OPT_OMIT_EMPTY: &str = "omitempty";

/// Options parsed from a `fieldopt` annotation.
///
/// The annotation is a comma separated list of `name` or `name(arg, ...)`
/// tokens. Parsing never fails: a token that does not fit the grammar is kept
/// under its raw text with no parameters, so no consumer recognizes it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldOpts {
    opts: IndexMap<String, Vec<String>>,
}

impl FieldOpts {
    pub fn parse(src: &str) -> FieldOpts {
        let mut opts = FieldOpts::default();

        for token in split_top_level(src) {
            let token = token.trim();

            if token.is_empty() {
                continue;
            }

            match parse_token(token) {
                Some((name, params)) => opts.insert(name, params),
                None => opts.insert(token, vec![]),
            }
        }

        opts
    }

    /// Adds an option, merging with an earlier occurrence of the same name.
    ///
    /// An empty parameter list means "unscoped". Merging a scoped and an
    /// unscoped occurrence records the unscoped one as an empty-string
    /// parameter so neither is lost.
    fn insert(&mut self, name: &str, params: Vec<String>) {
        match self.opts.get_mut(name) {
            None => {
                self.opts.insert(name.to_string(), params);
            }
            Some(existing) => {
                if existing.is_empty() && !params.is_empty() {
                    existing.push(String::new());
                }

                if params.is_empty() {
                    if !existing.is_empty() && !existing.iter().any(String::is_empty) {
                        existing.push(String::new());
                    }
                } else {
                    existing.extend(params);
                }
            }
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.opts.contains_key(name)
    }

    /// Parameters of `name`, or `None` if the option is absent.
    pub fn params(&self, name: &str) -> Option<&[String]> {
        self.opts.get(name).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.opts
            .iter()
            .map(|(name, params)| (name.as_str(), params.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.opts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.opts.is_empty()
    }
}

/// Splits on commas that are not nested inside parentheses.
fn split_top_level(src: &str) -> Vec<&str> {
    let mut parts = vec![];
    let mut depth = 0usize;
    let mut start = 0;

    for (i, ch) in src.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(&src[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }

    parts.push(&src[start..]);
    parts
}

fn parse_token(token: &str) -> Option<(&str, Vec<String>)> {
    let Some(open) = token.find('(') else {
        return is_name(token).then(|| (token, vec![]));
    };

    let name = token[..open].trim_end();
    let inner = token[open + 1..].strip_suffix(')')?;

    if !is_name(name) || !is_balanced(inner) {
        return None;
    }

    let params = split_top_level(inner)
        .into_iter()
        .map(|param| param.trim().to_string())
        .collect();

    Some((name, params))
}

fn is_name(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|ch| ch.is_alphanumeric() || ch == '_')
}

fn is_balanced(s: &str) -> bool {
    let mut depth = 0usize;

    for ch in s.chars() {
        match ch {
            '(' => depth += 1,
            ')' => match depth.checked_sub(1) {
                Some(d) => depth = d,
                None => return false,
            },
            _ => {}
        }
    }

    depth == 0
}
