use anyhow::Context;
use regex::RegexSet;

/// Glob patterns matched against entry names.
///
/// `*` matches any run of characters and `?` exactly one; everything else
/// is literal. Several patterns may share one argument, separated by `|`.
#[derive(Clone, Debug)]
pub struct IgnoreSet {
    set: RegexSet,
}

impl IgnoreSet {
    pub fn new<I, S>(args: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut globs = Vec::new();
        for arg in args {
            globs.extend(
                arg.as_ref()
                    .split('|')
                    .map(str::trim)
                    .filter(|glob| !glob.is_empty())
                    .map(str::to_owned),
            );
        }

        let set = RegexSet::new(globs.iter().map(|glob| glob_to_regex(glob)))
            .with_context(|| format!("invalid ignore pattern: {}", globs.join("|")))?;
        Ok(Self { set })
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    pub fn matches(&self, name: &str) -> bool {
        self.set.is_match(name)
    }
}

fn glob_to_regex(glob: &str) -> String {
    let mut regex = String::with_capacity(glob.len() + 8);
    regex.push_str("(?s)^");

    let mut literal = String::new();
    for c in glob.chars() {
        let wildcard = match c {
            '*' => ".*",
            '?' => ".",
            _ => {
                literal.push(c);
                continue;
            }
        };
        regex.push_str(&regex::escape(&literal));
        literal.clear();
        regex.push_str(wildcard);
    }
    regex.push_str(&regex::escape(&literal));

    regex.push('$');
    regex
}
