/// Continuation drawn under an entry that has later siblings.
pub const CONTINUATION_BAR: &str = "│   ";
/// Continuation drawn under the last entry of a sibling group.
pub const CONTINUATION_BLANK: &str = "    ";

/// Indentation prefix and depth for one directory level of the render.
///
/// Each level builds its own state from its parent's; nothing is shared
/// between frames.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RenderState {
    pub prefix: String,
    pub depth: usize,
}

impl RenderState {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn child(&self, is_last: bool) -> Self {
        let continuation = if is_last {
            CONTINUATION_BLANK
        } else {
            CONTINUATION_BAR
        };
        Self {
            prefix: format!("{}{continuation}", self.prefix),
            depth: self.depth + 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn child_extends_prefix_by_position() {
        let root = RenderState::root();
        let mid = root.child(false);
        let last = mid.child(true);

        assert_eq!(mid.prefix, "│   ");
        assert_eq!(mid.depth, 1);
        assert_eq!(last.prefix, "│       ");
        assert_eq!(last.depth, 2);
        assert_eq!(root, RenderState::default());
    }
}
