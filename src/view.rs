//! Value types for rendered output, plus the request-token state that keeps
//! overlapping fetches from clobbering a newer view with a stale response.

/// A run of inline text. Emphasis is a typed node rather than raw markup so
/// adapters decide how (and whether) to style it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    Text(String),
    Emphasis(String),
}

/// One rendered element. A `ViewTree` is an ordered list of these; adapters
/// turn them into terminal lines or HTML fragments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Neutral informational message ("no results" and friends).
    Placeholder(String),
    /// Terminal error message for the triggering call.
    Error(String),
    SearchItem {
        title: Vec<Inline>,
        link: String,
        description: Vec<Inline>,
        blogger_name: String,
        post_date: String,
    },
    ChartItem {
        rank: u32,
        title: String,
        artist: String,
        image_url: String,
    },
    RankingItem {
        position: usize,
        artist: String,
        count: u32,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewTree {
    pub nodes: Vec<Node>,
}

impl ViewTree {
    pub fn new(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Opaque handle tying a response back to the request that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

/// Holds the currently displayed tree. Each dispatch calls [`ViewState::begin`]
/// for a token; [`ViewState::apply`] installs a tree only when its token is
/// the most recently issued one, so a slow response that lost the race is
/// discarded instead of overwriting newer output.
#[derive(Debug, Default)]
pub struct ViewState {
    latest: u64,
    current: ViewTree,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new in-flight request, superseding all earlier tokens.
    pub fn begin(&mut self) -> RequestToken {
        self.latest += 1;
        RequestToken(self.latest)
    }

    /// Install `tree` if `token` is still current. Returns whether the tree
    /// was applied; stale responses leave the view untouched.
    pub fn apply(&mut self, token: RequestToken, tree: ViewTree) -> bool {
        if token.0 == self.latest {
            self.current = tree;
            true
        } else {
            false
        }
    }

    pub fn tree(&self) -> &ViewTree {
        &self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placeholder(text: &str) -> ViewTree {
        ViewTree::new(vec![Node::Placeholder(text.into())])
    }

    #[test]
    fn current_token_applies() {
        let mut state = ViewState::new();
        let token = state.begin();
        assert!(state.apply(token, placeholder("first")));
        assert_eq!(state.tree(), &placeholder("first"));
    }

    #[test]
    fn superseded_token_is_discarded() {
        let mut state = ViewState::new();
        let stale = state.begin();
        let fresh = state.begin();

        // The newer request resolves first; the older one must not clobber it.
        assert!(state.apply(fresh, placeholder("fresh")));
        assert!(!state.apply(stale, placeholder("stale")));
        assert_eq!(state.tree(), &placeholder("fresh"));
    }

    #[test]
    fn token_is_single_use_across_begins() {
        let mut state = ViewState::new();
        let token = state.begin();
        assert!(state.apply(token, placeholder("a")));
        state.begin();
        assert!(!state.apply(token, placeholder("b")));
        assert_eq!(state.tree(), &placeholder("a"));
    }
}
