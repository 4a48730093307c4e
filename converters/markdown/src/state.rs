//! Mutable state threaded through one document walk.

/// An open fenced code block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CodeFence {
    pub(crate) language: Option<String>,
}

/// Rendering state for a single conversion.
///
/// A fresh value is built for every conversion and dropped when it ends.
/// Invariant: `list_ordinal` is zero whenever `current_list` has just changed.
#[derive(Debug, Default)]
pub(crate) struct RenderState {
    code_fence: Option<CodeFence>,
    current_list: Option<String>,
    list_ordinal: usize,
}

impl RenderState {
    pub(crate) fn in_code_block(&self) -> bool {
        self.code_fence.is_some()
    }

    pub(crate) fn code_fence(&self) -> Option<&CodeFence> {
        self.code_fence.as_ref()
    }

    pub(crate) fn open_code_block(&mut self, language: Option<&str>) {
        tracing::debug!(?language, "opening code block");
        self.code_fence = Some(CodeFence {
            language: language.map(ToString::to_string),
        });
    }

    pub(crate) fn close_code_block(&mut self) {
        tracing::debug!("closing code block");
        self.code_fence = None;
    }

    #[cfg(test)]
    pub(crate) fn current_list(&self) -> Option<&str> {
        self.current_list.as_deref()
    }

    /// Make `list_id` the current list, restarting numbering if it changed.
    pub(crate) fn enter_list(&mut self, list_id: &str) {
        if self.current_list.as_deref() != Some(list_id) {
            tracing::debug!(list_id, previous = ?self.current_list, "list changed");
            self.current_list = Some(list_id.to_string());
            self.list_ordinal = 0;
        }
    }

    pub(crate) fn leave_list(&mut self) {
        if self.current_list.is_some() {
            tracing::debug!(previous = ?self.current_list, "list ended");
        }
        self.current_list = None;
        self.list_ordinal = 0;
    }

    /// Advance and return the ordinal of the current list.
    ///
    /// Numbering is flat per list id: nested ordered items share the counter
    /// of their parent level.
    pub(crate) fn next_ordinal(&mut self) -> usize {
        self.list_ordinal += 1;
        self.list_ordinal
    }

    #[cfg(test)]
    pub(crate) fn list_ordinal(&self) -> usize {
        self.list_ordinal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinal_resets_on_list_change() {
        let mut state = RenderState::default();
        state.enter_list("L1");
        assert_eq!(state.next_ordinal(), 1);
        assert_eq!(state.next_ordinal(), 2);

        state.enter_list("L1");
        assert_eq!(state.next_ordinal(), 3);

        state.enter_list("L2");
        assert_eq!(state.list_ordinal(), 0);
        assert_eq!(state.current_list(), Some("L2"));

        state.next_ordinal();
        state.leave_list();
        assert_eq!(state.list_ordinal(), 0);
        assert_eq!(state.current_list(), None);
    }

    #[test]
    fn code_block_lifecycle() {
        let mut state = RenderState::default();
        assert!(!state.in_code_block());

        state.open_code_block(Some("powershell"));
        assert!(state.in_code_block());
        assert_eq!(
            state.code_fence().and_then(|fence| fence.language.as_deref()),
            Some("powershell")
        );

        state.close_code_block();
        assert!(!state.in_code_block());
        assert_eq!(state.code_fence(), None);
    }
}
