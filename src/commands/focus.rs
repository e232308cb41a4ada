use super::Outcome;
use crate::dom::Document;
use crate::scheduler::FrameScheduler;
use crate::state::BridgeState;

/// Focus the element with the given id
pub fn focus_element_by_id<D, S>(state: &BridgeState<D, S>, id: &str) -> Outcome
where
    D: Document,
    S: FrameScheduler,
{
    state
        .focus_director()
        .focus_element_by_id(id)
        .map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::memory::MemoryDocument;
    use crate::scheduler::ScriptedFrames;
    use crate::state::Settings;

    #[test]
    fn test_focus_outcomes() {
        let doc = MemoryDocument::new();
        doc.render("sl-input", "username");
        let state = BridgeState::new(doc.clone(), ScriptedFrames::new(), Settings::default());

        assert_eq!(focus_element_by_id(&state, "username"), Ok(()));
        assert_eq!(doc.focused_id().as_deref(), Some("username"));

        let diagnostic = focus_element_by_id(&state, "password").unwrap_err();
        assert!(diagnostic.contains("password"));
        assert_eq!(doc.focused_id().as_deref(), Some("username"));
    }
}
