use crate::dom::Console;

/// Forwards a non-recoverable condition to the host's error console.
pub fn console_error<C: Console>(console: &C, message: &str) {
    tracing::trace!("console.error: {}", message);
    console.error(message);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::memory::MemoryDocument;

    #[test]
    fn test_console_error_passes_through() {
        let doc = MemoryDocument::new();
        console_error(&doc, "decoder gave up: <unexpected>");
        console_error(&doc, "second");
        assert_eq!(
            doc.console_messages(),
            vec!["decoder gave up: <unexpected>".to_string(), "second".to_string()]
        );
    }
}
