/// Content version a buffered node last populated.
///
/// `None` means stale: the next frame repopulates no matter what the
/// content version is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrawVersion {
    populated: Option<u64>,
}

impl DrawVersion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the cached content was populated for `content_version`
    pub fn is_current(&self, content_version: u64) -> bool {
        self.populated == Some(content_version)
    }

    pub fn mark_populated(&mut self, content_version: u64) {
        self.populated = Some(content_version);
    }

    /// Make the next `is_current` check fail regardless of the content version
    pub fn force_refresh(&mut self) {
        self.populated = None;
    }

    pub fn populated(&self) -> Option<u64> {
        self.populated
    }
}
