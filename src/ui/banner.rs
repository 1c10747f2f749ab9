//! Transient per-screen message slots.

/// One success slot and one error slot.
///
/// Each action clears both slots before setting its own, so at most
/// one message of each kind is visible at a time. The slots are
/// independent: a mutation's success message survives a failed
/// follow-up refetch, which lands in the error slot next to it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Banner {
    success: Option<String>,
    error: Option<String>,
}

impl Banner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.success = None;
        self.error = None;
    }

    pub fn set_success(&mut self, message: impl Into<String>) {
        self.success = Some(message.into());
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn success(&self) -> Option<&str> {
        self.success.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_are_independent() {
        let mut banner = Banner::new();
        banner.set_success("Product created successfully");
        banner.set_error("Error fetching products");
        assert_eq!(banner.success(), Some("Product created successfully"));
        assert_eq!(banner.error(), Some("Error fetching products"));

        banner.clear();
        assert_eq!(banner.success(), None);
        assert_eq!(banner.error(), None);
    }
}
