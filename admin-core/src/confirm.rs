/// Confirmation gate for destructive deletes, replacing a blocking dialog
/// with an explicit state transition: a delete is armed first, then either
/// confirmed or dismissed by a second UI event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DeleteConfirm {
    #[default]
    Idle,
    Awaiting {
        id: String,
        label: String,
    },
}

impl DeleteConfirm {
    /// Arm deletion of one record. `label` is what the prompt shows.
    pub fn request(&mut self, id: impl Into<String>, label: impl Into<String>) {
        *self = DeleteConfirm::Awaiting {
            id: id.into(),
            label: label.into(),
        };
    }

    /// Consume the armed request, returning the id to delete. `None` when
    /// nothing was armed.
    pub fn confirm(&mut self) -> Option<String> {
        match std::mem::take(self) {
            DeleteConfirm::Awaiting { id, .. } => Some(id),
            DeleteConfirm::Idle => None,
        }
    }

    pub fn dismiss(&mut self) {
        *self = DeleteConfirm::Idle;
    }

    pub fn awaiting(&self) -> Option<(&str, &str)> {
        match self {
            DeleteConfirm::Awaiting { id, label } => Some((id.as_str(), label.as_str())),
            DeleteConfirm::Idle => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirm_consumes_the_armed_request() {
        let mut confirm = DeleteConfirm::default();
        confirm.request("65f0", "Desk Lamp");
        assert_eq!(confirm.awaiting(), Some(("65f0", "Desk Lamp")));

        assert_eq!(confirm.confirm(), Some("65f0".to_string()));
        assert_eq!(confirm, DeleteConfirm::Idle);
        assert_eq!(confirm.confirm(), None);
    }

    #[test]
    fn dismiss_disarms_without_yielding_an_id() {
        let mut confirm = DeleteConfirm::default();
        confirm.request("65f0", "Desk Lamp");
        confirm.dismiss();
        assert_eq!(confirm.confirm(), None);
    }

    #[test]
    fn rearming_replaces_the_previous_target() {
        let mut confirm = DeleteConfirm::default();
        confirm.request("a", "first");
        confirm.request("b", "second");
        assert_eq!(confirm.confirm(), Some("b".to_string()));
    }
}
