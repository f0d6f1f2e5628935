/// Whether the "share a ride" dialog is shown.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Hash)]
pub enum ModalVisibility {
    #[default]
    Closed,
    Open,
}

impl ModalVisibility {
    pub fn is_open(self) -> bool {
        self == ModalVisibility::Open
    }

    /// State after a submit attempt finishes. Success closes the dialog
    /// whatever its current state; failure leaves it untouched.
    pub fn after_submit(self, succeeded: bool) -> Self {
        if succeeded {
            ModalVisibility::Closed
        } else {
            self
        }
    }
}

impl From<bool> for ModalVisibility {
    fn from(open: bool) -> Self {
        if open {
            ModalVisibility::Open
        } else {
            ModalVisibility::Closed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ModalVisibility;

    #[test]
    fn test_initial_state_is_closed() {
        assert_eq!(ModalVisibility::default(), ModalVisibility::Closed);
        assert!(!ModalVisibility::default().is_open());
    }

    #[test]
    fn test_after_submit() {
        assert_eq!(
            ModalVisibility::Open.after_submit(true),
            ModalVisibility::Closed
        );
        assert_eq!(ModalVisibility::Open.after_submit(false), ModalVisibility::Open);
        assert_eq!(
            ModalVisibility::Closed.after_submit(true),
            ModalVisibility::Closed
        );
        assert_eq!(
            ModalVisibility::Closed.after_submit(false),
            ModalVisibility::Closed
        );
    }

    #[test]
    fn test_from_bool() {
        assert_eq!(ModalVisibility::from(true), ModalVisibility::Open);
        assert_eq!(ModalVisibility::from(false), ModalVisibility::Closed);
    }
}
