/// Whether an open dialog is creating a new record or editing an existing one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogMode {
    Create,
    Edit,
}

/// Lifecycle of a modal dialog: `Closed → Open → submit/cancel → Closed`.
///
/// The draft lives only while the dialog is open; closing discards it.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Dialog<D> {
    #[default]
    Closed,
    Open {
        mode: DialogMode,
        draft: D,
    },
}

impl<D> Dialog<D> {
    pub fn open_create(draft: D) -> Self {
        Self::Open {
            mode: DialogMode::Create,
            draft,
        }
    }

    pub fn open_edit(draft: D) -> Self {
        Self::Open {
            mode: DialogMode::Edit,
            draft,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    pub fn mode(&self) -> Option<DialogMode> {
        match self {
            Self::Open { mode, .. } => Some(*mode),
            Self::Closed => None,
        }
    }

    pub fn draft(&self) -> Option<&D> {
        match self {
            Self::Open { draft, .. } => Some(draft),
            Self::Closed => None,
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut D> {
        match self {
            Self::Open { draft, .. } => Some(draft),
            Self::Closed => None,
        }
    }

    /// Discards the draft and returns to `Closed`.
    pub fn close(&mut self) {
        *self = Self::Closed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        let dialog: Dialog<String> = Dialog::default();
        assert!(!dialog.is_open());
        assert_eq!(dialog.draft(), None);
    }

    #[test]
    fn open_then_close_discards_the_draft() {
        let mut dialog = Dialog::open_create("bozza".to_string());
        assert_eq!(dialog.mode(), Some(DialogMode::Create));
        assert_eq!(dialog.draft().map(String::as_str), Some("bozza"));

        dialog.close();
        assert_eq!(dialog, Dialog::Closed);
    }

    #[test]
    fn edit_mode_is_reported() {
        let dialog = Dialog::open_edit(1_i32);
        assert_eq!(dialog.mode(), Some(DialogMode::Edit));
    }
}
