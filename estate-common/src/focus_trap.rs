//! Tab cycling confined to the lightbox controls

/// An interactive element inside the lightbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LightboxControl {
    Close,
    Previous,
    Next,
    Thumbnail(usize),
}

impl LightboxControl {
    /// DOM id of this control inside the lightbox identified by `scope`.
    pub fn dom_id(&self, scope: &str) -> String {
        match self {
            LightboxControl::Close => format!("{scope}-close"),
            LightboxControl::Previous => format!("{scope}-previous"),
            LightboxControl::Next => format!("{scope}-next"),
            LightboxControl::Thumbnail(i) => format!("{scope}-thumb-{i}"),
        }
    }

    /// Inverse of [`dom_id`](Self::dom_id). `None` for ids outside `scope`.
    pub fn from_dom_id(scope: &str, id: &str) -> Option<Self> {
        let rest = id.strip_prefix(scope)?.strip_prefix('-')?;
        match rest {
            "close" => Some(LightboxControl::Close),
            "previous" => Some(LightboxControl::Previous),
            "next" => Some(LightboxControl::Next),
            _ => rest
                .strip_prefix("thumb-")
                .and_then(|i| i.parse().ok())
                .map(LightboxControl::Thumbnail),
        }
    }
}

/// Ordered set of controls that Tab and Shift+Tab cycle through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusTrap {
    controls: Vec<LightboxControl>,
}

impl FocusTrap {
    pub fn new(controls: Vec<LightboxControl>) -> Self {
        Self { controls }
    }

    /// Controls rendered by the lightbox for a collection of `image_count`.
    ///
    /// Navigation buttons and the thumbnail strip only exist when there is
    /// more than one image.
    pub fn for_lightbox(image_count: usize) -> Self {
        let mut controls = vec![LightboxControl::Close];
        if image_count > 1 {
            controls.push(LightboxControl::Previous);
            controls.push(LightboxControl::Next);
            controls.extend((0..image_count).map(LightboxControl::Thumbnail));
        }
        Self { controls }
    }

    pub fn controls(&self) -> &[LightboxControl] {
        &self.controls
    }

    pub fn contains(&self, control: LightboxControl) -> bool {
        self.controls.contains(&control)
    }

    /// Control that should receive focus after Tab (or Shift+Tab when
    /// `backwards`). Focus outside the trap re-enters at the near end.
    pub fn next_control(
        &self,
        current: Option<LightboxControl>,
        backwards: bool,
    ) -> Option<LightboxControl> {
        let len = self.controls.len();
        if len == 0 {
            return None;
        }
        let position = current.and_then(|c| self.controls.iter().position(|&x| x == c));
        let target = match (position, backwards) {
            (Some(i), false) => (i + 1) % len,
            (Some(i), true) => (i + len - 1) % len,
            (None, false) => 0,
            (None, true) => len - 1,
        };
        Some(self.controls[target])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_image_trap_is_close_only() {
        let trap = FocusTrap::for_lightbox(1);
        assert_eq!(trap.controls(), &[LightboxControl::Close]);
        assert_eq!(
            trap.next_control(Some(LightboxControl::Close), false),
            Some(LightboxControl::Close)
        );
    }

    #[test]
    fn test_tab_wraps_forward() {
        let trap = FocusTrap::for_lightbox(2);
        let last = LightboxControl::Thumbnail(1);
        assert_eq!(trap.next_control(Some(last), false), Some(LightboxControl::Close));
    }

    #[test]
    fn test_shift_tab_wraps_backward() {
        let trap = FocusTrap::for_lightbox(3);
        assert_eq!(
            trap.next_control(Some(LightboxControl::Close), true),
            Some(LightboxControl::Thumbnail(2))
        );
    }

    #[test]
    fn test_focus_outside_trap_reenters() {
        let trap = FocusTrap::for_lightbox(3);
        assert_eq!(trap.next_control(None, false), Some(LightboxControl::Close));
        assert_eq!(
            trap.next_control(Some(LightboxControl::Thumbnail(9)), true),
            Some(LightboxControl::Thumbnail(2))
        );
    }

    #[test]
    fn test_dom_id_round_trip() {
        for control in FocusTrap::for_lightbox(4).controls() {
            let id = control.dom_id("lightbox-0");
            assert_eq!(LightboxControl::from_dom_id("lightbox-0", &id), Some(*control));
        }
    }

    #[test]
    fn test_dom_id_from_other_scope_is_rejected() {
        assert_eq!(LightboxControl::from_dom_id("lightbox-0", "lightbox-1-close"), None);
        assert_eq!(LightboxControl::from_dom_id("lightbox-0", "lightbox-0-thumb-x"), None);
    }
}
