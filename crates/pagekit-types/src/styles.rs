//! Stylesheet and inline style text used by the toast.

/// Keyframes for the toast enter/exit animations.
pub const TOAST_KEYFRAMES: &str = "
@keyframes slideUp {
  from {
    opacity: 0;
    transform: translateX(-50%) translateY(20px);
  }
  to {
    opacity: 1;
    transform: translateX(-50%) translateY(0);
  }
}
@keyframes slideDown {
  from {
    opacity: 1;
    transform: translateX(-50%) translateY(0);
  }
  to {
    opacity: 0;
    transform: translateX(-50%) translateY(20px);
  }
}
";

/// Inline style for a freshly shown toast. `enter_ms` drives the slideUp animation.
pub fn toast_style(enter_ms: u32) -> String {
    format!(
        "position: fixed; \
         bottom: 30px; \
         left: 50%; \
         transform: translateX(-50%); \
         background: linear-gradient(135deg, #d4af37, #f4d03f); \
         color: #000; \
         padding: 14px 28px; \
         border-radius: 30px; \
         font-weight: 600; \
         font-size: 14px; \
         z-index: 9999; \
         box-shadow: 0 6px 20px rgba(212, 175, 55, 0.5); \
         animation: {}; \
         pointer-events: none;",
        enter_animation(enter_ms)
    )
}

/// `animation` value while the toast enters.
pub fn enter_animation(duration_ms: u32) -> String {
    format!("slideUp {duration_ms}ms ease")
}

/// `animation` value while the toast leaves.
pub fn exit_animation(duration_ms: u32) -> String {
    format!("slideDown {duration_ms}ms ease")
}

/// Off-screen placement for the fallback copy textarea.
pub const OFFSCREEN_STYLE: &str = "position:fixed;left:-9999px;opacity:0;";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyframes_define_both_animations() {
        assert!(TOAST_KEYFRAMES.contains("@keyframes slideUp"));
        assert!(TOAST_KEYFRAMES.contains("@keyframes slideDown"));
    }

    #[test]
    fn test_toast_style_uses_enter_animation() {
        let style = toast_style(300);
        assert!(style.contains("animation: slideUp 300ms ease;"));
        assert!(style.contains("pointer-events: none;"));
        assert!(!style.contains('\n'));
    }

    #[test]
    fn test_exit_animation() {
        assert_eq!(exit_animation(300), "slideDown 300ms ease");
    }
}
