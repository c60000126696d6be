//! Responsive Layout System
//!
//! `LayoutContext` wraps the terminal dimensions so renderers can size
//! things proportionally instead of hard-coding columns.

/// Terminal size breakpoints
pub mod breakpoints {
    /// Extra small terminal (< 60 columns)
    pub const XS_WIDTH: u16 = 60;
    /// Small terminal (< 80 columns)
    pub const SM_WIDTH: u16 = 80;
    /// Extra small terminal height (< 16 rows)
    pub const XS_HEIGHT: u16 = 16;
    /// Small terminal height (< 24 rows)
    pub const SM_HEIGHT: u16 = 24;
}

/// Layout context holding terminal dimensions for responsive calculations.
///
/// # Example
///
/// ```ignore
/// let ctx = LayoutContext::new(120, 40);
/// let dialog_width = ctx.bounded_width(50, 30, 60);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LayoutContext {
    /// Terminal width in columns
    pub width: u16,
    /// Terminal height in rows
    pub height: u16,
}

impl Default for LayoutContext {
    fn default() -> Self {
        Self::new(80, 24)
    }
}

impl LayoutContext {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// A width as a percentage of terminal width, minimum 1.
    pub fn percent_width(&self, percentage: u16) -> u16 {
        ((self.width as u32 * percentage as u32) / 100).max(1) as u16
    }

    /// Percentage-based width clamped to `[min, max]`.
    pub fn bounded_width(&self, percentage: u16, min: u16, max: u16) -> u16 {
        self.percent_width(percentage).clamp(min, max)
    }

    /// Less than 80 columns.
    pub fn is_narrow(&self) -> bool {
        self.width < breakpoints::SM_WIDTH
    }

    /// Less than 24 rows.
    pub fn is_short(&self) -> bool {
        self.height < breakpoints::SM_HEIGHT
    }

    pub fn is_compact(&self) -> bool {
        self.is_narrow() || self.is_short()
    }

    pub fn is_extra_small(&self) -> bool {
        self.width < breakpoints::XS_WIDTH || self.height < breakpoints::XS_HEIGHT
    }

    /// Header rows: the logo line collapses on compact terminals.
    pub fn header_height(&self) -> u16 {
        if self.is_compact() {
            2
        } else {
            3
        }
    }

    /// Rows reserved for the bottom nav bar.
    pub fn nav_height(&self) -> u16 {
        if self.is_extra_small() {
            1
        } else {
            3
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_width() {
        let ctx = LayoutContext::new(100, 40);
        assert_eq!(ctx.percent_width(50), 50);
        assert_eq!(LayoutContext::new(0, 0).percent_width(50), 1);
    }

    #[test]
    fn test_bounded_width() {
        let ctx = LayoutContext::new(200, 40);
        assert_eq!(ctx.bounded_width(30, 20, 50), 50);
    }

    #[test]
    fn test_size_flags() {
        assert!(LayoutContext::new(70, 30).is_narrow());
        assert!(LayoutContext::new(100, 20).is_compact());
        assert!(LayoutContext::new(50, 30).is_extra_small());
        assert!(!LayoutContext::new(120, 40).is_compact());
        assert_eq!(LayoutContext::new(120, 40).header_height(), 3);
    }
}
