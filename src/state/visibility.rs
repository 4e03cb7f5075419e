//! Derived toolbar visibility
//!
//! Show/hide policy for the toolbar regions the widget renders around a
//! table. Not selection state: purely derived from the declared
//! capabilities and the widget's reported page count, and recomputed after
//! every render.

use crate::domain::TableCapabilities;

/// Visibility of the two toolbar regions around a table
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToolbarVisibility {
    /// Top bar: filter input and page-length selector
    pub header: bool,
    /// Bottom bar: row-count summary and pagination buttons
    pub footer: bool,
}

/// Compute which toolbar regions should be visible.
///
/// The top bar only earns its place when filtering or length changing is
/// enabled. The bottom bar disappears when the summary is hidden and
/// pagination has nothing to page (disabled, or a single page).
pub fn toolbar_visibility(caps: &TableCapabilities, page_count: usize) -> ToolbarVisibility {
    ToolbarVisibility {
        header: caps.filter || caps.length_change,
        footer: !(caps.hide_info && (!caps.paginate || page_count <= 1)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn caps(
        filter: bool,
        length_change: bool,
        paginate: bool,
        hide_info: bool,
    ) -> TableCapabilities {
        TableCapabilities {
            filter,
            length_change,
            sortable: false,
            paginate,
            hide_info,
        }
    }

    #[test]
    fn test_header_needs_filter_or_length_change() {
        assert!(toolbar_visibility(&caps(true, false, true, false), 2).header);
        assert!(toolbar_visibility(&caps(false, true, true, false), 2).header);
        assert!(!toolbar_visibility(&caps(false, false, true, false), 2).header);
    }

    #[test]
    fn test_footer_shown_while_info_is_on() {
        // Info visible: footer stays regardless of paging.
        assert!(toolbar_visibility(&caps(false, false, false, false), 1).footer);
        assert!(toolbar_visibility(&caps(false, false, true, false), 1).footer);
    }

    #[test]
    fn test_footer_hidden_when_info_off_and_nothing_to_page() {
        // Summary hidden and pagination off.
        assert!(!toolbar_visibility(&caps(false, false, false, true), 5).footer);
        // Summary hidden and only one page.
        assert!(!toolbar_visibility(&caps(false, false, true, true), 1).footer);
        // Summary hidden but multiple pages: the buttons still matter.
        assert!(toolbar_visibility(&caps(false, false, true, true), 2).footer);
    }
}
