//! Centralized icon definitions.
//!
//! Maps semantic icon names, and the symbolic [`IconId`] carried by the
//! route table, to lucide icons. Swap the set here to restyle the chrome.

use icondata::Icon;

use crate::models::IconId;

// =============================================================================
// Chrome Icons
// =============================================================================

pub const PANEL_LEFT: Icon = icondata::LuPanelLeft;
pub const CHEVRON_LEFT: Icon = icondata::LuChevronLeft;
pub const CHEVRON_RIGHT: Icon = icondata::LuChevronRight;
pub const CHEVRON_DOWN: Icon = icondata::LuChevronDown;
pub const CHEVRON_UP: Icon = icondata::LuChevronUp;
pub const CHEVRONS_UP_DOWN: Icon = icondata::LuChevronsUpDown;
pub const ELLIPSIS: Icon = icondata::LuEllipsis;
pub const CHECK: Icon = icondata::LuCheck;
pub const CLOSE: Icon = icondata::LuX;
pub const LOG_OUT: Icon = icondata::LuLogOut;
pub const PALETTE: Icon = icondata::LuPalette;
pub const LIGHT: Icon = icondata::LuSun;
pub const DARK: Icon = icondata::LuMoon;
pub const SYSTEM: Icon = icondata::LuMonitor;

// Search palette
pub const SEARCH: Icon = icondata::LuSearch;
pub const ARROW_UP: Icon = icondata::LuArrowUp;
pub const ARROW_DOWN: Icon = icondata::LuArrowDown;
pub const ENTER: Icon = icondata::LuCornerDownLeft;
pub const COMMAND: Icon = icondata::LuCommand;

// Pages
pub const PLUS: Icon = icondata::LuPlus;
pub const MINUS: Icon = icondata::LuMinus;
pub const RESET: Icon = icondata::LuRotateCcw;
pub const FILTERS: Icon = icondata::LuSlidersHorizontal;
pub const ACTIVITY: Icon = icondata::LuActivity;
pub const REVENUE: Icon = icondata::LuDollarSign;
pub const USERS: Icon = icondata::LuUsers;
pub const LOCK: Icon = icondata::LuLock;

/// Icon for a navigation entry.
pub fn nav_icon(id: IconId) -> Icon {
    match id {
        IconId::Dashboard => icondata::LuLayoutDashboard,
        IconId::Users => icondata::LuUsers,
        IconId::Building => icondata::LuBuilding2,
        IconId::Settings => icondata::LuSettings,
        IconId::Circle => icondata::LuCircle,
        IconId::Box => icondata::LuBox,
    }
}
