//! # Navigation
//!
//! Fixed screen topology, modelled after a drawer/stack/tab navigator:
//!
//! ```text
//! Drawer
//! ├── Principal ── Stack
//! │                ├── Tabs ── TabContainer
//! │                │           ├── Home   (champion list)
//! │                │           └── Feed
//! │                └── Detail(Option<ChampionRecord>)
//! └── Sobre
//! ```
//!
//! The stack is never deeper than two entries. The drawer panel is an
//! overlay and does not touch stack or tab state.

use log::debug;

use crate::catalog::ChampionRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawerBranch {
    Principal,
    Sobre,
}

impl DrawerBranch {
    pub const ALL: [DrawerBranch; 2] = [DrawerBranch::Principal, DrawerBranch::Sobre];

    pub fn label(&self) -> &'static str {
        match self {
            DrawerBranch::Principal => "Principal",
            DrawerBranch::Sobre => "Sobre",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Home,
    Feed,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Home, Tab::Feed];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Feed => "Feed",
        }
    }

    pub fn next(&self) -> Tab {
        match self {
            Tab::Home => Tab::Feed,
            Tab::Feed => Tab::Home,
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Tab::Home => 0,
            Tab::Feed => 1,
        }
    }
}

/// An entry of the Principal stack.
#[derive(Debug, Clone, PartialEq)]
pub enum StackEntry {
    Tabs,
    /// Carries the selected record by value; `None` when reached directly.
    Detail(Option<ChampionRecord>),
}

/// The screen currently in front of the user.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Screen<'a> {
    Home,
    Feed,
    Detail(Option<&'a ChampionRecord>),
    Sobre,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Navigator {
    branch: DrawerBranch,
    tab: Tab,
    stack: Vec<StackEntry>,
    drawer_open: bool,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    /// Principal branch, Tabs screen, Home tab, drawer closed.
    pub fn new() -> Self {
        Self {
            branch: DrawerBranch::Principal,
            tab: Tab::Home,
            stack: vec![StackEntry::Tabs],
            drawer_open: false,
        }
    }

    pub fn branch(&self) -> DrawerBranch {
        self.branch
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn is_drawer_open(&self) -> bool {
        self.drawer_open
    }

    pub fn current(&self) -> Screen<'_> {
        if self.branch == DrawerBranch::Sobre {
            return Screen::Sobre;
        }
        match self.stack.last() {
            Some(StackEntry::Detail(payload)) => Screen::Detail(payload.as_ref()),
            Some(StackEntry::Tabs) | None => match self.tab {
                Tab::Home => Screen::Home,
                Tab::Feed => Screen::Feed,
            },
        }
    }

    /// Push Detail carrying `record`. Used from the Home list.
    pub fn select_record(&mut self, record: ChampionRecord) {
        debug!("Navigating to detail for {}", record.id);
        self.open_detail(Some(record));
    }

    /// Show Detail with an optional payload. A Detail already on top has its
    /// payload replaced instead of stacking a second one.
    pub fn open_detail(&mut self, payload: Option<ChampionRecord>) {
        self.branch = DrawerBranch::Principal;
        self.drawer_open = false;
        match self.stack.last_mut() {
            Some(StackEntry::Detail(existing)) => *existing = payload,
            _ => self.stack.push(StackEntry::Detail(payload)),
        }
    }

    /// Pop Detail. Returns false when there is nothing to pop.
    pub fn go_back(&mut self) -> bool {
        if self.branch != DrawerBranch::Principal || self.stack.len() <= 1 {
            return false;
        }
        self.stack.pop();
        true
    }

    pub fn toggle_drawer(&mut self) {
        self.drawer_open = !self.drawer_open;
    }

    /// Switch drawer branch. The Principal stack is kept as-is.
    pub fn open_branch(&mut self, branch: DrawerBranch) {
        debug!("Opening drawer branch {:?}", branch);
        self.branch = branch;
        self.drawer_open = false;
    }

    /// Switch tab. Ignored unless the Tabs screen is visible.
    pub fn select_tab(&mut self, tab: Tab) -> bool {
        if self.branch != DrawerBranch::Principal
            || !matches!(self.stack.last(), Some(StackEntry::Tabs))
        {
            return false;
        }
        self.tab = tab;
        true
    }
}
