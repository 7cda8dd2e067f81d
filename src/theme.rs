//! Class names for the pieces of the page whose look depends on state or a variant.

use crate::nav::NavState;

const BUTTON_BASE: &str = "inline-flex items-center justify-center px-6 py-3 rounded-lg font-semibold transition-all duration-200 transform hover:-translate-y-0.5";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
}

impl ButtonVariant {
    pub fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-slate-900 text-white hover:bg-slate-800 shadow-lg hover:shadow-xl border border-transparent",
            ButtonVariant::Secondary => "bg-white text-slate-900 border-2 border-slate-900 hover:bg-slate-50",
            ButtonVariant::Outline => "bg-transparent text-white border-2 border-white/30 hover:bg-white/10",
        }
    }
}

pub fn button_class(variant: ButtonVariant, extra: &str) -> String {
    if extra.is_empty() {
        format!("{} {}", BUTTON_BASE, variant.class())
    } else {
        format!("{} {} {}", BUTTON_BASE, variant.class(), extra)
    }
}

/// Look of the nav bar. Dark text over the hero until the page scrolls, then an opaque bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTone {
    Transparent,
    Opaque,
}

impl From<NavState> for NavTone {
    fn from(state: NavState) -> Self {
        if state.scrolled() {
            NavTone::Opaque
        } else {
            NavTone::Transparent
        }
    }
}

impl NavTone {
    pub fn bar_class(self) -> &'static str {
        match self {
            NavTone::Opaque => "fixed w-full z-50 transition-all duration-300 bg-white/90 backdrop-blur-md shadow-sm py-4",
            NavTone::Transparent => "fixed w-full z-50 transition-all duration-300 bg-transparent py-6",
        }
    }

    pub fn brand_class(self) -> &'static str {
        match self {
            NavTone::Opaque => "text-xl font-bold tracking-tight text-slate-900",
            NavTone::Transparent => "text-xl font-bold tracking-tight text-slate-900 lg:text-white",
        }
    }

    pub fn link_class(self) -> &'static str {
        match self {
            NavTone::Opaque => "text-sm font-medium hover:text-blue-500 transition-colors text-slate-600",
            NavTone::Transparent => "text-sm font-medium hover:text-blue-500 transition-colors text-slate-300 hover:text-white",
        }
    }

    pub fn toggle_class(self) -> &'static str {
        match self {
            NavTone::Opaque => "md:hidden p-2 text-slate-900",
            NavTone::Transparent => "md:hidden p-2 text-slate-900 lg:text-white",
        }
    }

    pub fn contact_variant(self) -> ButtonVariant {
        match self {
            NavTone::Opaque => ButtonVariant::Primary,
            NavTone::Transparent => ButtonVariant::Secondary,
        }
    }

    /// Extra classes layered over the contact button variant.
    pub fn contact_extra(self) -> &'static str {
        match self {
            NavTone::Opaque => "",
            NavTone::Transparent => "bg-white text-slate-900 border-none hover:bg-slate-100",
        }
    }
}
