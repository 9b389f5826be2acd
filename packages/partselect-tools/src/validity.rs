//! Part and model classification.
//!
//! Results are typed; the human-readable sentences live only in the
//! `Display` impls.

use serde::Serialize;
use std::fmt;
use tracing::info;

use crate::page::{SearchPage, MEGA_MODEL, PART_DETAIL};

/// Subheading text only genuine model pages carry.
const SECTIONS_MARKER: &str = "Sections of the";

/// Appliance families the assistant supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ApplianceType {
    Refrigerator,
    Dishwasher,
}

impl ApplianceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Refrigerator => "Refrigerator",
            Self::Dishwasher => "Dishwasher",
        }
    }

    /// Case-sensitive match on the page title; Refrigerator wins ties.
    pub fn from_title(title: &str) -> Option<Self> {
        [Self::Refrigerator, Self::Dishwasher]
            .into_iter()
            .find(|kind| title.contains(kind.as_str()))
    }
}

impl fmt::Display for ApplianceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PartValidity {
    Valid,
    Invalid,
}

impl PartValidity {
    /// Valid iff the container says `PartDetail`. Missing container or
    /// attribute is invalid.
    pub fn classify(page: &SearchPage) -> Self {
        if page.is_page_type(PART_DETAIL) {
            Self::Valid
        } else {
            Self::Invalid
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

impl fmt::Display for PartValidity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Valid => f.write_str("This is a valid part number."),
            Self::Invalid => f.write_str("Part number is invalid."),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ModelValidity {
    Valid(ApplianceType),
    /// A real model page, but not a refrigerator or dishwasher
    UnsupportedAppliance,
    Invalid,
}

impl ModelValidity {
    /// `MegaModel` page whose first subheading contains "Sections of the",
    /// then the appliance type from the title.
    pub fn classify(page: &SearchPage) -> Self {
        if !page.is_page_type(MEGA_MODEL) {
            return Self::Invalid;
        }
        let has_sections = page
            .subheading
            .as_deref()
            .is_some_and(|h| h.contains(SECTIONS_MARKER));
        if !has_sections {
            return Self::Invalid;
        }
        let Some(title) = page.title.as_deref() else {
            return Self::Invalid;
        };

        info!(title = %title, "Model page title");

        match ApplianceType::from_title(title) {
            Some(kind) => Self::Valid(kind),
            None => Self::UnsupportedAppliance,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    pub fn appliance(&self) -> Option<ApplianceType> {
        match self {
            Self::Valid(kind) => Some(*kind),
            _ => None,
        }
    }
}

impl fmt::Display for ModelValidity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Valid(kind) => write!(f, "This is a valid model number for a {kind}."),
            Self::UnsupportedAppliance => {
                f.write_str("Model number is invalid for dishwasher or refrigerator.")
            }
            Self::Invalid => f.write_str("Model number is invalid."),
        }
    }
}
